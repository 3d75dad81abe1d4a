use env_logger::Env;
use std::io::Write;

/// Initializes `env_logger` from `RUST_LOG`, defaulting to `warn`.
///
/// Calling it more than once is harmless.
pub fn init_logging() {
    let env = Env::default().default_filter_or("warn");

    let result = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            let target = record
                .target()
                .strip_prefix("addlines::")
                .unwrap_or(record.target())
                .replace("::", "/");

            writeln!(
                buf,
                "[{}] {} - {}:{} {}",
                record.level(),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                target,
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init();

    if result.is_err() {
        log::trace!("logger already initialized");
    }
}
