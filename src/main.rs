use addlines::commands::diff::DiffOptions;
use addlines::commands::extract::ExtractOptions;
use addlines::domain::{DEFAULT_CONTEXT_LINES, DEFAULT_OUTPUT_FILE};
use addlines::logging::init_logging;
use addlines::session::Session;
use clap::{Parser, Subcommand};
use colored::Colorize;
use is_terminal::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "addlines",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Save the lines added between two text files",
    long_about = "Compares a base file with an altered file using a unified diff \
    and saves the lines that were added in the altered file, followed by an empty \
    line and a closing `save` line.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "extract",
        about = "Save the lines added in the altered file",
        long_about = "This command diffs the altered file against the base file and writes \
        every added line to the output file, followed by an empty line and a `save` line."
    )]
    Extract {
        #[arg(index = 1, help = "The base file")]
        base: PathBuf,
        #[arg(index = 2, help = "The altered file")]
        altered: PathBuf,
        #[arg(
            short,
            long,
            default_value = DEFAULT_OUTPUT_FILE,
            help = "Where to save the added lines (`.txt` is appended when there is no extension)"
        )]
        output: PathBuf,
    },
    #[command(
        name = "diff",
        about = "Show the unified diff between two files",
        long_about = "This command prints the unified diff of the altered file against the base file."
    )]
    Diff {
        #[arg(index = 1, help = "The base file")]
        base: PathBuf,
        #[arg(index = 2, help = "The altered file")]
        altered: PathBuf,
        #[arg(
            short = 'U',
            long = "unified",
            default_value_t = DEFAULT_CONTEXT_LINES,
            help = "Lines of context around each change"
        )]
        context: usize,
    },
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let session = Session::new(Box::new(std::io::stdout()));

    match cli.command {
        Commands::Extract {
            base,
            altered,
            output,
        } => session.extract(&ExtractOptions {
            base,
            altered,
            output,
        })?,
        Commands::Diff {
            base,
            altered,
            context,
        } => session.diff(&DiffOptions {
            base,
            altered,
            context,
        })?,
    }

    session.writer().flush()?;

    Ok(())
}

fn main() {
    init_logging();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {e}", "An error occurred:".red());
        std::process::exit(1);
    }
}
