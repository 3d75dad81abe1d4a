use std::cell::{RefCell, RefMut};

/// Owns the sink the commands report to: stdout for the binary, a buffer in
/// tests.
pub struct Session {
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Session {
    pub fn new(writer: Box<dyn std::io::Write>) -> Self {
        Session {
            writer: RefCell::new(writer),
        }
    }

    pub fn writer(&self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}
