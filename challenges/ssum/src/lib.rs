use std::io::BufRead;

pub mod element;
pub mod extract;
pub mod instance;
pub mod report;
pub mod table;

pub use element::Element;
pub use instance::{Instance, Solution, solve};

/// Whitespace token reader over a buffered input stream.
pub struct Scanner {
    reader: Box<dyn BufRead>,
    // tokens of the current line, stored back to front so `pop` yields them in order.
    pending: Vec<String>,
}

impl Scanner {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
            pending: Vec::new(),
        }
    }

    /// Next whitespace separated token, or `None` at end of input.
    pub fn next_token(&mut self) -> std::io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending = line.split_whitespace().rev().map(String::from).collect();
        }
    }
}

/// Output writer that renders into a memory buffer.
pub struct Writer(String);

impl Writer {
    pub fn new() -> Self {
        Self(String::new())
    }

    pub fn println<T: std::fmt::Display>(&mut self, value: T) {
        use std::fmt::Write;
        writeln!(self.0, "{}", value).expect("Failed write");
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}
