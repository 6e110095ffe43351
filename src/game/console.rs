//! Line-oriented I/O boundary between the engine and whoever plays.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Blocking line source and sink.
pub trait Console {
    /// Read one line without its terminator. `Ok(None)` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write one full line.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Write a prompt that the answer is typed after.
    fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.write_line(text)
    }
}

/// Console over any reader/writer pair, stdin/stdout by default.
pub struct StdConsole<R = io::StdinLock<'static>, W = io::Stdout> {
    reader: R,
    writer: W,
}

impl StdConsole {
    /// Console on the process's stdin and stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn with_io(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        // Undecodable bytes become U+FFFD, which input validation rejects
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.writer, "{text}")?;
        self.writer.flush()
    }
}

/// In-memory console: replays scripted input and records everything
/// written, one entry per line or prompt.
#[derive(Clone, Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Everything written so far.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Whether some output line equals `line`.
    #[must_use]
    pub fn printed(&self, line: &str) -> bool {
        self.output.iter().any(|l| l == line)
    }

    /// Input lines not yet read.
    #[must_use]
    pub fn unread(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}
