use std::{
    fs,
    io::{self, BufRead, BufWriter, Write},
    path::{Path, PathBuf},
    time::SystemTime,
};

/// A line-oriented input/output adapter for the calculator service.
///
/// Handlers read statement lines and write result lines. File-based handlers
/// additionally support continuous monitoring: polling for content that
/// appeared after the initial read, and rewinding to re-read the input from
/// the start.
pub trait IoHandler {
    /// Reads the next input line, without its trailing newline.
    ///
    /// Returns `None` at end of input.
    fn read_line(&mut self) -> Option<String>;

    /// Writes one output line.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the write fails.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Checks whether input has changed since it was last read.
    fn has_new_content(&mut self) -> bool {
        false
    }

    /// Rewinds the reader to the beginning of the (re-read) input.
    ///
    /// # Errors
    /// Returns the underlying I/O error if re-reading fails.
    fn reset(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Returns `true` when this handler can detect new content over time.
    fn supports_monitoring(&self) -> bool {
        false
    }
}

/// File-based I/O: reads requests from an input file, writes results to an
/// output file, and detects new input via the file's modification time.
pub struct FileIo {
    input_path:    PathBuf,
    lines:         Vec<String>,
    cursor:        usize,
    last_modified: Option<SystemTime>,
    writer:        BufWriter<fs::File>,
}

impl FileIo {
    /// Opens the input and output files.
    ///
    /// The whole input file is read up front; subsequent reads are served
    /// from memory until [`IoHandler::reset`] re-reads the file.
    ///
    /// # Errors
    /// Fails when the input file does not exist or either file cannot be
    /// opened.
    pub fn new(input: &Path, output: &Path) -> io::Result<Self> {
        if !input.exists() {
            return Err(io::Error::new(io::ErrorKind::NotFound,
                                      format!("Input file does not exist: {}", input.display())));
        }

        let contents = fs::read_to_string(input)?;
        let last_modified = fs::metadata(input)?.modified().ok();

        Ok(Self { input_path: input.to_path_buf(),
                  lines: contents.lines().map(str::to_string).collect(),
                  cursor: 0,
                  last_modified,
                  writer: BufWriter::new(fs::File::create(output)?) })
    }
}

impl IoHandler for FileIo {
    fn read_line(&mut self) -> Option<String> {
        let line = self.lines.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(line)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")?;
        // Flush per line so monitoring users see results as they land.
        self.writer.flush()
    }

    fn has_new_content(&mut self) -> bool {
        let Ok(metadata) = fs::metadata(&self.input_path) else {
            return false;
        };
        let modified = metadata.modified().ok();
        if modified > self.last_modified {
            self.last_modified = modified;
            return true;
        }
        false
    }

    fn reset(&mut self) -> io::Result<()> {
        let contents = fs::read_to_string(&self.input_path)?;
        self.lines = contents.lines().map(str::to_string).collect();
        self.cursor = 0;
        self.last_modified = fs::metadata(&self.input_path)?.modified().ok();
        Ok(())
    }

    fn supports_monitoring(&self) -> bool {
        true
    }
}

/// Console I/O: reads from stdin, writes to stdout. Does not support
/// monitoring, so the application processes one batch and stops.
#[derive(Default)]
pub struct ConsoleIo;

impl ConsoleIo {
    /// Creates a console handler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl IoHandler for ConsoleIo {
    fn read_line(&mut self) -> Option<String> {
        let mut buffer = String::new();
        match io::stdin().lock().read_line(&mut buffer) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                while buffer.ends_with('\n') || buffer.ends_with('\r') {
                    buffer.pop();
                }
                Some(buffer)
            },
        }
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")
    }
}

/// Splits the handler's remaining input into discrete requests.
///
/// A request is an ordered sequence of non-blank trimmed lines; a blank line
/// ends the current request, and end of input ends the final one. A line
/// equal to `exit` (case-insensitive) anywhere signals whole-program
/// termination.
///
/// # Returns
/// - `Some(requests)`: All requests read, possibly empty.
/// - `None`: The exit sentinel was seen.
pub fn read_all_requests(io: &mut dyn IoHandler) -> Option<Vec<Vec<String>>> {
    let mut requests = Vec::new();
    let mut current = Vec::new();

    loop {
        match io.read_line() {
            None => {
                if !current.is_empty() {
                    requests.push(current);
                }
                return Some(requests);
            },
            Some(line) => {
                let line = line.trim();
                if line.eq_ignore_ascii_case("exit") {
                    return None;
                }
                if line.is_empty() {
                    if !current.is_empty() {
                        requests.push(std::mem::take(&mut current));
                    }
                } else {
                    current.push(line.to_string());
                }
            },
        }
    }
}
