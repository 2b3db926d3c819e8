//! Console sinks

use parking_lot::Mutex;

/// Destination for colored console lines
pub trait ConsoleSink: Send + Sync {
    /// Write one complete line (without trailing newline)
    fn write_line(&self, line: &str);
}

/// A console sink that prints to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl ConsoleSink for StdoutConsole {
    fn write_line(&self, line: &str) {
        println!("{}", line);
    }
}

/// A console sink that keeps lines in memory
///
/// Useful for testing or when the host collects output itself.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: Mutex<Vec<String>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of all captured lines
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl ConsoleSink for MemoryConsole {
    fn write_line(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_console() {
        let console = MemoryConsole::new();
        assert!(console.is_empty());

        console.write_line("first");
        console.write_line("second");
        assert_eq!(console.len(), 2);
        assert_eq!(console.lines(), vec!["first", "second"]);

        console.clear();
        assert!(console.is_empty());
    }

    #[test]
    fn test_stdout_console() {
        // Just make sure it doesn't panic
        StdoutConsole::new().write_line("stdout line");
    }
}
