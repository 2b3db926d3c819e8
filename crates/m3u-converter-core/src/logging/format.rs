//! Line formatting for console and file output

use chrono::{DateTime, Local};

use super::level::{decorations, LogLevel, COLOR_RESET};

/// Timestamp format used on every line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time as `YYYY-MM-DD HH:MM:SS`
pub fn timestamp() -> String {
    format_timestamp(&Local::now())
}

pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// `<ts> <label> <color><message><reset>`
///
/// Unrecognized levels get neither a color nor a reset sequence.
pub fn console_line(ts: &str, level: Option<LogLevel>, message: &str) -> String {
    let (label, color) = decorations(level);
    if color.is_empty() {
        format!("{} {} {}", ts, label, message)
    } else {
        format!("{} {} {}{}{}", ts, label, color, message, COLOR_RESET)
    }
}

/// `<ts> <label> <message>\n`, no ANSI codes
pub fn file_line(ts: &str, level: Option<LogLevel>, message: &str) -> String {
    let (label, _) = decorations(level);
    format!("{} {} {}\n", ts, label, message)
}

/// Console notice printed when appending to the log file fails
pub fn write_failure_notice(ts: &str) -> String {
    format!("{} {} Failed to write to log file", ts, LogLevel::Error.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const TS: &str = "2024-03-01 08:05:09";

    #[test]
    fn test_timestamp_format() {
        let time = Local.with_ymd_and_hms(2024, 3, 1, 8, 5, 9).unwrap();
        assert_eq!(format_timestamp(&time), TS);
        assert_eq!(timestamp().len(), TS.len());
    }

    #[test]
    fn test_info_lines() {
        let message = format!("hello {}", "world");
        assert_eq!(
            console_line(TS, Some(LogLevel::Info), &message),
            "2024-03-01 08:05:09 [INFO]  \x1b[97mhello world\x1b[0m"
        );
        assert_eq!(
            file_line(TS, Some(LogLevel::Info), &message),
            "2024-03-01 08:05:09 [INFO]  hello world\n"
        );
    }

    #[test]
    fn test_unrecognized_level_lines() {
        assert_eq!(console_line(TS, None, "hi"), "2024-03-01 08:05:09 [LOG]  hi");
        assert_eq!(file_line(TS, None, "hi"), "2024-03-01 08:05:09 [LOG]  hi\n");
    }

    #[test]
    fn test_write_failure_notice() {
        assert_eq!(
            write_failure_notice(TS),
            "2024-03-01 08:05:09 [ERROR] Failed to write to log file"
        );
    }
}
