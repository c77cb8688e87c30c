//! Access log format module
//!
//! One entry per completed request, formatted as a single line.

use chrono::Local;

/// Access log entry containing the request/response information the server
/// records for one served request.
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client socket address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request URI
    pub uri: String,
    /// Recorded status code
    pub status: u16,
}

impl AccessLogEntry {
    /// Create a new access log entry with the current timestamp
    pub fn new(remote_addr: String, method: String, uri: String, status: u16) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            uri,
            status,
        }
    }

    /// Format the entry as one log line:
    /// `$remote_addr - [$time_local] "$method $uri" $status`
    pub fn format(&self) -> String {
        format!(
            "{} - [{}] \"{} {}\" {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.uri,
            self.status,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_contains_all_fields() {
        let entry = AccessLogEntry::new(
            "192.168.1.1:51234".to_string(),
            "GET".to_string(),
            "/".to_string(),
            200,
        );
        let line = entry.format();
        assert!(line.contains("192.168.1.1:51234"));
        assert!(line.contains("\"GET /\""));
        assert!(line.ends_with(" 200"));
    }

    #[test]
    fn test_format_is_single_line() {
        let entry = AccessLogEntry::new(
            "127.0.0.1:8081".to_string(),
            "GET".to_string(),
            "/videos?id=42".to_string(),
            200,
        );
        assert!(!entry.format().contains('\n'));
    }
}
