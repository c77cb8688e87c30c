// Command-line flags module
// All three flags are parsed once at startup and immutable afterwards.

use clap::Parser;
use std::path::PathBuf;

/// Video streaming server.
#[derive(Parser, Debug)]
#[command(name = "gogostream", about = "Video streaming server", version)]
pub struct Args {
    /// Serving port.
    #[arg(short = 'p', long = "port", default_value_t = 8080)]
    pub port: u16,

    /// Videos root directory. Accepted and echoed at startup; reserved for
    /// file serving, no route consumes it yet.
    #[arg(short = 'd', long = "dir", default_value_os_t = default_video_dir())]
    pub dir: PathBuf,

    /// Logging path.
    #[arg(short = 'l', long = "log", default_value = "gogostream.log")]
    pub log: PathBuf,
}

/// Default videos root is the user's home directory, or the working
/// directory when the home directory cannot be resolved.
fn default_video_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["gogostream"]).unwrap();
        assert_eq!(args.port, 8080);
        assert_eq!(args.log, PathBuf::from("gogostream.log"));
        assert_eq!(args.dir, default_video_dir());
    }

    #[test]
    fn test_short_flags() {
        let args =
            Args::try_parse_from(["gogostream", "-p", "9090", "-d", "/videos", "-l", "srv.log"])
                .unwrap();
        assert_eq!(args.port, 9090);
        assert_eq!(args.dir, PathBuf::from("/videos"));
        assert_eq!(args.log, PathBuf::from("srv.log"));
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Args::try_parse_from(["gogostream", "-p", "notaport"]).is_err());
    }
}
