//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "sand-clock")]
#[command(about = "A five-minute countdown display with start/stop controls")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20300")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not render frames to the console
    #[arg(short, long)]
    pub quiet: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["sand-clock"]);
        assert_eq!(config.address(), "127.0.0.1:20300");
        assert_eq!(config.log_level(), "info");
        assert!(!config.quiet);
    }

    #[test]
    fn test_flags() {
        let config = Config::parse_from(["sand-clock", "-p", "8080", "--host", "0.0.0.0", "-v", "-q"]);
        assert_eq!(config.address(), "0.0.0.0:8080");
        assert_eq!(config.log_level(), "debug");
        assert!(config.quiet);
    }
}
