//! Command-line argument parsing
//!
//! Flags override the config file; the config file overrides the defaults.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "smartotels-tui",
    about = "The Smartotels brochure, animated in your terminal",
    version,
    after_help = "Examples:\n  smartotels-tui\n  smartotels-tui --frame-rate 30\n  smartotels-tui --config ./config.json --print-config\n  RUST_LOG=smartotels_tui=debug smartotels-tui --log-dir /tmp/smartotels\n"
)]
pub struct Cli {
    /// Path to a custom configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for log files (defaults to <config dir>/logs)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Frames drawn per second
    #[arg(long)]
    pub frame_rate: Option<u32>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    pub print_config: bool,

    /// Save the effective configuration before starting
    #[arg(long)]
    pub write_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["smartotels-tui"]);
        assert!(cli.config.is_none());
        assert!(cli.log_dir.is_none());
        assert!(cli.frame_rate.is_none());
        assert!(!cli.print_config);
        assert!(!cli.write_config);
    }

    #[test]
    fn test_frame_rate_flag() {
        let cli = Cli::parse_from(["smartotels-tui", "--frame-rate", "30"]);
        assert_eq!(cli.frame_rate, Some(30));
    }

    #[test]
    fn test_path_flags() {
        let cli = Cli::parse_from([
            "smartotels-tui",
            "--config",
            "custom.json",
            "--log-dir",
            "/tmp/logs",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.json")));
        assert_eq!(cli.log_dir, Some(PathBuf::from("/tmp/logs")));
    }

    #[test]
    fn test_rejects_non_numeric_frame_rate() {
        assert!(Cli::try_parse_from(["smartotels-tui", "--frame-rate", "fast"]).is_err());
    }
}
