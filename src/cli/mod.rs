//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};

/// Convert recorded test-suite lifecycle events into a TAP stream
#[derive(Parser, Debug)]
#[command(name = "tapline")]
#[command(version = "0.1.0")]
#[command(about = "Turn recorded test lifecycle events into TAP output")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert an NDJSON event log to TAP
    Convert(ConvertArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for convert command
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Input NDJSON event log (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Write TAP to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Host framework identifier used to filter stack frames
    #[arg(long)]
    pub framework_token: Option<String>,

    /// Configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

/// Arguments for config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write an example configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "./tapline.yaml")]
        output: String,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a configuration file
    Validate {
        /// Configuration file to check (searches standard locations when omitted)
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Print the effective configuration
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_convert() {
        let args = Args::parse_from(["tapline", "convert", "--input", "run.ndjson"]);
        match args.command {
            Command::Convert(convert) => {
                assert_eq!(convert.input.as_deref(), Some("run.ndjson"));
                assert!(convert.output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
