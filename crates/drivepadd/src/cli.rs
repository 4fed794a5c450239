use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Debug, Subcommand, PartialEq)]
pub(crate) enum Command {
    /// Log every decoded controller event continuously.
    Log {
        /// A string that identifies the controller device
        search_term: Option<String>,
    },
    /// Measure how many events per second the controller delivers.
    Profile {
        /// A string that identifies the controller device
        search_term: Option<String>,
    },
}

/// Reads a Bluetooth game controller and reduces it to vehicle control state.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Turn debugging information on
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to a controller profile (the built-in Wii U Pro profile is
    /// used when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// The command to run
    #[clap(subcommand)]
    pub command: Command,
}
