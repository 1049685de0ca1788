use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimeRecorder
/// Stopwatch CLI that records activity sessions as JSON
#[derive(Parser)]
#[command(
    name = "rtimerecorder",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small stopwatch CLI: time your activities, save sessions as JSON and see where the time went",
    long_about = None
)]
pub struct Cli {
    /// Override the sessions directory (where `save` writes)
    #[arg(global = true, long = "dir", value_name = "DIR")]
    pub dir: Option<String>,

    /// Run in test mode (default config, no config file or journal writes)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and the sessions directory
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Start an interactive stopwatch session
    Run {
        /// Activity label to start with (free text or a preset number)
        #[arg(long, short)]
        activity: Option<String>,

        /// Refresh the elapsed-time readout continuously on stderr
        #[arg(long)]
        live: bool,
    },

    /// List the sessions of a saved file, most recent first
    List {
        /// Session file (JSON)
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Show total time per activity of a saved file
    Summary {
        /// Session file (JSON)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Draw the totals as a chart
        #[arg(long)]
        chart: bool,
    },

    /// Export a saved session file to CSV or JSON
    Export {
        /// Session file (JSON) to read
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Output file path
        #[arg(long, value_name = "OUT")]
        out: String,

        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Export per-activity totals instead of single sessions
        #[arg(long)]
        summary: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the operation journal
    Log {
        #[arg(long = "print", help = "Print the journal entries")]
        print: bool,
    },
}
