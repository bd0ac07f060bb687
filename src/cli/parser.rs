use crate::core::share::ShareTarget;
use crate::export::ExportLanguage;
use clap::{Parser, Subcommand};

/// Command-line interface definition for workhours
/// CLI application to track working hours against weekly targets
#[derive(Parser)]
#[command(
    name = "workhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Personal work-hours tracker: timer, manual entries, weekly targets, reports and XLSX export",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the local state file (running timer, signed-in user)
    #[arg(global = true, long = "state")]
    pub state: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a local account
    Signup {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long = "confirm", help = "Repeat the password")]
        confirm: String,
    },

    /// Sign in with an existing account
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Sign out of the current account
    Logout,

    /// Show the signed-in account
    Whoami,

    /// Start the work timer
    Start,

    /// Stop the timer and record the session
    Stop,

    /// Show the timer state and elapsed time
    Status {
        #[arg(long, short = 'w', help = "Redraw the elapsed time every second")]
        watch: bool,

        /// Stop watching after N redraws
        #[arg(long, hide = true, requires = "watch")]
        ticks: Option<u64>,
    },

    /// Record a manually entered time range
    Manual {
        /// Start time (HH:MM)
        #[arg(long = "start", help = "Start time (HH:MM)")]
        start: Option<String>,

        /// End time (HH:MM)
        #[arg(long = "end", help = "End time (HH:MM)")]
        end: Option<String>,

        /// Date of the entry (YYYY-MM-DD), today when omitted
        #[arg(long = "date", help = "Date of the entry (YYYY-MM-DD), default today")]
        date: Option<String>,
    },

    /// Mark today as a vacation or sick day
    Mark {
        /// vacation | sick
        kind: String,
    },

    /// List all work records with cumulative hours
    List,

    /// Draw actual vs. target hours per record
    Chart {
        #[arg(long, help = "Width of the longest bar (default from config)")]
        width: Option<usize>,
    },

    /// Export the work records to an XLSX file
    Export {
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, value_enum, help = "Header language (default from config)")]
        lang: Option<ExportLanguage>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Open a pre-filled WhatsApp or email composer
    Share {
        #[arg(value_enum)]
        target: ShareTarget,

        #[arg(long = "print", help = "Only print the link, do not open it")]
        print: bool,
    },

    /// Delete all of your work records
    Reset {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show or change the weekly target hours
    Settings {
        #[arg(long)]
        sun: Option<f64>,
        #[arg(long)]
        mon: Option<f64>,
        #[arg(long)]
        tue: Option<f64>,
        #[arg(long)]
        wed: Option<f64>,
        #[arg(long)]
        thu: Option<f64>,
        #[arg(long)]
        fri: Option<f64>,
        #[arg(long)]
        sat: Option<f64>,
    },
}
