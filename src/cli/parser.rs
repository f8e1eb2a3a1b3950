use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rTablets
/// CLI application to track medication stock with SQLite
#[derive(Parser)]
#[command(
    name = "rtablets",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple medication stock CLI: track daily doses, pills on hand and when to reorder",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Morning / afternoon / night dose flags of `add`.
#[derive(Args, Debug, Clone, Default)]
pub struct DoseArgs {
    #[arg(long, help = "Take a dose in the morning")]
    pub morning: bool,

    #[arg(long, help = "Take a dose in the afternoon")]
    pub afternoon: bool,

    #[arg(long, help = "Take a dose at night")]
    pub night: bool,
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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a new tablet
    Add {
        /// Tablet name (unique)
        name: String,

        #[command(flatten)]
        doses: DoseArgs,

        #[arg(
            long = "strip-size",
            allow_negative_numbers = true,
            help = "Tablets per strip (at least 1)"
        )]
        strip_size: i64,

        #[arg(
            long = "strips",
            default_value_t = 0,
            allow_negative_numbers = true,
            help = "Number of strips owned"
        )]
        strips: i64,
    },

    /// Update an existing tablet (omitted fields keep their stored value)
    Update {
        /// Tablet name
        name: String,

        #[arg(long, conflicts_with = "no_morning")]
        morning: bool,
        #[arg(long = "no-morning")]
        no_morning: bool,

        #[arg(long, conflicts_with = "no_afternoon")]
        afternoon: bool,
        #[arg(long = "no-afternoon")]
        no_afternoon: bool,

        #[arg(long, conflicts_with = "no_night")]
        night: bool,
        #[arg(long = "no-night")]
        no_night: bool,

        #[arg(
            long = "strip-size",
            allow_negative_numbers = true,
            help = "Tablets per strip"
        )]
        strip_size: Option<i64>,

        #[arg(
            long = "strips",
            allow_negative_numbers = true,
            help = "Number of strips owned"
        )]
        strips: Option<i64>,
    },

    /// Delete a tablet by name
    Del {
        /// Tablet name
        name: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List tablets with projected days left and reorder warnings
    List {
        #[arg(long, help = "Show only the tablet with this name")]
        name: Option<String>,

        #[arg(
            long,
            value_name = "TIMESTAMP",
            help = "Project stock at this time (YYYY-MM-DD HH:MM:SS) instead of now"
        )]
        at: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing backup file")]
        force: bool,
    },

    /// Export tablets with their projections
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Absolute output path")]
        file: String,

        #[arg(
            long,
            value_name = "TIMESTAMP",
            help = "Project stock at this time (YYYY-MM-DD HH:MM:SS) instead of now"
        )]
        at: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

/// Resolve a `--flag` / `--no-flag` pair against the stored value.
pub fn toggle(on: bool, off: bool, current: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        current
    }
}
