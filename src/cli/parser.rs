use clap::{Parser, Subcommand};

/// Command-line interface definition for rSmokelog
#[derive(Parser)]
#[command(
    name = "rsmokelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track cigarettes, keep a daily count and stretch the wait between them (SQLite-backed)",
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

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Report keys missing from the configuration file")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing keys with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a cigarette now (refused while quitting mode says wait)
    Light,

    /// Show today's count, time since last and quitting-mode status
    Status,

    /// Show the most recent records, newest first
    History {
        #[arg(long, short, help = "How many records to show (default from config)")]
        limit: Option<usize>,
    },

    /// Delete the whole history
    Clear {
        #[arg(long, short, help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Reset today's counter to zero (history is kept)
    Reset {
        #[arg(long, short, help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Turn quitting mode on/off and change its settings
    Quit {
        #[arg(long, conflicts_with_all = ["off", "toggle"], help = "Enable quitting mode")]
        on: bool,

        #[arg(long, conflicts_with = "toggle", help = "Disable quitting mode")]
        off: bool,

        #[arg(long, help = "Switch quitting mode on or off")]
        toggle: bool,

        #[arg(
            long,
            value_name = "MINUTES",
            allow_negative_numbers = true,
            help = "Initial wait time in minutes (1-1440)"
        )]
        base: Option<i64>,

        #[arg(
            long,
            value_name = "PERCENT",
            allow_negative_numbers = true,
            help = "Daily extension percentage (1-100)"
        )]
        growth: Option<i64>,
    },

    /// Manage the persisted floating-icon placement
    Ui {
        #[arg(long, conflicts_with = "expand", help = "Switch to the minimized icon view")]
        minimize: bool,

        #[arg(long, help = "Switch back to the full view")]
        expand: bool,

        #[arg(
            long,
            value_name = "X,Y",
            allow_hyphen_values = true,
            help = "Icon position in pixels"
        )]
        position: Option<String>,

        #[arg(
            long,
            value_name = "WxH",
            requires = "position",
            help = "Viewport size used to clamp --position"
        )]
        viewport: Option<String>,
    },

    /// Refresh the status once per second, applying day changes as they happen
    Watch {
        #[arg(long, value_name = "N", help = "Stop after N ticks")]
        ticks: Option<u64>,
    },
}
