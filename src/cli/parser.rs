use clap::{Parser, Subcommand};

/// Command-line interface definition for rpegel
/// CLI application to assess permissible noise levels for temporary events
#[derive(Parser)]
#[command(
    name = "rpegel",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple noise assessment CLI: compute permissible event noise levels (simplified TA Lärm style formula)",
    long_about = None
)]
pub struct Cli {
    /// Override config file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (built-in defaults, no config file access)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Compute the maximum allowed average and peak levels for an event
    Assess {
        /// Disturbance class of the event
        #[arg(
            long = "type",
            help = "Event class: n=not disturbing, s=slightly disturbing, d=disturbing"
        )]
        event_type: String,

        /// Zoning of the immission site
        #[arg(long = "zone", help = "Zoning: GI, GE, MK, WA, WR or KUR")]
        zone: String,

        /// Event start (local time)
        #[arg(long = "start", help = "Event start (YYYY-MM-DD HH:MM)")]
        start: String,

        /// Event end (local time)
        #[arg(long = "end", help = "Event end (YYYY-MM-DD HH:MM)")]
        end: String,

        #[arg(long = "impulse", help = "Impulsive noise (k_I = 4 dB)")]
        impulse: bool,

        #[arg(long = "tone", help = "Tonal or informational noise (k_T = 3 dB)")]
        tone: bool,

        #[arg(long = "json", help = "Emit the result as JSON")]
        json: bool,
    },

    /// Compute the rating level L_r from a measured average level
    Rate {
        /// Measured equivalent continuous level
        #[arg(long = "laeq", help = "Measured average level L_Aeq in dB")]
        laeq: f64,

        #[arg(long = "start", help = "Event start (YYYY-MM-DD HH:MM)")]
        start: String,

        #[arg(long = "end", help = "Event end (YYYY-MM-DD HH:MM)")]
        end: String,

        /// Assessment period T_R, adjustable in this prototype variant
        #[arg(
            long = "period",
            default_value_t = 16.0,
            help = "Assessment period T_R in hours (1-24)"
        )]
        period: f64,

        #[arg(long = "impulse", help = "Impulsive noise (k_I = 4 dB)")]
        impulse: bool,

        #[arg(long = "tone", help = "Tonal or informational noise (k_T = 3 dB)")]
        tone: bool,

        #[arg(long = "json", help = "Emit the result as JSON")]
        json: bool,
    },

    /// Print the immission threshold table
    Limits {
        #[arg(long = "zone", help = "Show only the row for this zoning")]
        zone: Option<String>,
    },
}
