use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("KENNEL_GIT_HASH");
    const IS_RELEASE: &str = env!("KENNEL_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "kennel", bin_name = "kennel", version = get_version())]
#[command(about = "A registry for pets and pack animals", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Registry file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new animal
    #[command(alias = "new", display_order = 1)]
    Add {
        /// dog, cat, hamster, horse, camel or donkey
        kind: String,

        name: String,

        /// Birth date as YYYY-MM-DD
        birth_date: NaiveDate,

        /// Comma-separated commands the animal already knows
        #[arg(short, long, default_value = "")]
        commands: String,

        /// Add even if an identical animal is already registered
        #[arg(long)]
        force: bool,
    },

    /// List all animals, oldest first
    #[command(alias = "ls", display_order = 2)]
    List,

    /// List animals of one kind
    #[command(display_order = 3)]
    Filter {
        /// dog, cat, hamster, horse, camel or donkey
        kind: String,
    },

    /// Show head counts per category and kind
    #[command(alias = "all", display_order = 4)]
    Summary,

    /// Show the commands an animal knows
    #[command(name = "commands", display_order = 10)]
    ListCommands { id: u64 },

    /// Teach an animal a new command
    #[command(display_order = 11)]
    Train {
        id: u64,

        /// The command (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        command: Vec<String>,
    },

    /// Replace an animal's name, birth date and commands
    #[command(alias = "e", display_order = 12)]
    Edit {
        id: u64,

        name: String,

        /// Birth date as YYYY-MM-DD
        birth_date: NaiveDate,

        /// Comma-separated commands, replacing the current ones
        #[arg(short, long, default_value = "")]
        commands: String,
    },

    /// Delete an animal
    #[command(alias = "rm", display_order = 13)]
    Delete { id: u64 },

    /// Interactive menu (the default when no command is given)
    #[command(display_order = 20)]
    Shell,

    /// Get or set configuration
    #[command(display_order = 21)]
    Config {
        /// Configuration key (data-file or locale)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Installs the stderr log subscriber. `RUST_LOG` wins when set.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "kennel=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
