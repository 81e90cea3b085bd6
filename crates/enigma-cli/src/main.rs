//! Enigma - an Enigma I rotor cipher machine on the command line
//!
//! # Usage
//!
//! ```bash
//! # Encrypt with the default key (I-II-III, AAA, rings 01, reflector B)
//! enigma encrypt "HELLO WORLD"
//!
//! # Choose rotors, windows, rings and plugboard
//! enigma encrypt --rotors II,IV,V --positions BLA --rings 2,21,12 --plugboard "AV BS CG" "ATTACK AT DAWN"
//!
//! # Produce a shareable message carrying the key
//! enigma encrypt --export "HELLO WORLD"
//!
//! # Decrypt a shared message
//! enigma import "ENIGMA|R:I,II,III;POS:AAA;RING:01,01,01;REF:B;PLUG:|CT:ILBDA AMTAZ"
//! ```

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use console::style;
use enigma_core::Settings;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::KeyArgs;

/// Enigma - an Enigma I rotor cipher machine simulator
#[derive(Parser)]
#[command(name = "enigma")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except results and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file to use instead of the default location
    #[arg(long, global = true, env = "ENIGMA_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt or decrypt text (the machine is reciprocal)
    #[command(visible_alias = "decrypt")]
    Encrypt {
        /// Text to process (reads --input or stdin when omitted)
        text: Option<String>,

        #[command(flatten)]
        key: KeyArgs,

        /// Read text from a file
        #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Print a shareable ENIGMA|...|CT:... message instead of bare output
        #[arg(short, long)]
        export: bool,

        /// Output in JSON format
        #[arg(long, conflicts_with = "export")]
        json: bool,

        /// Split output letters into groups of N (0 disables)
        #[arg(short, long, value_name = "N")]
        group: Option<usize>,
    },

    /// Decrypt a shared ENIGMA|...|CT:... message
    Import {
        /// The exported message ("-" reads stdin)
        message: String,

        /// Print the key carried by the message
        #[arg(short, long)]
        show_settings: bool,

        /// Reject messages whose plugboard reuses a letter
        #[arg(long)]
        strict_plugboard: bool,
    },

    /// Check that a fresh machine with the same key decrypts its own output
    Roundtrip {
        /// Text to test with
        #[arg(default_value = "HELLO WORLD")]
        text: String,

        #[command(flatten)]
        key: KeyArgs,
    },

    /// List the rotors and reflectors in the catalog
    Rotors {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Show or initialize the configuration file
    Config {
        /// Create a configuration file with default values
        #[arg(long)]
        init: bool,

        /// Print the configuration file path
        #[arg(long)]
        path: bool,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", style("Error:").red().bold(), e);

        // Show cause chain in verbose mode
        if std::env::var("RUST_BACKTRACE").is_ok() {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  {} {}", style("Caused by:").yellow(), cause);
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if cli.quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::new("warn")
    };

    // Results go to stdout; keep diagnostics on stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let config_path = cli.config.clone().or_else(Settings::config_path);
    let settings = Settings::load_from_path(config_path.clone());
    let quiet = cli.quiet || settings.behavior.quiet;

    match cli.command {
        Commands::Encrypt {
            text,
            key,
            input,
            export,
            json,
            group,
        } => commands::encrypt::execute(
            commands::encrypt::EncryptArgs {
                text,
                key,
                input,
                export,
                json,
                group: group.unwrap_or(settings.behavior.group_size),
            },
            &settings,
        ),
        Commands::Import {
            message,
            show_settings,
            strict_plugboard,
        } => commands::import::execute(
            &message,
            show_settings,
            strict_plugboard || settings.behavior.strict_plugboard,
            quiet,
        ),
        Commands::Roundtrip { text, key } => {
            commands::roundtrip::execute(&text, &key, &settings, quiet)
        }
        Commands::Rotors { json } => commands::rotors::execute(json),
        Commands::Config { init, path, json } => {
            commands::config::execute(commands::config::ConfigArgs {
                init,
                path,
                json,
                silent: quiet,
                config_file: config_path,
            })
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}
