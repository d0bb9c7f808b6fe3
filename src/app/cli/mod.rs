//! CLI Adapter.

mod resolve;
mod verify;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use env_logger::{Builder, Env};

use crate::domain::{AppError, BuildConfiguration, Platform};

#[derive(Parser)]
#[command(name = "depstage")]
#[command(version)]
#[command(
    about = "Locate, stage, and register prebuilt native libraries at build time",
    long_about = None
)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

/// Target selection shared by `resolve` and `status`.
#[derive(clap::Args)]
struct TargetArgs {
    /// Staging manifest, or the directory holding depstage.toml
    #[arg(short, long, default_value = "depstage.toml")]
    manifest: PathBuf,
    /// Build configuration
    #[arg(short, long, value_enum, default_value_t = ConfigurationArg::Release)]
    configuration: ConfigurationArg,
    /// Target platform (windows, linux, macos); defaults to the manifest, then the host
    #[arg(long)]
    platform: Option<Platform>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ConfigurationArg {
    Debug,
    Release,
}

impl From<ConfigurationArg> for BuildConfiguration {
    fn from(arg: ConfigurationArg) -> Self {
        match arg {
            ConfigurationArg::Debug => BuildConfiguration::Debug,
            ConfigurationArg::Release => BuildConfiguration::Release,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Defines,
    Cargo,
}

#[derive(Subcommand)]
enum Commands {
    /// Locate, validate, stage, and register every component
    #[clap(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        target: TargetArgs,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show which dynamic libraries a resolve would copy
    #[clap(visible_alias = "st")]
    Status {
        #[command(flatten)]
        target: TargetArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check a staging directory against a names definition
    #[clap(visible_alias = "v")]
    Verify {
        /// Staging directory
        #[arg(short, long)]
        dir: PathBuf,
        /// Value of the names definition
        #[arg(short, long, allow_hyphen_values = true)]
        names: String,
        /// Platform whose dynamic library extension is expected
        #[arg(long)]
        platform: Option<Platform>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // A second init in the same process is a no-op.
    let _ = Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Resolve { target, format } => resolve::run_resolve(target, format),
        Commands::Status { target, json } => resolve::run_status(target, json),
        Commands::Verify { dir, names, platform } => {
            verify::run_verify(dir, &names, platform.unwrap_or_else(Platform::current))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
