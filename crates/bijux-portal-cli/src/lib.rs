#![forbid(unsafe_code)]
//! `bijux-portal` operator CLI.
//!
//! Thin shell over the portal crates: it owns argument parsing, config
//! discovery, file I/O for checklist state and the exit-code contract.

mod ack_store;
mod actions;
mod commands;
mod helpers;
mod workspace;

use bijux_portal_core::{ErrorCode, ExitCode, MachineError};
use clap::{error::ErrorKind, ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Generator, Shell};
use std::path::PathBuf;
use std::process::ExitCode as ProcessExitCode;

pub use ack_store::{AckStoreError, JsonFileAckStore};

use workspace::load_workspace;

use commands::{ChecklistCommand, IngestArgs, RenderArgs, ValidateCommand};

pub const CRATE_NAME: &str = "bijux-portal-cli";

const BIJUX_HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
Usage: {usage}

Options:
{options}

Commands:
{subcommands}
{after-help}";

#[derive(Parser)]
#[command(name = "bijux-portal")]
#[command(version)]
#[command(about = "Employee portal manifest operations CLI")]
#[command(help_template = BIJUX_HELP_TEMPLATE)]
#[command(
    after_help = "Environment:\n  BIJUX_LOG_LEVEL       Log verbosity override\n  BIJUX_PORTAL_CONFIG   Explicit portal.toml path"
)]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[arg(long, global = true, default_value_t = false)]
    quiet: bool,
    #[arg(long, global = true, action = ArgAction::Count)]
    verbose: u8,
    /// Explicit portal.toml; relative config paths resolve against its directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project manifests and policy catalogs.
    Validate {
        #[command(subcommand)]
        command: ValidateCommand,
    },
    /// Print the display model of a project page.
    Render(RenderArgs),
    /// Inspect or change persisted checklist acknowledgments.
    Checklist {
        #[command(subcommand)]
        command: ChecklistCommand,
    },
    /// Scaffold a starter project manifest from the asset tree.
    Ingest(IngestArgs),
    /// Print the effective configuration and where it came from.
    Config,
    Version,
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Clone, Copy)]
pub(crate) struct LogFlags {
    pub quiet: bool,
    pub verbose: u8,
}

#[derive(Clone, Copy)]
pub(crate) struct OutputMode {
    pub json: bool,
}

#[must_use]
pub fn main_entry() -> ProcessExitCode {
    let wants_json = std::env::args().any(|arg| arg == "--json");
    match run() {
        Ok(()) => ProcessExitCode::from(ExitCode::Success as u8),
        Err(err) => {
            emit_error(&err, wants_json);
            ProcessExitCode::from(err.exit_code as u8)
        }
    }
}

fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{err}");
                return Ok(());
            }
            _ => {
                return Err(CliError::new(
                    ErrorCode::UsageError,
                    "invalid command line arguments",
                )
                .with_detail("error", err.to_string()));
            }
        },
    };
    let output_mode = OutputMode { json: cli.json };
    let log_flags = LogFlags {
        quiet: cli.quiet,
        verbose: cli.verbose,
    };
    helpers::init_tracing(log_flags, output_mode);

    let command = cli
        .command
        .ok_or_else(|| CliError::new(ErrorCode::UsageError, "missing command; see --help"))?;

    match command {
        Commands::Completion { shell } => {
            print_completion(shell);
            Ok(())
        }
        Commands::Version => actions::run_version(output_mode),
        Commands::Config => {
            let workspace = load_workspace(cli.config.as_deref())?;
            actions::run_config(&workspace, output_mode)
        }
        Commands::Validate { command } => {
            let workspace = load_workspace(cli.config.as_deref())?;
            actions::run_validate(command, &workspace, output_mode)
        }
        Commands::Render(args) => {
            let workspace = load_workspace(cli.config.as_deref())?;
            actions::run_render(args, &workspace, output_mode)
        }
        Commands::Checklist { command } => {
            let workspace = load_workspace(cli.config.as_deref())?;
            actions::run_checklist(command, &workspace, output_mode)
        }
        Commands::Ingest(args) => {
            let workspace = load_workspace(cli.config.as_deref())?;
            actions::run_ingest(args, &workspace, output_mode)
        }
    }
}

fn print_completion<G: Generator>(generator: G) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(generator, &mut command, name, &mut std::io::stdout());
}

#[derive(Debug)]
pub(crate) struct CliError {
    pub exit_code: ExitCode,
    pub machine: MachineError,
}

impl CliError {
    pub(crate) fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            exit_code: code.exit_code(),
            machine: MachineError::new(code, message),
        }
    }

    #[must_use]
    pub(crate) fn with_detail(mut self, key: &str, value: impl Into<String>) -> Self {
        self.machine = self.machine.with_detail(key, value);
        self
    }

    pub(crate) fn internal(message: String) -> Self {
        Self::new(ErrorCode::Internal, message)
    }
}

fn emit_error(error: &CliError, machine_json: bool) {
    if machine_json {
        match serde_json::to_string(&error.machine) {
            Ok(payload) => eprintln!("{payload}"),
            Err(_) => eprintln!(
                "{{\"code\":\"internal\",\"message\":\"failed to encode structured error\",\"details\":{{}}}}"
            ),
        }
    } else {
        eprintln!("{}", error.machine.message);
        for (key, value) in &error.machine.details {
            eprintln!("  {key}: {value}");
        }
    }
}
