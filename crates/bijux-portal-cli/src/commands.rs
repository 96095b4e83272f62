use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Subcommand)]
pub(crate) enum ValidateCommand {
    /// Validate one project manifest.
    Project {
        path: PathBuf,
        #[command(flatten)]
        common: ValidateArgs,
    },
    /// Validate a policy catalog.
    Catalog {
        /// Defaults to `paths.policy_catalog` from the config.
        path: Option<PathBuf>,
    },
    /// Validate every manifest in a directory as one batch.
    Batch {
        /// Defaults to `paths.projects_dir` from the config.
        dir: Option<PathBuf>,
        #[command(flatten)]
        common: ValidateArgs,
    },
}

#[derive(Args, Clone)]
pub(crate) struct ValidateArgs {
    /// Policy catalog to resolve references against.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// Fail on any finding, not only fatal ones.
    #[arg(long, default_value_t = false)]
    pub strict: bool,
    /// Also check that attachment and source-email paths exist.
    #[arg(long, default_value_t = false)]
    pub check_links: bool,
    /// Also flag ids that do not follow the PREFIX-YYYY-MM-DD convention.
    #[arg(long, default_value_t = false)]
    pub lint_ids: bool,
}

#[derive(Subcommand)]
pub(crate) enum ChecklistCommand {
    /// Print the checklist with persisted acknowledgments.
    Show {
        path: PathBuf,
        #[command(flatten)]
        state: StateArgs,
    },
    /// Flip the acknowledgment of one required action.
    Toggle {
        path: PathBuf,
        index: usize,
        #[command(flatten)]
        state: StateArgs,
    },
    /// Forget every acknowledgment for the project.
    Clear {
        path: PathBuf,
        #[command(flatten)]
        state: StateArgs,
    },
}

#[derive(Args, Clone)]
pub(crate) struct StateArgs {
    /// Checklist state file; defaults to `paths.checklist_state`.
    #[arg(long)]
    pub state: Option<PathBuf>,
}

#[derive(Args)]
pub(crate) struct RenderArgs {
    pub path: PathBuf,
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// Attachment filter; defaults to `render.default_filter`.
    #[arg(long)]
    pub filter: Option<String>,
    #[command(flatten)]
    pub state: StateArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum FormatCli {
    Yaml,
    Json,
}

#[derive(Args)]
pub(crate) struct IngestArgs {
    /// e.g. PLV-2025-08-24
    #[arg(long)]
    pub project_id: String,
    /// Directory name under <assets-root>/projects.
    #[arg(long)]
    pub project_slug: Option<String>,
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub store_number: Option<String>,
    #[arg(long)]
    pub store_name: Option<String>,
    #[arg(long)]
    pub store_address: Option<String>,
    /// ISO 8601 timestamp with offset.
    #[arg(long)]
    pub report_time: Option<String>,

    #[arg(long)]
    pub supervisor_name: Option<String>,
    #[arg(long)]
    pub supervisor_phone: Option<String>,
    #[arg(long)]
    pub supervisor_email: Option<String>,
    #[arg(long)]
    pub lead_name: Option<String>,
    #[arg(long)]
    pub lead_phone: Option<String>,
    #[arg(long)]
    pub lead_email: Option<String>,

    #[arg(long)]
    pub hotel_name: Option<String>,
    #[arg(long)]
    pub hotel_address: Option<String>,
    #[arg(long)]
    pub hotel_check_in: Option<String>,
    #[arg(long)]
    pub hotel_check_out: Option<String>,

    /// Defaults to `paths.asset_root`.
    #[arg(long)]
    pub assets_root: Option<PathBuf>,
    /// Defaults to data/projects/<slug>.<format>.
    #[arg(long)]
    pub output: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = FormatCli::Yaml)]
    pub format: FormatCli,
    /// Print the manifest instead of writing it.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
