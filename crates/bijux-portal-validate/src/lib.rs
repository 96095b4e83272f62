#![forbid(unsafe_code)]

mod adapters;
mod catalog;
mod evaluation;
mod limits;
mod links;
mod project;
mod raw;

pub use adapters::{
    list_manifest_files, load_raw_document, parse_raw_document, DocumentFormat, LoadError,
};
pub use catalog::{validate_policy_catalog, validate_project_batch, ProjectIndex};
pub use limits::SOURCE_DOCUMENT_EXTENSIONS;
pub use links::{check_links, FsAssets};
pub use project::{lint_project_id, validate_project};

pub const CRATE_NAME: &str = "bijux-portal-validate";
