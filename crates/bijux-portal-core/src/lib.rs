#![forbid(unsafe_code)]
//! Portal core: the leaf crate every other portal crate depends on.
//!
//! Holds exit codes, machine-readable errors, config discovery, canonical
//! JSON hashing and the ports (traits) behind which all I/O lives. No
//! filesystem or clock access; environment variables are read only during
//! config discovery.

pub mod canonical;
mod domain;
mod errors;
mod ports;

pub use crate::canonical::{sha256_hex, stable_json_hash_hex};
pub use crate::domain::config::{
    resolve_portal_config_path, ConfigError, PathsConfig, PortalConfig, RenderConfig,
};
pub use crate::errors::{
    ConfigPathScope, ErrorCode, ErrorContext, ExitCode, MachineError, ResultExt,
};
pub use crate::ports::boundary::{
    checklist_storage_key, AckStore, AssetLookup, AssetPort, MemoryAckStore,
};

pub const CRATE_NAME: &str = "bijux-portal-core";

pub const ENV_BIJUX_LOG_LEVEL: &str = "BIJUX_LOG_LEVEL";
pub const ENV_BIJUX_PORTAL_CONFIG: &str = "BIJUX_PORTAL_CONFIG";
