use bijux_portal_core::{canonical, ENV_BIJUX_LOG_LEVEL};
use serde_json::Value;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::{LogFlags, OutputMode};

pub(crate) fn emit_ok(output_mode: OutputMode, payload: Value) -> Result<(), String> {
    if output_mode.json {
        let bytes = canonical::stable_json_bytes(&payload).map_err(|e| e.to_string())?;
        let text = String::from_utf8(bytes).map_err(|e| e.to_string())?;
        println!("{text}");
    } else {
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).map_err(|e| e.to_string())?
        );
    }
    Ok(())
}

/// Installs the stderr subscriber. Flags win over `BIJUX_LOG_LEVEL`, which
/// wins over `RUST_LOG`.
pub(crate) fn init_tracing(log_flags: LogFlags, output_mode: OutputMode) {
    let filter = if log_flags.quiet {
        EnvFilter::new("error")
    } else if log_flags.verbose > 0 {
        EnvFilter::new(match log_flags.verbose {
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    } else if let Some(level) = std::env::var(ENV_BIJUX_LOG_LEVEL)
        .ok()
        .filter(|v| !v.trim().is_empty())
    {
        EnvFilter::new(level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if output_mode.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
