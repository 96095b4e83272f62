mod context;
mod model;

pub use context::{ErrorContext, ResultExt};
pub use model::{ConfigPathScope, ErrorCode, ExitCode, MachineError};
