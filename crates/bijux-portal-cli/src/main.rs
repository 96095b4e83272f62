#![forbid(unsafe_code)]

use std::process::ExitCode;

fn main() -> ExitCode {
    bijux_portal_cli::main_entry()
}
