mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use flags::CliFlags;
pub use parse::parse;

use context::Context;

/// Run CLI mode. Returns the process exit code.
pub fn run(args: &[String]) -> i32 {
    match Context::new(args) {
        Ok(ctx) => ctx.run(),
        Err(msg) => {
            prompts::error(&msg);
            eprintln!("Try 'entropass --help' for usage.");
            2
        }
    }
}
