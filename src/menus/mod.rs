//! Interactive menu shell.

mod actions;
mod input;
mod text;

pub use text::print_help;

/// Run interactive mode.
pub fn run() {
    actions::run();
}
