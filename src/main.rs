use std::env;

mod cli;
mod exits;
mod file_io;
mod history;
mod menus;
mod pass;
mod settings;
mod terminal;

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() == 1 {
        menus::run();
    } else {
        std::process::exit(cli::run(&args));
    }
}
