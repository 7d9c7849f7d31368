//! Main entry point for the get-relative-path CLI.
//!
//! Prints PATH relative to `--relative-to` (default: the current working
//! directory). Segments are compared case-sensitively or not according to
//! `--case-sensitive`, which by default asks the filesystem.

mod cli;
mod error;

use clap::Parser;
use cli::Cli;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = getrel::init_logger(cli.verbose, cli.quiet);
    logger.install();

    match cli.execute(&logger) {
        Ok(path) => println!("{}", path.display()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
