//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use bookbench_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "fatal errors are reported on stderr before exiting"
)]
fn main() {
    if let Err(err) = bookbench_cli::init_logging() {
        eprintln!("bookbench: {err}");
    }
    match bookbench_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("bookbench: {err}");
            std::process::exit(1);
        }
    }
}
