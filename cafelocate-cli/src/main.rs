//! Entry point for the `cafelocate` binary.
#![forbid(unsafe_code)]

use cafelocate_cli::CliError;

fn main() {
    pretty_env_logger::init();
    match cafelocate_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("cafelocate: {err}");
            std::process::exit(1);
        }
    }
}
