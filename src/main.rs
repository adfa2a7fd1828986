use std::process::ExitCode;

mod config;
mod error;
mod library;
mod output;
mod runtime;

fn main() -> ExitCode {
    runtime::init_logging();

    match runtime::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("tracklist: {e}");
            ExitCode::FAILURE
        }
    }
}
