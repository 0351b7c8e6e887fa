//! genqrc: pack resource directories into a generated Rust source file
//!
//! The generated file embeds the packed bytes and a loader that either parses
//! them or repacks the source directories at startup.

use std::process::ExitCode;

mod cli;
mod config;
mod domain;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
