//! `art-detective` binary.

// std
use std::process::ExitCode;

fn main() -> ExitCode {
	art_detective::cli::main()
}
