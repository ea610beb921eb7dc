//! Binary driver: parse arguments, validate them, run the investigation, print the result.
//!
//! Exit status is `0` on success (or after printing help/version) and `1` for
//! every failure: invalid arguments, unsupported subject, missing credentials,
//! or any error raised while talking to the API.

pub mod args;

pub use args::*;

// std
use std::{
	ffi::OsString,
	io::{self, IsTerminal},
	process::ExitCode,
};
// crates.io
use clap::{CommandFactory, Parser, error::ErrorKind};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};
// self
use crate::{
	_prelude::*,
	api::{ApiDescriptor, ArtsyClient},
	auth::Credentials,
	error::ConfigError,
	investigate::Investigation,
	json,
	resolve::FieldPath,
	subject::Subject,
};

/// Exit status for success, help, and version output.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status for every failure.
pub const EXIT_FAILURE: u8 = 1;

/// Runs the binary against the real process arguments and environment.
pub fn main() -> ExitCode {
	ExitCode::from(run(std::env::args_os()))
}

/// Runs the binary against `argv` and returns the exit status; credentials still come from
/// the environment.
pub fn run<I, T>(argv: I) -> u8
where
	I: IntoIterator<Item = T>,
	T: Into<OsString>,
{
	let args = match Args::try_parse_from(normalize_single_dash_flags(argv)) {
		Ok(args) => args,
		Err(e) => return report_parse_error(e),
	};
	let investigation = match build_investigation(&args) {
		Ok(investigation) => investigation,
		Err(message) => {
			eprintln!("{message}\n");
			eprintln!("{}", Args::command().render_help());

			return EXIT_FAILURE;
		},
	};

	init_tracing();

	tracing::info!("{}", investigation.summary());

	match execute(&args, &investigation) {
		Ok(rendered) => {
			println!("{rendered}");

			EXIT_SUCCESS
		},
		Err(e) => {
			report_error(&e);

			EXIT_FAILURE
		},
	}
}

/// Validates subject and field path; the error is a user-facing message.
fn build_investigation(args: &Args) -> Result<Investigation, String> {
	let subject = args.subject.parse::<Subject>().map_err(|e| e.to_string())?;
	let mut investigation = Investigation::new(subject);

	if let Some(id) = &args.id {
		investigation = investigation.with_id(id.as_str());
	}
	if let Some(field) = args.field.as_deref().filter(|field| !field.is_empty()) {
		let path = field.parse::<FieldPath>().map_err(|e| e.to_string())?;

		investigation = investigation.with_field(path);
	}

	Ok(investigation)
}

/// Reads credentials, builds the client, and runs the investigation to completion.
fn execute(args: &Args, investigation: &Investigation) -> Result<String> {
	let credentials = Credentials::from_env()?;
	let descriptor = ApiDescriptor::from_base_str(&args.api_base)?;
	let client = ArtsyClient::new(descriptor)?;
	let runtime = tokio::runtime::Builder::new_current_thread()
		.enable_all()
		.build()
		.map_err(|source| ConfigError::Runtime { source })?;
	let body = runtime.block_on(client.investigate(&credentials, investigation))?;

	Ok(json::render_pretty(&body)?)
}

fn init_tracing() {
	let filter = EnvFilter::builder().with_default_directive(LevelFilter::INFO.into()).from_env_lossy();
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.with_ansi(io::stderr().is_terminal())
		.with_target(false)
		.try_init();
}

fn report_parse_error(e: clap::Error) -> u8 {
	let code = match e.kind() {
		ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
		_ => EXIT_FAILURE,
	};
	let _ = e.print();

	code
}

fn report_error(e: &Error) {
	eprintln!("{e}");

	let mut source = e.source();

	while let Some(cause) = source {
		eprintln!("  caused by: {cause}");

		source = cause.source();
	}
}
