//! Command-line surface for `art-detective`.

// std
use std::ffi::OsString;
// crates.io
use clap::Parser;
// self
use crate::api::DEFAULT_API_BASE;

const ABOUT: &str = "\
An Artsy API client that follows links in responses.

Specify an endpoint and an optional ID for a specific resource, and art-detective will print the \
response. Additionally, you may specify the path to a URL field and art-detective will retrieve it too.";
const EXAMPLE: &str = "\
For example, to get similar artists to Andy Warhol:
  art-detective -subject artists -id 4d8b92b34eb68a1b2c0003f4 -field _links.similar_artists.href

Credentials are read from ARTSY_CLIENT_ID and ARTSY_CLIENT_SECRET.";

/// Long flags that may also be spelled with a single dash.
const SINGLE_DASH_FLAGS: [&str; 5] = ["subject", "id", "field", "api-base", "help"];

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "art-detective", version, about = ABOUT, long_about = None, after_help = EXAMPLE)]
pub struct Args {
	/// The subject to investigate. Supported subjects are "artworks" and "artists".
	#[arg(long, default_value = "artworks")]
	pub subject: String,

	/// The id of the subject. If set, that resource is retrieved instead of the whole list.
	#[arg(long)]
	pub id: Option<String>,

	/// A URL field in the response body to follow, as a dot-separated path. If not set, the
	/// initial response is printed.
	#[arg(long)]
	pub field: Option<String>,

	/// Base URL of the API.
	#[arg(long, env = "ARTSY_API_BASE", default_value = DEFAULT_API_BASE)]
	pub api_base: String,
}

/// Rewrites single-dash long flags (`-subject`, `-field=a.b`) to their double-dash form.
///
/// The program name and everything after a `--` terminator are left untouched.
pub fn normalize_single_dash_flags<I, T>(argv: I) -> Vec<OsString>
where
	I: IntoIterator<Item = T>,
	T: Into<OsString>,
{
	let mut terminated = false;

	argv.into_iter()
		.map(Into::into)
		.enumerate()
		.map(|(idx, arg)| {
			if idx == 0 || terminated {
				return arg;
			}
			if arg == "--" {
				terminated = true;

				return arg;
			}

			normalize_arg(arg)
		})
		.collect()
}

fn normalize_arg(arg: OsString) -> OsString {
	let Some(text) = arg.to_str() else {
		return arg;
	};
	let Some(rest) = text.strip_prefix('-') else {
		return arg;
	};

	if rest.starts_with('-') {
		return arg;
	}

	let name = rest.split_once('=').map_or(rest, |(name, _)| name);

	if SINGLE_DASH_FLAGS.contains(&name) { format!("-{text}").into() } else { arg }
}
