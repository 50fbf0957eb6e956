use thiserror::Error;

use crate::tool::Tool;

/// Everything that can go wrong with one action invocation. Each variant is
/// rendered verbatim in the result area; none of them are fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StudioError {
	#[error("Please enter your API key in settings.")]
	MissingCredential,

	#[error("{}", .0.empty_input_hint())]
	EmptyInput(Tool),

	/// The server answered with a non-success status; the payload is the
	/// `message` field of its error body, or a generic fallback.
	#[error("{0}")]
	Rejected(String),

	/// No usable response at all (connection refused, DNS, undecodable body).
	#[error("{0}")]
	Network(String),
}
