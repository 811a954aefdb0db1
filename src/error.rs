//! Crate-level error types shared by the loader, the record, and the process-wide slot.

// self
use crate::{
	_prelude::*,
	config::{DomainError, EndpointsError, IdentifierError, OAuthError, UrlError},
};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// The document is not valid JSON, or a field is missing or has the wrong type.
	#[error("Configuration could not be parsed at `{}`: {}", .0.path(), .0.inner())]
	Parse(#[from] serde_path_to_error::Error<serde_json::Error>),
	/// The payload is not a single well-formed JSON document, or could not be encoded.
	#[error("Configuration JSON is malformed.")]
	Json(#[source] serde_json::Error),
	/// The module's object literal is not valid JSON5.
	#[error("Configuration module literal is malformed.")]
	ModuleSyntax(#[source] json5::Error),
	/// A field of the module's object literal is missing or has the wrong type.
	#[error("Configuration module could not be parsed at `{}`: {}", .0.path(), .0.inner())]
	ModuleParse(#[from] serde_path_to_error::Error<json5::Error>),
	/// The configuration module text does not contain an object literal.
	#[error("Configuration module is malformed: {reason}.")]
	Module {
		/// Description of what was missing.
		reason: &'static str,
	},
	/// The configuration file could not be read.
	#[error("Failed to read configuration from {}.", path.display())]
	Io {
		/// File that failed to load.
		path: PathBuf,
		/// Underlying IO failure.
		#[source]
		source: std::io::Error,
	},
	/// A field violated its invariants.
	#[error(transparent)]
	Validation(#[from] ValidationError),

	/// No API endpoint is registered under the requested name.
	#[error("API endpoint `{name}` was not found.")]
	EndpointNotFound {
		/// Name that was looked up.
		name: String,
	},
	/// The process-wide slot has not been populated yet.
	#[error("No client configuration has been loaded.")]
	NotLoaded,
	/// The `state` returned by the hosted UI does not match the one that was sent.
	#[error("Hosted UI returned a mismatched state parameter.")]
	StateMismatch,
}
impl Error {
	pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Io { path: path.into(), source }
	}
}

/// Field-level validation failures raised while assembling a [`ClientConfig`](crate::ClientConfig).
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ValidationError {
	/// Required field was never supplied to the builder.
	#[error("Missing required field `{field}`.")]
	MissingField {
		/// Wire name of the missing field.
		field: &'static str,
	},
	/// Identifier is malformed.
	#[error(transparent)]
	Identifier(#[from] IdentifierError),
	/// OAuth settings are malformed.
	#[error(transparent)]
	OAuth(#[from] OAuthError),
	/// Hosted UI domain is malformed.
	#[error(transparent)]
	Domain(#[from] DomainError),
	/// Redirect or endpoint URL is unusable.
	#[error(transparent)]
	Url(#[from] UrlError),
	/// API endpoint list is malformed.
	#[error(transparent)]
	Endpoints(#[from] EndpointsError),
}
