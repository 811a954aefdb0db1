//! Absolute URL wrappers for OAuth redirects and API endpoints.

// std
use std::ops::Deref;
// self
use crate::_prelude::*;

/// Errors raised when a redirect or endpoint URL is unusable.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum UrlError {
	/// The value is not an absolute URL.
	#[error("`{value}` is not an absolute URL: {source}.")]
	Parse {
		/// Raw value that failed to parse.
		value: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// The URL has no host component.
	#[error("URL `{url}` has no host.")]
	MissingHost {
		/// Offending URL.
		url: String,
	},
	/// API endpoints must be reachable over HTTP(S).
	#[error("URL `{url}` uses unsupported scheme `{scheme}`.")]
	UnsupportedScheme {
		/// Offending URL.
		url: String,
		/// Scheme that was rejected.
		scheme: String,
	},
}

macro_rules! def_url {
	($name:ident, $doc:literal, $validate:ident) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
		#[serde(try_from = "Url", into = "Url")]
		pub struct $name(Url);
		impl $name {
			/// Parses and validates the provided string.
			pub fn parse(value: impl AsRef<str>) -> Result<Self, UrlError> {
				let view = value.as_ref();
				let url = Url::parse(view)
					.map_err(|source| UrlError::Parse { value: view.to_owned(), source })?;

				Self::try_from(url)
			}

			/// Returns the wrapped URL.
			pub fn as_url(&self) -> &Url {
				&self.0
			}

			/// Returns the serialized URL.
			pub fn as_str(&self) -> &str {
				self.0.as_str()
			}
		}
		impl Deref for $name {
			type Target = Url;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl TryFrom<Url> for $name {
			type Error = UrlError;

			fn try_from(value: Url) -> Result<Self, Self::Error> {
				$validate(&value)?;

				Ok(Self(value))
			}
		}
		impl From<$name> for Url {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl FromStr for $name {
			type Err = UrlError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::parse(s)
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!(stringify!($name), "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(self.0.as_str())
			}
		}
	};
}

def_url! { RedirectUri, "Absolute URL the hosted UI redirects to after sign-in or sign-out.", validate_redirect }
def_url! { EndpointUrl, "Absolute HTTP(S) base URL of a backend API.", validate_endpoint }

// Native app schemes (`myapp://callback`) are accepted as long as they carry a host.
fn validate_redirect(url: &Url) -> Result<(), UrlError> {
	if url.host_str().is_none_or(str::is_empty) {
		return Err(UrlError::MissingHost { url: url.to_string() });
	}

	Ok(())
}

fn validate_endpoint(url: &Url) -> Result<(), UrlError> {
	if !matches!(url.scheme(), "http" | "https") {
		return Err(UrlError::UnsupportedScheme {
			url: url.to_string(),
			scheme: url.scheme().to_owned(),
		});
	}

	validate_redirect(url)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn relative_urls_are_rejected() {
		let err = RedirectUri::parse("/callback").expect_err("Relative redirect must fail.");

		assert!(matches!(err, UrlError::Parse { .. }));
		assert!(serde_json::from_str::<RedirectUri>("\"callback\"").is_err());
	}

	#[test]
	fn redirects_require_a_host() {
		assert!(matches!(
			RedirectUri::parse("mailto:someone@example.com"),
			Err(UrlError::MissingHost { .. })
		));
		RedirectUri::parse("myapp://callback").expect("Native app redirect should be accepted.");
	}

	#[test]
	fn endpoints_require_http() {
		assert!(matches!(
			EndpointUrl::parse("ftp://api.example.com/ledstrip"),
			Err(UrlError::UnsupportedScheme { .. })
		));

		let url = EndpointUrl::parse("https://api.debsanddarren.com/ledstrip")
			.expect("Endpoint fixture should parse.");

		assert_eq!(url.as_str(), "https://api.debsanddarren.com/ledstrip");
		assert_eq!(url.host_str(), Some("api.debsanddarren.com"));
	}
}
