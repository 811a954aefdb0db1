//! Hosted-UI OAuth settings: domain, ordered scopes, redirects, and response type.

// std
use std::slice::Iter;
// self
use crate::{_prelude::*, config::RedirectUri};

/// OAuth flow requested from the hosted UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
	#[default]
	/// Authorization Code grant (PKCE-protected for public clients).
	Code,
	/// Implicit grant returning tokens in the redirect fragment.
	Token,
}
impl ResponseType {
	/// Returns the wire value.
	pub const fn as_str(self) -> &'static str {
		match self {
			ResponseType::Code => "code",
			ResponseType::Token => "token",
		}
	}
}
impl Display for ResponseType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for ResponseType {
	type Err = OAuthError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"code" => Ok(Self::Code),
			"token" => Ok(Self::Token),
			other => Err(OAuthError::UnknownResponseType { value: other.to_owned() }),
		}
	}
}

/// Errors emitted when validating OAuth settings.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum OAuthError {
	/// Empty scope entries are not allowed.
	#[error("Scope entries cannot be empty.")]
	EmptyScope,
	/// Scopes cannot contain embedded whitespace characters.
	#[error("Scope contains whitespace: {scope}.")]
	ScopeContainsWhitespace {
		/// The offending scope string.
		scope: String,
	},
	/// A scope was listed more than once.
	#[error("Scope is listed more than once: {scope}.")]
	DuplicateScope {
		/// The repeated scope string.
		scope: String,
	},
	/// Response type is neither `code` nor `token`.
	#[error("Unknown OAuth response type: {value}.")]
	UnknownResponseType {
		/// Rejected value.
		value: String,
	},
}

/// Ordered list of requested OAuth scopes.
///
/// Order is preserved exactly as provisioned because identity providers may use it when
/// rendering consent screens; authorization semantics do not depend on it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ScopeList(Vec<String>);
impl ScopeList {
	/// Creates a validated scope list from any iterator.
	pub fn new<I, S>(scopes: I) -> Result<Self, OAuthError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut seen = HashSet::new();
		let mut list = Vec::new();

		for scope in scopes {
			let owned: String = scope.into();

			if owned.is_empty() {
				return Err(OAuthError::EmptyScope);
			}
			if owned.chars().any(char::is_whitespace) {
				return Err(OAuthError::ScopeContainsWhitespace { scope: owned });
			}
			if !seen.insert(owned.clone()) {
				return Err(OAuthError::DuplicateScope { scope: owned });
			}

			list.push(owned);
		}

		Ok(Self(list))
	}

	/// Number of scopes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if no scopes are requested.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns true if the list contains the provided scope.
	pub fn contains(&self, scope: &str) -> bool {
		self.0.iter().any(|candidate| candidate == scope)
	}

	/// Iterator over scopes in provisioned order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}

	/// Space-delimited representation used by the `scope` query parameter.
	pub fn joined(&self) -> String {
		self.0.join(" ")
	}

	/// Returns the underlying slice of scope strings.
	pub fn as_slice(&self) -> &[String] {
		&self.0
	}
}
impl Display for ScopeList {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.joined())
	}
}
impl TryFrom<Vec<String>> for ScopeList {
	type Error = OAuthError;

	fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl From<ScopeList> for Vec<String> {
	fn from(value: ScopeList) -> Self {
		value.0
	}
}
impl<'a> IntoIterator for &'a ScopeList {
	type IntoIter = ScopeIter<'a>;
	type Item = &'a str;

	fn into_iter(self) -> Self::IntoIter {
		ScopeIter { inner: self.0.iter() }
	}
}

/// Iterator over scope strings.
pub struct ScopeIter<'a> {
	inner: Iter<'a, String>,
}
impl<'a> Iterator for ScopeIter<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(String::as_str)
	}
}

/// Errors raised when the hosted UI domain is not a bare hostname.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum DomainError {
	/// The domain was empty.
	#[error("Hosted UI domain cannot be empty.")]
	Empty,
	/// The domain carries a scheme, path, port, or whitespace.
	#[error("Hosted UI domain must be a bare hostname: {domain}.")]
	NotHostname {
		/// Rejected value.
		domain: String,
	},
}

/// Hostname of the identity provider's hosted authentication UI.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HostedUiDomain(String);
impl HostedUiDomain {
	/// Validates the provided hostname.
	pub fn new(value: impl AsRef<str>) -> Result<Self, DomainError> {
		let view = value.as_ref();

		if view.is_empty() {
			return Err(DomainError::Empty);
		}

		let not_hostname = || DomainError::NotHostname { domain: view.to_owned() };

		if view.chars().any(|c| c.is_whitespace() || matches!(c, '/' | ':' | '@' | '?' | '#')) {
			return Err(not_hostname());
		}
		if !matches!(url::Host::parse(view), Ok(url::Host::Domain(_))) {
			return Err(not_hostname());
		}

		Ok(Self(view.to_owned()))
	}

	/// Returns the hostname.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl TryFrom<String> for HostedUiDomain {
	type Error = DomainError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl From<HostedUiDomain> for String {
	fn from(value: HostedUiDomain) -> Self {
		value.0
	}
}
impl Debug for HostedUiDomain {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "HostedUiDomain({})", self.0)
	}
}
impl Display for HostedUiDomain {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

/// OAuth block of the client configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthConfig {
	/// Hosted UI hostname.
	pub domain: HostedUiDomain,
	/// Requested scopes in provisioned order.
	pub scope: ScopeList,
	/// Redirect target after a successful sign-in.
	pub redirect_sign_in: RedirectUri,
	/// Redirect target after sign-out.
	pub redirect_sign_out: RedirectUri,
	/// Requested OAuth flow.
	pub response_type: ResponseType,
}
