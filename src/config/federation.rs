//! Identity source federated into the identity pool.

// self
use crate::{_prelude::*, config::IdentifierError};

/// Upstream identity source trusted by the identity pool.
///
/// Values outside the known set are preserved verbatim so a record can be re-emitted
/// unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FederationTarget {
	#[default]
	/// Users sign in through the user pool only.
	CognitoUserPools,
	/// Users sign in through the user pool and receive identity-pool credentials.
	CognitoUserAndIdentityPools,
	/// Any other provisioned value.
	Other(String),
}
impl FederationTarget {
	/// Returns the wire value.
	pub fn as_str(&self) -> &str {
		match self {
			FederationTarget::CognitoUserPools => "COGNITO_USER_POOLS",
			FederationTarget::CognitoUserAndIdentityPools => "COGNITO_USER_AND_IDENTITY_POOLS",
			FederationTarget::Other(value) => value,
		}
	}
}
impl Display for FederationTarget {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for FederationTarget {
	type Err = IdentifierError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		const KIND: &str = "FederationTarget";

		match s {
			"" => Err(IdentifierError::Empty { kind: KIND }),
			"COGNITO_USER_POOLS" => Ok(Self::CognitoUserPools),
			"COGNITO_USER_AND_IDENTITY_POOLS" => Ok(Self::CognitoUserAndIdentityPools),
			other if other.chars().any(char::is_whitespace) =>
				Err(IdentifierError::ContainsWhitespace { kind: KIND }),
			other => Ok(Self::Other(other.to_owned())),
		}
	}
}
impl TryFrom<String> for FederationTarget {
	type Error = IdentifierError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}
impl From<FederationTarget> for String {
	fn from(value: FederationTarget) -> Self {
		match value {
			FederationTarget::Other(value) => value,
			known => known.as_str().to_owned(),
		}
	}
}
