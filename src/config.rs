//! The client configuration record and its field types.
//!
//! [`ClientConfig`] mirrors the `aws-exports` wire schema field for field. Every field type
//! validates itself on construction and on deserialization, so a value of this type is
//! always complete: identifiers are non-empty, redirects are absolute URLs, the response
//! type is one of the supported flows, and endpoint names are unique lookup keys.

/// Builder API for assembling records in code.
pub mod builder;
pub mod endpoint;
pub mod federation;
pub mod id;
pub mod oauth;
pub mod uri;

pub use builder::*;
pub use endpoint::*;
pub use federation::*;
pub use id::*;
pub use oauth::*;
pub use uri::*;

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD_NO_PAD};
use sha2::{Digest, Sha256};
// self
use crate::_prelude::*;

/// Immutable client configuration consumed at application start.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
	/// Region of the provisioned project.
	#[serde(rename = "aws_project_region")]
	pub project_region: Region,
	/// Identity federation pool.
	#[serde(rename = "aws_cognito_identity_pool_id")]
	pub identity_pool_id: IdentityPoolId,
	/// Region hosting the identity and user pools.
	#[serde(rename = "aws_cognito_region")]
	pub cognito_region: Region,
	/// User directory.
	#[serde(rename = "aws_user_pools_id")]
	pub user_pool_id: UserPoolId,
	/// App client registered within the user pool.
	#[serde(rename = "aws_user_pools_web_client_id")]
	pub user_pool_client_id: UserPoolClientId,
	/// Hosted UI settings.
	pub oauth: OAuthConfig,
	/// Identity source federated into the identity pool.
	#[serde(rename = "federationTarget")]
	pub federation_target: FederationTarget,
	/// Named backend APIs.
	#[serde(rename = "aws_cloud_logic_custom")]
	pub api_endpoints: ApiEndpoints,
}
impl ClientConfig {
	/// Creates an empty builder.
	pub fn builder() -> ClientConfigBuilder {
		ClientConfigBuilder::default()
	}

	/// Returns the endpoint registered under `name`.
	pub fn endpoint(&self, name: &str) -> Result<&ApiEndpoint> {
		self.api_endpoints.get(name).ok_or_else(|| Error::EndpointNotFound { name: name.to_owned() })
	}

	/// Returns the base URL of the endpoint registered under `name`.
	pub fn endpoint_url(&self, name: &str) -> Result<&Url> {
		self.endpoint(name).map(|endpoint| endpoint.endpoint.as_url())
	}

	/// Stable fingerprint of every field.
	///
	/// The fingerprint is a base64 (no padding) encoding of the SHA-256 digest over each
	/// field's wire key and value (`key NUL value LF`) in wire order, so it does not depend
	/// on how the source document was formatted. Equal records always share a fingerprint, so it can be
	/// used to detect whether a re-provisioned payload actually changed anything.
	pub fn fingerprint(&self) -> String {
		let mut hasher = Sha256::new();
		let mut field = |key: &str, value: &str| {
			hasher.update(key.as_bytes());
			hasher.update([0_u8]);
			hasher.update(value.as_bytes());
			hasher.update([b'\n']);
		};

		field("aws_project_region", self.project_region.as_str());
		field("aws_cognito_identity_pool_id", self.identity_pool_id.as_str());
		field("aws_cognito_region", self.cognito_region.as_str());
		field("aws_user_pools_id", self.user_pool_id.as_str());
		field("aws_user_pools_web_client_id", self.user_pool_client_id.as_str());
		field("oauth.domain", self.oauth.domain.as_str());

		for scope in &self.oauth.scope {
			field("oauth.scope", scope);
		}

		field("oauth.redirectSignIn", self.oauth.redirect_sign_in.as_str());
		field("oauth.redirectSignOut", self.oauth.redirect_sign_out.as_str());
		field("oauth.responseType", self.oauth.response_type.as_str());
		field("federationTarget", self.federation_target.as_str());

		for endpoint in &self.api_endpoints {
			field("aws_cloud_logic_custom.name", endpoint.name.as_str());
			field("aws_cloud_logic_custom.endpoint", endpoint.endpoint.as_str());
			field("aws_cloud_logic_custom.region", endpoint.region.as_str());
		}

		STANDARD_NO_PAD.encode(hasher.finalize())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn sample() -> ClientConfig {
		ClientConfig::builder()
			.region("eu-west-1")
			.identity_pool_id("eu-west-1:009466f0-5099-4590-9ee1-7c172c14b1ff")
			.user_pool_id("eu-west-1_gjkbuYvcP")
			.user_pool_client_id("2su34kutm86q0m7vcgfjks1at0")
			.oauth_domain("idp.debsanddarren.com")
			.scope(["phone", "email", "openid", "profile", "aws.cognito.signin.user.admin"])
			.redirect_sign_in("https://www.google.co.uk/")
			.redirect_sign_out("https://www.google.co.uk/")
			.response_type(ResponseType::Code)
			.federation_target("COGNITO_USER_POOLS")
			.api_endpoint("ws281xapi", "https://api.debsanddarren.com/ledstrip", "eu-west-1")
			.build()
			.expect("Sample configuration should build.")
	}

	#[test]
	fn endpoint_lookup_by_name() {
		let config = sample();
		let url = config.endpoint_url("ws281xapi").expect("Known endpoint should resolve.");

		assert_eq!(url.as_str(), "https://api.debsanddarren.com/ledstrip");

		let err = config.endpoint("ledstrip").expect_err("Unknown endpoint should fail.");

		assert!(matches!(&err, Error::EndpointNotFound { name } if name == "ledstrip"));
		assert_eq!(err.to_string(), "API endpoint `ledstrip` was not found.");
	}

	#[test]
	fn fingerprint_tracks_every_field() {
		let base = sample();
		let mut changed = base.clone();

		changed.oauth.response_type = ResponseType::Token;

		assert_eq!(base.fingerprint(), sample().fingerprint());
		assert_ne!(base.fingerprint(), changed.fingerprint());
	}

	#[test]
	fn wire_keys_match_schema() {
		let value = serde_json::to_value(sample()).expect("Sample should serialize.");

		assert_eq!(value["aws_project_region"], "eu-west-1");
		assert_eq!(value["aws_user_pools_web_client_id"], "2su34kutm86q0m7vcgfjks1at0");
		assert_eq!(value["oauth"]["redirectSignIn"], "https://www.google.co.uk/");
		assert_eq!(value["oauth"]["responseType"], "code");
		assert_eq!(value["federationTarget"], "COGNITO_USER_POOLS");
		assert_eq!(value["aws_cloud_logic_custom"][0]["name"], "ws281xapi");
	}
}
