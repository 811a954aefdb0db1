//! Hosted-UI URLs derived from the OAuth block.
//!
//! The hosted UI serves its OAuth endpoints from the configured domain. Sign-in requests for
//! the `code` response type carry a PKCE S256 challenge; `token` requests do not, because the
//! implicit grant never reaches the token endpoint.

// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};
// self
use crate::{
	_prelude::*,
	config::{ClientConfig, HostedUiDomain, ResponseType, UrlError},
	error::ValidationError,
	obs::{self, OpKind},
};

const STATE_LEN: usize = 32;
const PKCE_VERIFIER_LEN: usize = 64;

/// Endpoint set served by the hosted UI domain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostedUiEndpoints {
	/// Authorization endpoint users are sent to.
	pub authorize: Url,
	/// Token endpoint used to redeem authorization codes.
	pub token: Url,
	/// Refresh-token revocation endpoint.
	pub revoke: Url,
	/// OIDC user info endpoint.
	pub user_info: Url,
	/// Sign-out endpoint.
	pub logout: Url,
}
impl HostedUiEndpoints {
	/// Derives the endpoint set for `domain`.
	pub fn from_domain(domain: &HostedUiDomain) -> Result<Self> {
		let raw = format!("https://{domain}/");
		let base = Url::parse(&raw).map_err(|source| parse_error(raw.clone(), source))?;
		let join = |path: &str| {
			base.join(path).map_err(|source| parse_error(format!("{raw}{path}"), source))
		};

		Ok(Self {
			authorize: join("oauth2/authorize")?,
			token: join("oauth2/token")?,
			revoke: join("oauth2/revoke")?,
			user_info: join("oauth2/userInfo")?,
			logout: join("logout")?,
		})
	}

	/// Derives the endpoint set for the configured hosted UI.
	pub fn from_config(config: &ClientConfig) -> Result<Self> {
		Self::from_domain(&config.oauth.domain)
	}
}

/// Supported PKCE challenge methods surfaced via [`SignInRequest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PkceCodeChallengeMethod {
	/// SHA-256 based PKCE (RFC 7636 S256).
	S256,
}
impl PkceCodeChallengeMethod {
	/// Returns the RFC 7636 identifier for the challenge method.
	pub fn as_str(self) -> &'static str {
		match self {
			PkceCodeChallengeMethod::S256 => "S256",
		}
	}
}

/// Sign-in handshake metadata returned by [`start_sign_in`].
#[derive(Clone)]
pub struct SignInRequest {
	/// Opaque state value that must round-trip via the redirect.
	pub state: String,
	/// Redirect target registered for sign-in.
	pub redirect_uri: Url,
	/// Fully-formed authorize URL that users should be sent to.
	pub authorize_url: Url,
	/// Requested OAuth flow.
	pub response_type: ResponseType,
	pkce: Option<PkcePair>,
}
impl SignInRequest {
	/// PKCE code challenge, present for the `code` response type.
	pub fn code_challenge(&self) -> Option<&str> {
		self.pkce.as_ref().map(|pkce| pkce.challenge.as_str())
	}

	/// PKCE challenge method, present for the `code` response type.
	pub fn code_challenge_method(&self) -> Option<PkceCodeChallengeMethod> {
		self.pkce.as_ref().map(|pkce| pkce.method)
	}

	/// Secret PKCE verifier to send with the code exchange.
	pub fn code_verifier(&self) -> Option<&str> {
		self.pkce.as_ref().map(|pkce| pkce.verifier.as_str())
	}

	/// Validates the returned `state` parameter after the redirect.
	pub fn validate_state(&self, returned_state: &str) -> Result<()> {
		if returned_state == self.state { Ok(()) } else { Err(Error::StateMismatch) }
	}
}
impl Debug for SignInRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SignInRequest")
			.field("state", &self.state)
			.field("redirect_uri", &self.redirect_uri)
			.field("authorize_url", &self.authorize_url)
			.field("response_type", &self.response_type)
			.field("code_challenge", &self.code_challenge())
			.field("code_challenge_method", &self.code_challenge_method())
			.finish()
	}
}

#[derive(Clone)]
struct PkcePair {
	verifier: String,
	challenge: String,
	method: PkceCodeChallengeMethod,
}
impl PkcePair {
	fn generate() -> Self {
		let verifier = random_string(PKCE_VERIFIER_LEN);
		let challenge = compute_pkce_challenge(&verifier);

		Self { verifier, challenge, method: PkceCodeChallengeMethod::S256 }
	}
}

/// Builds a hosted-UI sign-in request for the configured client.
pub fn start_sign_in(config: &ClientConfig) -> Result<SignInRequest> {
	obs::observe(OpKind::HostedUi, "start_sign_in", || {
		let endpoints = HostedUiEndpoints::from_config(config)?;
		let response_type = config.oauth.response_type;
		let redirect_uri = config.oauth.redirect_sign_in.as_url().clone();
		let state = random_string(STATE_LEN);
		let pkce = matches!(response_type, ResponseType::Code).then(PkcePair::generate);
		let mut authorize_url = endpoints.authorize;

		{
			let mut pairs = authorize_url.query_pairs_mut();

			pairs.append_pair("response_type", response_type.as_str());
			pairs.append_pair("client_id", config.user_pool_client_id.as_str());
			pairs.append_pair("redirect_uri", redirect_uri.as_str());

			if !config.oauth.scope.is_empty() {
				pairs.append_pair("scope", &config.oauth.scope.joined());
			}

			pairs.append_pair("state", &state);

			if let Some(pkce) = pkce.as_ref() {
				pairs.append_pair("code_challenge", &pkce.challenge);
				pairs.append_pair("code_challenge_method", pkce.method.as_str());
			}
		}

		Ok(SignInRequest { state, redirect_uri, authorize_url, response_type, pkce })
	})
}

/// Builds the hosted-UI sign-out URL that returns users to the configured sign-out redirect.
pub fn sign_out_url(config: &ClientConfig) -> Result<Url> {
	obs::observe(OpKind::HostedUi, "sign_out_url", || {
		let mut url = HostedUiEndpoints::from_config(config)?.logout;

		url.query_pairs_mut()
			.append_pair("client_id", config.user_pool_client_id.as_str())
			.append_pair("logout_uri", config.oauth.redirect_sign_out.as_str());

		Ok(url)
	})
}

fn parse_error(value: String, source: url::ParseError) -> Error {
	ValidationError::from(UrlError::Parse { value, source }).into()
}

fn random_string(len: usize) -> String {
	rand::rng().sample_iter(Alphanumeric).take(len).map(char::from).collect()
}

fn compute_pkce_challenge(verifier: &str) -> String {
	let mut hasher = Sha256::new();

	hasher.update(verifier.as_bytes());

	URL_SAFE_NO_PAD.encode(hasher.finalize())
}
