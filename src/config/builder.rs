// self
use crate::{
	_prelude::*,
	config::{
		ApiEndpoint, ApiEndpoints, ClientConfig, EndpointName, EndpointUrl, FederationTarget,
		HostedUiDomain, IdentityPoolId, OAuthConfig, RedirectUri, Region, ResponseType, ScopeList,
		UserPoolClientId, UserPoolId,
	},
	error::ValidationError,
};

/// Builder for [`ClientConfig`] values.
///
/// Setters accept raw strings; every value is validated once in [`build`](Self::build), which
/// reports the first invalid or missing field.
#[derive(Clone, Debug, Default)]
pub struct ClientConfigBuilder {
	project_region: Option<String>,
	identity_pool_id: Option<String>,
	cognito_region: Option<String>,
	user_pool_id: Option<String>,
	user_pool_client_id: Option<String>,
	oauth_domain: Option<String>,
	scope: Vec<String>,
	redirect_sign_in: Option<String>,
	redirect_sign_out: Option<String>,
	response_type: Option<ResponseType>,
	federation_target: Option<String>,
	api_endpoints: Vec<(String, String, String)>,
}
impl ClientConfigBuilder {
	/// Sets both the project and the Cognito region.
	pub fn region(self, region: impl Into<String>) -> Self {
		let region = region.into();

		self.project_region(region.clone()).cognito_region(region)
	}

	/// Sets the project region.
	pub fn project_region(mut self, region: impl Into<String>) -> Self {
		self.project_region = Some(region.into());

		self
	}

	/// Sets the Cognito region.
	pub fn cognito_region(mut self, region: impl Into<String>) -> Self {
		self.cognito_region = Some(region.into());

		self
	}

	/// Sets the identity pool identifier.
	pub fn identity_pool_id(mut self, id: impl Into<String>) -> Self {
		self.identity_pool_id = Some(id.into());

		self
	}

	/// Sets the user pool identifier.
	pub fn user_pool_id(mut self, id: impl Into<String>) -> Self {
		self.user_pool_id = Some(id.into());

		self
	}

	/// Sets the user pool app client identifier.
	pub fn user_pool_client_id(mut self, id: impl Into<String>) -> Self {
		self.user_pool_client_id = Some(id.into());

		self
	}

	/// Sets the hosted UI hostname.
	pub fn oauth_domain(mut self, domain: impl Into<String>) -> Self {
		self.oauth_domain = Some(domain.into());

		self
	}

	/// Replaces the requested scopes.
	pub fn scope<I, S>(mut self, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.scope = scopes.into_iter().map(Into::into).collect();

		self
	}

	/// Sets the post sign-in redirect.
	pub fn redirect_sign_in(mut self, url: impl Into<String>) -> Self {
		self.redirect_sign_in = Some(url.into());

		self
	}

	/// Sets the post sign-out redirect.
	pub fn redirect_sign_out(mut self, url: impl Into<String>) -> Self {
		self.redirect_sign_out = Some(url.into());

		self
	}

	/// Sets the OAuth response type.
	pub fn response_type(mut self, response_type: ResponseType) -> Self {
		self.response_type = Some(response_type);

		self
	}

	/// Sets the federation target.
	pub fn federation_target(mut self, target: impl Into<String>) -> Self {
		self.federation_target = Some(target.into());

		self
	}

	/// Appends a named API endpoint.
	pub fn api_endpoint(
		mut self,
		name: impl Into<String>,
		endpoint: impl Into<String>,
		region: impl Into<String>,
	) -> Self {
		self.api_endpoints.push((name.into(), endpoint.into(), region.into()));

		self
	}

	/// Consumes the builder and validates the resulting record.
	pub fn build(self) -> Result<ClientConfig, ValidationError> {
		let oauth = OAuthConfig {
			domain: HostedUiDomain::new(required(self.oauth_domain, "oauth.domain")?)?,
			scope: ScopeList::new(self.scope)?,
			redirect_sign_in: RedirectUri::parse(required(
				self.redirect_sign_in,
				"oauth.redirectSignIn",
			)?)?,
			redirect_sign_out: RedirectUri::parse(required(
				self.redirect_sign_out,
				"oauth.redirectSignOut",
			)?)?,
			response_type: required(self.response_type, "oauth.responseType")?,
		};
		let federation_target = required(self.federation_target, "federationTarget")?
			.parse::<FederationTarget>()?;
		let api_endpoints = self
			.api_endpoints
			.into_iter()
			.map(|(name, endpoint, region)| -> Result<ApiEndpoint, ValidationError> {
				Ok(ApiEndpoint {
					name: EndpointName::new(name)?,
					endpoint: EndpointUrl::parse(endpoint)?,
					region: Region::new(region)?,
				})
			})
			.collect::<Result<Vec<_>, _>>()?;

		Ok(ClientConfig {
			project_region: Region::new(required(self.project_region, "aws_project_region")?)?,
			identity_pool_id: IdentityPoolId::new(required(
				self.identity_pool_id,
				"aws_cognito_identity_pool_id",
			)?)?,
			cognito_region: Region::new(required(self.cognito_region, "aws_cognito_region")?)?,
			user_pool_id: UserPoolId::new(required(self.user_pool_id, "aws_user_pools_id")?)?,
			user_pool_client_id: UserPoolClientId::new(required(
				self.user_pool_client_id,
				"aws_user_pools_web_client_id",
			)?)?,
			oauth,
			federation_target,
			api_endpoints: ApiEndpoints::new(api_endpoints)?,
		})
	}
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
	value.ok_or(ValidationError::MissingField { field })
}
