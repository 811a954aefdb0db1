//! Named backend API endpoints (`aws_cloud_logic_custom`).

// std
use std::slice::Iter;
// self
use crate::{
	_prelude::*,
	config::{EndpointName, EndpointUrl, Region},
};

/// Errors raised when the endpoint list is malformed.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum EndpointsError {
	/// Two endpoints share the same lookup name.
	#[error("API endpoint name `{name}` is declared more than once.")]
	DuplicateName {
		/// Repeated name.
		name: String,
	},
}

/// One named backend API base URL.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiEndpoint {
	/// Lookup key used by the consuming client.
	pub name: EndpointName,
	/// Base URL of the API.
	pub endpoint: EndpointUrl,
	/// Region the API is deployed in.
	pub region: Region,
}

/// Ordered endpoint list whose names are unique.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ApiEndpoint>", into = "Vec<ApiEndpoint>")]
pub struct ApiEndpoints(Vec<ApiEndpoint>);
impl ApiEndpoints {
	/// Validates name uniqueness while keeping declaration order.
	pub fn new<I>(endpoints: I) -> Result<Self, EndpointsError>
	where
		I: IntoIterator<Item = ApiEndpoint>,
	{
		let endpoints = endpoints.into_iter().collect::<Vec<_>>();
		let mut seen = HashSet::with_capacity(endpoints.len());

		for endpoint in &endpoints {
			if !seen.insert(endpoint.name.as_str()) {
				return Err(EndpointsError::DuplicateName { name: endpoint.name.to_string() });
			}
		}

		Ok(Self(endpoints))
	}

	/// Finds the endpoint registered under `name`.
	pub fn get(&self, name: &str) -> Option<&ApiEndpoint> {
		self.0.iter().find(|endpoint| endpoint.name.as_str() == name)
	}

	/// Iterator over endpoints in declaration order.
	pub fn iter(&self) -> Iter<'_, ApiEndpoint> {
		self.0.iter()
	}

	/// Iterator over endpoint names in declaration order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(|endpoint| endpoint.name.as_str())
	}

	/// Number of endpoints.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if no endpoints are declared.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl TryFrom<Vec<ApiEndpoint>> for ApiEndpoints {
	type Error = EndpointsError;

	fn try_from(value: Vec<ApiEndpoint>) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl From<ApiEndpoints> for Vec<ApiEndpoint> {
	fn from(value: ApiEndpoints) -> Self {
		value.0
	}
}
impl<'a> IntoIterator for &'a ApiEndpoints {
	type IntoIter = Iter<'a, ApiEndpoint>;
	type Item = &'a ApiEndpoint;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
