//! Loads an `aws-exports` file into the process-wide slot and prints a summary.
//!
//! ```sh
//! cargo run --example inspect -- tests/fixtures/original-aws-exports.js
//! ```

// std
use std::env;
// crates.io
use color_eyre::{Result, eyre::eyre};
// self
use amplify_config::store;

fn main() -> Result<()> {
	color_eyre::install()?;

	let path = env::args().nth(1).ok_or_else(|| eyre!("Usage: inspect <aws-exports.{{js,json}}>"))?;
	let outcome = store::global().load_from(&path)?;
	let snapshot = store::global().current()?;
	let config = &snapshot.config;

	println!("Loaded {path} ({outcome:?}).");
	println!("Fingerprint: {}", snapshot.fingerprint);
	println!("Region: {} (cognito: {})", config.project_region, config.cognito_region);
	println!("User pool: {:?} / client {:?}", config.user_pool_id, config.user_pool_client_id);
	println!("Hosted UI: {} ({})", config.oauth.domain, config.oauth.response_type);
	println!("Scopes: {}", config.oauth.scope);
	println!("Federation: {}", config.federation_target);

	for endpoint in &config.api_endpoints {
		println!("API {} -> {} [{}]", endpoint.name, endpoint.endpoint, endpoint.region);
	}

	Ok(())
}
