//! Prints hosted-UI sign-in and sign-out URLs for a configuration file.

// std
use std::env;
// crates.io
use color_eyre::{Result, eyre::eyre};
// self
use amplify_config::{hosted_ui, loader};

fn main() -> Result<()> {
	color_eyre::install()?;

	let path = env::args().nth(1).ok_or_else(|| eyre!("Usage: sign_in <aws-exports.{{js,json}}>"))?;
	let config = loader::from_path(&path)?;
	let request = hosted_ui::start_sign_in(&config)?;

	println!("Open this URL to sign in:\n{}", request.authorize_url);
	println!("Expected state: {}", request.state);

	if let Some(verifier) = request.code_verifier() {
		println!("PKCE verifier (keep secret): {verifier}");
	}

	println!("Sign-out URL:\n{}", hosted_ui::sign_out_url(&config)?);

	Ok(())
}
