//! Configuration loader: parse, validate, and re-emit `aws-exports` payloads.
//!
//! Loading fails fast with a single [`Error`]. JSON failures carry the path of the offending
//! field (for example `oauth.responseType`) so a missing or mistyped value is reported by
//! name rather than by byte offset.

// std
use std::fs;
// self
use crate::{
	_prelude::*,
	config::ClientConfig,
	obs::{self, OpKind},
};

/// Banner written at the top of rendered configuration modules.
pub const MODULE_BANNER: &str = "/* eslint-disable */\n// WARNING: DO NOT EDIT. This file is automatically generated by AWS Amplify. It will be overwritten.\n";
/// Binding name used by rendered configuration modules.
pub const MODULE_BINDING: &str = "awsmobile";

/// Parses a JSON document into a validated [`ClientConfig`].
pub fn from_json_str(json: &str) -> Result<ClientConfig> {
	obs::observe(OpKind::Load, "from_json_str", || decode(json.as_bytes()))
}

/// Parses JSON bytes into a validated [`ClientConfig`].
pub fn from_json_slice(bytes: &[u8]) -> Result<ClientConfig> {
	obs::observe(OpKind::Load, "from_json_slice", || decode(bytes))
}

/// Parses the text of an `aws-exports` JavaScript module.
///
/// The module must bind the object literal with `const|let|var <name> =` or export it with
/// `export default`; leading `//` and `/* */` comments are skipped. The literal itself is
/// decoded as JSON5, so unquoted keys, single-quoted strings, trailing commas, and comments
/// (everything Amplify's generator emits) are accepted.
pub fn from_module_str(module: &str) -> Result<ClientConfig> {
	obs::observe(OpKind::Load, "from_module_str", || decode_module(object_literal(module)?))
}

/// Reads a configuration file.
///
/// Files ending in `.js` or `.mjs` are treated as modules, everything else as JSON.
pub fn from_path(path: impl AsRef<Path>) -> Result<ClientConfig> {
	let path = path.as_ref();

	obs::observe(OpKind::Load, "from_path", || {
		let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

		#[cfg(feature = "tracing")]
		tracing::debug!(path = %path.display(), bytes = text.len(), "read configuration file");

		if is_module(path) {
			decode_module(object_literal(&text)?)
		} else {
			decode(text.as_bytes())
		}
	})
}

/// Serializes the record as pretty JSON in the wire schema.
pub fn to_json_string(config: &ClientConfig) -> Result<String> {
	serde_json::to_string_pretty(config).map_err(Error::Json)
}

/// Renders an `aws-exports` module equivalent to the provisioned file.
pub fn render_module(config: &ClientConfig) -> Result<String> {
	let body = to_json_string(config)?;

	Ok(format!(
		"{MODULE_BANNER}\nconst {MODULE_BINDING} = {body};\n\nexport default {MODULE_BINDING};\n"
	))
}

fn decode(bytes: &[u8]) -> Result<ClientConfig> {
	let mut de = serde_json::Deserializer::from_slice(bytes);
	let config = serde_path_to_error::deserialize(&mut de)?;

	de.end().map_err(Error::Json)?;

	Ok(loaded(config))
}

fn decode_module(literal: &str) -> Result<ClientConfig> {
	let mut de = json5::Deserializer::from_str(literal).map_err(Error::ModuleSyntax)?;
	let config = serde_path_to_error::deserialize(&mut de)?;

	Ok(loaded(config))
}

fn loaded(config: ClientConfig) -> ClientConfig {
	#[cfg(feature = "tracing")]
	tracing::info!(
		region = %config.project_region,
		user_pool = ?config.user_pool_id,
		endpoints = config.api_endpoints.len(),
		"loaded client configuration"
	);

	config
}

fn object_literal(module: &str) -> Result<&str> {
	let statement = skip_trivia(module);
	let value = if let Some(rest) = strip_keyword(statement, "export") {
		strip_keyword(skip_trivia(rest), "default")
			.ok_or(Error::Module { reason: "expected `export default`" })?
	} else {
		let rest = ["const", "let", "var"]
			.into_iter()
			.find_map(|keyword| strip_keyword(statement, keyword))
			.ok_or(Error::Module { reason: "expected a `const` binding or `export default`" })?;
		let rest = skip_trivia(rest);
		let ident_len = rest
			.find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
			.unwrap_or(rest.len());

		if ident_len == 0 {
			return Err(Error::Module { reason: "binding has no name" });
		}

		skip_trivia(&rest[ident_len..])
			.strip_prefix('=')
			.ok_or(Error::Module { reason: "binding is not initialized" })?
	};
	let value = skip_trivia(value);

	if !value.starts_with('{') {
		return Err(Error::Module { reason: "no object literal found" });
	}

	let end = literal_end(value).ok_or(Error::Module { reason: "object literal is not closed" })?;

	Ok(&value[..=end])
}

fn skip_trivia(mut text: &str) -> &str {
	loop {
		text = text.trim_start();

		if let Some(rest) = text.strip_prefix("//") {
			text = rest.find('\n').map_or("", |idx| &rest[idx + 1..]);
		} else if let Some(rest) = text.strip_prefix("/*") {
			text = rest.find("*/").map_or("", |idx| &rest[idx + 2..]);
		} else {
			return text;
		}
	}
}

fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
	text.strip_prefix(keyword).filter(|rest| rest.starts_with(char::is_whitespace))
}

// Index of the brace closing the literal that opens `text`. Braces inside strings and
// comments do not count.
fn literal_end(text: &str) -> Option<usize> {
	let bytes = text.as_bytes();
	let mut depth = 0_usize;
	let mut idx = 0;

	while idx < bytes.len() {
		match bytes[idx] {
			quote @ (b'"' | b'\'' | b'`') => {
				idx += 1;

				while idx < bytes.len() && bytes[idx] != quote {
					if bytes[idx] == b'\\' {
						idx += 1;
					}

					idx += 1;
				}
			},
			b'/' if bytes.get(idx + 1) == Some(&b'/') => {
				while idx < bytes.len() && bytes[idx] != b'\n' {
					idx += 1;
				}
			},
			b'/' if bytes.get(idx + 1) == Some(&b'*') => {
				idx += 2;

				while idx + 1 < bytes.len() && !(bytes[idx] == b'*' && bytes[idx + 1] == b'/') {
					idx += 1;
				}

				idx += 1;
			},
			b'{' => depth += 1,
			b'}' => {
				depth = depth.checked_sub(1)?;

				if depth == 0 {
					return Some(idx);
				}
			},
			_ => {},
		}

		idx += 1;
	}

	None
}

fn is_module(path: &Path) -> bool {
	path.extension().and_then(|ext| ext.to_str()).is_some_and(|ext| matches!(ext, "js" | "mjs"))
}
