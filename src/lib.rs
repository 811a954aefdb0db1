//! Typed, validated AWS Amplify client configuration: load `aws-exports` payloads once, hold
//! them as process-wide read-only state, resolve named API endpoints, and derive hosted-UI
//! sign-in/sign-out URLs.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod config;
pub mod error;
pub mod hosted_ui;
pub mod loader;
pub mod obs;
pub mod store;

mod _prelude {
	pub use std::{
		collections::HashSet,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		path::{Path, PathBuf},
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use url;
#[cfg(test)] use color_eyre as _;
