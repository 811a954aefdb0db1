//! Process-wide, read-only holder for the active client configuration.
//!
//! A [`ConfigSlot`] never mutates a record in place: re-provisioned payloads replace the
//! whole [`Snapshot`], and readers keep whichever `Arc` they already cloned.

// std
use std::sync::OnceLock;
// self
use crate::{
	_prelude::*,
	config::ClientConfig,
	loader,
	obs::{self, OpKind},
};

static GLOBAL: OnceLock<ConfigSlot> = OnceLock::new();

/// Returns the process-wide slot, creating an empty one on first use.
pub fn global() -> &'static ConfigSlot {
	GLOBAL.get_or_init(ConfigSlot::default)
}

/// Immutable view of one loaded configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
	/// The validated record.
	pub config: Arc<ClientConfig>,
	/// [`ClientConfig::fingerprint`] of `config`.
	pub fingerprint: String,
	/// Instant the record was installed.
	pub loaded_at: OffsetDateTime,
	/// Starts at 1 and increases by one with every installed record.
	pub generation: u64,
}

/// Result of a [`ConfigSlot::replace`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplaceOutcome {
	/// The slot was empty and now holds the record.
	Installed {
		/// Generation of the new snapshot.
		generation: u64,
	},
	/// A record with a different fingerprint was swapped out.
	Replaced {
		/// Generation of the snapshot that was swapped out.
		previous: u64,
		/// Generation of the new snapshot.
		generation: u64,
	},
	/// The record matched the current fingerprint; the existing snapshot was kept.
	Unchanged {
		/// Generation of the retained snapshot.
		generation: u64,
	},
}
impl ReplaceOutcome {
	/// Generation that is current after the call.
	pub fn generation(self) -> u64 {
		match self {
			ReplaceOutcome::Installed { generation }
			| ReplaceOutcome::Replaced { generation, .. }
			| ReplaceOutcome::Unchanged { generation } => generation,
		}
	}
}

/// Thread-safe slot holding the active [`Snapshot`].
#[derive(Debug, Default)]
pub struct ConfigSlot(RwLock<Option<Arc<Snapshot>>>);
impl ConfigSlot {
	/// Creates an empty slot.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a slot that already holds `config`.
	pub fn with_config(config: ClientConfig) -> Self {
		let slot = Self::new();

		slot.replace(config);

		slot
	}

	/// Returns the current snapshot.
	pub fn current(&self) -> Result<Arc<Snapshot>> {
		self.0.read().clone().ok_or(Error::NotLoaded)
	}

	/// Returns the current record.
	pub fn config(&self) -> Result<Arc<ClientConfig>> {
		self.current().map(|snapshot| snapshot.config.clone())
	}

	/// Returns true once a record has been installed.
	pub fn is_loaded(&self) -> bool {
		self.0.read().is_some()
	}

	/// Installs `config`, replacing any previous record wholesale.
	pub fn replace(&self, config: ClientConfig) -> ReplaceOutcome {
		let _guard = obs::OpSpan::new(OpKind::Replace, "replace").entered();

		obs::record_op_outcome(OpKind::Replace, obs::OpOutcome::Attempt);

		let fingerprint = config.fingerprint();
		let mut guard = self.0.write();
		let (outcome, snapshot) = match guard.as_ref() {
			Some(current) if current.fingerprint == fingerprint =>
				(ReplaceOutcome::Unchanged { generation: current.generation }, None),
			Some(current) => {
				let generation = current.generation + 1;

				(
					ReplaceOutcome::Replaced { previous: current.generation, generation },
					Some(generation),
				)
			},
			None => (ReplaceOutcome::Installed { generation: 1 }, Some(1)),
		};

		if let Some(generation) = snapshot {
			*guard = Some(Arc::new(Snapshot {
				config: Arc::new(config),
				fingerprint,
				loaded_at: OffsetDateTime::now_utc(),
				generation,
			}));
		}

		drop(guard);

		#[cfg(feature = "tracing")]
		tracing::info!(outcome = ?outcome, "client configuration slot updated");

		obs::record_op_outcome(OpKind::Replace, obs::OpOutcome::Success);

		outcome
	}

	/// Loads a configuration file and installs it.
	pub fn load_from(&self, path: impl AsRef<Path>) -> Result<ReplaceOutcome> {
		let config = loader::from_path(path)?;

		Ok(self.replace(config))
	}

	/// Empties the slot, returning the snapshot that was held.
	pub fn clear(&self) -> Option<Arc<Snapshot>> {
		self.0.write().take()
	}
}
