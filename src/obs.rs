//! Optional observability helpers for loader, slot, and hosted-UI operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` (default) to emit structured spans named `amplify_config.op` with the
//!   `op` (operation) and `stage` (call site) fields.
//! - Enable `metrics` to increment the `amplify_config_op_total` counter for every
//!   attempt/success/failure, labeled by `op` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Operations observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
	/// Parsing and validating a configuration payload.
	Load,
	/// Swapping the process-wide snapshot.
	Replace,
	/// Deriving hosted-UI URLs.
	HostedUi,
}
impl OpKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OpKind::Load => "load",
			OpKind::Replace => "replace",
			OpKind::HostedUi => "hosted_ui",
		}
	}
}
impl Display for OpKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpOutcome {
	/// Entry to an operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl OpOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OpOutcome::Attempt => "attempt",
			OpOutcome::Success => "success",
			OpOutcome::Failure => "failure",
		}
	}

	/// Maps a result onto its terminal outcome.
	pub fn of<T, E>(result: &Result<T, E>) -> Self {
		match result {
			Ok(_) => OpOutcome::Success,
			Err(_) => OpOutcome::Failure,
		}
	}
}
impl Display for OpOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs `op` inside an [`OpSpan`] and records attempt plus terminal outcome.
pub fn observe<T, E, F>(kind: OpKind, stage: &'static str, op: F) -> Result<T, E>
where
	F: FnOnce() -> Result<T, E>,
	E: Display,
{
	let _guard = OpSpan::new(kind, stage).entered();

	record_op_outcome(kind, OpOutcome::Attempt);

	let result = op();

	#[cfg(feature = "tracing")]
	if let Err(e) = &result {
		::tracing::warn!(error = %e, "operation failed");
	}

	record_op_outcome(kind, OpOutcome::of(&result));

	result
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn observe_passes_results_through() {
		let ok: Result<u8, String> = observe(OpKind::Load, "test", || Ok(7));
		let err: Result<u8, String> = observe(OpKind::Replace, "test", || Err("boom".into()));

		assert_eq!(ok, Ok(7));
		assert_eq!(err, Err("boom".to_string()));
		assert_eq!(OpOutcome::of(&ok), OpOutcome::Success);
		assert_eq!(OpOutcome::of(&err), OpOutcome::Failure);
	}
}
