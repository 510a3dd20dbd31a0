//! Process-wide policy slot, written once at startup and read-only afterwards.

use crate::cors::Cors;
use once_cell::sync::OnceCell;
use thiserror::Error;

static POLICY: OnceCell<Cors> = OnceCell::new();

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("a process-wide cors policy is already installed")]
pub struct AlreadyInstalled;

/// Installs `cors` as the process-wide policy. Only the first call succeeds.
pub fn install(cors: Cors) -> Result<&'static Cors, AlreadyInstalled> {
    POLICY.set(cors).map_err(|_| AlreadyInstalled)?;
    POLICY.get().ok_or(AlreadyInstalled)
}

/// Returns the installed policy, if any.
pub fn get() -> Option<&'static Cors> {
    POLICY.get()
}

#[cfg(test)]
#[path = "global_test.rs"]
mod global_test;
