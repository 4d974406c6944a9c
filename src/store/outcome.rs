//! What a store mutation reports back to its caller

use std::fmt;
use std::sync::Arc;

use super::snapshot::Snapshot;

/// Which side of persistence failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// The stored record could not be read or parsed at startup
    Load,
    /// A write-through after a mutation failed
    Save,
}

/// A non-fatal persistence failure
///
/// The in-memory state stays authoritative for the session; the warning only
/// tells the user their changes may not survive a restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistWarning {
    pub kind: WarningKind,
    pub message: String,
}

impl PersistWarning {
    pub fn load(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::Load,
            message: message.into(),
        }
    }

    pub fn save(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::Save,
            message: message.into(),
        }
    }
}

impl fmt::Display for PersistWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            WarningKind::Load => write!(
                f,
                "Saved data could not be loaded, starting empty: {}",
                self.message
            ),
            WarningKind::Save => write!(
                f,
                "Changes may not survive a restart: {}",
                self.message
            ),
        }
    }
}

/// Result of a store mutator
#[derive(Debug, Clone)]
pub struct Mutation {
    /// Whether a record with the given id existed
    ///
    /// Always true for adds. False means the call was a no-op.
    pub found: bool,
    /// Set when the write-through failed
    pub warning: Option<PersistWarning>,
    /// The store's snapshot after the call
    pub snapshot: Arc<Snapshot>,
}

impl Mutation {
    /// True when the change was applied and persisted
    pub fn is_clean(&self) -> bool {
        self.found && self.warning.is_none()
    }
}
