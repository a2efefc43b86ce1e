//! Status messages for operation feedback.

use std::fmt;

use crate::error::TrackerError;

/// One-line outcome message.
///
/// Rejections (an unknown task or an illegal transition) are reported
/// separately from other failures since callers usually just show them and
/// carry on.
pub enum OperationStatus {
    Rejected(String),
    Failed(String),
}

impl OperationStatus {
    pub fn from_error(error: &TrackerError) -> Self {
        if error.is_rejection() {
            Self::Rejected(error.to_string())
        } else {
            Self::Failed(error.to_string())
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(message) => writeln!(f, "Rejected: {message}"),
            Self::Failed(message) => writeln!(f, "Error: {message}"),
        }
    }
}
