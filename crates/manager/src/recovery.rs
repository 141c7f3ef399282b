//! Recovery protocol state

use std::fmt;

/// Recovery state of one registered pipeline
///
/// Transitions are driven only by the manager:
/// `Normal → Failing` when a fault-configured transform is installed, and
/// `Failing → Recovered` when the observed failure has been recorded and
/// the fallback transform substituted. `Recovered` is terminal; there is
/// no automatic return to `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryState {
    /// Default transform stage in place
    #[default]
    Normal,

    /// Fault-configured transform installed; a failure is expected
    Failing,

    /// Fallback transform installed after an observed failure
    Recovered,
}

impl RecoveryState {
    /// Whether this state ends the recovery protocol
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Recovered)
    }
}

impl fmt::Display for RecoveryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Normal => "normal",
            Self::Failing => "failing",
            Self::Recovered => "recovered",
        };
        write!(f, "{name}")
    }
}
