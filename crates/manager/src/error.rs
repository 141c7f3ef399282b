//! Manager error types

use thiserror::Error;

use trellis_record::PipelineId;
use trellis_stage::StageError;

/// Manager errors
#[derive(Debug, Error)]
pub enum ManagerError {
    /// No adapter registered at this index
    #[error("pipeline not registered: {0}")]
    UnknownPipeline(usize),

    /// The injected fault did not produce the expected failure; the
    /// pipeline is left in the failing configuration
    #[error("fault injection did not trigger on pipeline {0}")]
    FaultNotTriggered(PipelineId),

    /// The probe run after fallback substitution failed
    #[error("recovery run failed on pipeline {id}")]
    RecoveryFailed {
        /// The pipeline that failed to recover
        id: PipelineId,
        /// The stage failure observed during the probe run
        #[source]
        source: StageError,
    },
}

/// Result type for manager operations
pub type Result<T> = std::result::Result<T, ManagerError>;
