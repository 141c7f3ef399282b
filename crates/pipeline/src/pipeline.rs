//! The three-slot processing pipeline

use std::sync::Arc;

use trellis_record::Payload;
use trellis_stage::registry::StageRegistry;
use trellis_stage::{
    InputStage, OutputStage, Stage, StageError, StageInstanceConfig, StageResult, TransformStage,
};

use crate::metrics::{PipelineMetrics, PipelineStats};
use crate::{SLOT_TRANSFORM, STAGE_SLOTS};

/// A pipeline with a fixed three-stage sequence
///
/// Slot 0 validates input, slot 1 transforms/enriches, slot 2 formats
/// output. Only slot 1 is ever replaced at runtime, with no validation
/// that the new stage is format-compatible.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use trellis_pipeline::Pipeline;
/// use trellis_record::Payload;
/// use trellis_stage::FallbackTransformStage;
///
/// let mut pipeline = Pipeline::new();
/// pipeline.set_transform_stage(Arc::new(FallbackTransformStage::new()));
///
/// let out = pipeline.run(Payload::text("x")).unwrap();
/// assert!(!out.as_enriched().unwrap().meta.enriched);
/// ```
pub struct Pipeline {
    /// Interface-typed stage slots, in execution order
    stages: [Arc<dyn Stage>; STAGE_SLOTS],

    /// Processed/error counters
    metrics: PipelineMetrics,
}

impl Pipeline {
    /// Create a pipeline with the default stages
    pub fn new() -> Self {
        Self::with_transform(Arc::new(TransformStage::default()))
    }

    /// Create a pipeline with the given stage in the transform slot
    pub fn with_transform(transform: Arc<dyn Stage>) -> Self {
        Self {
            stages: [Arc::new(InputStage::new()), transform, Arc::new(OutputStage::new())],
            metrics: PipelineMetrics::new(),
        }
    }

    /// Create a pipeline whose transform slot is built from configuration
    ///
    /// # Errors
    /// Returns `StageError::Config` if the registry rejects the config.
    pub fn from_registry(
        registry: &StageRegistry,
        config: &StageInstanceConfig,
    ) -> StageResult<Self> {
        let transform = registry.create(&config.stage_type, config)?;
        Ok(Self::with_transform(transform))
    }

    /// Thread a payload through all three stages in order
    ///
    /// On full success the processed counter moves by exactly one and the
    /// final payload is returned. A stage failure propagates to the caller
    /// without being recorded here; whoever catches it decides whether to
    /// call [`record_error`](Self::record_error).
    pub fn run(&self, input: Payload) -> StageResult<Payload> {
        let mut current = input;

        for stage in &self.stages {
            current = stage.process(current)?;
        }

        self.metrics.record_processed();
        tracing::trace!(stages = ?self.stage_names(), "pipeline run complete");

        Ok(current)
    }

    /// Replace the transform slot unconditionally
    pub fn set_transform_stage(&mut self, stage: Arc<dyn Stage>) {
        tracing::debug!(stage = stage.name(), "transform slot replaced");
        self.stages[SLOT_TRANSFORM] = stage;
    }

    /// Record a failure caught by this pipeline's caller
    ///
    /// Moves the error counter by one and stores the rendered
    /// `"{kind}: {message}"` descriptor.
    pub fn record_error(&self, err: &StageError) {
        self.metrics.record_error(err.describe());
    }

    /// Get a snapshot of this pipeline's counters
    pub fn stats(&self) -> PipelineStats {
        self.metrics.snapshot()
    }

    /// Names of the installed stages, in slot order (for diagnostics)
    pub fn stage_names(&self) -> [&'static str; STAGE_SLOTS] {
        [
            self.stages[0].name(),
            self.stages[1].name(),
            self.stages[2].name(),
        ]
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stage_names())
            .field("stats", &self.stats())
            .finish()
    }
}
