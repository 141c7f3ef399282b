//! The pipeline manager

use std::sync::Arc;

use trellis_adapter::Adapter;
use trellis_pipeline::PipelineStats;
use trellis_record::{Payload, PipelineId, INVALID_FORMAT_SENTINEL, RECOVERY_PROBE};
use trellis_stage::{FallbackTransformStage, Stage, TransformStage};

use crate::error::{ManagerError, Result};
use crate::recovery::RecoveryState;

/// One registered adapter plus its recovery state
struct Entry {
    adapter: Box<dyn Adapter>,
    state: RecoveryState,
}

/// Owns adapters, chains their pipelines, and drives recovery
///
/// Registration order is chaining order: `chain_pipelines` feeds each
/// adapter's output string into the next adapter.
///
/// # Example
///
/// ```
/// use trellis_adapter::{CsvAdapter, JsonAdapter};
/// use trellis_manager::Manager;
///
/// let mut manager = Manager::new();
/// manager.add_pipeline(Box::new(JsonAdapter::new("PIPE_JSON")));
/// manager.add_pipeline(Box::new(CsvAdapter::new("PIPE_CSV")));
///
/// let out = manager.chain_pipelines("100 records");
/// assert_eq!(out, "User activity logged: 1 actions processed");
/// ```
pub struct Manager {
    entries: Vec<Entry>,

    /// Shared fallback transform installed by every recovery. Stateless,
    /// so aliasing across pipelines is safe.
    fallback: Arc<dyn Stage>,
}

impl Manager {
    /// Create a manager with no registered pipelines
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            fallback: Arc::new(FallbackTransformStage::new()),
        }
    }

    /// Register an adapter; returns its index for later recovery calls
    pub fn add_pipeline(&mut self, adapter: Box<dyn Adapter>) -> usize {
        tracing::info!(pipeline = %adapter.id(), "pipeline registered");
        self.entries.push(Entry {
            adapter,
            state: RecoveryState::Normal,
        });
        self.entries.len() - 1
    }

    /// Number of registered pipelines
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no pipelines are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identifiers of the registered pipelines, in chaining order
    pub fn adapter_ids(&self) -> Vec<&PipelineId> {
        self.entries.iter().map(|e| e.adapter.id()).collect()
    }

    /// Recovery state of the pipeline at `index`
    pub fn state(&self, index: usize) -> Option<RecoveryState> {
        self.entries.get(index).map(|e| e.state)
    }

    /// Counter snapshots for every registered pipeline, in chaining order
    pub fn stats(&self) -> Vec<(PipelineId, PipelineStats)> {
        self.entries
            .iter()
            .map(|e| (e.adapter.id().clone(), e.adapter.pipeline().stats()))
            .collect()
    }

    /// Feed the input through every adapter in registration order
    ///
    /// Each adapter's output string becomes the next adapter's raw input;
    /// the final adapter's output is returned. Errors never short-circuit
    /// the chain: a failing adapter's error summary is just another string
    /// to the next adapter. With no registered adapters the input is
    /// returned unchanged.
    pub fn chain_pipelines(&self, input: impl Into<String>) -> String {
        let mut current = input.into();

        tracing::debug!(pipelines = self.entries.len(), "chaining pipelines");
        for entry in &self.entries {
            current = entry.adapter.process(Payload::text(current));
        }

        current
    }

    /// Install the shared fallback transform into the pipeline at `index`
    ///
    /// Direct substitution without fault injection. The pipeline enters
    /// the terminal `Recovered` state and produces degraded records from
    /// then on.
    pub fn recover_pipeline(&mut self, index: usize) -> Result<()> {
        let fallback = Arc::clone(&self.fallback);
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(ManagerError::UnknownPipeline(index))?;

        entry.adapter.pipeline_mut().set_transform_stage(fallback);
        entry.state = RecoveryState::Recovered;
        tracing::info!(
            pipeline = %entry.adapter.id(),
            state = %entry.state,
            "fallback transform installed"
        );

        Ok(())
    }

    /// Drive the full failure/recovery protocol on the pipeline at `index`
    ///
    /// 1. Installs a fault-configured transform and enters `Failing`.
    /// 2. Runs the reserved sentinel input, expecting `InvalidFormat`.
    /// 3. Records the observed failure, substitutes the shared fallback
    ///    transform, enters `Recovered`, and confirms degraded operation
    ///    with a probe run.
    ///
    /// # Errors
    /// - `UnknownPipeline` if nothing is registered at `index`
    /// - `FaultNotTriggered` if the sentinel run unexpectedly succeeds;
    ///   the pipeline is left in the `Failing` configuration
    /// - `RecoveryFailed` if the probe run fails under the fallback
    pub fn simulate_error_and_recover(&mut self, index: usize) -> Result<()> {
        let fallback = Arc::clone(&self.fallback);
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(ManagerError::UnknownPipeline(index))?;
        let id = entry.adapter.id().clone();

        entry.state = RecoveryState::Failing;
        entry
            .adapter
            .pipeline_mut()
            .set_transform_stage(Arc::new(TransformStage::failing_on_invalid()));
        tracing::warn!(pipeline = %id, state = %entry.state, "fault injected into transform slot");

        let err = match entry
            .adapter
            .pipeline()
            .run(Payload::text(INVALID_FORMAT_SENTINEL))
        {
            Err(err) => err,
            Ok(_) => return Err(ManagerError::FaultNotTriggered(id)),
        };

        entry.adapter.pipeline().record_error(&err);
        tracing::info!(
            pipeline = %id,
            error = %err,
            "failure observed, substituting fallback transform"
        );

        entry.adapter.pipeline_mut().set_transform_stage(fallback);
        entry.state = RecoveryState::Recovered;

        entry
            .adapter
            .pipeline()
            .run(Payload::text(RECOVERY_PROBE))
            .map_err(|source| ManagerError::RecoveryFailed {
                id: id.clone(),
                source,
            })?;

        tracing::info!(pipeline = %id, state = %entry.state, "recovery complete, degraded enrichment active");
        Ok(())
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}
