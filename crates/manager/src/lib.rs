//! Trellis - Manager
//!
//! Owns a collection of adapters, chains their pipelines in registration
//! order, and drives the failure/recovery protocol.
//!
//! # Architecture
//!
//! ```text
//!              ┌──────────── Manager ────────────┐
//! [Raw text] ──→ [Adapter A] → [Adapter B] → [Adapter C] ──→ [Summary]
//!                     │
//!                     └─ recovery: inject fault → observe failure
//!                        → substitute shared fallback transform
//! ```
//!
//! # Key Design
//!
//! - **Chaining never short-circuits**: Each adapter converts its own
//!   failures into strings, so an error summary simply becomes the next
//!   adapter's raw input
//! - **Explicit state machine**: `Normal → Failing → Recovered`,
//!   transitioned only by the manager, never inferred from stage identity
//! - **One shared fallback**: A single stateless fallback transform
//!   instance serves every recovery

mod error;
mod manager;
mod recovery;

pub use error::{ManagerError, Result};
pub use manager::Manager;
pub use recovery::RecoveryState;
