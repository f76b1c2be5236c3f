//! Central system ordering labels to make the per-frame tick explicit.
//! Stages (high-level):
//! 1. Perception (detector output -> hand states)
//! 2. PrePhysics (grab resolution / manual velocity edits before Rapier)
//! 3. Rapier (handled by plugin)
//! 4. PostPhysicsAdjust (bounds recovery, stack measurement)
//! 5. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PerceptionSet; // hand landmark ingestion & state updates

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet; // velocity commands applied before physics simulation step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PostPhysicsAdjustSet; // lightweight corrections after physics
