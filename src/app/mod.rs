// SoccerRank - app/mod.rs
//
// Application layer: argument validation and pipeline orchestration.
// Dependencies: core and platform layers.

pub mod args;
pub mod pipeline;
