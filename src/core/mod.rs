// SoccerRank - core/mod.rs
//
// Core business logic layer: parse -> points -> aggregate -> rank -> report.
// Must NOT depend on: platform, app, or touch the filesystem directly.

pub mod model;
pub mod parser;
pub mod points;
pub mod ranker;
pub mod report;
pub mod table;
