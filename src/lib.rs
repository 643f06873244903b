//! AHP Engine - Analytic Hierarchy Process weights and consistency
//!
//! This crate turns pairwise comparison judgments into criteria weights,
//! consistency ratios and an overall ranking of alternatives, with a guided
//! decision model and file loading around the pure engine.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
