//! Pegasos sentiment inspection
//!
//! The `classifier` module is the scoring core: a validated linear model, the
//! bag-of-words scorer and a keyword baseline. `cli` and `config` are the
//! terminal front end built on top of it.

pub mod classifier;
pub mod cli;
pub mod config;
