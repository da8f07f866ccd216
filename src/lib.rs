//! Deterministic content recommendation and ranking engine.
//!
//! `recommend-core` scores a catalog of articles against contextual signals
//! (the currently-viewed article, a user's tag affinities, behavioral
//! history) and produces an ordered, diversified, explainable list of next
//! articles to read. All operations are deterministic — identical inputs
//! always produce identical ordering and scores.
//!
//! The crate is pure computation: no I/O, no shared state, no wall-clock
//! reads. Every entry point takes `now` as an explicit argument.

pub mod article;
pub mod ranking;
pub mod scoring;
pub mod types;
