//! # Style Profiler
//!
//! Reads an interview transcript split into timestamped chunks and produces a
//! style profile of the subject speaker plus per-chunk scores for clip
//! selection.
//!
//! ## Architecture
//!
//! - **[`config`]**: configuration loading and validation
//! - **[`logging`]**: stderr and daily log file output
//! - **[`transcript`]**: chunk markers, chunk parsing, speaker filtering, input checks
//! - **[`text`]**: tokenizer, sentence splitter, stop words, POS tagging, key phrases
//! - **[`sentiment`]**: polarity scorer trait with VADER and scripted implementations
//! - **[`indicators`]**: keyword category tables matched against word sets
//! - **[`agents`]**: voice, theme, values, emotional tone and relatability analyzers
//! - **[`scoring`]**: per-chunk emotional tone and relatability scores with theme tags
//! - **[`profile`]**: runs the agents and renders the profile document
//! - **[`output`]**: writes the profile and chunk scores to disk

pub mod agents;
pub mod config;
pub mod indicators;
pub mod logging;
pub mod output;
pub mod profile;
pub mod scoring;
pub mod sentiment;
pub mod text;
pub mod transcript;
