//! # Mental Health BERT
//!
//! Classifies free text into one of five mental health categories with a
//! pretrained BERT sequence classifier, either once from standard input or
//! behind a small HTTP endpoint.
#![forbid(unsafe_code)]

/// Fixed label set
pub mod labels;

/// Runtime configuration
pub mod config;

/// Errors
pub mod error;

/// Models
pub mod models;

/// Pipelines
pub mod pipelines;

/// Utilities
pub mod utils;

/// One-shot standard input/output entry point
pub mod cli;

/// HTTP entry point
pub mod server;

/// Error macros
#[macro_use]
extern crate anyhow;
