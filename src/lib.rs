//! Algorithms - small, self-contained algorithm and statistics demonstrations
//!
//! This library provides a binary search engine that reports its step
//! counts, descriptive statistics (mean, median with half splits and
//! quartiles), least-squares linear regression and Big-O growth tables.
//! Every operation is a pure computation over caller-owned data and
//! reports bad input through [`error::AlgorithmError`].

pub mod cli;
pub mod complexity;
pub mod config;
pub mod csv_output;
pub mod error;
mod format;
pub mod json_output;
pub mod regression;
pub mod search;
pub mod stats;

pub use error::{AlgorithmError, Result};
