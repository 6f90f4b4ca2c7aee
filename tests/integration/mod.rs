//! Integration test modules.
//!
//! Each module focuses on one behaviour of the products endpoint.

pub mod config_tests;
pub mod duplicate_tests;
