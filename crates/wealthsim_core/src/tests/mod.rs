//! Integration tests for the wealthsim simulation engine
//!
//! Tests are organized by topic:
//! - `scenarios` - Hand-calculated paths and fixed-seed determinism
//! - `properties` - Invariants checked over generated configurations
