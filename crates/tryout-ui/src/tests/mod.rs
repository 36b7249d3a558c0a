//! Behavioral tests for UI wiring
//!
//! This module provides BDD-style tests using given-when-then naming convention.

pub mod navigation_behaviors;
