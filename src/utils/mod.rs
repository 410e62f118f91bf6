//! Utility functions for short code generation and URL processing.
//!
//! This module provides helper functions used across the application:
//!
//! - [`base62`] - Base-62 integer encoding
//! - [`code_generator`] - Deterministic short code generation
//! - [`collision`] - Collision resolution against an existence oracle
//! - [`url_normalizer`] - URL normalization and sanitization

pub mod base62;
pub mod code_generator;
pub mod collision;
pub mod url_normalizer;
