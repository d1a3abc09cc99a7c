//! Core library for redditools
//!
//! This crate implements the **Functional Core** of the redditools application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The redditools project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`redditools_core`** (this crate): Pure transformation functions with zero I/O
//! - **`redditools`**: I/O operations and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`reddit`]: Wire types for the Reddit JSON API plus the transformations
//!   that turn raw listings into normalized posts, subreddit summaries, and
//!   depth-bounded comment trees
//!
//! The module contains:
//!
//! - **Domain models**: Structured types representing API responses and outputs
//! - **Transformation functions**: Pure functions that convert API data to domain models
//! - **Comprehensive tests**: Unit tests using fixture data (no mocking)
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use redditools_core::reddit::{build_comment_forest, Listing};
//!
//! // Parse a comment listing fetched by the shell (no HTTP required here)
//! let listing: Listing = serde_json::from_value(fixture)?;
//!
//! // Materialize at most three reply levels, dropping empty placeholders
//! let comments = build_comment_forest(&listing, 3);
//! ```
//!
//! # Pattern Reference
//!
//! This architecture is based on Gary Bernhardt's Functional Core, Imperative Shell pattern.
//! The key insight: **data transformation logic should be pure and ignorant of where data
//! comes from or where it goes**.

pub mod reddit;
