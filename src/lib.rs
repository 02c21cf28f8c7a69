//! # Modu Rank Hook
//!
//! Session-end hook that reports token usage to the Modu Rank service.
//!
//! ## Overview
//!
//! The host coding assistant runs the hook once per finished session and
//! writes the session metadata to stdin. The hook:
//! - parses the document, accepting snake_case and camelCase field names
//! - loads the user's rank credentials (absent means not registered)
//! - honours per-project opt-outs
//! - signs the canonical payload with HMAC-SHA256 and POSTs it once
//!
//! Nothing is ever written to stdout and the process always exits 0.

/// Command-line argument parsing and configuration
pub mod cli;

/// Credentials loading
pub mod config;

/// Error types for aborted runs
pub mod error;

/// Project opt-out policy
pub mod exclusion;

/// Pipeline wiring and status lines
pub mod hook;

/// Stdin handling
pub mod input;

/// Diagnostic logging setup
pub mod logging;

/// Data models for hook input, payloads, and results
pub mod models;

/// Alias resolution and payload normalization
pub mod normalize;

/// Request signing
pub mod signing;

/// HTTP submission to the rank service
pub mod submit;
