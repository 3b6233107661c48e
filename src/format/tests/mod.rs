//! Unit tests for configuration payload handling.
//!
//! These tests verify the wire shapes, the session/payload conversions,
//! and that a built configuration can be loaded back without loss.

mod payload_tests;
mod roundtrip_tests;
