//! Configuration payload import/export.
//!
//! The editor exchanges JSON with the configuration backend in two
//! directions: a [`BuildRequest`] goes out when the operator builds or
//! saves, and a [`ParsedConfig`] comes back when an existing configuration
//! is loaded. The adapter functions translate between those wire shapes and
//! the live session.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use zoneline::format::{to_build_request, BuildOptions};
//!
//! let options = BuildOptions::new().config_name("lobby-entrance");
//! let request = to_build_request(&state, &options)?;
//! let body = request.to_json()?;
//! ```

mod adapter;
mod error;
mod payload;

#[cfg(test)]
mod tests;

pub use adapter::{BuildOptions, load_session, to_build_request};
pub use error::FormatError;
pub use payload::{
    BuildRequest, LineEntry, ModelParams, ParsedConfig, PointEntry, RegionEntry, SourceMode,
};
