//! Config parsing and signal set resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{BehaviorConfig, LabelConfig, MergesignalConfigV1, SignalsConfig};
pub use resolve::{Behavior, ResolvedConfig};

/// Stable schema identifier for `mergesignal.toml`.
pub const SCHEMA_CONFIG_V1: &str = "mergesignal.config.v1";

/// Parse `mergesignal.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<MergesignalConfigV1> {
    let cfg: MergesignalConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the signal sets used by the engine, compiling branch patterns.
pub fn resolve_config(cfg: MergesignalConfigV1) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg)
}
