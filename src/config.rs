//! Settings loading.
//!
//! Settings are layered with the `config` crate: built-in defaults, then an
//! optional settings file (TOML, YAML or JSON, picked by extension), then
//! `PDUWATCH_*` environment variables.
//!
//! ```toml
//! refresh_secs = 30
//! device = "8301"
//!
//! [levels]
//! V = [230, 200]    # warn > crit: alert when voltage drops
//! VA = [4000, 4500] # warn <= crit: alert when apparent power rises
//! ```
//!
//! Entries under `[levels]` are merged over the defaults per unit, so the
//! example above keeps the default `A` and `W` pairs.

use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, ensure, Context, Result};
use config::{Config, Environment, File};
use pduwatch_adapters::DeviceVariant;
use pduwatch_types::{canonical_unit, ThresholdConfig, UNIT_SPECS};
use serde::Deserialize;

/// Default refresh interval for watch mode, in seconds.
pub const DEFAULT_REFRESH_SECS: u64 = 60;

/// Effective runtime settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Threshold pairs keyed by unit.
    pub levels: ThresholdConfig,
    /// Poll interval in watch mode.
    pub refresh: Duration,
    /// Device model to assume for tables without a sysObjectID.
    pub device: Option<DeviceVariant>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            levels: ThresholdConfig::default(),
            refresh: Duration::from_secs(DEFAULT_REFRESH_SECS),
            device: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawSettings {
    levels: ThresholdConfig,
    refresh_secs: u64,
    #[serde(default)]
    device: Option<String>,
}

impl Settings {
    /// Load settings, optionally layering a settings file over the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, environment())
    }

    fn load_with(path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder =
            Config::builder().set_default("refresh_secs", DEFAULT_REFRESH_SECS.to_string())?;
        for (unit, pair) in ThresholdConfig::default().iter() {
            builder = builder.set_default(format!("levels.{unit}"), vec![pair.warn, pair.crit])?;
        }

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let config = builder
            .add_source(env)
            .build()
            .context("failed to load settings")?;

        let raw: RawSettings = config
            .try_deserialize()
            .context("invalid settings")?;
        raw.try_into()
    }
}

impl TryFrom<RawSettings> for Settings {
    type Error = anyhow::Error;

    fn try_from(raw: RawSettings) -> Result<Self> {
        ensure!(raw.refresh_secs > 0, "refresh_secs must be positive");

        let device = raw
            .device
            .map(|name| {
                DeviceVariant::from_name(&name).ok_or_else(|| anyhow!("unknown device: {name}"))
            })
            .transpose()?;

        Ok(Self {
            levels: normalize_levels(raw.levels)?,
            refresh: Duration::from_secs(raw.refresh_secs),
            device,
        })
    }
}

/// `PDUWATCH_*` variables, e.g. `PDUWATCH_REFRESH_SECS=30` or
/// `PDUWATCH_LEVELS__V=230,200`.
fn environment() -> Environment {
    let env = Environment::with_prefix("PDUWATCH")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",");

    UNIT_SPECS.iter().fold(env, |env, spec| {
        env.with_list_parse_key(&format!("levels.{}", spec.unit.to_lowercase()))
    })
}

/// Restore canonical unit spelling and reject pairs that can't be compared.
///
/// Keys may arrive lowercased from the config layer.
fn normalize_levels(levels: ThresholdConfig) -> Result<ThresholdConfig> {
    levels
        .iter()
        .map(|(unit, pair)| {
            ensure!(
                pair.warn.is_finite() && pair.crit.is_finite(),
                "levels for {unit} must be finite numbers"
            );
            let unit = canonical_unit(unit).unwrap_or(unit);
            Ok((unit.to_string(), pair))
        })
        .collect()
}
