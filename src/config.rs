//! A module for loading and validating calculation scenarios.
//!
//! A scenario file holds a `tunnel` section and a `capacity` section. Every
//! field is optional; missing values fall back to the reference case.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::capacity::SectionProperties;
use crate::error::{MechError, MechResult};
use crate::material::{GroundProperties, LiningProperties};
use crate::tunnel::{InterfaceCondition, LoadState};

/// Represents a complete scenario for both calculators.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub tunnel: TunnelConfig,
    pub capacity: CapacityConfig,
}

impl Config {
    /// Validates both calculators' inputs.
    pub fn validate(&self) -> MechResult<()> {
        self.tunnel.validate()?;
        self.capacity.validate()?;
        Ok(())
    }
}

/// Lined circular tunnel scenario.
///
/// # Examples
///
/// ```
/// use geoform::config::TunnelConfig;
/// use geoform::tunnel::InterfaceCondition;
///
/// let tunnel = TunnelConfig::default();
/// assert_eq!(tunnel.interface, InterfaceCondition::NoSlip);
/// assert_eq!(tunnel.samples, 200);
/// assert!(tunnel.validate().is_ok());
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TunnelConfig {
    pub interface: InterfaceCondition,
    pub ground: GroundProperties,
    pub lining: LiningProperties,
    pub load: LoadState,
    /// Number of angular samples over [0°, 90°].
    pub samples: usize,
    /// Destination of the response table.
    pub output: PathBuf,
}

impl Default for TunnelConfig {
    fn default() -> Self {
        TunnelConfig {
            interface: InterfaceCondition::NoSlip,
            ground: GroundProperties::default(),
            lining: LiningProperties::default(),
            load: LoadState::default(),
            samples: 200,
            output: PathBuf::from("analytic_results_0_90.csv"),
        }
    }
}

impl TunnelConfig {
    pub fn validate(&self) -> MechResult<()> {
        self.ground.validate()?;
        self.lining.validate()?;
        self.load.validate()?;
        require_samples(self.samples)
    }
}

/// Section capacity scenario.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CapacityConfig {
    pub section: SectionProperties,
    /// Samples per Q–N branch.
    pub samples: usize,
    /// Destination of the combined Q–N table.
    pub output: PathBuf,
    /// Destination of the M–N point list.
    pub mn_output: PathBuf,
    /// Two-column comparison data drawn over the Q–N diagram.
    pub reference_qn: Option<PathBuf>,
    /// Two-column comparison data drawn over the M–N envelope.
    pub reference_mn: Option<PathBuf>,
}

impl Default for CapacityConfig {
    fn default() -> Self {
        CapacityConfig {
            section: SectionProperties::default(),
            samples: 1000,
            output: PathBuf::from("Qn_table.csv"),
            mn_output: PathBuf::from("Mn_envelope.csv"),
            reference_qn: None,
            reference_mn: None,
        }
    }
}

impl CapacityConfig {
    pub fn validate(&self) -> MechResult<()> {
        self.section.validate()?;
        require_samples(self.samples)
    }
}

fn require_samples(samples: usize) -> MechResult<()> {
    if samples < 2 {
        return Err(MechError::domain("samples", samples as f64, "at least two samples are required"));
    }
    Ok(())
}

/// Parses a scenario from text in the given format.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<Config> {
    let config = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };
    Ok(config)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            Some("toml") => Ok(ConfigFormat::Toml),
            other => bail!("unsupported config extension {:?}, expected .yaml, .yml or .toml", other),
        }
    }
}

/// Loads a scenario from a YAML or TOML file, chosen by extension.
///
/// # Errors
///
/// Fails if the file cannot be read, cannot be parsed, or has an unknown extension.
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<Config> {
    let path = config_path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse_config(&content, format).with_context(|| format!("failed to parse {}", path.display()))
}
