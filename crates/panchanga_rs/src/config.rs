//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! ayanamsa = "lahiri"
//! timezone_offset_minutes = 330
//! masa_convention = "amanta"
//! dasha_depth = 3
//! mangal_reference = "lagna"
//!
//! [riseset]
//! refraction_arcmin = 34.0
//!
//! [locator]
//! step_days = 0.25
//!
//! [sankranti.punya]
//! solstice_before_fraction = 0.6
//! ```
//!
//! Every key is optional; omitted keys take the [`Default`] value.

use std::path::Path;

use serde::{Deserialize, Serialize};

use panchanga_ephem::{AyanamsaModel, RiseSetConfig};
use panchanga_search::{KundliConfig, LocatorConfig, PanchangConfig, PunyaKalamConfig};
use panchanga_vedic_base::dasha::DEFAULT_DASHA_DEPTH;
use panchanga_vedic_base::{MangalReference, MasaConvention};

use crate::error::PanchangaError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SankrantiSettings {
    pub punya: PunyaKalamConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default: Lahiri.
    pub ayanamsa: AyanamsaModel,
    /// Minutes east of UTC. `None` falls back to `round(lon / 15) * 60`,
    /// which can misplace civil-day boundaries near local midnight.
    pub timezone_offset_minutes: Option<i32>,
    /// Default: amanta.
    pub masa_convention: MasaConvention,
    /// Vimshottari levels in a kundli, 1..=5. Default: 3.
    pub dasha_depth: u8,
    /// Default: lagna.
    pub mangal_reference: MangalReference,
    pub riseset: RiseSetConfig,
    pub locator: LocatorConfig,
    pub sankranti: SankrantiSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ayanamsa: AyanamsaModel::Lahiri,
            timezone_offset_minutes: None,
            masa_convention: MasaConvention::Amanta,
            dasha_depth: DEFAULT_DASHA_DEPTH,
            mangal_reference: MangalReference::Lagna,
            riseset: RiseSetConfig::default(),
            locator: LocatorConfig::default(),
            sankranti: SankrantiSettings::default(),
        }
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, PanchangaError> {
        let config: Self = toml::from_str(s).map_err(|e| PanchangaError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PanchangaError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| PanchangaError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, PanchangaError> {
        toml::to_string(self).map_err(|e| PanchangaError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), PanchangaError> {
        let invalid = |msg: &str| PanchangaError::InvalidInput(msg.to_string());
        self.panchang().validate().map_err(invalid)?;
        self.kundli().validate().map_err(invalid)?;
        Ok(())
    }

    /// This config with every field `options` sets replaced.
    pub fn with_options(mut self, options: &Options) -> Self {
        if let Some(model) = options.ayanamsa_model {
            self.ayanamsa = model;
        }
        if let Some(minutes) = options.timezone_offset_minutes {
            self.timezone_offset_minutes = Some(minutes);
        }
        if let Some(convention) = options.masa_convention {
            self.masa_convention = convention;
        }
        self
    }

    pub fn panchang(&self) -> PanchangConfig {
        PanchangConfig {
            ayanamsa: self.ayanamsa,
            timezone_offset_minutes: self.timezone_offset_minutes,
            masa_convention: self.masa_convention,
            riseset: self.riseset,
            locator: self.locator,
            punya: self.sankranti.punya,
        }
    }

    pub fn kundli(&self) -> KundliConfig {
        KundliConfig {
            ayanamsa: self.ayanamsa,
            dasha_depth: self.dasha_depth,
            mangal_reference: self.mangal_reference,
        }
    }
}

/// Per-query overrides on top of a [`Config`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub ayanamsa_model: Option<AyanamsaModel>,
    pub timezone_offset_minutes: Option<i32>,
    pub masa_convention: Option<MasaConvention>,
}
