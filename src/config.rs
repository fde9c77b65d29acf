use crate::asset::Polarisation;
use crate::reader::ReaderOptions;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Batch of scenes to resolve, read from a TOML file.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct ReaderConfig {
    /// AWS profile used for requester-pays access; default chain when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    sceneids: Vec<String>,
    #[serde(default)]
    assets: Vec<String>,
    #[serde(default)]
    pub reader_options: ReaderOptions,
}

impl ReaderConfig {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn write<P: AsRef<Path>>(self: &Self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn from_template(table: &toml::Table) -> Result<Self> {
        let config: Self = toml::from_str(&table.to_string())?;
        Ok(config)
    }

    /// Scene ids in file order with duplicates removed.
    pub fn sceneids(self: &Self) -> Option<Vec<String>> {
        if self.sceneids.is_empty() {
            return None;
        }
        let mut seen = HashSet::new();
        let ids = self
            .sceneids
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .cloned()
            .collect::<Vec<_>>();
        Some(ids)
    }

    /// Requested assets; every polarisation when none are listed.
    pub fn assets(self: &Self) -> Result<Vec<Polarisation>> {
        if self.assets.is_empty() {
            return Ok(Polarisation::ALL.to_vec());
        }
        let assets = self
            .assets
            .iter()
            .map(|a| a.parse::<Polarisation>())
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(assets)
    }
}

pub fn config_template() -> toml::Table {
    toml::toml! {
        profile = "default"

        sceneids = [
            "S1A_IW_GRDH_1SDV_20180716T004042_20180716T004107_022812_02792A_FD5B",
            "S1A_IW_GRDH_1SDV_20180716T004042_20180716T004107_022812_02792A_FD5B",
        ]

        assets = ["vv", "vh"]

        [reader_options]
        nodata = 0
    }
}
