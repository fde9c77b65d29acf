use crate::error::ReaderError;
use std::fmt;
use std::str::FromStr;

pub trait AssetKey {
    fn key(&self) -> &str;
}

pub trait AssetDescription {
    fn description(&self) -> &str;
}

/// Polarisation channels published for Sentinel-1 L1C GRD scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarisation {
    Vv,
    Vh,
}

impl Polarisation {
    pub const ALL: [Polarisation; 2] = [Polarisation::Vv, Polarisation::Vh];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vv => "vv",
            Self::Vh => "vh",
        }
    }
}

impl AssetKey for Polarisation {
    fn key(&self) -> &str {
        self.as_str()
    }
}

impl AssetDescription for Polarisation {
    fn description(&self) -> &str {
        match self {
            Self::Vv => "Vertical transmit, vertical receive",
            Self::Vh => "Vertical transmit, horizontal receive",
        }
    }
}

impl FromStr for Polarisation {
    type Err = ReaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ReaderError::InvalidAssetName(s.to_string()))
    }
}

impl fmt::Display for Polarisation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
