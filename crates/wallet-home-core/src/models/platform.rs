use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HomeError;

/// Host the app is running on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Native,
    Desktop,
    Web,
    Extension,
}

impl Platform {
    /// Native mobile builds are the only ones with OS push delivery
    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native)
    }
}

impl FromStr for Platform {
    type Err = HomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "native" => Ok(Self::Native),
            "desktop" => Ok(Self::Desktop),
            "web" => Ok(Self::Web),
            "extension" => Ok(Self::Extension),
            other => Err(HomeError::Config {
                message: format!("unknown platform '{}'", other),
            }),
        }
    }
}
