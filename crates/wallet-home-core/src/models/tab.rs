use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HomeError;

/// Content tabs on the wallet home screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HomeTab {
    Tokens,
    Collectibles,
    History,
}

impl HomeTab {
    /// All tabs in display order
    pub const ALL: [HomeTab; 3] = [HomeTab::Tokens, HomeTab::Collectibles, HomeTab::History];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tokens => "Tokens",
            Self::Collectibles => "Collectibles",
            Self::History => "History",
        }
    }

    /// i18n message id for the tab label
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Tokens => "asset__tokens",
            Self::Collectibles => "asset__collectibles",
            Self::History => "transaction__history",
        }
    }
}

impl fmt::Display for HomeTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HomeTab {
    type Err = HomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HomeTab::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| HomeError::UnknownTab {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("tokens".parse::<HomeTab>().unwrap(), HomeTab::Tokens);
        assert_eq!("HISTORY".parse::<HomeTab>().unwrap(), HomeTab::History);
    }

    #[test]
    fn test_parse_unknown_tab() {
        let err = "Staking".parse::<HomeTab>().unwrap_err();
        assert_eq!(
            err,
            HomeError::UnknownTab {
                name: "Staking".to_string()
            }
        );
    }

    #[test]
    fn test_label_keys() {
        let keys: Vec<_> = HomeTab::ALL.iter().map(|t| t.label_key()).collect();
        assert_eq!(
            keys,
            vec!["asset__tokens", "asset__collectibles", "transaction__history"]
        );
    }

    #[test]
    fn test_serde_uses_tab_name() {
        let json = serde_json::to_string(&HomeTab::Collectibles).unwrap();
        assert_eq!(json, "\"Collectibles\"");
    }
}
