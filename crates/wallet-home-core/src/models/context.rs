use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Identity of a wallet (HD, hardware or imported)
    WalletId
);
string_id!(AccountId);
string_id!(NetworkId);

/// The wallet shown on the home screen
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletInfo {
    pub id: WalletId,
    /// Whether the user has confirmed saving the recovery phrase
    pub backuped: bool,
}

impl WalletInfo {
    pub fn new(id: impl Into<WalletId>, backuped: bool) -> Self {
        Self {
            id: id.into(),
            backuped,
        }
    }
}

/// Account/network pair a fetch can be issued for
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchTarget {
    pub account_id: AccountId,
    pub network_id: NetworkId,
}

/// Currently selected wallet, account and network.
/// Any part may be missing, e.g. before the first wallet is created.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveContext {
    pub wallet: Option<WalletInfo>,
    pub account_id: Option<AccountId>,
    pub network_id: Option<NetworkId>,
}

impl ActiveContext {
    pub fn new(
        wallet: Option<WalletInfo>,
        account_id: Option<AccountId>,
        network_id: Option<NetworkId>,
    ) -> Self {
        Self {
            wallet,
            account_id,
            network_id,
        }
    }

    pub fn wallet_id(&self) -> Option<&WalletId> {
        self.wallet.as_ref().map(|w| &w.id)
    }

    /// Both ids, or None if either is absent
    pub fn fetch_target(&self) -> Option<FetchTarget> {
        match (&self.account_id, &self.network_id) {
            (Some(account_id), Some(network_id)) => Some(FetchTarget {
                account_id: account_id.clone(),
                network_id: network_id.clone(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_target_requires_both_ids() {
        let ctx = ActiveContext::new(None, Some("A1".into()), None);
        assert!(ctx.fetch_target().is_none());

        let ctx = ActiveContext::new(None, None, Some("eth-main".into()));
        assert!(ctx.fetch_target().is_none());

        let ctx = ActiveContext::new(None, Some("A1".into()), Some("eth-main".into()));
        let target = ctx.fetch_target().unwrap();
        assert_eq!(target.account_id.as_str(), "A1");
        assert_eq!(target.network_id.as_str(), "eth-main");
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let ctx = ActiveContext::new(
            Some(WalletInfo::new("hd-1", false)),
            Some("A1".into()),
            Some("eth-main".into()),
        );
        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json["accountId"], "A1");
        assert_eq!(json["wallet"]["id"], "hd-1");
    }
}
