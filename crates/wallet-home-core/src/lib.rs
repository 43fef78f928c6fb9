pub mod config;
pub mod constants;
pub mod error;
pub mod home;
pub mod models;
pub mod preferences;
pub mod services;
pub mod tracing_setup;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::HomeConfig;
pub use error::HomeError;
pub use home::{HomeController, HomeInputs, HomeSnapshot, HomeView};
pub use models::{
    AccountId, ActiveContext, FetchTarget, HomeTab, NetworkId, Platform,
    PushNotificationSettings, Route, WalletId, WalletInfo,
};
pub use preferences::StatusPreferences;
pub use services::{
    FetchTokensRequest, HomeServices, InMemoryStatusStore, Navigator, PriceCache, StatusStore,
    TokenService,
};
