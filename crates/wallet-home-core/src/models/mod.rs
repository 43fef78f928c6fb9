pub mod context;
pub mod platform;
pub mod push;
pub mod route;
pub mod tab;

pub use context::{AccountId, ActiveContext, FetchTarget, NetworkId, WalletId, WalletInfo};
pub use platform::Platform;
pub use push::PushNotificationSettings;
pub use route::Route;
pub use tab::HomeTab;
