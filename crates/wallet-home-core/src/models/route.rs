use serde::{Deserialize, Serialize};

/// Screens the home controller can ask the navigator to open
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// First-run push notification guide, presented as a modal
    GuideToPushFirstTime,
}

impl Route {
    /// Root / modal / screen path understood by the navigator
    pub fn path(&self) -> [&'static str; 3] {
        match self {
            Self::GuideToPushFirstTime => ["Modal", "PushNotification", "GuideToPushFirstTime"],
        }
    }
}
