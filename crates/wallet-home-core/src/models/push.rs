use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushNotificationSettings {
    #[serde(default)]
    pub push_enable: bool,
}

impl PushNotificationSettings {
    pub fn new(push_enable: bool) -> Self {
        Self { push_enable }
    }
}
