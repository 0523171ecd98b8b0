use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::leaderboard::ProfileStyle;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub display_name: String,
    #[serde(default)]
    pub profile_style: ProfileStyle,
}

impl UserProfile {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            display_name: String::new(),
            profile_style: ProfileStyle::default(),
        }
    }
}
