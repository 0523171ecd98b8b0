use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::ProfileStyle;

/// Request payload for updating a user's public profile
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    #[validate(length(
        min = 1,
        max = 64,
        message = "Display name must be between 1 and 64 characters"
    ))]
    pub display_name: Option<String>,
    pub profile_style: ProfileStyle,
}
