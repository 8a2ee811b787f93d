use serde::{Deserialize, Serialize};

/// The profile the messaging platform returns for a logged-in user. The
/// platform serializes its fields in camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginProfile {
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}
