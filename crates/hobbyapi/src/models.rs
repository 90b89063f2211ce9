use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub hobbies: Vec<String>,
    #[serde(default)]
    pub challenge_token: Option<String>,
}
