use serde::Deserialize;

/// Body of `/register_input`, from a form post or a query string.
#[derive(Deserialize, Debug, Clone)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}
