use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequestBody {
    #[serde(alias = "username")]
    pub nickname: String,
    pub password: String,
}
