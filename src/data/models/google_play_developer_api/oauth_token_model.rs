use serde::{Deserialize, Serialize};

/// Claims of the self-signed assertion exchanged for an access token.
///
/// https://developers.google.com/identity/protocols/oauth2/service-account#authorizingrequests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ServiceAccountClaims {
    /// The email address of the service account.
    pub(crate) iss: String,
    pub(crate) sub: String,
    /// Space-delimited list of the permissions the application requests.
    pub(crate) scope: String,
    /// The token endpoint the assertion is sent to.
    pub(crate) aud: String,
    pub(crate) iat: i64,
    pub(crate) exp: i64,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct TokenRequestModel {
    pub(crate) grant_type: String,
    pub(crate) assertion: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TokenResponseModel {
    pub(crate) access_token: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) token_type: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) expires_in: Option<i64>,
}
