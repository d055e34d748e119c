use crate::error::ClientError;

pub const ACCOUNT_ID_VAR: &str = "HARNESS_ACCOUNT_ID";
pub const API_KEY_VAR: &str = "HARNESS_API_KEY";

/// Account identifier and API key for the Harness CCM API.
///
/// Read once at startup and held for the process lifetime.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub account_id: String,
    pub api_key: String,
}

impl Credentials {
    /// Build credentials, rejecting empty values.
    pub fn new(
        account_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let account_id = account_id.into();
        let api_key = api_key.into();

        if account_id.is_empty() || api_key.is_empty() {
            return Err(ClientError::Config(format!(
                "{ACCOUNT_ID_VAR} and {API_KEY_VAR} environment variables must be set"
            )));
        }

        Ok(Self {
            account_id,
            api_key,
        })
    }

    /// Read credentials from the process environment.
    ///
    /// An unset variable is treated the same as an empty one.
    pub fn from_env() -> Result<Self, ClientError> {
        let account_id = std::env::var(ACCOUNT_ID_VAR).unwrap_or_default();
        let api_key = std::env::var(API_KEY_VAR).unwrap_or_default();
        Self::new(account_id, api_key)
    }
}
