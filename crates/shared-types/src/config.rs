use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://credit-sea-beige.vercel.app";
const DEFAULT_OFFICER_NAME: &str = "Jon Okoh";
const DEFAULT_OFFICER_ID: &str = "12140090";

/// Where the loan service lives and how to authenticate against it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Host serving the loan list endpoints, when it differs from `base_url`.
    #[serde(default)]
    pub list_base_url: Option<String>,
    /// Bearer token attached to every request when set.
    #[serde(default)]
    pub token: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            list_base_url: None,
            token: None,
        }
    }
}

impl ApiSettings {
    /// Base URL for `/loans/?role=` and `/loans/id?idNumber=`.
    pub fn list_base_url(&self) -> &str {
        self.list_base_url.as_deref().unwrap_or(&self.base_url)
    }
}

/// Identity used by the verifier dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerifierSettings {
    /// Name sent as `loanOfficer` with verifier status updates.
    #[serde(default = "default_officer_name")]
    pub officer_name: String,
    /// Officer id used when the route does not carry one.
    #[serde(default = "default_officer_id")]
    pub default_officer_id: String,
}

impl Default for VerifierSettings {
    fn default() -> Self {
        Self {
            officer_name: default_officer_name(),
            default_officer_id: default_officer_id(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub verifier: VerifierSettings,
}

impl ClientConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Point every endpoint at one host, ignoring blank overrides.
    ///
    /// A configured `list_base_url` is dropped so the list requests follow
    /// the override too.
    pub fn with_base_url_override(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.trim_end_matches('/').to_string();
            self.api.list_base_url = None;
        }
        self
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_officer_name() -> String {
    DEFAULT_OFFICER_NAME.to_string()
}

fn default_officer_id() -> String {
    DEFAULT_OFFICER_ID.to_string()
}
