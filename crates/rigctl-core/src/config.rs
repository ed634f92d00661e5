use crate::error::{Result, RigError};
use crate::types::RigAction;
use std::fmt;

pub const DEFAULT_API_URL: &str = "https://api2.nicehash.com";

const KEYS_HINT: &str = "Get keys from https://www.nicehash.com/my/settings/keys";
const ORG_HINT: &str = "Get the organization id from https://www.nicehash.com/my/settings/keys";
const RIG_HINT: &str = "Get the rig id from https://www.nicehash.com/my/mining/rigs/";

// ---------------------------------------------------------------------------
// RawSettings
// ---------------------------------------------------------------------------

/// Settings as they arrive from flags or the environment, before validation.
#[derive(Debug, Clone, Default)]
pub struct RawSettings {
    pub action: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub org_id: Option<String>,
    pub rig_id: Option<String>,
    pub api_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
    pub org_id: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("org_id", &self.org_id)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub action: RigAction,
    pub credentials: Credentials,
    pub rig_id: String,
    pub api_url: String,
}

impl Settings {
    /// Validate raw input. Checks run in a fixed order (action, key, secret,
    /// organization, rig) and the first failure is returned. An empty
    /// credential or rig id counts as missing; an empty action is invalid.
    pub fn from_raw(raw: RawSettings) -> Result<Self> {
        let action: RigAction = raw
            .action
            .as_deref()
            .map(str::parse::<RigAction>)
            .transpose()?
            .unwrap_or_default();

        let api_key = require(raw.api_key, "API key", "--api-key", KEYS_HINT)?;
        let api_secret = require(raw.api_secret, "API secret", "--api-secret", KEYS_HINT)?;
        let org_id = require(raw.org_id, "Organization id", "--org-id", ORG_HINT)?;
        let rig_id = require(raw.rig_id, "Rig id", "--rig-id", RIG_HINT)?;

        let api_url = non_empty(raw.api_url)
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Settings {
            action,
            credentials: Credentials {
                api_key,
                api_secret,
                org_id,
            },
            rig_id,
            api_url,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn require(
    value: Option<String>,
    what: &'static str,
    flag: &'static str,
    hint: &'static str,
) -> Result<String> {
    non_empty(value).ok_or(RigError::MissingSetting { what, flag, hint })
}
