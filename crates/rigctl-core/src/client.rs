//! Blocking client for the two NiceHash endpoints a rig action needs.
//!
//! A call is two round trips: an unauthenticated `GET /api/v2/time` to learn
//! the server clock, then a signed `POST` carrying the action. Nothing is
//! retried; any transport or decode error ends the call.

use crate::auth::{self, SigningInput};
use crate::config::{Credentials, Settings};
use crate::error::{Result, RigError};
use crate::types::{RigAction, RigActionRequest, RigActionResponse, ServerTime};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

pub const TIME_PATH: &str = "/api/v2/time";
pub const RIG_STATUS_PATH: &str = "/main/api/v2/mining/rigs/status2";

const CONTENT_TYPE: &str = "application/json;charset=UTF-8";

// ---------------------------------------------------------------------------
// ActionOutcome
// ---------------------------------------------------------------------------

/// Result of a submitted action, kept alongside the exact body the server
/// sent so failures can be shown verbatim.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionOutcome {
    pub action: RigAction,
    pub rig_id: String,
    #[serde(flatten)]
    pub response: RigActionResponse,
    pub raw_body: String,
}

impl ActionOutcome {
    pub fn succeeded(&self) -> bool {
        self.response.success
    }
}

// ---------------------------------------------------------------------------
// RigClient
// ---------------------------------------------------------------------------

pub struct RigClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl RigClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("rigctl/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn fetch_server_time(&self) -> Result<ServerTime> {
        let url = format!("{}{}", self.base_url, TIME_PATH);
        debug!(%url, "fetching server time");

        let response = self.http.get(&url).send()?;
        let status = response.status();
        let body = response.text()?;
        debug!(%status, "server time response");

        let time: ServerTime = serde_json::from_str(&body).map_err(|source| RigError::Decode {
            what: "server time",
            source,
        })?;
        debug!(server_time = time.server_time, "server clock");
        Ok(time)
    }

    /// Sign and submit `request`. A fresh nonce and request id are generated
    /// for every call.
    pub fn set_rig_status(
        &self,
        credentials: &Credentials,
        request: &RigActionRequest,
        server_time: ServerTime,
    ) -> Result<ActionOutcome> {
        let nonce = Uuid::new_v4().to_string();
        let request_id = Uuid::new_v4().to_string();
        let time = server_time.server_time.to_string();
        let payload = serde_json::to_vec(request)?;

        let signature = auth::sign(
            &credentials.api_secret,
            &SigningInput {
                api_key: &credentials.api_key,
                time: &time,
                nonce: &nonce,
                org_id: &credentials.org_id,
                method: "POST",
                path: RIG_STATUS_PATH,
                query: "",
                body: Some(payload.as_slice()),
            },
        );

        let url = format!("{}{}", self.base_url, RIG_STATUS_PATH);
        info!(action = %request.action, rig_id = %request.rig_id, %request_id, "submitting rig action");

        let response = self
            .http
            .post(&url)
            .header("x-time", &time)
            .header("x-nonce", &nonce)
            .header("x-organization-id", &credentials.org_id)
            .header("x-request-id", &request_id)
            .header("x-auth", auth::auth_header(&credentials.api_key, &signature))
            .header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE)
            .body(payload)
            .send()?;
        let status = response.status();
        let body = response.text()?;
        debug!(%status, "rig action response");

        let decoded: RigActionResponse =
            serde_json::from_str(&body).map_err(|source| RigError::Decode {
                what: "rig action",
                source,
            })?;

        Ok(ActionOutcome {
            action: request.action,
            rig_id: request.rig_id.clone(),
            response: decoded,
            raw_body: body,
        })
    }

    /// Fetch the server time, then submit the configured action.
    pub fn run(&self, settings: &Settings) -> Result<ActionOutcome> {
        let server_time = self.fetch_server_time()?;
        let request = RigActionRequest::new(settings.action, settings.rig_id.clone());
        self.set_rig_status(&settings.credentials, &request, server_time)
    }
}

/// Build a client for `settings.api_url` and run the action.
pub fn run(settings: &Settings) -> Result<ActionOutcome> {
    RigClient::new(settings.api_url.clone())?.run(settings)
}
