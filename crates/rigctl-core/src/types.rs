use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// RigAction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RigAction {
    #[default]
    Start,
    Stop,
    PowerMode,
}

impl RigAction {
    pub fn all() -> &'static [RigAction] {
        &[RigAction::Start, RigAction::Stop, RigAction::PowerMode]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RigAction::Start => "START",
            RigAction::Stop => "STOP",
            RigAction::PowerMode => "POWER_MODE",
        }
    }
}

impl fmt::Display for RigAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RigAction {
    type Err = crate::error::RigError;

    /// Only the exact upper-case literals are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "START" => Ok(RigAction::Start),
            "STOP" => Ok(RigAction::Stop),
            "POWER_MODE" => Ok(RigAction::PowerMode),
            _ => Err(crate::error::RigError::InvalidAction(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Wire records
// ---------------------------------------------------------------------------

/// Body of `GET /api/v2/time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTime {
    /// Milliseconds since the Unix epoch, as the server sees it.
    pub server_time: i64,
}

/// Body of `POST /main/api/v2/mining/rigs/status2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RigActionRequest {
    pub action: RigAction,
    pub rig_id: String,
}

impl RigActionRequest {
    pub fn new(action: RigAction, rig_id: impl Into<String>) -> Self {
        Self {
            action,
            rig_id: rig_id.into(),
        }
    }
}

/// Reply to a rig status change. Error bodies carry no `success` field and
/// decode as unsuccessful.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RigActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RigError;

    #[test]
    fn action_parses_exact_literals() {
        for action in RigAction::all() {
            assert_eq!(action.as_str().parse::<RigAction>().unwrap(), *action);
        }
    }

    #[test]
    fn action_rejects_other_spellings() {
        for bad in ["start", "Stop", "RESTART", "", " START"] {
            let err = bad.parse::<RigAction>().unwrap_err();
            assert!(matches!(err, RigError::InvalidAction(ref s) if s == bad));
        }
    }

    #[test]
    fn action_defaults_to_start() {
        assert_eq!(RigAction::default(), RigAction::Start);
    }

    #[test]
    fn request_serializes_in_wire_order() {
        let req = RigActionRequest::new(RigAction::PowerMode, "0-abc");
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"action":"POWER_MODE","rigId":"0-abc"}"#
        );
    }

    #[test]
    fn server_time_decodes() {
        let t: ServerTime = serde_json::from_str(r#"{"serverTime":1543597115712}"#).unwrap();
        assert_eq!(t.server_time, 1_543_597_115_712);
    }

    #[test]
    fn response_without_success_is_unsuccessful() {
        let r: RigActionResponse =
            serde_json::from_str(r#"{"error_id":"x","errors":[{"code":2000}]}"#).unwrap();
        assert!(!r.success);
        assert_eq!(r.success_type, None);
    }

    #[test]
    fn response_with_success_type() {
        let r: RigActionResponse =
            serde_json::from_str(r#"{"success":true,"successType":"SUCCESS"}"#).unwrap();
        assert!(r.success);
        assert_eq!(r.success_type.as_deref(), Some("SUCCESS"));
    }
}
