use rigctl_core::client::ActionOutcome;
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn outcome_line(outcome: &ActionOutcome) -> String {
    if outcome.succeeded() {
        format!(
            "[Success] Action {} on rig {} is successfully",
            outcome.action, outcome.rig_id
        )
    } else {
        format!("[Failed] Response: {}", outcome.raw_body)
    }
}

/// A rejected action is reported, not treated as an error.
pub fn print_outcome(outcome: &ActionOutcome, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(outcome);
    }
    println!("{}", outcome_line(outcome));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rigctl_core::types::{RigAction, RigActionResponse};

    fn outcome(success: bool, body: &str) -> ActionOutcome {
        ActionOutcome {
            action: RigAction::PowerMode,
            rig_id: "rig-7".to_string(),
            response: RigActionResponse {
                success,
                success_type: None,
            },
            raw_body: body.to_string(),
        }
    }

    #[test]
    fn success_line_names_action_and_rig() {
        let line = outcome_line(&outcome(true, "{}"));
        assert_eq!(
            line,
            "[Success] Action POWER_MODE on rig rig-7 is successfully"
        );
    }

    #[test]
    fn failure_line_is_raw_body() {
        let body = r#"{"success":false, "weird" : 1}"#;
        assert_eq!(
            outcome_line(&outcome(false, body)),
            format!("[Failed] Response: {body}")
        );
    }

    #[test]
    fn json_shape() {
        let value = serde_json::to_value(outcome(true, "{}")).unwrap();
        assert_eq!(value["action"], "POWER_MODE");
        assert_eq!(value["rigId"], "rig-7");
        assert_eq!(value["success"], true);
        assert!(value.get("successType").is_none());
        assert_eq!(value["rawBody"], "{}");
    }
}
