//! Lifecycle event model
//!
//! One serialized event per NDJSON line, tagged by an `event` field so CI
//! tooling can parse recorded runs.

use serde::{Deserialize, Serialize};

use super::SpecResult;

/// A recorded suite lifecycle event.
///
/// The four variants mirror the reporter callbacks; a recorded run is a
/// sequence of these, one JSON object per line, in execution order.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RunEvent {
    SuiteStarted { total_specs: usize },
    SpecStarted { id: usize },
    SpecFinished { result: SpecResult },
    SuiteFinished,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssertionOutcome;

    #[test]
    fn test_event_tagging() {
        let line = serde_json::to_string(&RunEvent::SuiteStarted { total_specs: 3 }).unwrap();
        assert_eq!(line, r#"{"event":"suite_started","total_specs":3}"#);

        let line = serde_json::to_string(&RunEvent::SuiteFinished).unwrap();
        assert_eq!(line, r#"{"event":"suite_finished"}"#);
    }

    #[test]
    fn test_spec_finished_round_trip() {
        let result = SpecResult::new(0, "Calc", "adds")
            .with_assertion(AssertionOutcome::fail("expected 2 got 3"));
        let line = serde_json::to_string(&RunEvent::SpecFinished { result }).unwrap();

        let parsed: RunEvent = serde_json::from_str(&line).unwrap();
        match parsed {
            RunEvent::SpecFinished { result } => {
                assert_eq!(result.suite, "Calc");
                assert_eq!(result.total_count(), 1);
                assert!(!result.passed());
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_event_rejected() {
        let parsed: Result<RunEvent, _> = serde_json::from_str(r#"{"event":"suite_paused"}"#);
        assert!(parsed.is_err());
    }
}
