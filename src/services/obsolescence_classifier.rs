use chrono::NaiveDateTime;
use crate::config::constants::{ACTIVE_LIFECYCLE_STATE, LOW_ACTIVITY_AFTER_DAYS, OBSOLETE_AFTER_DAYS};

/// Classification result. The tier is not stored here — it is derived
/// from the flag and the reason list wherever records are partitioned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub is_obsolete: bool,
    pub reasons: Vec<String>,
    pub days_since_activity: Option<i64>,
}

/// Pure obsolescence rules. Rules are evaluated independently and
/// their reasons accumulate; recency alone never demotes a project
/// that lifecycle state already forced obsolete.
pub struct ObsolescenceClassifier;

impl ObsolescenceClassifier {
    pub fn classify(
        total_resources: usize,
        last_activity: Option<NaiveDateTime>,
        lifecycle_state: &str,
        now: NaiveDateTime,
    ) -> Verdict {
        let mut is_obsolete = false;
        let mut reasons = Vec::new();

        if total_resources == 0 {
            is_obsolete = true;
            reasons.push("No resources found".to_string());
        }

        let mut days_since_activity = None;
        if let Some(last) = last_activity {
            let days = (now - last).num_days();
            days_since_activity = Some(days);
            if days > OBSOLETE_AFTER_DAYS {
                is_obsolete = true;
                reasons.push(format!("No activity for {} days", days));
            } else if days > LOW_ACTIVITY_AFTER_DAYS {
                reasons.push(format!("Low activity (last used {} days ago)", days));
            }
        }

        if lifecycle_state != ACTIVE_LIFECYCLE_STATE {
            is_obsolete = true;
            reasons.push(format!("Project state: {}", lifecycle_state));
        }

        Verdict { is_obsolete, reasons, days_since_activity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    fn days_ago(days: i64) -> NaiveDateTime {
        now() - Duration::days(days)
    }

    #[test]
    fn instance_idle_for_200_days_is_obsolete() {
        let verdict = ObsolescenceClassifier::classify(1, Some(days_ago(200)), "ACTIVE", now());
        assert!(verdict.is_obsolete);
        assert_eq!(verdict.reasons, vec!["No activity for 200 days".to_string()]);
        assert_eq!(verdict.days_since_activity, Some(200));
    }

    #[test]
    fn empty_project_in_delete_requested_state_collects_both_reasons() {
        let verdict = ObsolescenceClassifier::classify(0, None, "DELETE_REQUESTED", now());
        assert!(verdict.is_obsolete);
        assert_eq!(
            verdict.reasons,
            vec![
                "No resources found".to_string(),
                "Project state: DELETE_REQUESTED".to_string(),
            ]
        );
    }

    #[test]
    fn bucket_idle_for_100_days_is_only_flagged_for_review() {
        let verdict = ObsolescenceClassifier::classify(1, Some(days_ago(100)), "ACTIVE", now());
        assert!(!verdict.is_obsolete);
        assert_eq!(verdict.reasons, vec!["Low activity (last used 100 days ago)".to_string()]);
    }

    #[test]
    fn no_resources_means_obsolete_regardless_of_anything_else() {
        for state in ["ACTIVE", "DELETE_REQUESTED", "UNKNOWN"] {
            for activity in [None, Some(days_ago(1)), Some(days_ago(500))] {
                let verdict = ObsolescenceClassifier::classify(0, activity, state, now());
                assert!(verdict.is_obsolete);
                assert_eq!(verdict.reasons[0], "No resources found");
            }
        }
    }

    #[test]
    fn recent_activity_does_not_rescue_a_non_active_state() {
        let verdict = ObsolescenceClassifier::classify(5, Some(days_ago(3)), "DELETE_REQUESTED", now());
        assert!(verdict.is_obsolete);
        assert_eq!(verdict.reasons, vec!["Project state: DELETE_REQUESTED".to_string()]);
    }

    #[test]
    fn boundary_days_are_exclusive() {
        // Exactly 180 days is still only low activity; exactly 90 is clean.
        let verdict = ObsolescenceClassifier::classify(1, Some(days_ago(180)), "ACTIVE", now());
        assert!(!verdict.is_obsolete);
        assert_eq!(verdict.reasons, vec!["Low activity (last used 180 days ago)".to_string()]);

        let verdict = ObsolescenceClassifier::classify(1, Some(days_ago(90)), "ACTIVE", now());
        assert!(verdict.reasons.is_empty());
    }

    #[test]
    fn busy_active_project_is_clean() {
        let verdict = ObsolescenceClassifier::classify(12, Some(days_ago(7)), "ACTIVE", now());
        assert!(!verdict.is_obsolete);
        assert!(verdict.reasons.is_empty());
    }

    proptest! {
        #[test]
        fn classification_is_deterministic(
            total in 0usize..50,
            age in proptest::option::of(0i64..4000),
            state in "[A-Z_]{1,20}",
        ) {
            let last = age.map(days_ago);
            let first = ObsolescenceClassifier::classify(total, last, &state, now());
            let second = ObsolescenceClassifier::classify(total, last, &state, now());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn obsolete_projects_always_carry_a_reason(
            total in 0usize..50,
            age in proptest::option::of(0i64..4000),
            state in "[A-Z_]{1,20}",
        ) {
            let verdict = ObsolescenceClassifier::classify(total, age.map(days_ago), &state, now());
            if verdict.is_obsolete {
                prop_assert!(!verdict.reasons.is_empty());
            }
        }
    }
}
