use serde::{Deserialize, Serialize};

/// Success body returned by the estimation service. Both fields are
/// mandatory; a body missing either is treated as malformed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationResponse {
    pub effort_person_months: f64,
    pub development_time_months: f64,
}

/// Display metrics derived from a successful response. Replaced wholesale
/// on each success; a later failed submission leaves the previous value
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimationResult {
    /// Effort in person-months.
    pub effort: String,
    /// Development time in months.
    pub time: String,
    /// Average team size, always effort over time from the same response.
    pub people: String,
}

impl EstimationResult {
    /// Derive the team size from the freshest effort/time pair and fix all
    /// three metrics to two decimals. Full precision is not retained. A zero
    /// development time divides to a non-finite team size and is rendered
    /// as such.
    pub fn from_response(response: &EstimationResponse) -> Self {
        let people = response.effort_person_months / response.development_time_months;
        Self {
            effort: format_metric(response.effort_person_months),
            time: format_metric(response.development_time_months),
            people: format_metric(people),
        }
    }
}

/// Fixed two-decimal rendering used for every displayed metric.
pub fn format_metric(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_size_is_effort_over_time() {
        let result = EstimationResult::from_response(&EstimationResponse {
            effort_person_months: 24.0,
            development_time_months: 6.0,
        });

        assert_eq!(result.effort, "24.00");
        assert_eq!(result.time, "6.00");
        assert_eq!(result.people, "4.00");
    }

    #[test]
    fn metrics_are_rounded_to_two_decimals() {
        let result = EstimationResult::from_response(&EstimationResponse {
            effort_person_months: 26.927,
            development_time_months: 8.1049,
        });

        assert_eq!(result.effort, "26.93");
        assert_eq!(result.time, "8.10");
        assert_eq!(result.people, "3.32");
    }

    #[test]
    fn zero_development_time_renders_non_finite_team_size() {
        let result = EstimationResult::from_response(&EstimationResponse {
            effort_person_months: 12.0,
            development_time_months: 0.0,
        });

        assert_eq!(result.people, "inf");
    }

    #[test]
    fn response_requires_both_fields() {
        let parsed: Result<EstimationResponse, _> =
            serde_json::from_str(r#"{"effort_person_months": 24}"#);
        assert!(parsed.is_err());

        let parsed: EstimationResponse = serde_json::from_str(
            r#"{"effort_person_months": 24, "development_time_months": 6, "extra": true}"#,
        )
        .unwrap();
        assert_eq!(parsed.effort_person_months, 24.0);
        assert_eq!(parsed.development_time_months, 6.0);
    }
}
