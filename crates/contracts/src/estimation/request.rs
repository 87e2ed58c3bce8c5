use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// COCOMO project category. The service picks its default coefficient set
/// from this; the client uses it to decide which auxiliary inputs apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectMode {
    #[default]
    Organic,
    SemiDetached,
    Embedded,
}

impl ProjectMode {
    pub const ALL: [ProjectMode; 3] = [
        ProjectMode::Organic,
        ProjectMode::SemiDetached,
        ProjectMode::Embedded,
    ];

    /// Wire representation, identical to the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectMode::Organic => "organic",
            ProjectMode::SemiDetached => "semi-detached",
            ProjectMode::Embedded => "embedded",
        }
    }

    /// Human-readable name for mode selectors.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectMode::Organic => "Organic",
            ProjectMode::SemiDetached => "Semi-Detached",
            ProjectMode::Embedded => "Embedded",
        }
    }

    pub fn parse(value: &str) -> Option<ProjectMode> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == value)
    }
}

impl fmt::Display for ProjectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outbound body for the estimation service, rebuilt on every submission.
///
/// Coefficient overrides are omitted from the JSON entirely when not set so
/// the service falls back to its own per-mode defaults instead of receiving
/// an explicit value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationRequest {
    pub model_type: ProjectMode,
    pub kloc: f64,
    pub cost_drivers: HashMap<String, f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mode_round_trips_through_wire_form() {
        for mode in ProjectMode::ALL {
            assert_eq!(ProjectMode::parse(mode.as_str()), Some(mode));
            let encoded = serde_json::to_value(mode).unwrap();
            assert_eq!(encoded, json!(mode.as_str()));
        }
        assert_eq!(ProjectMode::parse("waterfall"), None);
    }

    #[test]
    fn mode_wire_names_match_service_contract() {
        assert_eq!(ProjectMode::Organic.as_str(), "organic");
        assert_eq!(ProjectMode::SemiDetached.as_str(), "semi-detached");
        assert_eq!(ProjectMode::Embedded.as_str(), "embedded");
    }

    #[test]
    fn unset_coefficients_are_omitted_from_json() {
        let request = EstimationRequest {
            model_type: ProjectMode::Organic,
            kloc: 10.0,
            cost_drivers: HashMap::new(),
            a: None,
            b: None,
            c: None,
            d: None,
        };

        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(
            encoded,
            json!({
                "model_type": "organic",
                "kloc": 10.0,
                "cost_drivers": {},
            })
        );
    }

    #[test]
    fn set_coefficients_serialize_under_their_own_keys() {
        let request = EstimationRequest {
            model_type: ProjectMode::SemiDetached,
            kloc: 32.0,
            cost_drivers: HashMap::from([("cost_driver".to_string(), 1.2)]),
            a: Some(3.0),
            b: None,
            c: None,
            d: Some(0.35),
        };

        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(
            encoded,
            json!({
                "model_type": "semi-detached",
                "kloc": 32.0,
                "cost_drivers": { "cost_driver": 1.2 },
                "a": 3.0,
                "d": 0.35,
            })
        );
    }
}
