use std::collections::HashMap;
use thiserror::Error;

use super::request::{EstimationRequest, ProjectMode};

/// One editable cost-driver row. Rows are kept exactly as typed; the
/// "both halves filled in" filter applies at request-build time, not while
/// editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostDriverRow {
    pub key: String,
    pub value: String,
}

impl CostDriverRow {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// A row participates in the request only when both the name and the
    /// rating were filled in.
    pub fn is_filled(&self) -> bool {
        !self.key.is_empty() && !self.value.is_empty()
    }
}

/// Pre-flight rejection of a submission. The request is never sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("KLOC is required")]
    MissingKloc,
    #[error("{field} is not a valid number: \"{value}\"")]
    InvalidNumber { field: String, value: String },
}

/// The full set of user-editable inputs, all kept as entered.
///
/// The form lives for the whole session and is never reset after a
/// submission, so a single field can be tweaked and the form resubmitted.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimationForm {
    pub kloc: String,
    pub a: String,
    pub b: String,
    pub c: String,
    pub d: String,
    pub mode: ProjectMode,
    /// Single effort multiplier, meaningful only for semi-detached projects.
    pub effort_multiplier: String,
    /// Named driver ratings, meaningful only for embedded projects. Always
    /// holds at least one (possibly empty) row so there is something to edit.
    pub cost_drivers: Vec<CostDriverRow>,
}

impl Default for EstimationForm {
    fn default() -> Self {
        Self {
            kloc: String::new(),
            a: String::new(),
            b: String::new(),
            c: String::new(),
            d: String::new(),
            mode: ProjectMode::default(),
            effort_multiplier: String::new(),
            cost_drivers: vec![CostDriverRow::default()],
        }
    }
}

impl EstimationForm {
    /// Translate the raw text fields into a wire request.
    ///
    /// The mode decides which auxiliary inputs participate: organic
    /// submissions never carry cost drivers, semi-detached carries at most
    /// the single fixed `cost_driver` entry, and embedded carries every row
    /// where both the name and the rating were filled in (a repeated name
    /// keeps the later row's rating).
    ///
    /// Numeric fields that were filled in but do not parse are rejected
    /// with a [`FormError`] instead of being sent as a NaN sentinel.
    pub fn build_request(&self) -> Result<EstimationRequest, FormError> {
        if self.kloc.is_empty() {
            return Err(FormError::MissingKloc);
        }
        let kloc = parse_number("KLOC", &self.kloc)?;

        let mut cost_drivers = HashMap::new();
        match self.mode {
            ProjectMode::Organic => {}
            ProjectMode::SemiDetached => {
                if !self.effort_multiplier.is_empty() {
                    cost_drivers.insert(
                        "cost_driver".to_string(),
                        parse_number("Effort multiplier", &self.effort_multiplier)?,
                    );
                }
            }
            ProjectMode::Embedded => {
                for row in &self.cost_drivers {
                    if !row.is_filled() {
                        continue;
                    }
                    let field = format!("Cost driver \"{}\"", row.key);
                    cost_drivers.insert(row.key.clone(), parse_number(&field, &row.value)?);
                }
            }
        }

        Ok(EstimationRequest {
            model_type: self.mode,
            kloc,
            cost_drivers,
            a: parse_optional("Coefficient a", &self.a)?,
            b: parse_optional("Coefficient b", &self.b)?,
            c: parse_optional("Coefficient c", &self.c)?,
            d: parse_optional("Coefficient d", &self.d)?,
        })
    }
}

/// An empty field is an omission, not an error.
fn parse_optional(field: &str, raw: &str) -> Result<Option<f64>, FormError> {
    if raw.is_empty() {
        return Ok(None);
    }
    parse_number(field, raw).map(Some)
}

fn parse_number(field: &str, raw: &str) -> Result<f64, FormError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| FormError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form_with_kloc(kloc: &str) -> EstimationForm {
        EstimationForm {
            kloc: kloc.to_string(),
            ..EstimationForm::default()
        }
    }

    #[test]
    fn organic_request_matches_wire_contract() {
        let request = form_with_kloc("10").build_request().unwrap();

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
    fn organic_ignores_stray_driver_state() {
        let mut form = form_with_kloc("10");
        form.effort_multiplier = "1.5".to_string();
        form.cost_drivers = vec![CostDriverRow::new("rely", "1.1")];

        let request = form.build_request().unwrap();
        assert!(request.cost_drivers.is_empty());
    }

    #[test]
    fn semi_detached_maps_multiplier_to_fixed_key() {
        let mut form = form_with_kloc("10");
        form.mode = ProjectMode::SemiDetached;
        form.effort_multiplier = "1.2".to_string();

        let request = form.build_request().unwrap();
        assert_eq!(
            request.cost_drivers,
            HashMap::from([("cost_driver".to_string(), 1.2)])
        );
    }

    #[test]
    fn semi_detached_empty_multiplier_sends_no_drivers() {
        let mut form = form_with_kloc("10");
        form.mode = ProjectMode::SemiDetached;

        let request = form.build_request().unwrap();
        assert!(request.cost_drivers.is_empty());
    }

    #[test]
    fn embedded_keeps_only_fully_filled_rows() {
        let mut form = form_with_kloc("10");
        form.mode = ProjectMode::Embedded;
        form.cost_drivers = vec![
            CostDriverRow::new("rely", "1.1"),
            CostDriverRow::new("", "2"),
            CostDriverRow::new("cplx", "1.3"),
            CostDriverRow::new("time", ""),
        ];

        let request = form.build_request().unwrap();
        assert_eq!(
            request.cost_drivers,
            HashMap::from([("rely".to_string(), 1.1), ("cplx".to_string(), 1.3)])
        );
    }

    #[test]
    fn embedded_duplicate_names_keep_the_later_rating() {
        let mut form = form_with_kloc("10");
        form.mode = ProjectMode::Embedded;
        form.cost_drivers = vec![
            CostDriverRow::new("rely", "1.1"),
            CostDriverRow::new("rely", "1.4"),
        ];

        let request = form.build_request().unwrap();
        assert_eq!(
            request.cost_drivers,
            HashMap::from([("rely".to_string(), 1.4)])
        );
    }

    #[test]
    fn coefficients_included_only_when_filled() {
        let mut form = form_with_kloc("10");
        form.a = "2.4".to_string();
        form.d = "0.38".to_string();

        let request = form.build_request().unwrap();
        assert_eq!(request.a, Some(2.4));
        assert_eq!(request.b, None);
        assert_eq!(request.c, None);
        assert_eq!(request.d, Some(0.38));

        let encoded = serde_json::to_value(&request).unwrap();
        let keys: Vec<&String> = encoded.as_object().unwrap().keys().collect();
        assert!(!keys.contains(&&"b".to_string()));
        assert!(!keys.contains(&&"c".to_string()));
    }

    #[test]
    fn empty_kloc_is_rejected() {
        let form = EstimationForm::default();
        assert_eq!(form.build_request(), Err(FormError::MissingKloc));
    }

    #[test]
    fn non_numeric_fields_are_rejected_with_the_field_name() {
        let mut form = form_with_kloc("ten");
        assert!(matches!(
            form.build_request(),
            Err(FormError::InvalidNumber { ref field, .. }) if field == "KLOC"
        ));

        form.kloc = "10".to_string();
        form.mode = ProjectMode::Embedded;
        form.cost_drivers = vec![CostDriverRow::new("rely", "high")];
        let err = form.build_request().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cost driver \"rely\" is not a valid number: \"high\""
        );
    }

    #[test]
    fn surrounding_whitespace_in_numbers_is_tolerated() {
        let mut form = form_with_kloc(" 10.5 ");
        form.b = " 1.05".to_string();

        let request = form.build_request().unwrap();
        assert_eq!(request.kloc, 10.5);
        assert_eq!(request.b, Some(1.05));
    }
}
