use contracts::estimation::{CostDriverRow, EstimationForm, EstimationResult, ProjectMode};
use leptos::prelude::*;

use super::api;

/// ViewModel for the estimator session.
///
/// Owns the raw form fields, the derived display metrics, and the
/// one-outstanding-submission guard. Form state lives for the whole session
/// and is never reset after a submission, so a single field can be tweaked
/// and the form resubmitted. A failed submission keeps the previous results
/// on screen; only the error message changes.
#[derive(Clone, Copy)]
pub struct EstimationViewModel {
    pub kloc: RwSignal<String>,
    pub a: RwSignal<String>,
    pub b: RwSignal<String>,
    pub c: RwSignal<String>,
    pub d: RwSignal<String>,
    pub mode: RwSignal<ProjectMode>,
    pub effort_multiplier: RwSignal<String>,
    pub cost_drivers: RwSignal<Vec<CostDriverRow>>,
    pub results: RwSignal<Option<EstimationResult>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
}

impl EstimationViewModel {
    pub fn new() -> Self {
        let form = EstimationForm::default();
        Self {
            kloc: RwSignal::new(form.kloc),
            a: RwSignal::new(form.a),
            b: RwSignal::new(form.b),
            c: RwSignal::new(form.c),
            d: RwSignal::new(form.d),
            mode: RwSignal::new(form.mode),
            effort_multiplier: RwSignal::new(form.effort_multiplier),
            cost_drivers: RwSignal::new(form.cost_drivers),
            results: RwSignal::new(None),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }

    /// Snapshot the field signals into the plain form the request builder
    /// takes.
    fn form(&self) -> EstimationForm {
        EstimationForm {
            kloc: self.kloc.get_untracked(),
            a: self.a.get_untracked(),
            b: self.b.get_untracked(),
            c: self.c.get_untracked(),
            d: self.d.get_untracked(),
            mode: self.mode.get_untracked(),
            effort_multiplier: self.effort_multiplier.get_untracked(),
            cost_drivers: self.cost_drivers.get_untracked(),
        }
    }

    /// Append one empty driver row.
    pub fn add_driver_row(&self) {
        self.cost_drivers
            .update(|rows| rows.push(CostDriverRow::default()));
    }

    /// Remove the row at `index`, keeping the order of the rest. The last
    /// remaining row always stays so there is something to edit.
    pub fn remove_driver_row(&self, index: usize) {
        self.cost_drivers.update(|rows| {
            if rows.len() > 1 && index < rows.len() {
                rows.remove(index);
            }
        });
    }

    pub fn set_driver_key(&self, index: usize, key: String) {
        self.cost_drivers.update(|rows| {
            if let Some(row) = rows.get_mut(index) {
                row.key = key;
            }
        });
    }

    pub fn set_driver_value(&self, index: usize, value: String) {
        self.cost_drivers.update(|rows| {
            if let Some(row) = rows.get_mut(index) {
                row.value = value;
            }
        });
    }

    /// Begin a submission cycle unless one is already outstanding.
    ///
    /// Returns false while a request is in flight; the caller must not
    /// dispatch a second one.
    fn try_begin_submit(&self) -> bool {
        if self.loading.get_untracked() {
            return false;
        }
        self.loading.set(true);
        self.error.set(None);
        true
    }

    /// Build the request from the current fields and send it to the
    /// estimation service. At most one submission is outstanding at a time;
    /// re-entrant calls are ignored.
    pub fn submit(&self) {
        if !self.try_begin_submit() {
            return;
        }

        let request = match self.form().build_request() {
            Ok(request) => request,
            Err(err) => {
                log::error!("estimation form rejected: {err}");
                self.error.set(Some(err.to_string()));
                self.loading.set(false);
                return;
            }
        };

        let results = self.results;
        let error = self.error;
        let loading = self.loading;
        wasm_bindgen_futures::spawn_local(async move {
            match api::estimate(&request).await {
                Ok(response) => {
                    results.set(Some(EstimationResult::from_response(&response)));
                }
                Err(err) => {
                    log::error!("estimation request failed: {err}");
                    error.set(Some(err.user_message()));
                }
            }
            loading.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_submission_is_blocked_while_one_is_in_flight() {
        let vm = EstimationViewModel::new();

        assert!(vm.try_begin_submit());
        assert!(vm.loading.get_untracked());
        assert!(!vm.try_begin_submit());

        vm.loading.set(false);
        assert!(vm.try_begin_submit());
    }

    #[test]
    fn beginning_a_submission_clears_the_previous_error() {
        let vm = EstimationViewModel::new();
        vm.error.set(Some("API Error: 500".to_string()));

        assert!(vm.try_begin_submit());
        assert_eq!(vm.error.get_untracked(), None);
    }

    #[test]
    fn driver_rows_append_and_remove_at_arbitrary_index() {
        let vm = EstimationViewModel::new();
        vm.set_driver_key(0, "rely".to_string());
        vm.add_driver_row();
        vm.set_driver_key(1, "cplx".to_string());
        vm.add_driver_row();
        vm.set_driver_key(2, "time".to_string());

        vm.remove_driver_row(1);
        let rows = vm.cost_drivers.get_untracked();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, "rely");
        assert_eq!(rows[1].key, "time");
    }

    #[test]
    fn the_last_driver_row_cannot_be_removed() {
        let vm = EstimationViewModel::new();
        vm.remove_driver_row(0);
        assert_eq!(vm.cost_drivers.get_untracked().len(), 1);
    }
}
