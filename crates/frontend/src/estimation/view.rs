use contracts::estimation::ProjectMode;
use leptos::prelude::*;

use super::view_model::EstimationViewModel;
use crate::shared::components::ui::{Button, Input, RadioGroup};

/// Two-panel estimator: the input form on the left, the latest outcome on
/// the right.
#[component]
pub fn EstimatorPage() -> impl IntoView {
    let vm = EstimationViewModel::new();

    view! {
        <div class="estimator">
            <section class="panel panel--input">
                <header class="panel__header">
                    <h2 class="panel__title">"COCOMO Calculator"</h2>
                    <p class="panel__subtitle">"Constructive Cost Model"</p>
                </header>
                <EstimationFormView vm=vm />
            </section>

            <section class="panel panel--output">
                <header class="panel__header">
                    <h2 class="panel__title">"Results"</h2>
                </header>
                <ResultsPanel vm=vm />
            </section>
        </div>
    }
}

#[component]
fn EstimationFormView(vm: EstimationViewModel) -> impl IntoView {
    let mode_options = ProjectMode::ALL
        .iter()
        .map(|mode| (mode.as_str().to_string(), mode.label().to_string()))
        .collect::<Vec<_>>();
    let mode_value = Signal::derive(move || vm.mode.get().as_str().to_string());
    let on_mode_change = Callback::new(move |value: String| {
        if let Some(mode) = ProjectMode::parse(&value) {
            vm.mode.set(mode);
        }
    });

    view! {
        <div class="estimation-form">
            <Input
                label="KLOC (Thousand Lines of Code)"
                value=vm.kloc
                on_input=Callback::new(move |v| vm.kloc.set(v))
                placeholder="e.g., 10"
                input_type="number"
                step="0.01"
                min="0"
                required=true
                id="kloc"
            />

            <div class="coefficients-grid">
                <Input
                    label="Coefficient a"
                    value=vm.a
                    on_input=Callback::new(move |v| vm.a.set(v))
                    placeholder="2.4"
                    input_type="number"
                    step="0.01"
                    id="coefficient-a"
                />
                <Input
                    label="Coefficient b"
                    value=vm.b
                    on_input=Callback::new(move |v| vm.b.set(v))
                    placeholder="1.05"
                    input_type="number"
                    step="0.01"
                    id="coefficient-b"
                />
                <Input
                    label="Coefficient c"
                    value=vm.c
                    on_input=Callback::new(move |v| vm.c.set(v))
                    placeholder="2.5"
                    input_type="number"
                    step="0.01"
                    id="coefficient-c"
                />
                <Input
                    label="Coefficient d"
                    value=vm.d
                    on_input=Callback::new(move |v| vm.d.set(v))
                    placeholder="0.38"
                    input_type="number"
                    step="0.01"
                    id="coefficient-d"
                />
            </div>

            <RadioGroup
                label="Project Mode"
                value=mode_value
                on_change=on_mode_change
                name="mode"
                options=mode_options
            />

            {move || match vm.mode.get() {
                ProjectMode::Organic => view! { <div></div> }.into_any(),
                ProjectMode::SemiDetached => view! {
                    <Input
                        label="Effort Multiplier"
                        value=vm.effort_multiplier
                        on_input=Callback::new(move |v| vm.effort_multiplier.set(v))
                        placeholder="e.g., 1.2"
                        input_type="number"
                        step="0.01"
                        id="effort-multiplier"
                    />
                }.into_any(),
                ProjectMode::Embedded => view! { <CostDriverRows vm=vm /> }.into_any(),
            }}

            {move || vm.error.get().map(|message| view! {
                <div class="alert alert--error" role="alert">{message}</div>
            })}

            <Button
                class="calculate-btn"
                disabled=Signal::derive(move || vm.loading.get())
                on_click=Callback::new(move |_| vm.submit())
            >
                {move || if vm.loading.get() { "Calculating..." } else { "Calculate Results" }}
            </Button>
        </div>
    }
}

/// Editable driver list for embedded projects. The remove button is hidden
/// while only one row remains.
#[component]
fn CostDriverRows(vm: EstimationViewModel) -> impl IntoView {
    view! {
        <div class="form__group cost-drivers">
            <label class="form__label">"Cost Drivers"</label>
            {move || {
                let rows = vm.cost_drivers.get();
                let removable = rows.len() > 1;
                rows.into_iter().enumerate().map(|(index, row)| {
                    view! {
                        <div class="cost-drivers__row">
                            <input
                                class="form__input"
                                type="text"
                                placeholder="Driver name"
                                prop:value=row.key
                                on:input=move |ev| vm.set_driver_key(index, event_target_value(&ev))
                            />
                            <input
                                class="form__input"
                                type="number"
                                step="0.01"
                                placeholder="Value"
                                prop:value=row.value
                                on:input=move |ev| vm.set_driver_value(index, event_target_value(&ev))
                            />
                            {removable.then(|| view! {
                                <button
                                    type="button"
                                    class="button button--ghost cost-drivers__remove"
                                    on:click=move |_| vm.remove_driver_row(index)
                                >
                                    "✕"
                                </button>
                            })}
                        </div>
                    }
                }).collect_view()
            }}
            <Button
                variant="secondary"
                on_click=Callback::new(move |_| vm.add_driver_row())
            >
                "+ Add Cost Driver"
            </Button>
        </div>
    }
}

#[component]
fn ResultsPanel(vm: EstimationViewModel) -> impl IntoView {
    view! {
        {move || match vm.results.get() {
            Some(results) => {
                let mode = vm.mode.get();
                let kloc = vm.kloc.get();
                let coefficients =
                    coefficient_summary(&vm.a.get(), &vm.b.get(), &vm.c.get(), &vm.d.get());
                let multiplier = vm.effort_multiplier.get();
                let drivers: Vec<_> = vm
                    .cost_drivers
                    .get()
                    .into_iter()
                    .filter(|row| row.is_filled())
                    .collect();
                let team_line = format!(
                    "{} ÷ {} = {} People",
                    results.effort, results.time, results.people
                );

                view! {
                    <div class="results">
                        <MetricCard
                            label="Development Time"
                            value=results.time.clone()
                            unit="Months"
                        />
                        <MetricCard
                            label="Effort Required"
                            value=results.effort.clone()
                            unit="Person-Months"
                        />
                        <MetricCard
                            label="Team Size"
                            value=results.people.clone()
                            unit="Average People"
                        />

                        <div class="calculation-details">
                            <h3 class="calculation-details__title">"Calculation Details"</h3>
                            <div class="calculation-details__row">
                                <strong>"Model Type: "</strong> {mode.to_string()}
                            </div>
                            <div class="calculation-details__row">
                                <strong>"KLOC: "</strong> {kloc}
                            </div>
                            {coefficients.map(|summary| view! {
                                <div class="calculation-details__row">
                                    <strong>"Coefficients: "</strong> {summary}
                                </div>
                            })}
                            {(mode == ProjectMode::SemiDetached && !multiplier.is_empty())
                                .then(|| view! {
                                    <div class="calculation-details__row">
                                        <strong>"Cost Driver: "</strong>
                                        {format!("Effort Multiplier = {}", multiplier)}
                                    </div>
                                })}
                            {(mode == ProjectMode::Embedded && !drivers.is_empty())
                                .then(|| view! {
                                    <div class="calculation-details__row">
                                        <strong>"Cost Drivers:"</strong>
                                        <ul class="calculation-details__drivers">
                                            {drivers.iter().map(|row| view! {
                                                <li>{format!("{}: {}", row.key, row.value)}</li>
                                            }).collect_view()}
                                        </ul>
                                    </div>
                                })}
                            <div class="calculation-details__row">
                                <strong>"Team Size: "</strong> {team_line}
                            </div>
                        </div>
                    </div>
                }.into_any()
            }
            None => view! {
                <div class="no-results">
                    <h3 class="no-results__title">"Ready to Calculate"</h3>
                    <p>
                        "Fill in the form on the left and click Calculate Results "
                        "to see your project estimates."
                    </p>
                    <div class="no-results__tips">
                        <h4>"Quick Tips:"</h4>
                        <ul>
                            <li>"KLOC = lines of code / 1000"</li>
                            <li>"Choose the mode that matches your project type"</li>
                            <li>"Standard coefficients vary by mode"</li>
                        </ul>
                    </div>
                </div>
            }.into_any(),
        }}
    }
}

#[component]
fn MetricCard(label: &'static str, value: String, unit: &'static str) -> impl IntoView {
    view! {
        <div class="metric-card">
            <div class="metric-card__label">{label}</div>
            <div class="metric-card__value">{value}</div>
            <div class="metric-card__unit">{unit}</div>
        </div>
    }
}

/// "a=2.4, b=default, ..." when at least one coefficient is overridden;
/// None when all four are left at the service defaults.
fn coefficient_summary(a: &str, b: &str, c: &str, d: &str) -> Option<String> {
    if a.is_empty() && b.is_empty() && c.is_empty() && d.is_empty() {
        return None;
    }
    let part = |name: &str, value: &str| {
        if value.is_empty() {
            format!("{name}=default")
        } else {
            format!("{name}={value}")
        }
    };
    Some(format!(
        "{}, {}, {}, {}",
        part("a", a),
        part("b", b),
        part("c", c),
        part("d", d)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficient_summary_marks_unset_fields_as_default() {
        assert_eq!(coefficient_summary("", "", "", ""), None);
        assert_eq!(
            coefficient_summary("2.4", "", "", "0.38").as_deref(),
            Some("a=2.4, b=default, c=default, d=0.38")
        );
    }
}
