use dioxus::prelude::*;

/// "Step n of m" with a fill bar, shown above multi-step forms.
#[component]
pub fn StepIndicator(step: usize, total: usize, percent: f64) -> Element {
    let current = step + 1;
    let width = format!("{percent:.0}%");

    rsx! {
        div { class: "step-indicator",
            span { class: "step-indicator-label", "Step {current} of {total}" }
            div {
                class: "step-indicator-track",
                role: "progressbar",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-valuenow": "{percent:.0}",
                div { class: "step-indicator-fill", style: "width: {width}" }
            }
        }
    }
}
