//! Year range input with the current year as its label.

use crate::state::AppState;
use dioxus::prelude::*;
use gapviz_views::Event as DashboardEvent;

/// Slider bounded by the years of the population table.
#[component]
pub fn YearSlider() -> Element {
    let state = use_context::<AppState>();
    let events = use_coroutine_handle::<DashboardEvent>();

    let (Some(selection), Some((min, max))) = (state.selection(), state.year_bounds()) else {
        return rsx! {};
    };
    let year = selection.year;

    let on_input = move |evt: Event<FormData>| match evt.value().parse() {
        Ok(year) => events.send(DashboardEvent::YearChanged(year)),
        Err(_) => log::warn!("[gapviz] year slider: ignoring {:?}", evt.value()),
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                r#for: "range",
                style: "font-weight: bold;",
                "Year: "
            }
            input {
                id: "range",
                r#type: "range",
                min: "{min}",
                max: "{max}",
                value: "{year}",
                oninput: on_input,
            }
            span {
                id: "year",
                class: "year",
                style: "font-size: 20px; font-weight: bold;",
                "{year}"
            }
        }
    }
}
