//! Clickable region legend; clicking an entry toggles the region filter the
//! same way clicking its bar does.

use crate::state::AppState;
use dioxus::prelude::*;
use gapviz_views::Event as DashboardEvent;

#[component]
pub fn RegionLegend() -> Element {
    let state = use_context::<AppState>();
    let (Some(palette), Some(selection)) = (state.palette(), state.selection()) else {
        return rsx! {};
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-wrap: wrap; gap: 12px;",
            for region in palette.regions().iter() {
                LegendEntry {
                    key: "{region}",
                    region: region.clone(),
                    color: palette.color(region).to_string(),
                    dimmed: selection.selected_region.is_some() && !selection.is_region_selected(region),
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct LegendEntryProps {
    region: String,
    color: String,
    dimmed: bool,
}

#[component]
fn LegendEntry(props: LegendEntryProps) -> Element {
    let events = use_coroutine_handle::<DashboardEvent>();
    let opacity = if props.dimmed { 0.4 } else { 1.0 };
    let label = if props.region.is_empty() {
        "(no region)".to_string()
    } else {
        props.region.clone()
    };
    let region = props.region.clone();

    rsx! {
        span {
            style: "cursor: pointer; display: inline-flex; align-items: center; gap: 4px; opacity: {opacity};",
            onclick: move |_| events.send(DashboardEvent::RegionToggled(region.clone())),
            span { style: "display: inline-block; width: 12px; height: 12px; background: {props.color};" }
            "{label}"
        }
    }
}
