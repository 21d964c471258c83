//! Gapminder indicator dashboard.
//!
//! A scatter plot (x, y and radius indicators for one year), a bar chart of
//! per-region means and a line chart of the selected country's history,
//! linked through a shared selection:
//!
//! - the year slider and the x/y/radius selectors redraw scatter and bars
//! - clicking a bar (or legend entry) toggles that region's highlight
//! - clicking a point selects the country shown in the line chart
//!
//! Data flow:
//! 1. On mount the five indicator CSVs are fetched from `data/` and joined.
//! 2. The first frame draws the bar and scatter charts.
//! 3. Controls and D3 click callbacks send `Event`s to one coroutine, which
//!    applies them to the `Dashboard` and pushes the recomputed scenes to D3.

use anyhow::Context;
use dioxus::prelude::*;
use futures::StreamExt;
use gapviz_chart_ui::components::{
    ChartPanel, Control, ErrorDisplay, IndicatorSelector, LoadingSpinner, RegionLegend, YearSlider,
};
use gapviz_chart_ui::js_bridge::{self, ChartTargets};
use gapviz_chart_ui::loader;
use gapviz_chart_ui::state::AppState;
use gapviz_views::{Dashboard, DashboardConfig, Event as DashboardEvent, Redraw};

/// Directory the indicator CSVs are served from, relative to the page.
const DATA_BASE_URL: &str = "data";

/// Chart container DOM element IDs used by D3.js to render into.
const TARGETS: ChartTargets = ChartTargets {
    bar: "bar-chart",
    scatter: "scatter-plot",
    line: "line-chart",
};

fn main() {
    if let Err(e) = dioxus_logger::init(dioxus_logger::tracing::Level::INFO) {
        web_sys::console::error_1(&format!("[gapviz] failed to init logger: {}", e).into());
    }
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("gapviz-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    web_sys::console::log_1(&"[gapviz] App component mounted".into());

    let mut state = use_context_provider(AppState::new);

    // Every dashboard mutation happens here, one event at a time.
    let events = use_coroutine(move |mut rx: UnboundedReceiver<DashboardEvent>| async move {
        let mut dashboard = state.dashboard;
        while let Some(event) = rx.next().await {
            let mut guard = dashboard.write();
            let Some(current) = guard.as_mut() else {
                log::warn!("[gapviz] Ignoring {:?} before the data is loaded", event);
                continue;
            };
            log::info!("[gapviz] {:?}", event);
            let frame = current.handle(event);
            let layout = current.config().layout;
            drop(guard);
            js_bridge::draw_frame(&TARGETS, &frame, &layout);
        }
    });

    // Load the D3 renderers once and route chart clicks into the coroutine.
    use_hook(move || {
        js_bridge::init_charts();
        let tx = events.tx();
        js_bridge::register_callback(js_bridge::COUNTRY_CLICK_CALLBACK, move |geo| {
            if let Err(e) = tx.unbounded_send(DashboardEvent::CountrySelected(geo)) {
                log::error!("[gapviz] Dropped country click: {}", e);
            }
        });
        let tx = events.tx();
        js_bridge::register_callback(js_bridge::REGION_CLICK_CALLBACK, move |region| {
            if let Err(e) = tx.unbounded_send(DashboardEvent::RegionToggled(region)) {
                log::error!("[gapviz] Dropped region click: {}", e);
            }
        });
    });

    // Fetch and join the five tables, then draw the first frame.
    use_future(move || async move {
        let config = DashboardConfig::default();
        let loaded = loader::load_dataset(DATA_BASE_URL, &config)
            .await
            .context("Failed to load the indicator tables");
        match loaded {
            Ok(dataset) => {
                let mut dashboard = Dashboard::new(dataset, config);
                let frame = dashboard.render(Redraw::ALL);
                let layout = dashboard.config().layout;
                state.dashboard.set(Some(dashboard));
                state.loading.set(false);
                js_bridge::draw_frame(&TARGETS, &frame, &layout);
            }
            Err(e) => {
                log::error!("[gapviz] {:#}", e);
                state.error_msg.set(Some(format!("{:#}", e)));
                state.loading.set(false);
            }
        }
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            h2 { style: "margin: 0 0 8px 0;", "Gapminder Indicators" }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                YearSlider {}
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 4px; align-items: flex-end; margin-bottom: 8px;",
                    for control in Control::ALL {
                        IndicatorSelector { control }
                    }
                }
                ScatterPanel {}
                BarPanel {}
                LinePanel {}
            }
        }
    }
}

#[component]
fn ScatterPanel() -> Element {
    let state = use_context::<AppState>();
    let subtitle = state
        .selection()
        .map(|s| format!("{} vs {}, sized by {}", s.y.label(), s.x.label(), s.radius.label()))
        .unwrap_or_default();

    rsx! {
        ChartPanel {
            id: TARGETS.scatter.to_string(),
            title: "Countries".to_string(),
            subtitle,
        }
    }
}

#[component]
fn BarPanel() -> Element {
    let state = use_context::<AppState>();
    let subtitle = state
        .selection()
        .map(|s| format!("Mean {} by region, {}", s.bar.label(), s.year))
        .unwrap_or_default();

    rsx! {
        ChartPanel {
            id: TARGETS.bar.to_string(),
            title: "Regions".to_string(),
            subtitle,
        }
        RegionLegend {}
    }
}

#[component]
fn LinePanel() -> Element {
    let state = use_context::<AppState>();
    let subtitle = match (state.selected_country_name(), state.selection()) {
        (Some(country), Some(selection)) => format!("{}: {}", country, selection.line.label()),
        _ => "Click a country in the scatter plot".to_string(),
    };

    rsx! {
        ChartPanel {
            id: TARGETS.line.to_string(),
            title: "History".to_string(),
            subtitle,
        }
    }
}
