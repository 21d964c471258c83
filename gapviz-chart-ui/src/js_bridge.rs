//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js renderers live in `assets/js/*.js` and are evaluated as globals
//! (no ES modules) once D3 has loaded. Rust computes every scene; the JS side
//! only draws keyed elements and reports clicks back through callbacks
//! registered on `window`.

use gapviz_views::{ChartLayout, Frame};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Embed the chart JS at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static CHARTS_JS: &str = include_str!("../assets/js/dashboard-charts.js");

/// Window callback receiving the geo of a clicked scatter point.
pub const COUNTRY_CLICK_CALLBACK: &str = "gapvizOnCountryClick";
/// Window callback receiving the region of a clicked bar or legend entry.
pub const REGION_CLICK_CALLBACK: &str = "gapvizOnRegionClick";

/// DOM ids of the three chart containers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartTargets {
    pub bar: &'static str,
    pub scatter: &'static str,
    pub line: &'static str,
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('gapviz JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Evaluate the chart scripts at global scope once D3 is available.
///
/// The scripts are parked on `window` and evaluated with an indirect eval
/// from inside the polling callback, so their function declarations become
/// globals instead of being scoped to the callback.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, CHARTS_JS].join("\n");
    let store_js = format!(
        "window.__gapvizChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__gapvizChartsReady) { return; }
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__gapvizChartScripts);
                    delete window.__gapvizChartScripts;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof renderScatterPlot !== 'undefined') window.renderScatterPlot = renderScatterPlot;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__gapvizChartsReady = true;
                    console.log('gapviz charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Call `window.<function>(container_id, scene, config)` once the scripts are
/// ready and the container exists in the DOM.
fn render_when_ready(function: &str, container_id: &str, scene_json: &str, config_json: &str) {
    // JSON string literals are valid JS string literals, quotes and all.
    let scene_literal = serde_json::to_string(scene_json).unwrap_or_default();
    let config_literal = serde_json::to_string(config_json).unwrap_or_default();
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__gapvizChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', {scene_literal}, {config_literal});
                    }} catch(e) {{ console.error('[gapviz] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

pub fn render_bar_chart(container_id: &str, scene_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, scene_json, config_json);
}

pub fn render_scatter_plot(container_id: &str, scene_json: &str, config_json: &str) {
    render_when_ready("renderScatterPlot", container_id, scene_json, config_json);
}

pub fn render_line_chart(container_id: &str, scene_json: &str, config_json: &str) {
    render_when_ready("renderLineChart", container_id, scene_json, config_json);
}

/// Expose `handler` to JS as `window.<name>(key)`.
///
/// The closure lives for the rest of the page session.
pub fn register_callback(name: &str, handler: impl FnMut(String) + 'static) {
    let closure = Closure::<dyn FnMut(String)>::new(handler);
    if let Err(e) = js_sys::Reflect::set(&js_sys::global(), &JsValue::from_str(name), closure.as_ref()) {
        log::error!("[gapviz] js_bridge: Failed to register {}: {:?}", name, e);
        return;
    }
    closure.forget();
}

/// Push every recomputed scene of `frame` to its chart.
pub fn draw_frame(targets: &ChartTargets, frame: &Frame, layout: &ChartLayout) {
    let config_json = serde_json::to_string(layout).unwrap_or_default();

    if let Some(bar) = &frame.bar {
        log::debug!("[gapviz] bar patch: {:?}", bar.patch);
        render_bar_chart(targets.bar, &to_json(&bar.scene), &config_json);
    }
    if let Some(scatter) = &frame.scatter {
        log::debug!("[gapviz] scatter patch: {:?}", scatter.patch);
        render_scatter_plot(targets.scatter, &to_json(&scatter.scene), &config_json);
    }
    if let Some(line) = &frame.line {
        log::debug!("[gapviz] line patch: {:?}", line.patch);
        render_line_chart(targets.line, &to_json(&line.scene), &config_json);
    }
}

fn to_json<T: Serialize>(scene: &T) -> String {
    serde_json::to_string(scene).unwrap_or_else(|e| {
        log::error!("[gapviz] js_bridge: Failed to serialize scene: {}", e);
        String::from("{}")
    })
}
