//! Dioxus components, reactive state and the D3.js bridge for the gapviz
//! dashboard.
//!
//! - `js_bridge`: evaluates the D3 renderers and pushes scenes to them via `js_sys::eval()`
//! - `loader`: fetches the five indicator tables
//! - `state`: AppState with Dioxus Signals
//! - `components`: selectors, slider, legend and chart panels

pub mod components;
pub mod js_bridge;
pub mod loader;
pub mod state;
