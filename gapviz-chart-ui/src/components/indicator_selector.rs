//! Dropdowns choosing which indicator drives each chart encoding.

use crate::state::AppState;
use dioxus::prelude::*;
use gapviz_data::Indicator;
use gapviz_views::{Event as DashboardEvent, Selection};

/// The chart encoding a selector controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    X,
    Y,
    Radius,
    Bar,
    Line,
}

impl Control {
    pub const ALL: [Control; 5] = [Control::X, Control::Y, Control::Radius, Control::Bar, Control::Line];

    /// DOM id of the `select` element.
    pub fn id(self) -> &'static str {
        match self {
            Control::X => "x",
            Control::Y => "y",
            Control::Radius => "radius",
            Control::Bar => "param",
            Control::Line => "p",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Control::X => "X axis",
            Control::Y => "Y axis",
            Control::Radius => "Radius",
            Control::Bar => "Bar chart",
            Control::Line => "Line chart",
        }
    }

    pub fn current(self, selection: &Selection) -> Indicator {
        match self {
            Control::X => selection.x,
            Control::Y => selection.y,
            Control::Radius => selection.radius,
            Control::Bar => selection.bar,
            Control::Line => selection.line,
        }
    }

    pub fn event(self, indicator: Indicator) -> DashboardEvent {
        match self {
            Control::X => DashboardEvent::XChanged(indicator),
            Control::Y => DashboardEvent::YChanged(indicator),
            Control::Radius => DashboardEvent::RadiusChanged(indicator),
            Control::Bar => DashboardEvent::BarChanged(indicator),
            Control::Line => DashboardEvent::LineChanged(indicator),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct IndicatorSelectorProps {
    pub control: Control,
}

/// Indicator dropdown for one chart encoding.
/// Reads the current choice from AppState and sends the change event.
#[component]
pub fn IndicatorSelector(props: IndicatorSelectorProps) -> Element {
    let state = use_context::<AppState>();
    let events = use_coroutine_handle::<DashboardEvent>();
    let control = props.control;
    let Some(selection) = state.selection() else {
        return rsx! {};
    };
    let current = control.current(&selection);

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<Indicator>() {
        Ok(indicator) => events.send(control.event(indicator)),
        Err(e) => log::warn!("[gapviz] {} selector: {}", control.id(), e),
    };

    rsx! {
        label {
            style: "font-weight: bold; margin-right: 12px;",
            r#for: "{control.id()}",
            "{control.label()}: "
            select {
                id: "{control.id()}",
                onchange: on_change,
                for indicator in Indicator::ALL {
                    option {
                        value: "{indicator.id()}",
                        selected: indicator == current,
                        "{indicator.label()}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_events_match_their_field() {
        for control in Control::ALL {
            let mut selection = Selection::default();
            selection.apply(control.event(Indicator::LifeExpectancy));
            assert_eq!(control.current(&selection), Indicator::LifeExpectancy);
        }
    }

    #[test]
    fn control_ids_are_unique() {
        let mut ids: Vec<_> = Control::ALL.iter().map(|c| c.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Control::ALL.len());
    }
}
