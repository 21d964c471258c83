//! Titled container that D3 renders a chart into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartPanelProps {
    /// DOM id D3 selects the container by
    pub id: String,
    pub title: String,
    /// Secondary header text (the selected indicator or country)
    #[props(default = String::new())]
    pub subtitle: String,
    #[props(default = 500)]
    pub min_height: u32,
}

#[component]
pub fn ChartPanel(props: ChartPanelProps) -> Element {
    let style = format!("min-height: {}px; position: relative;", props.min_height);

    rsx! {
        div {
            style: "margin: 12px 0;",
            div {
                style: "margin-bottom: 8px;",
                h3 {
                    style: "margin: 0 0 4px 0; font-size: 16px;",
                    "{props.title}"
                }
                if !props.subtitle.is_empty() {
                    p {
                        class: "country-name",
                        style: "margin: 0; font-size: 12px; color: #666;",
                        "{props.subtitle}"
                    }
                }
            }
            div {
                style: "{style}",
                div { id: "{props.id}" }
            }
        }
    }
}
