//! Map section header.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MapHeaderProps {
    pub title: String,
    /// Optional summary line under the title
    #[props(default = String::new())]
    pub subtitle: String,
}

#[component]
pub fn MapHeader(props: MapHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 18px;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
