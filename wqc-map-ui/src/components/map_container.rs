//! Map container component with loading state.

use dioxus::prelude::*;

/// Props for MapContainer
#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id for the map container (Leaflet will render into this)
    pub id: String,
    /// Map width in pixels
    pub width: u32,
    /// Map height in pixels
    pub height: u32,
    #[props(default = false)]
    pub loading: bool,
}

/// A fixed-size container div for the Leaflet map with loading overlay.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let style = format!(
        "width: {}px; max-width: 100%; height: {}px; position: relative;",
        props.width, props.height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Loading map..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%; height: 100%;",
            }
        }
    }
}
