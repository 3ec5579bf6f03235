//! Multi-select over the active table's cluster labels.

use crate::state::AppState;
use dioxus::prelude::*;
use wqc_data::palette::cluster_color;
use wqc_types::ClusterSelection;

/// "Clusters" checkbox list with a color swatch per label.
#[component]
pub fn ClusterSelector() -> Element {
    let mut state = use_context::<AppState>();
    let options = state.cluster_options.read().clone();
    let selection = state.clusters.read().clone();

    rsx! {
        div {
            style: "margin: 8px 0;",
            div {
                style: "font-weight: bold; margin-bottom: 4px; display: flex; justify-content: space-between;",
                "Clusters:"
                button {
                    style: "font-size: 11px; padding: 0 6px;",
                    onclick: move |_| state.clusters.set(ClusterSelection::All),
                    "All"
                }
            }
            for cluster in options.iter().copied() {
                label {
                    key: "{cluster}",
                    style: "display: flex; gap: 6px; align-items: center; margin: 2px 0; cursor: pointer;",
                    input {
                        r#type: "checkbox",
                        checked: selection.is_selected(cluster),
                        onchange: {
                            let options = options.clone();
                            move |_| {
                                let next = (state.clusters)().toggle(cluster, &options);
                                state.clusters.set(next);
                            }
                        },
                    }
                    span {
                        style: format!(
                            "display: inline-block; width: 10px; height: 10px; border-radius: 50%; background: {};",
                            cluster_color(cluster)
                        ),
                    }
                    "{cluster}"
                }
            }
        }
    }
}
