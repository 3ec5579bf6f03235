//! Radio selector for the clustering method.

use crate::state::AppState;
use dioxus::prelude::*;
use wqc_types::{ClusterSelection, ClusteringMethod};

/// "Clustering type" radio group.
/// Selecting another method resets the cluster selection to all clusters.
#[component]
pub fn MethodSelector() -> Element {
    let state = use_context::<AppState>();
    let selected = (state.method)();

    rsx! {
        fieldset {
            style: "margin: 8px 0; border: none; padding: 0;",
            legend {
                style: "font-weight: bold; margin-bottom: 4px;",
                "Clustering type"
            }
            for method in ClusteringMethod::ALL {
                label {
                    style: "display: block; margin: 2px 0; cursor: pointer;",
                    input {
                        r#type: "radio",
                        name: "clustering-method",
                        value: method.source_id(),
                        checked: method == selected,
                        onchange: move |_| {
                            let mut state = state;
                            if (state.method)() != method {
                                state.clusters.set(ClusterSelection::All);
                                state.method.set(method);
                            }
                        },
                    }
                    " {method}"
                }
            }
        }
    }
}
