use dioxus::prelude::*;

/// Warning shown instead of the map when the filters match nothing.
#[component]
pub fn NoDataNotice() -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFF8E1; color: #8D6E00; border-radius: 4px; border: 1px solid #FFE082;",
            "No data to display."
        }
    }
}
