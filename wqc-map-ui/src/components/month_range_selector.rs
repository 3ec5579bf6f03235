//! Inclusive month range selector.

use crate::state::AppState;
use dioxus::prelude::*;
use wqc_types::MonthRange;
use wqc_utils::months::{month_abbrev, range_label};

/// "Select Month Range" control: two month dropdowns.
///
/// Moving one bound past the other drags the other bound along, so the
/// range is always valid.
#[component]
pub fn MonthRangeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let range = (state.months)();
    let start = range.start();
    let end = range.end();

    let on_start_change = move |evt: Event<FormData>| {
        if let Ok(month) = evt.value().parse::<u32>() {
            let end = (state.months)().end().max(month);
            if let Ok(range) = MonthRange::new(month, end) {
                state.months.set(range);
            }
        }
    };

    let on_end_change = move |evt: Event<FormData>| {
        if let Ok(month) = evt.value().parse::<u32>() {
            let start = (state.months)().start().min(month);
            if let Ok(range) = MonthRange::new(start, month) {
                state.months.set(range);
            }
        }
    };

    let label = range_label(start, end);
    let month_options: Vec<(u32, &'static str)> = MonthRange::full_year()
        .months()
        .map(|m| (m, month_abbrev(m).unwrap_or_default()))
        .collect();

    rsx! {
        div {
            style: "margin: 8px 0;",
            div {
                style: "font-weight: bold; margin-bottom: 4px;",
                "Select Month Range: "
                span { style: "font-weight: normal; color: #555;", "{label}" }
            }
            div {
                style: "display: flex; gap: 8px; align-items: center;",
                select {
                    onchange: on_start_change,
                    for (month, name) in month_options.iter().copied() {
                        option {
                            value: "{month}",
                            selected: month == start,
                            "{name}"
                        }
                    }
                }
                "to"
                select {
                    onchange: on_end_change,
                    for (month, name) in month_options.iter().copied() {
                        option {
                            value: "{month}",
                            selected: month == end,
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}
