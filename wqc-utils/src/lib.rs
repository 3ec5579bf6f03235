//! Shared utility functions for WQC crates.

/// Month label helpers for selectors and summaries
pub mod months {
    use chrono::Month;

    /// Full English name of a month number (1-12), e.g. 3 -> "March".
    pub fn month_name(month: u32) -> Option<&'static str> {
        let month = u8::try_from(month).ok()?;
        Month::try_from(month).ok().map(|m| m.name())
    }

    /// Three letter abbreviation of a month number, e.g. 3 -> "Mar".
    pub fn month_abbrev(month: u32) -> Option<&'static str> {
        month_name(month).map(|name| &name[..3])
    }

    /// Human-readable label for an inclusive month range, e.g. "Mar - Jul".
    pub fn range_label(start: u32, end: u32) -> String {
        let a = month_abbrev(start).unwrap_or("?");
        let b = month_abbrev(end).unwrap_or("?");
        if start == end {
            a.to_string()
        } else {
            format!("{} - {}", a, b)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_month_name() {
            assert_eq!(month_name(1), Some("January"));
            assert_eq!(month_name(12), Some("December"));
            assert_eq!(month_name(0), None);
            assert_eq!(month_name(13), None);
        }

        #[test]
        fn test_month_abbrev() {
            assert_eq!(month_abbrev(9), Some("Sep"));
            assert_eq!(month_abbrev(400), None);
        }

        #[test]
        fn test_range_label() {
            assert_eq!(range_label(1, 12), "Jan - Dec");
            assert_eq!(range_label(5, 5), "May");
        }
    }
}
