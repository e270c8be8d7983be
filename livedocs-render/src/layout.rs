//! Page layout selection.
//!
//! A page gets a control column only when some session spans more than one
//! editor; otherwise each editor carries its own inline run controls.

use std::fmt;

use crate::session::SessionGroups;

/// Page structure for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// One column of editors, each with inline controls.
    SingleColumn,
    /// Editors on the left, one run button and output panel per session on
    /// the right.
    TwoColumn,
}

impl Layout {
    /// Selects the layout for a document's sessions.
    #[must_use]
    pub fn select(groups: &SessionGroups<'_>) -> Self {
        Self::for_max_group_size(groups.max_group_size())
    }

    /// Layout for a document whose largest session has `max_size` regions.
    #[must_use]
    pub const fn for_max_group_size(max_size: usize) -> Self {
        if max_size <= 1 {
            Self::SingleColumn
        } else {
            Self::TwoColumn
        }
    }

    /// Whether editors render their own run controls.
    #[must_use]
    pub const fn inline_controls(self) -> bool {
        matches!(self, Self::SingleColumn)
    }

    /// Stable name for logs and metric labels.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SingleColumn => "single_column",
            Self::TwoColumn => "two_column",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::group_sessions;
    use livedocs_core::CodeRegion;
    use proptest::prelude::*;

    #[test]
    fn test_empty_document_is_single_column() {
        assert_eq!(Layout::select(&group_sessions(&[])), Layout::SingleColumn);
    }

    #[test]
    fn test_one_region_per_session_is_single_column() {
        let regions = vec![CodeRegion::new("a", ""), CodeRegion::new("b", "")];
        assert_eq!(Layout::select(&group_sessions(&regions)), Layout::SingleColumn);
    }

    #[test]
    fn test_shared_session_is_two_column() {
        let regions = vec![
            CodeRegion::new("a", ""),
            CodeRegion::new("b", ""),
            CodeRegion::new("a", ""),
        ];
        assert_eq!(Layout::select(&group_sessions(&regions)), Layout::TwoColumn);
    }

    #[test]
    fn test_inline_controls_follow_layout() {
        assert!(Layout::SingleColumn.inline_controls());
        assert!(!Layout::TwoColumn.inline_controls());
    }

    #[test]
    fn test_display() {
        assert_eq!(Layout::SingleColumn.to_string(), "single_column");
        assert_eq!(Layout::TwoColumn.to_string(), "two_column");
    }

    proptest! {
        #[test]
        fn distinct_sessions_never_need_a_control_column(count in 0usize..30) {
            let regions: Vec<CodeRegion> =
                (0..count).map(|i| CodeRegion::new(format!("s{i}"), "")).collect();
            prop_assert_eq!(Layout::select(&group_sessions(&regions)), Layout::SingleColumn);
        }

        #[test]
        fn any_repeated_session_needs_a_control_column(
            sessions in prop::collection::vec(0u8..6, 0..30),
        ) {
            let regions: Vec<CodeRegion> =
                sessions.iter().map(|s| CodeRegion::new(s.to_string(), "")).collect();
            let mut seen = std::collections::HashSet::new();
            let repeated = sessions.iter().any(|s| !seen.insert(*s));

            let expected = if repeated { Layout::TwoColumn } else { Layout::SingleColumn };
            prop_assert_eq!(Layout::select(&group_sessions(&regions)), expected);
        }
    }
}
