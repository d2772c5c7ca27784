//! Drill-down navigation history for one panel.
//!
//! The history is the breadcrumb trail: page paths from the root page to the
//! page on screen. Moving forward appends; jumping back truncates after the
//! first occurrence of the chosen page.
//!
//! # Examples
//!
//! ```
//! use experience_panel::NavigationHistory;
//!
//! let mut history = NavigationHistory::new();
//! history.push("projects");
//! history.push("detail");
//! history.truncate_to("projects");
//!
//! assert_eq!(history.pages(), ["/", "projects"]);
//! assert_eq!(history.current_page(), "projects");
//! ```

use crate::event::{LogLevel, emit_json, emit_log};
use serde::Serialize;

/// Root page every history starts at.
pub const ROOT_PAGE: &str = "/";

/// What `truncate_to` does when the page is not in the history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TruncateMiss {
    /// Drop every element and still make the page current.
    #[default]
    Clear,
    /// Leave the history and the current page unchanged.
    Keep,
}

/// Payload of the `history.*` events.
#[derive(Serialize)]
struct PagePayload<'a> {
    page: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    depth: Option<usize>,
}

/// Ordered page paths plus the page currently shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationHistory {
    pages: Vec<String>,
    current: String,
    on_miss: TruncateMiss,
}

impl NavigationHistory {
    /// History at the root page.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(TruncateMiss::default())
    }

    /// History at the root page with an explicit miss policy.
    #[must_use]
    pub fn with_policy(on_miss: TruncateMiss) -> Self {
        Self {
            pages: vec![ROOT_PAGE.to_string()],
            current: ROOT_PAGE.to_string(),
            on_miss,
        }
    }

    /// Navigate forward to `page`. Duplicates are allowed.
    ///
    /// Always changes the history, so it returns `true`.
    pub fn push(&mut self, page: impl Into<String>) -> bool {
        let page = page.into();
        emit_log(LogLevel::Debug, &format!("history: push {page:?}"));
        emit_json("history.push", &PagePayload { page: &page, depth: None });
        self.pages.push(page.clone());
        self.current = page;
        true
    }

    /// Jump back to the first occurrence of `page`, dropping everything after.
    ///
    /// Returns whether the pages or the current page changed.
    pub fn truncate_to(&mut self, page: &str) -> bool {
        let before = (self.pages.len(), self.current.clone());
        match self.pages.iter().position(|p| p == page) {
            Some(index) => {
                self.pages.truncate(index + 1);
                self.current = page.to_string();
            }
            None => match self.on_miss {
                TruncateMiss::Clear => {
                    emit_log(
                        LogLevel::Debug,
                        &format!("history: {page:?} not in history, clearing"),
                    );
                    self.pages.clear();
                    self.current = page.to_string();
                }
                TruncateMiss::Keep => {
                    emit_log(
                        LogLevel::Debug,
                        &format!("history: {page:?} not in history, ignored"),
                    );
                    return false;
                }
            },
        }

        let changed = before != (self.pages.len(), self.current.clone());
        if changed {
            emit_log(LogLevel::Debug, &format!("history: truncate to {page:?}"));
            emit_json(
                "history.truncate",
                &PagePayload {
                    page,
                    depth: Some(self.pages.len()),
                },
            );
        }
        changed
    }

    /// Breadcrumb trail, oldest first.
    #[must_use]
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// The page whose content is shown.
    #[must_use]
    pub fn current_page(&self) -> &str {
        &self.current
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Whether `page` appears anywhere in the trail.
    #[must_use]
    pub fn contains(&self, page: &str) -> bool {
        self.pages.iter().any(|p| p == page)
    }

    #[must_use]
    pub fn policy(&self) -> TruncateMiss {
        self.on_miss
    }
}

impl Default for NavigationHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_root() {
        let history = NavigationHistory::new();
        assert_eq!(history.pages(), [ROOT_PAGE]);
        assert_eq!(history.current_page(), ROOT_PAGE);
        assert_eq!(history.policy(), TruncateMiss::Clear);
    }

    #[test]
    fn test_push_and_truncate() {
        let mut history = NavigationHistory::new();
        assert!(history.push("projects"));
        assert_eq!(history.pages(), ["/", "projects"]);
        assert_eq!(history.current_page(), "projects");

        history.push("detail");
        assert_eq!(history.pages(), ["/", "projects", "detail"]);

        assert!(history.truncate_to("projects"));
        assert_eq!(history.pages(), ["/", "projects"]);
        assert_eq!(history.current_page(), "projects");
    }

    #[test]
    fn test_duplicates_truncate_to_first() {
        let mut history = NavigationHistory::new();
        history.push("a");
        history.push("b");
        history.push("a");
        assert_eq!(history.len(), 4);

        history.truncate_to("a");
        assert_eq!(history.pages(), ["/", "a"]);
    }

    #[test]
    fn test_truncate_to_current_is_noop() {
        let mut history = NavigationHistory::new();
        history.push("projects");
        assert!(!history.truncate_to("projects"));
        assert_eq!(history.pages(), ["/", "projects"]);
    }

    #[test]
    fn test_truncate_miss_clears() {
        let mut history = NavigationHistory::new();
        history.push("projects");
        assert!(history.truncate_to("nowhere"));
        assert!(history.is_empty());
        assert_eq!(history.current_page(), "nowhere");

        // A second miss for the same page changes nothing
        assert!(!history.truncate_to("nowhere"));
    }

    #[test]
    fn test_truncate_miss_keep() {
        let mut history = NavigationHistory::with_policy(TruncateMiss::Keep);
        history.push("projects");
        assert!(!history.truncate_to("nowhere"));
        assert_eq!(history.pages(), ["/", "projects"]);
        assert_eq!(history.current_page(), "projects");
    }

    #[test]
    fn test_contains() {
        let mut history = NavigationHistory::new();
        history.push("projects");
        assert!(history.contains("/"));
        assert!(history.contains("projects"));
        assert!(!history.contains("detail"));
    }
}
