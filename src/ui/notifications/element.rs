// SPDX-License-Identifier: MPL-2.0
//! Retained rendered state of a single toast.
//!
//! A [`ToastElement`] is built once, when its notification is constructed,
//! and mutated in place for the rest of the notification's life. Hiding a
//! notification detaches the element from the area; it is never rebuilt, so
//! its identity is stable across show/hide cycles.

use super::Kind;

/// Base styling class shared by every toast.
pub const BASE_CLASS: &str = "toast";

/// Progress indicator child, rendered immediately before the message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressIndicator {
    /// Width as a percentage of the toast, `round(progress * 100)`.
    ///
    /// Out-of-range progress values are not validated, so the percentage
    /// can fall outside `[0, 100]`; that is a caller contract violation.
    pub width_percent: f32,
}

/// The rendered representation a notification owns.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastElement {
    instance: u64,
    classes: Vec<String>,
    aria_label: String,
    alert: bool,
    message: String,
    progress: Option<ProgressIndicator>,
    close_label: String,
}

impl ToastElement {
    /// Builds the element for a fresh notification.
    ///
    /// `aria_label` is the localized name of the kind; `close_label` the
    /// localized close-button label.
    #[must_use]
    pub fn new(kind: Kind, message: String, aria_label: String, close_label: String) -> Self {
        let mut element = Self {
            instance: next_instance(),
            classes: vec![BASE_CLASS.to_string(), kind_class(kind)],
            aria_label,
            alert: false,
            message,
            progress: None,
            close_label,
        };
        if kind == Kind::Progress {
            element.progress = Some(ProgressIndicator { width_percent: 0.0 });
        }
        element
    }

    /// Identity token, stable for the life of the element.
    #[must_use]
    pub fn instance(&self) -> u64 {
        self.instance
    }

    /// Swaps the kind-derived styling class and ARIA label, and inserts or
    /// removes the progress indicator on transitions into or out of
    /// [`Kind::Progress`].
    pub fn set_kind(&mut self, old: Kind, new: Kind, aria_label: String) {
        let old_class = kind_class(old);
        self.classes.retain(|class| *class != old_class);
        self.classes.push(kind_class(new));
        self.aria_label = aria_label;

        if new == Kind::Progress {
            if self.progress.is_none() {
                self.progress = Some(ProgressIndicator { width_percent: 0.0 });
            }
        } else {
            self.progress = None;
        }
    }

    pub fn set_message(&mut self, message: String) {
        self.message = message;
    }

    /// Sets the indicator width from a progress fraction. No-op while no
    /// indicator exists.
    pub fn set_progress(&mut self, progress: f32) {
        if let Some(indicator) = &mut self.progress {
            indicator.width_percent = (progress * 100.0).round();
        }
    }

    /// Marks the element as an assertive alert for screen readers.
    pub fn mark_alert(&mut self) {
        self.alert = true;
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    #[must_use]
    pub fn aria_label(&self) -> &str {
        &self.aria_label
    }

    #[must_use]
    pub fn is_alert(&self) -> bool {
        self.alert
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn progress_indicator(&self) -> Option<&ProgressIndicator> {
        self.progress.as_ref()
    }

    #[must_use]
    pub fn close_label(&self) -> &str {
        &self.close_label
    }
}

fn kind_class(kind: Kind) -> String {
    format!("{BASE_CLASS}-{}", kind.class_suffix())
}

fn next_instance() -> u64 {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    COUNTER.fetch_add(1, Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(kind: Kind) -> ToastElement {
        ToastElement::new(
            kind,
            "saving".to_string(),
            "Information".to_string(),
            "Close".to_string(),
        )
    }

    #[test]
    fn instances_are_unique() {
        assert_ne!(element(Kind::Info).instance(), element(Kind::Info).instance());
    }

    #[test]
    fn new_element_carries_base_and_kind_classes() {
        let element = element(Kind::Warning);
        assert_eq!(element.classes(), ["toast", "toast-warning"]);
    }

    #[test]
    fn progress_kind_gets_indicator_at_construction() {
        assert!(element(Kind::Progress).progress_indicator().is_some());
        assert!(element(Kind::Info).progress_indicator().is_none());
    }

    #[test]
    fn set_kind_swaps_class_and_label() {
        let mut element = element(Kind::Info);
        element.set_kind(Kind::Info, Kind::Success, "Success".to_string());
        assert_eq!(element.classes(), ["toast", "toast-success"]);
        assert_eq!(element.aria_label(), "Success");
    }

    #[test]
    fn entering_progress_inserts_indicator_and_leaving_removes_it() {
        let mut element = element(Kind::Info);
        element.set_kind(Kind::Info, Kind::Progress, "Progress".to_string());
        assert!(element.progress_indicator().is_some());

        element.set_kind(Kind::Progress, Kind::Info, "Information".to_string());
        assert!(element.progress_indicator().is_none());
    }

    #[test]
    fn set_progress_rounds_to_whole_percent() {
        let mut element = element(Kind::Progress);
        element.set_progress(0.256);
        assert_eq!(element.progress_indicator().unwrap().width_percent, 26.0);
    }

    #[test]
    fn set_progress_without_indicator_is_noop() {
        let mut element = element(Kind::Info);
        element.set_progress(0.5);
        assert!(element.progress_indicator().is_none());
    }

    #[test]
    fn out_of_range_progress_is_not_clamped() {
        let mut element = element(Kind::Progress);
        element.set_progress(1.5);
        assert_eq!(element.progress_indicator().unwrap().width_percent, 150.0);
    }
}
