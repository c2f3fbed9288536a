// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures and per-notification lifecycle rules.

use std::time::{Duration, Instant};

use super::element::ToastElement;
use crate::i18n::fluent::I18n;

/// Auto-dismiss fallback for [`Kind::Info`] and [`Kind::Success`] when the
/// host configures no default.
pub const FALLBACK_DURATION_MS: u64 = 5000;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of a notification, driving styling, accessible labeling, and the
/// auto-dismiss default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Informational message (auto-dismisses by default).
    #[default]
    Info,
    /// Warning that needs acknowledgement (never auto-dismisses).
    Warning,
    /// Operation completed (auto-dismisses by default).
    Success,
    /// Long-running operation with a progress indicator (never
    /// auto-dismisses).
    Progress,
}

impl Kind {
    /// Suffix of the kind-derived styling class.
    #[must_use]
    pub fn class_suffix(self) -> &'static str {
        match self {
            Kind::Info => "info",
            Kind::Warning => "warning",
            Kind::Success => "success",
            Kind::Progress => "progress",
        }
    }

    /// i18n key of the kind's accessible label.
    #[must_use]
    pub fn aria_label_key(self) -> &'static str {
        match self {
            Kind::Info => "notification-kind-info",
            Kind::Warning => "notification-kind-warning",
            Kind::Success => "notification-kind-success",
            Kind::Progress => "notification-kind-progress",
        }
    }

    /// Whether this kind auto-dismisses when no explicit duration is set.
    #[must_use]
    pub fn auto_dismisses(self) -> bool {
        matches!(self, Kind::Info | Kind::Success)
    }
}

/// Options accepted by [`NotificationArea::update`].
///
/// Fields are merged selectively — only present keys are applied — with one
/// exception: `duration` replaces the stored value on every update, even
/// when left unset here.
///
/// [`NotificationArea::update`]: super::NotificationArea::update
#[derive(Debug, Clone, Default)]
pub struct NotificationUpdate {
    pub message: Option<String>,
    pub kind: Option<Kind>,
    pub progress: Option<f32>,
    pub duration: Option<u64>,
    /// Force visibility and an assertive alert role, unless the update
    /// signal is vetoed.
    pub important: bool,
}

impl NotificationUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn progress(mut self, progress: f32) -> Self {
        self.progress = Some(progress);
        self
    }

    #[must_use]
    pub fn duration(mut self, millis: u64) -> Self {
        self.duration = Some(millis);
        self
    }

    #[must_use]
    pub fn important(mut self) -> Self {
        self.important = true;
        self
    }
}

/// One transient message and its rendered representation.
///
/// The element is created here, at construction, and reused for every later
/// show/hide cycle. The area owns the canonical collection; a notification
/// never holds a reference back to it.
#[derive(Debug)]
pub struct Notification {
    id: NotificationId,
    message: String,
    kind: Kind,
    progress: f32,
    duration: Option<u64>,
    element: ToastElement,
    hide_deadline: Option<Instant>,
}

impl Notification {
    /// Constructs a notification and its element.
    #[must_use]
    pub fn new(message: impl Into<String>, kind: Kind, i18n: &I18n) -> Self {
        let message = message.into();
        let element = ToastElement::new(
            kind,
            message.clone(),
            i18n.tr(kind.aria_label_key()),
            i18n.tr("notification-close"),
        );
        Self {
            id: NotificationId::new(),
            message,
            kind,
            progress: 0.0,
            duration: None,
            element,
            hide_deadline: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Progress fraction; meaningful only for [`Kind::Progress`].
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Explicit auto-dismiss duration in milliseconds, if any.
    #[must_use]
    pub fn duration(&self) -> Option<u64> {
        self.duration
    }

    #[must_use]
    pub fn element(&self) -> &ToastElement {
        &self.element
    }

    /// Sets the progress fraction and the indicator width.
    pub fn set_progress(&mut self, progress: f32) {
        self.progress = progress;
        self.element.set_progress(progress);
    }

    /// Sets the explicit duration override.
    pub fn set_duration(&mut self, millis: Option<u64>) {
        self.duration = millis;
    }

    /// Applies the data half of an update: fields and element, never the
    /// area interaction. Runs regardless of whether the update signal was
    /// vetoed.
    pub fn apply_update(&mut self, options: &NotificationUpdate, i18n: &I18n) {
        if let Some(kind) = options.kind {
            if kind != self.kind {
                self.element
                    .set_kind(self.kind, kind, i18n.tr(kind.aria_label_key()));
                self.kind = kind;
            }
        }
        if let Some(message) = &options.message {
            self.message = message.clone();
            self.element.set_message(message.clone());
        }
        if let Some(progress) = options.progress {
            self.set_progress(progress);
        }
        // duration is replace-not-merge: an update without a duration clears
        // any previous override.
        self.duration = options.duration;
    }

    /// Marks the element as an assertive alert.
    pub fn mark_alert(&mut self) {
        self.element.mark_alert();
    }

    /// Recomputes the auto-dismiss deadline, clearing any pending one first.
    ///
    /// Effective duration: the explicit override when set (zero disables
    /// auto-dismiss); otherwise the configured default — falling back to
    /// [`FALLBACK_DURATION_MS`] — for kinds that auto-dismiss; otherwise
    /// none.
    pub fn restart_timer(&mut self, now: Instant, configured_default_ms: Option<u64>) {
        self.hide_deadline = None;
        let effective_ms = match self.duration {
            Some(millis) => millis,
            None if self.kind.auto_dismisses() => {
                configured_default_ms.unwrap_or(FALLBACK_DURATION_MS)
            }
            None => 0,
        };
        if effective_ms > 0 {
            self.hide_deadline = Some(now + Duration::from_millis(effective_ms));
        }
    }

    /// Drops the pending auto-dismiss deadline.
    pub fn clear_timer(&mut self) {
        self.hide_deadline = None;
    }

    #[must_use]
    pub fn hide_deadline(&self) -> Option<Instant> {
        self.hide_deadline
    }
}
