// SPDX-License-Identifier: MPL-2.0
//! The per-surface notification area.
//!
//! The area owns the canonical collection of notifications, the container
//! element the visible ones render into, and the listener set that keeps
//! the stack positioned. Listeners exist — and the container is attached —
//! exactly while the visible collection is non-empty.

use std::rc::Rc;
use std::time::Duration;

use iced::keyboard::key::Named;
use iced::keyboard::Key;

use super::layout::{place, LayoutInput, Placement};
use super::notification::{Kind, Notification, NotificationId, NotificationUpdate};
use crate::config::Config;
use crate::diagnostics::{AreaEvent, DiagnosticsHandle, LifecycleStage};
use crate::i18n::fluent::I18n;
use crate::surface::events::{HideEvent, Outcome, ShowEvent, SignalHub, UpdateEvent};
use crate::surface::{HostSurface, SurfaceEvent, ToastBox};
use crate::timing::{Clock, Coalescer, SystemClock};

/// Coalescing window for scroll and resize bursts.
pub const SCROLL_COALESCE_MS: u64 = 10;

/// Coalescing window for content-change bursts (typing).
pub const CONTENT_COALESCE_MS: u64 = 500;

/// Retained state of the area's container element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AreaElement {
    attached: bool,
    placement: Option<Placement>,
}

impl AreaElement {
    /// Whether the container is attached to the document.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Last computed position, while attached.
    #[must_use]
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }
}

/// Geometry-observing listener set, alive only while the area is occupied.
///
/// Scroll and resize share the fast buffer; content changes get the slow
/// one, so typing bursts cannot thrash layout. The two buffers are
/// independent and their firings may interleave in any order.
#[derive(Debug)]
struct Listeners {
    scroll_resize: Coalescer,
    content_change: Coalescer,
}

impl Listeners {
    fn new() -> Self {
        Self {
            scroll_resize: Coalescer::new(Duration::from_millis(SCROLL_COALESCE_MS)),
            content_change: Coalescer::new(Duration::from_millis(CONTENT_COALESCE_MS)),
        }
    }
}

/// Ordered collection and position manager for one surface's notifications.
pub struct NotificationArea {
    /// Every notification constructed through this area. Entries persist
    /// across hide so elements can be reused on re-show.
    entries: Vec<Notification>,
    /// Visible subset, insertion order = display order (newest last).
    visible: Vec<NotificationId>,
    element: AreaElement,
    listeners: Option<Listeners>,
    /// Toast width and margin, measured once on first layout and reused;
    /// an accepted staleness tradeoff when toast widths differ.
    toast_box: Option<ToastBox>,
    signals: SignalHub,
    clock: Rc<dyn Clock>,
    i18n: I18n,
    default_duration_ms: Option<u64>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl NotificationArea {
    /// Creates an area for a surface configured by `config`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, Rc::new(SystemClock))
    }

    /// Creates an area reading time from the given clock.
    #[must_use]
    pub fn with_clock(config: &Config, clock: Rc<dyn Clock>) -> Self {
        Self {
            entries: Vec::new(),
            visible: Vec::new(),
            element: AreaElement::default(),
            listeners: None,
            toast_box: None,
            signals: SignalHub::new(),
            clock,
            i18n: I18n::new(None, config),
            default_duration_ms: config.notification_duration_ms,
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle lifecycle events are mirrored to.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// The cancelable lifecycle signals.
    pub fn signals_mut(&mut self) -> &mut SignalHub {
        &mut self.signals
    }

    /// Constructs a notification without showing it.
    pub fn create(&mut self, message: impl Into<String>, kind: Kind) -> NotificationId {
        let notification = Notification::new(message, kind, &self.i18n);
        let id = notification.id();
        self.entries.push(notification);
        id
    }

    /// Constructs and immediately shows a notification.
    ///
    /// The meaning of `value` depends on `kind`: a progress fraction for
    /// [`Kind::Progress`], otherwise an auto-dismiss duration in
    /// milliseconds.
    pub fn notify(
        &mut self,
        host: &dyn HostSurface,
        message: impl Into<String>,
        kind: Kind,
        value: Option<f64>,
    ) -> NotificationId {
        let id = self.create(message, kind);
        if let Some(value) = value {
            let ix = self.entries.len() - 1;
            match kind {
                Kind::Progress => self.entries[ix].set_progress(value as f32),
                _ => self.entries[ix].set_duration(Some(value as u64)),
            }
        }
        self.show(host, id);
        id
    }

    /// Shows a notification. Returns `false` when it is unknown or the
    /// about-to-show signal was vetoed; a veto leaves all state untouched.
    pub fn show(&mut self, host: &dyn HostSurface, id: NotificationId) -> bool {
        let Some(ix) = self.index_of(id) else {
            return false;
        };
        let event = ShowEvent {
            id,
            kind: self.entries[ix].kind(),
            message: self.entries[ix].message().to_string(),
        };
        if self.signals.about_to_show.emit(&event) == Outcome::Veto {
            self.log(AreaEvent::Vetoed {
                id,
                stage: LifecycleStage::Show,
            });
            return false;
        }

        self.add(host, id);

        let now = self.clock.now();
        let default_ms = self.default_duration_ms;
        self.entries[ix].restart_timer(now, default_ms);

        self.log(AreaEvent::Shown {
            id,
            kind: event.kind,
            message: event.message,
        });
        if self.entries[ix].kind() == Kind::Warning {
            if let Some(handle) = &self.diagnostics {
                handle.log_warning(self.entries[ix].message());
            }
        }
        true
    }

    /// Updates a notification. The data half (fields and element) applies
    /// even when the about-to-update signal is vetoed; the visual half —
    /// alert role and re-adding a hidden notification when `important` —
    /// runs only when the signal proceeds. Returns `false` for an unknown
    /// id.
    pub fn update(
        &mut self,
        host: &dyn HostSurface,
        id: NotificationId,
        options: NotificationUpdate,
    ) -> bool {
        let Some(ix) = self.index_of(id) else {
            return false;
        };
        let event = UpdateEvent {
            id,
            options: options.clone(),
        };
        let proceed = self.signals.about_to_update.emit(&event) == Outcome::Proceed;
        if !proceed {
            self.log(AreaEvent::Vetoed {
                id,
                stage: LifecycleStage::Update,
            });
        }

        self.entries[ix].apply_update(&options, &self.i18n);

        if proceed && options.important {
            self.entries[ix].mark_alert();
            if !self.is_visible(id) {
                self.add(host, id);
            }
        }

        let now = self.clock.now();
        let default_ms = self.default_duration_ms;
        self.entries[ix].restart_timer(now, default_ms);

        self.log(AreaEvent::Updated { id });
        true
    }

    /// Hides a notification. Returns `false` when it is unknown or the
    /// about-to-hide signal was vetoed. The element is detached, never
    /// destroyed; hiding an already hidden notification is a no-op that
    /// still reports `true`.
    pub fn hide(&mut self, id: NotificationId) -> bool {
        let Some(ix) = self.index_of(id) else {
            return false;
        };
        let event = HideEvent {
            id,
            kind: self.entries[ix].kind(),
        };
        if self.signals.about_to_hide.emit(&event) == Outcome::Veto {
            self.log(AreaEvent::Vetoed {
                id,
                stage: LifecycleStage::Hide,
            });
            return false;
        }

        self.entries[ix].clear_timer();
        self.remove(id);
        self.log(AreaEvent::Hidden {
            id,
            kind: event.kind,
        });
        true
    }

    /// Appends to the visible collection and inserts the element. The
    /// empty→non-empty transition attaches the container and the listener
    /// set. Layout always runs after insertion.
    fn add(&mut self, host: &dyn HostSurface, id: NotificationId) {
        if !self.visible.contains(&id) {
            self.visible.push(id);
            if self.visible.len() == 1 {
                self.element.attached = true;
                self.listeners = Some(Listeners::new());
            }
        }
        self.layout(host);
    }

    /// Splices out of the visible collection; absent ids are a silent
    /// no-op. The non-empty→empty transition detaches the container and
    /// drops the listener set.
    fn remove(&mut self, id: NotificationId) {
        let Some(position) = self.visible.iter().position(|visible| *visible == id) else {
            return;
        };
        self.visible.remove(position);
        if self.visible.is_empty() {
            self.element = AreaElement::default();
            self.listeners = None;
        }
    }

    /// Routes one surface event. Returns whether the event was consumed
    /// (only ESC with a visible notification consumes).
    pub fn handle_event(&mut self, host: &dyn HostSurface, event: &SurfaceEvent) -> bool {
        match event {
            SurfaceEvent::Scrolled | SurfaceEvent::Resized => {
                let now = self.clock.now();
                if let Some(listeners) = &mut self.listeners {
                    listeners.scroll_resize.signal(now);
                }
                false
            }
            SurfaceEvent::ContentChanged => {
                let now = self.clock.now();
                if let Some(listeners) = &mut self.listeners {
                    listeners.content_change.signal(now);
                }
                false
            }
            SurfaceEvent::FloatingRelayout | SurfaceEvent::Blurred => {
                if self.listeners.is_some() {
                    self.layout(host);
                }
                false
            }
            SurfaceEvent::KeyPressed(key) => self.handle_key(host, key),
        }
    }

    /// ESC dismisses the most recently added visible notification and
    /// announces the closure. The key is consumed iff a notification was
    /// present.
    fn handle_key(&mut self, host: &dyn HostSurface, key: &Key) -> bool {
        if !matches!(key, Key::Named(Named::Escape)) {
            return false;
        }
        let Some(&last) = self.visible.last() else {
            return false;
        };
        if self.hide(last) {
            host.announce(&self.i18n.tr("notification-closed"));
        }
        true
    }

    /// Drives the coalescing buffers and auto-dismiss deadlines. The host
    /// calls this from its tick; nothing here blocks.
    pub fn tick(&mut self, host: &dyn HostSurface) {
        let now = self.clock.now();

        let mut needs_layout = false;
        if let Some(listeners) = &mut self.listeners {
            needs_layout |= listeners.scroll_resize.poll(now);
            needs_layout |= listeners.content_change.poll(now);
        }
        if needs_layout {
            self.layout(host);
        }

        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .copied()
            .filter(|id| {
                self.entry(*id)
                    .and_then(Notification::hide_deadline)
                    .is_some_and(|deadline| deadline <= now)
            })
            .collect();
        for id in expired {
            if let Some(ix) = self.index_of(id) {
                // The deadline fired; a vetoed hide does not reschedule it.
                self.entries[ix].clear_timer();
            }
            self.hide(id);
        }
    }

    /// Recomputes the stack position from fresh host geometry.
    ///
    /// The toast box is measured on the first pass that can see a rendered
    /// toast and cached from then on.
    pub fn layout(&mut self, host: &dyn HostSurface) {
        if self.toast_box.is_none() {
            self.toast_box = host.first_toast_box();
        }
        let Some(toast_box) = self.toast_box else {
            return;
        };
        let input = LayoutInput {
            content_rect: host.content_rect(),
            content_document_position: host.content_document_position(),
            toolbar_rect: host.toolbar_rect(),
            area_size: host.area_size(),
            scroll: host.scroll_offset(),
            viewport: host.viewport_size(),
            body_document_position: host.body_document_position(),
            toast_box,
        };
        self.element.placement = Some(place(&input));
    }

    /// Releases the element, listeners, and every pending timer. Bound to
    /// the host's teardown lifecycle hook.
    pub fn teardown(&mut self) {
        self.visible.clear();
        self.entries.clear();
        self.element = AreaElement::default();
        self.listeners = None;
    }

    #[must_use]
    pub fn is_visible(&self, id: NotificationId) -> bool {
        self.visible.contains(&id)
    }

    /// Visible notifications in display order.
    pub fn visible_notifications(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter().filter_map(|id| self.entry(*id))
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entry(id)
    }

    #[must_use]
    pub fn element(&self) -> &AreaElement {
        &self.element
    }

    /// Whether the geometry listener set is attached. Holds iff the
    /// visible collection is non-empty.
    #[must_use]
    pub fn listeners_attached(&self) -> bool {
        self.listeners.is_some()
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    fn index_of(&self, id: NotificationId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }

    fn entry(&self, id: NotificationId) -> Option<&Notification> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    fn log(&self, event: AreaEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log(event);
        }
    }
}

impl std::fmt::Debug for NotificationArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationArea")
            .field("entries", &self.entries.len())
            .field("visible", &self.visible)
            .field("element", &self.element)
            .field("listeners_attached", &self.listeners.is_some())
            .field("toast_box", &self.toast_box)
            .finish_non_exhaustive()
    }
}
