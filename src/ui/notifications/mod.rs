// SPDX-License-Identifier: MPL-2.0
//! Transient notification (toast) subsystem.
//!
//! Two cooperating components:
//!
//! - [`Notification`] — one message, owning its rendered element and its
//!   auto-dismiss deadline;
//! - [`NotificationArea`] — the per-surface collection, container element,
//!   listener set, and position manager.
//!
//! Control flow: host code asks the area for a notification
//! ([`NotificationArea::notify`]) → the notification registers with the
//! area → the first occupant attaches the geometry listeners and triggers
//! layout → every buffered geometry event recomputes the position →
//! hiding (close button, ESC, timeout, or programmatic) deregisters →
//! the last departure detaches the listeners.
//!
//! # Usage
//!
//! ```ignore
//! use iced_notify::config::Config;
//! use iced_notify::ui::notifications::{Kind, NotificationArea, NotificationUpdate};
//!
//! let mut area = NotificationArea::new(&Config::default());
//! let id = area.notify(&host, "Uploading…", Kind::Progress, Some(0.0));
//! area.update(&host, id, NotificationUpdate::new().progress(0.6));
//! area.hide(id);
//! ```

pub mod area;
pub mod element;
pub mod layout;
pub mod notification;
pub mod toast;

pub use area::{AreaElement, NotificationArea, CONTENT_COALESCE_MS, SCROLL_COALESCE_MS};
pub use element::{ProgressIndicator, ToastElement};
pub use layout::{place, HorizontalZone, LayoutInput, Placement, Positioning, VerticalZone};
pub use notification::{
    Kind, Notification, NotificationId, NotificationUpdate, FALLBACK_DURATION_MS,
};
pub use toast::{view, view_area, Message as ToastMessage};
