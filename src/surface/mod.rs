// SPDX-License-Identifier: MPL-2.0
//! Interface to the host editing surface.
//!
//! The notification subsystem never owns the surface it decorates. The host
//! exposes geometry queries through [`HostSurface`], feeds geometry-affecting
//! occurrences through [`SurfaceEvent`], and observes lifecycle transitions
//! through the cancelable signals in [`events`]. All geometry uses two
//! coordinate spaces:
//!
//! - **viewport** coordinates: relative to the visible window, as reported by
//!   a client rect;
//! - **document** coordinates: relative to the top-left of the scrolled
//!   document.
//!
//! A point at viewport position `p` sits at document position `p + scroll`.

pub mod events;

use iced::keyboard::Key;
use iced::{Point, Rectangle, Size, Vector};

/// Rendered box of a toast, measured by the host renderer.
///
/// The area caches the first measured box and reuses it for every later
/// layout pass; see [`crate::ui::notifications::NotificationArea`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastBox {
    /// Outer width of the toast card.
    pub width: f32,
    /// Horizontal margin reserved around the card.
    pub margin: f32,
}

/// Geometry and accessibility services supplied by the host editing surface.
///
/// Queries are synchronous and assumed reliable; the subsystem reads them
/// fresh on every layout pass and never caches them (except the toast box,
/// which is cached deliberately).
pub trait HostSurface {
    /// Client rect of the editable content region, in viewport coordinates.
    fn content_rect(&self) -> Rectangle;

    /// Top-left of the content region, in document coordinates.
    fn content_document_position(&self) -> Point;

    /// Client rect of the top toolbar, or `None` while it is hidden.
    fn toolbar_rect(&self) -> Option<Rectangle>;

    /// Current window scroll offset.
    fn scroll_offset(&self) -> Vector;

    /// Size of the visible viewport.
    fn viewport_size(&self) -> Size;

    /// Top-left of the document body, in document coordinates.
    fn body_document_position(&self) -> Point;

    /// Rendered size of the notification stack.
    fn area_size(&self) -> Size;

    /// Rendered box of the first toast in the stack, once one exists.
    fn first_toast_box(&self) -> Option<ToastBox>;

    /// One-shot screen-reader announcement.
    fn announce(&self, text: &str);
}

/// Geometry-affecting occurrences routed to the area by the host.
///
/// Scroll and resize go through the fast coalescing buffer, content changes
/// through the slow one; relayout and blur trigger an immediate layout pass.
/// Key presses feed the ESC-to-dismiss contract.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Scrolled,
    Resized,
    ContentChanged,
    FloatingRelayout,
    Blurred,
    KeyPressed(Key),
}
