// SPDX-License-Identifier: MPL-2.0
//! Placement of the notification stack relative to the content region,
//! the toolbar, and the viewport.
//!
//! [`place`] is a pure function of its geometric inputs. It makes two
//! independent axis decisions — a vertical zone, then a horizontal zone —
//! each by an ordered sequence of predicates where the first match wins.
//! The order encodes priority and is significant. The algorithm never
//! clips: an extreme viewport/content combination can still yield an
//! off-screen position, an accepted tradeoff of the zone heuristic.
//!
//! Coordinate spaces follow [`crate::surface`]: client rects are
//! viewport-relative, document positions are scroll-independent.

use iced::{Point, Rectangle, Size, Vector};

use crate::surface::ToastBox;

/// How the computed offsets are to be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Positioning {
    /// Relative to the viewport (CSS `fixed`).
    Fixed,
    /// Relative to the document (CSS `absolute`).
    Absolute,
}

/// Vertical zone, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalZone {
    /// Pinned under a visible toolbar that overlaps the content region.
    BelowToolbar,
    /// At the content's document top, while that top is on screen.
    TopStandard,
    /// Pinned to the viewport top while the content is scrolled past it.
    TopFixed,
    /// Bottom-aligned within the content region.
    Bottom,
}

/// Horizontal zone, in priority order within the narrow and wide cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalZone {
    Left,
    Right,
    RightFixed,
    LeftFixed,
    Center,
}

/// Everything [`place`] reads. Gathered fresh per layout pass, except the
/// toast box, which the area caches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInput {
    /// Content region client rect (viewport coordinates).
    pub content_rect: Rectangle,
    /// Content region top-left in document coordinates.
    pub content_document_position: Point,
    /// Toolbar client rect, `None` while hidden.
    pub toolbar_rect: Option<Rectangle>,
    /// Rendered size of the notification stack.
    pub area_size: Size,
    /// Window scroll offset.
    pub scroll: Vector,
    /// Viewport size.
    pub viewport: Size,
    /// Document body top-left in document coordinates.
    pub body_document_position: Point,
    /// Cached toast width and horizontal margin.
    pub toast_box: ToastBox,
}

/// Computed position of the notification stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub positioning: Positioning,
    pub top: f32,
    pub left: f32,
    pub vertical: VerticalZone,
    pub horizontal: HorizontalZone,
}

/// Chooses the stack position. Vertical zone first (it decides the
/// positioning mode the horizontal pass builds on), then horizontal zone.
#[must_use]
pub fn place(input: &LayoutInput) -> Placement {
    let (positioning, top, vertical) = place_vertical(input);
    let (left, horizontal) = place_horizontal(input, positioning);
    Placement {
        positioning,
        top,
        left,
        vertical,
        horizontal,
    }
}

fn place_vertical(input: &LayoutInput) -> (Positioning, f32, VerticalZone) {
    let content = input.content_rect;
    let content_doc = input.content_document_position;
    let area_height = input.area_size.height;

    if let Some(toolbar) = input.toolbar_rect {
        let toolbar_bottom = toolbar.y + toolbar.height;
        // Strictly between: a toolbar flush with either bound does not pin.
        if toolbar_bottom > content.y && toolbar_bottom < content.y + content.height - area_height {
            return (Positioning::Fixed, toolbar_bottom, VerticalZone::BelowToolbar);
        }
    }

    if content.y > 0.0 {
        return (Positioning::Absolute, content_doc.y, VerticalZone::TopStandard);
    }

    if content_doc.y + content.height - area_height > input.scroll.y {
        return (Positioning::Fixed, 0.0, VerticalZone::TopFixed);
    }

    (
        Positioning::Absolute,
        content_doc.y + content.height - area_height,
        VerticalZone::Bottom,
    )
}

fn place_horizontal(input: &LayoutInput, positioning: Positioning) -> (f32, HorizontalZone) {
    let content = input.content_rect;
    let content_doc_x = input.content_document_position.x;
    let toast_width = input.toast_box.width;
    let margin = input.toast_box.margin;
    let viewport_right = input.scroll.x + input.viewport.width;

    let left_base = match positioning {
        Positioning::Fixed => content.x,
        Positioning::Absolute => content_doc_x - input.body_document_position.x,
    };

    // The stack would spill past the viewport's right edge if left-aligned
    // with the content.
    let overflows_right = content_doc_x + toast_width + margin > viewport_right;

    if content.width < toast_width + margin {
        // Narrow content: the toast is wider than the region it annotates.
        if overflows_right {
            (
                left_base + content.width - toast_width - margin,
                HorizontalZone::Right,
            )
        } else {
            (left_base, HorizontalZone::Left)
        }
    } else if overflows_right {
        (left_base, HorizontalZone::Left)
    } else if content_doc_x + content.width / 2.0 + toast_width / 2.0 + margin > viewport_right {
        // Centering would spill; hug the viewport's right edge instead.
        (
            left_base - content_doc_x + input.scroll.x + input.viewport.width
                - toast_width
                - margin,
            HorizontalZone::RightFixed,
        )
    } else if content.x + content.width - toast_width - margin < 0.0 {
        (
            left_base + content.width - toast_width - margin,
            HorizontalZone::Right,
        )
    } else if content.x + content.width / 2.0 - toast_width / 2.0 < 0.0 {
        (
            left_base - content_doc_x + input.scroll.x,
            HorizontalZone::LeftFixed,
        )
    } else {
        (
            left_base + content.width / 2.0 - toast_width / 2.0,
            HorizontalZone::Center,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    /// Content fully on screen, no scroll, no toolbar. Toast 200px wide
    /// with a 20px margin.
    fn base_input() -> LayoutInput {
        LayoutInput {
            content_rect: Rectangle {
                x: 100.0,
                y: 50.0,
                width: 300.0,
                height: 350.0,
            },
            content_document_position: Point::new(100.0, 50.0),
            toolbar_rect: None,
            area_size: Size::new(220.0, 40.0),
            scroll: Vector::new(0.0, 0.0),
            viewport: Size::new(800.0, 600.0),
            body_document_position: Point::new(0.0, 0.0),
            toast_box: ToastBox {
                width: 200.0,
                margin: 20.0,
            },
        }
    }

    #[test]
    fn visible_content_top_places_top_standard() {
        let placement = place(&base_input());
        assert_eq!(placement.vertical, VerticalZone::TopStandard);
        assert_eq!(placement.positioning, Positioning::Absolute);
        assert_abs_diff_eq!(placement.top, 50.0);
    }

    #[test]
    fn toolbar_overlapping_content_pins_below_it() {
        let mut input = base_input();
        input.toolbar_rect = Some(Rectangle {
            x: 100.0,
            y: 30.0,
            width: 300.0,
            height: 40.0,
        });

        let placement = place(&input);
        assert_eq!(placement.vertical, VerticalZone::BelowToolbar);
        assert_eq!(placement.positioning, Positioning::Fixed);
        assert_abs_diff_eq!(placement.top, 70.0);
    }

    #[test]
    fn toolbar_above_content_does_not_pin() {
        let mut input = base_input();
        // Toolbar bottom (50) sits exactly on the content top; the strict
        // comparison leaves the standard zone in charge.
        input.toolbar_rect = Some(Rectangle {
            x: 100.0,
            y: 10.0,
            width: 300.0,
            height: 40.0,
        });

        let placement = place(&input);
        assert_eq!(placement.vertical, VerticalZone::TopStandard);
    }

    #[test]
    fn scrolled_past_content_top_pins_to_viewport_top() {
        let mut input = base_input();
        // Scrolled 200px down: the content top is 150px above the viewport.
        input.scroll = Vector::new(0.0, 200.0);
        input.content_rect.y = -150.0;

        let placement = place(&input);
        assert_eq!(placement.vertical, VerticalZone::TopFixed);
        assert_eq!(placement.positioning, Positioning::Fixed);
        assert_abs_diff_eq!(placement.top, 0.0);
    }

    #[test]
    fn scrolled_past_content_bottom_aligns_to_content_bottom() {
        let mut input = base_input();
        // Scrolled so far that even the content bottom minus the stack
        // height is above the fold.
        input.scroll = Vector::new(0.0, 380.0);
        input.content_rect.y = -330.0;

        let placement = place(&input);
        assert_eq!(placement.vertical, VerticalZone::Bottom);
        assert_eq!(placement.positioning, Positioning::Absolute);
        // content document top + content height - area height
        assert_abs_diff_eq!(placement.top, 50.0 + 350.0 - 40.0);
    }

    #[test]
    fn wide_content_centers_the_stack() {
        let placement = place(&base_input());
        assert_eq!(placement.horizontal, HorizontalZone::Center);
        // left_base + width/2 - toast/2 = 100 + 150 - 100
        assert_abs_diff_eq!(placement.left, 150.0);
    }

    #[test]
    fn narrow_content_left_aligns_when_room_remains() {
        let mut input = base_input();
        input.content_rect.width = 50.0;

        let placement = place(&input);
        assert_eq!(placement.horizontal, HorizontalZone::Left);
        assert_abs_diff_eq!(placement.left, 100.0);
    }

    #[test]
    fn narrow_content_at_viewport_edge_right_aligns() {
        let mut input = base_input();
        input.content_rect.x = 760.0;
        input.content_rect.width = 50.0;
        input.content_document_position.x = 760.0;

        let placement = place(&input);
        assert_eq!(placement.horizontal, HorizontalZone::Right);
        // content left + content width - toast width - margin
        assert_abs_diff_eq!(placement.left, 760.0 + 50.0 - 220.0);
    }

    #[test]
    fn wide_content_overflowing_right_left_aligns() {
        let mut input = base_input();
        input.content_rect.x = 650.0;
        input.content_rect.width = 300.0;
        input.content_document_position.x = 650.0;

        let placement = place(&input);
        assert_eq!(placement.horizontal, HorizontalZone::Left);
        assert_abs_diff_eq!(placement.left, 650.0);
    }

    #[test]
    fn centering_that_would_spill_hugs_viewport_right_edge() {
        let mut input = base_input();
        // Content wider than the viewport: a centered stack would spill
        // past the right edge, a left-aligned one would not.
        input.content_rect.x = 300.0;
        input.content_rect.width = 900.0;
        input.content_document_position.x = 300.0;

        let placement = place(&input);
        assert_eq!(placement.horizontal, HorizontalZone::RightFixed);
        // left_base - content_doc_x + scroll.x + viewport - toast - margin
        assert_abs_diff_eq!(placement.left, 300.0 - 300.0 + 0.0 + 800.0 - 200.0 - 20.0);
    }

    #[test]
    fn content_hanging_off_left_edge_right_aligns() {
        let mut input = base_input();
        // Scrolled horizontally: the content's right edge barely peeks in.
        input.scroll = Vector::new(400.0, 0.0);
        input.content_rect.x = -250.0;
        input.content_rect.width = 400.0;
        input.content_document_position.x = 150.0;

        let placement = place(&input);
        assert_eq!(placement.horizontal, HorizontalZone::Right);
        assert_abs_diff_eq!(placement.left, 150.0 + 400.0 - 200.0 - 20.0);
    }

    #[test]
    fn midpoint_off_left_edge_pins_left_to_viewport() {
        let mut input = base_input();
        // The content straddles the left edge far enough that a centered
        // stack would start off screen, but its right edge still has room.
        input.scroll = Vector::new(300.0, 0.0);
        input.content_rect.x = -280.0;
        input.content_rect.width = 600.0;
        input.content_document_position.x = 20.0;

        let placement = place(&input);
        assert_eq!(placement.horizontal, HorizontalZone::LeftFixed);
        // left_base - content_doc_x + scroll.x
        assert_abs_diff_eq!(placement.left, 20.0 - 20.0 + 300.0);
    }

    #[test]
    fn fixed_positioning_uses_viewport_relative_left_base() {
        let mut input = base_input();
        input.toolbar_rect = Some(Rectangle {
            x: 100.0,
            y: 30.0,
            width: 300.0,
            height: 40.0,
        });
        input.scroll = Vector::new(0.0, 10.0);
        input.content_rect.y = 40.0;
        input.body_document_position = Point::new(8.0, 8.0);

        let placement = place(&input);
        assert_eq!(placement.positioning, Positioning::Fixed);
        // Fixed: left_base is the content's viewport-relative left, the
        // body offset plays no part.
        assert_eq!(placement.horizontal, HorizontalZone::Center);
        assert_abs_diff_eq!(placement.left, 100.0 + 150.0 - 100.0);
    }

    #[test]
    fn absolute_positioning_subtracts_body_offset() {
        let mut input = base_input();
        input.body_document_position = Point::new(8.0, 0.0);

        let placement = place(&input);
        assert_eq!(placement.positioning, Positioning::Absolute);
        // left_base = content doc left - body doc left = 92.
        assert_abs_diff_eq!(placement.left, 92.0 + 150.0 - 100.0);
    }

    #[test]
    fn placement_is_deterministic() {
        let input = base_input();
        assert_eq!(place(&input), place(&input));
    }
}
