// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`notifications`] - The toast notification subsystem (collection,
//!   layout, lifecycle, rendering)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod notifications;
