// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! Localized strings — the close-button label, the screen-reader closure
//! announcement, and the kind labels — resolve through the Fluent
//! localization system. Locale detection order: caller override, config
//! file, system locale, `en-US`.
//!
//! Only the mechanism ships here; the embedded `en-US` resource is the
//! baseline and hosts can add `.ftl` resources for other locales.

pub mod fluent;
