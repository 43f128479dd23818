// SPDX-License-Identifier: MPL-2.0
//! UI components and widgets.
//!
//! Each submodule is an independent component following the same pattern:
//! a `State` (when the component is stateful), a `Message` enum, an
//! `update` function returning an `Event` for the parent, and a `view`
//! function. Styling goes through [`design_tokens`] and [`styles`] so the
//! components themselves stay free of magic numbers.

pub mod charts;
pub mod components;
pub mod design_tokens;
pub mod header;
pub mod icons;
pub mod notifications;
pub mod pages;
pub mod sidebar;
pub mod styles;
pub mod theming;
pub mod wizard;
