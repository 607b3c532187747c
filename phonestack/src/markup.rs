// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Class and attribute names shared with style rules and bootstrap code.

use alloc::format;
use alloc::string::String;

use crate::phone::PhoneId;

/// Class marking a component root.
pub const STACK_CLASS: &str = "phone-stack";
/// Class marking a stacked card inside a component root.
pub const CARD_CLASS: &str = "phone";
/// Class on every hit-target overlay.
pub const OVERLAY_CLASS: &str = "phone-overlay";
/// Container class present while debug visualization is on.
pub const DEBUG_CLASS: &str = "debug-overlays";
/// Attribute carrying a [`PhoneId`] token on cards and overlays.
pub const PHONE_ATTR: &str = "data-phone";

/// Container class present while `phone` is the active selection.
pub fn active_marker(phone: PhoneId) -> String {
    format!("phone-{phone}-active")
}

/// Container class present while the pointer is over `phone`'s overlay.
pub fn hover_marker(phone: PhoneId) -> String {
    format!("phone-{phone}-hover")
}

pub(crate) fn is_active_marker(class: &str) -> bool {
    PhoneId::ALL.iter().any(|p| active_marker(*p) == class)
}

pub(crate) fn is_hover_marker(class: &str) -> bool {
    PhoneId::ALL.iter().any(|p| hover_marker(*p) == class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_are_per_item() {
        assert_eq!(active_marker(PhoneId::Two), "phone-2-active");
        assert_eq!(hover_marker(PhoneId::Three), "phone-3-hover");
        assert!(is_active_marker("phone-1-active"));
        assert!(!is_active_marker("phone-1-hover"));
        assert!(is_hover_marker("phone-1-hover"));
        assert!(!is_hover_marker(STACK_CLASS));
    }
}
