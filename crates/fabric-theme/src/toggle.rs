//! Theme toggle button state.

use crate::mode::ThemeMode;
use fabric_common::markup::{join_classes, Element};

/// Presentation of the theme toggle for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeToggleState {
    /// `aria-pressed`: true while dark
    pub pressed: bool,
    /// Visible label
    pub label: &'static str,
    /// Accessible name, describing what a press does
    pub accessible_name: &'static str,
}

impl ThemeToggleState {
    /// State for `mode`.
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                pressed: true,
                label: "Dark",
                accessible_name: "Switch to light theme",
            },
            ThemeMode::Light => Self {
                pressed: false,
                label: "Light",
                accessible_name: "Switch to dark theme",
            },
        }
    }

    /// Renders the toggle button.
    pub fn render(&self) -> String {
        let dark_modifier = if self.pressed { "is-dark" } else { "" };
        Element::new("button")
            .attr("type", "button")
            .attr("aria-pressed", if self.pressed { "true" } else { "false" })
            .attr("aria-label", self.accessible_name)
            .class("theme-toggle")
            .child(
                Element::new("span")
                    .class("theme-toggle__label")
                    .text(self.label),
            )
            .child(
                Element::new("span")
                    .class(&join_classes(["theme-toggle__switch", dark_modifier]))
                    .child(
                        Element::new("span")
                            .class(&join_classes(["theme-toggle__thumb", dark_modifier])),
                    ),
            )
            .render()
    }
}
