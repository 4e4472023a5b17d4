use serde::Serialize;

use crate::domain::color::{Rgb, desaturate, safe_darken, safe_desaturate};
use crate::engine::contrast::is_too_bright;
use crate::engine::primary_dark;
use crate::engine::tokens::ThemeTokens;

/// Darken applied on top of the dark primary for the swipe background; lands
/// one palette step below the dark primary before desaturation.
pub const SWIPE_DARKEN_AMOUNT: u8 = 6;
pub const SWIPE_DESATURATE_AMOUNT: u8 = 15;
pub const AUDIO_RULE_DESATURATE_AMOUNT: u8 = 15;

/// Colors for everything around the message list, derived from the primary
/// color alone.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChromePalette {
    pub action_bar: Rgb,
    pub status_bar: Rgb,
    /// Floating action button, unread-count badge, tab background.
    pub accent: Rgb,
    /// Pressed/opened state of the accent surfaces.
    pub accent_pressed: Rgb,
    pub scrollbar: Rgb,
    pub swipe_background: Rgb,
    pub audio_player_rule: Rgb,
    /// Action-bar text and icons, picked for contrast against `action_bar`.
    pub foreground: Rgb,
}

impl ChromePalette {
    #[must_use]
    pub fn resolve(primary: Rgb, tokens: &ThemeTokens) -> Self {
        let dark = primary_dark(primary);
        let swipe_background =
            safe_desaturate(safe_darken(dark, SWIPE_DARKEN_AMOUNT), SWIPE_DESATURATE_AMOUNT);
        let foreground = if is_too_bright(primary) {
            tokens.dark_foreground
        } else {
            tokens.light_foreground
        };
        Self {
            action_bar: primary,
            status_bar: dark,
            accent: primary,
            accent_pressed: dark,
            scrollbar: dark,
            swipe_background,
            audio_player_rule: desaturate(primary, AUDIO_RULE_DESATURATE_AMOUNT),
            foreground,
        }
    }
}
