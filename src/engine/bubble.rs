use serde::Serialize;

use crate::app::settings::Preferences;
use crate::domain::chat::{MessageState, ThemeVariant};
use crate::domain::color::{Rgb, Rgba, darken, desaturate};
use crate::engine::contrast::is_too_bright;
use crate::engine::primary_dark;
use crate::engine::tokens::ThemeTokens;

/// Text style selectors the rendering layer maps onto its own appearance
/// resources. `OnColored` variants assume a colored (dark) bubble behind the
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAppearance {
    Body1,
    Body1OnColored,
    Body1Secondary,
    Body1SecondaryOnColored,
    Emoji,
    EmojiOnColored,
    Caption,
    CaptionOnColored,
    CaptionWarning,
    CaptionWarningOnColored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanStyle {
    Bold,
    BoldItalic,
}

/// Status indicator icons rendered next to a message timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageIcon {
    Done,
    Edited,
    Verified,
    Unverified,
}

/// Every derived color and style decision for one message bubble. Resolved
/// once per message per render pass; all fields are plain values.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BubblePalette {
    pub bubble_color: Rgb,
    pub body_text_color: Rgb,
    pub secondary_text_color: Rgb,
    pub status_text_color: Rgb,
    pub icon_tint: Rgb,
    pub icon_alpha: f32,
    /// Highlight behind matched search terms in received messages.
    pub highlight_color: Rgb,
    pub sent_highlight_color: Rgb,
    pub quote_text_color: Rgba,
    /// Whether this bubble was eligible for coloring (received, and the
    /// preference is on).
    pub colored: bool,
    /// Result of the luminance test on the resolved bubble color. Always
    /// false on the black theme.
    pub too_bright: bool,
}

impl BubblePalette {
    #[must_use]
    pub fn resolve(
        tokens: &ThemeTokens,
        variant: ThemeVariant,
        prefs: &Preferences,
        message: &MessageState,
    ) -> Self {
        let colored = message.is_received && prefs.colored_bubbles;
        let primary = prefs.primary(tokens);

        let bubble_color = if message.is_warning {
            tokens.warning_bubble
        } else if colored {
            primary_dark(primary)
        } else {
            tokens.received_bubble
        };

        // Black-theme bubbles are dark by definition; skip the luminance test.
        let too_bright = variant != ThemeVariant::Black && is_too_bright(bubble_color);
        let on_colored = colored && !too_bright;
        let pick = |standard: Rgb, when_colored: Rgb| {
            if on_colored { when_colored } else { standard }
        };

        let quote_text_color = if variant == ThemeVariant::Light && !colored {
            // Approximation of the fixed brand quote green, derived from the
            // primary instead of a hardcoded resource.
            Rgba::opaque(desaturate(darken(primary, 6), 15))
        } else if on_colored {
            Rgba::opaque(tokens.quote_on_colored)
        } else {
            tokens.body_text.with_alpha(tokens.quote_alpha)
        };

        Self {
            bubble_color,
            body_text_color: pick(tokens.body_text, tokens.body_text_on_colored),
            secondary_text_color: pick(tokens.secondary_text, tokens.secondary_text_on_colored),
            status_text_color: pick(tokens.secondary_text, tokens.secondary_text_on_colored),
            icon_tint: pick(tokens.icon_tint, tokens.icon_tint_on_colored),
            icon_alpha: tokens.icon_alpha,
            highlight_color: pick(tokens.received_bubble, tokens.received_bubble_colored),
            sent_highlight_color: tokens.sent_highlight,
            quote_text_color,
            colored,
            too_bright,
        }
    }

    fn on_colored(&self) -> bool {
        self.colored && !self.too_bright
    }

    #[must_use]
    pub fn body_appearance(&self) -> TextAppearance {
        if self.on_colored() {
            TextAppearance::Body1OnColored
        } else {
            TextAppearance::Body1
        }
    }

    #[must_use]
    pub fn secondary_appearance(&self) -> TextAppearance {
        if self.on_colored() {
            TextAppearance::Body1SecondaryOnColored
        } else {
            TextAppearance::Body1Secondary
        }
    }

    #[must_use]
    pub fn emoji_appearance(&self) -> TextAppearance {
        if self.on_colored() {
            TextAppearance::EmojiOnColored
        } else {
            TextAppearance::Emoji
        }
    }

    #[must_use]
    pub fn caption_appearance(&self) -> TextAppearance {
        if self.on_colored() {
            TextAppearance::CaptionOnColored
        } else {
            TextAppearance::Caption
        }
    }

    #[must_use]
    pub fn warning_caption_appearance(&self) -> TextAppearance {
        if self.on_colored() {
            TextAppearance::CaptionWarningOnColored
        } else {
            TextAppearance::CaptionWarning
        }
    }

    /// Style for first-person ("/me") message bodies.
    #[must_use]
    pub fn me_span() -> SpanStyle {
        SpanStyle::BoldItalic
    }

    /// Style for highlighted (mentioned) nicknames.
    #[must_use]
    pub fn highlight_span() -> SpanStyle {
        SpanStyle::Bold
    }
}

/// Which indicator icons a message shows, in display order.
#[must_use]
pub fn indicator_icons(message: &MessageState) -> Vec<MessageIcon> {
    let mut icons = Vec::new();
    if !message.is_received {
        icons.push(MessageIcon::Done);
    }
    if message.is_edited {
        icons.push(MessageIcon::Edited);
    }
    icons.push(if message.is_verified {
        MessageIcon::Verified
    } else {
        MessageIcon::Unverified
    });
    icons
}
