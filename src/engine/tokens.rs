use crate::domain::chat::{PresenceTier, SendButtonAction, ThemeVariant};
use crate::domain::color::Rgb;

// Material palette entries the stock themes are built from.
const GREEN_600: Rgb = Rgb::new(0x43, 0xa0, 0x47);
const GREEN_700: Rgb = Rgb::new(0x38, 0x8e, 0x3c);
const GREEN_100: Rgb = Rgb::new(0xc8, 0xe6, 0xc9);
const LIGHT_GREEN_100: Rgb = Rgb::new(0xdc, 0xed, 0xc8);
const ORANGE_500: Rgb = Rgb::new(0xff, 0x98, 0x00);
const RED_500: Rgb = Rgb::new(0xf4, 0x43, 0x36);
const RED_200: Rgb = Rgb::new(0xef, 0x9a, 0x9a);
const RED_900: Rgb = Rgb::new(0xb7, 0x1c, 0x1c);
const GREY_200: Rgb = Rgb::new(0xee, 0xee, 0xee);
const GREY_800: Rgb = Rgb::new(0x42, 0x42, 0x42);
const GREY_900: Rgb = Rgb::new(0x21, 0x21, 0x21);
const NEAR_BLACK: Rgb = Rgb::new(0x12, 0x12, 0x12);
// white70 / black54 flattened onto their usual backdrops; the engine only
// carries 24-bit values outside the quote path.
const WHITE_MUTED: Rgb = Rgb::new(0xb3, 0xb3, 0xb3);
const BLACK_MUTED: Rgb = Rgb::new(0x75, 0x75, 0x75);

/// Shared tint ramp used for every send action once the user customises the
/// primary color away from the theme default. Per-action theme tints assume
/// the stock palette; an arbitrary user color does not.
pub const CUSTOM_TINT_RAMP: [Rgb; PresenceTier::COUNT] =
    [GREEN_600, ORANGE_500, RED_500, WHITE_MUTED];

/// The constant palette a theme variant contributes to the resolvers: the
/// values the original read out of platform theme attributes, collapsed into
/// one value object per variant.
#[derive(Debug, Clone)]
pub struct ThemeTokens {
    pub variant: ThemeVariant,
    /// Theme-default primary; replaced by a valid custom preference.
    pub primary: Rgb,
    pub received_bubble: Rgb,
    /// Reference color of the colored received bubble, used as the received
    /// highlight when bubbles are colored.
    pub received_bubble_colored: Rgb,
    pub warning_bubble: Rgb,
    pub body_text: Rgb,
    pub body_text_on_colored: Rgb,
    pub secondary_text: Rgb,
    pub secondary_text_on_colored: Rgb,
    pub icon_tint: Rgb,
    pub icon_tint_on_colored: Rgb,
    pub icon_alpha: f32,
    pub quote_on_colored: Rgb,
    /// Alpha applied to the body text color on the fallback quote path.
    pub quote_alpha: u8,
    pub sent_highlight: Rgb,
    /// Chrome foreground candidates; the contrast evaluator picks one.
    pub light_foreground: Rgb,
    pub dark_foreground: Rgb,
    send_tints: [[Rgb; PresenceTier::COUNT]; SendButtonAction::COUNT],
}

impl ThemeTokens {
    #[must_use]
    pub fn for_variant(variant: ThemeVariant) -> &'static Self {
        match variant {
            ThemeVariant::Light => &LIGHT,
            ThemeVariant::Dark => &DARK,
            ThemeVariant::Black => &BLACK,
        }
    }

    /// Per-action, per-tier send button tint. One table instead of a switch
    /// per action; forks that recolor a single action override a row.
    #[must_use]
    pub fn send_tint(&self, action: SendButtonAction, tier: PresenceTier) -> Rgb {
        self.send_tints[action.index()][tier.index()]
    }
}

const fn uniform_send_tints(
    offline: Rgb,
) -> [[Rgb; PresenceTier::COUNT]; SendButtonAction::COUNT] {
    [[GREEN_600, ORANGE_500, RED_500, offline]; SendButtonAction::COUNT]
}

static LIGHT: ThemeTokens = ThemeTokens {
    variant: ThemeVariant::Light,
    primary: GREEN_600,
    received_bubble: GREY_200,
    received_bubble_colored: GREEN_700,
    warning_bubble: RED_200,
    body_text: GREY_900,
    body_text_on_colored: Rgb::WHITE,
    secondary_text: BLACK_MUTED,
    secondary_text_on_colored: WHITE_MUTED,
    icon_tint: BLACK_MUTED,
    icon_tint_on_colored: WHITE_MUTED,
    icon_alpha: 0.54,
    quote_on_colored: GREEN_100,
    quote_alpha: 0xb2,
    sent_highlight: LIGHT_GREEN_100,
    light_foreground: Rgb::WHITE,
    dark_foreground: GREY_900,
    send_tints: uniform_send_tints(BLACK_MUTED),
};

static DARK: ThemeTokens = ThemeTokens {
    variant: ThemeVariant::Dark,
    primary: GREEN_600,
    received_bubble: GREY_800,
    received_bubble_colored: GREEN_700,
    warning_bubble: RED_900,
    body_text: Rgb::WHITE,
    body_text_on_colored: Rgb::WHITE,
    secondary_text: WHITE_MUTED,
    secondary_text_on_colored: WHITE_MUTED,
    icon_tint: WHITE_MUTED,
    icon_tint_on_colored: WHITE_MUTED,
    icon_alpha: 0.70,
    quote_on_colored: GREEN_100,
    quote_alpha: 0xb2,
    sent_highlight: GREEN_700,
    light_foreground: Rgb::WHITE,
    dark_foreground: GREY_900,
    send_tints: uniform_send_tints(WHITE_MUTED),
};

static BLACK: ThemeTokens = ThemeTokens {
    variant: ThemeVariant::Black,
    primary: GREEN_600,
    received_bubble: NEAR_BLACK,
    received_bubble_colored: GREEN_700,
    warning_bubble: RED_900,
    body_text: Rgb::WHITE,
    body_text_on_colored: Rgb::WHITE,
    secondary_text: WHITE_MUTED,
    secondary_text_on_colored: WHITE_MUTED,
    icon_tint: WHITE_MUTED,
    icon_tint_on_colored: WHITE_MUTED,
    icon_alpha: 0.70,
    quote_on_colored: GREEN_100,
    quote_alpha: 0xb2,
    sent_highlight: GREEN_700,
    light_foreground: Rgb::WHITE,
    dark_foreground: GREY_900,
    send_tints: uniform_send_tints(WHITE_MUTED),
};
