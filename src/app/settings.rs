use std::sync::LazyLock;

use regex::Regex;

use crate::cli::Cli;
use crate::domain::chat::QuickAction;
use crate::domain::color::Rgb;
use crate::engine::tokens::ThemeTokens;

// Same shape the preference store historically accepted: #rgb or #rrggbb.
static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^#(?:[0-9a-fA-F]{3}){1,2}$").expect("static pattern"));

/// Immutable snapshot of the user preferences the resolvers read. Built once
/// per render pass; the engine never reaches into shared settings storage.
#[derive(Debug, Clone)]
pub struct Preferences {
    pub colored_bubbles: bool,
    /// Validated custom primary; `None` means the theme default applies.
    pub custom_primary: Option<Rgb>,
    pub quick_action: QuickAction,
}

impl Preferences {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            colored_bubbles: cli.colored_bubbles,
            custom_primary: cli.primary.as_deref().and_then(parse_custom_primary),
            quick_action: QuickAction::from_setting(
                &cli.quick_action,
                cli.recent_action.as_deref(),
            ),
        }
    }

    /// The effective primary color: the custom preference when present,
    /// otherwise the theme default.
    #[must_use]
    pub fn primary(&self, tokens: &ThemeTokens) -> Rgb {
        self.custom_primary.unwrap_or(tokens.primary)
    }

    /// Whether the user moved the primary color away from the theme default.
    #[must_use]
    pub fn primary_customised(&self, tokens: &ThemeTokens) -> bool {
        self.custom_primary
            .is_some_and(|color| color != tokens.primary)
    }
}

/// Parses a stored custom-primary value. Anything that is not a hex color
/// falls back to the theme default (`None`) instead of erroring.
#[must_use]
pub fn parse_custom_primary(raw: &str) -> Option<Rgb> {
    if !HEX_COLOR.is_match(raw) {
        return None;
    }
    Rgb::from_hex(raw).ok()
}
