pub mod app;
pub mod cli;
pub mod domain;
pub mod engine;
pub mod ui;

use anyhow::Result;
use serde::Serialize;

use app::settings::Preferences;
use cli::Cli;
use domain::chat::{ConversationState, MessageState, SendButtonAction, ThemeVariant};
use domain::color::Rgb;
use engine::bubble::{BubblePalette, MessageIcon, TextAppearance, indicator_icons};
use engine::chrome::ChromePalette;
use engine::send_button::{SendButtonStyle, button_style, resolve_action};
use engine::tokens::ThemeTokens;

/// Everything the CLI resolves for one message-and-conversation situation.
#[derive(Debug, Serialize)]
pub struct Report {
    pub theme: ThemeVariant,
    pub primary: Rgb,
    pub primary_customised: bool,
    pub bubble: BubblePalette,
    pub body_appearance: TextAppearance,
    pub caption_appearance: TextAppearance,
    pub indicator_icons: Vec<MessageIcon>,
    pub chrome: ChromePalette,
    pub action: SendButtonAction,
    pub button: SendButtonStyle,
}

#[must_use]
pub fn resolve_report(cli: &Cli) -> Report {
    let variant = ThemeVariant::from(cli.theme);
    let tokens = ThemeTokens::for_variant(variant);
    let prefs = Preferences::from_cli(cli);

    let message = MessageState {
        is_received: !cli.sent,
        is_edited: cli.edited,
        is_verified: cli.verified,
        is_warning: cli.warning,
    };
    let conversation = ConversationState {
        is_group: cli.group,
        correction_text: cli.correcting.clone(),
        next_counterpart_present: cli.counterpart,
        upload_available: !cli.no_upload,
        last_message_asked_for_location: cli.location_question,
    };

    let bubble = BubblePalette::resolve(tokens, variant, &prefs, &message);
    let chrome = ChromePalette::resolve(prefs.primary(tokens), tokens);
    let action = resolve_action(&conversation, &cli.text, prefs.quick_action);
    let button = button_style(
        action,
        cli.presence.into(),
        tokens,
        prefs.primary_customised(tokens),
    );

    Report {
        theme: variant,
        primary: prefs.primary(tokens),
        primary_customised: prefs.primary_customised(tokens),
        body_appearance: bubble.body_appearance(),
        caption_appearance: bubble.caption_appearance(),
        indicator_icons: indicator_icons(&message),
        bubble,
        chrome,
        action,
        button,
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let report = resolve_report(&cli);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        ui::preview::print_report(&report);
    }
    Ok(())
}
