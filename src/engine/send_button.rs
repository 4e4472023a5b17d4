use serde::Serialize;

use crate::domain::chat::{ConversationState, PresenceStatus, QuickAction, SendButtonAction};
use crate::domain::color::Rgb;
use crate::engine::tokens::{CUSTOM_TINT_RAMP, ThemeTokens};

/// Resolves the active send-button action from conversation and input
/// state. First match wins; the quick-action preference only applies to an
/// empty input with nothing more urgent pending.
#[must_use]
pub fn resolve_action(
    conversation: &ConversationState,
    text: &str,
    quick_action: QuickAction,
) -> SendButtonAction {
    let empty = text.is_empty();

    if let Some(original) = &conversation.correction_text
        && (empty || text == original)
    {
        return SendButtonAction::Cancel;
    }
    if conversation.is_group && !conversation.upload_available {
        return if empty && conversation.next_counterpart_present {
            SendButtonAction::Cancel
        } else {
            SendButtonAction::Text
        };
    }
    if !empty {
        return SendButtonAction::Text;
    }
    if conversation.is_group && conversation.next_counterpart_present {
        return SendButtonAction::Cancel;
    }
    if conversation.last_message_asked_for_location && quick_action != QuickAction::Disabled {
        return SendButtonAction::SendLocation;
    }
    match quick_action {
        QuickAction::Disabled => SendButtonAction::Text,
        QuickAction::Recent(memo) => memo.unwrap_or(SendButtonAction::Text),
        QuickAction::Fixed(action) => action,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SendButtonIcon {
    Text,
    Videocam,
    Photo,
    Voice,
    Location,
    Cancel,
    Picture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SendButtonStyle {
    pub icon: SendButtonIcon,
    pub tint: Rgb,
}

impl SendButtonAction {
    #[must_use]
    pub fn icon(self) -> SendButtonIcon {
        match self {
            Self::Text => SendButtonIcon::Text,
            Self::RecordVideo => SendButtonIcon::Videocam,
            Self::TakePhoto => SendButtonIcon::Photo,
            Self::RecordVoice => SendButtonIcon::Voice,
            Self::SendLocation => SendButtonIcon::Location,
            Self::Cancel => SendButtonIcon::Cancel,
            Self::ChoosePicture => SendButtonIcon::Picture,
        }
    }
}

/// Icon plus tint for the resolved action. A customised primary bypasses the
/// per-action theme tints: not every user color doubles as a sensible
/// presence ramp, so all actions share one fixed ramp instead.
#[must_use]
pub fn button_style(
    action: SendButtonAction,
    presence: PresenceStatus,
    tokens: &ThemeTokens,
    primary_customised: bool,
) -> SendButtonStyle {
    let tier = presence.tier();
    let tint = if primary_customised {
        CUSTOM_TINT_RAMP[tier.index()]
    } else {
        tokens.send_tint(action, tier)
    };
    SendButtonStyle {
        icon: action.icon(),
        tint,
    }
}
