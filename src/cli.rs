use clap::{Parser, ValueEnum};

use crate::domain::chat::{PresenceStatus, ThemeVariant};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ThemeArg {
    Light,
    Dark,
    Black,
}

impl From<ThemeArg> for ThemeVariant {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
            ThemeArg::Black => Self::Black,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PresenceArg {
    Online,
    Chat,
    Away,
    Xa,
    Dnd,
    Offline,
}

impl From<PresenceArg> for PresenceStatus {
    fn from(arg: PresenceArg) -> Self {
        match arg {
            PresenceArg::Online => Self::Online,
            PresenceArg::Chat => Self::Chat,
            PresenceArg::Away => Self::Away,
            PresenceArg::Xa => Self::Xa,
            PresenceArg::Dnd => Self::Dnd,
            PresenceArg::Offline => Self::Offline,
        }
    }
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "bubbletint",
    version,
    about = "Resolve chat bubble, chrome, and send-button colors for a primary color"
)]
pub struct Cli {
    /// Custom primary color as hex (e.g. "#009688"); invalid values fall
    /// back to the theme default
    pub primary: Option<String>,

    /// Theme variant
    #[arg(long, value_enum, default_value_t = ThemeArg::Light)]
    pub theme: ThemeArg,

    /// Color received bubbles with the darkened primary
    #[arg(long)]
    pub colored_bubbles: bool,

    /// Resolve for a sent message instead of a received one
    #[arg(long)]
    pub sent: bool,

    /// Mark the message as edited
    #[arg(long)]
    pub edited: bool,

    /// Mark the message as verified
    #[arg(long)]
    pub verified: bool,

    /// Resolve the warning bubble
    #[arg(long)]
    pub warning: bool,

    /// Current input field content
    #[arg(long, default_value = "")]
    pub text: String,

    /// The conversation is a group chat
    #[arg(long)]
    pub group: bool,

    /// File upload is unavailable on this account
    #[arg(long)]
    pub no_upload: bool,

    /// A correction is in progress; the value is the original message body
    #[arg(long, value_name = "ORIGINAL")]
    pub correcting: Option<String>,

    /// A next counterpart is queued for a private group message
    #[arg(long)]
    pub counterpart: bool,

    /// The last received message asked a location question
    #[arg(long)]
    pub location_question: bool,

    /// Counterpart presence driving the button tint
    #[arg(long, value_enum, default_value_t = PresenceArg::Online)]
    pub presence: PresenceArg,

    /// Quick action for an empty input: none, recent, or an action name
    #[arg(long, default_value = "none")]
    pub quick_action: String,

    /// Most recently used action, consulted when --quick-action is "recent"
    #[arg(long)]
    pub recent_action: Option<String>,

    /// Print the resolved palette as JSON instead of swatches
    #[arg(long)]
    pub json: bool,
}
