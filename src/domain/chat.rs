use serde::{Deserialize, Serialize};

/// The active theme family. Derived outside the engine (user setting or
/// system night mode); read-only input here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    Light,
    Dark,
    Black,
}

/// Per-message delivery/ownership flags, supplied by the caller per render
/// pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageState {
    pub is_received: bool,
    pub is_edited: bool,
    pub is_verified: bool,
    pub is_warning: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    Online,
    Chat,
    Away,
    Xa,
    Dnd,
    Offline,
}

/// The four tint tiers presence collapses into: Online and Chat share a
/// tier, as do Xa and Dnd.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceTier {
    Online,
    Away,
    Dnd,
    Offline,
}

impl PresenceStatus {
    #[must_use]
    pub fn tier(self) -> PresenceTier {
        match self {
            Self::Online | Self::Chat => PresenceTier::Online,
            Self::Away => PresenceTier::Away,
            Self::Xa | Self::Dnd => PresenceTier::Dnd,
            Self::Offline => PresenceTier::Offline,
        }
    }
}

impl PresenceTier {
    pub(crate) const COUNT: usize = 4;

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Online => 0,
            Self::Away => 1,
            Self::Dnd => 2,
            Self::Offline => 3,
        }
    }
}

/// Snapshot of the conversation the send button belongs to. A correction is
/// pending iff `correction_text` is set.
#[derive(Debug, Clone)]
pub struct ConversationState {
    pub is_group: bool,
    pub correction_text: Option<String>,
    pub next_counterpart_present: bool,
    pub upload_available: bool,
    pub last_message_asked_for_location: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SendButtonAction {
    Text,
    RecordVideo,
    TakePhoto,
    RecordVoice,
    SendLocation,
    Cancel,
    ChoosePicture,
}

impl SendButtonAction {
    pub(crate) const COUNT: usize = 7;

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Parses a stored preference value; anything unrecognised falls back to
    /// `Text`.
    #[must_use]
    pub fn from_setting(value: &str) -> Self {
        match value {
            "record_video" | "video" => Self::RecordVideo,
            "take_photo" | "photo" => Self::TakePhoto,
            "record_voice" | "voice" => Self::RecordVoice,
            "send_location" | "location" => Self::SendLocation,
            "cancel" => Self::Cancel,
            "choose_picture" | "picture" => Self::ChoosePicture,
            _ => Self::Text,
        }
    }
}

/// The configured default behavior of the send button when the input field
/// is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    /// The "none" preference: an empty input always resolves to `Text`.
    Disabled,
    /// Repeat the most recently used action; `None` when nothing has been
    /// memoised yet.
    Recent(Option<SendButtonAction>),
    Fixed(SendButtonAction),
}

impl QuickAction {
    /// Builds the preference from its stored string form plus the
    /// recently-used memo. Unparseable values degrade to `Text`, never fail.
    #[must_use]
    pub fn from_setting(setting: &str, recent: Option<&str>) -> Self {
        match setting {
            "none" => Self::Disabled,
            "recent" => Self::Recent(recent.map(SendButtonAction::from_setting)),
            other => Self::Fixed(SendButtonAction::from_setting(other)),
        }
    }
}
