use clap::Parser;

use bubbletint::cli::Cli;
use bubbletint::domain::chat::SendButtonAction;
use bubbletint::domain::color::{Rgb, safe_darken};
use bubbletint::engine::bubble::{MessageIcon, TextAppearance};
use bubbletint::engine::send_button::SendButtonIcon;
use bubbletint::{Report, resolve_report};

fn report(args: &[&str]) -> Report {
    let mut full = vec!["bubbletint"];
    full.extend_from_slice(args);
    resolve_report(&Cli::parse_from(full))
}

const TEAL: Rgb = Rgb::new(0x00, 0x96, 0x88);

#[test]
fn teal_received_message_gets_the_darkened_colored_bubble() {
    let report = report(&["#009688", "--colored-bubbles"]);
    assert!(report.primary_customised);
    assert_eq!(report.bubble.bubble_color, safe_darken(TEAL, 12));
    assert!(report.bubble.colored);
    assert!(!report.bubble.too_bright);
    assert_eq!(report.body_appearance, TextAppearance::Body1OnColored);
    // Chrome derives from the same dark companion.
    assert_eq!(report.chrome.status_bar, report.bubble.bubble_color);
    assert_eq!(report.chrome.action_bar, TEAL);
}

#[test]
fn pale_primary_falls_back_to_the_standard_palette() {
    let report = report(&["#fafad2", "--colored-bubbles"]);
    assert!(report.bubble.colored);
    assert!(report.bubble.too_bright);
    assert_eq!(report.body_appearance, TextAppearance::Body1);
    assert_eq!(report.bubble.body_text_color, Rgb::new(0x21, 0x21, 0x21));
}

#[test]
fn black_theme_never_runs_the_luminance_test() {
    let report = report(&["#fafad2", "--colored-bubbles", "--theme", "black"]);
    assert!(report.bubble.colored);
    assert!(!report.bubble.too_bright);
    assert_eq!(report.body_appearance, TextAppearance::Body1OnColored);
}

#[test]
fn sent_messages_ignore_the_coloring_preference() {
    let report = report(&["#009688", "--colored-bubbles", "--sent"]);
    assert!(!report.bubble.colored);
    assert_eq!(report.body_appearance, TextAppearance::Body1);
    assert_eq!(report.indicator_icons[0], MessageIcon::Done);
}

#[test]
fn location_question_overrides_the_quick_action() {
    let report = report(&["--location-question", "--quick-action", "photo"]);
    assert_eq!(report.action, SendButtonAction::SendLocation);
    assert_eq!(report.button.icon, SendButtonIcon::Location);
}

#[test]
fn location_question_is_ignored_when_quick_actions_are_off() {
    let report = report(&["--location-question"]);
    assert_eq!(report.action, SendButtonAction::Text);
}

#[test]
fn private_group_message_resolves_to_cancel() {
    let report = report(&["--group", "--no-upload", "--counterpart"]);
    assert_eq!(report.action, SendButtonAction::Cancel);
    assert_eq!(report.button.icon, SendButtonIcon::Cancel);
}

#[test]
fn typed_text_always_resolves_to_send() {
    let report = report(&[
        "--text",
        "hello",
        "--group",
        "--counterpart",
        "--location-question",
        "--quick-action",
        "photo",
    ]);
    assert_eq!(report.action, SendButtonAction::Text);
    assert_eq!(report.button.icon, SendButtonIcon::Text);
}

#[test]
fn custom_primary_switches_to_the_shared_tint_ramp() {
    let online = report(&["#3f51b5", "--presence", "online"]);
    let dnd = report(&["#3f51b5", "--presence", "dnd"]);
    let offline = report(&["#3f51b5", "--presence", "offline"]);
    assert!(online.primary_customised);
    assert_eq!(online.button.tint, Rgb::new(0x43, 0xa0, 0x47));
    assert_eq!(dnd.button.tint, Rgb::new(0xf4, 0x43, 0x36));
    assert_eq!(offline.button.tint, Rgb::new(0xb3, 0xb3, 0xb3));
}

#[test]
fn default_invocation_uses_the_stock_green() {
    let report = report(&[]);
    assert!(!report.primary_customised);
    assert_eq!(report.primary, Rgb::new(0x43, 0xa0, 0x47));
    assert_eq!(report.action, SendButtonAction::Text);
}

#[test]
fn invalid_primary_falls_back_to_the_theme_default() {
    let report = report(&["teal"]);
    assert!(!report.primary_customised);
    assert_eq!(report.primary, Rgb::new(0x43, 0xa0, 0x47));
}

#[test]
fn json_report_serializes_colors_as_hex_strings() {
    let report = report(&["#009688", "--colored-bubbles"]);
    let value = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(value["theme"], "light");
    assert_eq!(value["primary"], "#009688");
    assert_eq!(value["bubble"]["bubble_color"], safe_darken(TEAL, 12).to_string());
    assert_eq!(value["action"], "text");
}
