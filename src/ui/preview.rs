use crossterm::style::{Color, Stylize};

use crate::Report;
use crate::domain::color::{Rgb, Rgba};

/// Prints the resolved palette as labelled swatch rows. One-shot output; no
/// terminal state to set up or restore.
pub fn print_report(report: &Report) {
    println!("theme: {:?}", report.theme);
    println!(
        "primary: {} {}{}",
        swatch(report.primary),
        report.primary,
        if report.primary_customised {
            " (customised)"
        } else {
            ""
        }
    );

    println!("\nbubble");
    row("bubble", report.bubble.bubble_color);
    row("body text", report.bubble.body_text_color);
    row("secondary text", report.bubble.secondary_text_color);
    row("status text", report.bubble.status_text_color);
    row("icon tint", report.bubble.icon_tint);
    row("highlight", report.bubble.highlight_color);
    row("sent highlight", report.bubble.sent_highlight_color);
    row_alpha("quote text", report.bubble.quote_text_color);
    println!("  body appearance      {:?}", report.body_appearance);
    println!("  caption appearance   {:?}", report.caption_appearance);
    println!("  indicators           {:?}", report.indicator_icons);

    println!("\nchrome");
    row("action bar", report.chrome.action_bar);
    row("status bar", report.chrome.status_bar);
    row("accent", report.chrome.accent);
    row("accent pressed", report.chrome.accent_pressed);
    row("scrollbar", report.chrome.scrollbar);
    row("swipe background", report.chrome.swipe_background);
    row("audio player rule", report.chrome.audio_player_rule);
    row("foreground", report.chrome.foreground);

    println!("\nsend button");
    println!("  action               {:?}", report.action);
    println!("  icon                 {:?}", report.button.icon);
    row("tint", report.button.tint);
}

fn row(label: &str, rgb: Rgb) {
    println!("  {} {}  {label}", swatch(rgb), rgb);
}

fn row_alpha(label: &str, rgba: Rgba) {
    println!("  {} {}  {label}", swatch(rgba.color), rgba);
}

fn swatch(rgb: Rgb) -> String {
    "  ".on(term_color(rgb)).to_string()
}

fn term_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
