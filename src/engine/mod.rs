pub mod bubble;
pub mod chrome;
pub mod contrast;
pub mod send_button;
pub mod tokens;

use crate::domain::color::{Rgb, safe_darken};

/// How much darker than the primary its "dark" companion renders. Material
/// palettes place the dark primary roughly twelve lightness points below the
/// primary.
pub const PRIMARY_DARK_AMOUNT: u8 = 12;

/// The dark companion of a primary color, shared by the bubble and chrome
/// resolvers.
#[must_use]
pub fn primary_dark(primary: Rgb) -> Rgb {
    safe_darken(primary, PRIMARY_DARK_AMOUNT)
}
