//! Deterministic sport-themed avatar generation.
//!
//! A fixed registry of themes maps a pair of initials onto a DiceBear
//! initials-SVG URL. Generated URLs embed the theme seed, so a stored URL can
//! be mapped back to the theme that produced it.

pub mod initials;
pub mod url;
pub mod view;

pub use initials::{initials, DEFAULT_INITIALS};
pub use url::{avatar_url, find_theme_by_url, is_generated_url};
pub use view::{AvatarRender, AvatarView, TextTone};

/// Visual parameters for one generated avatar style.
///
/// The seed doubles as the round-trip identifier: it is embedded in every
/// generated URL and must be unique across [`SPORT_AVATAR_THEMES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvatarTheme {
    pub id: &'static str,
    pub label: &'static str,
    pub seed: &'static str,
    pub background_colors: &'static [&'static str],
    pub font_color: Option<&'static str>,
}

/// Process-wide immutable theme table. Order matters: the first entry is the
/// default, and reverse lookup returns the first seed match.
pub const SPORT_AVATAR_THEMES: &[AvatarTheme] = &[
    AvatarTheme {
        id: "soccer",
        label: "Soccer Night",
        seed: "Soccer",
        background_colors: &["0b3954", "087e8b"],
        font_color: Some("f4d35e"),
    },
    AvatarTheme {
        id: "basketball",
        label: "Basketball Court",
        seed: "Basketball",
        background_colors: &["f77f00", "d62828"],
        font_color: Some("ffffff"),
    },
    AvatarTheme {
        id: "tennis",
        label: "Tennis Court",
        seed: "Tennis",
        background_colors: &["2a9134", "9fd356"],
        font_color: Some("ffffff"),
    },
    AvatarTheme {
        id: "baseball",
        label: "Baseball Classic",
        seed: "Baseball",
        background_colors: &["14213d", "fca311"],
        font_color: Some("ffffff"),
    },
    AvatarTheme {
        id: "swimming",
        label: "Swimming Pool",
        seed: "Swimming",
        background_colors: &["219ebc", "023047"],
        font_color: Some("fefae0"),
    },
    AvatarTheme {
        id: "cycling",
        label: "Cycling Sprint",
        seed: "Cycling",
        background_colors: &["ffbe0b", "fb5607"],
        font_color: Some("1b1b1e"),
    },
    AvatarTheme {
        id: "volleyball",
        label: "Beach Volleyball",
        seed: "Volleyball",
        background_colors: &["ff9f1c", "2ec4b6"],
        font_color: Some("011627"),
    },
    AvatarTheme {
        id: "running",
        label: "Running Track",
        seed: "Running",
        background_colors: &["ef233c", "d90429"],
        font_color: Some("edf2f4"),
    },
];

pub const DEFAULT_THEME: &AvatarTheme = &SPORT_AVATAR_THEMES[0];

pub fn theme_by_id(id: &str) -> Option<&'static AvatarTheme> {
    SPORT_AVATAR_THEMES.iter().find(|theme| theme.id == id)
}
