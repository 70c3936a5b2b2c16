use url::form_urlencoded::Serializer;

use super::{AvatarTheme, DEFAULT_INITIALS, DEFAULT_THEME, SPORT_AVATAR_THEMES};

const GENERATOR_ENDPOINT: &str = "https://api.dicebear.com/8.x/initials/svg";
const SERVICE_HOST: &str = "api.dicebear.com";
const GENERATOR_PATH: &str = "/initials/";

/// Applied when a theme defines no background colors.
const FALLBACK_BACKGROUND: &str = "b6e3f4";

/// Builds the generated avatar URL for a theme and pair of initials.
///
/// Deterministic: the query parameter order is fixed, so equal inputs produce
/// byte-identical URLs. Reverse lookup depends on the serialized `seed` pair
/// appearing verbatim in the output.
pub fn avatar_url(theme: Option<&AvatarTheme>, initials: Option<&str>) -> String {
    let theme = theme.unwrap_or(DEFAULT_THEME);
    let chars: String = initials
        .filter(|initials| !initials.is_empty())
        .unwrap_or(DEFAULT_INITIALS)
        .chars()
        .take(2)
        .collect::<String>()
        .to_uppercase();

    let mut query = Serializer::new(String::new());
    query
        .append_pair("seed", theme.seed)
        .append_pair("chars", &chars)
        .append_pair("fontSize", "48")
        .append_pair("fontWeight", "700")
        .append_pair("radius", "50")
        .append_pair("size", "256");

    if theme.background_colors.is_empty() {
        query.append_pair("backgroundColor", FALLBACK_BACKGROUND);
    } else {
        for color in theme.background_colors {
            query.append_pair("backgroundColor", color);
        }
    }

    if let Some(font_color) = theme.font_color {
        query.append_pair("fontColor", font_color);
    }

    query
        .append_pair("backgroundType", "gradientLinear")
        .append_pair("backgroundRotation", "130");

    format!("{}?{}", GENERATOR_ENDPOINT, query.finish())
}

/// Loose containment check: does this URL point at the avatar generator?
pub fn is_generated_url(url: &str) -> bool {
    url.contains(SERVICE_HOST) && url.contains(GENERATOR_PATH)
}

/// Recovers the theme that produced a generated URL via its embedded seed.
///
/// Returns the first registry entry whose encoded `seed` pair appears in the
/// URL; seeds are unique, so first-match is unambiguous.
pub fn find_theme_by_url(url: &str) -> Option<&'static AvatarTheme> {
    if !is_generated_url(url) {
        return None;
    }

    SPORT_AVATAR_THEMES
        .iter()
        .find(|theme| url.contains(&seed_pair(theme)))
}

fn seed_pair(theme: &AvatarTheme) -> String {
    Serializer::new(String::new())
        .append_pair("seed", theme.seed)
        .finish()
}
