use super::{avatar_url, find_theme_by_url, initials, DEFAULT_INITIALS};

/// Substrings of background classes rendered with light fills; placeholder
/// text flips to dark on top of them.
const LIGHT_BG_CLASSES: &[&str] = &["warning", "light", "info", "secondary"];

const DEFAULT_BG_CLASS: &str = "bg-secondary";

/// Text tone for the placeholder glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTone {
    Light,
    Dark,
}

/// What an avatar slot should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarRender {
    Image { url: String },
    Placeholder {
        initials: String,
        bg_class: String,
        tone: TextTone,
    },
}

/// Per-instance avatar display state.
///
/// Shows the supplied source when there is one, a generated URL otherwise, and
/// an initials placeholder once the image fails to load. The failure latch is
/// local to the instance: a re-mounted avatar for the same source retries once
/// before falling back again.
#[derive(Debug, Clone)]
pub struct AvatarView {
    src: Option<String>,
    name: Option<String>,
    bg_class: Option<String>,
    load_failed: bool,
}

impl AvatarView {
    pub fn new(src: Option<&str>, name: Option<&str>, bg_class: Option<&str>) -> Self {
        Self {
            src: src.map(str::to_owned),
            name: name.map(str::to_owned),
            bg_class: bg_class.map(str::to_owned),
            load_failed: false,
        }
    }

    /// Records an image load failure. Permanent for this instance.
    pub fn mark_load_failed(&mut self) {
        self.load_failed = true;
    }

    pub fn resolve(&self) -> AvatarRender {
        if !self.load_failed {
            let url = match self.src.as_deref().filter(|src| !src.is_empty()) {
                Some(src) => src.to_owned(),
                None => self.fallback_url(),
            };
            return AvatarRender::Image { url };
        }

        let glyph = {
            let derived = initials(self.name.as_deref());
            if derived.is_empty() {
                DEFAULT_INITIALS.to_owned()
            } else {
                derived
            }
        };

        // Tone follows the class the caller supplied; the defaulted class is
        // only cosmetic and keeps light text.
        let tone = match self.bg_class.as_deref() {
            Some(class) if LIGHT_BG_CLASSES.iter().any(|light| class.contains(light)) => {
                TextTone::Dark
            }
            _ => TextTone::Light,
        };
        let bg_class = self
            .bg_class
            .clone()
            .unwrap_or_else(|| DEFAULT_BG_CLASS.to_owned());

        AvatarRender::Placeholder {
            initials: glyph,
            bg_class,
            tone,
        }
    }

    /// Generated stand-in for the supplied source: same theme when the source
    /// was one of ours, default theme otherwise.
    fn fallback_url(&self) -> String {
        let theme = self.src.as_deref().and_then(find_theme_by_url);
        avatar_url(theme, Some(&initials(self.name.as_deref())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::avatar::{DEFAULT_THEME, SPORT_AVATAR_THEMES};

    #[test]
    fn explicit_source_is_displayed_as_is() {
        let view = AvatarView::new(Some("https://cdn.example.com/me.png"), Some("Ada"), None);
        assert_eq!(
            view.resolve(),
            AvatarRender::Image {
                url: "https://cdn.example.com/me.png".to_owned()
            }
        );
    }

    #[test]
    fn missing_source_computes_a_generated_fallback() {
        let view = AvatarView::new(None, Some("Ada Lovelace"), None);
        match view.resolve() {
            AvatarRender::Image { url } => {
                assert_eq!(url, avatar_url(Some(DEFAULT_THEME), Some("AL")));
            }
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[test]
    fn generated_source_is_displayed_verbatim() {
        let tennis = &SPORT_AVATAR_THEMES[2];
        let src = avatar_url(Some(tennis), Some("RF"));
        let view = AvatarView::new(Some(&src), Some("Rio Ferdinand"), None);
        assert_eq!(view.resolve(), AvatarRender::Image { url: src });
    }

    #[test]
    fn load_failure_latches_to_the_placeholder() {
        let mut view = AvatarView::new(Some("https://cdn.example.com/gone.png"), Some("Ada"), None);
        view.mark_load_failed();
        match view.resolve() {
            AvatarRender::Placeholder { initials, bg_class, tone } => {
                assert_eq!(initials, "AD");
                assert_eq!(bg_class, "bg-secondary");
                assert_eq!(tone, TextTone::Light);
            }
            other => panic!("expected placeholder, got {other:?}"),
        }
        // stays latched
        assert!(matches!(view.resolve(), AvatarRender::Placeholder { .. }));
    }

    #[test]
    fn placeholder_tone_follows_the_background_class() {
        let mut dark_bg = AvatarView::new(None, None, Some("bg-dark"));
        dark_bg.mark_load_failed();
        assert!(matches!(
            dark_bg.resolve(),
            AvatarRender::Placeholder { tone: TextTone::Light, .. }
        ));

        let mut light_bg = AvatarView::new(None, None, Some("bg-warning"));
        light_bg.mark_load_failed();
        assert!(matches!(
            light_bg.resolve(),
            AvatarRender::Placeholder { tone: TextTone::Dark, .. }
        ));
    }

    #[test]
    fn placeholder_with_no_inputs_shows_the_default_glyph() {
        let mut view = AvatarView::new(None, None, None);
        view.mark_load_failed();
        match view.resolve() {
            AvatarRender::Placeholder { initials, .. } => assert_eq!(initials, "SB"),
            other => panic!("expected placeholder, got {other:?}"),
        }
    }
}
