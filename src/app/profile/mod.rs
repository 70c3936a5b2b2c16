//! Profile-page state synchronization.
//!
//! Every transition is synchronous and derivable from the current name and
//! selected theme, so replaying an event sequence always converges to the
//! same form state.

use secrecy::SecretString;

use crate::app::{
    api::{Event, Group, ProfileApi, UpdateProfileInput, User},
    avatar::{
        avatar_url, find_theme_by_url, initials, is_generated_url, theme_by_id, AvatarTheme,
        DEFAULT_THEME,
    },
};

pub mod cache;

pub use cache::UserCache;

pub const MSG_PROFILE_SAVED: &str = "Profile updated successfully ✅";
pub const MSG_LOAD_FAILED: &str = "Error loading profile";
pub const MSG_SAVE_FAILED: &str = "Error updating profile";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub user_name: String,
    pub email: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Events,
    Teams,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok(&'static str),
    Error(&'static str),
}

/// State of one profile-page instance.
#[derive(Debug, Clone)]
pub struct ProfilePage {
    pub form: ProfileForm,
    pub selected_theme_id: String,
    pub events: Vec<Event>,
    pub groups: Vec<Group>,
    pub tab: ProfileTab,
    pub loading: bool,
    pub status: Option<Status>,
    pub cache: UserCache,
}

impl Default for ProfilePage {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfilePage {
    pub fn new() -> Self {
        Self::with_cache(UserCache::new())
    }

    /// Seeds the form from the cached last known user record, when one exists.
    pub fn with_cache(cache: UserCache) -> Self {
        let form = match cache.user() {
            Some(user) => ProfileForm {
                user_name: user.user_name.unwrap_or_default(),
                email: user.email.unwrap_or_default(),
                avatar: user.avatar.unwrap_or_default(),
            },
            None => ProfileForm::default(),
        };

        Self {
            form,
            selected_theme_id: DEFAULT_THEME.id.to_owned(),
            events: Vec::new(),
            groups: Vec::new(),
            tab: ProfileTab::default(),
            loading: true,
            status: None,
            cache,
        }
    }

    pub fn selected_theme(&self) -> &'static AvatarTheme {
        theme_by_id(&self.selected_theme_id).unwrap_or(DEFAULT_THEME)
    }

    /// Initial-load sync: infer the theme from the stored avatar URL and
    /// synthesize a generated URL when the stored one is not ours.
    pub fn apply_loaded_profile(&mut self, user: User, groups: Vec<Group>, events: Vec<Event>) {
        self.cache.set_user(&user);

        let user_name = user.user_name.unwrap_or_default();
        let glyph = initials(Some(&user_name));

        let stored = user.avatar.unwrap_or_default();
        let theme = find_theme_by_url(&stored).unwrap_or(DEFAULT_THEME);
        let avatar = if is_generated_url(&stored) {
            stored
        } else {
            avatar_url(Some(theme), Some(&glyph))
        };

        self.form = ProfileForm {
            user_name,
            email: user.email.unwrap_or_default(),
            avatar,
        };
        self.selected_theme_id = theme.id.to_owned();
        self.events = events;
        self.groups = groups;
        self.loading = false;
    }

    pub fn fail_loading(&mut self) {
        self.status = Some(Status::Error(MSG_LOAD_FAILED));
        self.loading = false;
    }

    /// Name edit: a generated avatar follows the new initials, an externally
    /// supplied one is left untouched.
    pub fn edit_name(&mut self, value: &str) {
        let regenerate = is_generated_url(&self.form.avatar);
        self.form.user_name = value.to_owned();
        if regenerate {
            self.form.avatar =
                avatar_url(Some(self.selected_theme()), Some(&initials(Some(value))));
        }
    }

    pub fn select_theme(&mut self, theme: &'static AvatarTheme) {
        self.selected_theme_id = theme.id.to_owned();
        self.form.avatar =
            avatar_url(Some(theme), Some(&initials(Some(&self.form.user_name))));
    }

    pub fn set_tab(&mut self, tab: ProfileTab) {
        self.tab = tab;
    }

    pub fn save_payload(&self) -> UpdateProfileInput {
        UpdateProfileInput {
            user_name: self.form.user_name.clone(),
            avatar: self.form.avatar.clone(),
        }
    }

    /// Post-save sync: like the initial load, except a stored generated URL is
    /// kept verbatim rather than rebuilt.
    pub fn apply_saved_user(&mut self, user: User) {
        self.cache.set_user(&user);

        let user_name = user.user_name.unwrap_or_default();
        let glyph = initials(Some(&user_name));

        let stored = user.avatar.unwrap_or_default();
        let theme = find_theme_by_url(&stored).unwrap_or(DEFAULT_THEME);
        let avatar = if is_generated_url(&stored) {
            stored
        } else {
            avatar_url(Some(theme), Some(&glyph))
        };

        self.form = ProfileForm {
            user_name,
            email: user.email.unwrap_or_default(),
            avatar,
        };
        self.selected_theme_id = theme.id.to_owned();
        self.status = Some(Status::Ok(MSG_PROFILE_SAVED));
    }

    /// Save failure: the form keeps its edited values so the user may retry.
    pub fn fail_saving(&mut self) {
        self.status = Some(Status::Error(MSG_SAVE_FAILED));
    }

    /// Fetches the profile and syncs the page. One attempt; a late response
    /// overwrites concurrent manual edits (last-write-wins).
    pub async fn load(&mut self, api: &ProfileApi, token: &SecretString) {
        self.loading = true;

        match api.get_profile(token).await {
            Ok(res) if res.success => {
                self.apply_loaded_profile(res.user.unwrap_or_default(), res.groups, res.events);
            }
            Ok(_) => self.fail_loading(),
            Err(err) => {
                tracing::warn!("Profile load failed: {:?}", err);
                self.fail_loading();
            }
        }
    }

    /// Pushes the current form to the backend. One attempt, no retry.
    pub async fn save(&mut self, api: &ProfileApi, token: &SecretString) {
        self.status = None;

        match api.update_profile(&self.save_payload(), token).await {
            Ok(res) if res.success => self.apply_saved_user(res.data.unwrap_or_default()),
            Ok(_) => self.fail_saving(),
            Err(err) => {
                tracing::warn!("Profile save failed: {:?}", err);
                self.fail_saving();
            }
        }
    }
}
