use chrono::Utc;
use corkboard_core::api::routes::v1;
use corkboard_model::UserThemePreferences;
use tracing::debug;

/// DOM id of the injected `<link rel="stylesheet">`.
pub const THEME_LINK_ID: &str = "corkboard-user-theme";

/// The document the stylesheet link lives in.
#[cfg_attr(test, mockall::automock)]
pub trait StylesheetHost {
    fn has_link(&self, id: &str) -> bool;
    fn append_link(&mut self, id: &str, href: &str);
    fn set_link_href(&mut self, id: &str, href: &str);
    fn remove_link(&mut self, id: &str);
}

/// Owns the theme `<link>` for as long as it is alive.
///
/// Signed in: exactly one link pointing at the theme endpoint. Signed out or
/// dropped: no link.
#[derive(Debug)]
pub struct ThemeStylesheet<H: StylesheetHost> {
    host: H,
    endpoint: String,
    applied: Option<UserThemePreferences>,
    last_stamp: i64,
}

impl<H: StylesheetHost> ThemeStylesheet<H> {
    pub fn new(host: H, endpoint: impl Into<String>) -> Self {
        Self {
            host,
            endpoint: endpoint.into(),
            applied: None,
            last_stamp: 0,
        }
    }

    /// Link against `{base_url}/api/v1/users/me/theme.css`.
    pub fn for_server(host: H, base_url: &str) -> Self {
        let endpoint = format!(
            "{}{}",
            base_url.trim_end_matches('/'),
            v1::users::CURRENT_THEME_CSS
        );
        Self::new(host, endpoint)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Reconciles the link with the signed-in user's preferences.
    pub fn sync(&mut self, preferences: Option<&UserThemePreferences>) {
        let Some(preferences) = preferences else {
            if self.host.has_link(THEME_LINK_ID) {
                debug!("removing theme stylesheet after sign-out");
                self.host.remove_link(THEME_LINK_ID);
            }
            self.applied = None;
            return;
        };

        if !self.host.has_link(THEME_LINK_ID) {
            self.host.append_link(THEME_LINK_ID, &self.endpoint);
        } else if self.applied.as_ref() != Some(preferences) {
            let stamp = self.next_stamp();
            let href = format!("{}?t={}", self.endpoint, stamp);
            debug!(%href, "reloading theme stylesheet");
            self.host.set_link_href(THEME_LINK_ID, &href);
        } else {
            return;
        }

        self.applied = Some(preferences.clone());
    }

    /// Millisecond cache-buster, strictly increasing even within one tick.
    fn next_stamp(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last_stamp = now.max(self.last_stamp + 1);
        self.last_stamp
    }
}

impl<H: StylesheetHost> Drop for ThemeStylesheet<H> {
    fn drop(&mut self) {
        if self.host.has_link(THEME_LINK_ID) {
            self.host.remove_link(THEME_LINK_ID);
        }
    }
}
