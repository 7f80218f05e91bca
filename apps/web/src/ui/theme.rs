use std::fmt;
use std::str::FromStr;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;
use tracing::debug;

use crate::models::UnknownVariant;

/// Cookie holding the visitor's theme choice.
pub const THEME_COOKIE: &str = "empowerher-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Icon on the toggle button: it shows the theme you would switch to.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-sun",
            Theme::Light => "fas fa-moon",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(UnknownVariant::new("theme", other)),
        }
    }
}

/// Reads the stored theme, falling back to `default` when the cookie is
/// absent or holds something unrecognised.
pub fn theme_from_jar(jar: &CookieJar, default: Theme) -> Theme {
    let Some(cookie) = jar.get(THEME_COOKIE) else {
        return default;
    };
    cookie.value().parse().unwrap_or_else(|e| {
        debug!("Ignoring theme cookie: {e}");
        default
    })
}

pub fn theme_cookie(theme: Theme) -> Cookie<'static> {
    Cookie::build((THEME_COOKIE, theme.as_str()))
        .path("/")
        .same_site(SameSite::Lax)
        .permanent()
        .build()
}

/// Flips the stored theme and returns the updated jar with the new value.
pub fn toggle_theme(jar: CookieJar, default: Theme) -> (CookieJar, Theme) {
    let next = theme_from_jar(&jar, default).toggled();
    (jar.add(theme_cookie(next)), next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[test]
    fn test_icon_classes() {
        assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
        assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
    }

    #[test]
    fn test_missing_cookie_uses_default() {
        let jar = CookieJar::new();
        assert_eq!(theme_from_jar(&jar, Theme::Light), Theme::Light);
    }

    #[test]
    fn test_garbage_cookie_uses_default() {
        let jar = CookieJar::new().add(Cookie::new(THEME_COOKIE, "sepia"));
        assert_eq!(theme_from_jar(&jar, Theme::Dark), Theme::Dark);
    }

    #[test]
    fn test_toggle_round_trip_through_jar() {
        let jar = CookieJar::new();
        let (jar, first) = toggle_theme(jar, Theme::Dark);
        assert_eq!(first, Theme::Light);
        assert_eq!(jar.get(THEME_COOKIE).map(|c| c.value()), Some("light"));

        let (jar, second) = toggle_theme(jar, Theme::Dark);
        assert_eq!(second, Theme::Dark);
        assert_eq!(jar.get(THEME_COOKIE).map(|c| c.value()), Some("dark"));
    }

    #[test]
    fn test_cookie_attributes() {
        let cookie = theme_cookie(Theme::Light);
        assert_eq!(cookie.name(), THEME_COOKIE);
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }
}
