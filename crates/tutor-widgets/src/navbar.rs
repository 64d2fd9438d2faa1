//! Site navigation bar

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::markup::{Element, Node};
use crate::style::Stylesheet;
use crate::widget::Widget;

/// Colour scheme preference driven by the theme toggle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Read the preference from a `Cookie` request header
    pub fn from_cookie_header(header: &str) -> Self {
        header
            .split(';')
            .filter_map(|pair| pair.split_once('='))
            .find(|(name, _)| name.trim() == THEME_COOKIE)
            .map(|(_, value)| value.parse().unwrap_or_default())
            .unwrap_or_default()
    }

    /// `Set-Cookie` value that persists this preference for a year
    pub fn cookie(&self) -> String {
        format!(
            "{}={}; Path=/; Max-Age=31536000; SameSite=Lax",
            THEME_COOKIE,
            self.as_str()
        )
    }
}

/// Cookie holding the colour scheme preference
pub const THEME_COOKIE: &str = "theme";

/// Endpoint the theme toggle posts to
pub const THEME_ACTION: &str = "/theme";

impl FromStr for Theme {
    type Err = std::convert::Infallible;

    /// Anything other than "dark" is treated as light
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s.trim().eq_ignore_ascii_case("dark") {
            Theme::Dark
        } else {
            Theme::Light
        })
    }
}

const LINKS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Tutors", "/tutors"),
    ("Courses", "#"),
    ("About", "#"),
];

/// Navigation bar; the toggle offers the opposite of `theme`
#[derive(Debug, Clone, Copy, Default)]
pub struct Navbar {
    pub theme: Theme,
}

impl Navbar {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl Widget for Navbar {
    fn scope(&self) -> &'static str {
        "site-navbar"
    }

    fn stylesheet(&self) -> Stylesheet {
        Stylesheet::new()
            .rule(
                ":host",
                "display: block; width: 100%; position: sticky; top: 0; z-index: 50; \
                 background-color: white; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1)",
            )
            .rule(
                "nav",
                "max-width: 1200px; margin: 0 auto; padding: 1rem 1.5rem; display: flex; \
                 justify-content: space-between; align-items: center",
            )
            .rule(
                ".dark :host",
                "background-color: #1f2937; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.5)",
            )
            .rule(
                ".logo",
                "font-size: 1.25rem; font-weight: bold; color: #111827; text-decoration: none",
            )
            .rule(":host-context(.dark) .logo", "color: #f3f4f6")
            .rule(".logo span", "color: #4f46e5")
            .rule(".nav-links", "display: flex; gap: 1.5rem; align-items: center")
            .rule(".theme-form", "display: contents")
            .rule(
                ".nav-link",
                "color: #4b5563; text-decoration: none; font-weight: 500; transition: color 0.2s",
            )
            .rule(":host-context(.dark) .nav-link", "color: #d1d5db")
            .rule(".nav-link:hover", "color: #4f46e5")
            .rule(
                ".theme-toggle",
                "background: none; border: none; cursor: pointer; padding: 0.5rem; \
                 border-radius: 50%; transition: background-color 0.2s",
            )
            .rule(".theme-toggle:hover", "background-color: rgba(0, 0, 0, 0.05)")
            .rule(
                ":host-context(.dark) .theme-toggle:hover",
                "background-color: rgba(255, 255, 255, 0.1)",
            )
            .rule(
                ".login-btn",
                "background-color: #4f46e5; color: white; padding: 0.5rem 1rem; \
                 border-radius: 0.375rem; font-weight: 500; transition: background-color 0.2s",
            )
            .rule(".login-btn:hover", "background-color: #4338ca")
            .media("(max-width: 768px)", |m| m.rule(".nav-links", "display: none"))
    }

    fn render_body(&self) -> Vec<Node> {
        let logo = Element::new("a")
            .attr("href", "/")
            .class("logo")
            .child(Element::new("span").text("Edu"))
            .text("Glow");

        let links = LINKS.iter().map(|(label, href)| {
            Element::new("a").attr("href", *href).class("nav-link").text(*label)
        });

        let next = self.theme.toggle();
        let icon = match next {
            Theme::Dark => "moon",
            Theme::Light => "sun",
        };
        let toggle = Element::new("form")
            .class("theme-form")
            .attr("method", "post")
            .attr("action", THEME_ACTION)
            .child(
                Element::new("button")
                    .attr("type", "submit")
                    .class("theme-toggle")
                    .attr("id", "theme-toggle")
                    .attr("name", THEME_COOKIE)
                    .attr("value", next.as_str())
                    .attr("aria-label", "Toggle theme")
                    .child(Element::new("i").attr("data-feather", icon)),
            );

        let nav_links = Element::new("div")
            .class("nav-links")
            .children(links)
            .child(toggle)
            .child(Element::new("a").attr("href", "/login").class("login-btn").text("Login"));

        vec![Element::new("nav").child(logo).child(nav_links).into()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::default().toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!("DARK".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("sepia".parse::<Theme>().unwrap(), Theme::Light);
    }

    #[test]
    fn test_theme_cookie() {
        assert_eq!(Theme::from_cookie_header("sid=abc; theme=dark"), Theme::Dark);
        assert_eq!(Theme::from_cookie_header("theme=light"), Theme::Light);
        assert_eq!(Theme::from_cookie_header("sid=abc"), Theme::Light);
        assert_eq!(Theme::from_cookie_header(""), Theme::Light);
        assert_eq!(
            Theme::Dark.cookie(),
            "theme=dark; Path=/; Max-Age=31536000; SameSite=Lax"
        );
        assert_eq!(Theme::from_cookie_header(&Theme::Dark.cookie()), Theme::Dark);
    }

    #[test]
    fn test_toggle_offers_opposite_theme() {
        let tree = Navbar::new(Theme::Light).render();
        let toggle = tree.find_by_attr("id", "theme-toggle").unwrap();
        assert_eq!(toggle.get_attr("value"), Some("dark"));
        let form = tree.find_by_attr("action", THEME_ACTION).unwrap();
        assert_eq!(form.get_attr("method"), Some("post"));

        let tree = Navbar::new(Theme::Dark).render();
        let toggle = tree.find_by_attr("id", "theme-toggle").unwrap();
        assert_eq!(toggle.get_attr("value"), Some("light"));
    }

    #[test]
    fn test_navbar_markup() {
        let tree = Navbar::default().render();
        assert_eq!(tree.count_by_class("nav-link"), 4);
        assert!(tree.find_by_attr("id", "theme-toggle").is_some());
        assert_eq!(tree.find_all(|el| el.has_class("logo"))[0].text_content(), "EduGlow");
        assert!(tree.text_content().contains("Login"));
    }
}
