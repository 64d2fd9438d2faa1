//! Colour scheme preference

use axum::{
    extract::Form,
    http::{
        header::{COOKIE, REFERER, SET_COOKIE},
        HeaderMap,
    },
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tutor_widgets::Theme;

#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    #[serde(default)]
    pub theme: String,
}

/// Theme stored in the request's cookie, light when absent
pub fn request_theme(headers: &HeaderMap) -> Theme {
    headers
        .get(COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(Theme::from_cookie_header)
        .unwrap_or_default()
}

/// Path (and query) of a referring URL; other hosts are never redirected to
pub fn referer_path(referer: &str) -> &str {
    let path = match referer.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("/", |slash| &rest[slash..]),
        None => referer,
    };
    if path.starts_with('/') && !path.starts_with("//") {
        path
    } else {
        "/"
    }
}

pub async fn set_theme(headers: HeaderMap, Form(form): Form<ThemeForm>) -> impl IntoResponse {
    let theme: Theme = form.theme.parse().unwrap_or_default();
    tracing::debug!(theme = theme.as_str(), "Theme preference changed");

    let target = headers
        .get(REFERER)
        .and_then(|value| value.to_str().ok())
        .map(referer_path)
        .unwrap_or("/")
        .to_string();

    ([(SET_COOKIE, theme.cookie())], Redirect::to(&target))
}
