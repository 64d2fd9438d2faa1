//! Footer host

use chrono::Datelike;
use leptos::*;
use tutor_widgets::Footer;

use super::widget_html;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let footer = Footer::new(chrono::Utc::now().year());

    view! {
        <div inner_html=widget_html(&footer)></div>
    }
}
