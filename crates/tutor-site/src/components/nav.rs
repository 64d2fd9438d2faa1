//! Navigation bar host

use leptos::*;
use tutor_widgets::{Navbar, Theme};

use super::widget_html;

#[component]
pub fn SiteNav(theme: Theme) -> impl IntoView {
    view! {
        <header class="sticky top-0 z-50" inner_html=widget_html(&Navbar::new(theme))></header>
    }
}
