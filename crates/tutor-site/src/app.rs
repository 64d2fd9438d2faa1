//! Main application component

use axum::http::request::Parts;
use leptos::*;
use leptos_router::*;
use tutor_widgets::Theme;
use crate::pages::*;
use crate::components::*;
use crate::theme::request_theme;

/// Classes for the page shell; `dark` switches the scoped dark styles on
pub fn shell_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "min-h-screen bg-gray-50",
        Theme::Dark => "dark min-h-screen bg-gray-900",
    }
}

#[component]
pub fn App() -> impl IntoView {
    let theme = use_context::<Parts>()
        .map(|parts| request_theme(&parts.headers))
        .unwrap_or_default();

    view! {
        <Router>
            <div class=shell_class(theme)>
                <SiteNav theme=theme/>
                <main>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/tutors" view=TutorsPage/>
                    </Routes>
                </main>
                <SiteFooter/>
            </div>
        </Router>
    }
}
