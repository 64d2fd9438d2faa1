//! Search box host

use leptos::*;
use tutor_widgets::{SearchBox, SearchForm};

use super::widget_html;

#[component]
pub fn SearchCard(
    #[prop(optional)]
    query: SearchForm,
) -> impl IntoView {
    let search = SearchBox::new("/tutors").with_query(query);

    view! {
        <div class="max-w-3xl mx-auto" inner_html=widget_html(&search)></div>
    }
}
