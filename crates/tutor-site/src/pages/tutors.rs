//! Tutor search results

use leptos::*;
use leptos_router::use_query_map;
use std::sync::Arc;
use tutor_widgets::{SearchForm, SearchQuery};
use crate::components::*;
use crate::SiteState;

#[component]
pub fn TutorsPage() -> impl IntoView {
    let state = expect_context::<Arc<SiteState>>();
    let params = use_query_map();

    let form = params.with_untracked(|params| SearchForm {
        subject: params.get("subject").cloned().unwrap_or_default(),
        location: params.get("location").cloned().unwrap_or_default(),
    });
    let query = SearchQuery::from_form(&form);
    let results: Vec<_> = state.listing.search(&query).into_iter().cloned().collect();
    let summary = if query.is_empty() {
        format!("All tutors ({})", results.len())
    } else {
        format!("{} tutor(s) found", results.len())
    };

    view! {
        <div class="container mx-auto px-4 py-12">
            <div class="mb-10">
                <SearchCard query=form/>
            </div>
            <h1 class="text-2xl font-bold text-gray-900 mb-6">{summary}</h1>
            <TutorGrid tutors=results/>
        </div>
    }
}
