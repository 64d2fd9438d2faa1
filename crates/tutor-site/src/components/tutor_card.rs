//! Tutor card host
//!
//! Each card sits in a form posting to [`INTENT_ACTION`]. The tutor id
//! travels as a hidden field, and the pressed button supplies `intent`.

use leptos::*;
use tutor_widgets::{Attribute, AttributeSet, Element, Node, TutorCard};

/// Endpoint receiving Contact and Book presses
pub const INTENT_ACTION: &str = "/api/tutors/intent";

/// Mount a card for `tutor` and wrap it in its intent form
pub fn card_form(tutor: AttributeSet) -> Node {
    let id = tutor.get(Attribute::Id).unwrap_or_default().to_string();

    let mut card = TutorCard::new();
    card.replace_attributes(tutor);
    card.mount();

    Element::new("form")
        .attr("method", "post")
        .attr("action", INTENT_ACTION)
        .child(
            Element::new("input")
                .attr("type", "hidden")
                .attr("name", "id")
                .attr("value", id),
        )
        .children(card.view())
        .into()
}

#[component]
pub fn TutorCardView(tutor: AttributeSet) -> impl IntoView {
    view! {
        <div inner_html=card_form(tutor).to_html()></div>
    }
}

#[component]
pub fn TutorGrid(tutors: Vec<AttributeSet>) -> impl IntoView {
    if tutors.is_empty() {
        return view! {
            <p class="text-center text-gray-500 py-12">"No tutors match your search yet."</p>
        }
        .into_view();
    }

    view! {
        <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
            {tutors.into_iter().map(|tutor| view! {
                <TutorCardView tutor=tutor/>
            }).collect::<Vec<_>>()}
        </div>
    }
    .into_view()
}
