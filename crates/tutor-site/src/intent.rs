//! Contact and booking intents submitted from tutor cards

use axum::{
    extract::Form,
    http::StatusCode,
    response::Html,
    Extension,
};
use serde::Deserialize;
use std::sync::Arc;
use tutor_widgets::{Dispatch, Element, Intent, Node, TutorCard, TutorHooks};

use crate::SiteState;

#[derive(Debug, Deserialize)]
pub struct IntentForm {
    #[serde(default)]
    pub id: String,
    pub intent: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct IntentResponse {
    pub id: String,
    pub intent: Intent,
    pub message: String,
}

/// Confirmation shown to the visitor
pub fn intent_message(intent: Intent, id: &str) -> String {
    match intent {
        Intent::Contact => format!("Contact request sent for tutor ID: {}", id),
        Intent::Book => format!("Booking initiated for tutor ID: {}", id),
    }
}

/// Hooks used by the site: record the intent in the log
pub fn site_hooks() -> TutorHooks {
    TutorHooks::new()
        .on_contact(|id| {
            tracing::info!(tutor_id = id, "Contact request received");
            Ok(())
        })
        .on_book(|id| {
            tracing::info!(tutor_id = id, "Booking request received");
            Ok(())
        })
}

/// Mount the listed tutor's card and press the requested button
pub fn click_card(state: &SiteState, id: &str, intent: &str) -> Result<IntentResponse, StatusCode> {
    let intent: Intent = intent.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
    let attributes = state.listing.get(id).ok_or(StatusCode::NOT_FOUND)?;

    let mut card = TutorCard::with_hooks(state.hooks.clone());
    card.replace_attributes(attributes.clone());
    card.mount();

    match card.click(intent) {
        Dispatch::Invoked | Dispatch::Unhandled => Ok(IntentResponse {
            id: id.to_string(),
            intent,
            message: intent_message(intent, id),
        }),
        Dispatch::Failed(reason) => {
            tracing::error!(tutor_id = id, %intent, %reason, "Intent could not be delivered");
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
        Dispatch::NotMounted => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// Small standalone page acknowledging the intent
pub fn confirmation_page(response: &IntentResponse) -> String {
    let body: Node = Element::new("main")
        .attr("style", "max-width: 32rem; margin: 4rem auto; text-align: center; font-family: sans-serif")
        .child(Element::new("h1").text(format!("{} request received", response.intent.label())))
        .child(Element::new("p").class("intent-message").text(&response.message))
        .child(Element::new("a").attr("href", "/tutors").text("Back to tutors"))
        .into();

    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>TutorTrail</title></head><body>{}</body></html>",
        body.to_html()
    )
}

pub async fn submit_intent(
    Extension(state): Extension<Arc<SiteState>>,
    Form(form): Form<IntentForm>,
) -> Result<Html<String>, StatusCode> {
    let response = click_card(&state, &form.id, &form.intent)?;
    Ok(Html(confirmation_page(&response)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::Listing;
    use tutor_widgets::{Attribute, AttributeSet, HookError};

    fn state(hooks: TutorHooks) -> SiteState {
        SiteState {
            listing: Listing::featured(),
            hooks,
        }
    }

    #[test]
    fn test_contact_intent() {
        let response = click_card(&state(site_hooks()), "2", "contact").unwrap();
        assert_eq!(response.intent, Intent::Contact);
        assert_eq!(response.message, "Contact request sent for tutor ID: 2");
    }

    #[test]
    fn test_book_intent() {
        let response = click_card(&state(site_hooks()), "3", "book").unwrap();
        assert_eq!(response.message, "Booking initiated for tutor ID: 3");
    }

    #[test]
    fn test_rejections() {
        let state = state(site_hooks());
        assert_eq!(click_card(&state, "404", "book"), Err(StatusCode::NOT_FOUND));
        assert_eq!(click_card(&state, "1", "share"), Err(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn test_unusual_and_empty_ids_reach_hooks() {
        let state = SiteState {
            listing: Listing::new(vec![
                AttributeSet::new().with(Attribute::Id, "a/b").with(Attribute::Name, "Slash"),
                AttributeSet::new().with(Attribute::Name, "No Id"),
            ]),
            hooks: site_hooks(),
        };

        let response = click_card(&state, "a/b", "contact").unwrap();
        assert_eq!(response.message, "Contact request sent for tutor ID: a/b");

        let response = click_card(&state, "", "book").unwrap();
        assert_eq!(response.message, "Booking initiated for tutor ID: ");
    }

    #[test]
    fn test_failing_hook_maps_to_unavailable() {
        let state = state(TutorHooks::new().on_book(|_| Err(HookError::new("calendar offline"))));
        assert_eq!(click_card(&state, "1", "book"), Err(StatusCode::SERVICE_UNAVAILABLE));
        // contact has no hook and is still acknowledged
        assert!(click_card(&state, "1", "contact").is_ok());
    }

    #[test]
    fn test_confirmation_page() {
        let response = click_card(&state(site_hooks()), "4", "book").unwrap();
        let page = confirmation_page(&response);
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<h1>Book request received</h1>"));
        assert!(page.contains("Booking initiated for tutor ID: 4"));
        assert!(page.contains("href=\"/tutors\""));
    }
}
