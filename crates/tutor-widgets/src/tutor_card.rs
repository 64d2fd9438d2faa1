//! Tutor listing card
//!
//! [`TutorCard`] is an attribute-driven element: the host writes any of the
//! watched [`Attribute`]s, and every genuine change re-renders the whole
//! card from the current attribute set while it is mounted. The Contact and
//! Book buttons route through the [`TutorHooks`] the card was built with.

use std::cell::RefCell;
use std::rc::Rc;

use crate::attributes::{Attribute, AttributeSet, TutorProfile};
use crate::binding::AttributeBinding;
use crate::hooks::{Dispatch, Intent, TutorHooks};
use crate::markup::{Element, Node};
use crate::style::Stylesheet;
use crate::widget::Widget;
use crate::WidgetResult;

/// Tag shown on every card ahead of the skill tags
pub const VERIFIED_TAG: &str = "Verified";

pub const SCOPE: &str = "tutor-card";

/// Pure render of a profile into the card tree
pub fn render_card(profile: &TutorProfile) -> Node {
    profile.render()
}

impl Widget for TutorProfile {
    fn scope(&self) -> &'static str {
        SCOPE
    }

    fn stylesheet(&self) -> Stylesheet {
        card_stylesheet()
    }

    fn render_body(&self) -> Vec<Node> {
        let tags = std::iter::once(VERIFIED_TAG)
            .chain(self.skills.iter().map(String::as_str))
            .map(|tag| Element::new("span").class("tutor-tag").text(tag));

        let content = Element::new("div")
            .class("tutor-content")
            .child(Element::new("h3").class("tutor-name").text(&self.name))
            .child(Element::new("p").class("tutor-details").text(&self.subject))
            .child(Element::new("p").class("tutor-level").text(&self.level))
            .child(
                Element::new("div")
                    .class("tutor-meta")
                    .child(
                        Element::new("div")
                            .child(Element::new("div").class("tutor-price").text(&self.price))
                            .child(Element::new("div").class("tutor-city").text(&self.city)),
                    )
                    .child(
                        Element::new("div")
                            .class("tutor-rating")
                            .child(Element::new("i").attr("data-feather", "star").class("tutor-star"))
                            .text(self.rating_text()),
                    ),
            )
            .child(Element::new("div").class("tutor-tags").children(tags))
            .child(
                Element::new("div")
                    .class("tutor-actions")
                    .child(action_button(Intent::Contact, "tutor-button tutor-button-outline", &self.id))
                    .child(action_button(Intent::Book, "tutor-button tutor-button-primary", &self.id)),
            );

        vec![
            Element::new("img")
                .attr("src", &self.image)
                .attr("alt", &self.name)
                .class("tutor-image")
                .into(),
            content.into(),
        ]
    }
}

fn action_button(intent: Intent, class: &str, id: &str) -> Element {
    Element::new("button")
        .class(class)
        .attr("data-action", intent.as_str())
        .attr("data-id", id)
        .attr("name", "intent")
        .attr("value", intent.as_str())
        .text(intent.label())
}

fn card_stylesheet() -> Stylesheet {
    Stylesheet::new()
        .rule(
            ":host",
            "display: block; background-color: white; border-radius: 0.75rem; overflow: hidden; \
             box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05); transition: transform 0.2s, box-shadow 0.2s",
        )
        .rule(
            ":host(:hover)",
            "transform: translateY(-4px); box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1)",
        )
        .rule(".tutor-image", "width: 100%; height: 160px; object-fit: cover")
        .rule(".tutor-content", "padding: 1.25rem")
        .rule(
            ".tutor-name",
            "font-weight: 600; font-size: 1.125rem; margin-bottom: 0.25rem; color: #111827",
        )
        .rule(".tutor-details", "color: #6b7280; font-size: 0.875rem; margin-bottom: 0.5rem")
        .rule(".tutor-level", "color: #6b7280; font-size: 0.75rem; margin-bottom: 0.5rem")
        .rule(
            ".tutor-meta",
            "display: flex; align-items: center; justify-content: space-between; margin-bottom: 1rem",
        )
        .rule(".tutor-price", "font-weight: 600; color: #111827")
        .rule(".tutor-city", "color: #6b7280; font-size: 0.75rem")
        .rule(
            ".tutor-rating",
            "display: flex; align-items: center; gap: 0.25rem; color: #f59e0b; font-weight: 500",
        )
        .rule(".tutor-star", "width: 1rem; height: 1rem; fill: currentColor")
        .rule(
            ".tutor-tags",
            "display: flex; gap: 0.5rem; margin-bottom: 1rem; flex-wrap: wrap",
        )
        .rule(
            ".tutor-tag",
            "background-color: #eef2ff; color: #4338ca; padding: 0.25rem 0.5rem; \
             border-radius: 9999px; font-size: 0.75rem; font-weight: 500",
        )
        .rule(".tutor-actions", "display: flex; gap: 0.75rem")
        .rule(
            ".tutor-button",
            "flex: 1; padding: 0.5rem; border-radius: 0.5rem; font-weight: 500; \
             font-size: 0.875rem; text-align: center; cursor: pointer; transition: all 0.2s",
        )
        .rule(
            ".tutor-button-outline",
            "border: 1px solid #e5e7eb; background: transparent; color: #4b5563",
        )
        .rule(".tutor-button-outline:hover", "background-color: #f9fafb")
        .rule(
            ".tutor-button-primary",
            "background-color: #6366f1; color: white; border: none",
        )
        .rule(".tutor-button-primary:hover", "background-color: #4f46e5")
}

#[derive(Debug, Default)]
struct ViewState {
    tree: Option<Node>,
    renders: usize,
}

impl ViewState {
    fn render(&mut self, attrs: &AttributeSet) {
        self.tree = Some(render_card(&TutorProfile::from_attributes(attrs)));
        self.renders += 1;
    }
}

/// A mountable tutor card
#[derive(Debug)]
pub struct TutorCard {
    binding: AttributeBinding,
    view: Rc<RefCell<ViewState>>,
    hooks: TutorHooks,
}

impl TutorCard {
    /// Card with no hooks; clicks are no-ops
    pub fn new() -> Self {
        Self::with_hooks(TutorHooks::default())
    }

    pub fn with_hooks(hooks: TutorHooks) -> Self {
        let view = Rc::new(RefCell::new(ViewState::default()));
        let mut binding = AttributeBinding::new();

        let state = Rc::clone(&view);
        binding.subscribe(move |attrs, changed| {
            let mut state = state.borrow_mut();
            if state.tree.is_some() {
                tracing::debug!(?changed, "Re-rendering tutor card");
                state.render(attrs);
            }
        });

        Self {
            binding,
            view,
            hooks,
        }
    }

    pub fn attributes(&self) -> &AttributeSet {
        self.binding.values()
    }

    /// Returns true if the value changed
    pub fn set_attribute(&mut self, attr: Attribute, value: impl Into<String>) -> bool {
        self.binding.set(attr, value)
    }

    /// Set an attribute by its text name
    pub fn set_named_attribute(&mut self, name: &str, value: impl Into<String>) -> WidgetResult<bool> {
        let attr: Attribute = name.parse()?;
        Ok(self.set_attribute(attr, value))
    }

    pub fn remove_attribute(&mut self, attr: Attribute) -> bool {
        self.binding.remove(attr)
    }

    /// Apply several writes with at most one re-render
    pub fn update<F>(&mut self, apply: F) -> Vec<Attribute>
    where
        F: FnOnce(&mut AttributeSet),
    {
        self.binding.update(apply)
    }

    /// Replace every attribute with `attrs`
    pub fn replace_attributes(&mut self, attrs: AttributeSet) -> Vec<Attribute> {
        self.update(move |current| *current = attrs)
    }

    /// Attach the card; always performs one full render
    pub fn mount(&mut self) {
        self.view.borrow_mut().render(self.binding.values());
    }

    pub fn unmount(&mut self) {
        self.view.borrow_mut().tree = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.view.borrow().tree.is_some()
    }

    /// Current rendered tree, if mounted
    pub fn view(&self) -> Option<Node> {
        self.view.borrow().tree.clone()
    }

    pub fn html(&self) -> Option<String> {
        self.view.borrow().tree.as_ref().map(Node::to_html)
    }

    /// Number of render passes since construction
    pub fn render_count(&self) -> usize {
        self.view.borrow().renders
    }

    /// Press the button for `intent` on the rendered card
    pub fn click(&self, intent: Intent) -> Dispatch {
        let id = {
            let state = self.view.borrow();
            let Some(tree) = state.tree.as_ref() else {
                return Dispatch::NotMounted;
            };
            match tree.find_by_attr("data-action", intent.as_str()) {
                Some(button) => button.get_attr("data-id").unwrap_or_default().to_string(),
                None => return Dispatch::NotMounted,
            }
        };
        self.hooks.dispatch(intent, &id)
    }
}

impl Default for TutorCard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::HookError;
    use std::sync::{Arc, Mutex};

    fn recording_hooks() -> (TutorHooks, Arc<Mutex<Vec<(Intent, String)>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let contact = Arc::clone(&calls);
        let book = Arc::clone(&calls);
        let hooks = TutorHooks::new()
            .on_contact(move |id| {
                contact.lock().unwrap().push((Intent::Contact, id.to_string()));
                Ok(())
            })
            .on_book(move |id| {
                book.lock().unwrap().push((Intent::Book, id.to_string()));
                Ok(())
            });
        (hooks, calls)
    }

    fn sample_attributes() -> AttributeSet {
        AttributeSet::new()
            .with(Attribute::Name, "Asha Rao")
            .with(Attribute::Subject, "Mathematics")
            .with(Attribute::Level, "Beginner, Intermediate, ")
            .with(Attribute::Rating, "4.8")
            .with(Attribute::Price, "$10/hr")
            .with(Attribute::City, "Delhi")
            .with(Attribute::Image, "https://img.example/asha.jpg")
            .with(Attribute::Id, "42")
    }

    fn mounted(hooks: TutorHooks) -> TutorCard {
        let mut card = TutorCard::with_hooks(hooks);
        card.replace_attributes(sample_attributes());
        card.mount();
        card
    }

    #[test]
    fn test_render_is_idempotent() {
        let profile = TutorProfile::from_attributes(&sample_attributes());
        assert_eq!(render_card(&profile), render_card(&profile));

        let mut card = mounted(TutorHooks::new());
        let first = card.html().unwrap();
        card.mount();
        assert_eq!(card.html().unwrap(), first);
    }

    #[test]
    fn test_unparseable_rating_shows_zero() {
        let mut card = TutorCard::new();
        card.set_attribute(Attribute::Rating, "N/A");
        card.mount();

        let view = card.view().unwrap();
        let rating = view.find_all(|el| el.has_class("tutor-rating"));
        assert_eq!(rating[0].text_content(), "0");
    }

    #[test]
    fn test_absent_attributes_render_empty() {
        let mut card = TutorCard::new();
        card.mount();
        let html = card.html().unwrap();

        assert!(!html.contains("undefined"));
        assert!(!html.contains("null"));
        let view = card.view().unwrap();
        for class in ["tutor-name", "tutor-details", "tutor-price", "tutor-city"] {
            assert_eq!(view.find_all(|el| el.has_class(class))[0].text_content(), "");
        }
        assert_eq!(view.find_by_attr("data-action", "contact").unwrap().get_attr("data-id"), Some(""));
    }

    #[test]
    fn test_skill_tags_follow_verified() {
        let card = mounted(TutorHooks::new());
        let view = card.view().unwrap();
        let tags: Vec<String> = view
            .find_all(|el| el.has_class("tutor-tag"))
            .into_iter()
            .map(|el| el.text_content())
            .collect();

        assert_eq!(tags, vec!["Verified", "Beginner", "Intermediate"]);
    }

    #[test]
    fn test_clicks_invoke_matching_hook_once() {
        let (hooks, calls) = recording_hooks();
        let card = mounted(hooks);

        assert_eq!(card.click(Intent::Contact), Dispatch::Invoked);
        assert_eq!(*calls.lock().unwrap(), vec![(Intent::Contact, "42".to_string())]);

        assert_eq!(card.click(Intent::Book), Dispatch::Invoked);
        assert_eq!(
            *calls.lock().unwrap(),
            vec![(Intent::Contact, "42".to_string()), (Intent::Book, "42".to_string())]
        );
    }

    #[test]
    fn test_price_change_rerenders_once() {
        let mut card = mounted(TutorHooks::new());
        let before = card.render_count();

        assert!(card.set_attribute(Attribute::Price, "$15/hr"));

        assert_eq!(card.render_count(), before + 1);
        let html = card.html().unwrap();
        assert!(html.contains("$15/hr"));
        assert!(!html.contains("$10/hr"));
    }

    #[test]
    fn test_same_value_does_not_rerender() {
        let mut card = mounted(TutorHooks::new());
        let before = card.render_count();

        assert!(!card.set_attribute(Attribute::Price, "$10/hr"));
        assert!(card.replace_attributes(sample_attributes()).is_empty());

        assert_eq!(card.render_count(), before);
    }

    #[test]
    fn test_batched_update_renders_final_state_once() {
        let mut card = mounted(TutorHooks::new());
        let before = card.render_count();

        card.update(|attrs| {
            attrs.set(Attribute::Name, "Ravi Kumar");
            attrs.set(Attribute::Price, "$20/hr");
            attrs.set(Attribute::Id, "7");
        });

        assert_eq!(card.render_count(), before + 1);
        let html = card.html().unwrap();
        assert!(html.contains("Ravi Kumar"));
        assert!(html.contains("data-id=\"7\""));
        assert!(!html.contains("Asha Rao"));
    }

    #[test]
    fn test_no_render_while_unmounted() {
        let mut card = TutorCard::new();
        card.set_attribute(Attribute::Name, "Asha");
        assert_eq!(card.render_count(), 0);
        assert!(!card.is_mounted());
        assert_eq!(card.click(Intent::Contact), Dispatch::NotMounted);

        card.mount();
        assert_eq!(card.render_count(), 1);

        card.unmount();
        card.set_attribute(Attribute::Name, "Ravi");
        assert_eq!(card.render_count(), 1);
        assert!(card.html().is_none());

        card.mount();
        assert!(card.html().unwrap().contains("Ravi"));
    }

    #[test]
    fn test_missing_hooks_are_tolerated() {
        let card = mounted(TutorHooks::new());
        assert_eq!(card.click(Intent::Contact), Dispatch::Unhandled);
        assert_eq!(card.click(Intent::Book), Dispatch::Unhandled);
    }

    #[test]
    fn test_failing_hook_does_not_break_card() {
        let mut card = mounted(TutorHooks::new().on_contact(|_| Err(HookError::new("offline"))));
        assert!(matches!(card.click(Intent::Contact), Dispatch::Failed(_)));

        card.set_attribute(Attribute::Price, "$11/hr");
        assert!(card.html().unwrap().contains("$11/hr"));
        assert!(matches!(card.click(Intent::Contact), Dispatch::Failed(_)));
    }

    #[test]
    fn test_click_uses_current_id() {
        let (hooks, calls) = recording_hooks();
        let mut card = mounted(hooks);
        card.set_attribute(Attribute::Id, "99");

        card.click(Intent::Book);
        assert_eq!(*calls.lock().unwrap(), vec![(Intent::Book, "99".to_string())]);
    }

    #[test]
    fn test_named_attributes() {
        let mut card = TutorCard::new();
        assert!(card.set_named_attribute("city", "Mumbai").unwrap());
        assert!(card.set_named_attribute("email", "x").is_err());
        assert_eq!(card.attributes().get(Attribute::City), Some("Mumbai"));
    }

    #[test]
    fn test_markup_is_escaped() {
        let mut card = TutorCard::new();
        card.set_attribute(Attribute::Name, "<script>alert(1)</script>");
        card.mount();
        let html = card.html().unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_styles_are_scoped_to_card() {
        let card = mounted(TutorHooks::new());
        let html = card.html().unwrap();
        assert!(html.starts_with("<tutor-card data-scope=\"tutor-card\"><style>"));
        assert!(html.contains("[data-scope=\"tutor-card\"] .tutor-tag{"));
    }
}
