//! Tutor Marketplace Widgets
//!
//! This crate provides the presentational widgets of the tutoring
//! marketplace site: the attribute-driven tutor card, plus the static
//! navigation bar, footer and search box. Widgets render into a virtual
//! markup tree with styles scoped to their own host element.

pub mod attributes;
pub mod binding;
pub mod footer;
pub mod hooks;
pub mod markup;
pub mod navbar;
pub mod search_box;
pub mod style;
pub mod tutor_card;
pub mod widget;

use thiserror::Error;

pub use attributes::{Attribute, AttributeSet, TutorProfile};
pub use binding::{AttributeBinding, SubscriptionId};
pub use footer::Footer;
pub use hooks::{Dispatch, HookError, HookResult, Intent, TutorHooks};
pub use markup::{Element, Node};
pub use navbar::{Navbar, Theme, THEME_ACTION};
pub use search_box::{SearchBox, SearchForm, SearchQuery};
pub use style::Stylesheet;
pub use tutor_card::{render_card, TutorCard};
pub use widget::Widget;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Unknown intent: {0}")]
    UnknownIntent(String),
}

pub type WidgetResult<T> = Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            WidgetError::UnknownAttribute("email".into()).to_string(),
            "Unknown attribute: email"
        );
        assert_eq!(
            "share".parse::<Intent>().unwrap_err(),
            WidgetError::UnknownIntent("share".into())
        );
    }

    #[test]
    fn test_widgets_use_distinct_scopes() {
        let profile = TutorProfile::from_attributes(&AttributeSet::new());
        let scopes = [
            profile.scope(),
            Navbar::default().scope(),
            Footer::new(2026).scope(),
            SearchBox::new("/tutors").scope(),
        ];
        for (i, a) in scopes.iter().enumerate() {
            for b in &scopes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
