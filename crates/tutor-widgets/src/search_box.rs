//! Subject and location search box

use serde::{Deserialize, Serialize};

use crate::attributes::{Attribute, AttributeSet};
use crate::markup::{Element, Node};
use crate::style::Stylesheet;
use crate::widget::Widget;

/// Locations offered by the select, as (value, label)
pub const LOCATIONS: &[(&str, &str)] = &[
    ("delhi", "Delhi"),
    ("mumbai", "Mumbai"),
    ("bengaluru", "Bengaluru"),
    ("kolkata", "Kolkata"),
];

/// Raw form submission from the search box
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub location: String,
}

/// Normalized search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Lowercased subject fragment, if any
    pub subject: Option<String>,
    /// One of the [`LOCATIONS`] values
    pub location: Option<&'static str>,
}

impl SearchQuery {
    pub fn from_form(form: &SearchForm) -> Self {
        let subject = form.subject.trim();
        let subject = (!subject.is_empty()).then(|| subject.to_lowercase());

        let wanted = form.location.trim().to_lowercase();
        let location = LOCATIONS
            .iter()
            .map(|(value, _)| *value)
            .find(|value| *value == wanted);
        if location.is_none() && !wanted.is_empty() {
            tracing::debug!(location = %wanted, "Ignoring unknown search location");
        }

        Self { subject, location }
    }

    pub fn is_empty(&self) -> bool {
        self.subject.is_none() && self.location.is_none()
    }

    pub fn matches(&self, tutor: &AttributeSet) -> bool {
        let subject_ok = self.subject.as_deref().map_or(true, |wanted| {
            tutor
                .get(Attribute::Subject)
                .unwrap_or_default()
                .to_lowercase()
                .contains(wanted)
        });
        let location_ok = self.location.map_or(true, |wanted| {
            tutor
                .get(Attribute::City)
                .unwrap_or_default()
                .trim()
                .eq_ignore_ascii_case(wanted)
        });
        subject_ok && location_ok
    }

    pub fn filter<'a, I>(&self, tutors: I) -> Vec<&'a AttributeSet>
    where
        I: IntoIterator<Item = &'a AttributeSet>,
    {
        tutors.into_iter().filter(|tutor| self.matches(tutor)).collect()
    }
}

/// Search box; `action` is the URL the form submits to with GET
#[derive(Debug, Clone)]
pub struct SearchBox {
    pub action: String,
    pub query: SearchForm,
}

impl SearchBox {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            query: SearchForm::default(),
        }
    }

    /// Pre-fill the inputs with a previous submission
    pub fn with_query(mut self, query: SearchForm) -> Self {
        self.query = query;
        self
    }
}

impl Widget for SearchBox {
    fn scope(&self) -> &'static str {
        "search-card"
    }

    fn stylesheet(&self) -> Stylesheet {
        Stylesheet::new()
            .rule(
                ":host",
                "display: block; background-color: white; border-radius: 1rem; padding: 1.5rem; \
                 box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05)",
            )
            .rule(
                ".search-container",
                "display: flex; gap: 0.5rem; background-color: #f3f4f6; padding: 0.5rem; \
                 border-radius: 0.75rem",
            )
            .rule(
                ".search-input",
                "flex: 1; padding: 0.75rem; border: none; background: transparent; font-size: 0.9375rem",
            )
            .rule(".search-input:focus", "outline: none")
            .rule(
                ".search-select",
                "padding: 0.75rem; border: none; background: transparent; font-size: 0.9375rem; \
                 color: #4b5563; border-right: 1px solid #e5e7eb",
            )
            .rule(
                ".search-button",
                "background-color: #6366f1; color: white; padding: 0.75rem 1.25rem; border: none; \
                 border-radius: 0.5rem; font-weight: 500; cursor: pointer; \
                 transition: background-color 0.2s",
            )
            .rule(".search-button:hover", "background-color: #4f46e5")
            .media("(max-width: 640px)", |m| {
                m.rule(".search-container", "flex-direction: column").rule(
                    ".search-select",
                    "border-right: none; border-bottom: 1px solid #e5e7eb",
                )
            })
    }

    fn render_body(&self) -> Vec<Node> {
        let selected = self.query.location.trim().to_lowercase();
        let options = std::iter::once(("", "Location"))
            .chain(LOCATIONS.iter().copied())
            .map(|(value, label)| {
                let option = Element::new("option").attr("value", value);
                let option = if value == selected && !value.is_empty() {
                    option.attr("selected", "selected")
                } else {
                    option
                };
                option.text(label)
            });

        let form = Element::new("form")
            .class("search-container")
            .attr("method", "get")
            .attr("action", &self.action)
            .child(
                Element::new("input")
                    .attr("type", "text")
                    .attr("name", "subject")
                    .class("search-input")
                    .attr("placeholder", "Subject (e.g. Math, English)")
                    .attr("aria-label", "Search by subject")
                    .attr("value", &self.query.subject),
            )
            .child(
                Element::new("select")
                    .attr("name", "location")
                    .class("search-select")
                    .attr("aria-label", "Select location")
                    .children(options),
            )
            .child(
                Element::new("button")
                    .attr("type", "submit")
                    .class("search-button")
                    .text("Search"),
            );

        vec![form.into()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tutor(subject: &str, city: &str) -> AttributeSet {
        AttributeSet::new()
            .with(Attribute::Subject, subject)
            .with(Attribute::City, city)
    }

    #[test]
    fn test_query_normalization() {
        let query = SearchQuery::from_form(&SearchForm {
            subject: "  Math ".to_string(),
            location: "Mumbai".to_string(),
        });
        assert_eq!(query.subject.as_deref(), Some("math"));
        assert_eq!(query.location, Some("mumbai"));

        let query = SearchQuery::from_form(&SearchForm {
            subject: " ".to_string(),
            location: "Paris".to_string(),
        });
        assert!(query.is_empty());
    }

    #[test]
    fn test_filtering() {
        let tutors = vec![
            tutor("Mathematics", "Delhi"),
            tutor("English", "Mumbai"),
            tutor("Applied Math", "mumbai"),
        ];

        let query = SearchQuery::from_form(&SearchForm {
            subject: "math".to_string(),
            location: "mumbai".to_string(),
        });
        let found = query.filter(&tutors);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].get(Attribute::Subject), Some("Applied Math"));

        assert_eq!(SearchQuery::default().filter(&tutors).len(), 3);
    }

    #[test]
    fn test_search_box_markup() {
        let tree = SearchBox::new("/tutors")
            .with_query(SearchForm {
                subject: "English".to_string(),
                location: "kolkata".to_string(),
            })
            .render();

        assert_eq!(tree.find_all(|el| el.tag() == "option").len(), 5);
        let selected = tree.find_by_attr("selected", "selected").unwrap();
        assert_eq!(selected.get_attr("value"), Some("kolkata"));
        let input = tree.find_by_attr("name", "subject").unwrap();
        assert_eq!(input.get_attr("value"), Some("English"));
        assert_eq!(tree.find_by_attr("method", "get").unwrap().get_attr("action"), Some("/tutors"));
    }
}
