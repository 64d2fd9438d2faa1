//! Tutor listing shown on the site

use std::path::Path;
use thiserror::Error;
use tutor_widgets::{Attribute, AttributeSet, SearchQuery};

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid listing JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tutors as attribute sets, in display order
#[derive(Debug, Clone, Default)]
pub struct Listing {
    tutors: Vec<AttributeSet>,
}

impl Listing {
    pub fn new(tutors: Vec<AttributeSet>) -> Self {
        Self { tutors }
    }

    /// Parse a JSON array of attribute objects
    pub fn from_json(json: &str) -> Result<Self, ListingError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn load(path: &Path) -> Result<Self, ListingError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Built-in featured tutors
    pub fn featured() -> Self {
        let tutor = |id: &str, name: &str, subject: &str, level: &str, rating: &str, price: &str, city: &str, image: &str| {
            AttributeSet::new()
                .with(Attribute::Id, id)
                .with(Attribute::Name, name)
                .with(Attribute::Subject, subject)
                .with(Attribute::Level, level)
                .with(Attribute::Rating, rating)
                .with(Attribute::Price, price)
                .with(Attribute::City, city)
                .with(Attribute::Image, image)
        };

        Self::new(vec![
            tutor("1", "Aarav Sharma", "Mathematics", "Beginner, Intermediate", "4.9", "₹600/hr", "Delhi", "https://static.photos/people/320x240/1"),
            tutor("2", "Priya Nair", "English", "Intermediate, Advanced", "4.8", "₹500/hr", "Mumbai", "https://static.photos/people/320x240/2"),
            tutor("3", "Rohan Gupta", "Physics", "Advanced", "4.7", "₹750/hr", "Bengaluru", "https://static.photos/people/320x240/3"),
            tutor("4", "Ananya Das", "Chemistry", "Beginner", "4.6", "₹550/hr", "Kolkata", "https://static.photos/people/320x240/4"),
        ])
    }

    pub fn tutors(&self) -> &[AttributeSet] {
        &self.tutors
    }

    /// Lookup by id; a tutor without an id matches the empty string
    pub fn get(&self, id: &str) -> Option<&AttributeSet> {
        self.tutors
            .iter()
            .find(|tutor| tutor.get(Attribute::Id).unwrap_or_default() == id)
    }

    pub fn search(&self, query: &SearchQuery) -> Vec<&AttributeSet> {
        query.filter(&self.tutors)
    }
}
