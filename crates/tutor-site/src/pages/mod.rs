//! Marketing site pages

mod home;
mod tutors;

pub use home::HomePage;
pub use tutors::TutorsPage;
