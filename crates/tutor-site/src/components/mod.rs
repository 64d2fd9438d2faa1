//! Site components

mod cards;
mod footer;
mod nav;
mod search;
mod tutor_card;

pub use cards::*;
pub use footer::SiteFooter;
pub use nav::SiteNav;
pub use search::SearchCard;
pub use tutor_card::{TutorCardView, TutorGrid, INTENT_ACTION};

use tutor_widgets::Widget;

/// Server-render a widget to HTML for an `inner_html` host
pub(crate) fn widget_html(widget: &impl Widget) -> String {
    widget.render().to_html()
}
