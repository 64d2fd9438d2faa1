//! Widget trait shared by every component

use crate::markup::{Element, Node};
use crate::style::Stylesheet;

/// A self-contained, scoped piece of UI
pub trait Widget {
    /// Scope name; also used as the host element's tag
    fn scope(&self) -> &'static str;

    /// Styles authored relative to the host
    fn stylesheet(&self) -> Stylesheet;

    /// Markup placed inside the host
    fn render_body(&self) -> Vec<Node>;

    /// Full host element: scope marker, scoped styles, then the body
    fn render(&self) -> Node {
        let scope = self.scope();
        Element::new(scope)
            .attr("data-scope", scope)
            .child(Node::Style(self.stylesheet().scoped(scope)))
            .children(self.render_body())
            .into()
    }
}
