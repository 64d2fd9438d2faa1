//! Site footer

use crate::markup::{Element, Node};
use crate::style::Stylesheet;
use crate::widget::Widget;

const SOCIAL: &[(&str, &str)] = &[
    ("Facebook", "facebook"),
    ("Twitter", "twitter"),
    ("Instagram", "instagram"),
    ("LinkedIn", "linkedin"),
];

const COLUMNS: &[(&str, &[&str])] = &[
    ("Company", &["About Us", "Careers", "Blog", "Press"]),
    ("Support", &["Help Center", "Safety", "Community Guidelines", "Contact Us"]),
    ("Legal", &["Terms of Service", "Privacy Policy", "Cookie Policy"]),
];

const BOTTOM_LINKS: &[&str] = &["Privacy", "Terms", "Sitemap"];

/// Footer with the copyright year supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footer {
    pub year: i32,
}

impl Footer {
    pub fn new(year: i32) -> Self {
        Self { year }
    }
}

fn link(label: &str) -> Element {
    Element::new("a").attr("href", "#").class("footer-link").text(label)
}

impl Widget for Footer {
    fn scope(&self) -> &'static str {
        "site-footer"
    }

    fn stylesheet(&self) -> Stylesheet {
        Stylesheet::new()
            .rule(":host", "display: block; width: 100%; background-color: #1f2937; color: #f3f4f6")
            .rule(".footer-container", "max-width: 1200px; margin: 0 auto; padding: 3rem 1.5rem")
            .rule(
                ".footer-grid",
                "display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); \
                 gap: 2rem; margin-bottom: 2rem",
            )
            .rule(".footer-logo", "display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1rem")
            .rule(
                ".footer-logo-icon",
                "width: 2.5rem; height: 2.5rem; border-radius: 0.75rem; \
                 background: linear-gradient(135deg, #6366f1, #8b5cf6); display: flex; \
                 align-items: center; justify-content: center; color: white; font-weight: bold; \
                 font-size: 1.125rem",
            )
            .rule(".footer-logo-text", "font-weight: 700; font-size: 1.125rem")
            .rule(
                ".footer-description",
                "color: #9ca3af; font-size: 0.875rem; line-height: 1.5; margin-bottom: 1.5rem",
            )
            .rule(".footer-heading", "font-weight: 600; font-size: 1rem; margin-bottom: 1rem; color: white")
            .rule(".footer-links", "display: flex; flex-direction: column; gap: 0.75rem")
            .rule(
                ".footer-link",
                "color: #9ca3af; text-decoration: none; font-size: 0.875rem; transition: color 0.2s",
            )
            .rule(".footer-link:hover, .social-link:hover", "color: #6366f1")
            .rule(".social-links", "display: flex; gap: 1rem")
            .rule(".social-link", "color: #9ca3af; transition: color 0.2s")
            .rule(
                ".footer-bottom",
                "border-top: 1px solid #374151; padding-top: 2rem; display: flex; \
                 flex-direction: column; align-items: center; gap: 1rem; text-align: center",
            )
            .rule(".bottom-links", "display: flex; gap: 1rem")
            .rule(".copyright", "color: #9ca3af; font-size: 0.875rem")
            .media("(min-width: 768px)", |m| {
                m.rule(
                    ".footer-bottom",
                    "flex-direction: row; justify-content: space-between; text-align: left",
                )
            })
    }

    fn render_body(&self) -> Vec<Node> {
        let social = SOCIAL.iter().map(|(label, icon)| {
            Element::new("a")
                .attr("href", "#")
                .class("social-link")
                .attr("aria-label", *label)
                .child(Element::new("i").attr("data-feather", *icon))
        });

        let brand = Element::new("div")
            .child(
                Element::new("div")
                    .class("footer-logo")
                    .child(Element::new("div").class("footer-logo-icon").text("TT"))
                    .child(Element::new("div").class("footer-logo-text").text("TutorTrail")),
            )
            .child(Element::new("p").class("footer-description").text(
                "Find the perfect tutor for your learning journey. \
                 Verified professionals for any subject, any level.",
            ))
            .child(Element::new("div").class("social-links").children(social));

        let columns = COLUMNS.iter().map(|(heading, links)| {
            Element::new("div")
                .child(Element::new("h3").class("footer-heading").text(*heading))
                .child(
                    Element::new("div")
                        .class("footer-links")
                        .children(links.iter().map(|label| link(label))),
                )
        });

        let bottom = Element::new("div")
            .class("footer-bottom")
            .child(
                Element::new("p")
                    .class("copyright")
                    .text("© ")
                    .child(Element::new("span").attr("id", "current-year").text(self.year.to_string()))
                    .text(" TutorTrail. All rights reserved."),
            )
            .child(
                Element::new("div")
                    .class("bottom-links")
                    .children(BOTTOM_LINKS.iter().map(|label| link(label))),
            );

        vec![Element::new("div")
            .class("footer-container")
            .child(Element::new("div").class("footer-grid").child(brand).children(columns))
            .child(bottom)
            .into()]
    }
}
