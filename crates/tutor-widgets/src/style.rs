//! Scoped stylesheets
//!
//! Widget styles are authored relative to the widget's host element using
//! `:host`, `:host(<state>)` and `:host-context(<ancestor>)`, the same way
//! they would be written for a shadow root. [`Stylesheet::scoped`] rewrites
//! every selector under a `[data-scope="..."]` attribute selector so that a
//! widget's rules only ever match inside its own host.

#[derive(Debug, Clone, PartialEq, Eq)]
struct Rule {
    selector: String,
    declarations: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Block {
    Rule(Rule),
    Media { query: String, rules: Vec<Rule> },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    blocks: Vec<Block>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule. `declarations` is a `;`-separated declaration list.
    pub fn rule(mut self, selector: &str, declarations: &str) -> Self {
        self.blocks.push(Block::Rule(Rule::new(selector, declarations)));
        self
    }

    /// Add a media block whose rules are built by `build`
    pub fn media<F>(mut self, query: &str, build: F) -> Self
    where
        F: FnOnce(Stylesheet) -> Stylesheet,
    {
        let rules = build(Stylesheet::new())
            .blocks
            .into_iter()
            .filter_map(|block| match block {
                Block::Rule(rule) => Some(rule),
                Block::Media { .. } => None,
            })
            .collect();
        self.blocks.push(Block::Media {
            query: query.trim().to_string(),
            rules,
        });
        self
    }

    pub fn rule_count(&self) -> usize {
        self.blocks
            .iter()
            .map(|block| match block {
                Block::Rule(_) => 1,
                Block::Media { rules, .. } => rules.len(),
            })
            .sum()
    }

    /// Render the stylesheet with every selector confined to `scope`
    pub fn scoped(&self, scope: &str) -> String {
        let host = scope_selector(scope);
        let mut out = String::new();
        for block in &self.blocks {
            match block {
                Block::Rule(rule) => out.push_str(&rule.scoped(&host)),
                Block::Media { query, rules } => {
                    out.push_str("@media ");
                    out.push_str(query);
                    out.push('{');
                    for rule in rules {
                        out.push_str(&rule.scoped(&host));
                    }
                    out.push('}');
                }
            }
        }
        out
    }
}

/// Attribute selector identifying a widget host
pub fn scope_selector(scope: &str) -> String {
    format!("[data-scope=\"{}\"]", scope)
}

impl Rule {
    fn new(selector: &str, declarations: &str) -> Self {
        let declarations = declarations
            .split(';')
            .map(str::trim)
            .filter(|decl| !decl.is_empty())
            .collect::<Vec<_>>()
            .join(";");
        Self {
            selector: selector.trim().to_string(),
            declarations,
        }
    }

    fn scoped(&self, host: &str) -> String {
        let selectors = self
            .selector
            .split(',')
            .map(|sel| scope_one(sel.trim(), host))
            .collect::<Vec<_>>()
            .join(",");
        format!("{}{{{}}}", selectors, self.declarations)
    }
}

fn scope_one(selector: &str, host: &str) -> String {
    if let Some((before, inner, after)) = split_function(selector, ":host-context(") {
        return format!("{}{} {}{}", before, inner, host, after);
    }
    if let Some((before, inner, after)) = split_function(selector, ":host(") {
        return format!("{}{}{}{}", before, host, inner, after);
    }
    if selector.contains(":host") {
        return selector.replacen(":host", host, 1);
    }
    format!("{} {}", host, selector)
}

/// Split `a :fn(inner) b` into (`a `, `inner`, ` b`)
fn split_function<'a>(selector: &'a str, function: &str) -> Option<(&'a str, &'a str, &'a str)> {
    let start = selector.find(function)?;
    let inner_start = start + function.len();
    let mut depth = 1usize;
    for (offset, ch) in selector[inner_start..].char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    let close = inner_start + offset;
                    return Some((
                        &selector[..start],
                        &selector[inner_start..close],
                        &selector[close + 1..],
                    ));
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = "[data-scope=\"card\"]";

    #[test]
    fn test_host_selectors() {
        assert_eq!(scope_one(":host", HOST), HOST);
        assert_eq!(scope_one(":host(:hover)", HOST), format!("{}:hover", HOST));
        assert_eq!(
            scope_one(":host-context(.dark) .logo", HOST),
            format!(".dark {} .logo", HOST)
        );
        assert_eq!(scope_one(".dark :host", HOST), format!(".dark {}", HOST));
    }

    #[test]
    fn test_descendant_selectors_are_prefixed() {
        assert_eq!(scope_one(".logo span", HOST), format!("{} .logo span", HOST));
        assert_eq!(scope_one("nav", HOST), format!("{} nav", HOST));
    }

    #[test]
    fn test_scoped_output() {
        let sheet = Stylesheet::new()
            .rule(":host", "display: block; ")
            .rule(".a, .b:hover", "color: red;")
            .media("(max-width: 640px)", |m| m.rule(".a", "display: none"));

        assert_eq!(sheet.rule_count(), 3);
        assert_eq!(
            sheet.scoped("card"),
            "[data-scope=\"card\"]{display: block}\
             [data-scope=\"card\"] .a,[data-scope=\"card\"] .b:hover{color: red}\
             @media (max-width: 640px){[data-scope=\"card\"] .a{display: none}}"
        );
    }

    #[test]
    fn test_every_rule_is_confined() {
        let sheet = Stylesheet::new()
            .rule(".x", "a: b")
            .rule(":host(:hover)", "a: b")
            .rule("button", "a: b");
        let css = sheet.scoped("w");
        let rules = css.split('}').filter(|r| !r.is_empty()).count();
        assert_eq!(css.matches("[data-scope=\"w\"]").count(), rules);
    }
}
