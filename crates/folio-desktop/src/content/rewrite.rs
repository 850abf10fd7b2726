//! Ordered rewriting of third-party article HTML
//!
//! The feed delivers raw markup. Before display it runs through an explicit,
//! ordered list of regex rules; each rule sees the output of the previous
//! one, so order is part of the contract.

use regex::Regex;

use crate::error::ContentError;

/// Name of the global function image clicks call
pub const LIGHTBOX_HANDLER: &str = "openLightbox";

/// One regex substitution
#[derive(Clone, Debug)]
pub struct RewriteRule {
    name: String,
    pattern: Regex,
    replacement: String,
}

impl RewriteRule {
    /// Compile a rule; `replacement` may use `$1`-style capture references
    pub fn new(name: &str, pattern: &str, replacement: &str) -> Result<Self, ContentError> {
        let pattern = Regex::new(pattern).map_err(|e| ContentError::InvalidRule {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            name: name.to_string(),
            pattern,
            replacement: replacement.to_string(),
        })
    }

    /// Rule name, for logs
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply this rule to `input`
    pub fn apply(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }
}

/// Ordered list of rewrite rules
#[derive(Clone, Debug, Default)]
pub struct RuleList {
    rules: Vec<RewriteRule>,
}

/// Built-in article rules as (name, pattern, replacement), in order
const ARTICLE_RULES: &[(&str, &str, &str)] = &[
    // Feed tracking pixel
    (
        "strip-tracking-pixel",
        r#"<img[^>]*src="https://medium\.com/_/stat[^"]*"[^>]*/?>"#,
        "",
    ),
    (
        "style-images",
        r"<img\s",
        r#"<img class="article-image" style="max-width:100%;height:auto;display:block;margin:16px auto;cursor:zoom-in;" "#,
    ),
    (
        "lightbox-hook",
        r"<img\s",
        r#"<img onclick="openLightbox(this.src)" "#,
    ),
    (
        "style-captions",
        r"<figcaption>",
        r#"<figcaption style="text-align:center;font-size:12px;color:#666;">"#,
    ),
    (
        "style-h3",
        r"<h3>",
        r#"<h3 style="font-size:20px;font-weight:bold;margin:24px 0 8px;">"#,
    ),
    (
        "style-h4",
        r"<h4>",
        r#"<h4 style="font-size:16px;font-weight:bold;margin:20px 0 8px;">"#,
    ),
    (
        "external-links",
        r"<a\s+href=",
        r#"<a target="_blank" rel="noopener noreferrer" href="#,
    ),
];

impl RuleList {
    /// Empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in article rules
    pub fn article_defaults() -> Result<Self, ContentError> {
        let mut list = Self::new();
        for (name, pattern, replacement) in ARTICLE_RULES {
            list.push(RewriteRule::new(name, pattern, replacement)?);
        }
        Ok(list)
    }

    /// Append a rule; it runs after every rule already in the list
    pub fn push(&mut self, rule: RewriteRule) {
        self.rules.push(rule);
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the list has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in application order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(RewriteRule::name)
    }
}

/// Rewrite raw article markup for display
///
/// Pure: the same input and rules always give the same output.
pub fn rewrite_article_html(raw: &str, rules: &RuleList) -> String {
    rules
        .rules
        .iter()
        .fold(raw.to_string(), |html, rule| rule.apply(&html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn defaults() -> RuleList {
        RuleList::article_defaults().unwrap()
    }

    #[test]
    fn test_default_rules_compile_in_order() {
        let rules = defaults();
        assert_eq!(rules.len(), ARTICLE_RULES.len());
        assert_eq!(rules.names().next(), Some("strip-tracking-pixel"));
        assert_eq!(rules.names().last(), Some("external-links"));
    }

    #[test]
    fn test_images_get_style_and_lightbox() {
        let html = rewrite_article_html(r#"<p><img src="a.png" alt="A"></p>"#, &defaults());
        assert_eq!(
            html,
            r#"<p><img onclick="openLightbox(this.src)" class="article-image" style="max-width:100%;height:auto;display:block;margin:16px auto;cursor:zoom-in;" src="a.png" alt="A"></p>"#
        );
        assert!(html.contains(LIGHTBOX_HANDLER));
    }

    #[test]
    fn test_tracking_pixel_removed() {
        let raw = r#"<p>End</p><img src="https://medium.com/_/stat?event=post.clientViewed&postId=1" width="1" height="1" alt="">"#;
        assert_eq!(rewrite_article_html(raw, &defaults()), "<p>End</p>");
    }

    #[test]
    fn test_headings_and_links() {
        let html = rewrite_article_html(r#"<h3>Intro</h3><h4>Sub</h4><a href="https://x.dev">x</a>"#, &defaults());
        assert!(html.starts_with(r#"<h3 style="font-size:20px;"#));
        assert!(html.contains(r#"<h4 style="font-size:16px;"#));
        assert!(html.contains(r#"<a target="_blank" rel="noopener noreferrer" href="https://x.dev">"#));
    }

    #[test]
    fn test_rewrite_is_deterministic() {
        let raw = r#"<h3>T</h3><figure><img src="p.jpg"><figcaption>Cap</figcaption></figure>"#;
        let rules = defaults();
        assert_eq!(rewrite_article_html(raw, &rules), rewrite_article_html(raw, &rules));
    }

    #[test]
    fn test_order_matters() {
        let mut first = RuleList::new();
        first.push(RewriteRule::new("a-to-b", "a", "b").unwrap());
        first.push(RewriteRule::new("b-to-c", "b", "c").unwrap());

        let mut second = RuleList::new();
        second.push(RewriteRule::new("b-to-c", "b", "c").unwrap());
        second.push(RewriteRule::new("a-to-b", "a", "b").unwrap());

        assert_eq!(rewrite_article_html("ab", &first), "cc");
        assert_eq!(rewrite_article_html("ab", &second), "bc");
    }

    #[test]
    fn test_invalid_rule_reports_name() {
        let err = RewriteRule::new("broken", "(", "").unwrap_err();
        assert!(matches!(err, ContentError::InvalidRule { ref name, .. } if name == "broken"));
    }

    #[test]
    fn test_empty_list_is_identity() {
        assert_eq!(rewrite_article_html("<p>x</p>", &RuleList::new()), "<p>x</p>");
    }
}
