//! Case-study catalog

use serde::{Deserialize, Serialize};

/// Label for ids the catalog does not know
pub const GENERIC_LABEL: &str = "Case Study";

/// One project page reachable at `#/projects/<id>`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    /// Feed keyword for the long-form write-up, if there is one
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub summary: String,
}

impl CaseStudy {
    pub fn new(id: &str, title: &str, summary: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            keyword: None,
            summary: summary.to_string(),
        }
    }

    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = Some(keyword.to_string());
        self
    }
}

/// Known case studies in gallery order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseStudyCatalog {
    entries: Vec<CaseStudy>,
}

impl Default for CaseStudyCatalog {
    fn default() -> Self {
        Self::new(vec![
            CaseStudy::new(
                "savvo-sommelier",
                "Savvo Sommelier",
                "A conversational wine guide that pairs bottles with the meal in front of you.",
            )
            .with_keyword("savvo"),
            CaseStudy::new(
                "transit-pulse",
                "Transit Pulse",
                "Live arrival boards for a regional bus network, designed for glanceability.",
            ),
            CaseStudy::new(
                "field-notes",
                "Field Notes",
                "A research repository that turns interview snippets into tagged insights.",
            ),
        ])
    }
}

impl CaseStudyCatalog {
    pub fn new(entries: Vec<CaseStudy>) -> Self {
        Self { entries }
    }

    pub fn get(&self, id: &str) -> Option<&CaseStudy> {
        self.entries.iter().find(|c| c.id == id)
    }

    /// Display title, or the generic label for unknown ids
    pub fn label_for(&self, id: &str) -> &str {
        self.get(id).map_or(GENERIC_LABEL, |c| c.title.as_str())
    }

    pub fn keyword_for(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(|c| c.keyword.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CaseStudy> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_labels() {
        let catalog = CaseStudyCatalog::default();
        assert_eq!(catalog.label_for("savvo-sommelier"), "Savvo Sommelier");
        assert_eq!(catalog.label_for("does-not-exist"), GENERIC_LABEL);
    }

    #[test]
    fn test_keywords() {
        let catalog = CaseStudyCatalog::default();
        assert_eq!(catalog.keyword_for("savvo-sommelier"), Some("savvo"));
        assert_eq!(catalog.keyword_for("transit-pulse"), None);
        assert_eq!(catalog.keyword_for("nope"), None);
    }

    #[test]
    fn test_catalog_from_json_list() {
        let catalog: CaseStudyCatalog =
            serde_json::from_str(r#"[{"id": "x", "title": "X"}]"#).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("x").unwrap().summary, "");
        assert_eq!(catalog.iter().next().map(|c| c.id.as_str()), Some("x"));
    }
}
