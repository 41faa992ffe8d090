//! Navigation and social link normalization.

use crate::models::{LinkEntry, NavDoc, SocialDoc};

/// One normalized link, ready for the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkItem {
    pub name: String,
    pub href: String,
    pub aria_label: String,
    pub icon_classes: Vec<String>,
    /// Absolute http(s) URLs open in a new tab with rel noopener.
    pub external: bool,
}

pub fn nav_items(doc: &NavDoc) -> Vec<LinkItem> {
    let entries = doc
        .nav_links
        .as_deref()
        .or(doc.nav_link.as_deref())
        .unwrap_or_default();
    entries
        .iter()
        .map(|e| link_item(e, "navigation link"))
        .collect()
}

pub fn social_items(doc: &SocialDoc) -> Vec<LinkItem> {
    let entries = doc.social_links.as_deref().unwrap_or_default();
    entries
        .iter()
        .map(|e| link_item(e, "social link"))
        .collect()
}

pub fn is_external(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn link_item(entry: &LinkEntry, fallback_label: &str) -> LinkItem {
    let name = entry.name.clone().unwrap_or_default();
    let href = entry
        .href
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("#")
        .to_string();
    let aria_label = if name.is_empty() {
        fallback_label.to_string()
    } else {
        name.clone()
    };
    let icon_classes = entry
        .icon
        .as_deref()
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let external = is_external(&href);
    LinkItem {
        name,
        href,
        aria_label,
        icon_classes,
        external,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nav_accepts_plural_and_legacy_singular_keys() {
        let doc: NavDoc = serde_json::from_value(json!({
            "navLinks": [{ "name": "Home", "href": "/" }]
        }))
        .unwrap();
        assert_eq!(nav_items(&doc)[0].name, "Home");

        let doc: NavDoc = serde_json::from_value(json!({
            "navLink": [{ "name": "Projects", "href": "/projects" }]
        }))
        .unwrap();
        assert_eq!(nav_items(&doc)[0].name, "Projects");

        let doc: NavDoc = serde_json::from_value(json!({})).unwrap();
        assert!(nav_items(&doc).is_empty());
    }

    #[test]
    fn missing_fields_get_documented_fallbacks() {
        let doc: NavDoc = serde_json::from_value(json!({
            "navLinks": [{ "href": "   " }]
        }))
        .unwrap();
        let item = &nav_items(&doc)[0];
        assert_eq!(item.name, "");
        assert_eq!(item.href, "#");
        assert_eq!(item.aria_label, "navigation link");
        assert!(item.icon_classes.is_empty());
    }

    #[test]
    fn icon_classes_split_on_whitespace() {
        let doc: SocialDoc = serde_json::from_value(json!({
            "socialLinks": [{ "name": "GitHub", "icon": " fa-brands  fa-github " }]
        }))
        .unwrap();
        let item = &social_items(&doc)[0];
        assert_eq!(item.icon_classes, vec!["fa-brands", "fa-github"]);
        assert_eq!(item.aria_label, "GitHub");
    }

    #[test]
    fn external_detection_is_scheme_based_and_case_insensitive() {
        assert!(is_external("https://example.com"));
        assert!(is_external("HTTP://example.com"));
        assert!(!is_external("mailto:a@b.c"));
        assert!(!is_external("/about"));
        assert!(!is_external("#"));
    }
}
