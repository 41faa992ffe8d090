//! Skills document normalization: grouped technical skills with a flat
//! fallback, plus a deduped soft-skills list.

use serde_json::Value;

use crate::models::SkillsDoc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    /// Subcategory heading; empty for the soft-skills block.
    pub subcat: String,
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillsView {
    pub tech_groups: Vec<SkillGroup>,
    pub soft: Vec<String>,
}

impl SkillsView {
    pub fn from_doc(doc: &SkillsDoc) -> Self {
        let tech_block = find_block(&doc.skills, "Technical Skills");
        let soft_block = find_block(&doc.skills, "Soft Skills");

        let mut tech_groups = tech_block
            .and_then(Value::as_array)
            .map(|items| normalize_grouped(items))
            .unwrap_or_default();
        if tech_groups.is_empty() {
            if let Some(items) = tech_block.and_then(Value::as_array) {
                tech_groups = normalize_flat(items);
            }
        }
        let soft = soft_block
            .and_then(Value::as_array)
            .map(|items| dedupe(names_of(items)))
            .unwrap_or_default();

        SkillsView { tech_groups, soft }
    }

    pub fn is_empty(&self) -> bool {
        self.tech_groups.is_empty() && self.soft.is_empty()
    }
}

fn find_block<'a>(root: &'a [Value], key: &str) -> Option<&'a Value> {
    root.iter()
        .find(|o| o.as_object().is_some_and(|m| m.contains_key(key)))
        .and_then(|o| o.get(key))
}

/// Grouped form: each entry is an object whose first key is the subcategory
/// and whose value is an array of `{ name }` items.
fn normalize_grouped(entries: &[Value]) -> Vec<SkillGroup> {
    let mut out = Vec::new();
    for entry in entries {
        let Some(map) = entry.as_object() else { continue };
        let Some((subcat, items)) = map.iter().next() else { continue };
        let Some(items) = items.as_array() else { continue };
        let names = dedupe(names_of(items));
        if !names.is_empty() {
            out.push(SkillGroup {
                subcat: subcat.clone(),
                names,
            });
        }
    }
    out
}

/// Flat form: a plain array of `{ name }` items folded into one group.
fn normalize_flat(items: &[Value]) -> Vec<SkillGroup> {
    let names = dedupe(names_of(items));
    if names.is_empty() {
        Vec::new()
    } else {
        vec![SkillGroup {
            subcat: "Technical".to_string(),
            names,
        }]
    }
}

fn names_of(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(|it| it.get("name").and_then(Value::as_str))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Drop blank and repeated entries, keying on the trimmed value but keeping
/// the original spelling, in first-seen order.
fn dedupe(items: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::new();
    for item in items {
        let key = item.trim().to_string();
        if key.is_empty() || seen.contains(&key) {
            continue;
        }
        seen.push(key);
        out.push(item);
    }
    out
}
