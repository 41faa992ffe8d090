//! Job-history normalization: date-range parsing, tenure humanization,
//! technology-label canonicalization and the per-job card view model.
//!
//! Everything here is pure; handlers inject "today" so tenure math is
//! deterministic under test.

use chrono::{Datelike, NaiveDate};
use serde_json::Value;

use crate::models::{DurationEntry, Job};

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Canonical spellings for the known stack keywords. Matched against the
/// trimmed, lowercased input; anything else falls back to title-casing.
const TECH_ALIASES: &[(&str, &str)] = &[
    ("html", "HTML"),
    ("css", "CSS"),
    ("js", "JavaScript"),
    ("javascript", "JavaScript"),
    ("react.js/next.js", "React / Next.js"),
    ("react.js", "React.js"),
    ("next.js", "Next.js"),
    ("node.js", "Node.js"),
    ("express.js", "Express.js"),
    ("mongodb", "MongoDB"),
    ("materialui", "Material UI"),
    ("material ui", "Material UI"),
    ("tailwindcss", "Tailwind CSS"),
    ("tailwind css", "Tailwind CSS"),
];

/// Parse `"<MonthName> <Year>"` (case-insensitive month, integer year) to the
/// first day of that month. Trailing tokens are ignored.
pub fn parse_month_year(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split_whitespace();
    let month = parts.next()?;
    let year = parts.next()?;
    let idx = MONTH_NAMES
        .iter()
        .position(|m| m.eq_ignore_ascii_case(month))?;
    let year: i32 = year.parse().ok()?;
    NaiveDate::from_ymd_opt(year, idx as u32 + 1, 1)
}

/// Humanize the whole-month distance between two dates.
///
/// The paired-branch month pluralization checks `> 1` while the months-only
/// branch checks `!= 1` ("0 mos" but "1 yr 1 mo"). That asymmetry is
/// long-standing observed behavior and is kept as-is.
pub fn humanize_tenure(start: NaiveDate, end: NaiveDate) -> String {
    let months =
        (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
    let months = months.max(0);
    let (y, m) = (months / 12, months % 12);
    if y > 0 && m > 0 {
        format!(
            "{y} yr{} {m} mo{}",
            if y > 1 { "s" } else { "" },
            if m > 1 { "s" } else { "" }
        )
    } else if y > 0 {
        format!("{y} yr{}", if y > 1 { "s" } else { "" })
    } else {
        format!("{m} mo{}", if m != 1 { "s" } else { "" })
    }
}

/// JSON truthiness: null, false, 0 and "" are falsy, everything else truthy.
fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Canonicalize one technology label. Empty input yields an empty string.
pub fn normalize_tech_label(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let lower = trimmed.to_lowercase();
    if let Some((_, canonical)) = TECH_ALIASES.iter().find(|(alias, _)| *alias == lower) {
        return (*canonical).to_string();
    }
    title_case(trimmed)
}

/// Collapse runs of whitespace and uppercase the first letter of every word
/// (a word starts wherever a non-word character precedes a word character).
fn title_case(s: &str) -> String {
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut out = String::with_capacity(collapsed.len());
    let mut prev_is_word = false;
    for c in collapsed.chars() {
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word && !prev_is_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = is_word;
    }
    out
}

/// Flatten a sequence or keyed mapping of technology names, canonicalize each
/// and deduplicate preserving first-seen order. Non-string and falsy entries
/// are dropped.
pub fn extract_techs(value: &Value) -> Vec<String> {
    let raw: Vec<&Value> = match value {
        Value::Array(items) => items.iter().filter(|v| truthy(v)).collect(),
        Value::Object(map) => map.values().filter(|v| truthy(v)).collect(),
        _ => Vec::new(),
    };
    let mut out: Vec<String> = Vec::new();
    for v in raw {
        if let Some(s) = v.as_str() {
            let label = normalize_tech_label(s);
            if !label.is_empty() && !out.contains(&label) {
                out.push(label);
            }
        }
    }
    out
}

/// Task strings from `tasks[0]`: the container's values in document order,
/// keys ignored, empty and non-string values dropped.
pub fn extract_tasks(tasks: &Value) -> Vec<String> {
    tasks
        .as_array()
        .and_then(|a| a.first())
        .and_then(|v| v.as_object())
        .map(|map| {
            map.values()
                .filter_map(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Initials badge for companies without a logo: first letter of up to two
/// whitespace-separated words, uppercased.
pub fn initials(company: Option<&str>) -> String {
    let name = company.filter(|s| !s.trim().is_empty()).unwrap_or("?");
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Everything the experience card template needs, precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceCard {
    pub logo_url: Option<String>,
    pub initials: String,
    pub company: String,
    pub alias: Option<String>,
    pub title: String,
    /// Humanized tenure, empty when the start date did not parse.
    pub tenure: String,
    /// "Jan 2020 — Present • 3 yrs" shape; whichever pieces exist.
    pub range_line: String,
    pub location: Option<String>,
    pub tasks: Vec<String>,
    pub techs: Vec<String>,
}

/// Build the card view model for one job. `today` is the effective end date
/// for ongoing jobs.
pub fn card_for(job: &Job, today: NaiveDate) -> ExperienceCard {
    let duration: Option<DurationEntry> = job
        .duration
        .as_array()
        .and_then(|a| a.first())
        .map(|v| serde_json::from_value(v.clone()).unwrap_or_default());

    let start = duration
        .as_ref()
        .and_then(|d| d.start_date.as_deref())
        .and_then(parse_month_year);
    // No duration entry at all counts as ongoing, same as a missing end date.
    let ongoing = duration.as_ref().map_or(true, |d| {
        truthy(&d.still_employed) || d.end_date.as_deref().map_or(true, str::is_empty)
    });
    let end = if ongoing {
        Some(today)
    } else {
        duration
            .as_ref()
            .and_then(|d| d.end_date.as_deref())
            .and_then(parse_month_year)
    };

    let tenure = match (start, end) {
        (Some(s), Some(e)) => humanize_tenure(s, e),
        _ => String::new(),
    };

    let left = start
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_default();
    let right = if ongoing {
        "Present".to_string()
    } else {
        end.map(|d| d.format("%b %Y").to_string()).unwrap_or_default()
    };
    let range = if !left.is_empty() && !right.is_empty() {
        format!("{left} — {right}")
    } else if !left.is_empty() {
        left
    } else {
        right
    };
    let range_line = if range.is_empty() {
        String::new()
    } else if tenure.is_empty() {
        range
    } else {
        format!("{range} • {tenure}")
    };

    let non_empty = |s: &Option<String>| s.as_deref().filter(|v| !v.is_empty()).map(str::to_string);

    ExperienceCard {
        logo_url: non_empty(&job.company_logo),
        initials: initials(job.company.as_deref()),
        company: job
            .company
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("Company")
            .to_string(),
        alias: non_empty(&job.company_alias),
        title: job.title.clone().unwrap_or_default(),
        tenure,
        range_line,
        location: non_empty(&job.location),
        tasks: extract_tasks(&job.tasks),
        techs: extract_techs(&job.technologies_used),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    fn job(value: serde_json::Value) -> Job {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn month_year_parsing_is_case_insensitive() {
        assert_eq!(parse_month_year("January 2020"), Some(date(2020, 1)));
        assert_eq!(parse_month_year("JANUARY 2020"), Some(date(2020, 1)));
        assert_eq!(parse_month_year("january 2020"), Some(date(2020, 1)));
        assert_eq!(parse_month_year("  december   1999  "), Some(date(1999, 12)));
    }

    #[test]
    fn month_year_parsing_rejects_bad_input() {
        assert_eq!(parse_month_year("Foo 2020"), None);
        assert_eq!(parse_month_year("January abcd"), None);
        assert_eq!(parse_month_year("January"), None);
        assert_eq!(parse_month_year(""), None);
    }

    #[test]
    fn tenure_whole_years() {
        assert_eq!(humanize_tenure(date(2020, 1), date(2023, 1)), "3 yrs");
        assert_eq!(humanize_tenure(date(2020, 1), date(2021, 1)), "1 yr");
    }

    #[test]
    fn tenure_months_only() {
        assert_eq!(humanize_tenure(date(2021, 3), date(2021, 4)), "1 mo");
        assert_eq!(humanize_tenure(date(2021, 3), date(2021, 3)), "0 mos");
        assert_eq!(humanize_tenure(date(2021, 3), date(2021, 6)), "3 mos");
    }

    #[test]
    fn tenure_mixed() {
        // 14 months
        assert_eq!(humanize_tenure(date(2021, 3), date(2022, 5)), "1 yr 2 mos");
        // 13 months: paired branch pluralizes with > 1, so singular here
        assert_eq!(humanize_tenure(date(2020, 1), date(2021, 2)), "1 yr 1 mo");
        assert_eq!(humanize_tenure(date(2019, 1), date(2021, 3)), "2 yrs 2 mos");
    }

    #[test]
    fn tenure_clamps_negative_spans_to_zero() {
        assert_eq!(humanize_tenure(date(2022, 5), date(2021, 1)), "0 mos");
    }

    #[test]
    fn tech_labels_use_the_alias_table() {
        assert_eq!(normalize_tech_label("js"), "JavaScript");
        assert_eq!(normalize_tech_label(" MongoDB "), "MongoDB");
        assert_eq!(normalize_tech_label("TAILWIND CSS"), "Tailwind CSS");
        assert_eq!(normalize_tech_label("react.js/next.js"), "React / Next.js");
    }

    #[test]
    fn unknown_tech_labels_are_title_cased() {
        assert_eq!(normalize_tech_label("rust lang"), "Rust Lang");
        assert_eq!(normalize_tech_label("  spring   boot "), "Spring Boot");
        assert_eq!(normalize_tech_label("vue.js"), "Vue.Js");
    }

    #[test]
    fn tech_extraction_dedupes_in_first_seen_order() {
        let techs = extract_techs(&json!(["js", "JavaScript", "React.js"]));
        assert_eq!(techs, vec!["JavaScript", "React.js"]);
        // idempotent: normalizing the output changes nothing
        let again = extract_techs(&json!(techs));
        assert_eq!(again, techs);
    }

    #[test]
    fn tech_extraction_accepts_keyed_mappings_in_document_order() {
        let techs = extract_techs(&json!({ "first": "html", "second": "css", "third": "" }));
        assert_eq!(techs, vec!["HTML", "CSS"]);
    }

    #[test]
    fn tech_extraction_drops_non_strings_and_other_shapes() {
        assert_eq!(extract_techs(&json!(["js", 0, false, null, 7])), vec!["JavaScript"]);
        assert!(extract_techs(&json!("not a list")).is_empty());
        assert!(extract_techs(&Value::Null).is_empty());
    }

    #[test]
    fn task_extraction_uses_only_the_first_container() {
        let tasks = extract_tasks(&json!([
            { "a": "Built the thing", "b": "", "c": "Shipped it" },
            { "ignored": "Second container" }
        ]));
        assert_eq!(tasks, vec!["Built the thing", "Shipped it"]);
        assert!(extract_tasks(&json!("nope")).is_empty());
        assert!(extract_tasks(&json!([])).is_empty());
    }

    #[test]
    fn initials_take_at_most_two_words() {
        assert_eq!(initials(Some("Acme Corp")), "AC");
        assert_eq!(initials(Some("acme")), "A");
        assert_eq!(initials(Some("Very Long Company Name")), "VL");
        assert_eq!(initials(None), "?");
        assert_eq!(initials(Some("   ")), "?");
    }

    #[test]
    fn ongoing_job_tenure_against_fixed_today() {
        let job = job(json!({
            "company": "Acme",
            "duration": [{ "startDate": "January 2020" }]
        }));
        let card = card_for(&job, date(2023, 1));
        assert_eq!(card.tenure, "3 yrs");
        assert_eq!(card.range_line, "Jan 2020 — Present • 3 yrs");
    }

    #[test]
    fn closed_job_tenure() {
        let job = job(json!({
            "company": "Acme",
            "duration": [{ "startDate": "March 2021", "endDate": "April 2021" }]
        }));
        let card = card_for(&job, date(2030, 1));
        assert_eq!(card.tenure, "1 mo");
        assert_eq!(card.range_line, "Mar 2021 — Apr 2021 • 1 mo");
    }

    #[test]
    fn still_employed_flag_overrides_end_date() {
        let job = job(json!({
            "duration": [{
                "startDate": "January 2020",
                "endDate": "June 2020",
                "stillEmployed?": true
            }]
        }));
        let card = card_for(&job, date(2021, 1));
        assert_eq!(card.tenure, "1 yr");
        assert_eq!(card.range_line, "Jan 2020 — Present • 1 yr");
    }

    #[test]
    fn unparseable_start_leaves_tenure_empty_but_range_renders() {
        let job = job(json!({
            "duration": [{ "startDate": "Foo 2020", "endDate": "May 2021" }]
        }));
        let card = card_for(&job, date(2023, 1));
        assert_eq!(card.tenure, "");
        assert_eq!(card.range_line, "May 2021");
    }

    #[test]
    fn unparseable_end_degrades_to_start_only() {
        let job = job(json!({
            "duration": [{ "startDate": "January 2020", "endDate": "Bar 2021" }]
        }));
        let card = card_for(&job, date(2023, 1));
        assert_eq!(card.tenure, "");
        assert_eq!(card.range_line, "Jan 2020");
    }

    #[test]
    fn missing_duration_counts_as_ongoing() {
        let card = card_for(&job(json!({ "company": "Acme" })), date(2023, 1));
        assert_eq!(card.tenure, "");
        assert_eq!(card.range_line, "Present");
    }

    #[test]
    fn card_defaults_and_optional_fields() {
        let card = card_for(&job(json!({})), date(2023, 1));
        assert_eq!(card.company, "Company");
        assert_eq!(card.initials, "?");
        assert_eq!(card.logo_url, None);
        assert_eq!(card.alias, None);
        assert_eq!(card.location, None);
        assert!(card.tasks.is_empty());
        assert!(card.techs.is_empty());

        let card = card_for(
            &job(json!({
                "company": "Acme",
                "companyAlias": "ACM",
                "companyLogo": "/logo.png",
                "title": "Engineer",
                "location": "Remote"
            })),
            date(2023, 1),
        );
        assert_eq!(card.logo_url.as_deref(), Some("/logo.png"));
        assert_eq!(card.alias.as_deref(), Some("ACM"));
        assert_eq!(card.title, "Engineer");
        assert_eq!(card.location.as_deref(), Some("Remote"));
    }
}
