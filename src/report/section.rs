//! Report sections and their line-oriented rendering rule

use indexmap::IndexMap;

use crate::analyze::Summary;

/// Section content: an ordered mapping, a sequence, or a single value.
/// Every shape renders to plain lines of text by one fixed rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Map(IndexMap<String, String>),
    List(Vec<String>),
    Scalar(String),
}

impl Content {
    /// Render the content into lines: `key: value` per mapping entry,
    /// `- element` per sequence element, the bare string for a scalar.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Content::Map(map) => map
                .iter()
                .map(|(key, value)| format!("{}: {}", key, value))
                .collect(),
            Content::List(items) => items.iter().map(|item| format!("- {}", item)).collect(),
            Content::Scalar(value) => vec![value.clone()],
        }
    }
}

/// A titled block of report content
#[derive(Debug, Clone)]
pub struct Section {
    pub title: String,
    pub content: Content,
}

impl Section {
    pub fn new(title: impl Into<String>, content: Content) -> Self {
        Self {
            title: title.into(),
            content,
        }
    }
}

/// Build the three fixed report sections from a summary: the whole record,
/// then the mean map, then the missing map.
pub fn build_sections(summary: &Summary) -> Vec<Section> {
    let means: IndexMap<String, String> = summary
        .numeric_means
        .iter()
        .map(|(name, mean)| (name.clone(), fmt_float(*mean)))
        .collect();
    let missing: IndexMap<String, String> = summary
        .missing_counts
        .iter()
        .map(|(name, count)| (name.clone(), count.to_string()))
        .collect();

    let overview = IndexMap::from([
        (
            "Total Entries".to_string(),
            summary.total_entries.to_string(),
        ),
        ("Columns".to_string(), fmt_list(&summary.columns)),
        ("Mean of Numeric Columns".to_string(), fmt_map(&means)),
        ("Missing Values".to_string(), fmt_map(&missing)),
    ]);

    vec![
        Section::new("Summary", Content::Map(overview)),
        Section::new("Mean of Numeric Columns", Content::Map(means)),
        Section::new("Missing Values", Content::Map(missing)),
    ]
}

/// String form of a rounded mean: integral values keep one decimal place
fn fmt_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// String form of a name sequence: `[a, b, c]`
fn fmt_list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

/// String form of a nested mapping: `{a: 3.0, b: 4.0}`
fn fmt_map(map: &IndexMap<String, String>) -> String {
    let entries: Vec<String> = map
        .iter()
        .map(|(key, value)| format!("{}: {}", key, value))
        .collect();
    format!("{{{}}}", entries.join(", "))
}
