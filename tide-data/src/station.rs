use serde::{Deserialize, Deserializer, Serialize};

/// Shown when a station has neither a label nor an id.
pub const UNKNOWN_STATION: &str = "Unknown station";

/// Substring (compared case-insensitively) that marks a rain gauge rather than a tide gauge.
pub const RAINFALL_MARKER: &str = "rainfall";

/// A tidal or water-level gauge as listed in `stations.json`.
///
/// Records look like `{"id": "E70039", "label": "Avonmouth Portbury"}`; the
/// label may be missing, `null`, or occasionally an array of names.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct Station {
    /// Stable station identifier (the upstream `notation`)
    #[serde(default, deserialize_with = "nullable_string")]
    pub id: String,
    /// Human-readable name of the station
    #[serde(
        default,
        deserialize_with = "label_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<String>,
}

impl Station {
    pub fn new(id: impl Into<String>, label: Option<&str>) -> Self {
        Self {
            id: id.into(),
            label: label.map(str::to_string),
        }
    }

    /// The label as plain text, empty if absent. Used for filtering and sorting.
    pub fn label_text(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }

    /// True if the label names a rainfall gauge.
    pub fn is_rainfall(&self) -> bool {
        self.label_text().to_lowercase().contains(RAINFALL_MARKER)
    }

    /// Name to show in selectors: label, then id, then [`UNKNOWN_STATION`].
    pub fn display_name(&self) -> &str {
        first_present([self.label.as_deref(), Some(self.id.as_str())])
    }
}

/// Return the first non-empty candidate, or [`UNKNOWN_STATION`].
///
/// Candidates are tried in order, so the slice is the precedence.
pub fn first_present<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> &'a str {
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or(UNKNOWN_STATION)
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LabelValue {
    Text(String),
    Many(Vec<String>),
    Other(serde_json::Value),
}

/// Labels are coerced to text. Numbers and booleans keep their JSON spelling;
/// zero, `false` and objects count as no label.
fn label_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<LabelValue>::deserialize(deserializer)?.and_then(|value| match value {
            LabelValue::Text(text) => Some(text),
            LabelValue::Many(parts) => Some(parts.join(",")),
            LabelValue::Other(other) => scalar_text(&other),
        }),
    )
}

fn scalar_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Bool(true) => Some("true".to_string()),
        serde_json::Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        serde_json::Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .map(|item| match item {
                    serde_json::Value::String(text) => text.clone(),
                    serde_json::Value::Null => String::new(),
                    other => scalar_text(other).unwrap_or_else(|| other.to_string()),
                })
                .collect();
            Some(parts.join(","))
        }
        _ => None,
    }
}
