//! Wire shape of a work slip as it appears in JSON bodies, local storage and
//! older database rows. Every field is optional and loosely typed.

use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawWorkSlip {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub so_number: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "loose_int")]
    pub quarter: Option<i64>,
    #[serde(default, deserialize_with = "loose_bool")]
    pub area_in_house: Option<bool>,
    #[serde(default, deserialize_with = "loose_bool")]
    pub area_on_site: Option<bool>,
    #[serde(default, deserialize_with = "loose_bool")]
    pub area_interagency: Option<bool>,
    #[serde(default, deserialize_with = "loose_list")]
    pub offices: Option<Vec<String>>,
    /// Single office of records written before multi-select.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office: Option<String>,
    #[serde(default)]
    pub time_started: Option<String>,
    #[serde(default)]
    pub time_ended: Option<String>,
    #[serde(default)]
    pub action_done: Option<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub requester_signature: Option<String>,
    #[serde(default)]
    pub technician_name: Option<String>,
    #[serde(default)]
    pub approved_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printer_brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printer_model: Option<String>,
    #[serde(default, deserialize_with = "loose_list")]
    pub technical_reports: Option<Vec<RawTechnicalReport>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTechnicalReport {
    #[serde(default)]
    pub request: Option<String>,
    #[serde(default)]
    pub action_done: Option<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Accepts `true`, `1`, `"1"`, `"true"` and friends; anything unreadable is
/// treated as absent.
fn loose_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Loose>::deserialize(deserializer)?.and_then(|el| match el {
        Loose::Bool(value) => Some(value),
        Loose::Int(value) => Some(value != 0),
        Loose::Float(value) => Some(value != 0.0),
        Loose::Text(value) => match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" | "" => Some(false),
            _ => None,
        },
        Loose::Other(_) => None,
    }))
}

fn loose_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Loose>::deserialize(deserializer)?.and_then(|el| match el {
        Loose::Int(value) => Some(value),
        Loose::Float(value) if value.fract() == 0.0 => Some(value as i64),
        Loose::Text(value) => value.trim().parse().ok(),
        _ => None,
    }))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseList<T> {
    List(Vec<T>),
    Other(IgnoredAny),
}

/// A list, or absent when the value is not a list of the expected items.
fn loose_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(
        Option::<LooseList<T>>::deserialize(deserializer)?.and_then(|el| match el {
            LooseList::List(items) => Some(items),
            LooseList::Other(_) => None,
        }),
    )
}
