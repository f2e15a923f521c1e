use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of `GET /properties/stats/per-room`.
///
/// Every field is nullable on the wire; records without `rooms` are never
/// displayed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatRecord {
    #[serde(default)]
    pub rooms: Option<i64>,
    #[serde(default)]
    pub property_count: Option<u64>,
    #[serde(default)]
    pub average_price: Option<f64>,
}

impl StatRecord {
    pub fn new(rooms: Option<i64>, property_count: Option<u64>, average_price: Option<f64>) -> Self {
        Self {
            rooms,
            property_count,
            average_price,
        }
    }
}

/// Category label on a chart axis or pie slice.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryKey {
    /// A raw room count
    Number(i64),
    /// A synthesized label such as `"5+ rooms"` or `"Other"`
    Label(String),
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryKey::Number(n) => write!(f, "{n}"),
            CategoryKey::Label(label) => f.write_str(label),
        }
    }
}

impl From<i64> for CategoryKey {
    fn from(n: i64) -> Self {
        CategoryKey::Number(n)
    }
}

impl From<&str> for CategoryKey {
    fn from(label: &str) -> Self {
        CategoryKey::Label(label.to_string())
    }
}

impl From<String> for CategoryKey {
    fn from(label: String) -> Self {
        CategoryKey::Label(label)
    }
}

/// `{key, value}` pair consumed by both chart renderers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryPoint {
    pub key: CategoryKey,
    pub value: f64,
}

impl CategoryPoint {
    pub fn new(key: impl Into<CategoryKey>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

pub type ChartDataset = Vec<CategoryPoint>;

/// Sum of all values in a dataset.
pub fn dataset_total(data: &[CategoryPoint]) -> f64 {
    data.iter().map(|p| p.value).sum()
}
