use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// A single listing as served by `GET /properties/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Property {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub rooms: Option<i64>,
    #[serde(default)]
    pub bedrooms: Option<i64>,
    #[serde(default)]
    pub bathrooms: Option<i64>,
    #[serde(default)]
    pub square_meters_area: Option<i64>,
    #[serde(default)]
    pub rental_price_usd_normalized: Option<f64>,
    #[serde(default)]
    pub expenses_price_usd_normalized: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub scraped_at: Option<DateTime<Utc>>,
}

impl Property {
    /// Monthly rent in USD, excluding expenses
    pub fn monthly_rent(&self) -> Option<f64> {
        self.rental_price_usd_normalized
    }

    /// Monthly rent plus expenses, when the rent is known
    pub fn total_monthly_cost(&self) -> Option<f64> {
        self.rental_price_usd_normalized
            .map(|rent| rent + self.expenses_price_usd_normalized.unwrap_or(0.0))
    }

    /// Rent per square meter; `None` when area is missing or zero
    pub fn rent_per_square_meter(&self) -> Option<f64> {
        let rent = self.rental_price_usd_normalized?;
        match self.square_meters_area {
            Some(area) if area > 0 => Some(rent / area as f64),
            _ => None,
        }
    }

    /// Address, falling back to the location and then the id
    pub fn display_address(&self) -> &str {
        self.address
            .as_deref()
            .or(self.location.as_deref())
            .unwrap_or(&self.id)
    }
}

/// Accepts RFC 3339 as well as naive ISO timestamps (read as UTC), with or
/// without seconds and fractional seconds. Anything else reads as `None`.
fn deserialize_optional_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = Option::<String>::deserialize(deserializer)?;
    Ok(s.as_deref().and_then(parse_flexible_datetime))
}

pub(crate) fn parse_flexible_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = s.trim_end_matches('Z');
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
        .map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc))
}
