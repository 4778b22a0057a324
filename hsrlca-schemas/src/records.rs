use serde::{Deserialize, Serialize};

/// Average export distance between a home country and a producing country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeDistance {
    pub home_country: String,
    #[serde(rename = "up_countries", alias = "producing_country")]
    pub producing_country: String,
    pub avg_export_distance: f64,
}

/// One row of the emissions-equivalency conversion table.
///
/// `category` is kept as free text so that unrecognized categories can be reported rather than
/// rejected at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionFactor {
    pub category: String,
    pub emission: String,
    pub conversion: f64,
}

/// Scenario assignment of a unit process to the country that produces it.
///
/// Files without a `unit_process` column are aligned by row position against the base
/// requirements table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProducingCountry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_process: Option<String>,
    #[serde(rename = "up_countries", alias = "producing_country")]
    pub producing_country: String,
}
