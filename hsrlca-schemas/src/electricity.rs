use serde::{Deserialize, Serialize};

/// Associates an electricity unit process (which is also a requirements column) with the
/// country whose grid supplies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectricitySource {
    pub column: String,
    pub country: String,
}

/// The configured set of electricity sources. The countries listed here form the closed set of
/// producing countries a scenario may reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElectricitySources {
    sources: Vec<ElectricitySource>,
}

pub const DEFAULT_COUNTRIES: [&str; 6] = ["Cambodia", "China", "LaoPDR", "Myanmar", "Thailand", "Vietnam"];

impl ElectricitySources {
    /// Builds the conventional `electricity_<Country>_kWh` source for each country.
    pub fn for_countries<I, S>(countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sources = countries
            .into_iter()
            .map(|c| ElectricitySource {
                column: format!("electricity_{}_kWh", c.as_ref()),
                country: c.as_ref().to_string(),
            })
            .collect();
        Self { sources }
    }

    pub fn column_for(&self, country: &str) -> Option<&str> {
        self.sources
            .iter()
            .find(|s| s.country == country)
            .map(|s| s.column.as_str())
    }

    pub fn country_for(&self, column: &str) -> Option<&str> {
        self.sources
            .iter()
            .find(|s| s.column == column)
            .map(|s| s.country.as_str())
    }

    pub fn contains_country(&self, country: &str) -> bool {
        self.column_for(country).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElectricitySource> {
        self.sources.iter()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(|s| s.column.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Default for ElectricitySources {
    fn default() -> Self {
        Self::for_countries(DEFAULT_COUNTRIES)
    }
}
