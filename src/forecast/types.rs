use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use std::hash::{Hash, Hasher};

/// Location used as the forecast cache key. Equality and hashing are bitwise
/// over (lat, lon), which keeps `Eq` and `Hash` consistent for f64 fields.
#[derive(Debug, Clone, Copy)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

pub const BELGRADE: Coordinates = Coordinates {
    lat: 44.81,
    lon: 20.46,
};

impl PartialEq for Coordinates {
    fn eq(&self, other: &Self) -> bool {
        self.lat.to_bits() == other.lat.to_bits() && self.lon.to_bits() == other.lon.to_bits()
    }
}

impl Eq for Coordinates {}

impl Hash for Coordinates {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lat.to_bits().hash(state);
        self.lon.to_bits().hash(state);
    }
}

/// One forecast instant, kept in the provider's unit and UTC offset.
#[derive(Debug, Clone, PartialEq)]
pub struct DayTempForecast {
    pub timestamp: DateTime<FixedOffset>,
    pub temp: f64,
}

// Raw shape of the met.no locationforecast compact feed. Unknown fields are
// ignored; a missing temperature or timestamp fails deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastProperties {
    pub timeseries: Vec<TimeseriesEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimeseriesEntry {
    pub time: DateTime<FixedOffset>,
    pub data: TimeseriesData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimeseriesData {
    pub instant: InstantData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstantData {
    pub details: InstantDetails,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstantDetails {
    pub air_temperature: f64,
}
