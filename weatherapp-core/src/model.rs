use serde::{Deserialize, Serialize};

/// Decimal-degree position as reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Flat, unit-complete current conditions for one location.
///
/// Built fresh for every successful query; callers keep the latest one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub city: String,
    pub country: String,
    pub coordinates: Coordinates,
    pub coordinates_dms: String,
    pub temperature_c: f64,
    pub temperature_f: f64,
    pub temperature_max_c: f64,
    pub temperature_max_f: f64,
    pub temperature_min_c: f64,
    pub temperature_min_f: f64,
    pub conditions: String,
    pub description: String,
    /// `MM/DD` in the location's local time.
    pub local_date: String,
    pub local_hour: u32,
    pub local_minute: u32,
}

impl WeatherRecord {
    pub fn temperature(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => self.temperature_c,
            TemperatureUnit::Fahrenheit => self.temperature_f,
        }
    }

    pub fn temperature_max(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => self.temperature_max_c,
            TemperatureUnit::Fahrenheit => self.temperature_max_f,
        }
    }

    pub fn temperature_min(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => self.temperature_min_c,
            TemperatureUnit::Fahrenheit => self.temperature_min_f,
        }
    }
}

/// Display scale for temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
            TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
        }
    }
}
