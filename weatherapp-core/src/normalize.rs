use chrono::{DateTime, Duration, Timelike, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    convert::{celsius_to_fahrenheit, degrees_to_dms, kelvin_to_celsius},
    countries,
    error::NormalizeError,
    model::{Coordinates, WeatherRecord},
};

/// Kept untyped so non-numeric coordinates surface as
/// [`NormalizeError::InvalidCoordinates`] rather than a payload error.
#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: Value,
    lon: Value,
}

impl OwCoord {
    fn to_coordinates(&self) -> Result<Coordinates, NormalizeError> {
        match (self.lat.as_f64(), self.lon.as_f64()) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates { latitude, longitude }),
            _ => Err(NormalizeError::InvalidCoordinates),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    temp_max: f64,
    temp_min: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    coord: OwCoord,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    timezone: i64,
}

/// Normalize a current-weather payload using the present UTC instant for
/// local time.
pub fn normalize(json: &Value) -> Result<WeatherRecord, NormalizeError> {
    normalize_at(json, Utc::now())
}

/// Normalize a current-weather payload, deriving local time from `now`.
pub fn normalize_at(json: &Value, now: DateTime<Utc>) -> Result<WeatherRecord, NormalizeError> {
    let parsed = OwCurrentResponse::deserialize(json)
        .map_err(|e| NormalizeError::MalformedPayload(e.to_string()))?;

    let weather = parsed
        .weather
        .first()
        .ok_or_else(|| NormalizeError::MalformedPayload("empty `weather` array".to_string()))?;

    let coordinates = parsed.coord.to_coordinates()?;
    let coordinates_dms = degrees_to_dms(coordinates.latitude, coordinates.longitude)?;

    let country = countries::short_name(&parsed.sys.country)
        .map(str::to_string)
        .unwrap_or_else(|| parsed.sys.country.clone());

    let offset = Duration::try_seconds(parsed.timezone).ok_or_else(|| {
        NormalizeError::MalformedPayload(format!("timezone offset out of range: {}", parsed.timezone))
    })?;
    let local = now
        .checked_add_signed(offset)
        .ok_or_else(|| {
            NormalizeError::MalformedPayload(format!("timezone offset out of range: {}", parsed.timezone))
        })?;

    let temperature_c = kelvin_to_celsius(parsed.main.temp);
    let temperature_max_c = kelvin_to_celsius(parsed.main.temp_max);
    let temperature_min_c = kelvin_to_celsius(parsed.main.temp_min);

    Ok(WeatherRecord {
        city: parsed.name,
        country,
        coordinates,
        coordinates_dms,
        temperature_c,
        temperature_f: celsius_to_fahrenheit(temperature_c),
        temperature_max_c,
        temperature_max_f: celsius_to_fahrenheit(temperature_max_c),
        temperature_min_c,
        temperature_min_f: celsius_to_fahrenheit(temperature_min_c),
        conditions: weather.main.clone(),
        description: weather.description.clone(),
        local_date: local.format("%m/%d").to_string(),
        local_hour: local.hour(),
        local_minute: local.minute(),
    })
}
