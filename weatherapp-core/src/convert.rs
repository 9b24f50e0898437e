//! Unit conversions used when normalizing provider payloads.

use crate::error::NormalizeError;

const KELVIN_OFFSET: f64 = 273.15;

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

/// Formats a decimal latitude/longitude pair as degrees, minutes and seconds,
/// e.g. `51°30'26'N, 0°7'40'W`.
///
/// Hemisphere is chosen from the sign of the truncated degrees, so any value
/// in `(-1, 1)` (including exactly 0) is reported as `S` / `W`.
pub fn degrees_to_dms(latitude: f64, longitude: f64) -> Result<String, NormalizeError> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(NormalizeError::InvalidCoordinates);
    }

    let lat = axis_to_dms(latitude, 'N', 'S');
    let lon = axis_to_dms(longitude, 'E', 'W');

    Ok(format!("{lat}, {lon}"))
}

fn axis_to_dms(value: f64, positive: char, negative: char) -> String {
    let degrees = value.trunc();
    let minutes_float = (value - degrees).abs() * 60.0;
    let minutes = minutes_float.trunc();
    let seconds = ((minutes_float - minutes) * 60.0).trunc();

    let degrees = degrees as i64;
    let hemisphere = if degrees > 0 { positive } else { negative };

    format!(
        "{}°{}'{}'{}",
        degrees.abs(),
        minutes as i64,
        seconds as i64,
        hemisphere
    )
}
