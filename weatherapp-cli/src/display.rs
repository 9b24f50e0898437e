use weatherapp_core::{TemperatureUnit, Theme, WeatherRecord};

/// Render a record as the lines of the weather panel.
pub fn render(record: &WeatherRecord, unit: TemperatureUnit) -> String {
    let theme = Theme::for_local_time(record.local_hour, record.local_minute);

    let mut out = String::new();
    let palette = if theme.is_dark() { "dark" } else { "light" };
    out.push_str(&format!("[{theme} / {palette}]\n"));
    out.push_str(&format!("{}, {}\n", record.city, record.country));
    out.push_str(&format!("{}\n", record.coordinates_dms));
    out.push_str(&format!(
        "{} {:02}:{:02}\n",
        record.local_date, record.local_hour, record.local_minute
    ));
    // Temperatures are truncated toward zero, not rounded.
    out.push_str(&format!(
        "{}{}  {} / {}\n",
        record.temperature(unit) as i64,
        unit.symbol(),
        record.temperature_max(unit) as i64,
        record.temperature_min(unit) as i64,
    ));
    out.push_str(&format!("{} ({})\n", record.conditions, record.description));
    out
}
