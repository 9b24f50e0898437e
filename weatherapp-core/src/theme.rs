use serde::Serialize;

/// Time-of-day look used by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Night,
    Sunrise,
    Day,
    Sunset,
}

impl Theme {
    /// Pick a theme from a local wall-clock time.
    ///
    /// 05:00 exactly matches none of the night/day/sunrise windows and lands
    /// on `Sunset`.
    pub fn for_local_time(hour: u32, minute: u32) -> Self {
        let t = hour.saturating_mul(60).saturating_add(minute);

        if !(300..=1200).contains(&t) {
            Theme::Night
        } else if (480..1020).contains(&t) {
            Theme::Day
        } else if (301..480).contains(&t) {
            Theme::Sunrise
        } else {
            Theme::Sunset
        }
    }

    /// Whether foreground text should be light on a dark background.
    pub fn is_dark(&self) -> bool {
        !matches!(self, Theme::Day)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Night => "night",
            Theme::Sunrise => "sunrise",
            Theme::Day => "day",
            Theme::Sunset => "sunset",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows() {
        assert_eq!(Theme::for_local_time(0, 0), Theme::Night);
        assert_eq!(Theme::for_local_time(4, 59), Theme::Night);
        assert_eq!(Theme::for_local_time(5, 1), Theme::Sunrise);
        assert_eq!(Theme::for_local_time(7, 59), Theme::Sunrise);
        assert_eq!(Theme::for_local_time(8, 0), Theme::Day);
        assert_eq!(Theme::for_local_time(16, 59), Theme::Day);
        assert_eq!(Theme::for_local_time(17, 0), Theme::Sunset);
        assert_eq!(Theme::for_local_time(20, 0), Theme::Sunset);
        assert_eq!(Theme::for_local_time(20, 1), Theme::Night);
        assert_eq!(Theme::for_local_time(23, 59), Theme::Night);
    }

    #[test]
    fn five_oclock_sharp_is_sunset() {
        assert_eq!(Theme::for_local_time(5, 0), Theme::Sunset);
    }

    #[test]
    fn out_of_range_time_is_night() {
        assert_eq!(Theme::for_local_time(u32::MAX, u32::MAX), Theme::Night);
        assert_eq!(Theme::for_local_time(25, 0), Theme::Night);
    }

    #[test]
    fn only_day_uses_dark_text() {
        assert!(!Theme::Day.is_dark());
        assert!(Theme::Night.is_dark());
        assert!(Theme::Sunrise.is_dark());
        assert!(Theme::Sunset.is_dark());
    }
}
