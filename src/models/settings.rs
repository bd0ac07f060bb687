use chrono::Weekday;

/// Week order used everywhere the settings are displayed: Sunday first.
pub const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Per-user target hours for each weekday (`work_settings` row).
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySettings {
    pub user_id: i64,
    pub sun: f64,
    pub mon: f64,
    pub tue: f64,
    pub wed: f64,
    pub thu: f64,
    pub fri: f64,
    pub sat: f64,
}

impl WeeklySettings {
    /// Seed values for a user with no settings row:
    /// 8h Sunday to Thursday, 4h Friday, nothing on Saturday.
    pub fn defaults_for(user_id: i64) -> Self {
        Self {
            user_id,
            sun: 8.0,
            mon: 8.0,
            tue: 8.0,
            wed: 8.0,
            thu: 8.0,
            fri: 4.0,
            sat: 0.0,
        }
    }

    pub fn goal_for(&self, day: Weekday) -> f64 {
        match day {
            Weekday::Sun => self.sun,
            Weekday::Mon => self.mon,
            Weekday::Tue => self.tue,
            Weekday::Wed => self.wed,
            Weekday::Thu => self.thu,
            Weekday::Fri => self.fri,
            Weekday::Sat => self.sat,
        }
    }

    pub fn set_goal(&mut self, day: Weekday, hours: f64) {
        let slot = match day {
            Weekday::Sun => &mut self.sun,
            Weekday::Mon => &mut self.mon,
            Weekday::Tue => &mut self.tue,
            Weekday::Wed => &mut self.wed,
            Weekday::Thu => &mut self.thu,
            Weekday::Fri => &mut self.fri,
            Weekday::Sat => &mut self.sat,
        };
        *slot = hours;
    }

    pub fn weekly_total(&self) -> f64 {
        WEEK.iter().map(|d| self.goal_for(*d)).sum()
    }
}

/// Lowercase three-letter key for a weekday (`sun`..`sat`), as used by the
/// settings columns.
pub fn day_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "sun",
        Weekday::Mon => "mon",
        Weekday::Tue => "tue",
        Weekday::Wed => "wed",
        Weekday::Thu => "thu",
        Weekday::Fri => "fri",
        Weekday::Sat => "sat",
    }
}
