use super::Category;
use chrono::{DateTime, Local, NaiveDate, NaiveTime};

/// One persisted daily entry (`work_hours` row).
#[derive(Debug, Clone, PartialEq)]
pub struct WorkRecord {
    pub id: i64,                // ⇔ work_hours.id (0 until persisted)
    pub user_id: i64,           // ⇔ work_hours.user_id
    pub date: NaiveDate,        // ⇔ work_hours.date (TEXT "YYYY-MM-DD")
    pub goal: f64,              // ⇔ work_hours.goal (hours)
    pub actual: f64,            // ⇔ work_hours.actual (hours, 2 decimals)
    pub start_time: NaiveTime,  // ⇔ work_hours.start_time (TEXT "HH:MM")
    pub end_time: NaiveTime,    // ⇔ work_hours.end_time (TEXT "HH:MM")
    pub category: Category,     // ⇔ work_hours.category
    pub created_at: String,     // ⇔ work_hours.created_at (RFC 3339)
}

impl WorkRecord {
    /// Build a record that has not been stored yet.
    /// `id` stays 0 until the store assigns one.
    pub fn new(
        user_id: i64,
        date: NaiveDate,
        goal: f64,
        actual: f64,
        start_time: NaiveTime,
        end_time: NaiveTime,
        category: Category,
        created_at: DateTime<Local>,
    ) -> Self {
        Self {
            id: 0,
            user_id,
            date,
            goal,
            actual,
            start_time,
            end_time,
            category,
            created_at: created_at.to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time.format("%H:%M").to_string()
    }

    pub fn hours_str(&self) -> String {
        format!("{:.2}", self.actual)
    }
}
