use std::fmt;

/// Label distinguishing how a record was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Regular,
    Manual,
    Vacation,
    Sick,
    /// Free text read back from storage that matches none of the known labels.
    Other(String),
}

impl Category {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &str {
        match self {
            Category::Regular => "regular",
            Category::Manual => "manual",
            Category::Vacation => "vacation",
            Category::Sick => "sick",
            Category::Other(s) => s.as_str(),
        }
    }

    /// Convert DB string → enum. Never fails: the column is free text.
    pub fn from_db_str(s: &str) -> Self {
        match s {
            "regular" => Category::Regular,
            "manual" => Category::Manual,
            "vacation" => Category::Vacation,
            "sick" => Category::Sick,
            other => Category::Other(other.to_string()),
        }
    }

    /// Parse a day-mark argument from the CLI (only vacation / sick are markable).
    pub fn day_mark_from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "vacation" | "v" | "holiday" => Some(Category::Vacation),
            "sick" | "s" => Some(Category::Sick),
            _ => None,
        }
    }

    /// Label used in Hebrew exports, matching the original report wording.
    pub fn hebrew_label(&self) -> &str {
        match self {
            Category::Regular => "רגיל",
            Category::Manual => "ידני",
            Category::Vacation => "חופשה",
            Category::Sick => "מחלה",
            Category::Other(s) => s.as_str(),
        }
    }

    pub fn is_day_mark(&self) -> bool {
        matches!(self, Category::Vacation | Category::Sick)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}
