//! Pure projection of stored records into a table and a chart series.

use crate::models::{Category, WorkRecord};
use chrono::{NaiveDate, NaiveTime};

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub goal: f64,
    pub actual: f64,
    pub category: Category,
    /// Sum of `actual` over this row and every row before it.
    pub cumulative: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub actual: f64,
    pub goal: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub total_actual: f64,
    pub total_goal: f64,
    pub chart: Vec<ChartPoint>,
}

impl Report {
    /// Rows keep the input order (date ascending, as the store returns them).
    pub fn build(records: &[WorkRecord]) -> Self {
        let mut report = Report::default();

        for r in records {
            report.total_actual += r.actual;
            report.total_goal += r.goal;

            report.rows.push(ReportRow {
                date: r.date,
                start: r.start_time,
                end: r.end_time,
                goal: r.goal,
                actual: r.actual,
                category: r.category.clone(),
                cumulative: report.total_actual,
            });

            report.chart.push(ChartPoint {
                date: r.date,
                actual: r.actual,
                goal: r.goal,
            });
        }

        report
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Worked minus planned hours over the whole report.
    pub fn balance(&self) -> f64 {
        self.total_actual - self.total_goal
    }
}
