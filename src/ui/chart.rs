//! Grouped horizontal bar chart of actual vs. goal hours per record.

use crate::core::report::ChartPoint;
use ansi_term::Colour;

const ACTUAL_BAR: char = '█';
const GOAL_BAR: char = '░';

fn bar_len(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max) * width as f64).round() as usize
}

/// Two bars per point (actual, then goal), all scaled against the largest
/// value so that `width` cells represent it.
pub fn render_chart(points: &[ChartPoint], width: usize, color: bool) -> String {
    if points.is_empty() {
        return String::new();
    }

    let width = width.max(1);
    let max = points
        .iter()
        .flat_map(|p| [p.actual, p.goal])
        .fold(0.0_f64, f64::max);

    let mut out = String::new();
    out.push_str(&format!(
        "{:<10}  {} actual   {} goal\n",
        "",
        paint(&ACTUAL_BAR.to_string(), Colour::Blue, color),
        paint(&GOAL_BAR.to_string(), Colour::Yellow, color)
    ));

    for p in points {
        let date = p.date.format("%Y-%m-%d").to_string();

        let actual = ACTUAL_BAR.to_string().repeat(bar_len(p.actual, max, width));
        let goal = GOAL_BAR.to_string().repeat(bar_len(p.goal, max, width));

        out.push_str(&format!(
            "{:<10}  {:>6.2} {}\n",
            date,
            p.actual,
            paint(&actual, Colour::Blue, color)
        ));
        out.push_str(&format!(
            "{:<10}  {:>6.2} {}\n",
            "",
            p.goal,
            paint(&goal, Colour::Yellow, color)
        ));
    }

    out
}

fn paint(s: &str, colour: Colour, color: bool) -> String {
    if color && !s.is_empty() {
        colour.paint(s).to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(day: u32, actual: f64, goal: f64) -> ChartPoint {
        ChartPoint {
            date: NaiveDate::from_ymd_opt(2025, 9, day).unwrap(),
            actual,
            goal,
        }
    }

    #[test]
    fn bars_scale_to_the_largest_value() {
        let out = render_chart(&[point(1, 10.0, 8.0), point(2, 0.0, 4.0)], 20, false);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("2025-09-01"));
        assert_eq!(lines[1].matches(ACTUAL_BAR).count(), 20);
        assert_eq!(lines[2].matches(GOAL_BAR).count(), 16);
        assert_eq!(lines[3].matches(ACTUAL_BAR).count(), 0);
        assert_eq!(lines[4].matches(GOAL_BAR).count(), 8);
    }

    #[test]
    fn all_zero_values_draw_no_bars() {
        let out = render_chart(&[point(1, 0.0, 0.0)], 20, false);
        assert!(!out.lines().skip(1).any(|l| l.contains(ACTUAL_BAR) || l.contains(GOAL_BAR)));
    }
}
