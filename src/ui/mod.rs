pub mod chart;
pub mod log_view;
pub mod messages;
pub mod prompt;
pub mod report_view;
