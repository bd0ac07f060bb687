pub mod clock;
pub mod recorder;
pub mod report;
pub mod session;
pub mod settings;
pub mod share;
