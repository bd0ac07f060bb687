pub mod category;
pub mod record;
pub mod settings;
pub mod user;

pub use category::Category;
pub use record::WorkRecord;
pub use settings::WeeklySettings;
pub use user::User;
