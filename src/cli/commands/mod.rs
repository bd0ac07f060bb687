pub mod auth;
pub mod config;
pub mod entry;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod reset;
pub mod settings;
pub mod timer;
