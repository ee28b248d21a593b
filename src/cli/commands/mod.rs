pub mod config;
pub mod init;
pub mod log;
pub mod report;
pub mod reports;
pub mod show;
pub mod watch;
