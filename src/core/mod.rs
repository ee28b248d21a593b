pub mod clock;
pub mod config;
pub mod disclosure;
pub mod log;
pub mod report;
pub mod resolver;
pub mod session;
pub mod ticker;
