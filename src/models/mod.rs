pub mod report;
pub mod schedule;
pub mod server;
pub mod task_type;
