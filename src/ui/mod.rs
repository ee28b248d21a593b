pub mod board;
pub mod i18n;
pub mod messages;
