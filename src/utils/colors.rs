/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const DIM: &str = "\x1b[2m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Clear the terminal and move the cursor home.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Grey for placeholders and entries that are not the live one.
pub fn grey(value: &str) -> String {
    paint(GREY, value)
}

/// Stale entries are dimmed; live ones are bold.
pub fn for_current(value: &str, is_stale: bool) -> String {
    if is_stale {
        paint(DIM, value)
    } else {
        format!("{BOLD}{value}{RESET}")
    }
}
