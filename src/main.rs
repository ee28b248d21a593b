//! spawnboard main entrypoint.

use spawnboard::errors::AppError;
use spawnboard::run;

fn main() {
    if let Err(e) = run() {
        // Blank reports were already rejected with a localized message.
        if !matches!(e, AppError::EmptyInput) {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}
