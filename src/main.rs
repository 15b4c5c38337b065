//! rSmokelog main entrypoint.

use rsmokelog::run;
use rsmokelog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
