//! rTimeRecorder main entrypoint.

use rtimerecorder::run;
use rtimerecorder::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
