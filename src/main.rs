//! rTimecast main entrypoint.

use rtimecast::run;
use rtimecast::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
