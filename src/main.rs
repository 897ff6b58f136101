//! siteops main entrypoint.

use siteops::run;
use siteops::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(&e);
        std::process::exit(1);
    }
}
