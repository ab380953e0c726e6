//! `aaou header` – print the AGS script header.

use aaou_core::script_header::SCRIPT_HEADER;

pub fn run_header() {
    print!("{}", SCRIPT_HEADER.to_string_lossy());
}
