//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `projdesk_core` linkage without the Flutter shell.
//! - Echo how each argument is read as a date, e.g.
//!   `projdesk_cli 20240301 "2024/02/29 10:00:00"`.

use projdesk_core::DateValue;

const DISPLAY_PATTERN: &str = "Y/m/d(W) H:i:s";

fn main() {
    println!("projdesk_core ping={}", projdesk_core::ping());
    println!("projdesk_core version={}", projdesk_core::core_version());
    println!("now={}", DateValue::now().format(DISPLAY_PATTERN));

    for arg in std::env::args().skip(1) {
        match DateValue::try_parse(&arg) {
            Ok(value) => println!(
                "{arg} => {} (month {} .. {})",
                value.format(DISPLAY_PATTERN),
                value.first_of_month().format("Y/m/d"),
                value.last_of_month().format("Y/m/d")
            ),
            Err(err) => println!("{arg} => {err}; falls back to now"),
        }
    }
}
