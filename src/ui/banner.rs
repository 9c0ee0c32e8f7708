// Fri Oct 16 2026 - Alex

use colored::*;

pub struct Banner;

impl Banner {
    pub fn print() {
        println!("{}", Self::render());
    }

    pub fn render() -> String {
        let title = format!("SubRecon v{}", env!("CARGO_PKG_VERSION"));
        let width = title.len() + 8;
        let line = "=".repeat(width);

        format!(
            "{}\n{}{}\n{}\n{}",
            line.cyan(),
            " ".repeat(4),
            title.cyan().bold(),
            line.cyan(),
            "Subdomain Scanner - https://github.com/xReverselabs/SubRecon".dimmed()
        )
    }
}
