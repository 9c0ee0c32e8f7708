// Fri Oct 16 2026 - Alex

use subrecon::ui::{cli, terminal};

fn main() {
    if let Err(e) = cli::run() {
        terminal::print_error(&e);
    }
}
