// Mon Oct 19 2026 - Alex

use release_context::ui::cli::{parse_args, CommandHandler};
use release_context::ui::errors::ErrorDisplay;

fn main() {
    let args = parse_args();

    let display = if args.no_color {
        ErrorDisplay::new().without_colors()
    } else {
        ErrorDisplay::new()
    };

    let handler = CommandHandler::with_display(display.clone());
    if let Err(e) = handler.execute(args) {
        display.print(&*e);
        std::process::exit(1);
    }
}
