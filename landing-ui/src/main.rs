use dioxus_logger::tracing::error;

fn main() {
    if let Err(e) = landing_ui::start() {
        error!("Landing page runtime failed to start: {}", e);
    }
}
