//! Drives the status window controller without a compositor.
//!
//! There is no real window here, so the status block never gets a provider
//! handle and the raise degrades to a traced no-op; run with
//! `RUST_LOG=debug` to watch the flow. In a real embedding the hosting
//! framework supplies the resolver when it realizes the control.

use herald::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut window = StatusWindow::new(AutomationBinding::platform());
    window.attach_automation(Box::new(|| None));

    println!("status before click: {:?}", window.status_block().text());

    // Simulate the user pressing the raise button.
    window.raise_button().click();
    window.notify_button_clicked();

    println!("status after click:  {:?}", window.status_block().text());
    println!(
        "raise button enabled: {}, focus on next button: {}",
        window.raise_button().is_enabled(),
        window.focus().has_focus(window.next_button().id()),
    );
}
