//! Minimal Cirrus bootstrap: one window, one label, one notifier.

use cirrus_sdk::prelude::*;

fn on_event(sender: Uid, kind: EventKind, info1: u64, info2: u64) {
    tracing::info!(%sender, ?kind, info1, info2, "ui event");
}

fn main() -> Result<()> {
    cirrus_sdk::init_all()?;

    let mut app = ApplicationBuilder::new()
        .title("Hello, Cirrus")
        .build()
        .map_err(|e| CoreError::other(e.to_string()))?;

    let notifier = StaticEventNotifier::new(Some(on_event))?;
    app.notifiers_mut().register(Box::new(notifier));

    let uids = app.uids();
    let label = Label::new(&uids, "Hello, world!")?.align(TextAlign::Center);
    app.widgets_mut().insert(Box::new(label))?;

    app.run().map_err(|e| CoreError::other(e.to_string()))
}
