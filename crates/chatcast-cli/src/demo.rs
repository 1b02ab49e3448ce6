//! Built-in demonstration: one message of each kind, five destinations.

use chrono::NaiveDateTime;

use chatcast_core::{Channel, Message, Scenario};

/// The sample scenario, every message stamped with `sent_at`.
pub fn sample_scenario(sent_at: NaiveDateTime) -> Scenario {
    let text = Message::text("Hello, all good?", sent_at);
    let video = Message::video("Check our new product!", "product.mp4", "mp4", 120, sent_at);
    let photo = Message::photo("Look at this landscape", "landscape.jpg", "jpg", sent_at);
    let file = Message::file("Important document", "contract.pdf", "pdf", sent_at);

    let whatsapp = Channel::whatsapp("+5511999999999");
    let telegram_number = Channel::telegram("+5511888888888", true);
    let telegram_user = Channel::telegram("@pedro_silva", false);
    let facebook = Channel::facebook("pedro.silva");
    let instagram = Channel::instagram("@pedro.silva.photo");

    Scenario::new()
        .with(whatsapp, text.clone())
        .with(telegram_number, video)
        .with(telegram_user, photo)
        .with(facebook, file)
        .with(instagram, text)
}
