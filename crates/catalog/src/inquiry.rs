//! WhatsApp inquiry links.

use crate::Tour;
use tour_core::config::ContactConfig;

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Fill the message template for a tour.
///
/// `{name}` and `{price}` are replaced; anything else is kept as is.
pub fn inquiry_message(template: &str, tour: &Tour) -> String {
    template
        .replace("{name}", &tour.name)
        .replace("{price}", &tour.price)
}

/// Deep link that opens a WhatsApp chat with the inquiry message prefilled.
pub fn inquiry_link(contact: &ContactConfig, tour: &Tour) -> String {
    let message = inquiry_message(&contact.message_template, tour);
    format!(
        "{}{}?text={}",
        WHATSAPP_BASE,
        contact.phone,
        urlencoding::encode(&message)
    )
}
