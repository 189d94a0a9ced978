//! WhatsApp deep links for customer notifications.
//!
//! The link is handed to the browser, which opens it in a new tab. Nothing is
//! sent from the server.

use url::Url;

use order_desk_core::{Order, PhoneNumber};

const WHATSAPP_BASE: &str = "https://wa.me";

/// Build a `wa.me` link for `phone` with `message` pre-filled.
///
/// The phone number is reduced to its digits; no plausibility check is made,
/// so a number without digits yields `https://wa.me/?text=...`.
///
/// # Errors
///
/// Returns an error only if the assembled link is not a valid URL, which
/// cannot happen for digit-only paths and percent-encoded queries.
pub fn compose_notification(phone: &PhoneNumber, message: &str) -> Result<Url, url::ParseError> {
    let link = format!(
        "{WHATSAPP_BASE}/{}?text={}",
        phone.digits(),
        urlencoding::encode(message)
    );
    Url::parse(&link)
}

/// Status message sent for an order.
#[must_use]
pub fn notification_message(order: &Order) -> String {
    format!("Order #{} Status: {}", order.id, order.status)
}

/// Link notifying the customer of an order's status.
///
/// # Errors
///
/// See [`compose_notification`].
pub fn order_notification(order: &Order) -> Result<Url, url::ParseError> {
    compose_notification(&order.phone_number, &notification_message(order))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_orders;

    #[test]
    fn test_link_strips_non_digits_and_encodes_message() {
        let link = compose_notification(
            &PhoneNumber::new("123-456-7890"),
            "Order #1 Status: Pending",
        )
        .unwrap();

        assert_eq!(
            link.as_str(),
            "https://wa.me/1234567890?text=Order%20%231%20Status%3A%20Pending"
        );
    }

    #[test]
    fn test_malformed_phone_still_builds_link() {
        let link = compose_notification(&PhoneNumber::new("n/a"), "hi").unwrap();
        assert_eq!(link.as_str(), "https://wa.me/?text=hi");
    }

    #[test]
    fn test_order_message_uses_status_label() {
        let orders = demo_orders().unwrap();
        assert_eq!(
            notification_message(&orders[1]),
            "Order #2 Status: In Progress"
        );
        assert_eq!(
            order_notification(&orders[1]).unwrap().as_str(),
            "https://wa.me/2345678901?text=Order%20%232%20Status%3A%20In%20Progress"
        );
    }
}
