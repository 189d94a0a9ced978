//! Order and item entities.

use std::num::NonZeroU32;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

use super::{ItemId, OrderId, OrderStatus, PhoneNumber};

/// A single line entry within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique across the whole store, not just within the owning order.
    pub id: ItemId,
    pub description: String,
    pub quantity: NonZeroU32,
    pub status: OrderStatus,
    /// Remote display image. Not owned by the order.
    pub image: Url,
}

/// A customer order owning an ordered list of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub phone_number: PhoneNumber,
    /// Independent of the item statuses.
    pub status: OrderStatus,
    pub created_at: NaiveDate,
    pub items: Vec<Item>,
}

impl Order {
    /// Find an item of this order by ID.
    #[must_use]
    pub fn item(&self, item_id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Mutable access to an item of this order by ID.
    pub fn item_mut(&mut self, item_id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Order {
        Order {
            id: OrderId::new(1),
            customer_name: "John Doe".to_string(),
            phone_number: PhoneNumber::new("123-456-7890"),
            status: OrderStatus::Pending,
            created_at: NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
            items: vec![Item {
                id: ItemId::new(1),
                description: "T-shirt".to_string(),
                quantity: NonZeroU32::new(2).unwrap(),
                status: OrderStatus::InProgress,
                image: Url::parse("https://images.example.com/t-shirt.jpg").unwrap(),
            }],
        }
    }

    #[test]
    fn test_item_lookup() {
        let order = sample();
        assert_eq!(order.item(ItemId::new(1)).unwrap().description, "T-shirt");
        assert!(order.item(ItemId::new(99)).is_none());
    }

    #[test]
    fn test_item_mut() {
        let mut order = sample();
        order.item_mut(ItemId::new(1)).unwrap().status = OrderStatus::Delivered;
        assert_eq!(order.items[0].status, OrderStatus::Delivered);
    }

    #[test]
    fn test_deserialize_from_seed_shape() {
        let json = r#"{
            "id": 2,
            "customer_name": "Jane Smith",
            "phone_number": "234-567-8901",
            "status": "In Progress",
            "created_at": "2023-04-02",
            "items": [
                {"id": 3, "description": "Dress", "quantity": 1, "status": "Completed",
                 "image": "https://images.example.com/dress.jpg"}
            ]
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::InProgress);
        assert_eq!(order.created_at.to_string(), "2023-04-02");
        assert_eq!(order.items[0].quantity.get(), 1);
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let json = r#"{"id": 1, "description": "Hat", "quantity": 0, "status": "Pending",
                       "image": "https://images.example.com/hat.jpg"}"#;
        assert!(serde_json::from_str::<Item>(json).is_err());
    }
}
