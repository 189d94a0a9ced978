//! View types for the orders page.
//!
//! Everything here is derived from the current store and selection on each
//! render and thrown away afterwards. Badge classes in particular are never
//! stored.

use order_desk_core::{AdminRole, Item, Order, OrderStatus};

use crate::config::NavigationConfig;
use crate::services::OrderDesk;

// =============================================================================
// Status Views
// =============================================================================

/// A status badge: label plus style token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadgeView {
    pub label: String,
    pub class: String,
}

impl From<OrderStatus> for StatusBadgeView {
    fn from(status: OrderStatus) -> Self {
        Self {
            label: status.label().to_string(),
            class: status.badge_class().to_string(),
        }
    }
}

/// One option of the status `<select>` in the edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusOptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Build the status options with `current` selected.
#[must_use]
pub fn status_options(current: OrderStatus) -> Vec<StatusOptionView> {
    OrderStatus::ALL
        .into_iter()
        .map(|status| StatusOptionView {
            value: status.as_param().to_string(),
            label: status.label().to_string(),
            selected: status == current,
        })
        .collect()
}

/// A button in the details modal that sets an item's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemStatusAction {
    pub status: OrderStatus,
    pub title: &'static str,
    pub icon: &'static str,
    pub button_class: &'static str,
}

impl ItemStatusAction {
    /// Form value submitted by this button.
    #[must_use]
    pub const fn value(&self) -> &'static str {
        self.status.as_param()
    }
}

/// Item status buttons, in the order they appear.
pub const ITEM_STATUS_ACTIONS: [ItemStatusAction; 4] = [
    ItemStatusAction {
        status: OrderStatus::InProgress,
        title: "Start",
        icon: "▶",
        button_class: "bg-blue-500 hover:bg-blue-700",
    },
    ItemStatusAction {
        status: OrderStatus::Pending,
        title: "Pause",
        icon: "⏸",
        button_class: "bg-yellow-500 hover:bg-yellow-700",
    },
    ItemStatusAction {
        status: OrderStatus::Completed,
        title: "Complete",
        icon: "✓",
        button_class: "bg-green-500 hover:bg-green-700",
    },
    ItemStatusAction {
        status: OrderStatus::Delivered,
        title: "Deliver",
        icon: "📦",
        button_class: "bg-purple-500 hover:bg-purple-700",
    },
];

// =============================================================================
// Order Views
// =============================================================================

/// Item row, used both in the list and in the details modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: i32,
    pub description: String,
    pub quantity: u32,
    pub image: String,
    pub status: StatusBadgeView,
}

impl From<&Item> for ItemView {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.as_i32(),
            description: item.description.clone(),
            quantity: item.quantity.get(),
            image: item.image.to_string(),
            status: StatusBadgeView::from(item.status),
        }
    }
}

/// Order row in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRowView {
    pub id: i32,
    pub customer_name: String,
    pub phone_number: String,
    pub status: StatusBadgeView,
    pub items: Vec<ItemView>,
}

impl From<&Order> for OrderRowView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.as_i32(),
            customer_name: order.customer_name.clone(),
            phone_number: order.phone_number.to_string(),
            status: StatusBadgeView::from(order.status),
            items: order.items.iter().map(ItemView::from).collect(),
        }
    }
}

/// Contents of the details modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetailView {
    pub id: i32,
    pub customer_name: String,
    pub phone_number: String,
    pub status: String,
    pub created_at: String,
    pub items: Vec<ItemView>,
}

impl From<&Order> for OrderDetailView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.as_i32(),
            customer_name: order.customer_name.clone(),
            phone_number: order.phone_number.to_string(),
            status: order.status.label().to_string(),
            created_at: order.created_at.format("%Y-%m-%d").to_string(),
            items: order.items.iter().map(ItemView::from).collect(),
        }
    }
}

/// Contents of the edit modal, taken from the working copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditFormView {
    pub id: i32,
    pub customer_name: String,
    pub phone_number: String,
    pub status_options: Vec<StatusOptionView>,
}

impl From<&Order> for EditFormView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.as_i32(),
            customer_name: order.customer_name.clone(),
            phone_number: order.phone_number.to_string(),
            status_options: status_options(order.status),
        }
    }
}

/// Everything the orders page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdersPageView {
    /// Whether the "New Order" button is shown.
    pub can_create_orders: bool,
    pub dashboard_url: String,
    pub new_order_url: String,
    pub orders: Vec<OrderRowView>,
    pub detail: Option<OrderDetailView>,
    pub edit: Option<EditFormView>,
    pub enlarged_image: Option<String>,
}

impl OrdersPageView {
    /// Project the session into page data for a viewer with `role`.
    #[must_use]
    pub fn build(desk: &OrderDesk, role: Option<AdminRole>, navigation: &NavigationConfig) -> Self {
        let selection = desk.selection();
        Self {
            can_create_orders: role.is_some_and(AdminRole::can_create_orders),
            dashboard_url: navigation.dashboard_url.clone(),
            new_order_url: navigation.new_order_url.clone(),
            orders: desk.store().list().iter().map(OrderRowView::from).collect(),
            detail: desk.detail_order().map(OrderDetailView::from),
            edit: selection.working_copy().map(EditFormView::from),
            enlarged_image: selection.enlarged_image().map(ToString::to_string),
        }
    }
}
