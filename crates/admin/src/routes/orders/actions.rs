//! Order action handlers.
//!
//! Every handler performs one transition on the session and redirects back
//! to the orders page, which re-renders from the new state.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;
use url::Url;

use order_desk_core::{ItemId, OrderId, OrderStatus, PhoneNumber};

use crate::{
    error::AppError,
    services::{Confirm, DELETE_PROMPT, WorkingCopyChanges, order_notification},
    state::AppState,
};

use super::types::OrderRowView;

const ORDERS_PATH: &str = "/orders";

fn back_to_orders() -> Redirect {
    Redirect::to(ORDERS_PATH)
}

fn parse_status(raw: &str) -> Result<OrderStatus, AppError> {
    raw.parse::<OrderStatus>()
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

// =============================================================================
// Input Types
// =============================================================================

/// Edit form submission.
#[derive(Debug, Deserialize)]
pub struct EditOrderInput {
    /// Order the form was rendered for.
    pub id: OrderId,
    pub customer_name: String,
    pub phone_number: String,
    pub status: String,
}

/// Item status button submission.
#[derive(Debug, Deserialize)]
pub struct ItemStatusInput {
    pub status: String,
}

/// Delete confirmation submission.
#[derive(Debug, Deserialize)]
pub struct DeleteInput {
    /// `"yes"` when the user confirmed.
    pub confirm: Option<String>,
}

/// Image enlarge submission.
#[derive(Debug, Deserialize)]
pub struct EnlargeInput {
    pub image: String,
}

/// The answer given on the delete confirmation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormConfirmation {
    pub confirmed: bool,
}

impl From<&DeleteInput> for FormConfirmation {
    fn from(input: &DeleteInput) -> Self {
        Self {
            confirmed: input.confirm.as_deref() == Some("yes"),
        }
    }
}

impl Confirm for FormConfirmation {
    fn confirm(&self, _prompt: &str) -> bool {
        self.confirmed
    }
}

// =============================================================================
// Details Modal
// =============================================================================

/// Open the details modal.
#[instrument(skip(state))]
pub async fn view_details(State(state): State<AppState>, Path(id): Path<OrderId>) -> Redirect {
    state.desk_mut().await.view_details(id);
    back_to_orders()
}

/// Close the details modal.
#[instrument(skip(state))]
pub async fn close_details(State(state): State<AppState>) -> Redirect {
    state.desk_mut().await.close_details();
    back_to_orders()
}

/// Set the status of one item.
///
/// # Errors
///
/// Returns 400 if the status is not one of the known values; the store is
/// left untouched.
#[instrument(skip(state))]
pub async fn set_item_status(
    State(state): State<AppState>,
    Path((order_id, item_id)): Path<(OrderId, ItemId)>,
    Form(input): Form<ItemStatusInput>,
) -> Result<Redirect, AppError> {
    let status = parse_status(&input.status)?;
    state
        .desk_mut()
        .await
        .set_item_status(order_id, item_id, status);
    Ok(back_to_orders())
}

// =============================================================================
// Edit Modal
// =============================================================================

/// Open the edit modal on a copy of the order.
#[instrument(skip(state))]
pub async fn begin_edit(State(state): State<AppState>, Path(id): Path<OrderId>) -> Redirect {
    if !state.desk_mut().await.begin_edit(id) {
        tracing::warn!(order_id = %id, "Edit requested for unknown order");
    }
    back_to_orders()
}

/// Apply the edit form to the working copy and commit it.
///
/// A form rendered for a different order than the one now being edited
/// (a stale tab) is dropped without touching the working copy.
///
/// # Errors
///
/// Returns 400 if the status is not one of the known values; the working
/// copy stays open and the store is untouched.
#[instrument(skip(state))]
pub async fn save_edit(
    State(state): State<AppState>,
    Form(input): Form<EditOrderInput>,
) -> Result<Redirect, AppError> {
    let status = parse_status(&input.status)?;

    let mut desk = state.desk_mut().await;
    let editing = desk.selection().working_copy().map(|order| order.id);
    if editing != Some(input.id) {
        tracing::warn!(
            order_id = %input.id,
            editing = ?editing,
            "Edit form does not match the order being edited"
        );
        return Ok(back_to_orders());
    }

    desk.update_working_copy(WorkingCopyChanges {
        customer_name: Some(input.customer_name),
        phone_number: Some(PhoneNumber::new(input.phone_number)),
        status: Some(status),
    });
    desk.save();
    Ok(back_to_orders())
}

/// Close the edit modal without saving.
#[instrument(skip(state))]
pub async fn cancel_edit(State(state): State<AppState>) -> Redirect {
    state.desk_mut().await.cancel_edit();
    back_to_orders()
}

// =============================================================================
// Delete
// =============================================================================

/// Delete confirmation page.
#[derive(Template, WebTemplate)]
#[template(path = "orders/confirm_delete.html")]
pub struct ConfirmDeleteTemplate {
    pub order: OrderRowView,
    pub prompt: &'static str,
}

/// Ask before deleting an order.
#[instrument(skip(state))]
pub async fn confirm_delete(State(state): State<AppState>, Path(id): Path<OrderId>) -> Response {
    let order = state.desk().await.store().get(id).map(OrderRowView::from);
    match order {
        Some(order) => ConfirmDeleteTemplate {
            order,
            prompt: DELETE_PROMPT,
        }
        .into_response(),
        // Nothing left to confirm.
        None => back_to_orders().into_response(),
    }
}

/// Delete an order if the confirmation form said yes.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    Form(input): Form<DeleteInput>,
) -> Redirect {
    let confirmation = FormConfirmation::from(&input);
    if state.desk_mut().await.delete_order(id, &confirmation) {
        tracing::info!(order_id = %id, "Order deleted");
    }
    back_to_orders()
}

// =============================================================================
// Notification
// =============================================================================

/// Send the browser to the WhatsApp link for an order's status.
///
/// # Errors
///
/// Returns 404 if the order does not exist.
#[instrument(skip(state))]
pub async fn notify(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Redirect, AppError> {
    let link = {
        let desk = state.desk().await;
        let order = desk
            .store()
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;
        order_notification(order).map_err(|e| AppError::Internal(e.to_string()))?
    };

    tracing::info!(order_id = %id, "Opening WhatsApp notification");
    Ok(Redirect::to(link.as_str()))
}

// =============================================================================
// Enlarged Image
// =============================================================================

/// Show an item image full size.
///
/// # Errors
///
/// Returns 400 if the image reference is not a URL.
#[instrument(skip(state))]
pub async fn enlarge_image(
    State(state): State<AppState>,
    Form(input): Form<EnlargeInput>,
) -> Result<Redirect, AppError> {
    let image =
        Url::parse(&input.image).map_err(|e| AppError::BadRequest(format!("image: {e}")))?;
    state.desk_mut().await.enlarge(image);
    Ok(back_to_orders())
}

/// Hide the enlarged image.
#[instrument(skip(state))]
pub async fn dismiss_image(State(state): State<AppState>) -> Redirect {
    state.desk_mut().await.dismiss_image();
    back_to_orders()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_confirmation_requires_yes() {
        let yes = DeleteInput {
            confirm: Some("yes".to_string()),
        };
        let no = DeleteInput {
            confirm: Some("no".to_string()),
        };
        let missing = DeleteInput { confirm: None };

        assert!(FormConfirmation::from(&yes).confirm(DELETE_PROMPT));
        assert!(!FormConfirmation::from(&no).confirm(DELETE_PROMPT));
        assert!(!FormConfirmation::from(&missing).confirm(DELETE_PROMPT));
    }

    #[test]
    fn test_parse_status_rejects_unknown() {
        assert_eq!(parse_status("delivered").unwrap(), OrderStatus::Delivered);
        assert!(matches!(
            parse_status("Shipped"),
            Err(AppError::BadRequest(_))
        ));
    }
}
