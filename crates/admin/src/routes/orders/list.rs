//! Orders page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::{middleware::CurrentRole, state::AppState};

use super::types::{ITEM_STATUS_ACTIONS, ItemStatusAction, OrdersPageView};

/// Orders page template: the list plus whichever modals are open.
#[derive(Template, WebTemplate)]
#[template(path = "orders/index.html")]
pub struct OrdersIndexTemplate {
    pub page: OrdersPageView,
    /// Status buttons offered per item in the details modal.
    pub item_actions: Vec<ItemStatusAction>,
}

/// Orders page handler.
#[instrument(skip(state))]
pub async fn index(CurrentRole(role): CurrentRole, State(state): State<AppState>) -> impl IntoResponse {
    let page = {
        let desk = state.desk().await;
        OrdersPageView::build(&desk, role, &state.config().navigation)
    };

    OrdersIndexTemplate {
        page,
        item_actions: ITEM_STATUS_ACTIONS.to_vec(),
    }
}
