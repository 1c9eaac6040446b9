use crate::db::sqlite::AccountStorage;
use crate::handlers::{accounts, ui};
use axum::{
    Router,
    routing::{get, put},
};

#[derive(Clone)]
pub struct AppState {
    pub storage: AccountStorage,
}

impl AppState {
    pub fn new(storage: AccountStorage) -> Self {
        Self { storage }
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(accounts::health))
        .route("/ui", get(ui::dashboard))
        .route(
            "/accounts",
            get(accounts::list_accounts).post(accounts::create_account),
        )
        .route(
            "/accounts/{id}",
            put(accounts::update_account)
                .get(accounts::get_account)
                .delete(accounts::delete_account),
        )
        .with_state(state)
}
