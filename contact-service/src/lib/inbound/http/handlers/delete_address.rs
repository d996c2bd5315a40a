use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiPath;
use super::ApiSuccess;
use crate::domain::address::models::AddressId;
use crate::domain::address::ports::AddressServicePort;
use crate::domain::contact::models::ContactId;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn delete_address(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ApiPath((contact_id, address_id)): ApiPath<(String, String)>,
) -> Result<ApiSuccess<&'static str>, ApiError> {
    state
        .address_service
        .remove(
            &user,
            &ContactId::from_string(contact_id),
            &AddressId::from_string(address_id),
        )
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, "ok"))
}
