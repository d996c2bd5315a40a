use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::create_address::AddressData;
use super::ApiError;
use super::ApiPath;
use super::ApiSuccess;
use crate::domain::address::ports::AddressServicePort;
use crate::domain::contact::models::ContactId;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn list_addresses(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ApiPath(contact_id): ApiPath<String>,
) -> Result<ApiSuccess<Vec<AddressData>>, ApiError> {
    state
        .address_service
        .list(&user, &ContactId::from_string(contact_id))
        .await
        .map_err(ApiError::from)
        .map(|addresses| {
            ApiSuccess::new(
                StatusCode::OK,
                addresses.iter().map(AddressData::from).collect(),
            )
        })
}
