use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::create_address::AddressData;
use super::create_address::AddressRequestBody;
use super::ApiError;
use super::ApiJson;
use super::ApiPath;
use super::ApiSuccess;
use crate::domain::address::models::AddressId;
use crate::domain::address::ports::AddressServicePort;
use crate::domain::contact::models::ContactId;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn update_address(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ApiPath((contact_id, address_id)): ApiPath<(String, String)>,
    ApiJson(body): ApiJson<AddressRequestBody>,
) -> Result<ApiSuccess<AddressData>, ApiError> {
    let fields = body.try_into_fields()?;

    state
        .address_service
        .update(
            &user,
            &ContactId::from_string(contact_id),
            &AddressId::from_string(address_id),
            fields,
        )
        .await
        .map_err(|e| ApiError::from(e).lookup_as_bad_request())
        .map(|ref address| ApiSuccess::new(StatusCode::OK, address.into()))
}
