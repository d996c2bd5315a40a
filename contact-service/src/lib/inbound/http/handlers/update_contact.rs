use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::create_contact::ContactData;
use super::create_contact::ContactRequestBody;
use super::ApiError;
use super::ApiJson;
use super::ApiPath;
use super::ApiSuccess;
use crate::domain::contact::models::ContactId;
use crate::domain::contact::ports::ContactServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn update_contact(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ApiPath(contact_id): ApiPath<String>,
    ApiJson(body): ApiJson<ContactRequestBody>,
) -> Result<ApiSuccess<ContactData>, ApiError> {
    let fields = body.try_into_fields()?;

    state
        .contact_service
        .update(&user, &ContactId::from_string(contact_id), fields)
        .await
        .map_err(ApiError::from)
        .map(|ref contact| ApiSuccess::new(StatusCode::OK, contact.into()))
}
