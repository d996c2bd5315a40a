use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::create_contact::ContactData;
use super::ApiError;
use super::ApiPath;
use super::ApiSuccess;
use crate::domain::contact::models::ContactId;
use crate::domain::contact::ports::ContactServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn get_contact(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ApiPath(contact_id): ApiPath<String>,
) -> Result<ApiSuccess<ContactData>, ApiError> {
    state
        .contact_service
        .get(&user, &ContactId::from_string(contact_id))
        .await
        .map_err(ApiError::from)
        .map(|ref contact| ApiSuccess::new(StatusCode::OK, contact.into()))
}
