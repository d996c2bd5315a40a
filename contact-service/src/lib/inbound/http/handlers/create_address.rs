use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiJson;
use super::ApiPath;
use super::ApiSuccess;
use crate::domain::address::models::Address;
use crate::domain::address::models::AddressFields;
use crate::domain::address::ports::AddressServicePort;
use crate::domain::contact::models::ContactId;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn create_address(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ApiPath(contact_id): ApiPath<String>,
    ApiJson(body): ApiJson<AddressRequestBody>,
) -> Result<ApiSuccess<AddressData>, ApiError> {
    let fields = body.try_into_fields()?;

    state
        .address_service
        .create(&user, &ContactId::from_string(contact_id), fields)
        .await
        .map_err(ApiError::from)
        .map(|ref address| ApiSuccess::new(StatusCode::OK, address.into()))
}

/// Address fields as sent on create and update (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequestBody {
    street: Option<String>,
    city: Option<String>,
    province: Option<String>,
    country: Option<String>,
    postal_code: Option<String>,
}

impl AddressRequestBody {
    pub fn try_into_fields(self) -> Result<AddressFields, ApiError> {
        Ok(AddressFields::new(
            self.street,
            self.city,
            self.province,
            self.country,
            self.postal_code,
        )?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressData {
    pub id: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: String,
    pub postal_code: Option<String>,
}

impl From<&Address> for AddressData {
    fn from(address: &Address) -> Self {
        Self {
            id: address.id.to_string(),
            street: address.street.clone(),
            city: address.city.clone(),
            province: address.province.clone(),
            country: address.country.clone(),
            postal_code: address.postal_code.clone(),
        }
    }
}
