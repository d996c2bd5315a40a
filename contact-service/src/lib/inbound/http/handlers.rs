use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::extract::rejection::QueryRejection;
use axum::extract::FromRequest;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::address::errors::AddressError;
use crate::domain::auth::errors::AuthError;
use crate::domain::contact::errors::ContactError;
use crate::domain::user::errors::UserError;
use crate::domain::validation::ValidationErrors;

pub mod create_address;
pub mod create_contact;
pub mod delete_address;
pub mod delete_contact;
pub mod get_address;
pub mod get_contact;
pub mod get_current_user;
pub mod list_addresses;
pub mod login;
pub mod logout;
pub mod register_user;
pub mod search_contacts;
pub mod update_address;
pub mod update_contact;
pub mod update_current_user;

/// JSON body extractor whose rejections use the error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path parameter extractor whose rejections use the error envelope.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// Query string extractor whose rejections use the error envelope.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(data)))
    }

    pub fn with_paging(status: StatusCode, data: T, paging: PagingData) -> Self {
        ApiSuccess(
            status,
            Json(ApiResponseBody {
                data,
                paging: Some(paging),
            }),
        )
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    InvalidInput(BTreeMap<String, String>),
    NotFound(String),
    Unauthorized(String),
}

impl ApiError {
    /// Report a missing contact or address as a bad request instead of 404.
    ///
    /// Existing clients of the single-address read and update routes expect
    /// 400 for these lookups.
    pub fn lookup_as_bad_request(self) -> Self {
        match self {
            ApiError::NotFound(msg) => ApiError::BadRequest(msg),
            other => other,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, errors) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorData::Message("Internal server error".to_string()),
                )
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiErrorData::Message(msg)),
            ApiError::InvalidInput(fields) => {
                (StatusCode::BAD_REQUEST, ApiErrorData::Fields(fields))
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiErrorData::Message(msg)),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, ApiErrorData::Message(msg)),
        };

        (status, Json(ApiErrorBody { errors })).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::InvalidInput(errors.into_fields())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidInput(errors) => errors.into(),
            UserError::UsernameAlreadyExists(_) => ApiError::BadRequest(err.to_string()),
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::Password(_) | UserError::DatabaseError(_) | UserError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidInput(errors) => errors.into(),
            AuthError::Unauthenticated(msg) => ApiError::Unauthorized(msg.to_string()),
            AuthError::Credentials(_) | AuthError::DatabaseError(_) | AuthError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<ContactError> for ApiError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::InvalidInput(errors) => errors.into(),
            ContactError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ContactError::DatabaseError(_) | ContactError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<AddressError> for ApiError {
    fn from(err: AddressError) -> Self {
        match err {
            AddressError::InvalidInput(errors) => errors.into(),
            AddressError::ContactNotFound(_) | AddressError::NotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            AddressError::DatabaseError(_) | AddressError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    paging: Option<PagingData>,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(data: T) -> Self {
        Self { data, paging: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingData {
    pub current_page: u32,
    pub total_page: u32,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub errors: ApiErrorData,
}

/// A plain message, or field name to message for validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ApiErrorData {
    Message(String),
    Fields(BTreeMap<String, String>),
}
