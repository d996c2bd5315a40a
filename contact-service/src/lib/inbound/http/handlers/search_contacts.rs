use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::create_contact::ContactData;
use super::ApiError;
use super::ApiQuery;
use super::ApiSuccess;
use super::PagingData;
use crate::domain::contact::models::ContactPage;
use crate::domain::contact::models::ContactSearch;
use crate::domain::contact::ports::ContactServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn search_contacts(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ApiQuery(params): ApiQuery<SearchContactsParams>,
) -> Result<ApiSuccess<Vec<ContactData>>, ApiError> {
    let search = ContactSearch::new(
        params.name,
        params.email,
        params.phone,
        params.page,
        params.size,
    )?;

    let page = state
        .contact_service
        .search(&user, search)
        .await
        .map_err(ApiError::from)?;

    let paging = PagingData::from(&page);
    let contacts = page.contacts.iter().map(ContactData::from).collect();

    Ok(ApiSuccess::with_paging(StatusCode::OK, contacts, paging))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchContactsParams {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    page: Option<u32>,
    size: Option<u32>,
}

impl From<&ContactPage> for PagingData {
    fn from(page: &ContactPage) -> Self {
        Self {
            current_page: page.page,
            total_page: page.total_pages,
            size: page.size,
        }
    }
}
