use async_trait::async_trait;

use crate::domain::address::errors::AddressError;
use crate::domain::address::models::Address;
use crate::domain::address::models::AddressFields;
use crate::domain::address::models::AddressId;
use crate::domain::contact::models::ContactId;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;

/// Port for address operations.
///
/// Every call first resolves the contact within the user's scope, so an
/// address under someone else's contact is reported as missing.
#[async_trait]
pub trait AddressServicePort: Send + Sync + 'static {
    /// # Errors
    /// * `ContactNotFound` - Contact absent or owned by another user
    async fn create(
        &self,
        user: &User,
        contact_id: &ContactId,
        fields: AddressFields,
    ) -> Result<Address, AddressError>;

    /// # Errors
    /// * `ContactNotFound` - Contact absent or owned by another user
    /// * `NotFound` - No such address under the contact
    async fn get(
        &self,
        user: &User,
        contact_id: &ContactId,
        id: &AddressId,
    ) -> Result<Address, AddressError>;

    /// Replace all mutable fields of an address.
    async fn update(
        &self,
        user: &User,
        contact_id: &ContactId,
        id: &AddressId,
        fields: AddressFields,
    ) -> Result<Address, AddressError>;

    async fn remove(
        &self,
        user: &User,
        contact_id: &ContactId,
        id: &AddressId,
    ) -> Result<(), AddressError>;

    /// All addresses of the contact, oldest first.
    async fn list(&self, user: &User, contact_id: &ContactId)
        -> Result<Vec<Address>, AddressError>;
}

/// Persistence operations for addresses. Lookups are keyed by contact.
#[async_trait]
pub trait AddressRepository: Send + Sync + 'static {
    /// Insert an address after re-checking, in the same transaction, that
    /// `owner` still owns the parent contact.
    ///
    /// # Errors
    /// * `ContactNotFound` - Contact vanished or changed hands
    async fn create(&self, owner: &Username, address: Address) -> Result<Address, AddressError>;

    async fn find_in_contact(
        &self,
        contact_id: &ContactId,
        id: &AddressId,
    ) -> Result<Option<Address>, AddressError>;

    /// # Errors
    /// * `NotFound` - No row matched id and contact
    async fn update(&self, address: Address) -> Result<Address, AddressError>;

    /// # Errors
    /// * `NotFound` - No row matched id and contact
    async fn delete(&self, contact_id: &ContactId, id: &AddressId) -> Result<(), AddressError>;

    async fn list_by_contact(&self, contact_id: &ContactId) -> Result<Vec<Address>, AddressError>;
}
