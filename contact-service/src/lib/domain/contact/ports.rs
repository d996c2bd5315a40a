use async_trait::async_trait;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactFields;
use crate::domain::contact::models::ContactId;
use crate::domain::contact::models::ContactPage;
use crate::domain::contact::models::ContactSearch;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;

/// Port for contact operations, always scoped to the authenticated user.
#[async_trait]
pub trait ContactServicePort: Send + Sync + 'static {
    /// Create a contact owned by `user`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: &User, fields: ContactFields) -> Result<Contact, ContactError>;

    /// Fetch one of the user's contacts.
    ///
    /// # Errors
    /// * `NotFound` - Contact absent or owned by another user
    async fn get(&self, user: &User, id: &ContactId) -> Result<Contact, ContactError>;

    /// Replace all mutable fields of one of the user's contacts.
    ///
    /// # Errors
    /// * `NotFound` - Contact absent or owned by another user
    async fn update(
        &self,
        user: &User,
        id: &ContactId,
        fields: ContactFields,
    ) -> Result<Contact, ContactError>;

    /// Delete one of the user's contacts together with its addresses.
    ///
    /// # Errors
    /// * `NotFound` - Contact absent or owned by another user
    async fn remove(&self, user: &User, id: &ContactId) -> Result<(), ContactError>;

    /// Search the user's contacts.
    ///
    /// # Returns
    /// Requested page plus paging totals
    async fn search(&self, user: &User, search: ContactSearch)
        -> Result<ContactPage, ContactError>;
}

/// Persistence operations for contacts. Every lookup is keyed by owner.
#[async_trait]
pub trait ContactRepository: Send + Sync + 'static {
    async fn create(&self, contact: Contact) -> Result<Contact, ContactError>;

    /// Retrieve a contact only if `owner` owns it.
    async fn find_owned(
        &self,
        owner: &Username,
        id: &ContactId,
    ) -> Result<Option<Contact>, ContactError>;

    /// Overwrite a contact, matching on both id and owner.
    ///
    /// # Errors
    /// * `NotFound` - No row matched id and owner
    async fn update(&self, contact: Contact) -> Result<Contact, ContactError>;

    /// Delete a contact, matching on both id and owner.
    ///
    /// # Errors
    /// * `NotFound` - No row matched id and owner
    async fn delete(&self, owner: &Username, id: &ContactId) -> Result<(), ContactError>;

    /// Page of matching contacts plus the total number of matches.
    async fn search(
        &self,
        owner: &Username,
        search: &ContactSearch,
    ) -> Result<(Vec<Contact>, u64), ContactError>;
}
