use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::address::errors::AddressError;
use crate::domain::address::models::Address;
use crate::domain::address::models::AddressFields;
use crate::domain::address::models::AddressId;
use crate::domain::address::ports::AddressRepository;
use crate::domain::address::ports::AddressServicePort;
use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactId;
use crate::domain::contact::ports::ContactRepository;
use crate::domain::user::models::User;

/// Domain service implementation for address operations.
///
/// Walks the ownership chain explicitly: the contact is resolved under the
/// user first, then the address under that contact.
pub struct AddressService<CR, AR>
where
    CR: ContactRepository,
    AR: AddressRepository,
{
    contacts: Arc<CR>,
    addresses: Arc<AR>,
}

impl<CR, AR> AddressService<CR, AR>
where
    CR: ContactRepository,
    AR: AddressRepository,
{
    pub fn new(contacts: Arc<CR>, addresses: Arc<AR>) -> Self {
        Self {
            contacts,
            addresses,
        }
    }

    async fn owned_contact(
        &self,
        user: &User,
        contact_id: &ContactId,
    ) -> Result<Contact, AddressError> {
        self.contacts
            .find_owned(&user.username, contact_id)
            .await?
            .ok_or_else(|| AddressError::ContactNotFound(contact_id.to_string()))
    }

    async fn owned_address(
        &self,
        user: &User,
        contact_id: &ContactId,
        id: &AddressId,
    ) -> Result<Address, AddressError> {
        let contact = self.owned_contact(user, contact_id).await?;

        self.addresses
            .find_in_contact(&contact.id, id)
            .await?
            .ok_or_else(|| AddressError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl<CR, AR> AddressServicePort for AddressService<CR, AR>
where
    CR: ContactRepository,
    AR: AddressRepository,
{
    async fn create(
        &self,
        user: &User,
        contact_id: &ContactId,
        fields: AddressFields,
    ) -> Result<Address, AddressError> {
        let contact = self.owned_contact(user, contact_id).await?;

        let address = Address::new(contact.id, fields);
        let created = self.addresses.create(&user.username, address).await?;

        tracing::info!(
            username = %user.username,
            contact_id = %created.contact_id,
            address_id = %created.id,
            "Address created"
        );
        Ok(created)
    }

    async fn get(
        &self,
        user: &User,
        contact_id: &ContactId,
        id: &AddressId,
    ) -> Result<Address, AddressError> {
        self.owned_address(user, contact_id, id).await
    }

    async fn update(
        &self,
        user: &User,
        contact_id: &ContactId,
        id: &AddressId,
        fields: AddressFields,
    ) -> Result<Address, AddressError> {
        let mut address = self.owned_address(user, contact_id, id).await?;
        address.apply(fields);

        self.addresses.update(address).await
    }

    async fn remove(
        &self,
        user: &User,
        contact_id: &ContactId,
        id: &AddressId,
    ) -> Result<(), AddressError> {
        let address = self.owned_address(user, contact_id, id).await?;
        self.addresses
            .delete(&address.contact_id, &address.id)
            .await?;

        tracing::info!(username = %user.username, address_id = %id, "Address removed");
        Ok(())
    }

    async fn list(
        &self,
        user: &User,
        contact_id: &ContactId,
    ) -> Result<Vec<Address>, AddressError> {
        let contact = self.owned_contact(user, contact_id).await?;
        self.addresses.list_by_contact(&contact.id).await
    }
}
