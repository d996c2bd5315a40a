use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactFields;
use crate::domain::contact::models::ContactId;
use crate::domain::contact::models::ContactPage;
use crate::domain::contact::models::ContactSearch;
use crate::domain::contact::ports::ContactRepository;
use crate::domain::contact::ports::ContactServicePort;
use crate::domain::user::models::User;

/// Domain service implementation for contact operations.
pub struct ContactService<CR>
where
    CR: ContactRepository,
{
    repository: Arc<CR>,
}

impl<CR> ContactService<CR>
where
    CR: ContactRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> ContactServicePort for ContactService<CR>
where
    CR: ContactRepository,
{
    async fn create(&self, user: &User, fields: ContactFields) -> Result<Contact, ContactError> {
        let contact = Contact::new(user.username.clone(), fields);
        let created = self.repository.create(contact).await?;

        tracing::info!(username = %user.username, contact_id = %created.id, "Contact created");
        Ok(created)
    }

    async fn get(&self, user: &User, id: &ContactId) -> Result<Contact, ContactError> {
        self.repository
            .find_owned(&user.username, id)
            .await?
            .ok_or_else(|| ContactError::NotFound(id.to_string()))
    }

    async fn update(
        &self,
        user: &User,
        id: &ContactId,
        fields: ContactFields,
    ) -> Result<Contact, ContactError> {
        let mut contact = self.get(user, id).await?;
        contact.apply(fields);

        self.repository.update(contact).await
    }

    async fn remove(&self, user: &User, id: &ContactId) -> Result<(), ContactError> {
        self.repository.delete(&user.username, id).await?;
        tracing::info!(username = %user.username, contact_id = %id, "Contact removed");
        Ok(())
    }

    async fn search(
        &self,
        user: &User,
        search: ContactSearch,
    ) -> Result<ContactPage, ContactError> {
        let (contacts, total) = self.repository.search(&user.username, &search).await?;
        Ok(ContactPage::new(contacts, &search, total))
    }
}
