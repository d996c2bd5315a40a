use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactId;
use crate::domain::contact::models::ContactSearch;
use crate::domain::contact::ports::ContactRepository;
use crate::domain::user::models::Username;

pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_contact(row: &PgRow) -> Result<Contact, ContactError> {
        let decode = |e: sqlx::Error| ContactError::DatabaseError(e.to_string());

        let owner: String = row.try_get("username").map_err(decode)?;
        let id: String = row.try_get("id").map_err(decode)?;

        Ok(Contact {
            id: ContactId::from_string(id),
            owner: Username::new(owner)
                .map_err(|e| ContactError::DatabaseError(format!("Stored owner invalid: {}", e)))?,
            first_name: row.try_get("first_name").map_err(decode)?,
            last_name: row.try_get("last_name").map_err(decode)?,
            email: row.try_get("email").map_err(decode)?,
            phone: row.try_get("phone").map_err(decode)?,
        })
    }

    /// `LIKE` pattern matching `value` anywhere, with wildcards in the value
    /// taken literally.
    fn contains_pattern(value: &Option<String>) -> Option<String> {
        value.as_ref().map(|value| {
            let escaped = value
                .replace('\\', "\\\\")
                .replace('%', "\\%")
                .replace('_', "\\_");
            format!("%{}%", escaped)
        })
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn create(&self, contact: Contact) -> Result<Contact, ContactError> {
        sqlx::query(
            r#"
            INSERT INTO contacts (id, username, first_name, last_name, email, phone)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(contact.id.as_str())
        .bind(contact.owner.as_str())
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .execute(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        Ok(contact)
    }

    async fn find_owned(
        &self,
        owner: &Username,
        id: &ContactId,
    ) -> Result<Option<Contact>, ContactError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, first_name, last_name, email, phone
            FROM contacts
            WHERE id = $1 AND username = $2
            "#,
        )
        .bind(id.as_str())
        .bind(owner.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_contact).transpose()
    }

    async fn update(&self, contact: Contact) -> Result<Contact, ContactError> {
        let result = sqlx::query(
            r#"
            UPDATE contacts
            SET first_name = $3, last_name = $4, email = $5, phone = $6
            WHERE id = $1 AND username = $2
            "#,
        )
        .bind(contact.id.as_str())
        .bind(contact.owner.as_str())
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .execute(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ContactError::NotFound(contact.id.to_string()));
        }

        Ok(contact)
    }

    async fn delete(&self, owner: &Username, id: &ContactId) -> Result<(), ContactError> {
        let result = sqlx::query(
            r#"
            DELETE FROM contacts
            WHERE id = $1 AND username = $2
            "#,
        )
        .bind(id.as_str())
        .bind(owner.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ContactError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn search(
        &self,
        owner: &Username,
        search: &ContactSearch,
    ) -> Result<(Vec<Contact>, u64), ContactError> {
        let name = Self::contains_pattern(&search.name);
        let email = Self::contains_pattern(&search.email);
        let phone = Self::contains_pattern(&search.phone);

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM contacts
            WHERE username = $1
              AND ($2::TEXT IS NULL OR first_name ILIKE $2 OR last_name ILIKE $2)
              AND ($3::TEXT IS NULL OR email ILIKE $3)
              AND ($4::TEXT IS NULL OR phone ILIKE $4)
            "#,
        )
        .bind(owner.as_str())
        .bind(&name)
        .bind(&email)
        .bind(&phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        let rows = sqlx::query(
            r#"
            SELECT id, username, first_name, last_name, email, phone
            FROM contacts
            WHERE username = $1
              AND ($2::TEXT IS NULL OR first_name ILIKE $2 OR last_name ILIKE $2)
              AND ($3::TEXT IS NULL OR email ILIKE $3)
              AND ($4::TEXT IS NULL OR phone ILIKE $4)
            ORDER BY first_name, id
            LIMIT $5 OFFSET $6
            "#,
        )
        .bind(owner.as_str())
        .bind(&name)
        .bind(&email)
        .bind(&phone)
        .bind(i64::from(search.size))
        .bind(i64::try_from(search.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        let contacts = rows
            .iter()
            .map(Self::row_to_contact)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((contacts, u64::try_from(total).unwrap_or(0)))
    }
}
