use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::address::errors::AddressError;
use crate::domain::address::models::Address;
use crate::domain::address::models::AddressId;
use crate::domain::address::ports::AddressRepository;
use crate::domain::contact::models::ContactId;
use crate::domain::user::models::Username;

pub struct PostgresAddressRepository {
    pool: PgPool,
}

impl PostgresAddressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_address(row: &PgRow) -> Result<Address, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let contact_id: String = row.try_get("contact_id")?;

        Ok(Address {
            id: AddressId::from_string(id),
            contact_id: ContactId::from_string(contact_id),
            street: row.try_get("street")?,
            city: row.try_get("city")?,
            province: row.try_get("province")?,
            country: row.try_get("country")?,
            postal_code: row.try_get("postal_code")?,
        })
    }
}

#[async_trait]
impl AddressRepository for PostgresAddressRepository {
    async fn create(&self, owner: &Username, address: Address) -> Result<Address, AddressError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AddressError::DatabaseError(e.to_string()))?;

        // Lock the parent so it cannot be deleted or reassigned before the insert.
        let parent = sqlx::query(
            r#"
            SELECT id
            FROM contacts
            WHERE id = $1 AND username = $2
            FOR UPDATE
            "#,
        )
        .bind(address.contact_id.as_str())
        .bind(owner.as_str())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AddressError::DatabaseError(e.to_string()))?;

        if parent.is_none() {
            return Err(AddressError::ContactNotFound(address.contact_id.to_string()));
        }

        sqlx::query(
            r#"
            INSERT INTO addresses (id, contact_id, street, city, province, country, postal_code)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(address.id.as_str())
        .bind(address.contact_id.as_str())
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.province)
        .bind(&address.country)
        .bind(&address.postal_code)
        .execute(&mut *tx)
        .await
        .map_err(|e| AddressError::DatabaseError(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| AddressError::DatabaseError(e.to_string()))?;

        Ok(address)
    }

    async fn find_in_contact(
        &self,
        contact_id: &ContactId,
        id: &AddressId,
    ) -> Result<Option<Address>, AddressError> {
        let row = sqlx::query(
            r#"
            SELECT id, contact_id, street, city, province, country, postal_code
            FROM addresses
            WHERE id = $1 AND contact_id = $2
            "#,
        )
        .bind(id.as_str())
        .bind(contact_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AddressError::DatabaseError(e.to_string()))?;

        row.as_ref()
            .map(Self::row_to_address)
            .transpose()
            .map_err(|e| AddressError::DatabaseError(e.to_string()))
    }

    async fn update(&self, address: Address) -> Result<Address, AddressError> {
        let result = sqlx::query(
            r#"
            UPDATE addresses
            SET street = $3, city = $4, province = $5, country = $6, postal_code = $7
            WHERE id = $1 AND contact_id = $2
            "#,
        )
        .bind(address.id.as_str())
        .bind(address.contact_id.as_str())
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.province)
        .bind(&address.country)
        .bind(&address.postal_code)
        .execute(&self.pool)
        .await
        .map_err(|e| AddressError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AddressError::NotFound(address.id.to_string()));
        }

        Ok(address)
    }

    async fn delete(&self, contact_id: &ContactId, id: &AddressId) -> Result<(), AddressError> {
        let result = sqlx::query(
            r#"
            DELETE FROM addresses
            WHERE id = $1 AND contact_id = $2
            "#,
        )
        .bind(id.as_str())
        .bind(contact_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| AddressError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AddressError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn list_by_contact(&self, contact_id: &ContactId) -> Result<Vec<Address>, AddressError> {
        let rows = sqlx::query(
            r#"
            SELECT id, contact_id, street, city, province, country, postal_code
            FROM addresses
            WHERE contact_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(contact_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AddressError::DatabaseError(e.to_string()))?;

        rows.iter()
            .map(Self::row_to_address)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AddressError::DatabaseError(e.to_string()))
    }
}
