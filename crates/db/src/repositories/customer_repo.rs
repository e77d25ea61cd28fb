//! Repository for the `customers` table.
//!
//! Deleting a customer removes their carts and cart lines.

use musicshop_core::catalog::{validate_name, MAX_CUSTOMER_NAME_LEN};
use musicshop_core::types::DbId;
use sqlx::SqlitePool;

use crate::error::DbResult;
use crate::models::customer::{CreateCustomer, Customer, UpdateCustomer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, phone, address, created_at, updated_at";

/// Provides CRUD operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateCustomer) -> DbResult<Customer> {
        validate_name("Customer name", &input.name, MAX_CUSTOMER_NAME_LEN)?;
        let query = format!(
            "INSERT INTO customers (name, phone, address) \
             VALUES ($1, COALESCE($2, ''), COALESCE($3, '')) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Customer>(&query)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.address)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Find a customer by internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a customer. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateCustomer,
    ) -> DbResult<Option<Customer>> {
        if let Some(name) = &input.name {
            validate_name("Customer name", name, MAX_CUSTOMER_NAME_LEN)?;
        }
        let query = format!(
            "UPDATE customers SET \
                name = COALESCE($2, name), \
                phone = COALESCE($3, phone), \
                address = COALESCE($4, address), \
                updated_at = CURRENT_TIMESTAMP \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.address)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Delete a customer with all their carts.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
