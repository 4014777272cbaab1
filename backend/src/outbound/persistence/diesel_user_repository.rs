//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Email uniqueness is enforced by the `users_email_key` constraint; a
//! violation surfaces as [`UserPersistenceError::DuplicateEmail`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Email, NewUser, Password, User, UserAttributes, UserId};

use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to user persistence errors.
///
/// `email` names the address being inserted, if any, so a unique violation can
/// be reported against it.
fn map_diesel_error(error: diesel::result::Error, email: Option<&str>) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            UserPersistenceError::duplicate_email(email.unwrap_or_default())
        }
        DieselError::NotFound => UserPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        _ => UserPersistenceError::query("database error"),
    }
}

/// Convert a database row to a domain user.
fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let id = UserId::new(row.id)
        .map_err(|err| UserPersistenceError::query(format!("invalid stored user id: {err}")))?;
    let fields = match row.attributes {
        Value::Object(fields) => fields,
        other => {
            warn!(user_id = row.id, kind = ?other, "non-object attributes column, ignoring");
            serde_json::Map::new()
        }
    };
    let attributes = UserAttributes::new(fields).map_err(|err| {
        UserPersistenceError::query(format!("invalid stored user attributes: {err}"))
    })?;
    Ok(User::new(
        id,
        Email::new(row.email),
        Password::new(row.password),
        attributes,
    ))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .order(users::id.asc())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;

        rows.into_iter().map(row_to_user).collect()
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::id.eq(id.get()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::email.eq(email.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?;

        row.map(row_to_user).transpose()
    }

    async fn create(&self, new_user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let insert = NewUserRow {
            email: new_user.email.as_ref(),
            password: new_user.password.expose(),
            attributes: new_user.attributes.clone().into_value(),
        };

        let row: UserRow = diesel::insert_into(users::table)
            .values(&insert)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, Some(new_user.email.as_ref())))?;

        row_to_user(row)
    }
}
