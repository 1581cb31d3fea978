use sqlx::QueryBuilder;
use tracing::{error, info, instrument, warn};

use crate::db::UserStore;
use crate::error::StoreError;
use crate::users::{User, UserFilter, UserUpdate};

impl UserStore {
    /// Insert a new user with a pre-hashed credential digest and return the
    /// persisted record, identity assigned.
    ///
    /// Uniqueness of the email is left to the schema; a violation surfaces
    /// as a storage error.
    #[instrument(skip(self, password_hash))]
    pub async fn add_user(
        &self,
        email: &str,
        password_hash: Option<&str>,
    ) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES (?, ?)
            RETURNING id, email, password_hash, first_name, last_name
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!(error = %e, "insert user failed");
            StoreError::from(e)
        })?;

        info!(user_id = user.id, email = %user.email, "user added");
        Ok(user)
    }

    /// Return the single user matching every constraint in the filter set.
    #[instrument(skip(self, filters))]
    pub async fn find_user_by(&self, filters: &[UserFilter]) -> Result<User, StoreError> {
        if filters.is_empty() {
            return Err(StoreError::InvalidFilter("empty filter set"));
        }

        let mut query = QueryBuilder::new(
            "SELECT id, email, password_hash, first_name, last_name FROM users WHERE ",
        );
        let mut clause = query.separated(" AND ");
        for filter in filters {
            filter.push(&mut clause);
        }

        let mut rows = query.build_query_as::<User>().fetch_all(&self.db).await?;
        match rows.len() {
            0 => {
                warn!("no user matched filters");
                Err(StoreError::NotFound)
            }
            1 => Ok(rows.remove(0)),
            n => {
                warn!(matches = n, "filters matched more than one user");
                Err(StoreError::MultipleResults)
            }
        }
    }

    /// Apply the given field assignments to the user with this id and
    /// commit. An empty update set degrades to the existence check.
    #[instrument(skip(self, updates))]
    pub async fn update_user(&self, id: i64, updates: &[UserUpdate]) -> Result<(), StoreError> {
        let target = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;
        if target.is_none() {
            warn!(user_id = id, "update target not found");
            return Err(StoreError::NotFound);
        }
        if updates.is_empty() {
            return Ok(());
        }

        let mut query = QueryBuilder::new("UPDATE users SET ");
        let mut assignments = query.separated(", ");
        for update in updates {
            update.push(&mut assignments);
        }
        query.push(" WHERE id = ").push_bind(id);

        query.build().execute(&self.db).await.map_err(|e| {
            error!(error = %e, user_id = id, "update user failed");
            StoreError::from(e)
        })?;

        info!(user_id = id, fields = updates.len(), "user updated");
        Ok(())
    }
}
