use chrono::{Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::auth::AuthService;
use crate::db::DbPool;
use crate::entities::users;
use crate::errors::{FieldErrors, ServiceError};

/// Service for user accounts: registration, login, profile upkeep and the
/// user directory.
pub struct AccountService {
    db_pool: Arc<DbPool>,
    auth: Arc<AuthService>,
}

#[derive(Debug, Clone)]
pub struct Signup {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
}

#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub designation: Option<String>,
    pub department: Option<String>,
    pub address: Option<String>,
}

/// Registration/activity counters for the developer dashboard.
#[derive(Debug, Clone, serde::Serialize, utoipa::ToSchema)]
pub struct UserStats {
    pub total_users: u64,
    pub new_today: u64,
    pub new_7_days: u64,
    pub active_24h: u64,
    pub active_7d: u64,
}

impl AccountService {
    pub fn new(db_pool: Arc<DbPool>, auth: Arc<AuthService>) -> Self {
        Self { db_pool, auth }
    }

    #[instrument(skip(self, signup))]
    pub async fn signup(&self, signup: Signup) -> Result<users::Model, ServiceError> {
        let db = self.db_pool.as_ref();
        let username = signup.username.trim().to_string();
        let email = signup.email.trim().to_lowercase();

        let mut errors = FieldErrors::new();
        if username.is_empty() {
            errors.push("username", "This field is required.");
        }
        if email.is_empty() {
            errors.push("email", "This field is required.");
        }
        if signup.password.is_empty() {
            errors.push("password", "This field is required.");
        } else if signup.password != signup.password2 {
            errors.push("password2", "Passwords do not match.");
        }
        errors.into_result()?;

        if users::Entity::find()
            .filter(users::Column::Username.eq(username.clone()))
            .count(db)
            .await?
            > 0
        {
            return Err(ServiceError::conflict("username", "Username already taken."));
        }
        if users::Entity::find()
            .filter(users::Column::Email.eq(email.clone()))
            .count(db)
            .await?
            > 0
        {
            return Err(ServiceError::conflict("email", "Email already registered."));
        }

        let now = Utc::now();
        let user = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username),
            email: Set(email),
            password_hash: Set(self.auth.hash_password(&signup.password)?),
            first_name: Set(String::new()),
            last_name: Set(String::new()),
            phone: Set(None),
            designation: Set(None),
            department: Set(None),
            address: Set(None),
            is_active: Set(true),
            last_login_at: Set(Some(now)),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await?;

        info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Resolve the login identifier (username, or email when it contains a
    /// '@') and verify the password. Records the login time on success.
    #[instrument(skip(self, password))]
    pub async fn login(&self, identifier: &str, password: &str) -> Result<users::Model, ServiceError> {
        let db = self.db_pool.as_ref();
        let identifier = identifier.trim();

        let user = if identifier.contains('@') {
            users::Entity::find()
                .filter(users::Column::Email.eq(identifier.to_lowercase()))
                .one(db)
                .await?
        } else {
            users::Entity::find()
                .filter(users::Column::Username.eq(identifier))
                .one(db)
                .await?
        };

        let user = user.ok_or_else(|| {
            ServiceError::AuthError("Invalid username/email or password.".to_string())
        })?;

        if !user.is_active || !self.auth.verify_password(&user.password_hash, password) {
            return Err(ServiceError::AuthError(
                "Invalid username/email or password.".to_string(),
            ));
        }

        let mut active: users::ActiveModel = user.into();
        active.last_login_at = Set(Some(Utc::now()));
        let user = active.update(db).await?;

        info!(user_id = %user.id, "user logged in");
        Ok(user)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, user_id: Uuid) -> Result<users::Model, ServiceError> {
        users::Entity::find_by_id(user_id)
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("User {} not found", user_id)))
    }

    #[instrument(skip(self, update))]
    pub async fn save_profile(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> Result<users::Model, ServiceError> {
        let db = self.db_pool.as_ref();
        let user = self.get(user_id).await?;

        let email = update.email.trim().to_lowercase();
        if email.is_empty() {
            return Err(ServiceError::field_error("email", "This field is required."));
        }
        if email != user.email
            && users::Entity::find()
                .filter(users::Column::Email.eq(email.clone()))
                .filter(users::Column::Id.ne(user_id))
                .count(db)
                .await?
                > 0
        {
            return Err(ServiceError::conflict("email", "Email already registered."));
        }

        let mut active: users::ActiveModel = user.into();
        active.first_name = Set(update.first_name.trim().to_string());
        active.last_name = Set(update.last_name.trim().to_string());
        active.email = Set(email);
        active.phone = Set(normalized(update.phone));
        active.designation = Set(normalized(update.designation));
        active.department = Set(normalized(update.department));
        active.address = Set(normalized(update.address));
        active.updated_at = Set(Utc::now());

        Ok(active.update(db).await?)
    }

    /// User directory, newest registrations first, with free-text search
    /// across identity and profile fields.
    #[instrument(skip(self))]
    pub async fn list(&self, q: Option<&str>) -> Result<Vec<users::Model>, ServiceError> {
        let mut query = users::Entity::find().order_by_desc(users::Column::CreatedAt);

        if let Some(q) = q.map(str::trim).filter(|q| !q.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(users::Column::Username.contains(q))
                    .add(users::Column::Email.contains(q))
                    .add(users::Column::FirstName.contains(q))
                    .add(users::Column::LastName.contains(q))
                    .add(users::Column::Phone.contains(q))
                    .add(users::Column::Designation.contains(q)),
            );
        }

        Ok(query.all(self.db_pool.as_ref()).await?)
    }

    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<UserStats, ServiceError> {
        let db = self.db_pool.as_ref();
        let now = Utc::now();
        let today_start = now
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .expect("midnight is a valid time")
            .and_utc();

        let total_users = users::Entity::find().count(db).await?;
        let new_today = users::Entity::find()
            .filter(users::Column::CreatedAt.gte(today_start))
            .count(db)
            .await?;
        let new_7_days = users::Entity::find()
            .filter(users::Column::CreatedAt.gte(now - Duration::days(7)))
            .count(db)
            .await?;
        let active_24h = users::Entity::find()
            .filter(users::Column::LastLoginAt.gte(now - Duration::hours(24)))
            .count(db)
            .await?;
        let active_7d = users::Entity::find()
            .filter(users::Column::LastLoginAt.gte(now - Duration::days(7)))
            .count(db)
            .await?;

        Ok(UserStats {
            total_users,
            new_today,
            new_7_days,
            active_24h,
            active_7d,
        })
    }
}

fn normalized(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
