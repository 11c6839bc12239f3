use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ub_store_json::model::user::{UserPermission, UserRole, UserStatus};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct InsertOneUserReqJson {
    name: String,
    #[validate(email)]
    email: String,
    phone: String,
    age: i64,
    #[serde(default)]
    status: Option<UserStatus>,
    role: UserRole,
    #[serde(default)]
    permissions: Vec<UserPermission>,
}

impl InsertOneUserReqJson {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn age(&self) -> &i64 {
        &self.age
    }

    pub fn status(&self) -> &Option<UserStatus> {
        &self.status
    }

    pub fn role(&self) -> &UserRole {
        &self.role
    }

    pub fn permissions(&self) -> &Vec<UserPermission> {
        &self.permissions
    }
}

#[derive(Deserialize)]
pub struct FindOneUserReqPath {
    user_id: Uuid,
}

impl FindOneUserReqPath {
    pub fn user_id(&self) -> &Uuid {
        &self.user_id
    }
}

#[derive(Deserialize)]
pub struct UpdateOneUserReqPath {
    user_id: Uuid,
}

impl UpdateOneUserReqPath {
    pub fn user_id(&self) -> &Uuid {
        &self.user_id
    }
}

#[derive(Deserialize, Validate)]
pub struct UpdateOneUserReqJson {
    name: Option<String>,
    #[validate(email)]
    email: Option<String>,
    phone: Option<String>,
    age: Option<i64>,
    status: Option<UserStatus>,
    role: Option<UserRole>,
    permissions: Option<Vec<UserPermission>>,
}

impl UpdateOneUserReqJson {
    pub fn name(&self) -> &Option<String> {
        &self.name
    }

    pub fn email(&self) -> &Option<String> {
        &self.email
    }

    pub fn phone(&self) -> &Option<String> {
        &self.phone
    }

    pub fn age(&self) -> &Option<i64> {
        &self.age
    }

    pub fn status(&self) -> &Option<UserStatus> {
        &self.status
    }

    pub fn role(&self) -> &Option<UserRole> {
        &self.role
    }

    pub fn permissions(&self) -> &Option<Vec<UserPermission>> {
        &self.permissions
    }

    pub fn is_all_none(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.age.is_none()
            && self.status.is_none()
            && self.role.is_none()
            && self.permissions.is_none()
    }
}

#[derive(Deserialize)]
pub struct DeleteOneUserReqPath {
    user_id: Uuid,
}

impl DeleteOneUserReqPath {
    pub fn user_id(&self) -> &Uuid {
        &self.user_id
    }
}

#[derive(Serialize)]
pub struct UserResJson {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    name: String,
    email: String,
    phone: String,
    age: i64,
    status: UserStatus,
    role: UserRole,
    permissions: Vec<UserPermission>,
}

impl UserResJson {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
        name: &str,
        email: &str,
        phone: &str,
        age: &i64,
        status: &UserStatus,
        role: &UserRole,
        permissions: &[UserPermission],
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            updated_at: *updated_at,
            name: name.to_owned(),
            email: email.to_owned(),
            phone: phone.to_owned(),
            age: *age,
            status: *status,
            role: *role,
            permissions: permissions.to_vec(),
        }
    }
}

#[derive(Serialize)]
pub struct DeleteUserResJson {
    id: Uuid,
}

impl DeleteUserResJson {
    pub fn new(id: &Uuid) -> Self {
        Self { id: *id }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatisticsResJson {
    total_users: usize,
    users_registered_today: usize,
    active_users: usize,
    inactive_users: usize,
}

impl UserStatisticsResJson {
    pub fn new(
        total_users: &usize,
        users_registered_today: &usize,
        active_users: &usize,
        inactive_users: &usize,
    ) -> Self {
        Self {
            total_users: *total_users,
            users_registered_today: *users_registered_today,
            active_users: *active_users,
            inactive_users: *inactive_users,
        }
    }
}
