use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical status casing is PascalCase. The lowercase spelling that some
/// clients send is rejected at deserialization rather than normalized.
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy)]
pub enum UserStatus {
    Active,
    Inactive,
}

/// Organizational title. Informational only; never consulted for
/// authorization.
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub enum UserRole {
    Admin,
    Manager,
    Moderator,
    TeamLead,
    SecurityGuard,
    FieldSupervisor,
    Client,
    ItSpecialist,
    HrManager,
    Dispatcher,
}

/// Capability tag attached to a user record. Informational only; never
/// enforced.
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub enum UserPermission {
    CreatePost,
    EditPost,
    DeletePost,
    ViewReports,
    ManageUsers,
    AssignTasks,
    ApproveRequests,
    AccessRestrictedAreas,
    HandleIncidents,
    ManageFinances,
}

#[derive(Deserialize, Serialize)]
pub struct UserModel {
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

impl UserModel {
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

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn updated_at(&self) -> &DateTime<Utc> {
        &self.updated_at
    }

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

    pub fn status(&self) -> &UserStatus {
        &self.status
    }

    pub fn role(&self) -> &UserRole {
        &self.role
    }

    pub fn permissions(&self) -> &Vec<UserPermission> {
        &self.permissions
    }
}
