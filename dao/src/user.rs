use anyhow::Result;
use chrono::{DateTime, Utc};
use ub_store_json::{
    model::user::{UserModel, UserPermission, UserRole, UserStatus},
    store::JsonStore,
};
use uuid::Uuid;

pub struct UserDao {
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

impl UserDao {
    pub fn new(
        name: &str,
        email: &str,
        phone: &str,
        age: &i64,
        status: &UserStatus,
        role: &UserRole,
        permissions: &[UserPermission],
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
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

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_owned();
    }

    pub fn set_phone(&mut self, phone: &str) {
        self.phone = phone.to_owned();
    }

    pub fn set_age(&mut self, age: &i64) {
        self.age = *age;
    }

    pub fn set_status(&mut self, status: &UserStatus) {
        self.status = *status;
    }

    pub fn set_role(&mut self, role: &UserRole) {
        self.role = *role;
    }

    pub fn set_permissions(&mut self, permissions: &[UserPermission]) {
        self.permissions = permissions.to_vec();
    }

    pub async fn db_insert(&self, store: &JsonStore) -> Result<()> {
        store.insert_user(&self.to_model()).await
    }

    pub async fn db_select(store: &JsonStore, id: &Uuid) -> Result<Option<Self>> {
        Ok(store
            .select_user(id)
            .await?
            .map(|model| Self::from_model(&model)))
    }

    pub async fn db_select_by_email(store: &JsonStore, email: &str) -> Result<Option<Self>> {
        Ok(store
            .select_user_by_email(email)
            .await?
            .map(|model| Self::from_model(&model)))
    }

    pub async fn db_select_many(store: &JsonStore) -> Result<Vec<Self>> {
        Ok(store
            .select_many_users()
            .await?
            .iter()
            .map(Self::from_model)
            .collect())
    }

    pub async fn db_update(&mut self, store: &JsonStore) -> Result<bool> {
        self.updated_at = Utc::now();
        store.update_user(&self.to_model()).await
    }

    pub async fn db_delete(store: &JsonStore, id: &Uuid) -> Result<bool> {
        store.delete_user(id).await
    }

    fn to_model(&self) -> UserModel {
        UserModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.name,
            &self.email,
            &self.phone,
            &self.age,
            &self.status,
            &self.role,
            &self.permissions,
        )
    }

    fn from_model(model: &UserModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            name: model.name().to_owned(),
            email: model.email().to_owned(),
            phone: model.phone().to_owned(),
            age: *model.age(),
            status: *model.status(),
            role: *model.role(),
            permissions: model.permissions().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use ub_store_json::{
        model::user::{UserPermission, UserRole, UserStatus},
        store::JsonStore,
    };

    use super::UserDao;

    async fn temp_store(dir: &tempfile::TempDir) -> JsonStore {
        JsonStore::new(dir.path().join("db.json").to_str().unwrap())
            .await
            .unwrap()
    }

    fn bob() -> UserDao {
        UserDao::new(
            "Bob",
            "bob@x.com",
            "555-0100",
            &30,
            &UserStatus::Active,
            &UserRole::Manager,
            &[UserPermission::CreatePost, UserPermission::ViewReports],
        )
    }

    #[tokio::test]
    async fn insert_then_select_many() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;
        let user = bob();

        user.db_insert(&store).await.unwrap();

        let users = UserDao::db_select_many(&store).await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email(), "bob@x.com");
        assert_eq!(users[0].permissions().len(), 2);
    }

    #[tokio::test]
    async fn update_bumps_updated_at_and_persists_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;
        let user = bob();
        user.db_insert(&store).await.unwrap();

        let mut stored = UserDao::db_select(&store, user.id()).await.unwrap().unwrap();
        let updated_at_before = *stored.updated_at();
        stored.set_phone("555-0199");
        stored.set_status(&UserStatus::Inactive);
        assert!(stored.db_update(&store).await.unwrap());

        let reloaded = UserDao::db_select(&store, user.id()).await.unwrap().unwrap();
        assert_eq!(reloaded.phone(), "555-0199");
        assert_eq!(reloaded.status(), &UserStatus::Inactive);
        assert_eq!(reloaded.created_at(), user.created_at());
        assert!(reloaded.updated_at() >= &updated_at_before);
    }

    #[tokio::test]
    async fn delete_is_permanent_and_idempotent_checks_absence() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;
        let user = bob();
        user.db_insert(&store).await.unwrap();

        assert!(UserDao::db_delete(&store, user.id()).await.unwrap());
        assert!(UserDao::db_select(&store, user.id())
            .await
            .unwrap()
            .is_none());
        assert!(!UserDao::db_delete(&store, user.id()).await.unwrap());
    }
}
