use anyhow::Result;
use chrono::{DateTime, Utc};
use ub_store_json::{model::admin::AdminModel, store::JsonStore};
use uuid::Uuid;

/// The only role an administrator account may carry, and the only role the
/// management endpoints accept.
pub const ADMIN_ROLE: &str = "admin";

pub struct AdminDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    email: String,
    password_hash: String,
}

impl AdminDao {
    pub fn new(email: &str, password_hash: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            email: email.to_owned(),
            password_hash: password_hash.to_owned(),
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

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub async fn db_insert(&self, store: &JsonStore) -> Result<()> {
        store.insert_admin(&self.to_model()).await
    }

    pub async fn db_select(store: &JsonStore, id: &Uuid) -> Result<Option<Self>> {
        Ok(store
            .select_admin(id)
            .await?
            .map(|model| Self::from_model(&model)))
    }

    pub async fn db_select_by_email(store: &JsonStore, email: &str) -> Result<Option<Self>> {
        Ok(store
            .select_admin_by_email(email)
            .await?
            .map(|model| Self::from_model(&model)))
    }

    fn to_model(&self) -> AdminModel {
        AdminModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.email,
            &self.password_hash,
            ADMIN_ROLE,
        )
    }

    fn from_model(model: &AdminModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            email: model.email().to_owned(),
            password_hash: model.password_hash().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use ub_store_json::store::JsonStore;

    use super::AdminDao;

    async fn temp_store(dir: &tempfile::TempDir) -> JsonStore {
        JsonStore::new(dir.path().join("db.json").to_str().unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn insert_then_select() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;
        let admin = AdminDao::new("a@x.com", "$argon2id$hash");

        admin.db_insert(&store).await.unwrap();

        let by_id = AdminDao::db_select(&store, admin.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_id.email(), "a@x.com");
        assert_eq!(by_id.password_hash(), "$argon2id$hash");

        let by_email = AdminDao::db_select_by_email(&store, "a@x.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_email.id(), admin.id());
    }

    #[tokio::test]
    async fn select_absent_admin_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;

        assert!(AdminDao::db_select_by_email(&store, "ghost@x.com")
            .await
            .unwrap()
            .is_none());
    }
}
