use std::{collections::BTreeMap, io::ErrorKind, path::PathBuf};

use anyhow::{anyhow, Context, Result};
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::model::{admin::AdminModel, user::UserModel};

pub const ADMINS_COLLECTION: &str = "admins";
pub const USERS_COLLECTION: &str = "users";

/// System field carrying the identity of a generic record.
pub const RECORD_ID_FIELD: &str = "_id";

type Document = BTreeMap<String, Vec<Value>>;

/// Flat-file JSON document store: collection name to ordered list of
/// records. The whole document is held in memory and rewritten to disk on
/// every mutation. All operations go through the inner lock; writers hold it
/// exclusively for their full load-mutate-save span, so mutations never
/// interleave.
pub struct JsonStore {
    path: PathBuf,
    document: RwLock<Document>,
}

impl JsonStore {
    pub async fn new(path: &str) -> Result<Self> {
        ub_log::info(Some("⚡"), "JsonStore: Initializing component");

        let path = PathBuf::from(path);
        let mut document = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<Document>(&bytes)
                .with_context(|| format!("Corrupt store document at {}", path.display()))?,
            Err(err) if err.kind() == ErrorKind::NotFound => Document::new(),
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to read store document at {}", path.display())
                })
            }
        };

        for collection in [ADMINS_COLLECTION, USERS_COLLECTION] {
            document.entry(collection.to_owned()).or_default();
        }

        Ok(Self {
            path,
            document: RwLock::new(document),
        })
    }

    pub async fn insert_admin(&self, admin: &AdminModel) -> Result<()> {
        self.insert_value(ADMINS_COLLECTION, serde_json::to_value(admin)?)
            .await
    }

    pub async fn select_admin(&self, id: &Uuid) -> Result<Option<AdminModel>> {
        self.find_value(ADMINS_COLLECTION, "id", &id.to_string())
            .await
            .map(|value| Ok(serde_json::from_value(value)?))
            .transpose()
    }

    pub async fn select_admin_by_email(&self, email: &str) -> Result<Option<AdminModel>> {
        self.find_value(ADMINS_COLLECTION, "email", email)
            .await
            .map(|value| Ok(serde_json::from_value(value)?))
            .transpose()
    }

    pub async fn insert_user(&self, user: &UserModel) -> Result<()> {
        self.insert_value(USERS_COLLECTION, serde_json::to_value(user)?)
            .await
    }

    pub async fn select_user(&self, id: &Uuid) -> Result<Option<UserModel>> {
        self.find_value(USERS_COLLECTION, "id", &id.to_string())
            .await
            .map(|value| Ok(serde_json::from_value(value)?))
            .transpose()
    }

    pub async fn select_user_by_email(&self, email: &str) -> Result<Option<UserModel>> {
        self.find_value(USERS_COLLECTION, "email", email)
            .await
            .map(|value| Ok(serde_json::from_value(value)?))
            .transpose()
    }

    pub async fn select_many_users(&self) -> Result<Vec<UserModel>> {
        let document = self.document.read().await;
        let values = Self::collection(&document, USERS_COLLECTION);
        let mut users = Vec::with_capacity(values.len());
        for value in values {
            users.push(serde_json::from_value(value.clone())?);
        }
        Ok(users)
    }

    pub async fn update_user(&self, user: &UserModel) -> Result<bool> {
        self.replace_value(
            USERS_COLLECTION,
            "id",
            &user.id().to_string(),
            serde_json::to_value(user)?,
        )
        .await
    }

    pub async fn delete_user(&self, id: &Uuid) -> Result<bool> {
        self.remove_value(USERS_COLLECTION, "id", &id.to_string())
            .await
    }

    pub async fn insert_record(&self, collection: &str, record: &Map<String, Value>) -> Result<()> {
        self.insert_value(collection, Value::Object(record.clone()))
            .await
    }

    pub async fn select_record(
        &self,
        collection: &str,
        id: &Uuid,
    ) -> Result<Option<Map<String, Value>>> {
        match self
            .find_value(collection, RECORD_ID_FIELD, &id.to_string())
            .await
        {
            Some(Value::Object(record)) => Ok(Some(record)),
            Some(_) => Err(anyhow!("Record in '{collection}' is not an object")),
            None => Ok(None),
        }
    }

    pub async fn select_many_records(&self, collection: &str) -> Result<Vec<Map<String, Value>>> {
        let document = self.document.read().await;
        let values = Self::collection(&document, collection);
        let mut records = Vec::with_capacity(values.len());
        for value in values {
            match value {
                Value::Object(record) => records.push(record.clone()),
                _ => return Err(anyhow!("Record in '{collection}' is not an object")),
            }
        }
        Ok(records)
    }

    /// Merges `patch` into the record field-by-field under a single write
    /// lock acquisition and returns the merged record.
    pub async fn merge_record(
        &self,
        collection: &str,
        id: &Uuid,
        patch: &Map<String, Value>,
    ) -> Result<Option<Map<String, Value>>> {
        let id = id.to_string();
        let mut document = self.document.write().await;
        let merged = match document.get_mut(collection) {
            Some(values) => values
                .iter_mut()
                .find(|value| {
                    value.get(RECORD_ID_FIELD).and_then(Value::as_str) == Some(id.as_str())
                })
                .and_then(Value::as_object_mut)
                .map(|record| {
                    for (field, value) in patch {
                        record.insert(field.to_owned(), value.clone());
                    }
                    record.clone()
                }),
            None => None,
        };
        if merged.is_some() {
            self.persist(&document).await?;
        }
        Ok(merged)
    }

    pub async fn delete_record(&self, collection: &str, id: &Uuid) -> Result<bool> {
        self.remove_value(collection, RECORD_ID_FIELD, &id.to_string())
            .await
    }

    async fn insert_value(&self, collection: &str, value: Value) -> Result<()> {
        let mut document = self.document.write().await;
        document.entry(collection.to_owned()).or_default().push(value);
        self.persist(&document).await
    }

    async fn find_value(&self, collection: &str, field: &str, needle: &str) -> Option<Value> {
        let document = self.document.read().await;
        Self::collection(&document, collection)
            .iter()
            .find(|value| value.get(field).and_then(Value::as_str) == Some(needle))
            .cloned()
    }

    async fn replace_value(
        &self,
        collection: &str,
        id_field: &str,
        id: &str,
        value: Value,
    ) -> Result<bool> {
        let mut document = self.document.write().await;
        let replaced = match document.get_mut(collection) {
            Some(values) => {
                match values
                    .iter_mut()
                    .find(|stored| stored.get(id_field).and_then(Value::as_str) == Some(id))
                {
                    Some(stored) => {
                        *stored = value;
                        true
                    }
                    None => false,
                }
            }
            None => false,
        };
        if replaced {
            self.persist(&document).await?;
        }
        Ok(replaced)
    }

    async fn remove_value(&self, collection: &str, id_field: &str, id: &str) -> Result<bool> {
        let mut document = self.document.write().await;
        let removed = match document.get_mut(collection) {
            Some(values) => {
                let len_before = values.len();
                values.retain(|value| value.get(id_field).and_then(Value::as_str) != Some(id));
                values.len() != len_before
            }
            None => false,
        };
        if removed {
            self.persist(&document).await?;
        }
        Ok(removed)
    }

    fn collection<'a>(document: &'a Document, name: &str) -> &'a [Value] {
        document.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    async fn persist(&self, document: &Document) -> Result<()> {
        let contents = serde_json::to_vec_pretty(document)?;
        tokio::fs::write(&self.path, contents)
            .await
            .with_context(|| format!("Failed to write store document at {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::{json, Map, Value};
    use uuid::Uuid;

    use super::JsonStore;
    use crate::model::{
        admin::AdminModel,
        user::{UserModel, UserPermission, UserRole, UserStatus},
    };

    fn admin_model(email: &str) -> AdminModel {
        let now = Utc::now();
        AdminModel::new(&Uuid::now_v7(), &now, &now, email, "$argon2id$hash", "admin")
    }

    fn user_model(email: &str) -> UserModel {
        let now = Utc::now();
        UserModel::new(
            &Uuid::now_v7(),
            &now,
            &now,
            "Bob",
            email,
            "555-0100",
            &30,
            &UserStatus::Active,
            &UserRole::Manager,
            &[UserPermission::CreatePost],
        )
    }

    fn record(fields: Value) -> Map<String, Value> {
        fields.as_object().unwrap().clone()
    }

    fn temp_store_path(dir: &tempfile::TempDir) -> String {
        dir.path().join("db.json").to_str().unwrap().to_owned()
    }

    #[tokio::test]
    async fn insert_then_select_admin() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(&temp_store_path(&dir)).await.unwrap();
        let admin = admin_model("a@x.com");

        store.insert_admin(&admin).await.unwrap();

        let by_id = store.select_admin(admin.id()).await.unwrap().unwrap();
        assert_eq!(by_id.email(), "a@x.com");

        let by_email = store
            .select_admin_by_email("a@x.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_email.id(), admin.id());

        assert!(store
            .select_admin_by_email("b@x.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn mutations_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_store_path(&dir);
        let user = user_model("bob@x.com");

        {
            let store = JsonStore::new(&path).await.unwrap();
            store.insert_user(&user).await.unwrap();
        }

        let reloaded = JsonStore::new(&path).await.unwrap();
        let stored = reloaded.select_user(user.id()).await.unwrap().unwrap();
        assert_eq!(stored.name(), "Bob");
        assert_eq!(stored.status(), &UserStatus::Active);
    }

    #[tokio::test]
    async fn update_and_delete_user() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(&temp_store_path(&dir)).await.unwrap();
        let user = user_model("bob@x.com");
        store.insert_user(&user).await.unwrap();

        let now = Utc::now();
        let updated = UserModel::new(
            user.id(),
            user.created_at(),
            &now,
            "Bobby",
            user.email(),
            user.phone(),
            user.age(),
            &UserStatus::Inactive,
            user.role(),
            user.permissions(),
        );
        assert!(store.update_user(&updated).await.unwrap());

        let stored = store.select_user(user.id()).await.unwrap().unwrap();
        assert_eq!(stored.name(), "Bobby");
        assert_eq!(stored.status(), &UserStatus::Inactive);

        assert!(store.delete_user(user.id()).await.unwrap());
        assert!(store.select_user(user.id()).await.unwrap().is_none());
        assert!(!store.delete_user(user.id()).await.unwrap());
    }

    #[tokio::test]
    async fn update_absent_user_reports_false() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(&temp_store_path(&dir)).await.unwrap();

        assert!(!store.update_user(&user_model("bob@x.com")).await.unwrap());
    }

    #[tokio::test]
    async fn corrupt_document_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_store_path(&dir);
        std::fs::write(&path, b"{not json").unwrap();

        assert!(JsonStore::new(&path).await.is_err());
    }

    #[tokio::test]
    async fn generic_record_crud() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(&temp_store_path(&dir)).await.unwrap();
        let id = Uuid::now_v7();
        let note = record(json!({
            "_id": id.to_string(),
            "title": "first",
            "body": "hello",
        }));

        store.insert_record("notes", &note).await.unwrap();

        let stored = store.select_record("notes", &id).await.unwrap().unwrap();
        assert_eq!(stored.get("title"), Some(&json!("first")));

        let merged = store
            .merge_record("notes", &id, &record(json!({"title": "second"})))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(merged.get("title"), Some(&json!("second")));
        assert_eq!(merged.get("body"), Some(&json!("hello")));

        assert_eq!(store.select_many_records("notes").await.unwrap().len(), 1);
        assert!(store.select_many_records("missing").await.unwrap().is_empty());

        assert!(store.delete_record("notes", &id).await.unwrap());
        assert!(store.select_record("notes", &id).await.unwrap().is_none());
        assert!(!store.delete_record("notes", &id).await.unwrap());
    }
}
