use anyhow::Result;
use chrono::Utc;
use serde_json::{Map, Value};
use ub_store_json::store::{JsonStore, RECORD_ID_FIELD};
use uuid::Uuid;

pub const RECORD_CREATED_AT_FIELD: &str = "_created_at";
pub const RECORD_UPDATED_AT_FIELD: &str = "_updated_at";

/// Schemaless record in an arbitrary collection. System fields are
/// `_`-prefixed and server-assigned; client-supplied copies are dropped.
pub struct RecordDao {
    collection: String,
    data: Map<String, Value>,
}

impl RecordDao {
    pub fn new(collection: &str, data: &Map<String, Value>) -> Self {
        let now = Utc::now().to_rfc3339();
        let mut record = Map::with_capacity(data.len() + 3);
        for (field, value) in data {
            if !field.starts_with('_') {
                record.insert(field.to_owned(), value.clone());
            }
        }
        record.insert(
            RECORD_ID_FIELD.to_owned(),
            Value::String(Uuid::now_v7().to_string()),
        );
        record.insert(RECORD_CREATED_AT_FIELD.to_owned(), Value::String(now.clone()));
        record.insert(RECORD_UPDATED_AT_FIELD.to_owned(), Value::String(now));

        Self {
            collection: collection.to_owned(),
            data: record,
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub async fn db_insert(&self, store: &JsonStore) -> Result<()> {
        store.insert_record(&self.collection, &self.data).await
    }

    pub async fn db_select(store: &JsonStore, collection: &str, id: &Uuid) -> Result<Option<Self>> {
        Ok(store
            .select_record(collection, id)
            .await?
            .map(|data| Self {
                collection: collection.to_owned(),
                data,
            }))
    }

    pub async fn db_select_many(store: &JsonStore, collection: &str) -> Result<Vec<Self>> {
        Ok(store
            .select_many_records(collection)
            .await?
            .into_iter()
            .map(|data| Self {
                collection: collection.to_owned(),
                data,
            })
            .collect())
    }

    pub async fn db_merge(
        store: &JsonStore,
        collection: &str,
        id: &Uuid,
        patch: &Map<String, Value>,
    ) -> Result<Option<Self>> {
        let mut update = Map::with_capacity(patch.len() + 1);
        for (field, value) in patch {
            if !field.starts_with('_') {
                update.insert(field.to_owned(), value.clone());
            }
        }
        update.insert(
            RECORD_UPDATED_AT_FIELD.to_owned(),
            Value::String(Utc::now().to_rfc3339()),
        );

        Ok(store
            .merge_record(collection, id, &update)
            .await?
            .map(|data| Self {
                collection: collection.to_owned(),
                data,
            }))
    }

    pub async fn db_delete(store: &JsonStore, collection: &str, id: &Uuid) -> Result<bool> {
        store.delete_record(collection, id).await
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use serde_json::{json, Value};
    use ub_store_json::store::{JsonStore, RECORD_ID_FIELD};
    use uuid::Uuid;

    use super::{RecordDao, RECORD_CREATED_AT_FIELD, RECORD_UPDATED_AT_FIELD};

    async fn temp_store(dir: &tempfile::TempDir) -> JsonStore {
        JsonStore::new(dir.path().join("db.json").to_str().unwrap())
            .await
            .unwrap()
    }

    fn record_id(record: &RecordDao) -> Uuid {
        Uuid::from_str(record.data().get(RECORD_ID_FIELD).unwrap().as_str().unwrap()).unwrap()
    }

    #[test]
    fn new_stamps_system_fields_and_drops_client_copies() {
        let data = json!({"title": "first", "_id": "spoofed", "_created_at": "spoofed"});

        let record = RecordDao::new("notes", data.as_object().unwrap());

        assert_eq!(record.data().get("title"), Some(&json!("first")));
        assert_ne!(record.data().get(RECORD_ID_FIELD), Some(&json!("spoofed")));
        assert_ne!(
            record.data().get(RECORD_CREATED_AT_FIELD),
            Some(&json!("spoofed"))
        );
        assert!(record.data().contains_key(RECORD_UPDATED_AT_FIELD));
    }

    #[tokio::test]
    async fn insert_merge_delete_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;
        let record = RecordDao::new("notes", json!({"title": "first"}).as_object().unwrap());
        let id = record_id(&record);

        record.db_insert(&store).await.unwrap();

        let patch = json!({"title": "second", "_id": "spoofed"});
        let merged = RecordDao::db_merge(&store, "notes", &id, patch.as_object().unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(merged.data().get("title"), Some(&json!("second")));
        assert_eq!(
            merged.data().get(RECORD_ID_FIELD),
            Some(&Value::String(id.to_string()))
        );

        assert!(RecordDao::db_delete(&store, "notes", &id).await.unwrap());
        assert!(RecordDao::db_select(&store, "notes", &id)
            .await
            .unwrap()
            .is_none());
    }
}
