use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type InsertOneRecordReqJson = serde_json::Map<String, serde_json::Value>;
pub type UpdateOneRecordReqJson = serde_json::Map<String, serde_json::Value>;

#[derive(Deserialize)]
pub struct FindManyRecordReqPath {
    collection: String,
}

impl FindManyRecordReqPath {
    pub fn collection(&self) -> &str {
        &self.collection
    }
}

#[derive(Deserialize)]
pub struct InsertOneRecordReqPath {
    collection: String,
}

impl InsertOneRecordReqPath {
    pub fn collection(&self) -> &str {
        &self.collection
    }
}

#[derive(Deserialize)]
pub struct FindOneRecordReqPath {
    collection: String,
    record_id: Uuid,
}

impl FindOneRecordReqPath {
    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn record_id(&self) -> &Uuid {
        &self.record_id
    }
}

#[derive(Deserialize)]
pub struct UpdateOneRecordReqPath {
    collection: String,
    record_id: Uuid,
}

impl UpdateOneRecordReqPath {
    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn record_id(&self) -> &Uuid {
        &self.record_id
    }
}

#[derive(Deserialize)]
pub struct DeleteOneRecordReqPath {
    collection: String,
    record_id: Uuid,
}

impl DeleteOneRecordReqPath {
    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn record_id(&self) -> &Uuid {
        &self.record_id
    }
}

#[derive(Serialize)]
pub struct DeleteRecordResJson {
    id: Uuid,
}

impl DeleteRecordResJson {
    pub fn new(id: &Uuid) -> Self {
        Self { id: *id }
    }
}
