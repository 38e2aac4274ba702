use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::ReplaceOptions,
    Collection,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Qualification,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QualificationRepository: Send + Sync {
    async fn create(&self, qualification: Qualification) -> AppResult<Qualification>;
    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Qualification>>;
    async fn find_all(&self) -> AppResult<Vec<Qualification>>;
    async fn update(&self, id: ObjectId, qualification: Qualification)
        -> AppResult<Qualification>;
    async fn delete(&self, id: ObjectId) -> AppResult<()>;
    async fn delete_many(&self) -> AppResult<u64>;
}

pub struct MongoQualificationRepository {
    collection: Collection<Qualification>,
}

impl MongoQualificationRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("qualifications");
        Self { collection }
    }
}

#[async_trait]
impl QualificationRepository for MongoQualificationRepository {
    async fn create(&self, mut qualification: Qualification) -> AppResult<Qualification> {
        let result = self.collection.insert_one(&qualification).await?;
        qualification.id = result.inserted_id.as_object_id();
        Ok(qualification)
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Qualification>> {
        let qualification = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(qualification)
    }

    async fn find_all(&self) -> AppResult<Vec<Qualification>> {
        let cursor = self.collection.find(doc! {}).await?;
        let qualifications: Vec<Qualification> = cursor.try_collect().await?;
        Ok(qualifications)
    }

    async fn update(
        &self,
        id: ObjectId,
        qualification: Qualification,
    ) -> AppResult<Qualification> {
        let filter = doc! { "_id": id };
        let options = ReplaceOptions::builder().upsert(false).build();

        let result = self
            .collection
            .replace_one(filter, &qualification)
            .with_options(options)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("Qualification not found".to_string()));
        }

        Ok(qualification)
    }

    async fn delete(&self, id: ObjectId) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound("Qualification not found".to_string()));
        }

        Ok(())
    }

    async fn delete_many(&self) -> AppResult<u64> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }
}
