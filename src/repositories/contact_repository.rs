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
    models::domain::Contact,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, contact: Contact) -> AppResult<Contact>;
    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Contact>>;
    async fn find_all(&self) -> AppResult<Vec<Contact>>;
    async fn update(&self, id: ObjectId, contact: Contact) -> AppResult<Contact>;
    async fn delete(&self, id: ObjectId) -> AppResult<()>;
    async fn delete_many(&self) -> AppResult<u64>;
}

pub struct MongoContactRepository {
    collection: Collection<Contact>,
}

impl MongoContactRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("contacts");
        Self { collection }
    }
}

#[async_trait]
impl ContactRepository for MongoContactRepository {
    async fn create(&self, mut contact: Contact) -> AppResult<Contact> {
        let result = self.collection.insert_one(&contact).await?;
        contact.id = result.inserted_id.as_object_id();
        Ok(contact)
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Contact>> {
        let contact = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(contact)
    }

    async fn find_all(&self) -> AppResult<Vec<Contact>> {
        let cursor = self.collection.find(doc! {}).await?;
        let contacts: Vec<Contact> = cursor.try_collect().await?;
        Ok(contacts)
    }

    async fn update(&self, id: ObjectId, contact: Contact) -> AppResult<Contact> {
        let filter = doc! { "_id": id };
        let options = ReplaceOptions::builder().upsert(false).build();

        let result = self
            .collection
            .replace_one(filter, &contact)
            .with_options(options)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("Contact not found".to_string()));
        }

        Ok(contact)
    }

    async fn delete(&self, id: ObjectId) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound("Contact not found".to_string()));
        }

        Ok(())
    }

    async fn delete_many(&self) -> AppResult<u64> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }
}
