//! Generic collection operations shared by all repositories.
//!
//! Each concrete store wraps a [`DocumentCollection`] and only decides which
//! filter to build; the driver calls, deadline handling and page decoding live
//! here once.

use bson::{doc, Bson, Document};
use futures::TryStreamExt;
use mongodb::Collection;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::domain::{PartialUpdate, UpdateOutcome};
use crate::errors::{StoreError, StoreResult};
use crate::infra::context::OpContext;
use crate::types::{Page, PageRequest};

/// Typed collection plus the shared CRUD primitives.
pub(crate) struct DocumentCollection<T>
where
    T: Send + Sync,
{
    collection: Collection<T>,
}

impl<T> DocumentCollection<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    pub fn new(db: &mongodb::Database, name: &str) -> Self {
        Self {
            collection: db.collection(name),
        }
    }

    /// Run the page pipeline over documents matching `filter`.
    pub async fn find_page(
        &self,
        ctx: &OpContext,
        filter: Document,
        page: PageRequest,
    ) -> StoreResult<Page<T>> {
        let pipeline = page_pipeline(filter, page);
        let raw = self.collection.clone_with_type::<Document>();

        let docs = ctx
            .run(async {
                let cursor = raw.aggregate(pipeline).await?;
                cursor.try_collect::<Vec<Document>>().await
            })
            .await?;

        decode_page(docs)
    }

    /// First document matching `filter`, or [`StoreError::NoDocuments`].
    pub async fn find_one(&self, ctx: &OpContext, filter: Document) -> StoreResult<T> {
        ctx.run(self.collection.find_one(filter))
            .await?
            .ok_or(StoreError::NoDocuments)
    }

    /// Whether any document matches `filter`; fetches only `_id`.
    pub async fn exists(&self, ctx: &OpContext, filter: Document) -> StoreResult<bool> {
        let found = ctx
            .run(
                self.collection
                    .clone_with_type::<Document>()
                    .find_one(filter)
                    .projection(doc! { "_id": 1 }),
            )
            .await?;
        Ok(found.is_some())
    }

    pub async fn count(&self, ctx: &OpContext, filter: Document) -> StoreResult<u64> {
        ctx.run(self.collection.count_documents(filter)).await
    }

    pub async fn insert(&self, ctx: &OpContext, document: &T) -> StoreResult<()> {
        ctx.run(self.collection.insert_one(document)).await?;
        Ok(())
    }

    /// Apply `update` to the first match. Never upserts.
    pub async fn update_one(
        &self,
        ctx: &OpContext,
        filter: Document,
        update: &PartialUpdate,
    ) -> StoreResult<UpdateOutcome> {
        let result = ctx
            .run(
                self.collection
                    .update_one(filter, set_document(update))
                    .upsert(false),
            )
            .await?;

        Ok(UpdateOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    pub async fn delete_one(&self, ctx: &OpContext, filter: Document) -> StoreResult<u64> {
        let result = ctx.run(self.collection.delete_one(filter)).await?;
        Ok(result.deleted_count)
    }

    pub async fn delete_many(&self, ctx: &OpContext, filter: Document) -> StoreResult<u64> {
        let result = ctx.run(self.collection.delete_many(filter)).await?;
        Ok(result.deleted_count)
    }
}

/// `$match` -> `$group` (count + all docs) -> `$project` (slice one page).
pub(crate) fn page_pipeline(filter: Document, page: PageRequest) -> Vec<Document> {
    vec![
        doc! { "$match": filter },
        doc! {
            "$group": {
                "_id": Bson::Null,
                "total_count": { "$sum": 1 },
                "data": { "$push": "$$ROOT" },
            }
        },
        doc! {
            "$project": {
                "_id": 0,
                "total_count": 1,
                "items": { "$slice": ["$data", as_bson_int(page.offset), as_bson_int(page.limit)] },
            }
        },
    ]
}

fn as_bson_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[derive(Deserialize)]
struct PageDocument<T> {
    total_count: u64,
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

/// The pipeline yields no document at all when nothing matched.
pub(crate) fn decode_page<T: DeserializeOwned>(docs: Vec<Document>) -> StoreResult<Page<T>> {
    let Some(first) = docs.into_iter().next() else {
        return Ok(Page::empty());
    };
    let decoded: PageDocument<T> = bson::from_document(first)?;
    Ok(Page {
        total_count: decoded.total_count,
        items: decoded.items,
    })
}

/// `{$set: {...supplied fields, updated_at}}`
pub(crate) fn set_document(update: &PartialUpdate) -> Document {
    let mut set = Document::new();
    for (key, value) in update.fields() {
        set.insert(*key, value.as_str());
    }
    set.insert(
        "updated_at",
        bson::DateTime::from_chrono(update.updated_at()),
    );
    doc! { "$set": set }
}
