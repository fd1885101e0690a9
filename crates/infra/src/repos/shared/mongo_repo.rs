use super::repo::DeleteResult;
use anyhow::Result;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{self, doc, oid::ObjectId, Document},
    options::FindOptions,
    Collection,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::error;

pub trait MongoDocument<E>: Serialize + DeserializeOwned {
    fn into_domain(self) -> E;
    fn from_domain(entity: &E) -> Self;
    fn get_id_filter(&self) -> Document;
}

fn get_id_filter(oid: &ObjectId) -> Document {
    doc! {
        "_id": oid
    }
}

fn entity_to_persistence<E, D: MongoDocument<E>>(entity: &E) -> Result<Document> {
    let raw = D::from_domain(entity);
    Ok(bson::to_document(&raw)?)
}

fn persistence_to_entity<E, D: MongoDocument<E>>(doc: Document) -> Result<E> {
    let raw: D = bson::from_document(doc)?;
    Ok(raw.into_domain())
}

pub async fn insert<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    entity: &E,
) -> Result<()> {
    let doc = entity_to_persistence::<E, D>(entity)?;
    collection.insert_one(doc, None).await?;
    Ok(())
}

pub async fn bulk_insert<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    entities: &[E],
) -> Result<()> {
    if entities.is_empty() {
        return Ok(());
    }
    let docs = entities
        .iter()
        .map(|e| entity_to_persistence::<E, D>(e))
        .collect::<Result<Vec<_>>>()?;
    collection.insert_many(docs, None).await?;
    Ok(())
}

pub async fn save<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    entity: &E,
) -> Result<()> {
    let raw = D::from_domain(entity);
    let filter = raw.get_id_filter();
    let doc = bson::to_document(&raw)?;
    collection.replace_one(filter, doc, None).await?;
    Ok(())
}

pub async fn update_many(
    collection: &Collection<Document>,
    filter: Document,
    update: Document,
) -> Result<()> {
    collection
        .update_many(filter, update, None)
        .await
        .map(|_| ())
        .map_err(anyhow::Error::new)
}

pub async fn find<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    id: &ObjectId,
) -> Option<E> {
    let filter = get_id_filter(id);
    find_one_by::<E, D>(collection, filter).await
}

pub async fn find_one_by<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    filter: Document,
) -> Option<E> {
    match collection.find_one(filter, None).await {
        Ok(Some(doc)) => match persistence_to_entity::<E, D>(doc) {
            Ok(e) => Some(e),
            Err(e) => {
                error!("Unable to read document from {}: {:?}", collection.name(), e);
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            error!("Find one in {} failed: {:?}", collection.name(), e);
            None
        }
    }
}

pub async fn find_many_by<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    filter: Document,
) -> Result<Vec<E>> {
    find_many_by_sorted::<E, D>(collection, filter, None).await
}

pub async fn find_many_by_sorted<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    filter: Document,
    sort: Option<Document>,
) -> Result<Vec<E>> {
    let options = FindOptions::builder().sort(sort).build();
    let cursor = collection.find(filter, options).await?;
    let docs = cursor.try_collect::<Vec<_>>().await?;

    docs.into_iter()
        .map(|doc| persistence_to_entity::<E, D>(doc))
        .collect()
}

pub async fn delete<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    id: &ObjectId,
) -> Option<E> {
    let filter = get_id_filter(id);
    match collection.find_one_and_delete(filter, None).await {
        Ok(Some(doc)) => persistence_to_entity::<E, D>(doc).ok(),
        Ok(None) => None,
        Err(e) => {
            error!("Delete in {} failed: {:?}", collection.name(), e);
            None
        }
    }
}

pub async fn delete_many_by(
    collection: &Collection<Document>,
    filter: Document,
) -> Result<DeleteResult> {
    let res = collection.delete_many(filter, None).await?;
    Ok(DeleteResult {
        deleted_count: res.deleted_count,
    })
}
