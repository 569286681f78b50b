use crate::error::{ApiError, Result};
use crate::model::Record;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Records in insertion order.
#[derive(Debug)]
pub struct Collection<T: Record> {
    records: Vec<T>,
}

impl<T: Record> Collection<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// First record with the given id.
    pub fn find(&self, id: i32) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Append a record whose id is the current length plus one. After a
    /// delete this may repeat an id still in use; lookups return the first.
    pub fn insert(&mut self, new: T::New) -> Result<T> {
        let id = next_id(self.records.len()).ok_or(ApiError::IdSpaceExhausted {
            collection: T::KIND,
        })?;
        let record = T::from_new(id, new);
        self.records.push(record.clone());
        Ok(record)
    }

    /// Remove every record with the given id, returning the first one removed.
    pub fn remove(&mut self, id: i32) -> Option<T> {
        let position = self.records.iter().position(|r| r.id() == id)?;
        let removed = self.records[position].clone();
        self.records.retain(|r| r.id() != id);
        Some(removed)
    }
}

fn next_id(len: usize) -> Option<i32> {
    i32::try_from(len).ok()?.checked_add(1)
}

/// A collection shared between request handlers.
#[derive(Debug)]
pub struct Table<T: Record> {
    inner: RwLock<Collection<T>>,
}

impl<T: Record> Table<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            inner: RwLock::new(Collection::new(records)),
        }
    }

    pub async fn list(&self) -> Vec<T> {
        self.inner.read().await.records().to_vec()
    }

    pub async fn get(&self, id: i32) -> Option<T> {
        let found = self.inner.read().await.find(id).cloned();
        if found.is_none() {
            debug!("No {} with id {}", T::KIND, id);
        }
        found
    }

    pub async fn add(&self, new: T::New) -> Result<T> {
        let record = self.inner.write().await.insert(new)?;
        info!("Added {} {}", T::KIND, record.id());
        Ok(record)
    }

    pub async fn delete(&self, id: i32) -> Option<T> {
        let removed = self.inner.write().await.remove(id);
        match &removed {
            Some(_) => info!("Deleted {} {}", T::KIND, id),
            None => debug!("Delete of unknown {} {} ignored", T::KIND, id),
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
