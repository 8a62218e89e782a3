use anyhow::Result;
use itertools::Itertools;
use log::*;
use std::sync::mpsc::{channel, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;

use crate::model::display::DisplayBusiness;
use crate::storage::KeyValueStore;

pub const LIKE_KEY: &str = "sparks_likes_v1";

/// What a read of the persisted likes produced. A missing key and an
/// unparseable value are both `NoData`.
#[derive(Debug, PartialEq)]
pub enum Stored {
    Ids(Vec<String>),
    NoData,
}

pub fn read_ids(store: &dyn KeyValueStore) -> Stored {
    let raw = match store.get(LIKE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Stored::NoData,
        Err(e) => {
            warn!("Error reading liked businesses: {:#}", e);
            return Stored::NoData;
        }
    };
    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(ids) => Stored::Ids(ids),
        Err(e) => {
            warn!("Ignoring malformed liked businesses: {}", e);
            Stored::NoData
        }
    }
}

/// Resolves persisted ids against `known`, keeping stored order. Unknown and
/// repeated ids are dropped.
pub fn load_likes(store: &dyn KeyValueStore, known: &[DisplayBusiness]) -> Vec<DisplayBusiness> {
    let ids = match read_ids(store) {
        Stored::Ids(ids) => ids,
        Stored::NoData => return vec![],
    };
    ids.into_iter()
        .unique()
        .filter_map(|id| {
            let found = known.iter().find(|b| b.id == id).cloned();
            if found.is_none() {
                debug!("Dropping liked id {} with no matching business", id);
            }
            found
        })
        .collect()
}

/// Writes id snapshots on a background thread, in the order they were queued
pub struct Persister {
    queue: Option<Sender<Vec<String>>>,
    worker: Option<JoinHandle<()>>,
}

impl Persister {
    pub fn spawn(store: Arc<dyn KeyValueStore>) -> Self {
        let (queue, pending) = channel::<Vec<String>>();
        let worker = std::thread::spawn(move || {
            for ids in pending {
                if let Err(e) = write_ids(store.as_ref(), &ids) {
                    warn!("Error saving liked businesses: {:#}", e);
                }
            }
        });
        Persister {
            queue: Some(queue),
            worker: Some(worker),
        }
    }

    pub fn save(&self, ids: Vec<String>) {
        if let Some(queue) = &self.queue {
            if queue.send(ids).is_err() {
                warn!("Liked businesses writer has stopped");
            }
        }
    }
}

impl Drop for Persister {
    // Close the queue and wait for queued writes to land
    fn drop(&mut self) {
        self.queue.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                error!("Liked businesses writer panicked");
            }
        }
    }
}

fn write_ids(store: &dyn KeyValueStore, ids: &[String]) -> Result<()> {
    let raw = serde_json::to_string(ids)?;
    store.set(LIKE_KEY, &raw)
}

pub struct Favorites {
    liked: Vec<DisplayBusiness>,
    persister: Persister,
}

impl Favorites {
    pub fn restore(store: Arc<dyn KeyValueStore>, known: &[DisplayBusiness]) -> Self {
        let liked = load_likes(store.as_ref(), known);
        info!("Restored {} liked businesses", liked.len());
        Favorites {
            liked,
            persister: Persister::spawn(store),
        }
    }

    pub fn liked(&self) -> &[DisplayBusiness] {
        &self.liked
    }

    pub fn contains(&self, id: &str) -> bool {
        self.liked.iter().any(|b| b.id == id)
    }

    /// Appends in memory, then queues the write. Returns false if already liked.
    pub fn like(&mut self, business: DisplayBusiness) -> bool {
        if self.contains(&business.id) {
            return false;
        }
        debug!("Liked {}", business.id);
        self.liked.push(business);
        self.persister.save(self.liked.iter().map(|b| b.id.clone()).collect());
        true
    }

    /// Left swipes are not tracked
    pub fn pass(&mut self, _business: &DisplayBusiness) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::display::mock_businesses;
    use crate::storage::MemoryStore;
    use anyhow::Error;

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::msg("disk unavailable"))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::msg("disk full"))
        }
    }

    fn ids(liked: &[DisplayBusiness]) -> Vec<&str> {
        liked.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn absent_and_malformed_values_are_no_data() {
        let store = MemoryStore::default();
        assert_eq!(read_ids(&store), Stored::NoData);
        store.set(LIKE_KEY, "{oops").unwrap();
        assert_eq!(read_ids(&store), Stored::NoData);
        store.set(LIKE_KEY, "[1, 2]").unwrap();
        assert_eq!(read_ids(&store), Stored::NoData);
        assert!(load_likes(&store, &mock_businesses()).is_empty());
        assert_eq!(read_ids(&FailingStore), Stored::NoData);
    }

    #[test]
    fn unknown_ids_are_dropped() {
        let store = MemoryStore::default();
        store.set(LIKE_KEY, r#"["b2","gone","b4"]"#).unwrap();
        assert_eq!(ids(&load_likes(&store, &mock_businesses())), vec!["b2", "b4"]);
    }

    #[test]
    fn repeated_ids_load_once() {
        let store = MemoryStore::default();
        store.set(LIKE_KEY, r#"["b3","b1","b3"]"#).unwrap();
        assert_eq!(ids(&load_likes(&store, &mock_businesses())), vec!["b3", "b1"]);
    }

    #[test]
    fn like_survives_restart_exactly_once() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::default());
        let all = mock_businesses();
        {
            let mut favorites = Favorites::restore(store.clone(), &all);
            assert!(favorites.like(all[1].clone()));
            assert!(!favorites.like(all[1].clone()));
        }
        let favorites = Favorites::restore(store.clone(), &all);
        assert_eq!(ids(favorites.liked()), vec!["b2"]);
    }

    #[test]
    fn writes_land_in_like_order() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::default());
        let all = mock_businesses();
        {
            let mut favorites = Favorites::restore(store.clone(), &all);
            for b in all.iter().rev() {
                favorites.like(b.clone());
            }
        }
        assert_eq!(
            read_ids(store.as_ref()),
            Stored::Ids(vec!["b4".into(), "b3".into(), "b2".into(), "b1".into()])
        );
    }

    #[test]
    fn failed_write_keeps_in_memory_like() {
        let all = mock_businesses();
        let mut favorites = Favorites::restore(Arc::new(FailingStore), &all);
        assert!(favorites.like(all[0].clone()));
        assert_eq!(ids(favorites.liked()), vec!["b1"]);
    }
}
