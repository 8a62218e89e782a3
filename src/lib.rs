pub mod app;
pub mod browse;
pub mod config;
pub mod deck;
pub mod favorites;
pub mod firestore;
pub mod model;
pub mod names;
pub mod screen;
pub mod seed;
pub mod storage;
pub mod unsplash;
pub mod view;

#[cfg(test)]
mod test_server;

pub use app::App;
pub use deck::{DeckController, Direction};
pub use favorites::{load_likes, Favorites, Stored};
pub use firestore::{DocumentSink, FirestoreClient};
pub use seed::Seeder;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use unsplash::{PhotoSource, UnsplashClient};
