use anyhow::{Context, Result};
use log::*;
use std::io;
use std::sync::Arc;
use structopt::StructOpt;

use sparks::config::{storage_path, FirebaseConfig, UnsplashConfig};
use sparks::model::business::{FASHION_ONLY, INDUSTRIES};
use sparks::model::display::mock_businesses;
use sparks::{browse, App, FileStore, FirestoreClient, Seeder, UnsplashClient};

#[derive(Debug, StructOpt)]
#[structopt(name = "sparks", about = "Discover local businesses, one card at a time")]
struct Opt {
    #[structopt(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Debug, StructOpt)]
enum Cmd {
    /// Add generated businesses to the Firestore "businesses" collection
    Seed {
        #[structopt(short = "n", long, default_value = "1")]
        count: usize,
        /// Seed fashion brands only
        #[structopt(long)]
        fashion_only: bool,
        #[structopt(flatten)]
        firebase: FirebaseConfig,
        #[structopt(flatten)]
        unsplash: UnsplashConfig,
    },
    /// Swipe through businesses in the terminal
    Browse {
        /// Where liked businesses are kept
        #[structopt(long)]
        storage: Option<String>,
    },
}

fn init_logging() {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(LevelFilter::Info);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

/// Settings group filled from the environment alone
fn from_env<T: StructOpt>() -> Result<T> {
    Ok(T::from_iter_safe(std::iter::once("sparks"))?)
}

fn seed(count: usize, fashion_only: bool, firebase: FirebaseConfig, unsplash: UnsplashConfig) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let photos = UnsplashClient::new(client.clone(), unsplash);
    let documents = FirestoreClient::new(client, firebase);
    let industries = if fashion_only { FASHION_ONLY } else { INDUSTRIES };
    let mut seeder = Seeder::new(&photos, &documents, rand::thread_rng(), industries);
    let ids = seeder.seed(count)?;
    info!("Seeded {} businesses", ids.len());
    Ok(())
}

fn browse(storage: Option<String>) -> Result<()> {
    let path = storage_path(storage.as_deref())?;
    debug!("Using storage file {:?}", path);
    let mut app = App::start(mock_businesses(), Arc::new(FileStore::new(path)));
    let stdin = io::stdin();
    browse::run(&mut app, stdin.lock(), io::stdout()).with_context(|| "Terminal session failed")
}

fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e).with_context(|| "Error reading .env file");
        }
    }
    init_logging();
    let opt = Opt::from_args();
    match opt.cmd {
        None => seed(1, false, from_env()?, from_env()?),
        Some(Cmd::Seed {
            count,
            fashion_only,
            firebase,
            unsplash,
        }) => seed(count, fashion_only, firebase, unsplash),
        Some(Cmd::Browse { storage }) => browse(storage),
    }
}
