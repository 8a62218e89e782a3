use anyhow::{Context, Error, Result};
use log::*;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::config::{require, UnsplashConfig};

const RANDOM_PHOTOS_URL: &str = "https://api.unsplash.com/photos/random";

pub trait PhotoSource {
    /// Up to `count` image URLs matching `query`
    fn fetch(&self, query: &str, count: usize) -> Result<Vec<String>>;
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Photo {
    pub urls: PhotoUrls,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PhotoUrls {
    pub small: String,
}

pub struct UnsplashClient {
    client: Client,
    config: UnsplashConfig,
    base_url: String,
}

impl UnsplashClient {
    pub fn new(client: Client, config: UnsplashConfig) -> Self {
        UnsplashClient {
            client,
            config,
            base_url: RANDOM_PHOTOS_URL.to_owned(),
        }
    }

    /// Points at another random-photos endpoint
    pub fn with_base_url(client: Client, config: UnsplashConfig, base_url: &str) -> Self {
        UnsplashClient {
            base_url: base_url.to_owned(),
            ..UnsplashClient::new(client, config)
        }
    }
}

impl PhotoSource for UnsplashClient {
    fn fetch(&self, query: &str, count: usize) -> Result<Vec<String>> {
        let access_key = require(&self.config.access_key, "UNSPLASH_ACCESS_KEY")?;
        debug!("Fetching {} photos for '{}'", count, query);
        let count = count.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("query", query),
                ("count", count.as_str()),
                ("client_id", access_key),
            ])
            .send()
            .with_context(|| format!("Unsplash request for '{}' failed", query))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::msg(format!(
                "Unsplash responded with {}: {}",
                status,
                response.text().unwrap_or_default().trim()
            )));
        }
        let body = response.text()?;
        photo_urls(&body)
    }
}

fn photo_urls(body: &str) -> Result<Vec<String>> {
    let photos: Vec<Photo> = serde_json::from_str(body)
        .with_context(|| "Failed to de-serialise Unsplash photo list")?;
    Ok(photos.into_iter().map(|p| p.urls.small).collect())
}
