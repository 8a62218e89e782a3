use anyhow::Result;
use log::*;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::firestore::{DocumentSink, BUSINESSES};
use crate::model::business::{BusinessRecord, IndustryConfig};
use crate::names;
use crate::unsplash::PhotoSource;

pub const PHOTOS_PER_BUSINESS: usize = 3;

pub struct Seeder<'a, P, D, R> {
    photos: &'a P,
    documents: &'a D,
    rng: R,
    industries: &'a [IndustryConfig],
}

impl<'a, P, D, R> Seeder<'a, P, D, R>
where
    P: PhotoSource,
    D: DocumentSink,
    R: Rng,
{
    pub fn new(photos: &'a P, documents: &'a D, rng: R, industries: &'a [IndustryConfig]) -> Self {
        Seeder {
            photos,
            documents,
            rng,
            industries,
        }
    }

    /// Writes `count` generated businesses, one after the other. Stops at the
    /// first failed write; photo failures only cost the record its images.
    pub fn seed(&mut self, count: usize) -> Result<Vec<String>> {
        let mut ids = Vec::with_capacity(count);
        for _ in 0..count {
            let config = match self.industries.choose(&mut self.rng) {
                Some(c) => c,
                None => break,
            };
            let images = match self.photos.fetch(config.query, PHOTOS_PER_BUSINESS) {
                Ok(images) => images,
                Err(e) => {
                    error!("Error fetching Unsplash images: {:#}", e);
                    vec![]
                }
            };
            let record = generate(&mut self.rng, config, images);
            let id = self.documents.add(BUSINESSES, &record)?;
            info!("Added: {} | Industry: {}", record.name, record.industry);
            debug!("Document id {}", id);
            ids.push(id);
        }
        Ok(ids)
    }
}

pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    config: &IndustryConfig,
    images: Vec<String>,
) -> BusinessRecord {
    let mut name = names::company_name(rng);
    if let Some(suffix) = config.name_suffixes.choose(rng) {
        name = format!("{} {}", name, suffix);
    }
    BusinessRecord {
        name,
        industry: config.industry,
        tags: sample_tags(rng, config.tags),
        images,
        website: names::website(rng),
    }
}

/// One or two distinct tags from `vocabulary`
pub fn sample_tags<R: Rng + ?Sized>(rng: &mut R, vocabulary: &[&str]) -> Vec<String> {
    let upper = vocabulary.len().min(2);
    if upper == 0 {
        return vec![];
    }
    let amount = rng.gen_range(1..=upper);
    vocabulary
        .choose_multiple(rng, amount)
        .map(|t| (*t).to_owned())
        .collect()
}
