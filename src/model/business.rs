use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Industry {
    Fashion,
    Food,
    Skincare,
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Industry::Fashion => "Fashion",
            Industry::Food => "Food",
            Industry::Skincare => "Skincare",
        };
        f.write_str(name)
    }
}

// Seeder output, one per iteration
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub name: String,
    pub industry: Industry,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub website: String,
}

#[derive(Debug)]
pub struct IndustryConfig {
    pub industry: Industry,
    pub tags: &'static [&'static str],
    pub query: &'static str,
    /// Appended to the generated company name when non-empty
    pub name_suffixes: &'static [&'static str],
}

pub const INDUSTRIES: &[IndustryConfig] = &[
    IndustryConfig {
        industry: Industry::Fashion,
        tags: &["Sustainable", "Modest-Friendly", "Handmade"],
        query: "fashion",
        name_suffixes: &[],
    },
    IndustryConfig {
        industry: Industry::Food,
        tags: &["Local", "Vegan", "Organic"],
        query: "food",
        name_suffixes: &[],
    },
    IndustryConfig {
        industry: Industry::Skincare,
        tags: &["Natural", "Vegan", "Handmade"],
        query: "skincare",
        name_suffixes: &[],
    },
];

/// Fashion brands only, with a wider tag set and clothing-style names
pub const FASHION_ONLY: &[IndustryConfig] = &[IndustryConfig {
    industry: Industry::Fashion,
    tags: &["Sustainable", "Modest-Friendly", "Handmade", "Streetwear", "Luxury"],
    query: "fashion",
    name_suffixes: &["Clothing", "Apparel", "Threads", "Styles", "Wear"],
}];
