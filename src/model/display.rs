use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct DisplayBusiness {
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub img: String,
    pub blurb: String,
}

fn business(id: &str, name: &str, tags: &[&str], img: &str, blurb: &str) -> DisplayBusiness {
    DisplayBusiness {
        id: id.to_owned(),
        name: name.to_owned(),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        img: img.to_owned(),
        blurb: blurb.to_owned(),
    }
}

/// Fixed business list the client swipes through
pub fn mock_businesses() -> Vec<DisplayBusiness> {
    vec![
        business(
            "b1",
            "Bean & Bloom Coffee",
            &["Cafe", "Local", "Study-friendly"],
            "https://images.unsplash.com/photo-1504754524776-8f4f37790ca0?q=80&w=1400&auto=format&fit=crop",
            "Small-batch espresso, house syrups, and sunny patio seating.",
        ),
        business(
            "b2",
            "Sunrise Thrift",
            &["Thrift", "Vintage", "Affordable"],
            "https://images.unsplash.com/photo-1512436991641-6745cdb1723f?q=80&w=1400&auto=format&fit=crop",
            "Curated second-hand finds supporting neighborhood programs.",
        ),
        business(
            "b3",
            "Lotus Street Eats",
            &["Food Truck", "Asian Fusion", "Spicy"],
            "https://images.unsplash.com/photo-1544025162-d76694265947?q=80&w=1400&auto=format&fit=crop",
            "Late-night noodles and bao. Vegan options available!",
        ),
        business(
            "b4",
            "Page Turners Bookshop",
            &["Books", "Indie", "Events"],
            "https://images.unsplash.com/photo-1519681393784-d120267933ba?q=80&w=1400&auto=format&fit=crop",
            "Author readings every Thursday. Cozy reading nooks inside.",
        ),
    ]
}
