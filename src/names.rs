use rand::seq::SliceRandom;
use rand::Rng;

const LAST_NAMES: &[&str] = &[
    "Abbott", "Bauch", "Collins", "Dietrich", "Ernser", "Feeney", "Gislason", "Hartmann",
    "Jacobs", "Kessler", "Lowe", "Mertz", "Nolan", "O'Keefe", "Pollich", "Quigley",
    "Rempel", "Schaefer", "Torphy", "Upton", "Vandervort", "Walsh", "Yost", "Zieme",
];

const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "and Sons", "Co"];

const ADJECTIVES: &[&str] = &[
    "bright", "cozy", "golden", "humble", "lively", "mellow", "quiet", "rustic", "sunny", "tidy",
];

const NOUNS: &[&str] = &[
    "basket", "corner", "harbor", "lantern", "market", "meadow", "orchard", "pantry", "studio",
    "workshop",
];

const TLDS: &[&str] = &["com", "net", "org", "biz", "info"];

fn pick<R: Rng + ?Sized>(rng: &mut R, words: &[&'static str]) -> &'static str {
    // Word lists are non-empty constants
    words.choose(rng).copied().unwrap_or_default()
}

/// Company name in one of the usual shapes: "Yost LLC", "Nolan - Walsh",
/// "Abbott, Lowe and Mertz"
pub fn company_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.gen_range(0..3) {
        0 => format!("{} {}", pick(rng, LAST_NAMES), pick(rng, COMPANY_SUFFIXES)),
        1 => format!("{} - {}", pick(rng, LAST_NAMES), pick(rng, LAST_NAMES)),
        _ => format!(
            "{}, {} and {}",
            pick(rng, LAST_NAMES),
            pick(rng, LAST_NAMES),
            pick(rng, LAST_NAMES)
        ),
    }
}

pub fn website<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "https://{}-{}.{}/",
        pick(rng, ADJECTIVES),
        pick(rng, NOUNS),
        pick(rng, TLDS)
    )
}
