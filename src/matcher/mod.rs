/// Fuzzy species-name matching against the PokéAPI name catalog
pub mod distance;
pub mod resolver;

pub use distance::levenshtein;
pub use resolver::{resolve, Resolution, DISTANCE_TOLERANCE};
