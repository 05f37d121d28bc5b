/// Name resolution against the canonical catalog
use serde::Serialize;

use crate::matcher::distance::levenshtein;

/// Maximum edit distance for a correction to be offered
pub const DISTANCE_TOLERANCE: usize = 3;

/// Outcome of resolving a typed name against the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// The folded input appears verbatim in the catalog
    Exact { name: String },
    /// Closest catalog entry within tolerance; drives the "did you mean" hint
    Corrected { input: String, matched: String },
    /// Nothing in the catalog within tolerance
    Unresolved { input: String },
}

impl Resolution {
    /// The canonical name to fetch downstream, if resolution succeeded
    pub fn canonical(&self) -> Option<&str> {
        match self {
            Resolution::Exact { name } => Some(name),
            Resolution::Corrected { matched, .. } => Some(matched),
            Resolution::Unresolved { .. } => None,
        }
    }
}

/// Resolve `input` against `catalog`.
///
/// Exact membership short-circuits the distance scan. Otherwise the entry with
/// minimum edit distance wins; ties go to the first minimal entry in catalog
/// order, so catalog order is significant. An empty catalog is always
/// `Unresolved`.
pub fn resolve(input: &str, catalog: &[String]) -> Resolution {
    let input = input.to_lowercase();

    if catalog.iter().any(|c| c == &input) {
        return Resolution::Exact { name: input };
    }

    let mut best: Option<(&String, usize)> = None;
    for candidate in catalog {
        let d = levenshtein(&input, candidate);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((candidate, d)),
        }
    }

    match best {
        Some((candidate, d)) if d <= DISTANCE_TOLERANCE => Resolution::Corrected {
            input,
            matched: candidate.clone(),
        },
        _ => Resolution::Unresolved { input },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_match() {
        let cat = catalog(&["pikachu", "raichu"]);
        assert_eq!(
            resolve("pikachu", &cat),
            Resolution::Exact {
                name: "pikachu".to_string()
            }
        );
    }

    #[test]
    fn test_exact_match_folds_case() {
        let cat = catalog(&["pikachu"]);
        assert_eq!(
            resolve("PIKACHU", &cat),
            Resolution::Exact {
                name: "pikachu".to_string()
            }
        );
    }

    #[test]
    fn test_correction_within_tolerance() {
        let cat = catalog(&["pikachu", "raichu"]);
        assert_eq!(
            resolve("pikachuu", &cat),
            Resolution::Corrected {
                input: "pikachuu".to_string(),
                matched: "pikachu".to_string(),
            }
        );
    }

    #[test]
    fn test_unresolved_beyond_tolerance() {
        let cat = catalog(&["pikachu", "raichu"]);
        assert_eq!(
            resolve("zzzzzzzzzz", &cat),
            Resolution::Unresolved {
                input: "zzzzzzzzzz".to_string()
            }
        );
    }

    #[test]
    fn test_empty_catalog_is_unresolved() {
        assert_eq!(
            resolve("pikachu", &[]),
            Resolution::Unresolved {
                input: "pikachu".to_string()
            }
        );
    }

    #[test]
    fn test_tie_goes_to_first_in_catalog_order() {
        // "abcd" is distance 1 from both entries
        let cat = catalog(&["abcde", "abcda"]);
        assert_eq!(
            resolve("abcd", &cat),
            Resolution::Corrected {
                input: "abcd".to_string(),
                matched: "abcde".to_string(),
            }
        );

        let reversed = catalog(&["abcda", "abcde"]);
        assert_eq!(
            resolve("abcd", &reversed),
            Resolution::Corrected {
                input: "abcd".to_string(),
                matched: "abcda".to_string(),
            }
        );
    }
}
