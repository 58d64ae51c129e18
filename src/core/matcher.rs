use crate::core::similarity::{compare_two_strings, normalize};
use crate::models::MatchResult;

/// Minimum similarity a candidate needs to count as a match
pub const TARGET_SIMILARITY: f64 = 0.6;

/// Greedy nearest-neighbor question matcher
///
/// Scores the query against every candidate and keeps the first candidate
/// with the highest score. The winner is returned only if its score reaches
/// the threshold.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    threshold: f64,
}

impl Matcher {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Similarity between a query and a candidate question
    #[inline]
    pub fn score(&self, query: &str, candidate: &str) -> f64 {
        compare_two_strings(&normalize(query), &normalize(candidate))
    }

    /// Find the predefined question closest to `query`
    ///
    /// # Arguments
    /// * `query` - Raw user text, may be empty
    /// * `candidates` - Question strings in priority order
    ///
    /// # Returns
    /// `MatchResult::Matched` with the winning candidate, or `NoMatch` when the
    /// list is empty or the best score is below the threshold
    pub fn find_best_match<'a, I>(&self, query: &str, candidates: I) -> MatchResult
    where
        I: IntoIterator<Item = &'a str>,
    {
        let query = normalize(query);
        let mut closest: Option<&str> = None;
        let mut highest = 0.0;

        for candidate in candidates {
            let similarity = compare_two_strings(&query, &normalize(candidate));
            // Strict comparison keeps the first of equally scored candidates
            if similarity > highest {
                highest = similarity;
                closest = Some(candidate);
            }
        }

        tracing::debug!(
            "Highest similarity for {:?}: {:.3} ({:?})",
            query,
            highest,
            closest
        );

        match closest {
            Some(question) if highest >= self.threshold => {
                MatchResult::Matched(question.to_string())
            }
            _ => MatchResult::NoMatch,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(TARGET_SIMILARITY)
    }
}
