//! Wire types for one day's analysis artifact.
//!
//! Field names match the persisted JSON exactly; the loader deserializes
//! documents straight into these structs. Documents are produced wholesale by
//! the categorizer job and are never mutated here.

use serde::{Deserialize, Serialize};

/// A single scraped tweet as recorded at analysis time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    /// Opaque identifier, unique within one document.
    pub id: String,
    /// Raw tweet content.
    pub text: String,
    /// Author handle; may lack a leading `@`.
    pub user_handle: String,
    /// ISO-8601 timestamp string, displayed verbatim.
    pub created_at: String,
    /// Likes + replies + retweets at scrape time, pre-weighted upstream.
    pub engagement_score: u64,
    /// Absolute link to the tweet.
    pub url: String,
}

/// One classified group of related tweets representing a candidate product
/// opportunity.
///
/// `category` and `urgency_level` are free text straight out of the LLM
/// response. `urgency_level` is `High`/`Medium`/`Low` in practice but the
/// classifier contract is not closed, so both stay open strings and consumers
/// must handle unrecognized values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaCluster {
    pub category: String,
    pub description: String,
    pub pain_point: String,
    pub target_audience: String,
    pub urgency_level: String,
    /// Supporting tweets; usually non-empty but an empty list is valid.
    pub tweets: Vec<Tweet>,
}

impl IdeaCluster {
    /// Sum of `engagement_score` over the cluster's tweets. Zero for an
    /// empty tweet list. Computed on demand, never persisted.
    #[must_use]
    pub fn total_engagement(&self) -> u64 {
        self.tweets.iter().map(|t| t.engagement_score).sum()
    }
}

/// Token accounting reported by the classification call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    /// Reported by the vendor; should equal input + output but is used as
    /// provided rather than recomputed.
    pub total_tokens: u64,
}

/// Run-level counters for one day's analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_tweets_analyzed: u64,
    /// Expected, but not guaranteed, to equal the number of entries in
    /// `product_requests`. Never reconciled here.
    pub product_requests_found: u64,
    pub token_usage: TokenUsage,
}

/// The unit of storage: one immutable document per date key.
///
/// `product_requests` order is significant — index 0 is the top-ranked idea —
/// and is preserved through loading and projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisDocument {
    pub summary: AnalysisSummary,
    pub product_requests: Vec<IdeaCluster>,
}
