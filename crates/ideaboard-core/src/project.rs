//! Pure view projection over a loaded analysis document.
//!
//! Everything here is synchronous and side-effect-free: the presentation
//! layer calls these after a load completes, and tests exercise them without
//! any I/O or rendering environment.

use serde::Serialize;

use crate::error::ProjectionError;
use crate::types::{AnalysisDocument, AnalysisSummary, IdeaCluster, TokenUsage};

/// How many ranked ideas the dashboard shows by default.
pub const DEFAULT_TOP_N: usize = 10;

/// How many categories the histogram keeps.
pub const HISTOGRAM_LIMIT: usize = 5;

/// The first `n` entries of `product_requests` in stored order.
///
/// Stored order encodes rank, so this is a rank-preserving truncation — no
/// re-sorting. Returns fewer than `n` entries (possibly zero) when the
/// document is short.
#[must_use]
pub fn top_n(doc: &AnalysisDocument, n: usize) -> &[IdeaCluster] {
    let end = doc.product_requests.len().min(n);
    &doc.product_requests[..end]
}

/// [`top_n`] with the default cutoff of [`DEFAULT_TOP_N`].
#[must_use]
pub fn top_ideas(doc: &AnalysisDocument) -> &[IdeaCluster] {
    top_n(doc, DEFAULT_TOP_N)
}

/// One bar of the category histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Groups `product_requests` by exact `category` string, descending by
/// count, ties broken by first appearance in the document, truncated to
/// [`HISTOGRAM_LIMIT`].
///
/// Categories are free text from the classifier; no normalization or fuzzy
/// merging is applied. An empty document yields an empty histogram.
#[must_use]
pub fn category_histogram(doc: &AnalysisDocument) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for cluster in &doc.product_requests {
        match counts.iter_mut().find(|c| c.category == cluster.category) {
            Some(existing) => existing.count += 1,
            None => counts.push(CategoryCount {
                category: cluster.category.clone(),
                count: 1,
            }),
        }
    }
    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(HISTOGRAM_LIMIT);
    counts
}

/// Percentage of analyzed tweets that yielded a product request, clamped to
/// `[0, 100]` to defend against inconsistent upstream counters.
///
/// # Errors
///
/// Returns [`ProjectionError::DivisionUndefined`] when
/// `total_tweets_analyzed` is zero; the rate is undefined rather than zero.
#[allow(clippy::cast_precision_loss)]
pub fn discovery_rate(summary: &AnalysisSummary) -> Result<f64, ProjectionError> {
    if summary.total_tweets_analyzed == 0 {
        return Err(ProjectionError::DivisionUndefined);
    }
    let rate =
        summary.product_requests_found as f64 / summary.total_tweets_analyzed as f64 * 100.0;
    Ok(rate.clamp(0.0, 100.0))
}

/// One idea as rendered on the dashboard: its document rank plus the derived
/// engagement total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedIdea {
    /// 1-based rank taken from document order.
    pub rank: usize,
    pub total_engagement: u64,
    #[serde(flatten)]
    pub idea: IdeaCluster,
}

/// The full view model the dashboard renders for one day.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub total_tweets_analyzed: u64,
    pub product_requests_found: u64,
    pub token_usage: TokenUsage,
    /// `None` when the rate is undefined (zero tweets analyzed); renderers
    /// show an explicit "n/a" instead of a fake zero.
    pub discovery_rate_pct: Option<f64>,
    pub top_ideas: Vec<RankedIdea>,
    pub category_histogram: Vec<CategoryCount>,
}

impl DashboardView {
    /// Projects a loaded document into the aggregates the dashboard needs.
    #[must_use]
    pub fn project(doc: &AnalysisDocument) -> Self {
        let top_ideas = top_ideas(doc)
            .iter()
            .enumerate()
            .map(|(i, idea)| RankedIdea {
                rank: i + 1,
                total_engagement: idea.total_engagement(),
                idea: idea.clone(),
            })
            .collect();

        Self {
            total_tweets_analyzed: doc.summary.total_tweets_analyzed,
            product_requests_found: doc.summary.product_requests_found,
            token_usage: doc.summary.token_usage,
            discovery_rate_pct: discovery_rate(&doc.summary).ok(),
            top_ideas,
            category_histogram: category_histogram(doc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster(category: &str) -> IdeaCluster {
        IdeaCluster {
            category: category.to_string(),
            description: format!("{category} idea"),
            pain_point: "pain".to_string(),
            target_audience: "Developers".to_string(),
            urgency_level: "Medium".to_string(),
            tweets: vec![],
        }
    }

    fn doc_with(categories: &[&str]) -> AnalysisDocument {
        AnalysisDocument {
            summary: AnalysisSummary {
                total_tweets_analyzed: 438,
                product_requests_found: 10,
                token_usage: TokenUsage::default(),
            },
            product_requests: categories.iter().map(|c| cluster(c)).collect(),
        }
    }

    #[test]
    fn top_n_truncates_in_stored_order() {
        let names: Vec<String> = (0..15).map(|i| format!("cat-{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let doc = doc_with(&refs);

        let top = top_n(&doc, 10);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].category, "cat-0");
        assert_eq!(top[9].category, "cat-9");
    }

    #[test]
    fn top_n_returns_everything_when_document_is_short() {
        let doc = doc_with(&["a", "b", "c"]);
        assert_eq!(top_n(&doc, 10).len(), 3);
        assert_eq!(top_ideas(&doc).len(), 3);
    }

    #[test]
    fn top_n_of_zero_is_empty() {
        let doc = doc_with(&["a", "b"]);
        assert!(top_n(&doc, 0).is_empty());
    }

    #[test]
    fn histogram_counts_sorts_and_keeps_first_seen_tie_order() {
        let doc = doc_with(&["A", "B", "A", "C", "B", "A"]);
        let histogram = category_histogram(&doc);
        assert_eq!(
            histogram,
            vec![
                CategoryCount { category: "A".to_string(), count: 3 },
                CategoryCount { category: "B".to_string(), count: 2 },
                CategoryCount { category: "C".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn histogram_truncates_to_five_categories() {
        let doc = doc_with(&["a", "b", "c", "d", "e", "f", "g"]);
        assert_eq!(category_histogram(&doc).len(), HISTOGRAM_LIMIT);
    }

    #[test]
    fn histogram_of_empty_document_is_empty() {
        let doc = doc_with(&[]);
        assert!(category_histogram(&doc).is_empty());
    }

    #[test]
    fn discovery_rate_matches_expected_ratio() {
        let summary = AnalysisSummary {
            total_tweets_analyzed: 438,
            product_requests_found: 10,
            token_usage: TokenUsage::default(),
        };
        let rate = discovery_rate(&summary).expect("defined");
        assert!((rate - 2.283_105).abs() < 0.001, "got {rate}");
    }

    #[test]
    fn discovery_rate_is_undefined_for_zero_analyzed() {
        let summary = AnalysisSummary {
            total_tweets_analyzed: 0,
            product_requests_found: 10,
            token_usage: TokenUsage::default(),
        };
        assert_eq!(
            discovery_rate(&summary),
            Err(ProjectionError::DivisionUndefined)
        );
    }

    #[test]
    fn discovery_rate_is_clamped_when_counters_disagree() {
        let summary = AnalysisSummary {
            total_tweets_analyzed: 5,
            product_requests_found: 50,
            token_usage: TokenUsage::default(),
        };
        assert_eq!(discovery_rate(&summary).expect("defined"), 100.0);
    }

    #[test]
    fn dashboard_view_assembles_rank_and_engagement() {
        let mut doc = doc_with(&["A", "B"]);
        doc.product_requests[0].tweets = vec![
            crate::Tweet {
                id: "1".to_string(),
                text: String::new(),
                user_handle: String::new(),
                created_at: String::new(),
                engagement_score: 7,
                url: String::new(),
            },
            crate::Tweet {
                id: "2".to_string(),
                text: String::new(),
                user_handle: String::new(),
                created_at: String::new(),
                engagement_score: 3,
                url: String::new(),
            },
        ];

        let view = DashboardView::project(&doc);
        assert_eq!(view.top_ideas.len(), 2);
        assert_eq!(view.top_ideas[0].rank, 1);
        assert_eq!(view.top_ideas[0].total_engagement, 10);
        assert_eq!(view.top_ideas[1].rank, 2);
        assert_eq!(view.category_histogram.len(), 2);
        assert!(view.discovery_rate_pct.is_some());
    }

    #[test]
    fn dashboard_view_flags_undefined_rate_as_none() {
        let mut doc = doc_with(&["A"]);
        doc.summary.total_tweets_analyzed = 0;
        let view = DashboardView::project(&doc);
        assert_eq!(view.discovery_rate_pct, None);
    }
}
