//! Progress Aggregation
//!
//! Per-subject averages and trend classification over a chronological
//! history of graded quizzes. Every figure for a subject depends only on
//! that subject's own entries, in the order they were recorded.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::sanitize::mean;
use crate::types::ScoredEntry;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendParams {
    /// Number of most recent entries a subject needs before it is classified
    pub window_size: usize,
    pub improving_threshold: f64,
    pub declining_threshold: f64,
}

impl Default for TrendParams {
    fn default() -> Self {
        Self {
            window_size: 3,
            improving_threshold: 5.0,
            declining_threshold: -5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectTrend {
    CollectingData,
    Improving,
    NeedsAttention,
    Stable,
}

impl SubjectTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CollectingData => "collecting data",
            Self::Improving => "improving",
            Self::NeedsAttention => "needs attention",
            Self::Stable => "stable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallTrend {
    NotEnoughData,
    Improving,
    NeedsAttention,
    Stable,
}

impl OverallTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotEnoughData => "not enough data",
            Self::Improving => "improving",
            Self::NeedsAttention => "needs attention",
            Self::Stable => "stable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceTrend {
    pub subjects: BTreeMap<String, SubjectTrend>,
    pub overall: OverallTrend,
}

/// Groups scores by subject, preserving chronological order within each.
pub fn scores_by_subject<'a, I>(entries: I) -> BTreeMap<String, Vec<f64>>
where
    I: IntoIterator<Item = &'a ScoredEntry>,
{
    let mut grouped: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for entry in entries {
        grouped
            .entry(entry.subject.clone())
            .or_default()
            .push(entry.score);
    }
    grouped
}

/// Mean score per subject; empty when there is no history.
pub fn average_scores(grouped: &BTreeMap<String, Vec<f64>>) -> BTreeMap<String, f64> {
    grouped
        .iter()
        .filter_map(|(subject, scores)| mean(scores).map(|avg| (subject.clone(), avg)))
        .collect()
}

/// Classifies one subject's chronological scores.
pub fn classify_subject(scores: &[f64], params: &TrendParams) -> SubjectTrend {
    let window = params.window_size.max(1);
    if scores.len() < window {
        return SubjectTrend::CollectingData;
    }

    let recent = &scores[scores.len() - window..];
    let first = recent[0];
    let last = recent[recent.len() - 1];
    let avg_change = (last - first) / recent.len() as f64;

    if avg_change > params.improving_threshold {
        SubjectTrend::Improving
    } else if avg_change < params.declining_threshold {
        SubjectTrend::NeedsAttention
    } else {
        SubjectTrend::Stable
    }
}

/// Strict majority between improving and needs-attention subjects.
pub fn overall_trend(subjects: &BTreeMap<String, SubjectTrend>) -> OverallTrend {
    if subjects.is_empty() {
        return OverallTrend::NotEnoughData;
    }

    let improving = subjects
        .values()
        .filter(|t| **t == SubjectTrend::Improving)
        .count();
    let needs_attention = subjects
        .values()
        .filter(|t| **t == SubjectTrend::NeedsAttention)
        .count();

    match improving.cmp(&needs_attention) {
        std::cmp::Ordering::Greater => OverallTrend::Improving,
        std::cmp::Ordering::Less => OverallTrend::NeedsAttention,
        std::cmp::Ordering::Equal => OverallTrend::Stable,
    }
}

pub fn performance_trend(
    grouped: &BTreeMap<String, Vec<f64>>,
    params: &TrendParams,
) -> PerformanceTrend {
    let subjects: BTreeMap<String, SubjectTrend> = grouped
        .iter()
        .map(|(subject, scores)| (subject.clone(), classify_subject(scores, params)))
        .collect();
    let overall = overall_trend(&subjects);

    PerformanceTrend { subjects, overall }
}
