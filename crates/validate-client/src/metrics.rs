//! Metric selection for new runs.
//!
//! `MetricFlags::effective` is the only place that decides which metrics a
//! run computes. It does no I/O, so the rules can be checked without a
//! client.

use serde::{Deserialize, Serialize};

use crate::error::{ValidateError, ValidateResult};

/// An evaluation dimension a run can compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    AnswerSimilarityScore,
    RetrievalPrecision,
    AugmentationPrecision,
    AugmentationAccuracy,
    AnswerConsistency,
    AnswerConsistencyBinary,
    RetrievalKRecall,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::AnswerSimilarityScore,
        Metric::RetrievalPrecision,
        Metric::AugmentationPrecision,
        Metric::AugmentationAccuracy,
        Metric::AnswerConsistency,
        Metric::AnswerConsistencyBinary,
        Metric::RetrievalKRecall,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::AnswerSimilarityScore => "answer_similarity_score",
            Metric::RetrievalPrecision => "retrieval_precision",
            Metric::AugmentationPrecision => "augmentation_precision",
            Metric::AugmentationAccuracy => "augmentation_accuracy",
            Metric::AnswerConsistency => "answer_consistency",
            Metric::AnswerConsistencyBinary => "answer_consistency_binary",
            Metric::RetrievalKRecall => "retrieval_k_recall",
        }
    }

    /// Whether the service can compute this metric today.
    pub fn is_supported(&self) -> bool {
        !matches!(
            self,
            Metric::AnswerConsistencyBinary | Metric::RetrievalKRecall
        )
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which metrics a run should compute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricFlags {
    #[serde(default)]
    pub answer_similarity_score: bool,
    #[serde(default)]
    pub retrieval_precision: bool,
    #[serde(default)]
    pub augmentation_precision: bool,
    #[serde(default)]
    pub augmentation_accuracy: bool,
    #[serde(default)]
    pub answer_consistency: bool,
    #[serde(default)]
    pub answer_consistency_binary: bool,
    #[serde(default)]
    pub retrieval_k_recall: bool,
}

impl MetricFlags {
    /// The set used when the caller selects nothing.
    pub fn defaults() -> Self {
        Self {
            answer_similarity_score: true,
            retrieval_precision: true,
            augmentation_precision: true,
            augmentation_accuracy: true,
            answer_consistency: true,
            answer_consistency_binary: false,
            retrieval_k_recall: false,
        }
    }

    pub fn is_set(&self, metric: Metric) -> bool {
        match metric {
            Metric::AnswerSimilarityScore => self.answer_similarity_score,
            Metric::RetrievalPrecision => self.retrieval_precision,
            Metric::AugmentationPrecision => self.augmentation_precision,
            Metric::AugmentationAccuracy => self.augmentation_accuracy,
            Metric::AnswerConsistency => self.answer_consistency,
            Metric::AnswerConsistencyBinary => self.answer_consistency_binary,
            Metric::RetrievalKRecall => self.retrieval_k_recall,
        }
    }

    /// Set a single metric.
    pub fn with(mut self, metric: Metric) -> Self {
        match metric {
            Metric::AnswerSimilarityScore => self.answer_similarity_score = true,
            Metric::RetrievalPrecision => self.retrieval_precision = true,
            Metric::AugmentationPrecision => self.augmentation_precision = true,
            Metric::AugmentationAccuracy => self.augmentation_accuracy = true,
            Metric::AnswerConsistency => self.answer_consistency = true,
            Metric::AnswerConsistencyBinary => self.answer_consistency_binary = true,
            Metric::RetrievalKRecall => self.retrieval_k_recall = true,
        }
        self
    }

    /// True if at least one flag is set.
    pub fn any(&self) -> bool {
        Metric::ALL.iter().any(|m| self.is_set(*m))
    }

    /// Enabled metrics in declaration order.
    pub fn enabled(&self) -> Vec<Metric> {
        Metric::ALL
            .iter()
            .copied()
            .filter(|m| self.is_set(*m))
            .collect()
    }

    /// Resolve the metric set a run will actually compute.
    ///
    /// Unsupported metrics are rejected first (binary consistency before
    /// k-recall). When nothing is selected the five default metrics apply;
    /// otherwise the selection is returned as given.
    pub fn effective(self) -> ValidateResult<Self> {
        if self.answer_consistency_binary {
            return Err(ValidateError::unsupported(
                Metric::AnswerConsistencyBinary.as_str(),
            ));
        }
        if self.retrieval_k_recall {
            return Err(ValidateError::unsupported(Metric::RetrievalKRecall.as_str()));
        }

        // The two unsupported flags are always false here.
        if !self.any() {
            return Ok(Self::defaults());
        }

        Ok(self)
    }
}
