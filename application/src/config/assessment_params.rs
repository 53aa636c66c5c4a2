//! Assessment parameters: session size and catalog generation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentParams {
    /// Questions sampled per session
    pub max_questions: usize,
    /// Items generated per question type when a pool is missing
    pub items_per_type: usize,
}

impl Default for AssessmentParams {
    fn default() -> Self {
        Self {
            max_questions: 10,
            items_per_type: 100,
        }
    }
}

impl AssessmentParams {
    pub fn with_max_questions(mut self, max: usize) -> Self {
        self.max_questions = max;
        self
    }

    pub fn with_items_per_type(mut self, count: usize) -> Self {
        self.items_per_type = count;
        self
    }
}
