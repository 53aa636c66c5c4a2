//! Judge providers
//!
//! [`JudgeFactory`] turns the `[judges]` config section into the two
//! [`Judge`] instances the scorer needs.

mod openai;

pub use openai::OpenAiCompatibleJudge;

use crate::config::{FileJudgeModelConfig, FileJudgesConfig};
use assess_application::ports::judge::{Judge, JudgeError};
use std::sync::Arc;
use std::time::Duration;

pub struct JudgeFactory;

impl JudgeFactory {
    /// Build judges A and B from config.
    ///
    /// Fails only when no API key can be resolved.
    pub fn build_pair(
        config: &FileJudgesConfig,
    ) -> Result<(Arc<dyn Judge>, Arc<dyn Judge>), JudgeError> {
        let api_key = config
            .resolve_api_key()
            .ok_or_else(|| JudgeError::MissingApiKey(config.api_key_env.clone()))?;
        let timeout = Duration::from_secs(config.timeout_secs);

        let a = Self::build_one(config, &config.a, &api_key, timeout)?;
        let b = Self::build_one(config, &config.b, &api_key, timeout)?;
        Ok((a, b))
    }

    fn build_one(
        config: &FileJudgesConfig,
        judge: &FileJudgeModelConfig,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Arc<dyn Judge>, JudgeError> {
        Ok(Arc::new(OpenAiCompatibleJudge::new(
            &config.base_url,
            api_key,
            &judge.model,
            judge.temperature,
            timeout,
        )?))
    }
}
