pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::chat::{ChatReply, ChatTurn, ChatUseCase, ComparisonRow};
use crate::application::market::{FeedStatus, MarketUseCase};
use crate::application::scenario::{RoiParams, ScenarioUseCase, TcoParams};
use crate::application::training::{
    ModuleSummary, ProgressSummary, QuizOutcome, TrainingUseCase,
};
use crate::config::{Config, FeedMode};
use crate::domain::entities::training::{Lesson, Module};
use crate::domain::error::DomainError;
use crate::domain::ports::market_feed::{HistoricalPoint, MarketFeed, ReferenceData};
use crate::domain::values::roi::RoiResult;
use crate::domain::values::tco::TcoResult;
use crate::infrastructure::catalog;
use crate::infrastructure::feeds::fixture::FixtureFeed;
use crate::infrastructure::feeds::live::LiveFeed;
use crate::infrastructure::knowledge::KnowledgeBase;
use std::sync::Arc;

/// Service facade. Built once at process start and shared (behind an Arc)
/// by every request handler; the only mutable state inside is the progress
/// tracker's map.
pub struct GpuIntel {
    kb: Arc<KnowledgeBase>,
    chat_uc: ChatUseCase,
    scenario_uc: ScenarioUseCase,
    market_uc: MarketUseCase,
    training_uc: TrainingUseCase,
}

impl GpuIntel {
    pub fn new(config: &Config) -> Self {
        let feed: Arc<dyn MarketFeed> = match config.feed_mode {
            FeedMode::Live => Arc::new(LiveFeed::new(
                config.feed_host.clone(),
                config.feed_port,
                config.feed_timeout_ms,
            )),
            FeedMode::Fixture => Arc::new(FixtureFeed::new()),
        };
        Self::with_feed(feed)
    }

    pub fn with_feed(feed: Arc<dyn MarketFeed>) -> Self {
        let kb = Arc::new(KnowledgeBase::builtin());
        Self {
            chat_uc: ChatUseCase::new(kb.clone()),
            scenario_uc: ScenarioUseCase::new(kb.clone()),
            market_uc: MarketUseCase::new(feed),
            training_uc: TrainingUseCase::new(catalog::builtin_modules()),
            kb,
        }
    }

    // Chat + scenarios

    pub fn chat(&self, message: &str, context: &[ChatTurn]) -> ChatReply {
        self.chat_uc.chat(message, context)
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn gpu_comparison(&self) -> Vec<ComparisonRow> {
        self.chat_uc.comparison_table()
    }

    pub fn tco_scenario(&self, params: &TcoParams) -> Result<TcoResult, DomainError> {
        self.scenario_uc.tco(params)
    }

    pub fn roi_scenario(&self, params: &RoiParams) -> Result<RoiResult, DomainError> {
        self.scenario_uc.roi(params)
    }

    // Market data

    pub async fn market_connect(&self) -> bool {
        self.market_uc.connect().await
    }

    pub async fn market_disconnect(&self) {
        self.market_uc.disconnect().await
    }

    pub fn market_status(&self) -> FeedStatus {
        self.market_uc.status()
    }

    pub async fn reference_data(
        &self,
        securities: &[String],
        fields: &[String],
    ) -> Result<ReferenceData, DomainError> {
        self.market_uc.reference_data(securities, fields).await
    }

    pub async fn historical_data(
        &self,
        security: &str,
        fields: &[String],
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<HistoricalPoint>, DomainError> {
        self.market_uc
            .historical_data(security, fields, start_date, end_date)
            .await
    }

    pub async fn gpu_market_data(&self) -> Result<ReferenceData, DomainError> {
        self.market_uc.gpu_market_data().await
    }

    pub async fn datacenter_reit_data(&self) -> Result<ReferenceData, DomainError> {
        self.market_uc.datacenter_reit_data().await
    }

    // Training

    pub fn modules(&self) -> Vec<ModuleSummary> {
        self.training_uc.modules()
    }

    pub fn module(&self, module_id: &str) -> Result<&Module, DomainError> {
        self.training_uc.module(module_id)
    }

    pub fn lesson(&self, module_id: &str, lesson_id: &str) -> Result<&Lesson, DomainError> {
        self.training_uc.lesson(module_id, lesson_id)
    }

    pub fn submit_quiz(
        &self,
        module_id: &str,
        lesson_id: &str,
        answers: &[usize],
        user_id: &str,
    ) -> Result<QuizOutcome, DomainError> {
        self.training_uc
            .submit_quiz(module_id, lesson_id, answers, user_id)
    }

    pub fn user_progress(&self, user_id: &str) -> ProgressSummary {
        self.training_uc.user_progress(user_id)
    }
}
