//! ClassificationOrchestrator: one request through extraction, the clear-cut
//! exit or full analysis, fusion, and escalation.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, LazyLock, Mutex, PoisonError};
use std::time::Duration;

use geocomply_ambiguity::{AmbiguityAssessor, AmbiguityContext};
use geocomply_confidence::ConfidenceScorer;
use geocomply_core::config::{GeoComplyConfig, ThresholdConfig};
use geocomply_core::errors::{GeoComplyResult, OracleError};
use geocomply_core::models::{
    ClassificationFlag, ClassificationMethod, ClassificationResult, ClearCutVerdict,
    ComplianceCategory, DiversityFlags, EntityType, ExtractionResult, FeedbackCorrection,
    FeedbackOutcome, OracleAssessment, OracleRequest, PipelineStage, RiskLevel,
    StandardizedEntity, ThresholdEvaluation,
};
use geocomply_core::text::KeywordSet;
use geocomply_core::traits::{
    IEntityExtractor, IRegulatoryContextProvider, IRegulatoryOracle, NoRegulatoryContext,
};
use geocomply_escalation::{DecisionEngine, ThresholdSummary, ThresholdTable};
use geocomply_extraction::clear_cut::EntitySignals;
use geocomply_extraction::PatternExtractor;
use geocomply_glossary::Glossary;
use geocomply_observability::tracing_setup::events;
use geocomply_observability::{
    ambiguity_span, classification_span, escalation_span, extraction_span, feedback_span,
    fusion_span, oracle_span, DecisionMetrics, MetricsSnapshot,
};
use tracing::{debug, warn, Instrument};
use uuid::Uuid;

use crate::outcome::{merge_review, Outcome, RequestTrace, ReviewSignals};
use crate::secondary::{entity_quality, secondary_validation};

/// Primary confidence above which the oracle is reported as the deciding signal.
const ORACLE_PRIMARY_CONFIDENCE: f64 = 0.7;
const CLEAR_CUT_RULE_TAG: &str = "clear_cut";
const CHILD_PROTECTION_RULE_TAG: &str = "child_protection";

static MINOR_TERMS: LazyLock<KeywordSet> = LazyLock::new(|| {
    KeywordSet::words([
        "minor", "minors", "child", "children", "kid", "kids", "teen", "teens", "teenager",
        "teenagers", "youth", "juvenile", "underage", "parental",
    ])
});

/// Owns every service a classification needs. Construct once and share.
pub struct ClassificationOrchestrator<O, R = NoRegulatoryContext> {
    oracle: O,
    context: R,
    glossary: Arc<Glossary>,
    extractor: Box<dyn IEntityExtractor>,
    assessor: AmbiguityAssessor,
    scorer: ConfidenceScorer,
    engine: DecisionEngine,
    metrics: Mutex<DecisionMetrics>,
    config: GeoComplyConfig,
}

impl<O: IRegulatoryOracle> ClassificationOrchestrator<O> {
    /// Orchestrator over the built-in glossary.
    pub fn new(config: GeoComplyConfig, oracle: O) -> GeoComplyResult<Self> {
        Self::with_glossary(config, oracle, Arc::new(Glossary::default()))
    }

    pub fn with_glossary(
        config: GeoComplyConfig,
        oracle: O,
        glossary: Arc<Glossary>,
    ) -> GeoComplyResult<Self> {
        config.validate()?;
        let extractor = PatternExtractor::new(Arc::clone(&glossary))?;
        Ok(Self {
            oracle,
            context: NoRegulatoryContext,
            glossary,
            extractor: Box::new(extractor),
            assessor: AmbiguityAssessor::from_config(&config.ambiguity)?,
            scorer: ConfidenceScorer::from_config(&config),
            engine: DecisionEngine::from_config(&config.thresholds)?,
            metrics: Mutex::new(DecisionMetrics::new()),
            config,
        })
    }
}

impl<O: IRegulatoryOracle, R: IRegulatoryContextProvider> ClassificationOrchestrator<O, R> {
    pub fn with_context_provider<P: IRegulatoryContextProvider>(
        self,
        context: P,
    ) -> ClassificationOrchestrator<O, P> {
        ClassificationOrchestrator {
            oracle: self.oracle,
            context,
            glossary: self.glossary,
            extractor: self.extractor,
            assessor: self.assessor,
            scorer: self.scorer,
            engine: self.engine,
            metrics: self.metrics,
            config: self.config,
        }
    }

    /// Replace the pattern extractor. Feedback still goes to the shared
    /// glossary; the extractor is told through `on_glossary_updated`.
    pub fn with_extractor(mut self, extractor: Box<dyn IEntityExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn glossary(&self) -> &Arc<Glossary> {
        &self.glossary
    }

    pub fn config(&self) -> &GeoComplyConfig {
        &self.config
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .snapshot()
    }

    // --- Threshold and glossary maintenance ---

    pub fn evaluate_threshold(
        &self,
        category: ComplianceCategory,
        confidence: f64,
    ) -> ThresholdEvaluation {
        self.engine.evaluate_threshold(category, confidence)
    }

    pub fn threshold_summary(&self) -> ThresholdSummary {
        self.engine.threshold_summary()
    }

    /// Swap in a new threshold table. Each request decides against the
    /// snapshot it took on entry, so requests already running are unaffected.
    pub fn update_thresholds(&self, thresholds: &ThresholdConfig) -> GeoComplyResult<()> {
        self.engine.update_thresholds(thresholds)?;
        Ok(())
    }

    /// Record a reviewer correction and rebuild extraction patterns when an
    /// alias was added.
    ///
    /// The glossary commit stands even if the rebuild fails; the extractor
    /// keeps its previous patterns and the failure is logged.
    pub fn apply_feedback(&self, correction: &FeedbackCorrection) -> GeoComplyResult<FeedbackOutcome> {
        let _span = feedback_span!(correction.entity_type).entered();
        let outcome = self.glossary.update_from_feedback(correction)?;
        if matches!(outcome, FeedbackOutcome::AliasAdded { .. }) {
            if let Err(e) = self.extractor.on_glossary_updated() {
                warn!(error = %e, "extraction patterns not refreshed after feedback");
            }
        }
        Ok(outcome)
    }

    // --- Classification ---

    pub async fn classify(&self, title: &str, description: &str) -> ClassificationResult {
        self.classify_until(title, description, std::future::pending())
            .await
    }

    /// Classify, giving up on the oracle and context calls as soon as
    /// `cancel` completes. A cancelled request gets the fail-safe result.
    pub async fn classify_until<C>(
        &self,
        title: &str,
        description: &str,
        cancel: C,
    ) -> ClassificationResult
    where
        C: Future<Output = ()>,
    {
        let request_id = Uuid::new_v4();
        let span = classification_span!(request_id);
        let result = self
            .run(RequestTrace::new(request_id, title, description), title, description, cancel)
            .instrument(span)
            .await;

        let id = request_id.to_string();
        if result.needs_human_review {
            events::review_escalated(&id, result.review_priority, &result.human_review_reason);
        }
        events::classification_completed(
            &id,
            result.method,
            result.decision.confidence,
            result.processing_time_ms,
        );
        self.metrics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record(&result);
        result
    }

    async fn run<C>(
        &self,
        mut trace: RequestTrace,
        title: &str,
        description: &str,
        cancel: C,
    ) -> ClassificationResult
    where
        C: Future<Output = ()>,
    {
        tokio::pin!(cancel);
        let table = self.engine.snapshot();

        if title.trim().is_empty() && description.trim().is_empty() {
            debug!("empty input, low signal");
            return trace.finish(Outcome::low_signal(&table));
        }

        trace.enter(PipelineStage::Extract);
        let extracted = {
            let _span = extraction_span!(title.len() + description.len()).entered();
            self.extractor.extract(title, description)
        };
        let extraction = match extracted {
            Ok(extraction) => extraction,
            Err(e) => {
                return fail_safe(trace, &table, &format!("extraction failed: {e}"), Vec::new())
            }
        };

        trace.enter(PipelineStage::CheckClearCut);
        let standardized: Vec<StandardizedEntity> = extraction
            .entities
            .iter()
            .map(|e| self.glossary.standardize_entity(e))
            .collect();

        if let Some(verdict) = extraction
            .clear_cut
            .as_ref()
            .filter(|v| v.confidence >= self.config.orchestrator.clear_cut_threshold)
        {
            trace.enter(PipelineStage::ClearCutExit);
            events::clear_cut_exit(
                &trace.request_id().to_string(),
                verdict.needs_geo_logic,
                verdict.confidence,
            );
            let outcome = self.clear_cut_outcome(&table, &extraction, verdict, standardized);
            return trace.finish(outcome);
        }

        trace.enter(PipelineStage::FullAnalysis);
        trace.enter(PipelineStage::Standardize);

        trace.enter(PipelineStage::AssessAmbiguity);
        let (assessments, disambiguation) = {
            let _span = ambiguity_span!(extraction.entities.len()).entered();
            let assessments = self.assessor.assess_ambiguity(
                &extraction.entities,
                &extraction.cleaned_text,
                &AmbiguityContext::default(),
            );
            let resolved = self
                .assessor
                .resolve_ambiguities(&assessments, self.assessor.config().use_default_resolutions);
            (assessments, resolved)
        };

        let orchestrator = &self.config.orchestrator;
        let regulatory_context = match bounded(
            self.context.context_for(title, description),
            orchestrator.context_timeout(),
            &mut cancel,
        )
        .await
        {
            Ok(context) => context,
            Err(e) => {
                return fail_safe(trace, &table, &format!("regulatory context: {e}"), standardized)
            }
        };

        let request = OracleRequest {
            title: title.to_string(),
            description: description.to_string(),
            regulatory_context,
            entities: extraction.entities.clone(),
        };
        let answer = bounded(
            self.oracle.assess(&request),
            orchestrator.oracle_timeout(),
            &mut cancel,
        )
        .instrument(oracle_span!(orchestrator.oracle_timeout_ms))
        .await;
        self.metrics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record_oracle_call(answer.is_ok());
        let oracle = match answer {
            Ok(oracle) => oracle,
            Err(e) => return fail_safe(trace, &table, &format!("oracle: {e}"), standardized),
        };

        trace.enter(PipelineStage::FuseConfidence);
        let primary = oracle.effective_confidence();
        let secondary_breakdown = secondary_validation(&self.glossary, &extraction, &oracle);
        let secondary = secondary_breakdown.score();
        let diversity = DiversityFlags {
            has_locations: extraction.has(EntityType::Location),
            has_ages: extraction.has(EntityType::Age),
            has_terminology: extraction.has(EntityType::Terminology),
        };
        let breakdown = {
            let _span = fusion_span!(primary, secondary).entered();
            let cross_validation = self
                .scorer
                .validate_alignment(primary, secondary)
                .alignment_score;
            let fused = self.scorer.weighted_confidence(
                primary,
                secondary,
                entity_quality(&standardized),
                cross_validation,
                diversity,
            );
            self.scorer
                .apply_ambiguity_penalty(fused, disambiguation.overall_confidence_penalty)
        };

        trace.enter(PipelineStage::Escalate);
        let decision = {
            let _span = escalation_span!(breakdown.final_confidence).entered();
            self.engine.decide_with_table(
                &table,
                &extraction.cleaned_text,
                &oracle,
                &rule_tags(&extraction),
                false,
                breakdown.final_confidence,
            )
        };
        let review = merge_review(
            &decision,
            Some(&disambiguation),
            &assessments,
            ReviewSignals::new(&oracle, diversity),
        );

        let method = if primary > ORACLE_PRIMARY_CONFIDENCE {
            ClassificationMethod::OraclePrimary
        } else {
            ClassificationMethod::OracleSecondary
        };
        trace.finish(Outcome {
            method,
            decision,
            risk: oracle.risk_assessment,
            primary_confidence: primary,
            secondary_breakdown,
            confidence_breakdown: Some(breakdown),
            disambiguation: Some(disambiguation),
            standardized_entities: standardized,
            oracle: Some(oracle),
            review,
        })
    }

    /// Decide from the verdict alone. A positive verdict counts as a
    /// deterministic rule firing; a negative one is checked against the
    /// default threshold at the verdict's confidence.
    fn clear_cut_outcome(
        &self,
        table: &ThresholdTable,
        extraction: &ExtractionResult,
        verdict: &ClearCutVerdict,
        standardized: Vec<StandardizedEntity>,
    ) -> Outcome {
        let flag = if verdict.needs_geo_logic {
            ClassificationFlag::NeedsGeoLogic
        } else {
            ClassificationFlag::NoGeoLogic
        };
        let mut synthetic = OracleAssessment::new(flag, verdict.confidence);
        synthetic.reasoning = format!("Clear-cut detection ({flag}): {}", verdict.reason);

        let (tags, fired) = if verdict.needs_geo_logic {
            (vec![CLEAR_CUT_RULE_TAG.to_string()], true)
        } else {
            (rule_tags(extraction), false)
        };
        let decision = self.engine.decide_with_table(
            table,
            &extraction.cleaned_text,
            &synthetic,
            &tags,
            fired,
            verdict.confidence,
        );
        let review = merge_review(&decision, None, &[], ReviewSignals::default());

        Outcome {
            method: ClassificationMethod::ClearCut,
            decision,
            risk: if verdict.needs_geo_logic {
                RiskLevel::Medium
            } else {
                RiskLevel::Low
            },
            primary_confidence: verdict.confidence,
            secondary_breakdown: Default::default(),
            confidence_breakdown: None,
            disambiguation: None,
            standardized_entities: standardized,
            oracle: None,
            review,
        }
    }
}

fn fail_safe(
    mut trace: RequestTrace,
    table: &ThresholdTable,
    cause: &str,
    standardized: Vec<StandardizedEntity>,
) -> ClassificationResult {
    trace.enter(PipelineStage::FailSafe);
    events::fail_safe_triggered(&trace.request_id().to_string(), cause);
    trace.finish(Outcome::fail_safe(table, cause, standardized))
}

/// Rule tags implied by the extraction. Minor-protection language or an
/// age-protection entity routes the decision through the child-protection rule.
fn rule_tags(extraction: &ExtractionResult) -> Vec<String> {
    let minors = EntitySignals::from_entities(&extraction.entities).age_protection
        || MINOR_TERMS.is_match(&extraction.cleaned_text);
    if minors {
        vec![CHILD_PROTECTION_RULE_TAG.to_string()]
    } else {
        Vec::new()
    }
}

/// Await `fut` for at most `limit`, or until `cancel` completes first.
async fn bounded<T, F, C>(
    fut: F,
    limit: Duration,
    cancel: &mut Pin<&mut C>,
) -> Result<T, OracleError>
where
    F: Future<Output = Result<T, OracleError>>,
    C: Future<Output = ()>,
{
    tokio::select! {
        biased;
        () = cancel.as_mut() => Err(OracleError::Cancelled),
        outcome = tokio::time::timeout(limit, fut) => match outcome {
            Ok(result) => result,
            Err(_) => Err(OracleError::Timeout {
                timeout_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
            }),
        },
    }
}
