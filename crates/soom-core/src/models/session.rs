use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::artifact::{ArtifactState, SuggestionArtifact, SummaryArtifact};
use super::intake::PatientIntake;
use super::plan::FinalPlan;

/// Everything one operator session has collected and generated.
///
/// Each artifact is independently re-triggerable; recording a new one
/// replaces the previous value outright.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IntakeSession {
    pub id: Uuid,
    pub created_at: jiff::Timestamp,
    /// Last time the operator read or changed this session.
    pub touched_at: jiff::Timestamp,
    pub intake: PatientIntake,
    pub summary: Option<SummaryArtifact>,
    pub suggestion: Option<SuggestionArtifact>,
    pub final_plan: Option<FinalPlan>,
    /// Report text rendered when the final plan was composed.
    pub final_report: Option<String>,
}

/// Per-artifact lifecycle, as reported to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionStatus {
    pub summary: ArtifactState,
    pub suggestion: ArtifactState,
    pub final_plan: ArtifactState,
}

impl IntakeSession {
    pub fn new() -> Self {
        let now = jiff::Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            touched_at: now,
            intake: PatientIntake::default(),
            summary: None,
            suggestion: None,
            final_plan: None,
            final_report: None,
        }
    }

    pub fn touch(&mut self) {
        self.touched_at = jiff::Timestamp::now();
    }

    /// Time since the last touch, as of `now`.
    pub fn idle_for(&self, now: jiff::Timestamp) -> jiff::SignedDuration {
        now.duration_since(self.touched_at)
    }

    pub fn set_intake(&mut self, intake: PatientIntake) {
        self.intake = intake;
    }

    pub fn record_summary(&mut self, artifact: SummaryArtifact) {
        self.summary = Some(artifact);
    }

    pub fn record_suggestion(&mut self, artifact: SuggestionArtifact) {
        self.suggestion = Some(artifact);
    }

    pub fn record_final_plan(&mut self, plan: FinalPlan, report: String) {
        self.final_plan = Some(plan);
        self.final_report = Some(report);
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            summary: ArtifactState::of(&self.summary),
            suggestion: ArtifactState::of(&self.suggestion),
            final_plan: ArtifactState::of(&self.final_plan),
        }
    }
}

impl Default for IntakeSession {
    fn default() -> Self {
        Self::new()
    }
}
