//! Diagnostic wizard state machine
//!
//! ```text
//! collecting(0) ──advance──> collecting(1) ... collecting(4) ──advance──> submitting
//!       ^        <─retreat──                                              │
//!       │                                                    success ─────┼──── failure
//!       │                                                       v               v
//!       └──────────────────── restart ───────────────── succeeded(d)      failed(msg)
//! ```
//!
//! Transitions are pure. The only side effect in the flow, the completion
//! call, is requested by returning [`Advance::Submit`] and is owned by the
//! caller. Events a state does not accept are no-ops and report so.

use super::report::Diagnosis;
use crate::questionnaire::answers::AnswerSet;
use crate::questionnaire::question::{LAST_STEP, QUESTIONS, Question};

/// Message shown whenever a submission fails, whatever the cause
pub const USER_FAILURE_MESSAGE: &str = "Ocorreu um erro ao gerar o diagnóstico. Tente novamente.";

/// Current display mode of the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardPhase {
    /// Answering question `step` (0-based)
    Collecting { step: usize },
    /// The completion call is in flight
    Submitting,
    Succeeded(Diagnosis),
    Failed { message: String },
}

impl WizardPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardPhase::Collecting { .. } => "collecting",
            WizardPhase::Submitting => "submitting",
            WizardPhase::Succeeded(_) => "succeeded",
            WizardPhase::Failed { .. } => "failed",
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, WizardPhase::Submitting)
    }

    /// Succeeded or failed
    pub fn is_finished(&self) -> bool {
        matches!(self, WizardPhase::Succeeded(_) | WizardPhase::Failed { .. })
    }
}

impl std::fmt::Display for WizardPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WizardPhase::Collecting { step } => write!(f, "collecting({})", step),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

/// Outcome of an advance request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Nothing changed: empty answer, or not collecting
    Ignored,
    /// Moved to the next question
    Moved { step: usize },
    /// The last answer was accepted; submit exactly this snapshot
    Submit(AnswerSet),
}

/// One questionnaire run (Entity)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard {
    phase: WizardPhase,
    answers: AnswerSet,
}

impl Default for Wizard {
    fn default() -> Self {
        Self {
            phase: WizardPhase::Collecting { step: 0 },
            answers: AnswerSet::new(),
        }
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &WizardPhase {
        &self.phase
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn question_count(&self) -> usize {
        QUESTIONS.len()
    }

    /// Current step while collecting
    pub fn step(&self) -> Option<usize> {
        match self.phase {
            WizardPhase::Collecting { step } => Some(step),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        self.step().map(|step| &QUESTIONS[step])
    }

    pub fn is_last_step(&self) -> bool {
        self.step() == Some(LAST_STEP)
    }

    /// Answer text for the current question ("" when none)
    pub fn current_answer(&self) -> &str {
        self.current_question()
            .and_then(|q| self.answers.get(q.key))
            .unwrap_or("")
    }

    /// Editable buffer of the current answer; `None` outside collecting
    pub fn answer_buffer_mut(&mut self) -> Option<&mut String> {
        let key = self.current_question()?.key;
        Some(self.answers.buffer_mut(key))
    }

    /// Replace the current answer. Returns false outside collecting.
    pub fn set_answer(&mut self, text: impl Into<String>) -> bool {
        match self.answer_buffer_mut() {
            Some(buffer) => {
                *buffer = text.into();
                true
            }
            None => false,
        }
    }

    /// Whether advance (or submit, on the last step) would be accepted
    pub fn can_advance(&self) -> bool {
        self.step().is_some() && !self.current_answer().trim().is_empty()
    }

    pub fn can_retreat(&self) -> bool {
        matches!(self.step(), Some(step) if step > 0)
    }

    /// Move forward, or hand back the answers for submission on the last step
    pub fn advance(&mut self) -> Advance {
        // Re-checked here even though the UI disables the action
        if !self.can_advance() {
            return Advance::Ignored;
        }
        let Some(step) = self.step() else {
            return Advance::Ignored;
        };

        if step == LAST_STEP {
            self.phase = WizardPhase::Submitting;
            Advance::Submit(self.answers.clone())
        } else {
            self.phase = WizardPhase::Collecting { step: step + 1 };
            Advance::Moved { step: step + 1 }
        }
    }

    /// Go back one question, keeping every answer
    pub fn retreat(&mut self) -> bool {
        match self.step() {
            Some(step) if step > 0 => {
                self.phase = WizardPhase::Collecting { step: step - 1 };
                true
            }
            _ => false,
        }
    }

    /// Record the outcome of the in-flight submission.
    ///
    /// Ignored unless submitting. An empty failure message is replaced by
    /// [`USER_FAILURE_MESSAGE`].
    pub fn complete(&mut self, outcome: Result<Diagnosis, String>) -> bool {
        if !self.phase.is_submitting() {
            return false;
        }
        let next = match outcome {
            Ok(diagnosis) => WizardPhase::Succeeded(diagnosis),
            Err(message) if message.trim().is_empty() => WizardPhase::Failed {
                message: USER_FAILURE_MESSAGE.to_string(),
            },
            Err(message) => WizardPhase::Failed { message },
        };
        self.phase = next;
        true
    }

    /// Start over from the first question with no answers
    pub fn restart(&mut self) -> bool {
        if !self.phase.is_finished() {
            return false;
        }
        self.answers.clear();
        self.phase = WizardPhase::Collecting { step: 0 };
        true
    }
}
