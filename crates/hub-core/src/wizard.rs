use crate::cell::StateCell;
use crate::error::Result;
use crate::paths::WIZARD_KEY;
use crate::store::Store;
use serde::{Deserialize, Serialize};

/// Onboarding walkthrough content, compiled into the binary.
const BUILTIN_STEPS: &str = include_str!("../data/wizard-steps.json");

// ---------------------------------------------------------------------------
// WizardStep
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardStep {
    pub id: String,
    pub phase: u32,
    pub phase_title: String,
    pub headline: String,
    pub summary: String,
    /// Command to try at this step, shown verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_hint: Option<String>,
}

impl WizardStep {
    pub fn builtin() -> Result<Vec<WizardStep>> {
        let steps: Vec<WizardStep> = serde_json::from_str(BUILTIN_STEPS)?;
        Ok(steps)
    }
}

// ---------------------------------------------------------------------------
// WizardProgress
// ---------------------------------------------------------------------------

/// Persistent cursor over a fixed linear sequence of steps, clamped to
/// `[0, total_steps - 1]`. A stored value past the end (the step list
/// shrank between releases) reads back clamped rather than failing.
pub struct WizardProgress<'s> {
    cell: StateCell<'s, usize>,
    total_steps: usize,
}

impl<'s> WizardProgress<'s> {
    pub fn load(store: &'s Store, total_steps: usize) -> Self {
        Self {
            cell: StateCell::load(store, WIZARD_KEY, 0),
            total_steps,
        }
    }

    fn last(&self) -> usize {
        self.total_steps.saturating_sub(1)
    }

    pub fn current(&self) -> usize {
        (*self.cell.get()).min(self.last())
    }

    /// Advance one step; no-op past the last step.
    pub fn next(&mut self) {
        let n = (self.current() + 1).min(self.last());
        self.cell.set(n);
    }

    /// Go back one step; no-op at the first step.
    pub fn back(&mut self) {
        let n = self.current().saturating_sub(1);
        self.cell.set(n);
    }

    /// Jump directly to `step`, clamped into range.
    pub fn go_to(&mut self, step: usize) {
        self.cell.set(step.min(self.last()));
    }

    pub fn reset(&mut self) {
        self.cell.set(0);
    }

    pub fn is_first(&self) -> bool {
        self.current() == 0
    }

    pub fn is_last(&self) -> bool {
        self.current() == self.last()
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn percent_complete(&self) -> f64 {
        if self.total_steps == 0 {
            return 0.0;
        }
        (self.current() + 1) as f64 / self.total_steps as f64 * 100.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
