//! Multi-step rendering: long forms are split into pages of
//! [`FIELDS_PER_STEP`] fields.

use std::ops::Range;

pub const FIELDS_PER_STEP: usize = 7;

/// What pressing the form's primary button should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    /// Move to the next page; nothing is sent.
    Advance,
    /// Send the submission.
    Submit,
}

/// Page layout of a form with `field_count` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPlan {
    field_count: usize,
}

impl StepPlan {
    pub fn new(field_count: usize) -> Self {
        Self { field_count }
    }

    pub fn is_multi_step(&self) -> bool {
        self.field_count > FIELDS_PER_STEP
    }

    pub fn total_steps(&self) -> usize {
        if self.is_multi_step() {
            self.field_count.div_ceil(FIELDS_PER_STEP)
        } else {
            1
        }
    }

    /// Index range of the fields shown on `step`. Out-of-range steps are empty.
    pub fn range(&self, step: usize) -> Range<usize> {
        if !self.is_multi_step() {
            return if step == 0 { 0..self.field_count } else { 0..0 };
        }
        let start = (step * FIELDS_PER_STEP).min(self.field_count);
        let end = (start + FIELDS_PER_STEP).min(self.field_count);
        start..end
    }

    /// Page holding the field at `index`.
    pub fn step_of(&self, index: usize) -> usize {
        if self.is_multi_step() {
            (index / FIELDS_PER_STEP).min(self.total_steps() - 1)
        } else {
            0
        }
    }

    pub fn page<'a, T>(&self, items: &'a [T], step: usize) -> &'a [T] {
        let range = self.range(step);
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }
}

/// Current page of a form being filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepState {
    plan: StepPlan,
    step: usize,
}

impl StepState {
    pub fn new(field_count: usize) -> Self {
        Self {
            plan: StepPlan::new(field_count),
            step: 0,
        }
    }

    pub fn plan(&self) -> StepPlan {
        self.plan
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn is_first(&self) -> bool {
        self.step == 0
    }

    pub fn is_last(&self) -> bool {
        self.step + 1 >= self.plan.total_steps()
    }

    /// Decide what the primary button does on the current page.
    pub fn action(&self) -> StepAction {
        if self.plan.is_multi_step() && !self.is_last() {
            StepAction::Advance
        } else {
            StepAction::Submit
        }
    }

    /// Apply the primary button: advances when not on the last page.
    pub fn on_submit(&mut self) -> StepAction {
        let action = self.action();
        if action == StepAction::Advance {
            self.step += 1;
        }
        action
    }

    pub fn back(&mut self) {
        self.step = self.step.saturating_sub(1);
    }

    /// Show the page containing the field at `index`.
    pub fn jump_to_field(&mut self, index: usize) {
        self.step = self.plan.step_of(index);
    }

    /// Completion ratio shown by the progress bar, in percent.
    pub fn progress_percent(&self) -> f64 {
        (self.step + 1) as f64 / self.plan.total_steps() as f64 * 100.0
    }

    /// Label for the primary button.
    pub fn primary_label(&self) -> &'static str {
        match self.action() {
            StepAction::Advance => "Next",
            StepAction::Submit => "Submit",
        }
    }
}
