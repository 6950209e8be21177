pub mod field_input;
pub mod step_indicator;
pub mod submission_card;

pub use field_input::FieldInput;
pub use step_indicator::StepIndicator;
pub use submission_card::SubmissionCard;
