//! Core domain types for the Systems Thinking lesson.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod assessment;
mod concept;
mod lesson;
mod step;
pub mod ui;

pub use assessment::{FeedbackTier, Score};
pub use concept::{
    ConceptId, ConceptNode, Connection, NodePosition, Strength, UnknownConcept, lookup_concept,
};
pub use lesson::{
    ChecklistGroup, REFLECTION, SELF_ASSESSMENT, StepContent, StepWidget, checklist_groups,
    step_content,
};
pub use step::{STEP_COUNT, StepError, StepIndex};
