/// filetriage Core — classification, reporting, and data model.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (CLI, TUI, GUI).
///
/// # Modules
///
/// - [`model`] — Classification records, categories, and supporting types.
/// - [`registry`] — The fixed extension→category lookup table.
/// - [`classify`] — Filename classification (extension extraction, batch API).
/// - [`analysis`] — Batch-level reductions (priority ordering, distributions).
/// - [`export`] — CSV/JSON report export.
pub mod analysis;
pub mod classify;
pub mod export;
pub mod model;
pub mod registry;
