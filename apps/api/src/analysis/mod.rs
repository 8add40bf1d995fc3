// Résumé analysis core: role catalog, keyword scoring, feedback bands, report assembly.
// Everything here is pure; extraction and persistence are injected by the handlers.

pub mod catalog;
pub mod feedback;
pub mod handlers;
pub mod pipeline;
pub mod report;
pub mod scorer;
