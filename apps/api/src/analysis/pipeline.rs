//! Document → score pipeline: extract → resolve role → score → classify → assemble.

use bytes::Bytes;
use tracing::info;

use crate::analysis::catalog::RoleCatalog;
use crate::analysis::feedback::classify;
use crate::analysis::report::{assemble, Report};
use crate::analysis::scorer::score;
use crate::extraction::{ExtractionError, TextExtractor};

/// Scores already-extracted text. Total: unknown roles fall back to the catalog default.
pub fn analyze_text(
    catalog: &RoleCatalog,
    text: &str,
    role_id: Option<&str>,
    original_filename: &str,
) -> Report {
    let role = catalog.resolve(role_id);
    let result = score(text, &role.keywords);
    let feedback = classify(result.score);

    info!(
        role = %role.id,
        score = result.score,
        present = result.present_skills.len(),
        total = role.keywords.len(),
        "Resume analyzed"
    );

    assemble(role, original_filename, result, feedback)
}

/// Extracts text from `buffer` and scores it. Extraction failures propagate
/// before any scoring happens.
pub async fn analyze_document(
    extractor: &dyn TextExtractor,
    catalog: &RoleCatalog,
    buffer: Bytes,
    role_id: Option<&str>,
    original_filename: &str,
) -> Result<Report, ExtractionError> {
    let text = extractor.extract(buffer).await?;
    Ok(analyze_text(catalog, &text, role_id, original_filename))
}
