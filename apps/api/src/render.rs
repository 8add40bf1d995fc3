//! HTML pages: upload form, analysis results, and the failure page.
//!
//! All interpolated values go through `html_escape`; filenames and role ids are user input.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::analysis::catalog::RoleCatalog;
use crate::analysis::report::Report;

const PAGE_STYLE: &str = r#"
        body { font-family: 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif; background-color: #f8f9fa; display: flex; justify-content: center; align-items: center; min-height: 100vh; margin: 0; color: #343a40; }
        .card { width: 90%; max-width: 800px; background: #ffffff; border-radius: 8px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08); padding: 30px; border: 1px solid #e9ecef; }
        .header h1 { font-size: 1.8rem; font-weight: 600; margin: 0; }
        .header p, .filename, .subtitle { color: #6c757d; margin: 0; }
        .score-section { text-align: center; margin: 30px 0; }
        .score-value { font-size: 4.5rem; font-weight: 700; color: #007bff; line-height: 1; }
        .score-value span { font-size: 2rem; font-weight: 400; color: #6c757d; vertical-align: top; margin-left: 5px; }
        .progress-bar-container { display: flex; align-items: center; margin-bottom: 30px; }
        .progress-bar { flex-grow: 1; height: 10px; background-color: #e9ecef; border-radius: 5px; margin-right: 10px; overflow: hidden; }
        .progress-fill { height: 100%; background-color: #007bff; }
        .feedback-box { padding: 20px; background-color: #f8f9fa; border: 1px solid #e9ecef; border-radius: 6px; }
        .skill-list-section { margin-top: 20px; padding-top: 15px; border-top: 1px dashed #ced4da; }
        .chip { padding: 4px 8px; border-radius: 3px; margin: 3px; display: inline-block; font-size: 0.9em; font-weight: 500; }
        .chip.found { background-color: #d4edda; color: #155724; }
        .chip.missing { background-color: #f8d7da; color: #721c24; }
        .empty { color: #777; }
        .home-link, button { display: block; width: 100%; margin-top: 30px; text-align: center; text-decoration: none; font-weight: 600; padding: 12px 15px; border: none; border-radius: 4px; background-color: #6699cc; color: #ffffff; }
        label { display: block; margin-top: 15px; font-weight: 500; }
        select, input[type=file] { width: 100%; margin-top: 5px; }
"#;

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{PAGE_STYLE}</style>
</head>
<body>
    <div class="card">
{body}
    </div>
</body>
</html>
"#,
        title = encode_text(title),
    )
}

fn chips(skills: &[String], class: &str, empty: &str) -> String {
    if skills.is_empty() {
        return format!(r#"<span class="empty">{empty}</span>"#);
    }
    skills
        .iter()
        .map(|s| format!(r#"<span class="chip {class}">{}</span>"#, encode_text(s)))
        .collect()
}

/// The "Analysis Results" page for one report.
pub fn render_report_page(report: &Report) -> String {
    let total = report.keyword_count;
    let body = format!(
        r#"        <div class="header">
            <h1>Analysis Results</h1>
            <p>Score for {role}</p>
        </div>
        <div class="score-section">
            <div class="score-value">{score}<span>/100</span></div>
            <p class="filename">{filename}</p>
        </div>
        <span>Match Score</span>
        <div class="progress-bar-container">
            <div class="progress-bar"><div class="progress-fill" style="width: {score}%;"></div></div>
            <span>{score}%</span>
        </div>
        <div class="feedback-box">
            <h3>Feedback</h3>
            <p>{feedback}</p>
            <div class="skill-list-section">
                <h4>Skills Found ({found}/{total})</h4>
                <p>{found_chips}</p>
            </div>
            <div class="skill-list-section">
                <h4>Skills Missing ({missing}/{total})</h4>
                <p>{missing_chips}</p>
            </div>
        </div>
        <a href="/" class="home-link">Upload Another Resume</a>"#,
        role = encode_text(&report.role_display_name),
        score = report.score,
        filename = encode_text(&report.original_filename),
        feedback = encode_text(&report.feedback_message),
        found = report.present_skills.len(),
        missing = report.missing_skills.len(),
        found_chips = chips(&report.present_skills, "found", "No relevant keywords found."),
        missing_chips = chips(
            &report.missing_skills,
            "missing",
            "All target keywords found!"
        ),
    );
    page("Analysis Results", &body)
}

/// The "Analysis Failed" page. `detail` is shown escaped.
pub fn render_error_page(detail: &str) -> String {
    let body = format!(
        r#"        <h1>&#9888; Analysis Failed</h1>
        <p>There was an error processing the file. Check that it is a valid PDF and try again.</p>
        <p class="subtitle">Error details: {}</p>
        <a href="/" class="home-link">Go back to Upload Form</a>"#,
        encode_text(detail)
    );
    page("Error", &body)
}

/// The upload form, with one option per catalog role.
pub fn render_upload_form(catalog: &RoleCatalog) -> String {
    let options: String = catalog
        .roles()
        .iter()
        .map(|role| {
            format!(
                r#"
                <option value="{}">{}</option>"#,
                encode_double_quoted_attribute(&role.id),
                encode_text(&role.title)
            )
        })
        .collect();

    let body = format!(
        r#"        <h2>Upload Resume</h2>
        <p class="subtitle">Select your resume and choose the target role for analysis</p>
        <form action="/api/upload" method="POST" enctype="multipart/form-data">
            <label for="role-select">Target Role</label>
            <select name="role" id="role-select" required>
                <option value="">Select a role</option>{options}
            </select>
            <label for="resume-file-input">Resume File</label>
            <input type="file" name="resume" id="resume-file-input" accept=".pdf" required>
            <p class="subtitle">PDF document</p>
            <button type="submit">Analyze Resume</button>
        </form>"#
    );
    page("Resume Analyzer", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::catalog::DEFAULT_ROLE_ID;
    use crate::analysis::pipeline::analyze_text;

    fn catalog() -> RoleCatalog {
        RoleCatalog::builtin(DEFAULT_ROLE_ID).unwrap()
    }

    #[test]
    fn test_report_page_shows_score_and_counts() {
        let report = analyze_text(&catalog(), "javascript react html css", Some("frontend"), "cv.pdf");
        let html = render_report_page(&report);

        assert!(html.contains("Score for Frontend"));
        assert!(html.contains("50<span>/100</span>"));
        assert!(html.contains("width: 50%;"));
        assert!(html.contains("Skills Found (4/8)"));
        assert!(html.contains("Skills Missing (4/8)"));
        assert!(html.contains(r#"<span class="chip found">react</span>"#));
        assert!(html.contains(r#"<span class="chip missing">webpack</span>"#));
        assert!(html.contains("Basic alignment."));
    }

    #[test]
    fn test_report_page_escapes_filename() {
        let report = analyze_text(&catalog(), "", None, "<script>alert(1)</script>.pdf");
        let html = render_report_page(&report);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_empty_lists_show_placeholders() {
        let none = analyze_text(&catalog(), "", Some("backend"), "cv.pdf");
        assert!(render_report_page(&none).contains("No relevant keywords found."));

        let all = analyze_text(
            &catalog(),
            "node express mongodb sql api docker java go",
            Some("backend"),
            "cv.pdf",
        );
        assert!(render_report_page(&all).contains("All target keywords found!"));
    }

    #[test]
    fn test_upload_form_lists_every_role() {
        let html = render_upload_form(&catalog());
        for role in catalog().roles() {
            assert!(html.contains(&format!(r#"<option value="{}">"#, role.id)));
        }
        assert!(html.contains("Data Scientist"));
        assert!(html.contains(r#"name="resume""#));
    }

    #[test]
    fn test_error_page_escapes_detail() {
        let html = render_error_page("bad <xref>");
        assert!(html.contains("Analysis Failed"));
        assert!(html.contains("bad &lt;xref&gt;"));
    }
}
