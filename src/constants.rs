//! Common constants used throughout vitae.

/// Opening tag of the element wrapping every assembled resume.
pub const RESUME_OPEN: &str = r#"<div class="resume">"#;

/// Closing tag of the resume wrapper.
pub const RESUME_CLOSE: &str = "</div>";

/// Closing tag appended after every section.
///
/// Section title fragments are expected to open a `<section>` element; the
/// assembler closes it after the last item. Template authors rely on this.
pub const SECTION_CLOSE: &str = "</section>";

/// File patterns recognised as templates inside a library directory.
pub const TEMPLATE_PATTERNS: [&str; 3] = ["*.json", "*.yaml", "*.yml"];

/// Data path meaning "read from stdin".
pub const STDIN_PATH: &str = "-";
