//! Assembles a complete resume from template fragments and resume data.

use log::debug;
use serde_json::Value;

use crate::blocks::expand_blocks;
use crate::constants::{RESUME_CLOSE, RESUME_OPEN, SECTION_CLOSE};
use crate::resolver::is_truthy;
use crate::style::style_block;
use crate::substitute::substitute;
use crate::template::Template;

/// Runs placeholder substitution followed by block expansion on one fragment.
///
/// Substitution runs first over the whole fragment, so a placeholder inside a
/// block body that already resolves against `data` is filled before the
/// block sees it.
pub fn render_fragment(fragment: &str, data: &Value) -> String {
    expand_blocks(&substitute(fragment, data), data)
}

fn non_empty_array<'a>(data: &'a Value, key: &str) -> Option<&'a [Value]> {
    data.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .filter(|items| !items.is_empty())
}

/// Appends a title fragment, one rendered item per record, and the closing tag.
fn push_list_section(html: &mut String, title: &str, item: &str, records: &[Value], data: &Value) {
    html.push_str(&render_fragment(title, data));
    for record in records {
        html.push_str(&render_fragment(item, record));
    }
    html.push_str(SECTION_CLOSE);
}

/// Assembles `template` against `data` into a single HTML string.
///
/// Sections are emitted in a fixed order: header, contact, education,
/// experience, skills and projects. List sections are skipped when their
/// array is missing or empty; projects additionally require the template to
/// define both projects fragments. Never fails: unresolved placeholders stay
/// in the output verbatim.
pub fn assemble(template: &Template, data: &Value) -> String {
    debug!("Assembling template '{}'", template.name);

    let mut html = String::from(RESUME_OPEN);
    html.push_str(&style_block(&template.style));
    html.push_str(&render_fragment(&template.header_html, data));
    html.push_str(&render_fragment(&template.contact_html, data));

    if let Some(education) = non_empty_array(data, "education") {
        debug!("Adding education section ({} items)", education.len());
        push_list_section(
            &mut html,
            &template.education_title_html,
            &template.education_item_html,
            education,
            data,
        );
    }

    if let Some(experience) = non_empty_array(data, "experience") {
        debug!("Adding experience section ({} items)", experience.len());
        push_list_section(
            &mut html,
            &template.experience_title_html,
            &template.experience_item_html,
            experience,
            data,
        );
    }

    if let Some(skills) = data.get("skills").filter(|skills| is_truthy(skills)) {
        debug!("Adding skills section");
        html.push_str(&render_fragment(&template.skills_title_html, data));
        html.push_str(&render_fragment(&template.skills_item_html, skills));
        html.push_str(SECTION_CLOSE);
    }

    match (non_empty_array(data, "projects"), template.projects_fragments()) {
        (Some(projects), Some((title, item))) => {
            debug!("Adding projects section ({} items)", projects.len());
            push_list_section(&mut html, title, item, projects, data);
        }
        (Some(_), None) => debug!("Template has no projects section, skipping projects"),
        _ => {}
    }

    html.push_str(RESUME_CLOSE);
    html
}
