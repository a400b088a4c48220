//! CSS custom property block derived from template styling.

use crate::stringify::number_display;
use crate::template::{Template, TemplateStyle};

/// Builds the `<style>` element declaring the template's CSS variables.
///
/// Colors and the font family are emitted as given. The three size fields
/// get a `px` suffix; the line height stays unitless.
pub fn style_block(style: &TemplateStyle) -> String {
    format!(
        "<style>\n  :root {{\n    --primary-color: {};\n    --secondary-color: {};\n    --font-family: {};\n    --font-size: {}px;\n    --line-height: {};\n    --section-spacing: {}px;\n    --item-spacing: {}px;\n  }}\n</style>",
        style.primary_color,
        style.secondary_color,
        style.font_family,
        number_display(style.font_size),
        number_display(style.line_height),
        number_display(style.section_spacing),
        number_display(style.item_spacing),
    )
}

/// Inlines the style fields into the template's own stylesheet.
///
/// Each `var(--name)` reference is replaced by the literal value, with the
/// same units as [`style_block`]. Unknown variables are left alone.
pub fn computed_css(template: &Template) -> String {
    let style = &template.style;
    template
        .css_styles
        .replace("var(--primary-color)", &style.primary_color)
        .replace("var(--secondary-color)", &style.secondary_color)
        .replace("var(--font-family)", &style.font_family)
        .replace("var(--font-size)", &format!("{}px", number_display(style.font_size)))
        .replace("var(--line-height)", &number_display(style.line_height))
        .replace(
            "var(--section-spacing)",
            &format!("{}px", number_display(style.section_spacing)),
        )
        .replace("var(--item-spacing)", &format!("{}px", number_display(style.item_spacing)))
}
