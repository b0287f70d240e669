//! Human-readable text rendering of a [`DiagramModel`].
//!
//! The output is stable plain text for terminals and logs. It is not a
//! canonical format; only the JSON-LD document is.

use crate::model::{DiagramModel, Element, Relationship};

/// Render a model as a summary: a header, elements with their members, and
/// relationships.
///
/// ```text
/// Class diagram  2 elements, 1 relationship
/// ─────────────────────────────────────────
///
/// ELEMENTS
///   Class Person
///     - name: String
///     + getName(): String
///   Class Company
///
/// RELATIONSHIPS
///   Person "1..*" Association "1" Company  works for
/// ```
pub fn render_model(model: &DiagramModel) -> String {
    let header = format!(
        "{} diagram  {} element{}, {} relationship{}",
        model.diagram_type,
        model.elements.len(),
        plural(model.elements.len()),
        model.relationships.len(),
        plural(model.relationships.len()),
    );
    let rule = "─".repeat(header.chars().count());
    let mut out = format!("{}\n{}\n", header, rule);

    if !model.elements.is_empty() {
        out.push_str("\nELEMENTS\n");
        for element in &model.elements {
            render_element(&mut out, element);
        }
    }

    if !model.relationships.is_empty() {
        out.push_str("\nRELATIONSHIPS\n");
        for rel in &model.relationships {
            render_relationship(&mut out, rel);
        }
    }

    out
}

// --- helpers -----------------------------------------------------------------

fn render_element(out: &mut String, element: &Element) {
    let mut line = format!("  {} {}", element.element_type, element.name);
    if let Some(alias) = &element.alias {
        line.push_str(&format!(" as {}", alias));
    }
    if let Some(stereotype) = &element.stereotype {
        line.push_str(&format!(" <<{}>>", stereotype));
    }
    if element.is_abstract == Some(true) {
        line.push_str(" (abstract)");
    }
    out.push_str(&line);
    out.push('\n');

    for attr in &element.attributes {
        let marker = attr.visibility.map(marker).unwrap_or(" ");
        match &attr.datatype {
            Some(t) => out.push_str(&format!("    {} {}: {}\n", marker, attr.name, t)),
            None => out.push_str(&format!("    {} {}\n", marker, attr.name)),
        }
    }
    for method in &element.methods {
        let marker = method.visibility.map(marker).unwrap_or(" ");
        let params = method.parameters.as_deref().unwrap_or("");
        match &method.return_type {
            Some(t) => out.push_str(&format!("    {} {}({}): {}\n", marker, method.name, params, t)),
            None => out.push_str(&format!("    {} {}({})\n", marker, method.name, params)),
        }
    }
    if let Some(values) = &element.values {
        for v in values {
            out.push_str(&format!("    • {}\n", v));
        }
    }
}

fn render_relationship(out: &mut String, rel: &Relationship) {
    let mut line = format!("  {}", rel.source);
    if let Some(c) = &rel.source_cardinality {
        line.push_str(&format!(" \"{}\"", c));
    }
    line.push_str(&format!(" {}", rel.kind));
    if rel.synchronous == Some(false) {
        line.push_str(" (async)");
    }
    if let Some(c) = &rel.target_cardinality {
        line.push_str(&format!(" \"{}\"", c));
    }
    line.push_str(&format!(" {}", rel.target));
    if let Some(text) = rel.label.as_ref().or(rel.message.as_ref()) {
        line.push_str(&format!("  {}", text));
    }
    out.push_str(&line);
    out.push('\n');
}

fn marker(visibility: crate::model::Visibility) -> &'static str {
    use crate::model::Visibility;
    match visibility {
        Visibility::Public => "+",
        Visibility::Private => "-",
        Visibility::Protected => "#",
        Visibility::Package => "~",
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

// --- tests -------------------------------------------------------------------
