//! Fallback extraction for diagram kinds without a dedicated extractor.
//!
//! Only `{type} {name}` pairs at the start of a line become elements. This
//! extractor never produces relationships.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{DiagramModel, DiagramType, Element};

use super::{capitalize, content_lines, dropped, unquote};

pub fn extract(source: &str, diagram_type: DiagramType) -> DiagramModel {
    let mut model = DiagramModel::new(diagram_type);

    for line in content_lines(source) {
        match PAIR_RE.captures(line) {
            Some(caps) => model
                .elements
                .push(Element::new(capitalize(&caps[1]), unquote(&caps[2]))),
            None => dropped(line),
        }
    }

    model
}

static PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(\w+)\s+("[^"]+"|\w+)"#).expect("invalid generic element regex")
});
