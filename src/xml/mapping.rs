//! Attribute and type-label normalization
//!
//! For every record the raw tag string is split on ASCII spaces: the first
//! token seeds the type label, the remaining tokens are the attribute list
//! (captured only when the caller asks for attributes). The normalizer is
//! purely local to each record and recomputes everything from `raw_tag`, so
//! running it again is harmless.
//!
//! Schema-flavored tags get special treatment: an `xs:element` tag with a
//! `name="…"` attribute is relabeled with a readable summary of its name and
//! (when `xs:`-qualified) its type, and any other `xs:`-prefixed tag loses
//! the prefix. Unrecognized prefixes pass through untouched.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ast::{NodeArena, TagRecord};

/// Tag whose label is synthesized from its `name`/`type` attributes.
const SCHEMA_ELEMENT: &str = "xs:element";
/// Namespace prefix stripped from bare type labels.
const NS_PREFIX: &str = "xs:";

static NAME_ATTR: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^name="([^"]*)""#).unwrap());
static TYPE_ATTR: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^type="xs:([^"]*)""#).unwrap());

/// Normalize every record in the arena.
pub fn normalize(arena: &mut NodeArena, capture_attributes: bool) {
    for (_, record) in arena.iter_mut() {
        normalize_record(record, capture_attributes);
    }
}

/// Split one record's raw tag into its type label and attribute tokens.
///
/// `name="…"` / `type="xs:…"` detection runs regardless of the capture
/// switch; the switch only controls whether tokens land in the attribute
/// list.
pub fn normalize_record(record: &mut TagRecord, capture_attributes: bool) {
    let raw = std::mem::take(&mut record.raw_tag);
    let mut tokens = raw.split(' ');
    let label = tokens.next().unwrap_or("").to_string();

    let mut name_value = None;
    let mut type_value = None;
    record.attributes.clear();

    for token in tokens {
        if token.is_empty() {
            continue;
        }
        if capture_attributes {
            record.attributes.push(token.to_string());
        }
        if let Some(caps) = NAME_ATTR.captures(token) {
            name_value = Some(caps[1].to_string());
        }
        if let Some(caps) = TYPE_ATTR.captures(token) {
            type_value = Some(caps[1].to_string());
        }
    }

    record.type_label = if label == SCHEMA_ELEMENT {
        match (name_value, type_value) {
            (Some(name), Some(ty)) => {
                format!(r#"element: name="{}" type="{}""#, name, ty)
            }
            (Some(name), None) => format!(r#"element: name="{}""#, name),
            // an xs:element without a name keeps its marker label
            _ => label,
        }
    } else if let Some(local) = label.strip_prefix(NS_PREFIX) {
        local.to_string()
    } else {
        label
    };

    record.raw_tag = raw;
}
