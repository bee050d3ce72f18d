use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::DescriptorField;

// Three independent searches, not one combined pattern: the handle may
// appear anywhere between the group code and the role tag.
static GROUP_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{3,4}").unwrap());
static HANDLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"- (\w+) ").unwrap());
static ROLE_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([A-Z/]+)\)\n?$").unwrap());

/// A single selection, decomposed.
///
/// `"ABC - Foo (DPS)"` is the group code `ABC`, the handle `Foo` and the role tag `DPS`.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Descriptor {
    pub group_code: String,
    pub handle: String,
    pub role_tag: String,
}

/// Extracts the three fields of a descriptor.
///
/// The rules are applied in order (group code, handle, role tag) and the first
/// one that does not match is returned as the error.
pub fn parse_descriptor(text: &str) -> Result<Descriptor, DescriptorField> {
    let group_code = GROUP_CODE_RE
        .find(text)
        .ok_or(DescriptorField::GroupCode)?
        .as_str();
    let handle = HANDLE_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .ok_or(DescriptorField::Handle)?
        .as_str();
    let role_tag = ROLE_TAG_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .ok_or(DescriptorField::RoleTag)?
        .as_str();
    Ok(Descriptor {
        group_code: group_code.to_string(),
        handle: handle.to_string(),
        role_tag: role_tag.to_string(),
    })
}
