//! Name assembly
//!
//! Builds the ordered name list for a deceased person: the primary name,
//! then each alias in input order, then a synthetic "name before marriage"
//! when a maiden family name is known.

use serde::{Deserialize, Serialize};

use crate::record::{AliasName, PersonNameStructure};

/// Description attached to the synthetic maiden-name entry
pub const MAIDEN_NAME_DESCRIPTION: &str = "Name before marriage";

/// Kind of a name part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamePartType {
    GivenName,
    FamilyName,
}

/// One component of a name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamePart {
    #[serde(rename = "type")]
    pub kind: NamePartType,
    pub value: String,
}

impl NamePart {
    pub fn given(value: impl Into<String>) -> Self {
        Self {
            kind: NamePartType::GivenName,
            value: value.into(),
        }
    }

    pub fn family(value: impl Into<String>) -> Self {
        Self {
            kind: NamePartType::FamilyName,
            value: value.into(),
        }
    }
}

/// A name: given-name parts in source order followed by one family-name part
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Name {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub name_parts: Vec<NamePart>,
}

impl Name {
    /// Builds a name from given names and a single family name
    pub fn from_parts<'a>(
        description: Option<String>,
        given_names: impl IntoIterator<Item = &'a String>,
        family_name: impl Into<String>,
    ) -> Self {
        let mut name_parts: Vec<NamePart> = given_names.into_iter().map(NamePart::given).collect();
        name_parts.push(NamePart::family(family_name));
        Self {
            description,
            name_parts,
        }
    }

    /// Given-name values in order
    pub fn given_names(&self) -> impl Iterator<Item = &str> {
        self.name_parts
            .iter()
            .filter(|p| p.kind == NamePartType::GivenName)
            .map(|p| p.value.as_str())
    }

    /// The family-name value, if the name has one
    pub fn family_name(&self) -> Option<&str> {
        self.name_parts
            .iter()
            .find(|p| p.kind == NamePartType::FamilyName)
            .map(|p| p.value.as_str())
    }
}

fn structured_name(structure: &PersonNameStructure, description: Option<String>) -> Name {
    Name::from_parts(description, &structure.given_names, structure.family_name.clone())
}

/// Assembles the ordered name list
///
/// The result always starts with the primary name (no description). Aliases
/// follow in input order, described by their alias type when one exists. A
/// maiden family name adds a final entry that reuses the primary given names.
pub fn assemble_names(
    primary: &PersonNameStructure,
    aliases: &[AliasName],
    maiden_family_name: Option<&str>,
) -> Vec<Name> {
    let mut names = Vec::with_capacity(aliases.len() + 2);
    names.push(structured_name(primary, None));

    names.extend(
        aliases
            .iter()
            .map(|alias| structured_name(&alias.name, alias.name_type.clone())),
    );

    if let Some(maiden) = maiden_family_name {
        names.push(Name::from_parts(
            Some(MAIDEN_NAME_DESCRIPTION.to_string()),
            &primary.given_names,
            maiden,
        ));
    }

    names
}
