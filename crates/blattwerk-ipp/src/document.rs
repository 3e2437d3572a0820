// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Typed in-memory model of an IPP attribute document.
//
// Mirrors the value taxonomy of RFC 8010 §3.5.2 -- scalars, ranges,
// resolutions, octet strings, and nested collections -- without committing
// to a wire encoding.  A document preserves insertion order and keeps
// attribute names unique, so two translations of the same inputs compare
// equal attribute-for-attribute.

use serde::{Deserialize, Serialize};

/// Unit for resolution values (RFC 8010 §3.9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionUnits {
    /// Dots per inch.
    PerInch,
    /// Dots per centimetre.
    PerCm,
}

/// A single typed IPP value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttrValue {
    Boolean(bool),
    Integer(i32),
    /// rangeOfInteger with inclusive bounds.
    Range { min: i32, max: i32 },
    /// Protocol enum, wire-encoded as an integer.
    Enum(i32),
    Keyword(String),
    Text(String),
    Resolution {
        xres: i32,
        yres: i32,
        units: ResolutionUnits,
    },
    /// Opaque structured record (octetString).
    Octets(String),
    /// Nested attribute collection.
    Collection(CapabilityDocument),
}

impl AttrValue {
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Self::Integer(v) | Self::Enum(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            Self::Keyword(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_octets(&self) -> Option<&str> {
        match self {
            Self::Octets(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&CapabilityDocument> {
        match self {
            Self::Collection(v) => Some(v),
            _ => None,
        }
    }
}

/// A named attribute holding one or more values (1setOf).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub values: Vec<AttrValue>,
}

impl Attribute {
    /// The value of a single-valued attribute; `None` for a 1setOf.
    pub fn single(&self) -> Option<&AttrValue> {
        match self.values.as_slice() {
            [value] => Some(value),
            _ => None,
        }
    }

    /// All keyword values, in order.
    pub fn keywords(&self) -> Vec<&str> {
        self.values.iter().filter_map(AttrValue::as_keyword).collect()
    }

    /// All integer and enum values, in order.
    pub fn integers(&self) -> Vec<i32> {
        self.values.iter().filter_map(AttrValue::as_integer).collect()
    }

    /// All nested collections, in order.
    pub fn collections(&self) -> Vec<&CapabilityDocument> {
        self.values.iter().filter_map(AttrValue::as_collection).collect()
    }
}

/// An ordered attribute document.
///
/// Attribute names are unique within a document; inserting a name twice is
/// a caller bug and panics in debug builds.  Every value list is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityDocument {
    attributes: Vec<Attribute>,
}

impl CapabilityDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    /// Insert a fully-formed attribute.
    pub fn insert(&mut self, attribute: Attribute) -> &mut Self {
        debug_assert!(
            !attribute.values.is_empty(),
            "attribute {} has no values",
            attribute.name
        );
        debug_assert!(
            !self.contains(&attribute.name),
            "duplicate attribute {}",
            attribute.name
        );
        self.attributes.push(attribute);
        self
    }

    pub fn add_boolean(&mut self, name: &str, value: bool) -> &mut Self {
        self.add_one(name, AttrValue::Boolean(value))
    }

    pub fn add_integer(&mut self, name: &str, value: i32) -> &mut Self {
        self.add_one(name, AttrValue::Integer(value))
    }

    pub fn add_integers(&mut self, name: &str, values: impl IntoIterator<Item = i32>) -> &mut Self {
        self.add_many(name, values.into_iter().map(AttrValue::Integer).collect())
    }

    pub fn add_range(&mut self, name: &str, min: i32, max: i32) -> &mut Self {
        self.add_one(name, AttrValue::Range { min, max })
    }

    pub fn add_enum(&mut self, name: &str, value: i32) -> &mut Self {
        self.add_one(name, AttrValue::Enum(value))
    }

    pub fn add_enums(&mut self, name: &str, values: impl IntoIterator<Item = i32>) -> &mut Self {
        self.add_many(name, values.into_iter().map(AttrValue::Enum).collect())
    }

    pub fn add_keyword(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.add_one(name, AttrValue::Keyword(value.into()))
    }

    pub fn add_keywords<I, S>(&mut self, name: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_many(
            name,
            values.into_iter().map(|v| AttrValue::Keyword(v.into())).collect(),
        )
    }

    pub fn add_text(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.add_one(name, AttrValue::Text(value.into()))
    }

    pub fn add_texts<I, S>(&mut self, name: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_many(
            name,
            values.into_iter().map(|v| AttrValue::Text(v.into())).collect(),
        )
    }

    /// Add a resolution in dots per inch.
    pub fn add_resolution(&mut self, name: &str, xres: i32, yres: i32) -> &mut Self {
        self.add_one(
            name,
            AttrValue::Resolution {
                xres,
                yres,
                units: ResolutionUnits::PerInch,
            },
        )
    }

    pub fn add_octets(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.add_one(name, AttrValue::Octets(value.into()))
    }

    pub fn add_octet_strings<I, S>(&mut self, name: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_many(
            name,
            values.into_iter().map(|v| AttrValue::Octets(v.into())).collect(),
        )
    }

    pub fn add_collection(&mut self, name: &str, value: CapabilityDocument) -> &mut Self {
        self.add_one(name, AttrValue::Collection(value))
    }

    pub fn add_collections(
        &mut self,
        name: &str,
        values: impl IntoIterator<Item = CapabilityDocument>,
    ) -> &mut Self {
        self.add_many(
            name,
            values.into_iter().map(AttrValue::Collection).collect(),
        )
    }

    fn add_one(&mut self, name: &str, value: AttrValue) -> &mut Self {
        self.insert(Attribute {
            name: name.to_string(),
            values: vec![value],
        })
    }

    fn add_many(&mut self, name: &str, values: Vec<AttrValue>) -> &mut Self {
        self.insert(Attribute {
            name: name.to_string(),
            values,
        })
    }
}
