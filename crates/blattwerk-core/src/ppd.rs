// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Parsed printer-description records and the loader seam.
//
// Blattwerk does not parse PPD files itself.  A `DescriptionSource`
// implementation supplies already-parsed `PpdDescription` values and the
// capability table derived from them; this module defines those records and
// the lookups the translator performs on them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::table::CapabilityTable;

/// Status codes a printer-description loader reports on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PpdStatus {
    /// The file could not be opened at all.
    #[error("unable to open file")]
    OpenFailed,
    /// A record line did not start with an asterisk.
    #[error("missing asterisk in column 0")]
    MissingAsterisk,
    /// A keyword record carried no value string.
    #[error("missing value string")]
    MissingValue,
    /// A main keyword outside the legal character set.
    #[error("illegal main keyword")]
    IllegalKeyword,
    /// A byte outside the legal character set for the record.
    #[error("illegal character in file")]
    IllegalCharacter,
    /// An option choice record that could not be interpreted.
    #[error("bad option choice record")]
    BadChoiceRecord,
    /// A record line longer than the parser's limit.
    #[error("line longer than the parser limit")]
    LineTooLong,
    /// The file ended inside a record.
    #[error("unexpected end of file")]
    UnexpectedEof,
}

/// Failure reported by a [`DescriptionSource`] when a description cannot be
/// loaded.  Carries the loader's status code and, when the parser got far
/// enough to know one, the 1-based line it stopped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadError {
    pub status: PpdStatus,
    pub line: Option<u32>,
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "{} on line {}", self.status, line),
            None => write!(f, "{}", self.status),
        }
    }
}

impl std::error::Error for LoadError {}

/// One option record: a main keyword with a declared default choice and an
/// optional marked (currently selected) choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PpdOption {
    /// Main keyword, e.g. "InputSlot" or "PageSize".
    pub keyword: String,
    /// The choice the description declares as its default.
    pub default_choice: String,
    /// The currently marked choice, if any.
    pub marked_choice: Option<String>,
}

/// One raw attribute record: a name and its unparsed value string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PpdAttribute {
    pub name: String,
    pub value: String,
}

/// A parsed printer description.
///
/// Produced by an upstream parser and borrowed by the translator for the
/// duration of one call.  Option and attribute records keep file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PpdDescription {
    /// Manufacturer string (`MFG` in synthesized device IDs).
    pub manufacturer: String,
    /// Model name (`MDL` in synthesized device IDs).
    pub model: String,
    /// Human-readable nickname, reported as printer-make-and-model.
    pub nickname: String,
    /// Whether the device prints colour.
    pub color_device: bool,
    /// Rated throughput in pages per minute.
    pub throughput: i32,
    /// Option records in file order.
    pub options: Vec<PpdOption>,
    /// Raw attribute records in file order.
    pub attributes: Vec<PpdAttribute>,
}

impl PpdDescription {
    pub fn new(
        manufacturer: impl Into<String>,
        model: impl Into<String>,
        nickname: impl Into<String>,
        color_device: bool,
        throughput: i32,
    ) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            model: model.into(),
            nickname: nickname.into(),
            color_device,
            throughput,
            options: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Append an option record with its declared default choice, unmarked.
    pub fn push_option(
        &mut self,
        keyword: impl Into<String>,
        default_choice: impl Into<String>,
    ) -> &mut Self {
        self.options.push(PpdOption {
            keyword: keyword.into(),
            default_choice: default_choice.into(),
            marked_choice: None,
        });
        self
    }

    /// Append a raw attribute record.
    pub fn push_attr(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.push(PpdAttribute {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Mark every option's declared default choice as selected.
    pub fn mark_defaults(&mut self) {
        for option in &mut self.options {
            option.marked_choice = Some(option.default_choice.clone());
        }
    }

    /// The marked choice of the option named `keyword`, if the option
    /// exists and a choice is marked.
    pub fn find_marked_choice(&self, keyword: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.keyword == keyword)
            .and_then(|o| o.marked_choice.as_deref())
    }

    /// The raw value of the first attribute named `name`.
    pub fn find_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }
}

/// Collaborator seam: opens printer descriptions and derives their
/// capability tables.
///
/// The translator calls `load` once, marks defaults, then calls
/// `capability_table` once; both results live only for that call.
pub trait DescriptionSource {
    /// Open and parse the printer description at `path`.
    fn load(&self, path: &Path) -> std::result::Result<PpdDescription, LoadError>;

    /// Derive the normalized size/source/type/finishings catalogs for a
    /// loaded description.
    fn capability_table(&self, description: &PpdDescription) -> CapabilityTable;
}

/// A [`DescriptionSource`] backed by pre-registered descriptions keyed by
/// path.  Used by tests and by embedding callers whose PPD parsing happens
/// upstream of Blattwerk.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    entries: Vec<(PathBuf, PpdDescription, CapabilityTable)>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a description and its derived table under `path`.
    pub fn register(
        &mut self,
        path: impl Into<PathBuf>,
        description: PpdDescription,
        table: CapabilityTable,
    ) -> &mut Self {
        self.entries.push((path.into(), description, table));
        self
    }
}

impl DescriptionSource for InMemorySource {
    fn load(&self, path: &Path) -> std::result::Result<PpdDescription, LoadError> {
        self.entries
            .iter()
            .find(|(p, ..)| p.as_path() == path)
            .map(|(_, description, _)| description.clone())
            .ok_or(LoadError {
                status: PpdStatus::OpenFailed,
                line: None,
            })
    }

    fn capability_table(&self, description: &PpdDescription) -> CapabilityTable {
        // Marked state changes between load and derivation, so match on the
        // stable identity fields rather than full record equality.
        self.entries
            .iter()
            .find(|(_, d, _)| d.nickname == description.nickname && d.model == description.model)
            .map(|(.., table)| table.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn description() -> PpdDescription {
        let mut ppd = PpdDescription::new("Example", "LaserJoy 5", "Example LaserJoy 5", false, 12);
        ppd.push_option("PageSize", "Letter")
            .push_option("InputSlot", "Tray1");
        ppd.push_attr("DefaultResolution", "600dpi");
        ppd
    }

    #[test]
    fn choices_are_unmarked_until_defaults_are_marked() {
        let ppd = description();
        assert_eq!(ppd.find_marked_choice("PageSize"), None);
        assert_eq!(ppd.find_marked_choice("InputSlot"), None);
    }

    #[test]
    fn mark_defaults_marks_every_option() {
        let mut ppd = description();
        ppd.mark_defaults();
        assert_eq!(ppd.find_marked_choice("PageSize"), Some("Letter"));
        assert_eq!(ppd.find_marked_choice("InputSlot"), Some("Tray1"));
    }

    #[test]
    fn find_marked_choice_on_unknown_option_is_none() {
        let mut ppd = description();
        ppd.mark_defaults();
        assert_eq!(ppd.find_marked_choice("OutputBin"), None);
    }

    #[test]
    fn find_attr_returns_first_match() {
        let mut ppd = description();
        ppd.push_attr("DefaultResolution", "1200dpi");
        assert_eq!(ppd.find_attr("DefaultResolution"), Some("600dpi"));
        assert_eq!(ppd.find_attr("1284DeviceId"), None);
    }

    #[test]
    fn in_memory_source_loads_registered_paths() {
        let mut source = InMemorySource::new();
        source.register("/ppd/laserjoy.ppd", description(), CapabilityTable::default());

        let loaded = source.load(Path::new("/ppd/laserjoy.ppd")).expect("registered");
        assert_eq!(loaded.nickname, "Example LaserJoy 5");

        let missing = source.load(Path::new("/ppd/absent.ppd")).unwrap_err();
        assert_eq!(missing.status, PpdStatus::OpenFailed);
        assert_eq!(missing.line, None);
    }

    #[test]
    fn capability_table_matches_marked_descriptions() {
        let mut source = InMemorySource::new();
        let mut table = CapabilityTable::default();
        table.templates.push("staple".into());
        source.register("/ppd/laserjoy.ppd", description(), table);

        let mut loaded = source.load(Path::new("/ppd/laserjoy.ppd")).expect("registered");
        loaded.mark_defaults();
        let derived = source.capability_table(&loaded);
        assert_eq!(derived.templates, ["staple"]);
    }

    #[test]
    fn load_error_display_includes_line_when_known() {
        let with_line = LoadError {
            status: PpdStatus::MissingValue,
            line: Some(42),
        };
        assert_eq!(with_line.to_string(), "missing value string on line 42");

        let without = LoadError {
            status: PpdStatus::OpenFailed,
            line: None,
        };
        assert_eq!(without.to_string(), "unable to open file");
    }
}
