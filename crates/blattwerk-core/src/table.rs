// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Normalized PWG capability catalogs derived from a printer description.
//
// The catalogs are append-only and fixed for the lifetime of one
// translation call; indices into `sizes` stay stable throughout.

use serde::{Deserialize, Serialize};

/// One media size in the catalog.
///
/// Dimensions and margins are in hundredths of millimetres (1/2540 inch).
/// A margin of -1 means the description left that side unspecified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PwgSize {
    /// PWG self-describing media name, e.g. "na_letter_8.5x11in".
    pub pwg: String,
    /// Legacy PPD name, e.g. "Letter".
    pub ppd: String,
    pub width: i32,
    pub length: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
    pub top: i32,
}

/// Legacy-name to PWG-keyword mapping for a source, type, or output bin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PwgMap {
    /// Legacy PPD choice name, e.g. "Tray1".
    pub ppd: String,
    /// PWG keyword, e.g. "tray-1".
    pub pwg: String,
}

/// Normalized catalogs for one translation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityTable {
    pub sizes: Vec<PwgSize>,
    pub sources: Vec<PwgMap>,
    pub types: Vec<PwgMap>,
    pub bins: Vec<PwgMap>,
    /// IPP finishings enum codes, the "none" sentinel excluded.
    pub finishings: Vec<i32>,
    /// Named finishing presets.
    pub templates: Vec<String>,
    /// Whether the device can duplex on the long edge.
    pub two_sided_long_edge: bool,
}

impl CapabilityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// PWG keyword for a legacy source choice.  Lookup is ASCII
    /// case-insensitive, matching legacy parser behaviour.
    pub fn source_for(&self, ppd_choice: &str) -> Option<&str> {
        lookup(&self.sources, ppd_choice)
    }

    /// PWG keyword for a legacy media-type choice.  Case-insensitive, as
    /// [`source_for`](Self::source_for).
    pub fn type_for(&self, ppd_choice: &str) -> Option<&str> {
        lookup(&self.types, ppd_choice)
    }
}

fn lookup<'a>(maps: &'a [PwgMap], ppd_choice: &str) -> Option<&'a str> {
    maps.iter()
        .find(|m| m.ppd.eq_ignore_ascii_case(ppd_choice))
        .map(|m| m.pwg.as_str())
}
