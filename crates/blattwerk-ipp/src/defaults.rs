// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Resolves the default media size, source, type, and resolution for one
// printer description.

use tracing::{debug, warn};

use blattwerk_core::error::{BlattwerkError, Result};
use blattwerk_core::ppd::PpdDescription;
use blattwerk_core::table::CapabilityTable;

/// Resolution assumed when the description has no usable value.
const FALLBACK_DPI: i32 = 300;

/// Defaults resolved from one description/table pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDefaults {
    /// Index of the default size in the table's size catalog.
    pub size_index: usize,
    /// PWG keyword of the default media source, when one is marked.
    pub source: Option<String>,
    /// PWG keyword of the default media type, when one is marked.
    pub media_type: Option<String>,
    /// Default horizontal resolution, dots per inch.
    pub xres: i32,
    /// Default vertical resolution, dots per inch.
    pub yres: i32,
}

/// Resolve defaults with the documented precedence: the marked page size,
/// else the first Letter/A4 entry in catalog order, else the first catalog
/// entry.
pub fn resolve(ppd: &PpdDescription, table: &CapabilityTable) -> Result<ResolvedDefaults> {
    if table.sizes.is_empty() {
        return Err(BlattwerkError::EmptyMediaCatalog);
    }

    let size_index = ppd
        .find_marked_choice("PageSize")
        .and_then(|name| table.sizes.iter().position(|s| s.ppd == name))
        .or_else(|| {
            // One scan checking both names, so the catalog's own order
            // breaks the Letter/A4 tie.
            table
                .sizes
                .iter()
                .position(|s| s.ppd == "Letter" || s.ppd == "A4")
        })
        .unwrap_or(0);

    debug!(size = %table.sizes[size_index].pwg, "resolved default media size");

    let source = ppd
        .find_marked_choice("InputSlot")
        .and_then(|choice| table.source_for(choice))
        .map(str::to_string);

    let media_type = ppd
        .find_marked_choice("MediaType")
        .and_then(|choice| table.type_for(choice))
        .map(str::to_string);

    let (xres, yres) = match ppd.find_attr("DefaultResolution") {
        Some(raw) => parse_resolution(raw).unwrap_or_else(|| {
            warn!(value = raw, "unparseable DefaultResolution, assuming {FALLBACK_DPI}dpi");
            (FALLBACK_DPI, FALLBACK_DPI)
        }),
        None => (FALLBACK_DPI, FALLBACK_DPI),
    };

    Ok(ResolvedDefaults {
        size_index,
        source,
        media_type,
        xres,
        yres,
    })
}

/// Scanf-style lenient parse of a DefaultResolution value: a leading
/// integer, optionally followed by `x` and a second integer.  A single
/// integer applies to both axes; trailing text ("600dpi") is ignored.
fn parse_resolution(raw: &str) -> Option<(i32, i32)> {
    let (xres, rest) = leading_int(raw)?;
    match rest.strip_prefix('x') {
        Some(rest) => match leading_int(rest) {
            Some((yres, _)) => Some((xres, yres)),
            None => Some((xres, xres)),
        },
        None => Some((xres, xres)),
    }
}

/// Split a leading unsigned integer off `s`.
fn leading_int(s: &str) -> Option<(i32, &str)> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    s[..end].parse().ok().map(|value| (value, &s[end..]))
}
