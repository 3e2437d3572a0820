// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Capability-attribute assembly: translates one printer description and its
// derived catalogs into a complete IPP attribute document.
//
// The emission order is fixed so that two translations of the same inputs
// produce identical documents.  Only two paths fail: the description loader
// reporting an error, and a size catalog with no entries.  Everything else
// is unconditional once the description is loaded.

use std::path::Path;

use tracing::{error, info};

use blattwerk_core::error::Result;
use blattwerk_core::formats::DocumentFormatSet;
use blattwerk_core::ppd::{DescriptionSource, PpdDescription};
use blattwerk_core::table::CapabilityTable;

use crate::defaults::{self, ResolvedDefaults};
use crate::document::CapabilityDocument;
use crate::media::{self, MarginSide, MediaDescriptor};

// ---------------------------------------------------------------------------
// Protocol enum values (RFC 8011)
// ---------------------------------------------------------------------------

/// orientation-requested: portrait (§5.2.10).
const ORIENT_PORTRAIT: i32 = 3;

/// orientation-requested: landscape.
const ORIENT_LANDSCAPE: i32 = 4;

/// orientation-requested: reverse-landscape.
const ORIENT_REVERSE_LANDSCAPE: i32 = 5;

/// orientation-requested: reverse-portrait.
const ORIENT_REVERSE_PORTRAIT: i32 = 6;

/// print-quality: draft (§5.2.13).
const QUALITY_DRAFT: i32 = 3;

/// print-quality: normal.
const QUALITY_NORMAL: i32 = 4;

/// print-quality: high.
const QUALITY_HIGH: i32 = 5;

/// finishings: none (§5.2.6).
const FINISHINGS_NONE: i32 = 3;

// ---------------------------------------------------------------------------
// Document formats
// ---------------------------------------------------------------------------

// Formats every PostScript pipeline accepts; appended to the caller's set.
const FORMAT_PDF: &str = "application/pdf";
const FORMAT_POSTSCRIPT: &str = "application/postscript";
const FORMAT_JPEG: &str = "image/jpeg";

// Transport formats that gate conditional attribute groups.
const FORMAT_PWG_RASTER: &str = "image/pwg-raster";
const FORMAT_URF: &str = "image/urf";

// ---------------------------------------------------------------------------
// Static enumerations
// ---------------------------------------------------------------------------

const ORIENTATION_REQUESTED_SUPPORTED: [i32; 4] = [
    ORIENT_PORTRAIT,
    ORIENT_LANDSCAPE,
    ORIENT_REVERSE_LANDSCAPE,
    ORIENT_REVERSE_PORTRAIT,
];

const OVERRIDES_SUPPORTED: [&str; 5] = [
    "document-numbers",
    "media",
    "media-col",
    "orientation-requested",
    "pages",
];

const PRINT_COLOR_MODE_SUPPORTED: [&str; 1] = ["monochrome"];

const PRINT_COLOR_MODE_SUPPORTED_COLOR: [&str; 3] = ["auto", "color", "monochrome"];

const PRINT_QUALITY_SUPPORTED: [i32; 3] = [QUALITY_DRAFT, QUALITY_NORMAL, QUALITY_HIGH];

// Placeholder supply records; a PPD carries no live marker state.
const PRINTER_SUPPLY: [&str; 2] = [
    "index=1;class=receptacleThatIsFilled;type=wasteToner;unit=percent;\
     maxcapacity=100;level=25;colorantname=unknown;",
    "index=2;class=supplyThatIsConsumed;type=toner;unit=percent;\
     maxcapacity=100;level=75;colorantname=black;",
];

const PRINTER_SUPPLY_COLOR: [&str; 5] = [
    "index=1;class=receptacleThatIsFilled;type=wasteInk;unit=percent;\
     maxcapacity=100;level=25;colorantname=unknown;",
    "index=2;class=supplyThatIsConsumed;type=ink;unit=percent;\
     maxcapacity=100;level=75;colorantname=black;",
    "index=3;class=supplyThatIsConsumed;type=ink;unit=percent;\
     maxcapacity=100;level=50;colorantname=cyan;",
    "index=4;class=supplyThatIsConsumed;type=ink;unit=percent;\
     maxcapacity=100;level=33;colorantname=magenta;",
    "index=5;class=supplyThatIsConsumed;type=ink;unit=percent;\
     maxcapacity=100;level=67;colorantname=yellow;",
];

const PRINTER_SUPPLY_DESCRIPTION: [&str; 2] = ["Toner Waste Tank", "Black Toner"];

const PRINTER_SUPPLY_DESCRIPTION_COLOR: [&str; 5] =
    ["Ink Waste Tank", "Black Ink", "Cyan Ink", "Magenta Ink", "Yellow Ink"];

const PWG_RASTER_DOCUMENT_TYPE_SUPPORTED: [&str; 2] = ["black_1", "sgray_8"];

const PWG_RASTER_DOCUMENT_TYPE_SUPPORTED_COLOR: [&str; 4] =
    ["black_1", "sgray_8", "srgb_8", "srgb_16"];

const SIDES_SUPPORTED: [&str; 3] = ["one-sided", "two-sided-long-edge", "two-sided-short-edge"];

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Load the printer description at `path` through `source` and translate it
/// into a capability document.
///
/// `formats` is extended with the formats a PostScript pipeline accepts and
/// then consulted for the raster- and URF-conditional attributes.  The
/// description and its derived table are owned by this call and dropped on
/// every exit path.
pub fn load_attributes<S: DescriptionSource>(
    source: &S,
    path: &Path,
    formats: &mut DocumentFormatSet,
) -> Result<CapabilityDocument> {
    let mut ppd = match source.load(path) {
        Ok(ppd) => ppd,
        Err(err) => {
            error!(path = %path.display(), %err, "unable to open printer description");
            return Err(err.into());
        }
    };
    ppd.mark_defaults();

    let table = source.capability_table(&ppd);
    translate(&ppd, &table, formats)
}

/// Translate an already-loaded description and catalog table.
pub fn translate(
    ppd: &PpdDescription,
    table: &CapabilityTable,
    formats: &mut DocumentFormatSet,
) -> Result<CapabilityDocument> {
    let defaults = defaults::resolve(ppd, table)?;
    let default_size = &table.sizes[defaults.size_index];

    formats.push(FORMAT_PDF);
    formats.push(FORMAT_POSTSCRIPT);
    formats.push(FORMAT_JPEG);

    let mut attrs = CapabilityDocument::new();

    // color-supported
    attrs.add_boolean("color-supported", ppd.color_device);

    // copies-default / copies-supported
    attrs.add_integer("copies-default", 1);
    attrs.add_range("copies-supported", 1, 999);

    // document-password-supported
    attrs.add_integer("document-password-supported", 127);

    // finishing-template-supported
    attrs.add_keywords(
        "finishing-template-supported",
        std::iter::once("none").chain(table.templates.iter().map(String::as_str)),
    );

    // finishings-col-database
    attrs.add_collections("finishings-col-database", finishing_cols(&table.templates));

    // finishings-col-default
    attrs.add_collection("finishings-col-default", finishing_col("none"));

    // finishings-col-ready
    attrs.add_collections("finishings-col-ready", finishing_cols(&table.templates));

    // finishings-col-supported
    attrs.add_keyword("finishings-col-supported", "finishing-template");

    // finishings-default
    attrs.add_enum("finishings-default", FINISHINGS_NONE);

    // finishings-ready / finishings-supported
    let finishing_codes: Vec<i32> = std::iter::once(FINISHINGS_NONE)
        .chain(table.finishings.iter().copied())
        .collect();
    attrs.add_enums("finishings-ready", finishing_codes.iter().copied());
    attrs.add_enums("finishings-supported", finishing_codes.iter().copied());

    // media-bottom-margin-supported
    attrs.add_integers(
        "media-bottom-margin-supported",
        media::supported_margins(&table.sizes, MarginSide::Bottom),
    );

    // media-col-database
    attrs.add_collections(
        "media-col-database",
        table
            .sizes
            .iter()
            .map(|size| media::media_col(&MediaDescriptor::for_size(size))),
    );

    // media-col-default / media-col-ready
    let default_col = MediaDescriptor::with_defaults(
        default_size,
        defaults.source.as_deref(),
        defaults.media_type.as_deref(),
    );
    attrs.add_collection("media-col-default", media::media_col(&default_col));
    attrs.add_collection("media-col-ready", media::media_col(&default_col));

    // media-default
    attrs.add_keyword("media-default", default_size.pwg.as_str());

    // media-left-margin-supported
    attrs.add_integers(
        "media-left-margin-supported",
        media::supported_margins(&table.sizes, MarginSide::Left),
    );

    // media-ready
    attrs.add_keyword("media-ready", default_size.pwg.as_str());

    // media-right-margin-supported
    attrs.add_integers(
        "media-right-margin-supported",
        media::supported_margins(&table.sizes, MarginSide::Right),
    );

    // media-supported
    attrs.add_keywords("media-supported", table.sizes.iter().map(|s| s.pwg.as_str()));

    // media-size-supported
    attrs.add_collections(
        "media-size-supported",
        table.sizes.iter().map(|s| media::media_size(s.width, s.length)),
    );

    // media-source-supported
    if table.sources.is_empty() {
        attrs.add_keyword("media-source-supported", "auto");
    } else {
        attrs.add_keywords(
            "media-source-supported",
            table.sources.iter().map(|m| m.pwg.as_str()),
        );
    }

    // media-top-margin-supported
    attrs.add_integers(
        "media-top-margin-supported",
        media::supported_margins(&table.sizes, MarginSide::Top),
    );

    // media-type-supported
    if table.types.is_empty() {
        attrs.add_keyword("media-type-supported", "auto");
    } else {
        attrs.add_keywords(
            "media-type-supported",
            table.types.iter().map(|m| m.pwg.as_str()),
        );
    }

    // orientation-requested-default / -supported
    attrs.add_enum("orientation-requested-default", ORIENT_PORTRAIT);
    attrs.add_enums(
        "orientation-requested-supported",
        ORIENTATION_REQUESTED_SUPPORTED,
    );

    // output-bin-default / -supported
    if table.bins.is_empty() {
        attrs.add_keyword("output-bin-default", "face-down");
        attrs.add_keyword("output-bin-supported", "face-down");
    } else {
        attrs.add_keyword("output-bin-default", table.bins[0].pwg.as_str());
        attrs.add_keywords(
            "output-bin-supported",
            table.bins.iter().map(|m| m.pwg.as_str()),
        );
    }

    // overrides-supported
    attrs.add_keywords("overrides-supported", OVERRIDES_SUPPORTED);

    // page-ranges-supported
    attrs.add_boolean("page-ranges-supported", true);

    // pages-per-minute / pages-per-minute-color
    attrs.add_integer("pages-per-minute", ppd.throughput);
    if ppd.color_device {
        attrs.add_integer("pages-per-minute-color", ppd.throughput);
    }

    // print-color-mode-default / -supported
    attrs.add_keyword(
        "print-color-mode-default",
        if ppd.color_device { "auto" } else { "monochrome" },
    );
    if ppd.color_device {
        attrs.add_keywords("print-color-mode-supported", PRINT_COLOR_MODE_SUPPORTED_COLOR);
    } else {
        attrs.add_keywords("print-color-mode-supported", PRINT_COLOR_MODE_SUPPORTED);
    }

    // print-content-optimize-default / -supported
    attrs.add_keyword("print-content-optimize-default", "auto");
    attrs.add_keyword("print-content-optimize-supported", "auto");

    // print-quality-default / -supported
    attrs.add_enum("print-quality-default", QUALITY_NORMAL);
    attrs.add_enums("print-quality-supported", PRINT_QUALITY_SUPPORTED);

    // print-rendering-intent-default / -supported
    attrs.add_keyword("print-rendering-intent-default", "auto");
    attrs.add_keyword("print-rendering-intent-supported", "auto");

    // printer-device-id
    attrs.add_text("printer-device-id", device_id(ppd));

    // printer-input-tray
    attrs.add_octet_strings("printer-input-tray", input_trays(table));

    // printer-make-and-model
    attrs.add_text("printer-make-and-model", ppd.nickname.as_str());

    // printer-resolution-default / -supported
    attrs.add_resolution("printer-resolution-default", defaults.xres, defaults.yres);
    attrs.add_resolution("printer-resolution-supported", defaults.xres, defaults.yres);

    // printer-supply / printer-supply-description
    if ppd.color_device {
        attrs.add_octet_strings("printer-supply", PRINTER_SUPPLY_COLOR);
        attrs.add_texts("printer-supply-description", PRINTER_SUPPLY_DESCRIPTION_COLOR);
    } else {
        attrs.add_octet_strings("printer-supply", PRINTER_SUPPLY);
        attrs.add_texts("printer-supply-description", PRINTER_SUPPLY_DESCRIPTION);
    }

    // pwg-raster-document-* (raster transport only)
    if formats.contains(FORMAT_PWG_RASTER) {
        attrs.add_resolution(
            "pwg-raster-document-resolution-supported",
            defaults.xres,
            defaults.yres,
        );
        if table.two_sided_long_edge {
            attrs.add_keyword("pwg-raster-document-sheet-back", "normal");
        }
        if ppd.color_device {
            attrs.add_keywords(
                "pwg-raster-document-type-supported",
                PWG_RASTER_DOCUMENT_TYPE_SUPPORTED_COLOR,
            );
        } else {
            attrs.add_keywords(
                "pwg-raster-document-type-supported",
                PWG_RASTER_DOCUMENT_TYPE_SUPPORTED,
            );
        }
    }

    // sides-default / sides-supported
    attrs.add_keyword("sides-default", "one-sided");
    if table.two_sided_long_edge {
        attrs.add_keywords("sides-supported", SIDES_SUPPORTED);
    } else {
        attrs.add_keyword("sides-supported", "one-sided");
    }

    // urf-supported (URF transport only)
    if formats.contains(FORMAT_URF) {
        attrs.add_keywords(
            "urf-supported",
            urf_values(&defaults, table.two_sided_long_edge, ppd.color_device),
        );
    }

    info!(
        attributes = attrs.len(),
        model = %ppd.nickname,
        "capability document assembled"
    );
    Ok(attrs)
}

// ---------------------------------------------------------------------------
// Synthesized values
// ---------------------------------------------------------------------------

/// A finishings-col collection holding a single finishing-template member.
fn finishing_col(template: &str) -> CapabilityDocument {
    let mut col = CapabilityDocument::new();
    col.add_keyword("finishing-template", template);
    col
}

/// The "none" sentinel plus one collection per catalog template.
fn finishing_cols(templates: &[String]) -> Vec<CapabilityDocument> {
    std::iter::once(finishing_col("none"))
        .chain(templates.iter().map(|t| finishing_col(t)))
        .collect()
}

/// IEEE 1284 device ID: the description's own when present, synthesized
/// from manufacturer and model otherwise.
fn device_id(ppd: &PpdDescription) -> String {
    match ppd.find_attr("1284DeviceId") {
        Some(raw) => raw.to_string(),
        None => format!("MFG:{};MDL:{};CMD:PS;", ppd.manufacturer, ppd.model),
    }
}

/// One structured tray record per source, or a synthetic auto tray when the
/// description names none.  Manual feeds report single-sheet capacity and
/// no level sensing.
fn input_trays(table: &CapabilityTable) -> Vec<String> {
    if table.sources.is_empty() {
        return vec![
            "type=sheetFeedAutoRemovableTray;mediafeed=0;mediaxfeed=0;\
             maxcapacity=-2;level=-2;status=0;name=auto"
                .to_string(),
        ];
    }

    table
        .sources
        .iter()
        .map(|source| {
            if is_manual_feed(&source.pwg) {
                format!(
                    "type=sheetFeedManual;mediafeed=0;mediaxfeed=0;\
                     maxcapacity=1;level=-2;status=0;name={}",
                    source.pwg
                )
            } else {
                format!(
                    "type=sheetFeedAutoRemovableTray;mediafeed=0;mediaxfeed=0;\
                     maxcapacity=250;level=125;status=0;name={}",
                    source.pwg
                )
            }
        })
        .collect()
}

fn is_manual_feed(pwg: &str) -> bool {
    pwg == "manual" || pwg.contains("-man")
}

/// Fixed URF capability list: version, copies, resolution, and bit depth,
/// then duplex and colour tokens when the device has them.
fn urf_values(defaults: &ResolvedDefaults, duplex: bool, color: bool) -> Vec<String> {
    let mut urf = vec![
        "V1.4".to_string(),
        "CP1".to_string(),
        format!("RS{}", defaults.xres.min(defaults.yres)),
        "W8".to_string(),
    ];
    if duplex {
        urf.push("DM1".to_string());
    }
    if color {
        urf.push("SRGB24".to_string());
    }
    urf
}
