// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Media geometry: margin aggregation and the media-size / media-col
// collection builders.

use blattwerk_core::table::PwgSize;

use crate::document::CapabilityDocument;

/// Cap on distinct margin values reported per side.
///
/// Collection stops once the cap is reached: later distinct values in the
/// catalog are dropped rather than re-ranked, and only the collected subset
/// is sorted.  Consumers key off this exact subset.
pub const MARGIN_CAP: usize = 10;

/// One margin side of a media size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginSide {
    Bottom,
    Left,
    Right,
    Top,
}

impl MarginSide {
    fn of(self, size: &PwgSize) -> i32 {
        match self {
            Self::Bottom => size.bottom,
            Self::Left => size.left,
            Self::Right => size.right,
            Self::Top => size.top,
        }
    }
}

/// Distinct margin values for one side across the size catalog, ascending.
///
/// At most [`MARGIN_CAP`] values; the first distinct values in catalog
/// order win.
pub fn supported_margins(sizes: &[PwgSize], side: MarginSide) -> Vec<i32> {
    let mut margins: Vec<i32> = Vec::with_capacity(MARGIN_CAP);
    for size in sizes {
        if margins.len() >= MARGIN_CAP {
            break;
        }
        let value = side.of(size);
        if !margins.contains(&value) {
            margins.push(value);
        }
    }
    margins.sort_unstable();
    margins
}

/// Transient media configuration feeding the collection builders.
///
/// Margins of -1 mean "unspecified" and are omitted from the collection.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MediaDescriptor<'a> {
    pub pwg: &'a str,
    pub source: Option<&'a str>,
    pub media_type: Option<&'a str>,
    pub width: i32,
    pub length: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
    pub top: i32,
}

impl<'a> MediaDescriptor<'a> {
    /// Descriptor for a catalog size with no source/type qualification.
    pub(crate) fn for_size(size: &'a PwgSize) -> Self {
        Self {
            pwg: &size.pwg,
            source: None,
            media_type: None,
            width: size.width,
            length: size.length,
            bottom: size.bottom,
            left: size.left,
            right: size.right,
            top: size.top,
        }
    }

    /// Descriptor for a catalog size qualified by the resolved default
    /// source and type.
    pub(crate) fn with_defaults(
        size: &'a PwgSize,
        source: Option<&'a str>,
        media_type: Option<&'a str>,
    ) -> Self {
        Self {
            source,
            media_type,
            ..Self::for_size(size)
        }
    }

    fn borderless(&self) -> bool {
        self.bottom == 0 && self.left == 0 && self.right == 0 && self.top == 0
    }

    /// Cache key naming this configuration: name, source, and type joined
    /// by "_", absent middle segments collapsed to an empty token, plus a
    /// "_borderless" suffix when all four margins are exactly zero.  The
    /// grammar is load-bearing for lookups elsewhere; do not reformat.
    fn media_key(&self) -> String {
        let suffix = if self.borderless() { "_borderless" } else { "" };
        match (self.source, self.media_type) {
            (Some(source), Some(media_type)) => {
                format!("{}_{}_{}{}", self.pwg, source, media_type, suffix)
            }
            (None, Some(media_type)) => format!("{}__{}{}", self.pwg, media_type, suffix),
            (Some(source), None) => format!("{}_{}{}", self.pwg, source, suffix),
            (None, None) => format!("{}{}", self.pwg, suffix),
        }
    }
}

/// Build a media-size collection: exactly x-dimension and y-dimension.
pub(crate) fn media_size(width: i32, length: i32) -> CapabilityDocument {
    let mut size = CapabilityDocument::new();
    size.add_integer("x-dimension", width)
        .add_integer("y-dimension", length);
    size
}

/// Build a media-col collection for one media configuration.
pub(crate) fn media_col(desc: &MediaDescriptor<'_>) -> CapabilityDocument {
    let mut col = CapabilityDocument::new();
    col.add_keyword("media-key", desc.media_key());
    col.add_collection("media-size", media_size(desc.width, desc.length));
    col.add_keyword("media-size-name", desc.pwg);
    if desc.bottom >= 0 {
        col.add_integer("media-bottom-margin", desc.bottom);
    }
    if desc.left >= 0 {
        col.add_integer("media-left-margin", desc.left);
    }
    if desc.right >= 0 {
        col.add_integer("media-right-margin", desc.right);
    }
    if desc.top >= 0 {
        col.add_integer("media-top-margin", desc.top);
    }
    if let Some(source) = desc.source {
        col.add_keyword("media-source", source);
    }
    if let Some(media_type) = desc.media_type {
        col.add_keyword("media-type", media_type);
    }
    col
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::AttrValue;

    fn size(ppd: &str, pwg: &str, margin: i32) -> PwgSize {
        PwgSize {
            pwg: pwg.into(),
            ppd: ppd.into(),
            width: 21000,
            length: 29700,
            bottom: margin,
            left: margin,
            right: margin,
            top: margin,
        }
    }

    fn letter() -> PwgSize {
        PwgSize {
            pwg: "na_letter_8.5x11in".into(),
            ppd: "Letter".into(),
            width: 21590,
            length: 27940,
            bottom: 635,
            left: 635,
            right: 635,
            top: 423,
        }
    }

    // -- Margin aggregation -------------------------------------------------

    #[test]
    fn margins_are_deduplicated_and_sorted() {
        let sizes = vec![size("A", "a", 635), size("B", "b", 0), size("C", "c", 635)];
        assert_eq!(supported_margins(&sizes, MarginSide::Bottom), [0, 635]);
    }

    #[test]
    fn each_side_is_aggregated_independently() {
        let mut odd = letter();
        odd.top = 1270;
        let sizes = vec![letter(), odd];
        assert_eq!(supported_margins(&sizes, MarginSide::Bottom), [635]);
        assert_eq!(supported_margins(&sizes, MarginSide::Top), [423, 1270]);
    }

    #[test]
    fn collection_stops_at_the_cap_in_catalog_order() {
        // Descending values 12..=1: the first ten distinct (12..=3) are
        // kept, then sorted; 2 and 1 never enter the set.
        let sizes: Vec<PwgSize> = (0..12)
            .map(|i| size(&format!("S{i}"), &format!("s{i}"), 12 - i))
            .collect();
        let margins = supported_margins(&sizes, MarginSide::Left);
        assert_eq!(margins.len(), MARGIN_CAP);
        assert_eq!(margins, (3..=12).collect::<Vec<i32>>());
    }

    #[test]
    fn small_catalogs_emit_the_exact_distinct_set() {
        let sizes = vec![size("A", "a", 500), size("B", "b", 300), size("C", "c", 400)];
        assert_eq!(supported_margins(&sizes, MarginSide::Right), [300, 400, 500]);
    }

    // -- media-size ---------------------------------------------------------

    #[test]
    fn media_size_has_exactly_two_dimensions() {
        let doc = media_size(21590, 27940);
        assert_eq!(doc.len(), 2);
        assert_eq!(
            doc.get("x-dimension").and_then(|a| a.single()),
            Some(&AttrValue::Integer(21590))
        );
        assert_eq!(
            doc.get("y-dimension").and_then(|a| a.single()),
            Some(&AttrValue::Integer(27940))
        );
    }

    // -- media-col ----------------------------------------------------------

    fn key_of(col: &CapabilityDocument) -> &str {
        col.get("media-key")
            .and_then(|a| a.single())
            .and_then(AttrValue::as_keyword)
            .expect("media-key present")
    }

    #[test]
    fn media_key_joins_name_source_and_type() {
        let size = letter();
        let both = MediaDescriptor::with_defaults(&size, Some("tray-1"), Some("stationery"));
        assert_eq!(key_of(&media_col(&both)), "na_letter_8.5x11in_tray-1_stationery");

        let type_only = MediaDescriptor::with_defaults(&size, None, Some("stationery"));
        assert_eq!(key_of(&media_col(&type_only)), "na_letter_8.5x11in__stationery");

        let source_only = MediaDescriptor::with_defaults(&size, Some("tray-1"), None);
        assert_eq!(key_of(&media_col(&source_only)), "na_letter_8.5x11in_tray-1");

        let bare = MediaDescriptor::for_size(&size);
        assert_eq!(key_of(&media_col(&bare)), "na_letter_8.5x11in");
    }

    #[test]
    fn media_key_marks_borderless_sizes() {
        let mut borderless = letter();
        borderless.bottom = 0;
        borderless.left = 0;
        borderless.right = 0;
        borderless.top = 0;
        let col = media_col(&MediaDescriptor::for_size(&borderless));
        assert_eq!(key_of(&col), "na_letter_8.5x11in_borderless");

        // A single non-zero margin is enough to lose the suffix.
        let mut nearly = borderless.clone();
        nearly.top = 1;
        let col = media_col(&MediaDescriptor::for_size(&nearly));
        assert_eq!(key_of(&col), "na_letter_8.5x11in");
    }

    #[test]
    fn unspecified_margins_are_omitted() {
        let mut size = letter();
        size.bottom = -1;
        size.top = -1;
        let col = media_col(&MediaDescriptor::for_size(&size));
        assert!(col.get("media-bottom-margin").is_none());
        assert!(col.get("media-top-margin").is_none());
        assert_eq!(
            col.get("media-left-margin").and_then(|a| a.single()),
            Some(&AttrValue::Integer(635))
        );
        assert_eq!(
            col.get("media-right-margin").and_then(|a| a.single()),
            Some(&AttrValue::Integer(635))
        );
    }

    #[test]
    fn source_and_type_appear_only_when_given() {
        let size = letter();
        let bare = media_col(&MediaDescriptor::for_size(&size));
        assert!(bare.get("media-source").is_none());
        assert!(bare.get("media-type").is_none());

        let full = media_col(&MediaDescriptor::with_defaults(
            &size,
            Some("tray-1"),
            Some("stationery"),
        ));
        assert_eq!(
            full.get("media-source").and_then(|a| a.single()),
            Some(&AttrValue::Keyword("tray-1".into()))
        );
        assert_eq!(
            full.get("media-type").and_then(|a| a.single()),
            Some(&AttrValue::Keyword("stationery".into()))
        );
    }

    #[test]
    fn media_keys_are_unique_across_distinct_sizes() {
        let sizes = vec![letter(), size("A4", "iso_a4_210x297mm", 635)];
        let keys: Vec<String> = sizes
            .iter()
            .map(|s| key_of(&media_col(&MediaDescriptor::for_size(s))).to_string())
            .collect();
        assert_eq!(keys.len(), 2);
        assert_ne!(keys[0], keys[1]);
    }
}
