// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Blattwerk IPP — a typed in-memory model of IPP printer attributes and the
// translator that fills one from a parsed PPD printer description.

pub mod attributes;
pub mod defaults;
pub mod document;
pub mod media;

pub use attributes::{load_attributes, translate};
pub use defaults::ResolvedDefaults;
pub use document::{AttrValue, Attribute, CapabilityDocument, ResolutionUnits};
pub use media::{MARGIN_CAP, MarginSide, supported_margins};
