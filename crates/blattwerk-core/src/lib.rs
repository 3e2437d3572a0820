// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Blattwerk — core PPD description records, normalized capability catalogs,
// and error definitions shared across the workspace.

pub mod error;
pub mod formats;
pub mod ppd;
pub mod table;

pub use error::{BlattwerkError, Result};
pub use formats::DocumentFormatSet;
pub use ppd::{DescriptionSource, InMemorySource, LoadError, PpdDescription, PpdStatus};
pub use table::{CapabilityTable, PwgMap, PwgSize};
