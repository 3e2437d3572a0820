// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Blattwerk.

use thiserror::Error;

use crate::ppd::LoadError;

/// Top-level error type for all Blattwerk operations.
#[derive(Debug, Error)]
pub enum BlattwerkError {
    /// The printer description could not be opened or parsed.
    #[error("printer description failed to load: {0}")]
    DescriptionLoad(#[from] LoadError),

    /// The derived capability table names no media sizes, so no default
    /// size exists and no media attributes can be built.
    #[error("printer description defines no media sizes")]
    EmptyMediaCatalog,
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BlattwerkError>;
