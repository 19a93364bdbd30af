// Copyright 2026 The HorizTree Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use thiserror::Error;

/// An icon rendering error.
#[derive(Debug, Error)]
pub enum Error {
    /// The canvas size is zero or too big to be allocated.
    #[error("invalid canvas size {width}x{height}")]
    InvalidSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// The output file cannot be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The pixmap cannot be encoded as PNG.
    #[error("PNG encoding error: {0}")]
    Png(#[from] png::EncodingError),
}
