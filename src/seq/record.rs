// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// A raw FastA record: the header (marker stripped, trimmed) and the body, i.e. all the following
// sequence lines glued together with whitespace removed. No interpretation of either happens here;
// see crate::sequence for that.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub header: String,
    pub body: String,
}
