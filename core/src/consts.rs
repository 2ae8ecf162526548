/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{DateTime, NaiveDateTime};
use std::ops::RangeInclusive;
use std::sync::LazyLock;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub static NULL_TIME: LazyLock<NaiveDateTime> = LazyLock::new(|| {
    DateTime::from_timestamp(0, 0)
        .map(|t| t.naive_utc())
        .unwrap_or_default()
});

/// Lifetime of an admin session token.
pub const TOKEN_LIFETIME_HOURS: i64 = 24;

/// Rows per statement when bulk inserting gallery images.
pub const IMAGE_INSERT_CHUNK: usize = 500;

pub const MAX_IMAGE_NAME_LENGTH: usize = 255;
