/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Test modules for core crate

pub mod input_tests;
pub mod seed_tests;
pub mod sqlite_tests;
