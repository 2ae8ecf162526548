/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod achievement;
pub mod admin;
pub mod applicant;
pub mod client;
pub mod job;
pub mod main_service;
pub mod main_services_category;
pub mod main_services_sub_category;
pub mod project;
pub mod project_image;
pub mod testimonial;
