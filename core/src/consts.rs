/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;
pub const PASSWORD_LENGTH: RangeInclusive<usize> = 6..=128;

pub const OWNER_ROLE: &str = "owner";
pub const MEMBER_ROLE: &str = "member";
pub const DEFAULT_USER_ROLE: &str = "user";
pub const DEFAULT_PROJECT_STATUS: &str = "active";

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
