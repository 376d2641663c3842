/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod project;
pub mod project_member;
pub mod project_tag;
pub mod project_vacancy;
pub mod question;
pub mod tag;
pub mod technology;
pub mod user;
pub mod user_tag;
pub mod vacancy_question;
pub mod vacancy_response;
pub mod vacancy_technology;
