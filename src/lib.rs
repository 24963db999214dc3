// SPDX-License-Identifier: MPL-2.0
//! `cloudlift` is a drag-and-drop uploader and gallery for Cloudinary built
//! with the Iced GUI framework.
//!
//! Files dropped on the window (or picked from a dialog) are checked against
//! a type and size allow-list, uploaded concurrently with unsigned
//! multipart requests and listed in a filterable gallery for the rest of the
//! session. Text is localized with Fluent.

#![doc(html_root_url = "https://docs.rs/cloudlift/0.1.0")]

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
pub mod upload;
