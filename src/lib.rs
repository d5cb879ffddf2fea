// SPDX-License-Identifier: MPL-2.0
//! `festboard` is a festival administration dashboard built with the Iced
//! GUI framework.
//!
//! It provides a sectioned admin console (overview, data tables, forms,
//! settings) with toast notifications, theme switching, and persisted user
//! preferences. All dashboard data is simulated sample data.

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod search;
pub mod ui;
