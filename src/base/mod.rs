//! Core components, types, and utilities for the check-in kiosk.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - System directives for the triage agent and localized kiosk copy.
//! - Common types and result handling.

pub mod config;
pub mod i18n;
pub mod prompts;
pub mod types;
