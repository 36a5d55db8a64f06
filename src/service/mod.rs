//! Service integrations for external APIs and simulated hardware.
//!
//! This module contains implementations for the services used by the kiosk:
//! - LLM services (e.g., OpenAI) behind the triage recommender
//! - Identity scan hardware (simulated document/face scanner)
//! - The outbound booking payload builder
//!
//! Each service module defines both generic traits and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod booking;
pub mod identity;
pub mod llm;
pub mod triage;
