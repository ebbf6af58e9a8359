// Openslot - waitlist and notification core
//
// This crate provides the backend API for matching waitlisted patients with
// providers and notifying them about open appointment slots.
// Architecture follows domain-driven design: pure decision logic lives in
// domains/*, infrastructure behind trait seams in kernel/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
