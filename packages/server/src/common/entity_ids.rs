//! Typed ID definitions for all domain entities.
//!
//! This module defines type aliases for each domain entity, providing
//! compile-time type safety for ID usage throughout the application.
//!
//! Waitlist entries carry a `ProviderId` foreign key rather than a free-text
//! provider name fragment, so two providers sharing a surname can never
//! collide.

// Re-export the core Id type and version markers
pub use super::id::{Id, V4, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Patient entities.
pub struct Patient;

/// Marker type for Provider entities.
pub struct Provider;

/// Marker type for WaitlistEntry entities.
pub struct WaitlistEntry;

/// Marker type for AppointmentSlot entities.
pub struct AppointmentSlot;

/// Marker type for DispatchJob entities (notification runs).
pub struct DispatchJob;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Patient entities.
pub type PatientId = Id<Patient>;

/// Typed ID for Provider entities.
pub type ProviderId = Id<Provider>;

/// Typed ID for WaitlistEntry entities.
pub type WaitlistEntryId = Id<WaitlistEntry>;

/// Typed ID for AppointmentSlot entities.
pub type SlotId = Id<AppointmentSlot>;

/// Typed ID for notification dispatch runs.
pub type DispatchId = Id<DispatchJob>;
