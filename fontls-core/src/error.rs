//! Error taxonomy for host enumeration (made by FontLab https://www.fontlab.com/)

use thiserror::Error;

/// Fatal failures while talking to the host graphics subsystem.
///
/// Only resource acquisition can abort an enumeration call; per-record
/// decode problems degrade to best-effort text inside the record decoder
/// and never show up here. `Clone` because the one-time library resolution
/// caches its outcome and replays it to later calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumerateError {
    /// The host graphics library could not be located or loaded.
    #[error("host graphics library unavailable: {0}")]
    LibraryUnavailable(String),

    /// The library loaded but does not export the enumeration entry point.
    #[error("enumeration entry point unavailable: {0}")]
    EntryPointUnavailable(String),

    /// No display device context could be acquired to scope the query.
    #[error("device context unavailable")]
    DeviceContextUnavailable,
}
