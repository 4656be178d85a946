//! Error types for the camera gateway library.

use gst::glib;

/// Errors that can occur while configuring or running the gateway.
///
/// Variants map to specific failure modes across the stack:
///
/// - **Framework**: [`Glib`](Self::Glib), [`GlibBool`](Self::GlibBool) —
///   GStreamer initialization, server attach, or pipeline construction
///   failures surfaced by the framework.
/// - **Registry**: [`DuplicateEndpoint`](Self::DuplicateEndpoint),
///   [`NoMountPoints`](Self::NoMountPoints) — mount-table misuse.
///
/// Runtime pipeline failures (device unavailable, encode errors) never show
/// up here: they arrive asynchronously on the pipeline bus and are logged by
/// [`bus`](crate::bus), with session teardown left to the RTSP server.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// Error reported by GStreamer (init, parse, attach).
    #[error("GStreamer error: {0}")]
    Glib(#[from] glib::Error),

    /// Boolean-style GStreamer failure with a message attached.
    #[error("GStreamer error: {0}")]
    GlibBool(#[from] glib::BoolError),

    /// The RTSP server has no mount-points object to register factories on.
    #[error("server has no mount points")]
    NoMountPoints,

    /// A factory is already registered at this mount path.
    ///
    /// Each mount path maps to exactly one pipeline descriptor; registering
    /// twice is a configuration bug, not something to silently replace.
    #[error("endpoint already registered at {0}")]
    DuplicateEndpoint(String),
}

/// Convenience alias for `Result<T, StreamError>`.
pub type Result<T> = std::result::Result<T, StreamError>;
