//! RTSP gateway for camera streaming.
//!
//! Publishes three kinds of endpoints through GStreamer's RTSP server:
//! locally attached camera sensors re-encoded to H.264, and upstream RTSP
//! feeds repackaged without re-encoding. The crate is configuration glue —
//! RTSP session handling, RTP payloading, capture and encoding all live in
//! GStreamer. What this crate adds is launch-string construction, mount
//! registration, and diagnostic logging of pipeline creation and bus events.
//!
//! ```no_run
//! use camgate::{CameraConfig, ServerConfig, StreamServer};
//!
//! fn main() -> camgate::Result<()> {
//!     camgate::init()?;
//!     let server = StreamServer::new(&ServerConfig::default());
//!     server.add_camera("/cam0", &CameraConfig::new("/dev/cam0-identifier"))?;
//!     server.run()
//! }
//! ```

pub mod bus;
pub mod config;
pub mod error;
pub mod factory;
pub mod launch;
pub mod server;

pub use bus::BusEvent;
pub use config::{CameraConfig, DEFAULT_ADDRESS, DEFAULT_PORT, ProxyConfig, ServerConfig};
pub use error::{Result, StreamError};
pub use factory::WatchedFactory;
pub use server::{Endpoint, StreamServer};

/// Initialize GStreamer. Must run before anything else in this crate;
/// safe to call repeatedly.
pub fn init() -> Result<()> {
    gst::init()?;
    Ok(())
}
