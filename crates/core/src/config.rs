//! Endpoint configuration.
//!
//! All configuration is fixed at construction time; there is no mechanism to
//! reconfigure a running server short of a restart.

pub const DEFAULT_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8555;

/// Listen address and port for the RTSP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind; `0.0.0.0` listens on all interfaces.
    pub address: String,
    /// RTSP service port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// A locally attached camera sensor, captured and re-encoded to H.264.
#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// libcamera device identifier (e.g. the i2c path of an IMX477 sensor).
    pub device: String,
    pub width: u32,
    pub height: u32,
    /// Frames per second; also sets the encoder keyframe interval so each
    /// second starts with a keyframe.
    pub framerate: u32,
    /// x264 target bitrate in kbit/s.
    pub bitrate_kbps: u32,
    /// Rotate the image 180 degrees (sensor mounted upside down).
    pub rotate_180: bool,
}

impl CameraConfig {
    /// Camera with the deployment defaults: 1280x720 at 30 fps, 2000 kbit/s,
    /// rotation correction on.
    pub fn new(device: &str) -> Self {
        Self {
            device: device.to_string(),
            width: 1280,
            height: 720,
            framerate: 30,
            bitrate_kbps: 2000,
            rotate_180: true,
        }
    }

    /// Launch description for this camera's capture-and-encode pipeline.
    pub fn launch(&self) -> String {
        crate::launch::camera_launch(self)
    }
}

/// An upstream RTSP camera whose H.264 stream is repackaged without
/// re-encoding.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// RTSP URL of the upstream camera.
    pub location: String,
    /// Receive jitterbuffer latency in milliseconds.
    pub latency_ms: u32,
}

impl ProxyConfig {
    /// Proxy with zero added latency.
    pub fn new(location: &str) -> Self {
        Self {
            location: location.to_string(),
            latency_ms: 0,
        }
    }

    /// Launch description for this proxy's passthrough pipeline.
    pub fn launch(&self) -> String {
        crate::launch::proxy_launch(self)
    }
}
