//! Pipeline descriptor builders.
//!
//! Camera:   libcamerasrc -> convert/scale/flip -> x264enc -> rtph264pay
//! Proxy:    rtspsrc -> rtph264depay -> h264parse -> rtph264pay
//!
//! Descriptions are plain `gst-launch` strings; nothing is validated here.
//! A malformed description surfaces when the factory tries to materialize it.

use crate::config::{CameraConfig, ProxyConfig};

/// 0.5 s of buffering between the stages that can stall independently.
const QUEUE: &str = "queue max-size-buffers=100 max-size-time=500000000";

/// Capture-and-encode chain for a local camera sensor.
///
/// Software encoding only (the target board has no hardware encoder), tuned
/// for low latency: `zerolatency`, `veryfast`, two encoder threads, baseline
/// profile for broad client compatibility.
pub fn camera_launch(cfg: &CameraConfig) -> String {
    let flip = if cfg.rotate_180 {
        "videoflip video-direction=2 ! "
    } else {
        ""
    };

    format!(
        "libcamerasrc camera-name={device} ! \
         videoconvert ! \
         video/x-raw,format=I420 ! \
         videoscale ! \
         video/x-raw,width={width},height={height},framerate={fps}/1 ! \
         {flip}{queue} ! \
         x264enc tune=zerolatency bitrate={bitrate} speed-preset=veryfast \
         key-int-max={fps} threads=2 ! \
         video/x-h264,profile=baseline ! \
         {queue} ! \
         rtph264pay config-interval=1 name=pay0 pt=96",
        device = cfg.device,
        width = cfg.width,
        height = cfg.height,
        fps = cfg.framerate,
        bitrate = cfg.bitrate_kbps,
        flip = flip,
        queue = QUEUE,
    )
}

/// Passthrough chain for an upstream RTSP camera.
///
/// The already-encoded H.264 elementary stream is depayloaded, parsed and
/// repayloaded; no decode or re-encode happens anywhere in the chain.
pub fn proxy_launch(cfg: &ProxyConfig) -> String {
    format!(
        "rtspsrc location={location} latency={latency} buffer-mode=1 ! \
         rtph264depay ! \
         h264parse ! \
         {queue} ! \
         rtph264pay config-interval=1 name=pay0 pt=96",
        location = cfg.location,
        latency = cfg.latency_ms,
        queue = QUEUE,
    )
}
