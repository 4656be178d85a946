//! Integration tests: endpoint registration and factory materialization.
//!
//! Exercises the configuration surface against a real GStreamer install
//! (core elements only — no camera hardware or network peers needed).

use camgate::{CameraConfig, ProxyConfig, ServerConfig, StreamServer, WatchedFactory};

fn setup() -> StreamServer {
    camgate::init().expect("gstreamer init");
    StreamServer::new(&ServerConfig::default())
}

#[test]
fn registers_three_deployment_endpoints() {
    let server = setup();

    server
        .add_camera("/cam0", &CameraConfig::new("cam0-id"))
        .expect("register /cam0");
    server
        .add_camera("/cam1", &CameraConfig::new("cam1-id"))
        .expect("register /cam1");
    server
        .add_proxy("/cam2", &ProxyConfig::new("rtsp://192.168.144.25:8554/main.264"))
        .expect("register /cam2");

    let endpoints = server.endpoints();
    let paths: Vec<&str> = endpoints.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, vec!["/cam0", "/cam1", "/cam2"]);

    // Deployed endpoints are all shared streams.
    assert!(endpoints.iter().all(|e| e.shared));

    // Local cameras encode, the proxy passes through.
    assert!(endpoints[0].launch.contains("x264enc"));
    assert!(endpoints[1].launch.contains("x264enc"));
    assert!(!endpoints[2].launch.contains("x264enc"));
    assert!(endpoints[2].launch.contains("rtspsrc"));
}

#[test]
fn duplicate_mount_path_is_rejected() {
    let server = setup();

    server
        .add_camera("/cam0", &CameraConfig::new("cam0-id"))
        .expect("first registration");

    let err = server
        .add_camera("/cam0", &CameraConfig::new("other-id"))
        .expect_err("second registration at the same path must fail");
    assert!(err.to_string().contains("/cam0"));

    assert_eq!(server.endpoints().len(), 1);
}

#[test]
fn valid_launch_materializes() {
    camgate::init().expect("gstreamer init");

    let factory = WatchedFactory::new("/test", "fakesrc ! fakesink", true);
    let element = factory.materialize();
    assert!(element.is_some(), "valid description must yield a pipeline");
}

#[test]
fn malformed_launch_declines_to_serve() {
    camgate::init().expect("gstreamer init");

    let factory = WatchedFactory::new("/broken", "nosuchelement42 ! fakesink", true);
    assert!(
        factory.materialize().is_none(),
        "malformed description must yield no pipeline, not a panic"
    );
}

#[test]
fn factory_keeps_path_and_description() {
    camgate::init().expect("gstreamer init");

    let factory = WatchedFactory::new("/cam0", "fakesrc ! fakesink", true);
    assert_eq!(factory.mount_path(), "/cam0");
    assert_eq!(factory.launch_description(), "fakesrc ! fakesink");
}

#[test]
fn shared_flag_is_configurable() {
    use gst_rtsp_server::prelude::RTSPMediaFactoryExt;

    camgate::init().expect("gstreamer init");

    let shared = WatchedFactory::new("/a", "fakesrc ! fakesink", true);
    assert!(shared.is_shared());

    let unshared = WatchedFactory::new("/b", "fakesrc ! fakesink", false);
    assert!(!unshared.is_shared());
}
