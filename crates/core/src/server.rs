//! RTSP server wrapper: mount registration and the event loop.

use gst::glib;
use gst_rtsp_server::RTSPServer;
use gst_rtsp_server::prelude::*;
use parking_lot::RwLock;

use crate::config::{CameraConfig, ProxyConfig, ServerConfig};
use crate::error::{Result, StreamError};
use crate::factory::WatchedFactory;

/// A registered stream endpoint, as visible to the startup banner and tests.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub path: String,
    pub launch: String,
    pub shared: bool,
}

/// High-level gateway orchestrator.
///
/// Owns the RTSP server, the endpoint table, and the GLib main loop that
/// drives all network I/O and bus-message dispatch. Everything registered
/// here is fixed for the life of the process; there is no deregistration.
pub struct StreamServer {
    server: RTSPServer,
    main_loop: glib::MainLoop,
    endpoints: RwLock<Vec<Endpoint>>,
}

impl StreamServer {
    pub fn new(config: &ServerConfig) -> Self {
        let server = RTSPServer::new();
        server.set_address(&config.address);
        server.set_service(&config.port.to_string());

        Self {
            server,
            main_loop: glib::MainLoop::new(None, false),
            endpoints: RwLock::new(Vec::new()),
        }
    }

    /// Register a launch description at a mount path.
    ///
    /// Each mount path maps to exactly one descriptor; a second registration
    /// at the same path is rejected rather than replaced.
    pub fn add_endpoint(&self, path: &str, launch: &str, shared: bool) -> Result<()> {
        {
            let endpoints = self.endpoints.read();
            if endpoints.iter().any(|e| e.path == path) {
                return Err(StreamError::DuplicateEndpoint(path.to_string()));
            }
        }

        let mounts = self
            .server
            .mount_points()
            .ok_or(StreamError::NoMountPoints)?;

        let factory = WatchedFactory::new(path, launch, shared);
        mounts.add_factory(path, factory);

        self.endpoints.write().push(Endpoint {
            path: path.to_string(),
            launch: launch.to_string(),
            shared,
        });
        tracing::info!(path, shared, "endpoint registered");

        Ok(())
    }

    /// Register a local camera at a mount path (shared stream).
    pub fn add_camera(&self, path: &str, camera: &CameraConfig) -> Result<()> {
        self.add_endpoint(path, &camera.launch(), true)
    }

    /// Register an upstream RTSP proxy at a mount path (shared stream).
    pub fn add_proxy(&self, path: &str, proxy: &ProxyConfig) -> Result<()> {
        self.add_endpoint(path, &proxy.launch(), true)
    }

    /// Snapshot of the registered endpoint table.
    pub fn endpoints(&self) -> Vec<Endpoint> {
        self.endpoints.read().clone()
    }

    pub fn address(&self) -> String {
        self.server
            .address()
            .map(|a| a.to_string())
            .unwrap_or_default()
    }

    pub fn port(&self) -> String {
        self.server.service().to_string()
    }

    /// Attach the server to the default main context and run until SIGINT.
    ///
    /// All callback handlers (factory creation, bus dispatch) execute on this
    /// one loop; pipeline execution itself runs on GStreamer's own worker
    /// threads. On interrupt the loop exits without per-session drain — the
    /// process is about to terminate anyway.
    pub fn run(&self) -> Result<()> {
        let source_id = self.server.attach(None)?;
        tracing::info!(
            address = %self.address(),
            port = %self.port(),
            "RTSP server listening"
        );

        let main_loop = self.main_loop.clone();
        glib::unix_signal_add_local(libc::SIGINT, move || {
            tracing::info!("interrupt received, stopping");
            main_loop.quit();
            glib::ControlFlow::Break
        });

        self.main_loop.run();
        source_id.remove();

        Ok(())
    }
}
