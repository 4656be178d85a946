//! Media factory that materializes launch descriptions on client request.
//!
//! `WatchedFactory` subclasses `RTSPMediaFactory` and overrides
//! `create_element`, the hook the RTSP server calls when a client requests
//! the factory's mount path. The override parses the stored launch
//! description and attaches the bus observer to the resulting pipeline.
//! When the description does not parse it declines to serve (returns
//! `None`), leaving the rest of the server running.

use gst::glib;
use gst::prelude::*;
use gst_rtsp_server::prelude::*;
use gst_rtsp_server::subclass::prelude::*;

use crate::bus;

mod imp {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Debug, Default, Clone)]
    pub struct Settings {
        pub mount_path: String,
        pub launch: String,
    }

    #[derive(Default)]
    pub struct WatchedFactory {
        pub(super) settings: Mutex<Settings>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for WatchedFactory {
        const NAME: &'static str = "CamgateWatchedFactory";
        type Type = super::WatchedFactory;
        type ParentType = gst_rtsp_server::RTSPMediaFactory;
    }

    impl ObjectImpl for WatchedFactory {}

    impl RTSPMediaFactoryImpl for WatchedFactory {
        fn create_element(&self, _url: &gst_rtsp::RTSPUrl) -> Option<gst::Element> {
            self.materialize()
        }
    }

    impl WatchedFactory {
        pub(super) fn materialize(&self) -> Option<gst::Element> {
            let settings = self.settings.lock().clone();

            match gst::parse::launch(&settings.launch) {
                Ok(element) => {
                    tracing::info!(
                        path = %settings.mount_path,
                        launch = %settings.launch,
                        "pipeline created"
                    );
                    if let Some(pipeline) = element.downcast_ref::<gst::Pipeline>() {
                        bus::attach_watch(pipeline, &settings.mount_path);
                    }
                    Some(element)
                }
                Err(err) => {
                    tracing::error!(
                        path = %settings.mount_path,
                        launch = %settings.launch,
                        error = %err,
                        "pipeline creation failed, stream unavailable"
                    );
                    None
                }
            }
        }
    }
}

glib::wrapper! {
    pub struct WatchedFactory(ObjectSubclass<imp::WatchedFactory>)
        @extends gst_rtsp_server::RTSPMediaFactory;
}

impl WatchedFactory {
    /// Factory for `launch` at `mount_path`.
    ///
    /// With `shared` set, concurrent clients on the path multiplex one live
    /// pipeline; otherwise every client request materializes its own.
    pub fn new(mount_path: &str, launch: &str, shared: bool) -> Self {
        let factory: Self = glib::Object::builder().build();
        {
            let mut settings = factory.imp().settings.lock();
            settings.mount_path = mount_path.to_string();
            settings.launch = launch.to_string();
        }
        factory.set_shared(shared);
        factory
    }

    pub fn mount_path(&self) -> String {
        self.imp().settings.lock().mount_path.clone()
    }

    /// The launch description this factory materializes.
    ///
    /// Named to avoid shadowing `RTSPMediaFactoryExt::launch`, which reads
    /// the parent class property this subclass does not use.
    pub fn launch_description(&self) -> String {
        self.imp().settings.lock().launch.clone()
    }

    /// Parse the launch description into a live pipeline.
    ///
    /// This is what `create_element` runs on client request; exposed so the
    /// construction path can be exercised without an RTSP client.
    pub fn materialize(&self) -> Option<gst::Element> {
        self.imp().materialize()
    }
}
