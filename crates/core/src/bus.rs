//! Diagnostic observer for live pipeline bus messages.
//!
//! Observation only: errors, warnings, end-of-stream and top-level state
//! transitions are logged with the mount path they belong to. No retries and
//! no recovery happen here — when a pipeline fails, the RTSP server tears
//! down the owning session on its own.

use gst::prelude::*;

/// A bus message the observer cares about, reduced to what gets logged.
///
/// State transitions of internal elements are filtered out during
/// [`classify`]; only the top-level pipeline's transitions are kept, so a
/// ten-element pipeline going to `Playing` produces one log line, not ten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusEvent {
    Error {
        message: String,
        debug: Option<String>,
    },
    Warning {
        message: String,
        debug: Option<String>,
    },
    EndOfStream,
    StateChanged {
        old: gst::State,
        current: gst::State,
    },
}

impl BusEvent {
    /// Log this event with its originating mount path.
    pub fn log(&self, mount_path: &str) {
        match self {
            Self::Error {
                message,
                debug: debug_info,
            } => tracing::error!(
                path = %mount_path,
                message = %message,
                debug = debug_info.as_deref().unwrap_or(""),
                "pipeline error"
            ),
            Self::Warning {
                message,
                debug: debug_info,
            } => tracing::warn!(
                path = %mount_path,
                message = %message,
                debug = debug_info.as_deref().unwrap_or(""),
                "pipeline warning"
            ),
            Self::EndOfStream => tracing::info!(path = %mount_path, "end of stream"),
            Self::StateChanged { old, current } => tracing::info!(
                path = %mount_path,
                ?old,
                ?current,
                "pipeline state changed"
            ),
        }
    }
}

/// Reduce a bus message to a loggable event, or `None` if it is noise.
///
/// `pipeline` is the top-level pipeline the bus belongs to; it decides which
/// state-changed messages are relevant.
pub fn classify(msg: &gst::Message, pipeline: &gst::Pipeline) -> Option<BusEvent> {
    use gst::MessageView;

    match msg.view() {
        MessageView::Error(err) => Some(BusEvent::Error {
            message: err.error().to_string(),
            debug: err.debug().map(|d| d.to_string()),
        }),
        MessageView::Warning(warn) => Some(BusEvent::Warning {
            message: warn.error().to_string(),
            debug: warn.debug().map(|d| d.to_string()),
        }),
        MessageView::Eos(_) => Some(BusEvent::EndOfStream),
        MessageView::StateChanged(change) => {
            let top_level = msg
                .src()
                .is_some_and(|src| src == pipeline.upcast_ref::<gst::Object>());
            top_level.then(|| BusEvent::StateChanged {
                old: change.old(),
                current: change.current(),
            })
        }
        _ => None,
    }
}

/// Subscribe to a live pipeline's bus and log every classified event.
///
/// The watch lives as long as the pipeline's bus does; when the RTSP server
/// destroys the pipeline at session end, the subscription goes with it.
pub fn attach_watch(pipeline: &gst::Pipeline, mount_path: &str) {
    let Some(bus) = pipeline.bus() else {
        tracing::warn!(path = %mount_path, "pipeline has no bus, runtime events will not be logged");
        return;
    };

    bus.add_signal_watch();

    let mount_path = mount_path.to_string();
    let pipeline_weak = pipeline.downgrade();
    bus.connect_message(None, move |_, msg| {
        let Some(pipeline) = pipeline_weak.upgrade() else {
            return;
        };
        if let Some(event) = classify(msg, &pipeline) {
            event.log(&mount_path);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        gst::init().unwrap();
    }

    #[test]
    fn classify_error_keeps_message_and_debug() {
        init();
        let pipeline = gst::Pipeline::new();
        let msg = gst::message::Error::builder(gst::CoreError::Failed, "device unavailable")
            .src(&pipeline)
            .debug("v4l2src: could not open /dev/video0")
            .build();

        let event = classify(&msg, &pipeline).expect("error message must classify");
        match event {
            BusEvent::Error { message, debug } => {
                assert!(message.contains("device unavailable"));
                assert_eq!(
                    debug.as_deref(),
                    Some("v4l2src: could not open /dev/video0")
                );
            }
            other => panic!("expected Error, got {other:?}"),
        }
    }

    #[test]
    fn classify_warning() {
        init();
        let pipeline = gst::Pipeline::new();
        let msg = gst::message::Warning::builder(gst::CoreError::Failed, "dropping frames")
            .src(&pipeline)
            .build();

        match classify(&msg, &pipeline) {
            Some(BusEvent::Warning { message, .. }) => {
                assert!(message.contains("dropping frames"));
            }
            other => panic!("expected Warning, got {other:?}"),
        }
    }

    #[test]
    fn classify_eos() {
        init();
        let pipeline = gst::Pipeline::new();
        let msg = gst::message::Eos::builder().src(&pipeline).build();
        assert_eq!(classify(&msg, &pipeline), Some(BusEvent::EndOfStream));
    }

    #[test]
    fn classify_top_level_state_change() {
        init();
        let pipeline = gst::Pipeline::new();
        let msg = gst::message::StateChanged::builder(
            gst::State::Ready,
            gst::State::Playing,
            gst::State::VoidPending,
        )
        .src(&pipeline)
        .build();

        assert_eq!(
            classify(&msg, &pipeline),
            Some(BusEvent::StateChanged {
                old: gst::State::Ready,
                current: gst::State::Playing,
            })
        );
    }

    #[test]
    fn classify_ignores_internal_element_state_change() {
        init();
        let pipeline = gst::Pipeline::new();
        let element = gst::ElementFactory::make("identity").build().unwrap();
        let msg = gst::message::StateChanged::builder(
            gst::State::Ready,
            gst::State::Playing,
            gst::State::VoidPending,
        )
        .src(&element)
        .build();

        assert_eq!(classify(&msg, &pipeline), None);
    }

    #[test]
    fn classify_ignores_unrelated_kinds() {
        init();
        let pipeline = gst::Pipeline::new();
        let msg = gst::message::Latency::builder().src(&pipeline).build();
        assert_eq!(classify(&msg, &pipeline), None);
    }
}
