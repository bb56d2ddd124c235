/// Asks the host to call back on its next frame.
///
/// The driver requests at most one frame at a time. Implementations typically wrap
/// `requestAnimationFrame`, a winit redraw request, or an event-loop wakeup; the callback
/// itself is [`crate::ListDriver::on_frame`].
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for &mut S {
    fn request_frame(&mut self) {
        (**self).request_frame();
    }
}

/// A scheduler that only records requests. Hosts (and tests) poll it and run the frame
/// themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ManualScheduler {
    requested: bool,
    requests: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a frame was requested and not yet taken.
    pub fn is_requested(&self) -> bool {
        self.requested
    }

    /// Total number of requests seen.
    pub fn requests(&self) -> u64 {
        self.requests
    }

    /// Consumes the outstanding request, if any.
    pub fn take_request(&mut self) -> bool {
        core::mem::take(&mut self.requested)
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        self.requested = true;
        self.requests = self.requests.saturating_add(1);
    }
}
