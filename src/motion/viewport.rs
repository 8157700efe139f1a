use std::fmt;
use std::rc::Rc;
use thiserror::Error;

pub type ScrollListener = Rc<dyn Fn(f64)>;
pub type IntersectionListener = Rc<dyn Fn(bool)>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MotionError {
    #[error("intersection observation is not supported by this runtime")]
    ObservationUnavailable,
    #[error("runtime rejected the {0} listener")]
    ListenerRejected(&'static str),
}

/// Handle to an attached listener. Dropping it detaches the listener, so a
/// torn-down block can never receive another event.
#[must_use = "dropping a Subscription detaches its listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.release.is_some())
            .finish()
    }
}

pub struct Observation {
    pub subscription: Subscription,
    /// The target already overlapped the viewport when observation started.
    pub initially_visible: bool,
}

/// Ambient scroll and visibility signals of the page.
///
/// The browser implementation wraps `window` scroll events and an
/// `IntersectionObserver`; tests drive a scripted viewport instead.
pub trait ViewportSource {
    type Target;

    fn scroll_offset(&self) -> f64;

    fn on_scroll(&self, listener: ScrollListener) -> Result<Subscription, MotionError>;

    fn observe(
        &self,
        target: &Self::Target,
        listener: IntersectionListener,
    ) -> Result<Observation, MotionError>;
}
