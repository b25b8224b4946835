use crate::{
    foundation::rng::Rng64,
    reveal::schedule::{RevealTiming, shuffle_in_place},
    reveal::state::{Phase, RevealState},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Opaque handle to a pending frame callback.
pub struct FrameHandle(pub u64);

/// Environment an [`Animator`] drives: a document with rects and a frame timer.
pub trait RevealHost {
    /// Handle to one rect element.
    type Rect;

    /// Gather every rect across the figure containers.
    fn collect_rects(&mut self) -> Vec<Self::Rect>;

    /// Set a rect's opacity (`0.0` hidden, `1.0` shown).
    fn set_opacity(&mut self, rect: &Self::Rect, opacity: f32);

    /// Ask for one frame callback.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a callback returned by [`RevealHost::request_frame`].
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// One reveal animation: `{rects, reveal times, start time, frame handle}`.
///
/// The host calls [`Animator::start`] on page ready (or to restart) and
/// [`Animator::on_frame`] whenever a requested frame fires.
pub struct Animator<R> {
    rects: Vec<R>,
    state: RevealState,
    frame: Option<FrameHandle>,
    rng: Rng64,
}

impl<R> Animator<R> {
    /// Idle animator; `rng` drives the shuffle of every run.
    pub fn new(timing: RevealTiming, rng: Rng64) -> Self {
        Self {
            rects: Vec::new(),
            state: RevealState::new(timing),
            frame: None,
            rng,
        }
    }

    /// Current state of the run.
    pub fn state(&self) -> &RevealState {
        &self.state
    }

    /// Shorthand for `self.state().phase()`.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Rects in reveal order.
    pub fn rects(&self) -> &[R] {
        &self.rects
    }

    /// Frame request not yet delivered, if any.
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.frame
    }

    /// Collect, shuffle, hide and schedule every rect at host time `now`.
    ///
    /// A run already in flight is torn down first so two runs never overlap.
    pub fn start<H>(&mut self, host: &mut H, now: f64)
    where
        H: RevealHost<Rect = R>,
    {
        if let Some(handle) = self.frame.take() {
            host.cancel_frame(handle);
        }

        let state = self.take_state().begin();
        let mut rects = host.collect_rects();
        if rects.is_empty() {
            tracing::debug!("no rects to reveal");
            self.rects.clear();
            self.state = state.schedule_rects(0, now);
            return;
        }

        shuffle_in_place(&mut rects, &mut self.rng);
        for rect in &rects {
            host.set_opacity(rect, 0.0);
        }
        self.state = state.schedule_rects(rects.len(), now);
        self.rects = rects;
        tracing::debug!(rects = self.rects.len(), "reveal scheduled");

        self.frame = Some(host.request_frame());
    }

    /// Apply one frame at host time `now`, re-arming while the run is live.
    pub fn on_frame<H>(&mut self, host: &mut H, now: f64)
    where
        H: RevealHost<Rect = R>,
    {
        self.frame = None;
        let before = self.state.revealed();
        self.state = self.take_state().advance(now);

        for rect in &self.rects[before..self.state.revealed()] {
            host.set_opacity(rect, 1.0);
        }

        if self.state.wants_frame() {
            self.frame = Some(host.request_frame());
        } else if self.state.phase() == Phase::Done {
            tracing::debug!(rects = self.rects.len(), "reveal done");
        }
    }

    fn take_state(&mut self) -> RevealState {
        let timing = *self.state.timing();
        std::mem::replace(&mut self.state, RevealState::new(timing))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/animator.rs"]
mod tests;
