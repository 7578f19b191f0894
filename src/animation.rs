//! Frame-by-frame playback of `AnimatedOutput`.
//!
//! Starting a playback invalidates every earlier one: an older loop notices
//! before its next frame and stops (cancel-and-replace). The delay source is
//! passed in so the browser can use real timers and tests can use ready
//! futures.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use crate::command::AnimationFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    Completed,
    Cancelled { shown: usize },
}

#[derive(Debug, Clone, Default)]
pub struct Playback {
    generation: Rc<Cell<u64>>,
}

#[derive(Debug, Clone)]
pub struct PlaybackTicket {
    generation: Rc<Cell<u64>>,
    id: u64,
}

impl PlaybackTicket {
    pub fn is_current(&self) -> bool {
        self.generation.get() == self.id
    }
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the stage; any ticket handed out before this one goes stale.
    pub fn begin(&self) -> PlaybackTicket {
        let id = self.generation.get().wrapping_add(1);
        self.generation.set(id);
        PlaybackTicket { generation: Rc::clone(&self.generation), id }
    }

    /// Makes every outstanding ticket stale without starting a new one.
    pub fn cancel(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

/// Shows each frame, then waits its delay. Stops as soon as `ticket` goes stale.
pub async fn play<S, F, E>(frames: &[AnimationFrame], ticket: &PlaybackTicket, sleep: S, mut emit: E) -> PlaybackOutcome
where
    S: Fn(u32) -> F,
    F: Future<Output = ()>,
    E: FnMut(&AnimationFrame),
{
    for (shown, frame) in frames.iter().enumerate() {
        if !ticket.is_current() {
            tracing::debug!(shown, total = frames.len(), "playback cancelled");
            return PlaybackOutcome::Cancelled { shown };
        }
        emit(frame);
        if frame.delay_ms > 0 {
            sleep(frame.delay_ms).await;
        }
    }
    PlaybackOutcome::Completed
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::ready;

    fn frames(n: usize) -> Vec<AnimationFrame> {
        (0..n).map(|i| AnimationFrame::output(&format!("frame {i}"), 10)).collect()
    }

    #[test]
    fn plays_every_frame_in_order() {
        let playback = Playback::new();
        let ticket = playback.begin();
        let mut seen = Vec::new();
        let outcome = block_on(play(&frames(3), &ticket, |_| ready(()), |f| seen.push(f.text.clone())));
        assert_eq!(outcome, PlaybackOutcome::Completed);
        assert_eq!(seen, ["frame 0", "frame 1", "frame 2"]);
    }

    #[test]
    fn newer_playback_cancels_older_one() {
        let playback = Playback::new();
        let old = playback.begin();
        let mut seen = 0;
        let outcome = block_on(play(
            &frames(5),
            &old,
            |_| ready(()),
            |_| {
                seen += 1;
                if seen == 2 {
                    // a new command starts its own animation mid-way
                    playback.begin();
                }
            },
        ));
        assert_eq!(outcome, PlaybackOutcome::Cancelled { shown: 2 });
        assert!(!old.is_current());
    }

    #[test]
    fn delays_are_requested_per_frame() {
        let playback = Playback::new();
        let ticket = playback.begin();
        let delays = std::cell::RefCell::new(Vec::new());
        let list = vec![AnimationFrame::system("a", 400), AnimationFrame::blank(0), AnimationFrame::output("b", 100)];
        block_on(play(
            &list,
            &ticket,
            |ms| {
                delays.borrow_mut().push(ms);
                ready(())
            },
            |_| {},
        ));
        assert_eq!(delays.into_inner(), vec![400, 100]);
    }

    #[test]
    fn cancel_without_replacement() {
        let playback = Playback::new();
        let ticket = playback.begin();
        playback.cancel();
        let outcome = block_on(play(&frames(2), &ticket, |_| ready(()), |_| {}));
        assert_eq!(outcome, PlaybackOutcome::Cancelled { shown: 0 });
    }
}
