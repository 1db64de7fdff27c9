use foundation::camera::CameraPose;
use foundation::ease::{ease_out_cubic, lerp};
use foundation::time::Time;
use runtime::ticker::TickScheduler;

/// Flight time from one pose to the next, milliseconds.
pub const ANIMATION_DURATION_MS: f64 = 1500.0;

#[derive(Debug, Copy, Clone, PartialEq)]
struct Animation {
    start: CameraPose,
    target: CameraPose,
    started_at: Time,
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum AnimatorState {
    Idle,
    Animating(Animation),
}

/// Time-driven interpolation of the live camera pose.
///
/// Cooperative and single-threaded: the animator never blocks and never owns
/// a clock. It advances only when the host's render loop delivers a tick, and
/// each advance either requests the next tick or terminates.
///
/// Retargeting while in flight cancels the running animation and starts the
/// new one from the current interpolated pose, so rapid filter changes never
/// snap the camera back to an old starting point.
#[derive(Debug)]
pub struct CameraAnimator {
    pose: CameraPose,
    state: AnimatorState,
}

impl CameraAnimator {
    pub fn new(initial: CameraPose) -> Self {
        Self {
            pose: initial,
            state: AnimatorState::Idle,
        }
    }

    /// The pose the render surface should draw right now.
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, AnimatorState::Animating(_))
    }

    /// Begin animating toward `target` from the current pose.
    ///
    /// Any in-flight animation is cancelled first, including its pending
    /// tick; no completion is observed for it.
    pub fn animate_to(
        &mut self,
        target: CameraPose,
        now: Time,
        scheduler: &mut impl TickScheduler,
    ) {
        scheduler.cancel_tick();
        self.state = AnimatorState::Animating(Animation {
            start: self.pose,
            target,
            started_at: now,
        });
        scheduler.request_tick();
    }

    /// Advance to `now`. A tick after completion (or while idle) changes
    /// nothing and schedules nothing.
    pub fn tick(&mut self, now: Time, scheduler: &mut impl TickScheduler) -> CameraPose {
        let AnimatorState::Animating(anim) = self.state else {
            return self.pose;
        };

        let progress = (now.since(anim.started_at) / ANIMATION_DURATION_MS).min(1.0);
        let eased = ease_out_cubic(progress);
        self.pose = CameraPose {
            longitude: lerp(anim.start.longitude, anim.target.longitude, eased),
            latitude: lerp(anim.start.latitude, anim.target.latitude, eased),
            zoom: lerp(anim.start.zoom, anim.target.zoom, eased),
            pitch: anim.target.pitch,
            bearing: anim.target.bearing,
        };

        if progress >= 1.0 {
            self.pose = anim.target;
            self.state = AnimatorState::Idle;
        } else {
            scheduler.request_tick();
        }
        self.pose
    }

    /// Stop immediately, releasing the pending tick. The pose stays wherever
    /// the animation last left it.
    pub fn cancel(&mut self, scheduler: &mut impl TickScheduler) {
        self.state = AnimatorState::Idle;
        scheduler.cancel_tick();
    }
}
