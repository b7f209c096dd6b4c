//! Cancellable camera tween sampled once per frame.
//!
//! A [`TweenEngine`] holds at most one live [`TweenJob`]. Starting a new job
//! supersedes the old one: the old job's completion value is dropped
//! unreturned and it never touches the camera again. Each job carries a
//! caller-chosen completion value `C` that is handed back exactly once,
//! from the tick that lands on the end pose.

use std::time::Duration;

use web_time::Instant;

use crate::camera::{CameraPose, CameraRig};
use crate::util::easing::EasingFunction;

/// Generation number of a tween job. Strictly increasing per engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobId(u64);

/// One in-flight interpolation between two camera poses.
#[derive(Debug)]
pub struct TweenJob<C> {
    id: JobId,
    from: CameraPose,
    to: CameraPose,
    started_at: Instant,
    duration: Duration,
    easing: EasingFunction,
    completion: C,
    /// Highest fraction sampled so far. Later samples never go below it.
    last_fraction: f32,
}

impl<C> TweenJob<C> {
    /// Generation of this job.
    #[must_use]
    pub fn id(&self) -> JobId {
        self.id
    }

    /// Start pose.
    #[must_use]
    pub fn from(&self) -> CameraPose {
        self.from
    }

    /// End pose.
    #[must_use]
    pub fn to(&self) -> CameraPose {
        self.to
    }

    /// Completion value handed back when the job lands.
    #[must_use]
    pub fn completion(&self) -> &C {
        &self.completion
    }

    /// Raw linear progress at `now`, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
        }
    }
}

/// Result of [`TweenEngine::begin`].
#[derive(Debug, PartialEq, Eq)]
pub enum TweenStart<C> {
    /// A job is live and will be advanced by [`TweenEngine::tick`].
    Started(JobId),
    /// Zero duration: the end pose was applied immediately. The caller
    /// handles the completion now.
    Finished(C),
}

/// Result of one [`TweenEngine::tick`].
#[derive(Debug, PartialEq)]
pub enum TweenTick<C> {
    /// No job was live.
    Idle,
    /// The rig was unavailable. The job was dropped without completing.
    Cancelled,
    /// The job advanced to this raw fraction and is still running.
    Running(f32),
    /// The job landed on its end pose. Returned once per job.
    Completed(C),
}

/// Owner of the single live camera tween.
#[derive(Debug)]
pub struct TweenEngine<C> {
    job: Option<TweenJob<C>>,
    generation: u64,
}

impl<C> Default for TweenEngine<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> TweenEngine<C> {
    /// Engine with no live job.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            job: None,
            generation: 0,
        }
    }

    /// Start tweening `rig` from `from` to `to`, superseding any live job.
    ///
    /// A zero `duration` jumps straight to `to` and returns
    /// [`TweenStart::Finished`] with `completion`.
    #[allow(clippy::too_many_arguments)]
    pub fn begin<R: CameraRig + ?Sized>(
        &mut self,
        rig: &mut R,
        from: CameraPose,
        to: CameraPose,
        duration: Duration,
        easing: EasingFunction,
        completion: C,
        now: Instant,
    ) -> TweenStart<C> {
        self.generation += 1;
        let id = JobId(self.generation);
        if let Some(old) = self.job.take() {
            log::debug!("tween {:?} superseded by {:?}", old.id, id);
        }

        if duration.is_zero() {
            rig.set_pose(to);
            rig.update();
            return TweenStart::Finished(completion);
        }

        log::trace!("tween {id:?} started: {duration:?} {easing:?}");
        self.job = Some(TweenJob {
            id,
            from,
            to,
            started_at: now,
            duration,
            easing,
            completion,
            last_fraction: 0.0,
        });
        TweenStart::Started(id)
    }

    /// Advance the live job to `now` and write the sampled pose to `rig`.
    ///
    /// With no rig the job is dropped silently: the camera it would drive
    /// no longer exists.
    pub fn tick<R: CameraRig + ?Sized>(
        &mut self,
        rig: Option<&mut R>,
        now: Instant,
    ) -> TweenTick<C> {
        let Some(mut job) = self.job.take() else {
            return TweenTick::Idle;
        };
        let Some(rig) = rig else {
            log::debug!("tween {:?} dropped: camera unavailable", job.id);
            return TweenTick::Cancelled;
        };

        let fraction = job.progress(now).max(job.last_fraction);
        if fraction >= 1.0 {
            rig.set_pose(job.to);
            rig.update();
            log::trace!("tween {:?} completed", job.id);
            return TweenTick::Completed(job.completion);
        }

        let eased = job.easing.evaluate(fraction);
        rig.set_pose(job.from.lerp(&job.to, eased));
        rig.update();
        job.last_fraction = fraction;
        self.job = Some(job);
        TweenTick::Running(fraction)
    }

    /// Drop the live job without completing it.
    pub fn cancel(&mut self) {
        if let Some(job) = self.job.take() {
            log::debug!("tween {:?} cancelled", job.id);
        }
    }

    /// Whether a job is live.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.job.is_some()
    }

    /// The live job, if any.
    #[must_use]
    pub fn current_job(&self) -> Option<&TweenJob<C>> {
        self.job.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::rig::RecordingRig;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn overview() -> CameraPose {
        CameraPose::new(Vec3::new(20.0, 20.0, 20.0), Vec3::ZERO)
    }

    fn close_up() -> CameraPose {
        CameraPose::new(Vec3::new(0.0, 5.0, 10.0), Vec3::new(0.0, 0.5, 0.0))
    }

    fn start(
        engine: &mut TweenEngine<&'static str>,
        rig: &mut RecordingRig,
        now: Instant,
    ) -> TweenStart<&'static str> {
        engine.begin(
            rig,
            overview(),
            close_up(),
            ms(1000),
            EasingFunction::Linear,
            "done",
            now,
        )
    }

    #[test]
    fn halfway_is_componentwise_midpoint() {
        let t0 = Instant::now();
        let mut rig = RecordingRig::new(overview());
        let mut engine = TweenEngine::new();
        assert!(matches!(start(&mut engine, &mut rig, t0), TweenStart::Started(_)));

        assert_eq!(engine.tick(Some(&mut rig), t0 + ms(500)), TweenTick::Running(0.5));
        assert_eq!(rig.pose.position, Vec3::new(10.0, 12.5, 15.0));
        assert_eq!(rig.pose.target, Vec3::new(0.0, 0.25, 0.0));
        assert_eq!(rig.updates, 1);
    }

    #[test]
    fn lands_exactly_and_completes_once() {
        let t0 = Instant::now();
        let mut rig = RecordingRig::new(overview());
        let mut engine = TweenEngine::new();
        let _ = start(&mut engine, &mut rig, t0);

        let _ = engine.tick(Some(&mut rig), t0 + ms(330));
        assert_eq!(engine.tick(Some(&mut rig), t0 + ms(1200)), TweenTick::Completed("done"));
        assert_eq!(rig.pose, close_up());
        assert!(!engine.is_active());

        let writes = rig.writes.len();
        assert_eq!(engine.tick(Some(&mut rig), t0 + ms(1500)), TweenTick::Idle);
        assert_eq!(rig.writes.len(), writes);
    }

    #[test]
    fn superseded_job_never_completes() {
        let t0 = Instant::now();
        let mut rig = RecordingRig::new(overview());
        let mut engine = TweenEngine::new();
        let TweenStart::Started(first) = start(&mut engine, &mut rig, t0) else {
            panic!("expected a live job");
        };
        let _ = engine.tick(Some(&mut rig), t0 + ms(200));

        let TweenStart::Started(second) = engine.begin(
            &mut rig,
            close_up(),
            overview(),
            ms(1000),
            EasingFunction::Linear,
            "back",
            t0 + ms(300),
        ) else {
            panic!("expected a live job");
        };
        assert!(second > first);

        let mut completions = Vec::new();
        for step in 4..=14 {
            if let TweenTick::Completed(c) = engine.tick(Some(&mut rig), t0 + ms(step * 100)) {
                completions.push(c);
            }
        }
        assert_eq!(completions, vec!["back"]);
        assert_eq!(rig.pose, overview());
    }

    #[test]
    fn zero_duration_jumps_immediately() {
        let t0 = Instant::now();
        let mut rig = RecordingRig::new(overview());
        let mut engine = TweenEngine::new();
        let started = engine.begin(
            &mut rig,
            overview(),
            close_up(),
            Duration::ZERO,
            EasingFunction::QuadraticOut,
            7_u8,
            t0,
        );
        assert_eq!(started, TweenStart::Finished(7));
        assert_eq!(rig.pose, close_up());
        assert_eq!(rig.updates, 1);
        assert!(!engine.is_active());
    }

    #[test]
    fn missing_rig_cancels_silently() {
        let t0 = Instant::now();
        let mut rig = RecordingRig::new(overview());
        let mut engine = TweenEngine::new();
        let _ = start(&mut engine, &mut rig, t0);

        assert_eq!(engine.tick::<RecordingRig>(None, t0 + ms(100)), TweenTick::Cancelled);
        assert!(!engine.is_active());
        assert_eq!(engine.tick(Some(&mut rig), t0 + ms(2000)), TweenTick::Idle);
        assert!(rig.writes.is_empty());
    }

    #[test]
    fn fraction_never_moves_backwards() {
        let t0 = Instant::now();
        let mut rig = RecordingRig::new(overview());
        let mut engine = TweenEngine::new();
        let _ = start(&mut engine, &mut rig, t0);

        assert_eq!(engine.tick(Some(&mut rig), t0 + ms(600)), TweenTick::Running(0.6));
        // A stale timestamp from an out-of-order frame.
        assert_eq!(engine.tick(Some(&mut rig), t0 + ms(400)), TweenTick::Running(0.6));
        let y: Vec<f32> = rig.writes.iter().map(|p| p.position.y).collect();
        assert_eq!(y[0], y[1]);
    }

    #[test]
    fn eased_tween_still_lands_on_end_pose() {
        let t0 = Instant::now();
        let mut rig = RecordingRig::new(overview());
        let mut engine = TweenEngine::new();
        let _ = engine.begin(
            &mut rig,
            overview(),
            close_up(),
            ms(2000),
            EasingFunction::QuadraticOut,
            (),
            t0,
        );
        let _ = engine.tick(Some(&mut rig), t0 + ms(1000));
        assert!(rig.pose.position.y < 12.5);
        assert_eq!(engine.tick(Some(&mut rig), t0 + ms(2000)), TweenTick::Completed(()));
        assert_eq!(rig.pose, close_up());
    }
}
