//! Focus state machine: at most one entity is focused at a time.
//!
//! The machine owns the camera tween and sequences the moves between the
//! overview pose and each target's close-up pose. A focused target is
//! *exclusive*: every other entity is hidden and, when the policy asks for
//! it, the target is highlighted. Visibility and highlight are derived from
//! that single exclusive key, never stored per entity.
//!
//! ```text
//! Overview ──focus(A)──▶ [zoom in] ──▶ Focused(A)
//! Focused(A) ──focus(B)──▶ [zoom out] ─(pause)─▶ [zoom in] ──▶ Focused(B)
//! Focused(A) ──reset──▶ [zoom out] ──▶ Overview
//! ```

mod policy;

use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

pub use policy::{FocusPolicy, RestoreTiming};
use rustc_hash::FxHashMap;
use web_time::Instant;

use crate::animation::{TweenEngine, TweenStart, TweenTick};
use crate::camera::{CameraPose, CameraRig};
use crate::error::ViewError;
use crate::util::easing::EasingFunction;

/// Observable state of a [`FocusMachine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusState<K> {
    /// Nothing focused, every entity visible.
    Overview,
    /// Exactly one entity focused.
    Focused(K),
    /// A zoom or pause is in flight.
    Transitioning,
}

/// What a focus request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition<K> {
    /// A new move was planned, superseding any move in flight.
    Started,
    /// The move completed within the request, as with zero durations.
    Settled(FocusState<K>),
    /// The request matched the current or pending target.
    Unchanged,
    /// No camera was available. Nothing changed.
    RigUnavailable,
}

/// Completion value attached to each tween the machine starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step<K> {
    /// Reached the overview; continue to `next` if set.
    ZoomedOut { next: Option<K> },
    /// Reached the close-up of this target.
    Arrived(K),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase<K> {
    Idle,
    ZoomOut { next: Option<K> },
    Pause { since: Instant, next: K },
    ZoomIn { target: K },
}

/// Tracks the focused entity and drives the camera between poses.
#[derive(Debug)]
pub struct FocusMachine<K> {
    overview: CameraPose,
    policy: FocusPolicy,
    targets: FxHashMap<K, CameraPose>,
    /// Registration order, used for cycling.
    order: Vec<K>,
    focused: Option<K>,
    exclusive: Option<K>,
    phase: Phase<K>,
    tween: TweenEngine<Step<K>>,
}

impl<K: Copy + Eq + Hash + Debug> FocusMachine<K> {
    /// Machine at the overview with no targets.
    #[must_use]
    pub fn new(overview: CameraPose, policy: FocusPolicy) -> Self {
        Self {
            overview,
            policy,
            targets: FxHashMap::default(),
            order: Vec::new(),
            focused: None,
            exclusive: None,
            phase: Phase::Idle,
            tween: TweenEngine::new(),
        }
    }

    /// Builder form of [`add_target`](Self::add_target).
    #[must_use]
    pub fn with_target(mut self, key: K, pose: CameraPose) -> Self {
        self.add_target(key, pose);
        self
    }

    /// Register `key` as focusable with close-up `pose`. Re-registering a
    /// key replaces its pose.
    pub fn add_target(&mut self, key: K, pose: CameraPose) {
        if self.targets.insert(key, pose).is_none() {
            self.order.push(key);
        }
    }

    /// Whether `key` is a registered target.
    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        self.targets.contains_key(&key)
    }

    /// Overview pose.
    #[must_use]
    pub fn overview(&self) -> CameraPose {
        self.overview
    }

    /// Transition policy.
    #[must_use]
    pub fn policy(&self) -> &FocusPolicy {
        &self.policy
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> FocusState<K> {
        if self.phase != Phase::Idle {
            return FocusState::Transitioning;
        }
        self.focused
            .map_or(FocusState::Overview, FocusState::Focused)
    }

    /// Entity shown exclusively, if any.
    #[must_use]
    pub fn exclusive(&self) -> Option<K> {
        self.exclusive
    }

    /// Target the machine is heading for or resting at. `None` means the
    /// overview.
    #[must_use]
    pub fn destination(&self) -> Option<K> {
        match self.phase {
            Phase::Idle => self.focused,
            Phase::ZoomOut { next } => next,
            Phase::Pause { next, .. } => Some(next),
            Phase::ZoomIn { target } => Some(target),
        }
    }

    /// Whether `key` is currently drawn.
    #[must_use]
    pub fn is_visible(&self, key: K) -> bool {
        self.exclusive.is_none_or(|e| e == key)
    }

    /// Whether `key` is currently drawn in the highlight color.
    #[must_use]
    pub fn is_highlighted(&self, key: K) -> bool {
        self.policy.highlight && self.exclusive == Some(key)
    }

    /// Whether a zoom or pause is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Focus `key`, superseding any move in flight.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::UnknownTarget`] if `key` was never registered.
    /// State is left untouched in that case.
    pub fn focus<R: CameraRig + ?Sized>(
        &mut self,
        key: K,
        rig: Option<&mut R>,
        now: Instant,
    ) -> Result<Transition<K>, ViewError> {
        if !self.contains(key) {
            return Err(ViewError::UnknownTarget(format!("{key:?}")));
        }
        let Some(rig) = rig else {
            log::debug!("focus {key:?} ignored: camera unavailable");
            return Ok(Transition::RigUnavailable);
        };
        if self.destination() == Some(key) {
            return Ok(Transition::Unchanged);
        }

        let leaving = self.exclusive.is_some_and(|e| e != key);
        let zoom_out_first = self.policy.always_zoom_out
            || (self.policy.two_phase_switch && leaving);
        log::debug!(
            "focus {:?} -> {key:?} (zoom out first: {zoom_out_first})",
            self.destination()
        );

        self.focused = None;
        let settled = if zoom_out_first {
            let (duration, easing) =
                (self.policy.focus_duration, self.policy.focus_easing);
            self.begin_zoom_out(rig, Some(key), duration, easing, now)
        } else {
            if leaving && self.policy.restore == RestoreTiming::OnDeparture {
                self.exclusive = None;
            }
            self.begin_zoom_in(rig, key, now)
        };
        Ok(settled.map_or(Transition::Started, Transition::Settled))
    }

    /// Return to the overview, releasing any focus.
    pub fn reset<R: CameraRig + ?Sized>(
        &mut self,
        rig: Option<&mut R>,
        now: Instant,
    ) -> Transition<K> {
        let Some(rig) = rig else {
            log::debug!("reset ignored: camera unavailable");
            return Transition::RigUnavailable;
        };
        log::debug!("reset from {:?}", self.destination());
        self.focused = None;
        let (duration, easing) =
            (self.policy.reset_duration, self.policy.reset_easing);
        self.begin_zoom_out(rig, None, duration, easing, now)
            .map_or(Transition::Started, Transition::Settled)
    }

    /// Focus the target after the current one in registration order. After
    /// the last target this returns to the overview.
    pub fn cycle<R: CameraRig + ?Sized>(
        &mut self,
        rig: Option<&mut R>,
        now: Instant,
    ) -> Transition<K> {
        if self.order.is_empty() {
            return Transition::Unchanged;
        }
        let next = match self.destination() {
            None => self.order.first().copied(),
            Some(current) => {
                let idx = self.order.iter().position(|&k| k == current);
                idx.and_then(|i| self.order.get(i + 1)).copied()
            }
        };
        match next {
            Some(key) => self.focus(key, rig, now).unwrap_or(Transition::Unchanged),
            None => self.reset(rig, now),
        }
    }

    /// Advance the move in flight. Returns the state reached when a move
    /// settles on this tick.
    ///
    /// With no rig, any move in flight is abandoned.
    pub fn tick<R: CameraRig + ?Sized>(
        &mut self,
        rig: Option<&mut R>,
        now: Instant,
    ) -> Option<FocusState<K>> {
        let mut rig = rig;

        if let Phase::Pause { since, next } = self.phase {
            let Some(rig) = rig else {
                self.abandon();
                return None;
            };
            if now.saturating_duration_since(since) < self.policy.pause {
                return None;
            }
            return self.begin_zoom_in(rig, next, now);
        }

        match self.tween.tick(rig.as_deref_mut(), now) {
            TweenTick::Idle | TweenTick::Running(_) => None,
            TweenTick::Cancelled => {
                self.abandon();
                None
            }
            TweenTick::Completed(step) => {
                rig.and_then(|rig| self.complete(step, rig, now))
            }
        }
    }

    /// Abandon any move in flight. The exclusive entity, if any, stays as
    /// it is.
    pub fn cancel(&mut self) {
        self.tween.cancel();
        self.abandon();
    }

    fn abandon(&mut self) {
        if self.phase != Phase::Idle {
            log::debug!("focus move toward {:?} abandoned", self.destination());
        }
        self.phase = Phase::Idle;
    }

    fn begin_zoom_out<R: CameraRig + ?Sized>(
        &mut self,
        rig: &mut R,
        next: Option<K>,
        duration: Duration,
        easing: EasingFunction,
        now: Instant,
    ) -> Option<FocusState<K>> {
        if self.policy.restore == RestoreTiming::OnDeparture {
            self.exclusive = None;
        }
        self.phase = Phase::ZoomOut { next };
        let from = rig.pose();
        match self.tween.begin(
            rig,
            from,
            self.overview,
            duration,
            easing,
            Step::ZoomedOut { next },
            now,
        ) {
            TweenStart::Started(_) => None,
            TweenStart::Finished(step) => self.complete(step, rig, now),
        }
    }

    fn begin_zoom_in<R: CameraRig + ?Sized>(
        &mut self,
        rig: &mut R,
        target: K,
        now: Instant,
    ) -> Option<FocusState<K>> {
        let Some(&to) = self.targets.get(&target) else {
            self.abandon();
            return None;
        };
        self.phase = Phase::ZoomIn { target };
        let from = rig.pose();
        match self.tween.begin(
            rig,
            from,
            to,
            self.policy.focus_duration,
            self.policy.focus_easing,
            Step::Arrived(target),
            now,
        ) {
            TweenStart::Started(_) => None,
            TweenStart::Finished(step) => self.complete(step, rig, now),
        }
    }

    fn complete<R: CameraRig + ?Sized>(
        &mut self,
        step: Step<K>,
        rig: &mut R,
        now: Instant,
    ) -> Option<FocusState<K>> {
        match step {
            Step::ZoomedOut { next } => {
                self.exclusive = None;
                match next {
                    None => {
                        self.phase = Phase::Idle;
                        self.focused = None;
                        log::debug!("focus settled at overview");
                        Some(FocusState::Overview)
                    }
                    Some(next) if !self.policy.pause.is_zero() => {
                        self.phase = Phase::Pause { since: now, next };
                        None
                    }
                    Some(next) => self.begin_zoom_in(rig, next, now),
                }
            }
            Step::Arrived(target) => {
                self.phase = Phase::Idle;
                self.focused = Some(target);
                self.exclusive = Some(target);
                log::debug!("focus settled on {target:?}");
                Some(FocusState::Focused(target))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::rig::RecordingRig;
    use crate::options::AnimationOptions;

    const ALL: [&str; 2] = ["box-1", "box-2"];

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn overview() -> CameraPose {
        CameraPose::new(Vec3::new(20.0, 20.0, 20.0), Vec3::ZERO)
    }

    fn pose_of(x: f32) -> CameraPose {
        CameraPose::new(Vec3::new(x, 5.0, 10.0), Vec3::new(x, 0.5, 0.0))
    }

    fn boxes() -> FocusMachine<&'static str> {
        FocusMachine::new(overview(), FocusPolicy::boxes(&AnimationOptions::default()))
            .with_target("box-1", pose_of(-3.0))
            .with_target("box-2", pose_of(3.0))
    }

    fn floors() -> FocusMachine<usize> {
        let overview = CameraPose::new(Vec3::splat(5.0), Vec3::ZERO);
        let mut machine =
            FocusMachine::new(overview, FocusPolicy::floors(&AnimationOptions::default()));
        for i in 0..5 {
            let y = i as f32 - 1.5;
            machine.add_target(
                i,
                CameraPose::new(Vec3::new(3.0, y, 3.0), Vec3::new(0.0, y, 0.0)),
            );
        }
        machine
    }

    fn highlighted(m: &FocusMachine<&'static str>) -> usize {
        ALL.iter().filter(|&&k| m.is_highlighted(k)).count()
    }

    fn visible(m: &FocusMachine<&'static str>) -> usize {
        ALL.iter().filter(|&&k| m.is_visible(k)).count()
    }

    #[test]
    fn focus_from_overview_is_single_tween() {
        let t0 = Instant::now();
        let mut rig = RecordingRig::new(overview());
        let mut m = boxes();

        assert_eq!(m.focus("box-1", Some(&mut rig), t0).ok(), Some(Transition::Started));
        assert_eq!(m.state(), FocusState::Transitioning);
        assert_eq!(visible(&m), 2);

        assert_eq!(m.tick(Some(&mut rig), t0 + ms(500)), None);
        assert_eq!(
            m.tick(Some(&mut rig), t0 + ms(1000)),
            Some(FocusState::Focused("box-1"))
        );
        assert_eq!(rig.pose, pose_of(-3.0));
        assert!(m.is_visible("box-1"));
        assert!(!m.is_visible("box-2"));
        assert!(m.is_highlighted("box-1"));
        assert_eq!(highlighted(&m), 1);
    }

    #[test]
    fn refocusing_same_target_is_noop() {
        let t0 = Instant::now();
        let mut rig = RecordingRig::new(overview());
        let mut m = boxes();
        let _ = m.focus("box-1", Some(&mut rig), t0);
        let _ = m.tick(Some(&mut rig), t0 + ms(1000));

        let writes = rig.writes.len();
        assert_eq!(
            m.focus("box-1", Some(&mut rig), t0 + ms(1100)).ok(),
            Some(Transition::Unchanged)
        );
        assert_eq!(m.tick(Some(&mut rig), t0 + ms(1200)), None);
        assert_eq!(rig.writes.len(), writes);
        assert_eq!(m.state(), FocusState::Focused("box-1"));
        assert_eq!(m.exclusive(), Some("box-1"));
    }

    #[test]
    fn refocusing_pending_target_keeps_the_move() {
        let t0 = Instant::now();
        let mut rig = RecordingRig::new(overview());
        let mut m = boxes();
        let _ = m.focus("box-2", Some(&mut rig), t0);
        let _ = m.tick(Some(&mut rig), t0 + ms(400));
        assert_eq!(
            m.focus("box-2", Some(&mut rig), t0 + ms(450)).ok(),
            Some(Transition::Unchanged)
        );
        assert_eq!(
            m.tick(Some(&mut rig), t0 + ms(1000)),
            Some(FocusState::Focused("box-2"))
        );
    }

    #[test]
    fn switching_passes_through_all_visible_overview() {
        let t0 = Instant::now();
        let mut rig = RecordingRig::new(overview());
        let mut m = boxes();
        let _ = m.focus("box-1", Some(&mut rig), t0);
        let _ = m.tick(Some(&mut rig), t0 + ms(1000));

        let _ = m.focus("box-2", Some(&mut rig), t0 + ms(1000));
        assert_eq!(visible(&m), 2);
        assert_eq!(highlighted(&m), 0);

        let mut saw_overview_pose = false;
        for step in 11..=30 {
            let _ = m.tick(Some(&mut rig), t0 + ms(step * 100));
            assert!(highlighted(&m) <= 1);
            saw_overview_pose |= rig.pose == overview();
            if !saw_overview_pose {
                assert_eq!(visible(&m), 2);
            }
        }
        assert!(saw_overview_pose);
        assert_eq!(m.state(), FocusState::Focused("box-2"));
        assert_eq!(rig.pose, pose_of(3.0));
        assert!(!m.is_visible("box-1"));
        assert!(m.is_highlighted("box-2"));
    }

    #[test]
    fn focus_then_switch_then_reset_ends_in_overview() {
        let t0 = Instant::now();
        let mut rig = RecordingRig::new(overview());
        let mut m = boxes();

        let _ = m.focus("box-1", Some(&mut rig), t0);
        let _ = m.tick(Some(&mut rig), t0 + ms(1000));
        let _ = m.focus("box-2", Some(&mut rig), t0 + ms(1000));
        let _ = m.tick(Some(&mut rig), t0 + ms(2000));
        let _ = m.tick(Some(&mut rig), t0 + ms(3000));
        assert_eq!(m.state(), FocusState::Focused("box-2"));

        assert_eq!(m.reset(Some(&mut rig), t0 + ms(3000)), Transition::Started);
        assert_eq!(
            m.tick(Some(&mut rig), t0 + ms(4000)),
            Some(FocusState::Overview)
        );
        assert_eq!(m.state(), FocusState::Overview);
        assert_eq!(visible(&m), 2);
        assert_eq!(highlighted(&m), 0);
        assert_eq!(rig.pose, overview());
    }

    #[test]
    fn unknown_target_changes_nothing() {
        let t0 = Instant::now();
        let mut rig = RecordingRig::new(overview());
        let mut m = boxes();
        let _ = m.focus("box-1", Some(&mut rig), t0);
        let _ = m.tick(Some(&mut rig), t0 + ms(1000));
        let pose = rig.pose;

        let result = m.focus("box-3", Some(&mut rig), t0 + ms(1100));
        assert!(matches!(result, Err(ViewError::UnknownTarget(_))));
        assert_eq!(m.state(), FocusState::Focused("box-1"));
        assert_eq!(m.exclusive(), Some("box-1"));
        assert_eq!(rig.pose, pose);
    }

    #[test]
    fn missing_rig_is_ignored() {
        let t0 = Instant::now();
        let mut m = boxes();
        assert_eq!(
            m.focus::<RecordingRig>("box-1", None, t0).ok(),
            Some(Transition::RigUnavailable)
        );
        assert_eq!(m.reset::<RecordingRig>(None, t0), Transition::RigUnavailable);
        assert_eq!(m.state(), FocusState::Overview);
    }

    #[test]
    fn teardown_mid_flight_stops_mutation() {
        let t0 = Instant::now();
        let mut rig = RecordingRig::new(overview());
        let mut m = boxes();
        let _ = m.focus("box-1", Some(&mut rig), t0);
        let _ = m.tick(Some(&mut rig), t0 + ms(300));
        let writes = rig.writes.len();

        assert_eq!(m.tick::<RecordingRig>(None, t0 + ms(400)), None);
        assert!(!m.is_animating());
        assert_eq!(m.tick(Some(&mut rig), t0 + ms(2000)), None);
        assert_eq!(rig.writes.len(), writes);
        assert_eq!(m.state(), FocusState::Overview);
    }

    #[test]
    fn retarget_mid_flight_supersedes() {
        let t0 = Instant::now();
        let mut rig = RecordingRig::new(overview());
        let mut m = boxes();
        let _ = m.focus("box-1", Some(&mut rig), t0);
        let _ = m.tick(Some(&mut rig), t0 + ms(500));

        // Nothing is exclusive yet, so this is a direct move.
        let _ = m.focus("box-2", Some(&mut rig), t0 + ms(500));
        assert_eq!(m.tick(Some(&mut rig), t0 + ms(1000)), None);
        assert_eq!(
            m.tick(Some(&mut rig), t0 + ms(1500)),
            Some(FocusState::Focused("box-2"))
        );
        assert!(!m.is_visible("box-1"));
    }

    #[test]
    fn direct_switch_when_two_phase_disabled() {
        let t0 = Instant::now();
        let mut rig = RecordingRig::new(overview());
        let mut policy = FocusPolicy::boxes(&AnimationOptions::default());
        policy.two_phase_switch = false;
        let mut m = FocusMachine::new(overview(), policy)
            .with_target("box-1", pose_of(-3.0))
            .with_target("box-2", pose_of(3.0));
        let _ = m.focus("box-1", Some(&mut rig), t0);
        let _ = m.tick(Some(&mut rig), t0 + ms(1000));

        let _ = m.focus("box-2", Some(&mut rig), t0 + ms(1000));
        assert_eq!(
            m.tick(Some(&mut rig), t0 + ms(2000)),
            Some(FocusState::Focused("box-2"))
        );
        assert!(rig.writes.iter().all(|&p| p != overview()));
    }

    #[test]
    fn floors_zoom_out_pause_then_zoom_in() {
        let t0 = Instant::now();
        let start = CameraPose::new(Vec3::splat(5.0), Vec3::ZERO);
        let mut rig = RecordingRig::new(start);
        let mut m = floors();

        let _ = m.focus(2, Some(&mut rig), t0);
        assert_eq!(m.tick(Some(&mut rig), t0 + ms(1000)), None);
        assert_eq!(m.exclusive(), None);
        assert_eq!(rig.pose, start);

        // Paused at the overview.
        let writes = rig.writes.len();
        assert_eq!(m.tick(Some(&mut rig), t0 + ms(1400)), None);
        assert_eq!(rig.writes.len(), writes);
        assert_eq!(m.state(), FocusState::Transitioning);

        assert_eq!(m.tick(Some(&mut rig), t0 + ms(1500)), None);
        assert_eq!(
            m.tick(Some(&mut rig), t0 + ms(2500)),
            Some(FocusState::Focused(2))
        );
        assert_eq!(rig.pose.position, Vec3::new(3.0, 0.5, 3.0));
        assert!(m.is_visible(2));
        assert!(!m.is_visible(0));
        assert!(!m.is_highlighted(2));
    }

    #[test]
    fn floors_stay_exclusive_until_overview_reached() {
        let t0 = Instant::now();
        let mut rig = RecordingRig::new(CameraPose::new(Vec3::splat(5.0), Vec3::ZERO));
        let mut m = floors();
        let _ = m.focus(1, Some(&mut rig), t0);
        let _ = m.tick(Some(&mut rig), t0 + ms(1000));
        let _ = m.tick(Some(&mut rig), t0 + ms(1500));
        let _ = m.tick(Some(&mut rig), t0 + ms(2500));
        assert_eq!(m.exclusive(), Some(1));

        let _ = m.focus(3, Some(&mut rig), t0 + ms(3000));
        let _ = m.tick(Some(&mut rig), t0 + ms(3500));
        assert_eq!(m.exclusive(), Some(1));
        let _ = m.tick(Some(&mut rig), t0 + ms(4000));
        assert_eq!(m.exclusive(), None);
    }

    #[test]
    fn zero_durations_settle_immediately() {
        let t0 = Instant::now();
        let mut rig = RecordingRig::new(overview());
        let options = AnimationOptions {
            focus_duration_ms: 0,
            ..AnimationOptions::default()
        };
        let mut m = FocusMachine::new(overview(), FocusPolicy::boxes(&options))
            .with_target("box-1", pose_of(-3.0))
            .with_target("box-2", pose_of(3.0));
        assert_eq!(
            m.focus("box-1", Some(&mut rig), t0).ok(),
            Some(Transition::Settled(FocusState::Focused("box-1")))
        );
        assert_eq!(m.state(), FocusState::Focused("box-1"));
        assert_eq!(
            m.focus("box-2", Some(&mut rig), t0).ok(),
            Some(Transition::Settled(FocusState::Focused("box-2")))
        );
        assert_eq!(m.state(), FocusState::Focused("box-2"));
        assert_eq!(rig.pose, pose_of(3.0));
        assert_eq!(
            m.reset(Some(&mut rig), t0),
            Transition::Settled(FocusState::Overview)
        );
        assert_eq!(rig.pose, overview());
    }

    #[test]
    fn huge_pause_holds_at_overview() {
        let t0 = Instant::now();
        let start = CameraPose::new(Vec3::splat(5.0), Vec3::ZERO);
        let mut rig = RecordingRig::new(start);
        let mut m = floors();
        m.policy.pause = Duration::MAX;

        let _ = m.focus(2, Some(&mut rig), t0);
        assert_eq!(m.tick(Some(&mut rig), t0 + ms(1000)), None);
        assert_eq!(m.tick(Some(&mut rig), t0 + ms(60_000)), None);
        assert_eq!(m.state(), FocusState::Transitioning);
        assert_eq!(rig.pose, start);

        assert_eq!(m.reset(Some(&mut rig), t0 + ms(60_000)), Transition::Started);
        assert_eq!(
            m.tick(Some(&mut rig), t0 + ms(61_000)),
            Some(FocusState::Overview)
        );
    }

    #[test]
    fn cycle_walks_targets_then_returns_to_overview() {
        let t0 = Instant::now();
        let mut rig = RecordingRig::new(overview());
        let mut m = boxes();

        let _ = m.cycle(Some(&mut rig), t0);
        assert_eq!(m.destination(), Some("box-1"));
        let _ = m.cycle(Some(&mut rig), t0);
        assert_eq!(m.destination(), Some("box-2"));
        let _ = m.cycle(Some(&mut rig), t0);
        assert_eq!(m.destination(), None);
    }
}
