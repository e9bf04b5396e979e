//! Field tweens driven by an external frame tick.
//!
//! A [`TweenScheduler`] animates `Vec3` fields of some subject, addressed by
//! a channel key `K`. Starting a tween on a channel that is already
//! animating replaces the old tween; the new one starts from whatever value
//! the field holds at that moment, so restarts never snap back.

use std::fmt;
use std::time::Duration;

use glam::Vec3;

use crate::util::easing::EasingFunction;

/// Something whose `Vec3` fields can be animated.
pub trait Animatable<K> {
    /// Current value of the field behind `key`.
    fn get(&self, key: K) -> Vec3;

    /// Overwrite the field behind `key`.
    fn set(&mut self, key: K, value: Vec3);

    /// Called after each write by a tween that was started with
    /// `notify = true`.
    fn on_update(&mut self, _key: K) {}
}

/// Duration and easing of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    /// Total tween length.
    pub duration: Duration,
    /// Progress curve.
    pub easing: EasingFunction,
}

impl TweenSpec {
    /// Spec with the given length and easing.
    #[must_use]
    pub fn new(duration: Duration, easing: EasingFunction) -> Self {
        Self { duration, easing }
    }

    /// Spec from a length in seconds. Negative or non-finite lengths
    /// collapse to zero (the tween completes on the next tick).
    #[must_use]
    pub fn from_secs(secs: f32, easing: EasingFunction) -> Self {
        let duration = if secs.is_finite() && secs > 0.0 {
            Duration::from_secs_f32(secs)
        } else {
            Duration::ZERO
        };
        Self { duration, easing }
    }
}

/// Handle returned when a tween starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(u64);

struct Tween<K> {
    id: TweenId,
    key: K,
    from: Vec3,
    to: Vec3,
    spec: TweenSpec,
    elapsed: f32,
    notify: bool,
}

impl<K> Tween<K> {
    fn progress(&self) -> f32 {
        if self.spec.duration.is_zero() {
            1.0
        } else {
            (self.elapsed / self.spec.duration.as_secs_f32()).min(1.0)
        }
    }

    fn sample(&self) -> Vec3 {
        let t = self.progress();
        if t >= 1.0 {
            self.to
        } else {
            self.from.lerp(self.to, self.spec.easing.evaluate(t))
        }
    }
}

/// Owns in-flight tweens and advances them on [`tick`](Self::tick).
pub struct TweenScheduler<K> {
    tweens: Vec<Tween<K>>,
    next_id: u64,
}

impl<K: Copy + Eq + fmt::Debug> TweenScheduler<K> {
    /// Empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tweens: Vec::new(),
            next_id: 0,
        }
    }

    /// Start animating `key` on `subject` toward `destination`.
    ///
    /// The start value is read from `subject` now. Any tween already
    /// running on `key` is dropped. Returns immediately; values change only
    /// on subsequent ticks.
    pub fn to<S: Animatable<K>>(
        &mut self,
        subject: &S,
        key: K,
        destination: Vec3,
        spec: TweenSpec,
        notify: bool,
    ) -> TweenId {
        if self.cancel(key) {
            log::debug!("tween on {key:?} superseded");
        }

        let id = TweenId(self.next_id);
        self.next_id += 1;
        let from = subject.get(key);
        log::debug!(
            "tween {id:?} on {key:?}: {from} -> {destination} over {:.2}s",
            spec.duration.as_secs_f32()
        );
        self.tweens.push(Tween {
            id,
            key,
            from,
            to: destination,
            spec,
            elapsed: 0.0,
            notify,
        });
        id
    }

    /// Advance every tween by `dt` seconds and write the new values into
    /// `subject`. Finished tweens write their exact destination and are
    /// removed. Returns `true` while anything is still animating.
    pub fn tick<S: Animatable<K>>(&mut self, dt: f32, subject: &mut S) -> bool {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        for tween in &mut self.tweens {
            tween.elapsed += dt;
            subject.set(tween.key, tween.sample());
            if tween.notify {
                subject.on_update(tween.key);
            }
        }

        self.tweens.retain(|tween| {
            let done = tween.progress() >= 1.0;
            if done {
                log::debug!("tween {:?} on {:?} complete", tween.id, tween.key);
            }
            !done
        });
        !self.tweens.is_empty()
    }

    /// Drop the tween on `key`, leaving the field at its current value.
    /// Returns whether one was running.
    pub fn cancel(&mut self, key: K) -> bool {
        let before = self.tweens.len();
        self.tweens.retain(|tween| tween.key != key);
        self.tweens.len() != before
    }

    /// Drop every tween.
    pub fn clear(&mut self) {
        self.tweens.clear();
    }

    /// Whether `key` has a tween in flight.
    #[must_use]
    pub fn is_active(&self, key: K) -> bool {
        self.tweens.iter().any(|tween| tween.key == key)
    }

    /// Whether any tween is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.tweens.is_empty()
    }

    /// Destination of the tween on `key`, if one is running.
    #[must_use]
    pub fn destination(&self, key: K) -> Option<Vec3> {
        self.tweens
            .iter()
            .find(|tween| tween.key == key)
            .map(|tween| tween.to)
    }
}

impl<K: Copy + Eq + fmt::Debug> Default for TweenScheduler<K> {
    fn default() -> Self {
        Self::new()
    }
}
