//! Pointer picking: ray casting against model bounds and click dispatch.
//!
//! Hits are ordered nearest first. Dispatch walks them in that order and
//! lets each clickable node respond; a node whose behavior stops
//! propagation ends the walk, so objects hidden behind it never see the
//! click.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::focus::FocusTarget;
use crate::scene::NodeId;

/// A half-line in world space. `direction` is unit length (or zero for a
/// degenerate ray, which hits nothing).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Ray from `origin` along `direction` (normalized here).
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at parameter `t`.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to the first intersection with a sphere, or
    /// `None` if it misses. A ray starting inside the sphere reports the
    /// exit point.
    #[must_use]
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        if self.direction == Vec3::ZERO || radius <= 0.0 {
            return None;
        }
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();
        let near = -b - sqrt_d;
        let far = -b + sqrt_d;
        if near >= 0.0 {
            Some(near)
        } else if far >= 0.0 {
            Some(far)
        } else {
            None
        }
    }
}

/// A node intersected by a pick ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// The node that was hit.
    pub node: NodeId,
    /// Distance from the ray origin.
    pub distance: f32,
    /// World-space intersection point.
    pub point: Vec3,
}

/// What a node does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClickBehavior {
    /// Focus target published on click, if any.
    pub focus: Option<FocusTarget>,
    /// Whether nodes behind this one are shielded from the click.
    pub stop_propagation: bool,
}

impl ClickBehavior {
    /// Publish `target` and stop the click here.
    #[must_use]
    pub fn focus_on(target: FocusTarget) -> Self {
        Self {
            focus: Some(target),
            stop_propagation: true,
        }
    }

    /// Respond to `event`: stop propagation first (if configured), then
    /// hand back the focus target to publish.
    pub fn handle(&self, event: &mut ClickEvent) -> Option<FocusTarget> {
        if self.stop_propagation {
            event.stop_propagation();
        }
        self.focus
    }
}

/// Per-click state passed to each responding node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent {
    /// The hit currently being delivered.
    pub hit: Hit,
    propagation_stopped: bool,
}

impl ClickEvent {
    /// Prevent delivery to any farther node.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Whether delivery has been stopped.
    #[must_use]
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Result of delivering one click.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClickOutcome {
    /// Nodes whose behavior ran, nearest first.
    pub handled_by: Vec<NodeId>,
    /// Last focus target published during the walk.
    pub focus: Option<FocusTarget>,
}

/// Deliver a click to `hits` (nearest first). `behavior_of` returns the
/// click behavior of a node, or `None` for nodes that ignore clicks.
pub fn dispatch_click<'a, F>(hits: &[Hit], behavior_of: F) -> ClickOutcome
where
    F: Fn(NodeId) -> Option<&'a ClickBehavior>,
{
    let mut outcome = ClickOutcome::default();
    for hit in hits {
        let Some(behavior) = behavior_of(hit.node) else {
            continue;
        };
        let mut event = ClickEvent {
            hit: *hit,
            propagation_stopped: false,
        };
        if let Some(focus) = behavior.handle(&mut event) {
            outcome.focus = Some(focus);
        }
        outcome.handled_by.push(hit.node);
        log::debug!(
            "click on node {:?} at {:.3} (stopped: {})",
            hit.node,
            hit.distance,
            event.is_propagation_stopped()
        );
        if event.is_propagation_stopped() {
            break;
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(node: u32, distance: f32) -> Hit {
        Hit {
            node: NodeId(node),
            distance,
            point: Vec3::ZERO,
        }
    }

    #[test]
    fn sphere_hit_and_miss() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        let d = ray.intersect_sphere(Vec3::ZERO, 1.0).unwrap();
        assert!((d - 9.0).abs() < 1e-5);
        assert!(ray.intersect_sphere(Vec3::new(5.0, 0.0, 0.0), 1.0).is_none());
        // Behind the origin
        assert!(ray.intersect_sphere(Vec3::new(0.0, 0.0, 20.0), 1.0).is_none());
    }

    #[test]
    fn ray_inside_sphere_reports_exit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let d = ray.intersect_sphere(Vec3::ZERO, 2.0).unwrap();
        assert!((d - 2.0).abs() < 1e-5);
    }

    #[test]
    fn stop_propagation_shields_farther_nodes() {
        let target = FocusTarget::new(1.0, 1.0, 1.0, 0.0, 0.0, 0.0);
        let front = ClickBehavior::focus_on(target);
        let back = ClickBehavior {
            focus: Some(FocusTarget::new(9.0, 9.0, 9.0, 0.0, 0.0, 0.0)),
            stop_propagation: false,
        };
        let hits = [hit(1, 2.0), hit(0, 5.0)];
        let outcome = dispatch_click(&hits, |id| match id.0 {
            1 => Some(&front),
            0 => Some(&back),
            _ => None,
        });
        assert_eq!(outcome.handled_by, vec![NodeId(1)]);
        assert_eq!(outcome.focus, Some(target));
    }

    #[test]
    fn non_stopping_behaviors_all_run() {
        let passive = ClickBehavior {
            focus: None,
            stop_propagation: false,
        };
        let hits = [hit(0, 1.0), hit(1, 2.0), hit(2, 3.0)];
        let outcome = dispatch_click(&hits, |id| (id.0 != 1).then_some(&passive));
        assert_eq!(outcome.handled_by, vec![NodeId(0), NodeId(2)]);
        assert_eq!(outcome.focus, None);
    }

    #[test]
    fn empty_hits_do_nothing() {
        let outcome = dispatch_click(&[], |_| None);
        assert_eq!(outcome, ClickOutcome::default());
    }
}
