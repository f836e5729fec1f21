//! Collision reporting.

use std::sync::{Mutex, PoisonError};

use rapier2d::prelude::*;

use crate::tag::BodyTag;

/// A collision between two bodies that was hard enough to report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactEvent {
    pub a: BodyTag,
    pub b: BodyTag,
    /// Total contact impulse over the step.
    pub impulse: Real,
}

/// Collects significant contacts while the pipeline steps.
///
/// rapier calls the handler through a shared reference, so events are
/// buffered behind a mutex and drained once the step returns.
pub struct ContactObserver {
    min_impulse: Real,
    events: Mutex<Vec<ContactEvent>>,
}

impl ContactObserver {
    pub fn new(min_impulse: Real) -> Self {
        Self {
            min_impulse,
            events: Mutex::new(Vec::new()),
        }
    }

    /// Record a contact unless it is weaker than the threshold.
    pub fn record(&self, a: BodyTag, b: BodyTag, impulse: Real) {
        if impulse < self.min_impulse {
            return;
        }
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ContactEvent { a, b, impulse });
    }

    /// Take this frame's events, leaving the buffer empty.
    pub fn drain(&self) -> Vec<ContactEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

fn tag_of(handle: ColliderHandle, bodies: &RigidBodySet, colliders: &ColliderSet) -> Option<BodyTag> {
    let parent = colliders.get(handle)?.parent()?;
    bodies
        .get(parent)
        .map(|body| BodyTag::from_user_data(body.user_data))
}

impl EventHandler for ContactObserver {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _event: CollisionEvent,
        _contact_pair: Option<&ContactPair>,
    ) {
    }

    fn handle_contact_force_event(
        &self,
        dt: Real,
        bodies: &RigidBodySet,
        colliders: &ColliderSet,
        contact_pair: &ContactPair,
        total_force_magnitude: Real,
    ) {
        let a = tag_of(contact_pair.collider1, bodies, colliders);
        let b = tag_of(contact_pair.collider2, bodies, colliders);
        if let (Some(a), Some(b)) = (a, b) {
            self.record(a, b, total_force_magnitude * dt);
        }
    }
}
