//! Couples external hand positions to per-agent state. Pure: every agent
//! is evaluated independently against the same hand list.

use crate::constants::*;
use glam::Vec3;

/// Net effect of the current hand set on one agent for one tick.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct HandSample {
    /// Additive velocity contribution.
    pub impulse: Vec3,
    /// Number of hands inside the contact radius.
    pub contacts: u32,
}

/// Evaluates the hand force field at `position`. Hands inside the
/// influence radius push the agent away; hands inside the tighter contact
/// radius additionally count as touches. Contributions are additive, one
/// per hand, with no multi-hand fusion.
pub fn sample_hands(position: Vec3, hands: &[Vec3], dt: f32) -> HandSample {
    let mut sample = HandSample::default();
    for &hand in hands {
        let away = position - hand;
        let distance = away.length();
        if distance >= HAND_INFLUENCE_RADIUS {
            continue;
        }
        sample.impulse += away / (distance + HAND_DISTANCE_EPSILON) * HAND_REPULSION_STRENGTH * dt;
        if distance < HAND_CONTACT_RADIUS {
            sample.contacts += 1;
        }
    }
    sample
}
