//! Falling entities (fruit and bombs)
//!
//! One entity type covers all four spawn variants. Kind decides scoring and
//! hit reach, side decides the spawn boundary and drift direction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::assets::{Canvas, ImageHandle, SkinPair};
use crate::consts::*;

/// What the entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Fruit,
    Bomb,
}

/// Which spawn boundary the entity came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    /// Sign applied to horizontal drift (left drifts outward to the left)
    pub fn drift_sign(&self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Per-kind rules for collision and scoring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindPolicy {
    /// Reach of a hand when tested against this kind
    pub hand_radius: f32,
    /// Score change when a hand destroys it
    pub score: i64,
    /// Sprite diameter
    pub diameter: f32,
    /// Only collidable once fully on screen
    pub requires_shown: bool,
}

impl EntityKind {
    pub const ALL: [EntityKind; 2] = [EntityKind::Fruit, EntityKind::Bomb];

    pub const fn policy(&self) -> KindPolicy {
        match self {
            EntityKind::Fruit => KindPolicy {
                hand_radius: FRUIT_HAND_RADIUS,
                score: FRUIT_SCORE,
                diameter: FRUIT_DIAMETER,
                requires_shown: true,
            },
            EntityKind::Bomb => KindPolicy {
                hand_radius: BOMB_HAND_RADIUS,
                score: BOMB_SCORE,
                diameter: BOMB_DIAMETER,
                requires_shown: false,
            },
        }
    }
}

/// A simulated falling object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    pub side: Side,
    pub pos: Vec2,
    /// Horizontal drift (pixels/frame)
    pub vx: f32,
    /// Vertical velocity (pixels/frame, positive is down)
    pub vy: f32,
    pub gravity: f32,
    pub diameter: f32,
    pub skin: SkinPair,
    is_shown: bool,
    is_destroyed: bool,
    /// Frames elapsed since destruction (for pruning)
    #[serde(default)]
    destroyed_frames: u32,
}

impl Entity {
    pub fn new(
        id: u32,
        kind: EntityKind,
        side: Side,
        pos: Vec2,
        vy: f32,
        gravity: f32,
        skin: SkinPair,
    ) -> Self {
        Self {
            id,
            kind,
            side,
            pos,
            vx: 0.0,
            vy,
            gravity,
            diameter: kind.policy().diameter,
            skin,
            is_shown: false,
            is_destroyed: false,
            destroyed_frames: 0,
        }
    }

    pub fn with_diameter(mut self, diameter: f32) -> Self {
        self.diameter = diameter;
        self
    }

    pub fn with_drift(mut self, vx: f32) -> Self {
        self.vx = vx;
        self
    }

    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }

    pub fn is_shown(&self) -> bool {
        self.is_shown
    }

    pub fn is_destroyed(&self) -> bool {
        self.is_destroyed
    }

    pub fn destroyed_frames(&self) -> u32 {
        self.destroyed_frames
    }

    /// Mark the entity as in play. Never reverts.
    pub fn mark_shown(&mut self) {
        self.is_shown = true;
    }

    /// One physics step: gravity into velocity, velocity into position
    pub fn advance(&mut self) {
        self.vy += self.gravity;
        self.pos.y += self.vy;
        self.pos.x += self.vx;
        if self.is_destroyed {
            self.destroyed_frames = self.destroyed_frames.saturating_add(1);
        }
    }

    /// Flag the entity as shown once its whole circle is inside the canvas rows
    pub fn settle(&mut self, canvas: &Canvas) {
        let r = self.radius();
        if !self.is_shown && self.pos.y - r >= 0.0 && self.pos.y + r <= canvas.height {
            self.is_shown = true;
        }
    }

    /// Whole circle is below the bottom edge and still heading down
    pub fn is_below(&self, canvas: &Canvas) -> bool {
        self.pos.y - self.radius() > canvas.height && self.vy > 0.0
    }

    /// Destroy the entity and switch to the explode sprite.
    ///
    /// Returns true only for the call that actually destroyed it.
    pub fn destroy(&mut self) -> bool {
        if self.is_destroyed {
            return false;
        }
        self.is_destroyed = true;
        true
    }

    /// Sprite the renderer should draw this frame
    pub fn visual(&self) -> ImageHandle {
        if self.is_destroyed {
            self.skin.explode
        } else {
            self.skin.active
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fruit(y: f32, vy: f32, gravity: f32) -> Entity {
        Entity::new(1, EntityKind::Fruit, Side::Left, Vec2::new(50.0, y), vy, gravity, SkinPair::new(0, 1))
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut e = fruit(0.0, 0.0, 0.1);
        assert_eq!(e.visual(), ImageHandle(0));
        assert!(e.destroy());
        assert!(!e.destroy());
        assert!(e.is_destroyed());
        assert_eq!(e.visual(), ImageHandle(1));
    }

    #[test]
    fn test_advance_integrates() {
        let mut e = fruit(10.0, 2.0, 0.5);
        e.advance();
        assert_eq!(e.vy, 2.5);
        assert_eq!(e.pos.y, 12.5);
        e.advance();
        assert_eq!(e.vy, 3.0);
        assert_eq!(e.pos.y, 15.5);
    }

    #[test]
    fn test_drift_moves_x() {
        let mut e = fruit(10.0, 0.0, 0.0).with_drift(Side::Left.drift_sign() * 2.0);
        e.advance();
        assert_eq!(e.pos.x, 48.0);
    }

    #[test]
    fn test_settle_requires_full_circle_on_canvas() {
        let canvas = Canvas { width: 800.0, height: 600.0 };
        let mut e = fruit(-10.0, 0.0, 0.0);
        e.settle(&canvas);
        assert!(!e.is_shown());
        e.pos.y = e.radius();
        e.settle(&canvas);
        assert!(e.is_shown());
        // Leaving the canvas does not hide it again
        e.pos.y = 10_000.0;
        e.settle(&canvas);
        assert!(e.is_shown());
    }

    #[test]
    fn test_destroyed_frames_count() {
        let mut e = fruit(0.0, 0.0, 0.1);
        e.advance();
        assert_eq!(e.destroyed_frames(), 0);
        e.destroy();
        e.advance();
        e.advance();
        assert_eq!(e.destroyed_frames(), 2);
    }

    #[test]
    fn test_kind_policy_asymmetry() {
        assert!(EntityKind::Fruit.policy().hand_radius > EntityKind::Bomb.policy().hand_radius);
        assert_eq!(EntityKind::Fruit.policy().score, 100);
        assert_eq!(EntityKind::Bomb.policy().score, -100);
    }

    proptest! {
        #[test]
        fn prop_destroyed_is_monotonic(ops in proptest::collection::vec(any::<bool>(), 1..64)) {
            let mut e = fruit(0.0, 1.0, 0.2);
            let mut seen = false;
            for destroy in ops {
                if destroy {
                    e.destroy();
                } else {
                    e.advance();
                }
                seen |= e.is_destroyed();
                prop_assert_eq!(e.is_destroyed(), seen);
            }
        }
    }
}
