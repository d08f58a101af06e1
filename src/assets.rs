//! Preloaded asset handles
//!
//! The host loads images and owns the canvas. The simulation only carries
//! opaque handles so an entity can tell the renderer which sprite to draw.

use serde::{Deserialize, Serialize};

/// Opaque handle to an image the host has already loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ImageHandle(pub u32);

/// Sprite pair for one skin: intact and exploded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinPair {
    pub active: ImageHandle,
    pub explode: ImageHandle,
}

impl SkinPair {
    pub const fn new(active: u32, explode: u32) -> Self {
        Self {
            active: ImageHandle(active),
            explode: ImageHandle(explode),
        }
    }
}

/// Drawing surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: crate::consts::CANVAS_WIDTH,
            height: crate::consts::CANVAS_HEIGHT,
        }
    }
}

/// Everything the session needs from the asset loader, injected at construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetBundle {
    /// One entry per fruit skin
    pub fruit_skins: Vec<SkinPair>,
    /// Bombs share a single skin
    pub bomb_skin: SkinPair,
    pub canvas: Canvas,
}

impl AssetBundle {
    pub fn new(fruit_skins: Vec<SkinPair>, bomb_skin: SkinPair, canvas: Canvas) -> Self {
        Self {
            fruit_skins,
            bomb_skin,
            canvas,
        }
    }

    /// Bundle with `count` fruit skins numbered from 0, bomb skin after them.
    /// Used by the headless demo and tests where handles are never drawn.
    pub fn numbered(count: u32, canvas: Canvas) -> Self {
        let fruit_skins = (0..count).map(|i| SkinPair::new(i * 2, i * 2 + 1)).collect();
        let bomb_skin = SkinPair::new(count * 2, count * 2 + 1);
        Self::new(fruit_skins, bomb_skin, canvas)
    }
}
