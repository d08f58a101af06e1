//! Packed per-entity instance data for a sprite batch

use bytemuck::{Pod, Zeroable};

use crate::sim::Session;

/// One sprite instance: center, radius, image, flags
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct EntityInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub image: u32,
    pub flags: u32,
}

impl EntityInstance {
    pub const FLAG_SHOWN: u32 = 1;
    pub const FLAG_DESTROYED: u32 = 1 << 1;
    pub const FLAG_BOMB: u32 = 1 << 2;

    pub const fn new(x: f32, y: f32, radius: f32, image: u32, flags: u32) -> Self {
        Self {
            center: [x, y],
            radius,
            image,
            flags,
        }
    }

    pub fn has(&self, flag: u32) -> bool {
        self.flags & flag != 0
    }
}

/// Instances for every entity in draw order
pub fn build_instances(state: &Session) -> Vec<EntityInstance> {
    state
        .entities()
        .map(|e| {
            let mut flags = 0;
            if e.is_shown() {
                flags |= EntityInstance::FLAG_SHOWN;
            }
            if e.is_destroyed() {
                flags |= EntityInstance::FLAG_DESTROYED;
            }
            if e.kind == crate::sim::EntityKind::Bomb {
                flags |= EntityInstance::FLAG_BOMB;
            }
            EntityInstance::new(e.pos.x, e.pos.y, e.radius(), e.visual().0, flags)
        })
        .collect()
}

/// Raw bytes for upload
pub fn as_bytes(instances: &[EntityInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
