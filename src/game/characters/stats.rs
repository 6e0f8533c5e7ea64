// Character body proportions

use crate::core::Rect;

/// Shape of the collision box relative to the sprite.
///
/// The hitbox covers only the character's feet: a strip at the bottom of the
/// sprite, centered and narrower than the sprite itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyStats {
    /// Hitbox height in pixels
    pub hitbox_height: i32,
    /// Hitbox width is the sprite width divided by this
    pub hitbox_width_divisor: i32,
}

/// Body proportions for the player character
pub const BASE_BODY: BodyStats = BodyStats {
    hitbox_height: 20,
    hitbox_width_divisor: 4,
};

impl Default for BodyStats {
    fn default() -> Self {
        BASE_BODY
    }
}

impl BodyStats {
    /// Build the feet hitbox for a sprite occupying `sprite`
    pub fn hitbox_for(&self, sprite: &Rect) -> Rect {
        let width = (sprite.w / self.hitbox_width_divisor.max(1)).max(1);
        let height = self.hitbox_height.max(1);
        Rect::new(
            sprite.center_x() - width / 2,
            sprite.bottom() - height,
            width,
            height,
        )
    }
}
