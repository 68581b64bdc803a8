//! Axis-aligned rectangle overlap used for player vs. obstacle hits.

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shrinks the rectangle by `pad` on every side.
    pub fn inset(&self, pad: f32) -> Self {
        Self {
            x: self.x + pad,
            y: self.y + pad,
            width: self.width - 2.0 * pad,
            height: self.height - 2.0 * pad,
        }
    }

    /// Boundary-inclusive overlap: rectangles sharing an edge collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }
}

/// Tests an obstacle against the player using the obstacle's padded hitbox
/// and the player's exact sprite rectangle.
pub fn obstacle_hits_player(obstacle: &Rect, player: &Rect, pad: f32) -> bool {
    obstacle.inset(pad).overlaps(player)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAD: f32 = 20.0;

    fn player() -> Rect {
        Rect::new(200.0, 250.0, 100.0, 100.0)
    }

    #[test]
    fn fully_overlapping_collides() {
        let obstacle = Rect::new(200.0, 250.0, 100.0, 100.0);
        assert!(obstacle_hits_player(&obstacle, &player(), PAD));
    }

    #[test]
    fn disjoint_does_not_collide() {
        let obstacle = Rect::new(600.0, 250.0, 100.0, 100.0);
        assert!(!obstacle_hits_player(&obstacle, &player(), PAD));

        let above = Rect::new(200.0, 0.0, 100.0, 100.0);
        assert!(!obstacle_hits_player(&above, &player(), PAD));
    }

    #[test]
    fn edge_touching_collides() {
        // Padded left edge lands exactly on the player's right edge.
        let obstacle = Rect::new(300.0 - PAD, 250.0, 100.0, 100.0);
        assert_eq!(obstacle.inset(PAD).x, player().right());
        assert!(obstacle_hits_player(&obstacle, &player(), PAD));
    }

    #[test]
    fn padding_forgives_visual_overlap() {
        // Sprites overlap by 10px but the padded hitbox stays clear.
        let obstacle = Rect::new(290.0, 250.0, 100.0, 100.0);
        assert!(obstacle.overlaps(&player()));
        assert!(!obstacle_hits_player(&obstacle, &player(), PAD));
    }

    #[test]
    fn partial_overlap_collides() {
        let obstacle = Rect::new(250.0, 300.0, 100.0, 100.0);
        assert!(obstacle_hits_player(&obstacle, &player(), PAD));
    }

    #[test]
    fn overlap_requires_both_axes() {
        // X projections overlap, Y projections do not.
        let obstacle = Rect::new(220.0, 400.0, 100.0, 100.0);
        assert!(!obstacle_hits_player(&obstacle, &player(), PAD));
    }

    #[test]
    fn inset_shrinks_symmetrically() {
        let r = Rect::new(10.0, 20.0, 100.0, 80.0).inset(5.0);
        assert_eq!(r, Rect::new(15.0, 25.0, 90.0, 70.0));
    }
}
