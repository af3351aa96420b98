//! Shapes module - tetromino definitions for the fixed rotation system
//!
//! Each kind owns an ordered list of rotation states. A rotation state is four
//! cell offsets from the piece anchor. There are no wall kicks: rotating swaps
//! in the next state's offsets at the same anchor, and the attempt is rejected
//! if that placement is invalid.
//!
//! State counts: I, S and Z have 2, O has 1, J, L and T have 4.

use crate::types::{Point, ShapeKind};

/// Four cell offsets making up one rotation state
pub type RotationState = [Point; 4];

/// Immutable definition of a shape kind
#[derive(Debug, PartialEq, Eq)]
pub struct ShapeDefinition {
    kind: ShapeKind,
    rotations: &'static [RotationState],
    color: u32,
}

impl ShapeDefinition {
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Number of distinct rotation states
    pub fn rotation_count(&self) -> usize {
        self.rotations.len()
    }

    /// Display color as `0xRRGGBB`
    pub fn color_id(&self) -> u32 {
        self.color
    }

    /// Cell offsets for a rotation state.
    ///
    /// # Panics
    ///
    /// Panics if `rotation_index >= self.rotation_count()`.
    pub fn cells_for(&self, rotation_index: usize) -> RotationState {
        self.rotations[rotation_index]
    }

    /// Index of the state that follows `rotation_index`, wrapping to 0
    pub fn next_rotation(&self, rotation_index: usize) -> usize {
        (rotation_index + 1) % self.rotations.len()
    }

    /// All rotation states in order
    pub fn rotations(&self) -> &'static [RotationState] {
        self.rotations
    }
}

const fn p(x: i8, y: i8) -> Point {
    Point::new(x, y)
}

const I_ROTATIONS: [RotationState; 2] = [
    // vertical
    [p(0, 0), p(0, 1), p(0, 2), p(0, 3)],
    // horizontal
    [p(0, 0), p(1, 0), p(2, 0), p(3, 0)],
];

const J_ROTATIONS: [RotationState; 4] = [
    [p(0, 0), p(1, 0), p(0, 1), p(0, 2)],
    [p(0, 0), p(1, 0), p(2, 0), p(2, 1)],
    [p(0, 0), p(-1, 0), p(0, -1), p(0, -2)],
    [p(0, 0), p(0, 1), p(1, 1), p(2, 1)],
];

const L_ROTATIONS: [RotationState; 4] = [
    [p(0, 0), p(0, 1), p(1, 0), p(2, 0)],
    [p(0, 0), p(1, 0), p(1, 1), p(1, 2)],
    [p(0, 0), p(1, 0), p(2, 0), p(2, -1)],
    [p(0, 0), p(0, 1), p(0, 2), p(1, 2)],
];

const O_ROTATIONS: [RotationState; 1] = [[p(0, 0), p(1, 0), p(1, 1), p(0, 1)]];

const S_ROTATIONS: [RotationState; 2] = [
    [p(0, 0), p(1, 0), p(1, -1), p(2, -1)],
    [p(0, 0), p(0, 1), p(1, 1), p(1, 2)],
];

const Z_ROTATIONS: [RotationState; 2] = [
    [p(0, 0), p(1, 0), p(1, 1), p(2, 1)],
    [p(0, 0), p(0, -1), p(1, -1), p(1, -2)],
];

const T_ROTATIONS: [RotationState; 4] = [
    [p(0, 0), p(1, 0), p(2, 0), p(1, -1)],
    [p(0, 0), p(1, 0), p(1, 1), p(1, -1)],
    [p(0, 0), p(1, 0), p(1, 1), p(2, 0)],
    [p(0, 0), p(0, 1), p(1, 1), p(0, 2)],
];

static I_DEF: ShapeDefinition = ShapeDefinition {
    kind: ShapeKind::I,
    rotations: &I_ROTATIONS,
    color: 0x00FFFF,
};

static J_DEF: ShapeDefinition = ShapeDefinition {
    kind: ShapeKind::J,
    rotations: &J_ROTATIONS,
    color: 0x0000FF,
};

static L_DEF: ShapeDefinition = ShapeDefinition {
    kind: ShapeKind::L,
    rotations: &L_ROTATIONS,
    color: 0xFF7308,
};

static O_DEF: ShapeDefinition = ShapeDefinition {
    kind: ShapeKind::O,
    rotations: &O_ROTATIONS,
    color: 0xFFFF00,
};

static S_DEF: ShapeDefinition = ShapeDefinition {
    kind: ShapeKind::S,
    rotations: &S_ROTATIONS,
    color: 0x00FF00,
};

static Z_DEF: ShapeDefinition = ShapeDefinition {
    kind: ShapeKind::Z,
    rotations: &Z_ROTATIONS,
    color: 0xFF0000,
};

static T_DEF: ShapeDefinition = ShapeDefinition {
    kind: ShapeKind::T,
    rotations: &T_ROTATIONS,
    color: 0xFF00FF,
};

/// Look up the definition for a shape kind
pub fn definition_for(kind: ShapeKind) -> &'static ShapeDefinition {
    match kind {
        ShapeKind::I => &I_DEF,
        ShapeKind::J => &J_DEF,
        ShapeKind::L => &L_DEF,
        ShapeKind::O => &O_DEF,
        ShapeKind::S => &S_DEF,
        ShapeKind::Z => &Z_DEF,
        ShapeKind::T => &T_DEF,
    }
}

/// Cell offsets for a kind at a rotation index (shorthand for the registry lookup)
pub fn get_shape(kind: ShapeKind, rotation_index: usize) -> RotationState {
    definition_for(kind).cells_for(rotation_index)
}

/// Rows the spawn anchor has to sit below row 0 so that rotation state 0
/// stays inside the top edge. T and S reach one row above their anchor.
pub fn spawn_lift(kind: ShapeKind) -> i8 {
    let min_y = get_shape(kind, 0)
        .iter()
        .map(|cell| cell.y)
        .min()
        .unwrap_or(0);
    (-min_y).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_counts() {
        assert_eq!(definition_for(ShapeKind::I).rotation_count(), 2);
        assert_eq!(definition_for(ShapeKind::O).rotation_count(), 1);
        assert_eq!(definition_for(ShapeKind::S).rotation_count(), 2);
        assert_eq!(definition_for(ShapeKind::Z).rotation_count(), 2);
        assert_eq!(definition_for(ShapeKind::J).rotation_count(), 4);
        assert_eq!(definition_for(ShapeKind::L).rotation_count(), 4);
        assert_eq!(definition_for(ShapeKind::T).rotation_count(), 4);
    }

    #[test]
    fn test_definition_kind_matches_lookup() {
        for kind in ShapeKind::ALL {
            assert_eq!(definition_for(kind).kind(), kind);
        }
    }

    #[test]
    fn test_next_rotation_wraps() {
        let t = definition_for(ShapeKind::T);
        assert_eq!(t.next_rotation(0), 1);
        assert_eq!(t.next_rotation(3), 0);

        let o = definition_for(ShapeKind::O);
        assert_eq!(o.next_rotation(0), 0);
    }

    #[test]
    fn test_spawn_lift() {
        assert_eq!(spawn_lift(ShapeKind::I), 0);
        assert_eq!(spawn_lift(ShapeKind::J), 0);
        assert_eq!(spawn_lift(ShapeKind::L), 0);
        assert_eq!(spawn_lift(ShapeKind::O), 0);
        assert_eq!(spawn_lift(ShapeKind::Z), 0);
        assert_eq!(spawn_lift(ShapeKind::S), 1);
        assert_eq!(spawn_lift(ShapeKind::T), 1);
    }

    #[test]
    #[should_panic]
    fn test_cells_for_out_of_range_panics() {
        definition_for(ShapeKind::O).cells_for(1);
    }
}
