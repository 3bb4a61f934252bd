use crate::core::coord::Coord;

/// One element of the symmetry group of the square, as an integer matrix
/// `(x, y) -> (a*x + b*y, c*x + d*y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transform {
    pub a: i32,
    pub b: i32,
    pub c: i32,
    pub d: i32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform::new(1, 0, 0, 1);
    pub const ROT90: Transform = Transform::new(0, -1, 1, 0);
    pub const ROT180: Transform = Transform::new(-1, 0, 0, -1);
    pub const ROT270: Transform = Transform::new(0, 1, -1, 0);
    /// Mirror in the vertical axis (`x -> -x`).
    pub const FLIP_X: Transform = Transform::new(-1, 0, 0, 1);
    /// Mirror in the main diagonal (swap x and y).
    pub const TRANSPOSE: Transform = Transform::new(0, 1, 1, 0);
    /// Mirror in the horizontal axis (`y -> -y`).
    pub const FLIP_Y: Transform = Transform::new(1, 0, 0, -1);
    /// Mirror in the anti-diagonal.
    pub const ANTI_TRANSPOSE: Transform = Transform::new(0, -1, -1, 0);

    #[inline]
    pub const fn new(a: i32, b: i32, c: i32, d: i32) -> Self {
        Self { a, b, c, d }
    }

    #[inline]
    pub fn apply(self, p: Coord) -> Coord {
        Coord::new(
            p.x.wrapping_mul(self.a).wrapping_add(p.y.wrapping_mul(self.b)),
            p.x.wrapping_mul(self.c).wrapping_add(p.y.wrapping_mul(self.d)),
        )
    }

    /// `self` after `other`.
    pub fn compose(self, other: Transform) -> Transform {
        Transform::new(
            self.a * other.a + self.b * other.c,
            self.a * other.b + self.b * other.d,
            self.c * other.a + self.d * other.c,
            self.c * other.b + self.d * other.d,
        )
    }

    pub fn inverse(self) -> Transform {
        // Orthogonal matrices: the inverse is the transpose.
        Transform::new(self.a, self.c, self.b, self.d)
    }

    pub fn name(self) -> &'static str {
        match self {
            Transform::IDENTITY => "identity",
            Transform::ROT90 => "rot90",
            Transform::ROT180 => "rot180",
            Transform::ROT270 => "rot270",
            Transform::FLIP_X => "flip_x",
            Transform::TRANSPOSE => "transpose",
            Transform::FLIP_Y => "flip_y",
            Transform::ANTI_TRANSPOSE => "anti_transpose",
            _ => "affine",
        }
    }
}

/// The 8 orientations, rotations first.
pub const TRANSFORMATIONS: [Transform; 8] = [
    Transform::IDENTITY,
    Transform::ROT90,
    Transform::ROT180,
    Transform::ROT270,
    Transform::FLIP_X,
    Transform::TRANSPOSE,
    Transform::FLIP_Y,
    Transform::ANTI_TRANSPOSE,
];
