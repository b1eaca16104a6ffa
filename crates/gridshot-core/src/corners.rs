//! The draggable corner quadrilateral for manual perspective correction.
//!
//! Corner coordinates are held in normalized `[0, 1] × [0, 1]` space so the
//! editor canvas can be any size; they are scaled to the source image's
//! native resolution only when handed to the warp service.

use std::fmt::{self, Display};

/// A 2D point, either normalized or in pixel coordinates depending on
/// context.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// One of the four corners, in the fixed TL, TR, BR, BL order.
///
/// The order is part of the warp service contract and is never permuted by
/// interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-right corner.
    BottomRight,
    /// Bottom-left corner.
    BottomLeft,
}

impl Corner {
    /// All corners in TL, TR, BR, BL order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    /// Short label shown next to the corner handle.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TopLeft => "TL",
            Self::TopRight => "TR",
            Self::BottomRight => "BR",
            Self::BottomLeft => "BL",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::TopLeft => 0,
            Self::TopRight => 1,
            Self::BottomRight => 2,
            Self::BottomLeft => 3,
        }
    }
}

impl Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The ordered corner quadrilateral, in normalized coordinates.
///
/// Always exactly four points; mutation is limited to single-corner
/// placement (clamped to the unit square) and a full reset.
///
/// # Examples
///
/// ```
/// use gridshot_core::{Corner, CornerSet, Point};
///
/// let mut corners = CornerSet::default();
/// assert_eq!(corners.corner(Corner::TopLeft), Point::new(0.1, 0.1));
///
/// // Drags clamp to the unit square
/// corners.place(Corner::TopLeft, Point::new(-0.5, 2.0));
/// assert_eq!(corners.corner(Corner::TopLeft), Point::new(0.0, 1.0));
///
/// corners.reset();
/// assert_eq!(corners, CornerSet::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerSet {
    points: [Point; 4],
}

impl CornerSet {
    /// The default quadrilateral, inscribed 10% in from the image bounds.
    pub const DEFAULT: Self = Self {
        points: [
            Point::new(0.1, 0.1),
            Point::new(0.9, 0.1),
            Point::new(0.9, 0.9),
            Point::new(0.1, 0.9),
        ],
    };

    /// Handle pick-up radius for [`hit_test`](Self::hit_test), in canvas
    /// pixels.
    pub const HIT_RADIUS: f32 = 18.0;

    /// Returns all four points in TL, TR, BR, BL order.
    #[must_use]
    pub const fn points(&self) -> [Point; 4] {
        self.points
    }

    /// Returns the normalized position of a corner.
    #[must_use]
    pub const fn corner(&self, corner: Corner) -> Point {
        self.points[corner.index()]
    }

    /// Moves a corner to `point`, clamping it into the unit square.
    pub fn place(&mut self, corner: Corner, point: Point) {
        self.points[corner.index()] = Point::new(point.x.clamp(0.0, 1.0), point.y.clamp(0.0, 1.0));
    }

    /// Restores the default quadrilateral.
    pub fn reset(&mut self) {
        *self = Self::DEFAULT;
    }

    /// Finds the corner whose handle contains `at`, in canvas pixels.
    ///
    /// Corners are tested in TL, TR, BR, BL order and the first one within
    /// `radius` wins, so overlapping handles resolve deterministically.
    #[must_use]
    pub fn hit_test(&self, at: Point, width: f32, height: f32, radius: f32) -> Option<Corner> {
        Corner::ALL.into_iter().find(|&corner| {
            let p = self.corner(corner);
            Point::new(p.x * width, p.y * height).distance(at) < radius
        })
    }

    /// Scales all four points to the image's native resolution.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridshot_core::CornerSet;
    ///
    /// let native = CornerSet::default().to_native(1000.0, 500.0);
    /// assert_eq!(native[0], [100.0, 50.0]); // TL
    /// assert_eq!(native[2], [900.0, 450.0]); // BR
    /// ```
    #[must_use]
    pub fn to_native(&self, width: f32, height: f32) -> [[f32; 2]; 4] {
        self.points.map(|p| [p.x * width, p.y * height])
    }

    /// Builds a corner set from native-resolution points, normalizing and
    /// clamping them.
    ///
    /// Used to seed the editor with the corners automatic detection found.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is not positive.
    #[must_use]
    pub fn from_native(points: [[f32; 2]; 4], width: f32, height: f32) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "Image dimensions must be positive"
        );
        Self {
            points: points.map(|[x, y]| {
                Point::new((x / width).clamp(0.0, 1.0), (y / height).clamp(0.0, 1.0))
            }),
        }
    }
}

impl Default for CornerSet {
    fn default() -> Self {
        Self::DEFAULT
    }
}
