/// An axis-aligned rectangle given by its minimum and maximum corners.
///
/// Both corners are inclusive: a rectangle built from a single point has
/// zero width and height.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    /// A degenerate rectangle covering only `(x, y)`.
    pub const fn at(x: i32, y: i32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    /// Grow the rectangle so that it covers `(x, y)`.
    pub fn include(&mut self, x: i32, y: i32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }

    pub fn width(&self) -> i32 {
        self.max_x.saturating_sub(self.min_x)
    }

    pub fn height(&self) -> i32 {
        self.max_y.saturating_sub(self.min_y)
    }
}
