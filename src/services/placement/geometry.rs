use std::{fmt, str::FromStr};

use thiserror::Error;

/// A point in virtual-desktop coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Create a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Widget size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Size {
    /// Create a size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// The usable screen region, excluding reserved system UI such as a taskbar.
///
/// `right()` and `bottom()` are exclusive: a widget of width `w` placed at
/// `x = right() - w` touches the right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkArea {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl WorkArea {
    /// Create a work area from its top-left corner and size.
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Exclusive right edge, saturating at `i32::MAX`.
    pub const fn right(&self) -> i32 {
        self.left.saturating_add(self.width)
    }

    /// Exclusive bottom edge, saturating at `i32::MAX`.
    pub const fn bottom(&self) -> i32 {
        self.top.saturating_add(self.height)
    }

    /// The area shrunk by `margin` on every side.
    pub const fn inset(&self, margin: i32) -> Self {
        let twice = margin.saturating_mul(2);
        Self {
            left: self.left.saturating_add(margin),
            top: self.top.saturating_add(margin),
            width: self.width.saturating_sub(twice),
            height: self.height.saturating_sub(twice),
        }
    }

    /// Whether a widget of `size` at `origin` lies fully inside the area.
    pub fn contains(&self, origin: Point, size: Size) -> bool {
        let (x, y) = (i64::from(origin.x), i64::from(origin.y));
        x >= i64::from(self.left)
            && y >= i64::from(self.top)
            && x + i64::from(size.width) <= i64::from(self.left) + i64::from(self.width)
            && y + i64::from(size.height) <= i64::from(self.top) + i64::from(self.height)
    }
}

impl fmt::Display for WorkArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.left, self.top, self.width, self.height)
    }
}

/// A work area string that is not `LEFT,TOP,WIDTH,HEIGHT`.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid work area '{0}': expected LEFT,TOP,WIDTH,HEIGHT with positive size")]
pub struct InvalidWorkArea(pub String);

impl FromStr for WorkArea {
    type Err = InvalidWorkArea;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<i32> = s
            .split(',')
            .map(|part| part.trim().parse::<i32>())
            .collect::<Result<_, _>>()
            .map_err(|_| InvalidWorkArea(s.to_string()))?;

        match parts.as_slice() {
            [left, top, width, height] if *width > 0 && *height > 0 => {
                Ok(WorkArea::new(*left, *top, *width, *height))
            }
            _ => Err(InvalidWorkArea(s.to_string())),
        }
    }
}
