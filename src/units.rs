// ABOUTME: Linear units and geometry for the slide coordinate space
// ABOUTME: Converts inches and points into EMU, the native OOXML distance unit

/// English Metric Units, the coordinate unit used throughout OOXML parts.
pub type Emu = i64;

pub const EMU_PER_INCH: i64 = 914_400;
pub const EMU_PER_POINT: i64 = 12_700;

/// Convert inches to EMU.
#[inline]
pub fn inches(value: f64) -> Emu {
    (value * EMU_PER_INCH as f64).round() as Emu
}

/// Convert typographic points to EMU.
#[inline]
pub fn points(value: f64) -> Emu {
    (value * EMU_PER_POINT as f64).round() as Emu
}

/// Position and size of a visual element on a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub left: Emu,
    pub top: Emu,
    pub width: Emu,
    pub height: Emu,
}

impl Geometry {
    pub const fn new(left: Emu, top: Emu, width: Emu, height: Emu) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Placement with all four extents expressed in inches.
    pub fn from_inches(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(inches(left), inches(top), inches(width), inches(height))
    }

    /// A geometry is well-formed when no extent is negative.
    pub fn is_valid(&self) -> bool {
        self.left >= 0 && self.top >= 0 && self.width >= 0 && self.height >= 0
    }
}
