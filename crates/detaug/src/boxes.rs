use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in pixel coordinates.
///
/// The box covers `[xmin, xmax] × [ymin, ymax]`. The label is carried through the
/// pipeline untouched; use `()` when boxes have no payload.
///
/// # Examples
///
/// ```
/// use detaug::boxes::BoundingBox;
///
/// let bbox = BoundingBox::with_label(10.0, 90.0, 20.0, 60.0, "dog");
///
/// assert_eq!(bbox.width(), 80.0);
/// assert_eq!(bbox.height(), 40.0);
/// assert_eq!(bbox.label, "dog");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox<L = ()> {
    /// Left edge.
    pub xmin: f32,
    /// Right edge.
    pub xmax: f32,
    /// Top edge.
    pub ymin: f32,
    /// Bottom edge.
    pub ymax: f32,
    /// Class label or any other payload.
    pub label: L,
}

impl BoundingBox<()> {
    /// Create an unlabelled box.
    pub fn new(xmin: f32, xmax: f32, ymin: f32, ymax: f32) -> Self {
        Self::with_label(xmin, xmax, ymin, ymax, ())
    }
}

impl<L> BoundingBox<L> {
    /// Create a box carrying `label`.
    pub fn with_label(xmin: f32, xmax: f32, ymin: f32, ymax: f32, label: L) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
            label,
        }
    }

    /// Horizontal extent of the box.
    pub fn width(&self) -> f32 {
        self.xmax - self.xmin
    }

    /// Vertical extent of the box.
    pub fn height(&self) -> f32 {
        self.ymax - self.ymin
    }

    /// Area of the box, zero for degenerate boxes.
    pub fn area(&self) -> f32 {
        self.width().max(0.0) * self.height().max(0.0)
    }

    /// Check the ordering and finiteness of the coordinates.
    ///
    /// # Errors
    ///
    /// Returns the first [`BoxDefect`] found.
    pub fn validate(&self) -> Result<(), BoxDefect> {
        let coords = [self.xmin, self.xmax, self.ymin, self.ymax];
        if coords.iter().any(|c| !c.is_finite()) {
            return Err(BoxDefect::NonFinite);
        }
        if self.xmin > self.xmax {
            return Err(BoxDefect::InvertedX);
        }
        if self.ymin > self.ymax {
            return Err(BoxDefect::InvertedY);
        }
        Ok(())
    }
}

/// Reasons an input box is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxDefect {
    /// At least one coordinate is NaN or infinite.
    NonFinite,
    /// `xmin > xmax`.
    InvertedX,
    /// `ymin > ymax`.
    InvertedY,
}

impl std::fmt::Display for BoxDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BoxDefect::NonFinite => write!(f, "coordinates must be finite"),
            BoxDefect::InvertedX => write!(f, "xmin is greater than xmax"),
            BoxDefect::InvertedY => write!(f, "ymin is greater than ymax"),
        }
    }
}
