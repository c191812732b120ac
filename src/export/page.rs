//! Page geometry for exports
//!
//! The board image is scaled to the printable width of the page, shrunk
//! further if it would overflow the printable height, centered horizontally
//! and pinned to the top margin.

/// A4 width in points
pub const A4_WIDTH: f64 = 595.28;

/// A4 height in points
pub const A4_HEIGHT: f64 = 841.89;

/// Page size and margin, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for PageLayout {
    /// A4 portrait with a 20 pt margin
    fn default() -> Self {
        Self {
            width: A4_WIDTH,
            height: A4_HEIGHT,
            margin: 20.0,
        }
    }
}

/// Where the board image lands on the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    /// Scale factor from the source image to the page
    #[must_use]
    pub fn scale_from(&self, source_width: f64) -> f64 {
        self.width / source_width
    }
}

impl PageLayout {
    /// Fit an image of `source_width` × `source_height` onto the page
    ///
    /// # Examples
    /// ```
    /// use bingo_board::export::PageLayout;
    ///
    /// let page = PageLayout::default();
    /// let placed = page.fit(400.0, 400.0);
    ///
    /// assert!((placed.width - (page.width - 40.0)).abs() < 1e-9);
    /// assert_eq!(placed.y, 20.0);
    /// ```
    #[must_use]
    pub fn fit(&self, source_width: f64, source_height: f64) -> Placement {
        let max_width = self.width - self.margin * 2.0;
        let max_height = self.height - self.margin * 2.0;

        let mut width = max_width;
        let mut height = source_height * (max_width / source_width);
        if height > max_height {
            let shrink = max_height / height;
            width *= shrink;
            height *= shrink;
        }

        Placement {
            x: (self.width - width) / 2.0,
            y: self.margin,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn wide_image_fills_printable_width() {
        let page = PageLayout::default();
        let placed = page.fit(1000.0, 500.0);

        assert!(close(placed.width, A4_WIDTH - 40.0));
        assert!(close(placed.height, (A4_WIDTH - 40.0) / 2.0));
        assert!(close(placed.x, 20.0));
        assert!(close(placed.y, 20.0));
    }

    #[test]
    fn tall_image_is_shrunk_and_centered() {
        let page = PageLayout::default();
        let placed = page.fit(100.0, 1000.0);

        assert!(close(placed.height, A4_HEIGHT - 40.0));
        assert!(close(placed.width, (A4_HEIGHT - 40.0) / 10.0));
        assert!(close(placed.x, (A4_WIDTH - placed.width) / 2.0));
        assert!(placed.x > page.margin);
    }

    #[test]
    fn scale_factor() {
        let page = PageLayout {
            width: 240.0,
            height: 1000.0,
            margin: 20.0,
        };
        let placed = page.fit(400.0, 400.0);

        assert!(close(placed.width, 200.0));
        assert!(close(placed.scale_from(400.0), 0.5));
    }
}
