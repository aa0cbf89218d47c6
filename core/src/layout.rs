//! Screen geometry and hit-testing. All coordinates are in canvas pixels
//! with the origin at the top left.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x <= self.x + self.w && y >= self.y && y <= self.y + self.h
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub palette_x: i32,
    pub palette_y: i32,
    pub square_size: i32,
    /// Horizontal gap to the right of the palette column in which painting
    /// is suppressed so strokes can't cover the palette.
    pub palette_margin: i32,
    pub num_palette_entries: usize,
    pub dab_radius: i32,
}

impl Layout {
    pub fn new(width: u32, height: u32, num_palette_entries: usize) -> Self {
        Self {
            width,
            height,
            palette_x: 10,
            palette_y: 10,
            square_size: 15,
            palette_margin: 10,
            num_palette_entries,
            dab_radius: 5,
        }
    }

    /// Screen rectangle of the `i`th palette square.
    pub fn palette_square(&self, i: usize) -> Rect {
        Rect::new(
            self.palette_x,
            self.palette_y + i as i32 * self.square_size,
            self.square_size,
            self.square_size,
        )
    }

    /// Palette index under the pointer, or `None` on a miss.
    pub fn palette_index(&self, x: i32, y: i32) -> Option<usize> {
        if x < self.palette_x || x > self.palette_x + self.square_size {
            return None;
        }
        let row = (y - self.palette_y).div_euclid(self.square_size);
        if row >= 0 && (row as usize) < self.num_palette_entries {
            Some(row as usize)
        } else {
            None
        }
    }

    /// The "Clear" button occupies a fixed rectangle at the top right.
    pub fn clear_button(&self) -> Rect {
        Rect::new(self.width as i32 - 50, 10, 40, 40)
    }

    /// Painting is only allowed strictly to the right of the palette's
    /// horizontal band.
    pub fn in_paint_region(&self, x: i32) -> bool {
        x > self.palette_x + self.square_size + self.palette_margin
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn layout() -> Layout {
        Layout::new(800, 600, 10)
    }

    #[test]
    fn palette_hit_second_square() {
        // y = 25 with palette_y = 10 and square_size = 15 lands in row 1
        assert_eq!(layout().palette_index(10, 25), Some(1));
    }

    #[test]
    fn palette_hit_first_and_last() {
        assert_eq!(layout().palette_index(25, 10), Some(0));
        assert_eq!(layout().palette_index(10, 10 + 9 * 15), Some(9));
    }

    #[test]
    fn palette_miss_right_of_column() {
        assert_eq!(layout().palette_index(26, 25), None);
    }

    #[test]
    fn palette_miss_below_last_row() {
        assert_eq!(layout().palette_index(10, 10 + 10 * 15), None);
    }

    #[test]
    fn palette_miss_above_first_row() {
        assert_eq!(layout().palette_index(10, 9), None);
    }

    #[test]
    fn clear_button_rect() {
        let button = layout().clear_button();
        assert!(button.contains(760, 20));
        assert!(button.contains(790, 50));
        assert!(!button.contains(751, 60));
    }

    #[test]
    fn paint_region_excludes_palette_band() {
        let layout = layout();
        assert!(!layout.in_paint_region(35));
        assert!(layout.in_paint_region(36));
    }
}
