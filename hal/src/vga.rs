//! 320×240 pixel buffer, one byte per pixel.
//!
//! The playfield is drawn as a grid of equal rectangular cells. Every cell
//! gets a dotted white outline so the grid stays visible on empty cells.

pub const WIDTH: usize = 320;
pub const HEIGHT: usize = 240;

/// Outline colour.
pub const BORDER: u8 = 0xFF;

pub struct Framebuffer<'a> {
    pixels: &'a mut [u8],
}

impl Framebuffer<'static> {
    pub unsafe fn vga() -> Framebuffer<'static> {
        let pixels =
            unsafe { core::slice::from_raw_parts_mut(0x0800_0000 as *mut u8, WIDTH * HEIGHT) };
        Framebuffer { pixels }
    }
}

impl<'a> Framebuffer<'a> {
    /// Wraps any `WIDTH * HEIGHT` byte buffer.
    pub fn new(pixels: &'a mut [u8]) -> Option<Self> {
        if pixels.len() < WIDTH * HEIGHT {
            return None;
        }
        Some(Framebuffer { pixels })
    }

    pub fn clear(&mut self, color: u8) {
        self.pixels[..WIDTH * HEIGHT].fill(color);
    }

    /// Paints cell (`row`, `col`) of a `grid`×`grid` layout with `color`.
    ///
    /// Pixels on the cell's edge where both coordinates are even get
    /// [`BORDER`] instead. Cells outside the grid are ignored.
    pub fn fill_cell(&mut self, row: usize, col: usize, grid: usize, color: u8) {
        if grid == 0 || row >= grid || col >= grid {
            return;
        }
        let (cell_w, cell_h) = (WIDTH / grid, HEIGHT / grid);
        let (x0, y0) = (col * cell_w, row * cell_h);

        for y in y0..y0 + cell_h {
            let edge_y = y == y0 || y == y0 + cell_h - 1;
            let line = &mut self.pixels[y * WIDTH + x0..y * WIDTH + x0 + cell_w];
            for (dx, px) in line.iter_mut().enumerate() {
                let x = x0 + dx;
                let edge = edge_y || dx == 0 || dx == cell_w - 1;
                *px = if edge && x % 2 == 0 && y % 2 == 0 { BORDER } else { color };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer() -> Vec<u8> {
        vec![0; WIDTH * HEIGHT]
    }

    fn at(buf: &[u8], x: usize, y: usize) -> u8 {
        buf[y * WIDTH + x]
    }

    #[test]
    fn rejects_short_buffers() {
        let mut short = vec![0; WIDTH];
        assert!(Framebuffer::new(&mut short).is_none());
    }

    #[test]
    fn sixteen_by_sixteen_cells_are_20_by_15() {
        let mut buf = buffer();
        Framebuffer::new(&mut buf).unwrap().fill_cell(1, 2, 16, 0x21);

        // top-left corner of cell (1, 2) is (40, 15): odd row, so no dots
        assert_eq!(at(&buf, 40, 15), 0x21);
        // next row is even and on the left edge
        assert_eq!(at(&buf, 40, 16), BORDER);
        assert_eq!(at(&buf, 41, 16), 0x21);
        // interior
        assert_eq!(at(&buf, 45, 20), 0x21);
        // bottom-right corner (59, 29) has an odd x
        assert_eq!(at(&buf, 59, 29), 0x21);
        // bottom edge, even x: y = 29 is odd so no dot
        assert_eq!(at(&buf, 50, 29), 0x21);
        // untouched neighbours
        assert_eq!(at(&buf, 39, 20), 0);
        assert_eq!(at(&buf, 60, 20), 0);
        assert_eq!(at(&buf, 45, 30), 0);
    }

    #[test]
    fn top_edge_of_even_rows_is_dotted() {
        let mut buf = buffer();
        Framebuffer::new(&mut buf).unwrap().fill_cell(0, 0, 16, 0x56);
        for x in 0..20 {
            let expected = if x % 2 == 0 { BORDER } else { 0x56 };
            assert_eq!(at(&buf, x, 0), expected, "x = {x}");
        }
    }

    #[test]
    fn out_of_grid_cells_are_ignored() {
        let mut buf = buffer();
        let mut fb = Framebuffer::new(&mut buf).unwrap();
        fb.fill_cell(16, 0, 16, 0xCC);
        fb.fill_cell(0, 0, 0, 0xCC);
        assert!(buf.iter().all(|&p| p == 0));

        Framebuffer::new(&mut buf).unwrap().clear(0x21);
        assert!(buf.iter().all(|&p| p == 0x21));
    }
}
