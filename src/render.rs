/// Drawing operations the simulation issues after each state change.
///
/// Coordinates are in grid cells; a renderer scales them by its own pitch.
pub trait Renderer {
    /// Wipes the whole surface.
    fn clear(&mut self);
    /// Marks the cell at `(x, y)` as alive.
    fn draw_live_cell(&mut self, x: usize, y: usize);
    /// Draws guide lines for a `width × height` grid whose cells are `pitch` units wide.
    fn draw_grid_lines(&mut self, width: usize, height: usize, pitch: usize);
}

/// What a single grid cell of the surface currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Blank,
    Guide,
    Live,
}

/// In-memory character canvas.
///
/// Each grid cell covers `pitch × pitch` characters. The terminal front end
/// turns it into text with [`Surface::to_text`].
#[derive(Debug, Clone)]
pub struct Surface {
    width: usize,
    height: usize,
    pitch: usize,
    marks: Vec<Mark>,
}

impl Surface {
    pub const LIVE: char = '•';
    pub const GUIDE: char = '·';
    pub const BLANK: char = ' ';

    pub fn new(width: usize, height: usize, pitch: usize) -> Self {
        Surface {
            width,
            height,
            pitch: pitch.max(1),
            marks: vec![Mark::Blank; width * height],
        }
    }

    /// What the grid cell at `(x, y)` shows, or `None` outside the surface.
    pub fn mark(&self, x: usize, y: usize) -> Option<Mark> {
        (x < self.width && y < self.height).then(|| self.marks[y * self.width + x])
    }

    /// Renders the surface as newline-separated rows of characters.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity((self.width * self.pitch + 1) * self.height * self.pitch);
        for row in self.marks.chunks(self.width.max(1)).take(self.height) {
            for _ in 0..self.pitch {
                for mark in row {
                    let ch = match mark {
                        Mark::Live => Self::LIVE,
                        Mark::Guide => Self::GUIDE,
                        Mark::Blank => Self::BLANK,
                    };
                    for _ in 0..self.pitch {
                        text.push(ch);
                    }
                }
                text.push('\n');
            }
        }
        text
    }
}

impl Renderer for Surface {
    fn clear(&mut self) {
        self.marks.fill(Mark::Blank);
    }

    fn draw_live_cell(&mut self, x: usize, y: usize) {
        if x < self.width && y < self.height {
            self.marks[y * self.width + x] = Mark::Live;
        }
    }

    fn draw_grid_lines(&mut self, width: usize, height: usize, _pitch: usize) {
        for y in 0..height.min(self.height) {
            for x in 0..width.min(self.width) {
                let mark = &mut self.marks[y * self.width + x];
                if *mark == Mark::Blank {
                    *mark = Mark::Guide;
                }
            }
        }
    }
}
