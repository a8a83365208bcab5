use crate::config::{DocumentSettings, Orientation};

use super::format::StyledRun;

/// Courier glyph advance as a fraction of the font size.
const COURIER_ADVANCE: f32 = 0.6;
/// Line pitch as a multiple of the default font size.
const LINE_SPACING: f32 = 1.2;
/// Absorbs rounding when a run exactly fills the line.
const FIT_EPSILON: f32 = 1e-3;

/// Page size and font metrics, in points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub font_size: f32,
    pub font_size_small: f32,
}

impl PageGeometry {
    pub fn from_settings(doc: &DocumentSettings) -> Self {
        let (w, h) = doc.size.dimensions();
        let (width, height) = match doc.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        };
        Self {
            width,
            height,
            margin: doc.margin,
            font_size: doc.font_size,
            font_size_small: doc.font_size_small,
        }
    }

    fn line_height(&self) -> f32 {
        self.font_size * LINE_SPACING
    }

    fn first_baseline(&self) -> f32 {
        self.height - self.margin - self.font_size
    }
}

/// A piece of text at a fixed spot. `y` is the baseline, measured from the
/// bottom of the page as PDF does.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub page: usize,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub bold: bool,
    pub text: String,
}

/// Flows runs left to right, top to bottom, page after page.
#[derive(Debug, Clone)]
pub struct Layout {
    geometry: PageGeometry,
    page: usize,
    x: f32,
    y: f32,
    line_open: bool,
}

impl Layout {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            page: 0,
            x: geometry.margin,
            y: geometry.first_baseline(),
            line_open: false,
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Index of the page the cursor is on.
    pub fn page(&self) -> usize {
        self.page
    }

    fn right_edge(&self) -> f32 {
        self.geometry.width - self.geometry.margin
    }

    fn new_line(&mut self) {
        self.x = self.geometry.margin;
        self.y -= self.geometry.line_height();
        self.line_open = false;
        if self.y < self.geometry.margin {
            self.page += 1;
            self.y = self.geometry.first_baseline();
        }
    }

    /// Place one run. Text that does not fit the rest of the line moves to the
    /// next one; text wider than a whole line is split.
    pub fn place(&mut self, run: &StyledRun) -> Vec<Placement> {
        let size = if run.small_font {
            self.geometry.font_size_small
        } else {
            self.geometry.font_size
        };
        let advance = size * COURIER_ADVANCE;

        let mut placements = Vec::new();
        let mut rest: Vec<char> = run.text.chars().collect();
        while !rest.is_empty() {
            let fits = ((self.right_edge() - self.x) / advance + FIT_EPSILON)
                .floor()
                .max(0.0) as usize;
            if rest.len() <= fits {
                placements.push(self.emit(rest.iter().collect(), size, advance, run.bold));
                break;
            }
            if self.line_open {
                self.new_line();
                continue;
            }
            let head: String = rest.drain(..fits.max(1)).collect();
            placements.push(self.emit(head, size, advance, run.bold));
            self.new_line();
        }

        if !run.continued {
            self.new_line();
        }
        placements
    }

    fn emit(&mut self, text: String, size: f32, advance: f32, bold: bool) -> Placement {
        let placement = Placement {
            page: self.page,
            x: self.x,
            y: self.y,
            size,
            bold,
            text,
        };
        self.x += advance * placement.text.chars().count() as f32;
        self.line_open = true;
        placement
    }

    /// Finish a row: a line left open by a continued run is closed.
    pub fn end_row(&mut self) {
        if self.line_open {
            self.new_line();
        }
    }
}
