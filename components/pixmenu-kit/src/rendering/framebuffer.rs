use crate::common::Rect;
use crate::display::{Color, DisplayError, DisplaySurface, Font, PageId, TextAlign, TextBounds};

/// A string printed on a page, kept for inspection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintedText {
    pub x: i32,
    pub y: i32,
    pub color: Color,
    pub text: String,
}

struct Page {
    id: PageId,
    pixels: Vec<Color>,
    texts: Vec<PrintedText>,
}

/// In-memory display surface
///
/// Every page owns a full RGBW pixel buffer. Glyphs are not rasterized:
/// `print` fills one cell per visible character and records the string so
/// callers can inspect what was drawn.
pub struct Framebuffer {
    width: i32,
    height: i32,
    pages: Vec<Page>,
    active: Option<usize>,
    next_page_id: u32,
}

impl Framebuffer {
    /// Create a framebuffer with a single, active page
    pub fn new(width: i32, height: i32) -> Self {
        let mut framebuffer = Self {
            width: width.max(0),
            height: height.max(0),
            pages: Vec::new(),
            active: None,
            next_page_id: 0,
        };
        let page = framebuffer.create_page();
        framebuffer.active = framebuffer.page_index(page);
        framebuffer
    }

    /// Drop a page; handles to it become unknown
    pub fn remove_page(&mut self, page: PageId) -> bool {
        let Some(index) = self.page_index(page) else {
            return false;
        };
        self.pages.remove(index);
        self.active = match self.active {
            Some(active) if active == index => None,
            Some(active) if active > index => Some(active - 1),
            other => other,
        };
        true
    }

    /// Pixel on the active page, `None` outside the surface or without a page
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if !self.bounds().contains(x, y) {
            return None;
        }
        let page = self.active_page_ref()?;
        page.pixels.get((y * self.width + x) as usize).copied()
    }

    /// Strings printed on the active page since it was last cleared
    pub fn printed(&self) -> &[PrintedText] {
        self.active_page_ref()
            .map(|page| page.texts.as_slice())
            .unwrap_or(&[])
    }

    /// Render the active page as text, `#` for lit pixels
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(((self.width + 1) * self.height) as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let lit = self.pixel(x, y).map(|c| c.is_on()).unwrap_or(false);
                out.push(if lit { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }

    fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    fn page_index(&self, page: PageId) -> Option<usize> {
        self.pages.iter().position(|p| p.id == page)
    }

    fn active_page_ref(&self) -> Option<&Page> {
        self.active.and_then(|index| self.pages.get(index))
    }

    fn active_page_mut(&mut self) -> Option<&mut Page> {
        self.active.and_then(|index| self.pages.get_mut(index))
    }

    fn fill(&mut self, rect: Rect, color: Color) {
        let Some(clipped) = rect.intersection(&self.bounds()) else {
            return;
        };
        let width = self.width;
        let Some(page) = self.active_page_mut() else {
            return;
        };
        for y in clipped.y..clipped.bottom() {
            let row = (y * width) as usize;
            for x in clipped.x..clipped.right() {
                page.pixels[row + x as usize] = color;
            }
        }
    }
}

impl DisplaySurface for Framebuffer {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn text_bounds(
        &self,
        x: i32,
        y: i32,
        text: &str,
        font: &Font,
        align: TextAlign,
    ) -> TextBounds {
        let glyphs = text.chars().count() as i32;
        let width = if glyphs == 0 {
            0
        } else {
            glyphs * font.advance() - font.spacing
        };
        let height = font.glyph_height;
        let (x, y) = align.top_left(x, y, width, height);

        TextBounds {
            x,
            y,
            width,
            height,
        }
    }

    fn filled_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.fill(Rect::new(x, y, width, height), color);
    }

    fn print(&mut self, x: i32, y: i32, font: &Font, color: Color, align: TextAlign, text: &str) {
        let bounds = self.text_bounds(x, y, text, font, align);

        for (i, glyph) in text.chars().enumerate() {
            if glyph.is_whitespace() {
                continue;
            }
            let cell_x = bounds.x + i as i32 * font.advance();
            self.fill(
                Rect::new(cell_x, bounds.y, font.glyph_width, font.glyph_height),
                color,
            );
        }

        if let Some(page) = self.active_page_mut() {
            page.texts.push(PrintedText {
                x: bounds.x,
                y: bounds.y,
                color,
                text: text.to_string(),
            });
        }
    }

    fn clear(&mut self) {
        if let Some(page) = self.active_page_mut() {
            page.pixels.fill(Color::OFF);
            page.texts.clear();
        }
    }

    fn create_page(&mut self) -> PageId {
        let id = PageId(self.next_page_id);
        self.next_page_id += 1;
        self.pages.push(Page {
            id,
            pixels: vec![Color::OFF; (self.width * self.height) as usize],
            texts: Vec::new(),
        });
        id
    }

    fn show_page(&mut self, page: PageId) -> Result<(), DisplayError> {
        let index = self.page_index(page).ok_or(DisplayError::UnknownPage(page))?;
        self.active = Some(index);
        Ok(())
    }

    fn active_page(&self) -> Option<PageId> {
        self.active_page_ref().map(|page| page.id)
    }
}
