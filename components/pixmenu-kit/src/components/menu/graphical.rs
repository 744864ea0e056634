use tracing::{debug, error, info, warn};

use super::scroll::{ScrollDetector, ScrollPlan};
use super::state::{EnterOutcome, MenuMode, MenuSnapshot, MenuState};
use crate::common::{Dimension, Position};
use crate::components::menu_item::{
    DefaultValueFormatter, MenuItem, MenuItemRenderer, MenuItemStyle, ValueFormatter,
};
use crate::display::{DisplaySurface, PageId};

/// Vertical gap between rows
pub const DEFAULT_Y_PADDING: i32 = 2;

type RedrawCallback = Box<dyn FnMut()>;

/// Scrollable menu drawn on its own display page
///
/// Owns the menu tree and its navigation state. The display is borrowed for
/// each call, the menu never holds on to it; the page shown before the menu
/// is kept as a plain [`PageId`] and looked up again when the menu is hidden.
pub struct GraphicalDisplayMenu {
    state: MenuState,
    style: MenuItemStyle,
    formatter: Box<dyn ValueFormatter>,
    y_padding: i32,

    menu_page: Option<PageId>,
    previous_page: Option<PageId>,
    active: bool,

    redraw_callbacks: Vec<RedrawCallback>,
}

impl GraphicalDisplayMenu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            state: MenuState::new(items),
            style: MenuItemStyle::default(),
            formatter: Box::new(DefaultValueFormatter),
            y_padding: DEFAULT_Y_PADDING,
            menu_page: None,
            previous_page: None,
            active: false,
            redraw_callbacks: Vec::new(),
        }
    }

    // === Builder API ===

    pub fn with_style(mut self, style: MenuItemStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_formatter(mut self, formatter: impl ValueFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn with_y_padding(mut self, y_padding: i32) -> Self {
        self.y_padding = y_padding;
        self
    }

    pub fn with_mode(mut self, mode: MenuMode) -> Self {
        self.state.set_mode(mode);
        self
    }

    // === Getters ===

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn style(&self) -> &MenuItemStyle {
        &self.style
    }

    pub fn y_padding(&self) -> i32 {
        self.y_padding
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn menu_page(&self) -> Option<PageId> {
        self.menu_page
    }

    // === Lifecycle ===

    /// Allocate the page the menu is drawn on
    pub fn setup(&mut self, display: &mut dyn DisplaySurface) {
        let page = display.create_page();
        debug!(%page, "menu page created");
        self.menu_page = Some(page);
    }

    /// Switch to the menu page and draw it
    pub fn show(&mut self, display: &mut dyn DisplaySurface) {
        if !self.active {
            self.on_before_show(display);
            self.active = true;
        }
        self.draw(display);
        self.update();
    }

    /// Give the display back to whatever was shown before
    pub fn hide(&mut self, display: &mut dyn DisplaySurface) {
        if !self.active {
            return;
        }
        self.on_before_hide(display);
        self.active = false;
    }

    pub fn on_before_show(&mut self, display: &mut dyn DisplaySurface) {
        self.previous_page = display.active_page();

        match self.menu_page {
            Some(page) => {
                if let Err(err) = display.show_page(page) {
                    warn!(%err, "cannot switch to the menu page");
                }
            }
            None => warn!("menu shown before setup, drawing on the active page"),
        }
        display.clear();
    }

    pub fn on_before_hide(&mut self, display: &mut dyn DisplaySurface) {
        let Some(previous) = self.previous_page.take() else {
            return;
        };

        if let Err(err) = display.show_page(previous) {
            warn!(%err, "previous page is gone, leaving the menu page up");
        }
        display.clear();
        self.update();
    }

    /// Notify everyone waiting for a redraw
    pub fn update(&mut self) {
        for callback in self.redraw_callbacks.iter_mut() {
            callback();
        }
    }

    pub fn add_on_redraw_callback(&mut self, callback: impl FnMut() + 'static) {
        self.redraw_callbacks.push(Box::new(callback));
    }

    pub fn dump_config(&self) {
        info!("Graphical Display Menu");
        info!("Has Menu Page: {}", yes_no(self.menu_page.is_some()));
        info!("Font: {}", self.style.font.name);
        info!(
            "Mode: {}",
            match self.state.mode() {
                MenuMode::Rotary => "Rotary",
                MenuMode::Joystick => "Joystick",
            }
        );
        info!("Active: {}", yes_no(self.active));
        info!("Menu items:");
        for (index, item) in self.state.items().iter().enumerate() {
            info!(
                "  {}: {} (Type: {}, Immediate Edit: {})",
                index,
                item.text(),
                item.kind_name(),
                yes_no(item.immediate_edit)
            );
        }
    }

    // === Navigation ===

    pub fn up(&mut self) -> bool {
        let changed = self.state.up();
        self.redraw_if(changed)
    }

    pub fn down(&mut self) -> bool {
        let changed = self.state.down();
        self.redraw_if(changed)
    }

    pub fn left(&mut self) -> bool {
        let changed = self.state.left();
        self.redraw_if(changed)
    }

    pub fn right(&mut self) -> bool {
        let changed = self.state.right();
        self.redraw_if(changed)
    }

    pub fn back(&mut self) -> bool {
        let changed = self.state.back();
        self.redraw_if(changed)
    }

    pub fn enter(&mut self) -> EnterOutcome {
        let outcome = self.state.enter();
        self.redraw_if(outcome.needs_redraw());
        outcome
    }

    fn redraw_if(&mut self, changed: bool) -> bool {
        if changed && self.active {
            self.update();
        }
        changed
    }

    // === Rendering ===

    /// Draw the current state
    pub fn draw(&self, display: &mut dyn DisplaySurface) {
        self.draw_menu(display, self.state.snapshot());
    }

    /// Measure every row, work out the visible window and draw it
    pub fn draw_menu(&self, display: &mut dyn DisplaySurface, snapshot: MenuSnapshot) {
        let items = self.state.items();
        let renderer = self.renderer();
        let cursor = snapshot.cursor_index.min(items.len().saturating_sub(1));

        let mut detector = ScrollDetector::new(
            items.len(),
            cursor,
            display.height(),
            self.y_padding,
        );
        let mut dimensions = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let selected = index == cursor;
            let dimension = renderer.measure_item(&*display, item, selected, snapshot.editing);
            detector.observe(index, dimension);
            dimensions.push(dimension);
        }

        let plan: ScrollPlan = detector.finish(&dimensions);
        debug!(
            rows = items.len(),
            cursor,
            first = plan.first_index,
            last = plan.last_index,
            offset = plan.initial_y_offset,
            "drawing menu"
        );

        let mut y = plan.initial_y_offset;
        for index in plan.visible() {
            let dimension = dimensions[index];
            renderer.draw_item(
                display,
                &items[index],
                Position::new(0, y),
                dimension,
                index == cursor,
                snapshot.editing,
            );
            y += dimension.height + self.y_padding;
        }
    }

    pub fn measure_item(
        &self,
        display: &dyn DisplaySurface,
        item: &MenuItem,
        selected: bool,
        editing: bool,
    ) -> Dimension {
        self.renderer().measure_item(display, item, selected, editing)
    }

    pub fn draw_item(
        &self,
        display: &mut dyn DisplaySurface,
        item: &MenuItem,
        position: Position,
        measured: Dimension,
        selected: bool,
        editing: bool,
    ) {
        self.renderer()
            .draw_item(display, item, position, measured, selected, editing);
    }

    /// Fixed-row drawing from text menus; rows here have variable height
    pub fn draw_row(&self, _item: &MenuItem, row: usize, _selected: bool) {
        error!(row, "draw_row is not supported by the graphical menu, use draw_item");
    }

    fn renderer(&self) -> MenuItemRenderer<'_> {
        MenuItemRenderer::new(&self.style, &*self.formatter)
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "YES"
    } else {
        "NO"
    }
}
