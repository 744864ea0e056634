use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use pixmenu_kit::components::menu::{EnterOutcome, GraphicalDisplayMenu};
use pixmenu_kit::display::DisplaySurface;
use tracing::{debug, info};

/// Already decoded input, one step of menu navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Back,
    Show,
    Hide,
}

/// Drives a menu on a display from a polling loop
///
/// Input is queued with [`push_event`](Self::push_event) and applied on the
/// next [`tick`](Self::tick), which also performs at most one render pass.
pub struct MenuHost<D: DisplaySurface> {
    display: D,
    menu: GraphicalDisplayMenu,
    events: VecDeque<NavigationEvent>,
    redraw_requested: Rc<Cell<bool>>,
    commands: Vec<String>,
    frames: u64,
}

impl<D: DisplaySurface> MenuHost<D> {
    pub fn new(mut display: D, mut menu: GraphicalDisplayMenu) -> Self {
        menu.setup(&mut display);

        let redraw_requested = Rc::new(Cell::new(false));
        let flag = redraw_requested.clone();
        menu.add_on_redraw_callback(move || flag.set(true));

        Self {
            display,
            menu,
            events: VecDeque::new(),
            redraw_requested,
            commands: Vec::new(),
            frames: 0,
        }
    }

    // === Getters ===

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Mutable access for drawing other pages, e.g. the one under the menu
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn menu(&self) -> &GraphicalDisplayMenu {
        &self.menu
    }

    /// Render passes performed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Command actions activated since the last call
    pub fn take_commands(&mut self) -> Vec<String> {
        std::mem::take(&mut self.commands)
    }

    pub fn push_event(&mut self, event: NavigationEvent) {
        self.events.push_back(event);
    }

    /// Apply queued input, then redraw if anything asked for it.
    ///
    /// Returns whether a frame was drawn.
    pub fn tick(&mut self) -> bool {
        while let Some(event) = self.events.pop_front() {
            self.apply(event);
        }

        let requested = self.redraw_requested.replace(false);
        if !requested || !self.menu.is_active() {
            return false;
        }

        self.display.clear();
        self.menu.draw(&mut self.display);
        self.frames += 1;
        debug!(frame = self.frames, "menu frame drawn");
        true
    }

    fn apply(&mut self, event: NavigationEvent) {
        debug!(?event, "navigation");
        match event {
            NavigationEvent::Up => {
                self.menu.up();
            }
            NavigationEvent::Down => {
                self.menu.down();
            }
            NavigationEvent::Left => {
                self.menu.left();
            }
            NavigationEvent::Right => {
                self.menu.right();
            }
            NavigationEvent::Back => {
                self.menu.back();
            }
            NavigationEvent::Enter => {
                if let EnterOutcome::Command(action) = self.menu.enter() {
                    info!(%action, "menu command");
                    self.commands.push(action);
                }
            }
            NavigationEvent::Show => self.menu.show(&mut self.display),
            NavigationEvent::Hide => self.menu.hide(&mut self.display),
        }
    }

    /// Poll every `period` until `ticks` have passed (0 runs until Ctrl-C).
    ///
    /// One scripted event is fed per tick; `on_frame` sees the display after
    /// every drawn frame.
    pub async fn run<I, F>(&mut self, period: Duration, ticks: u64, script: I, mut on_frame: F)
    where
        I: IntoIterator<Item = NavigationEvent>,
        F: FnMut(&D),
    {
        let mut interval = tokio::time::interval(period);
        let mut script = script.into_iter();
        let mut tick = 0;

        while ticks == 0 || tick < ticks {
            tokio::select! {
                _ = interval.tick() => {}
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupted, stopping menu host");
                    break;
                }
            }

            if let Some(event) = script.next() {
                self.push_event(event);
            }
            if self.tick() {
                on_frame(&self.display);
            }
            tick += 1;
        }

        info!(ticks = tick, frames = self.frames, "menu host stopped");
    }
}
