use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::components::menu_item::{MenuItem, MenuItemKind};

/// How up/down behave while a value is being edited
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuMode {
    /// Turning the encoder edits the value
    #[default]
    Rotary,
    /// Up/down always move the cursor, left/right edit
    Joystick,
}

/// What the render pass reads from the menu state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuSnapshot {
    pub cursor_index: usize,
    pub editing: bool,
}

/// Result of activating the item under the cursor
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnterOutcome {
    /// Nothing to do
    Ignored,
    /// State changed, the menu should be drawn again
    Redraw,
    /// A command item was activated; the host handles the action
    Command(String),
}

impl EnterOutcome {
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, EnterOutcome::Ignored)
    }
}

/// State for a menu tree
///
/// Pure state management - no rendering, no surface logic.
/// Handles the cursor, edit mode and submenu navigation.
#[derive(Clone, Debug)]
pub struct MenuState {
    /// Top level items
    root: Vec<MenuItem>,

    /// Index of each open submenu item in its parent, outermost first
    path: Vec<usize>,

    /// Cursor in the currently displayed menu
    cursor: usize,

    editing: bool,

    mode: MenuMode,
}

impl MenuState {
    pub fn new(root: Vec<MenuItem>) -> Self {
        Self {
            root,
            path: Vec::new(),
            cursor: 0,
            editing: false,
            mode: MenuMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: MenuMode) -> Self {
        self.mode = mode;
        self
    }

    // === Getters ===

    /// Items of the currently displayed menu
    pub fn items(&self) -> &[MenuItem] {
        let mut items = self.root.as_slice();
        for &index in &self.path {
            match items.get(index).and_then(|item| item.submenu_items()) {
                Some(children) => items = children,
                None => return &[],
            }
        }
        items
    }

    /// Top level items, regardless of the open submenu
    pub fn root_items(&self) -> &[MenuItem] {
        &self.root
    }

    pub fn cursor_index(&self) -> usize {
        self.cursor
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// 0 for the top level menu
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn mode(&self) -> MenuMode {
        self.mode
    }

    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.items().get(self.cursor)
    }

    /// Cursor clamped to the item count, taken once per render pass
    pub fn snapshot(&self) -> MenuSnapshot {
        let count = self.items().len();
        MenuSnapshot {
            cursor_index: self.cursor.min(count.saturating_sub(1)),
            editing: self.editing,
        }
    }

    // === State Mutations ===

    pub fn set_mode(&mut self, mode: MenuMode) {
        self.mode = mode;
    }

    /// Replace the whole tree and return to the top
    pub fn set_items(&mut self, root: Vec<MenuItem>) {
        self.root = root;
        self.reset();
    }

    /// Back to the first top level item, out of edit mode
    pub fn reset(&mut self) {
        self.path.clear();
        self.cursor = 0;
        self.editing = false;
    }

    // === Navigation Logic ===

    /// Returns whether a redraw is needed
    pub fn up(&mut self) -> bool {
        if self.editing && self.mode == MenuMode::Rotary {
            return self.edit_selected(false);
        }
        if self.cursor > 0 {
            self.cursor -= 1;
            return true;
        }
        false
    }

    /// Returns whether a redraw is needed
    pub fn down(&mut self) -> bool {
        if self.editing && self.mode == MenuMode::Rotary {
            return self.edit_selected(true);
        }
        if self.cursor + 1 < self.items().len() {
            self.cursor += 1;
            return true;
        }
        false
    }

    pub fn left(&mut self) -> bool {
        self.editing && self.edit_selected(false)
    }

    pub fn right(&mut self) -> bool {
        self.editing && self.edit_selected(true)
    }

    /// Activate the item under the cursor
    pub fn enter(&mut self) -> EnterOutcome {
        if self.editing {
            self.editing = false;
            return EnterOutcome::Redraw;
        }

        let Some(item) = self.selected_item() else {
            return EnterOutcome::Ignored;
        };

        if item.submenu_items().is_some() {
            debug!(text = item.text(), depth = self.depth() + 1, "entering submenu");
            self.path.push(self.cursor);
            self.cursor = 0;
            return EnterOutcome::Redraw;
        }

        if let Some(action) = item.action() {
            return EnterOutcome::Command(action.to_string());
        }

        if matches!(item.kind(), MenuItemKind::Back) {
            return if self.leave_submenu() {
                EnterOutcome::Redraw
            } else {
                EnterOutcome::Ignored
            };
        }

        if item.is_editable() {
            if item.immediate_edit {
                return if self.edit_selected(true) {
                    EnterOutcome::Redraw
                } else {
                    EnterOutcome::Ignored
                };
            }
            self.editing = true;
            return EnterOutcome::Redraw;
        }

        EnterOutcome::Ignored
    }

    /// Leave edit mode, or the current submenu
    pub fn back(&mut self) -> bool {
        if self.editing {
            self.editing = false;
            return true;
        }
        self.leave_submenu()
    }

    fn leave_submenu(&mut self) -> bool {
        match self.path.pop() {
            Some(parent_cursor) => {
                self.cursor = parent_cursor;
                debug!(depth = self.depth(), "left submenu");
                true
            }
            None => false,
        }
    }

    // === Editing ===

    fn items_mut(&mut self) -> &mut [MenuItem] {
        let mut items = self.root.as_mut_slice();
        for &index in &self.path {
            match items.get_mut(index).and_then(|item| item.submenu_items_mut()) {
                Some(children) => items = children.as_mut_slice(),
                None => return &mut [],
            }
        }
        items
    }

    fn edit_selected(&mut self, forward: bool) -> bool {
        let cursor = self.cursor;
        match self.items_mut().get_mut(cursor) {
            Some(item) if forward => item.increase(),
            Some(item) => item.decrease(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<MenuItem> {
        vec![
            MenuItem::number("Brightness", 5.0, 0.0, 10.0, 1.0),
            MenuItem::menu(
                "Settings",
                vec![
                    MenuItem::back("Back"),
                    MenuItem::switch("Fan", false),
                    MenuItem::switch("Light", false).with_immediate_edit(true),
                ],
            ),
            MenuItem::command("Reboot", "reboot"),
            MenuItem::label("v1.0"),
        ]
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut state = MenuState::new(tree());

        assert!(!state.up());
        assert_eq!(state.cursor_index(), 0);

        assert!(state.down());
        assert!(state.down());
        assert!(state.down());
        assert!(!state.down());
        assert_eq!(state.cursor_index(), 3);
    }

    #[test]
    fn test_enter_and_leave_submenu() {
        let mut state = MenuState::new(tree());
        state.down();

        assert_eq!(state.enter(), EnterOutcome::Redraw);
        assert_eq!(state.depth(), 1);
        assert_eq!(state.cursor_index(), 0);
        assert_eq!(state.items()[1].text(), "Fan");

        // "Back" returns to the parent with its cursor restored
        assert_eq!(state.enter(), EnterOutcome::Redraw);
        assert_eq!(state.depth(), 0);
        assert_eq!(state.cursor_index(), 1);
        assert_eq!(state.items().len(), 4);
    }

    #[test]
    fn test_back_at_top_level_does_nothing() {
        let mut state = MenuState::new(tree());
        assert!(!state.back());
    }

    #[test]
    fn test_command_returns_action() {
        let mut state = MenuState::new(tree());
        state.down();
        state.down();

        assert_eq!(state.enter(), EnterOutcome::Command("reboot".to_string()));
        assert!(!state.is_editing());
    }

    #[test]
    fn test_label_is_ignored() {
        let mut state = MenuState::new(tree());
        for _ in 0..3 {
            state.down();
        }

        let outcome = state.enter();
        assert_eq!(outcome, EnterOutcome::Ignored);
        assert!(!outcome.needs_redraw());
    }

    #[test]
    fn test_rotary_editing() {
        let mut state = MenuState::new(tree());

        assert_eq!(state.enter(), EnterOutcome::Redraw);
        assert!(state.is_editing());

        // up/down change the value instead of moving
        assert!(state.down());
        assert!(state.down());
        assert!(state.up());
        assert_eq!(state.cursor_index(), 0);
        assert_eq!(state.items()[0].value_text(), "6");

        // enter again leaves edit mode
        state.enter();
        assert!(!state.is_editing());
        assert!(state.down());
        assert_eq!(state.cursor_index(), 1);
    }

    #[test]
    fn test_joystick_editing() {
        let mut state = MenuState::new(tree()).with_mode(MenuMode::Joystick);
        state.enter();

        assert!(state.right());
        assert_eq!(state.items()[0].value_text(), "6");
        assert!(state.left());
        assert!(state.left());
        assert_eq!(state.items()[0].value_text(), "4");

        // up/down still move the cursor
        assert!(state.down());
        assert_eq!(state.cursor_index(), 1);
    }

    #[test]
    fn test_left_right_need_edit_mode() {
        let mut state = MenuState::new(tree());

        assert!(!state.right());
        assert_eq!(state.items()[0].value_text(), "5");
    }

    #[test]
    fn test_back_leaves_edit_mode_first() {
        let mut state = MenuState::new(tree());
        state.down();
        state.enter();
        state.down();
        state.enter();
        assert!(state.is_editing());

        assert!(state.back());
        assert!(!state.is_editing());
        assert_eq!(state.depth(), 1);

        assert!(state.back());
        assert_eq!(state.depth(), 0);
    }

    #[test]
    fn test_immediate_edit_applies_at_once() {
        let mut state = MenuState::new(tree());
        state.down();
        state.enter();
        state.down();
        state.down();

        assert_eq!(state.enter(), EnterOutcome::Redraw);
        assert!(!state.is_editing());
        assert_eq!(state.items()[2].value_text(), "On");

        // the change is kept in the tree
        state.back();
        assert_eq!(
            state.root_items()[1].submenu_items().unwrap()[2].value_text(),
            "On"
        );
    }

    #[test]
    fn test_snapshot_clamps_cursor() {
        let mut state = MenuState::new(tree());
        for _ in 0..3 {
            state.down();
        }
        state.set_items(vec![MenuItem::label("Only")]);
        assert_eq!(state.snapshot().cursor_index, 0);

        let mut state = MenuState::new(tree());
        state.enter();
        assert_eq!(
            state.snapshot(),
            MenuSnapshot {
                cursor_index: 0,
                editing: true
            }
        );

        assert_eq!(MenuState::new(Vec::new()).snapshot(), MenuSnapshot::default());
    }
}
