/// Type of menu item
#[derive(Clone, Debug, PartialEq)]
pub enum MenuItemKind {
    /// Static text, not actionable
    Label,
    /// Opens a nested menu
    Menu { items: Vec<MenuItem> },
    /// Returns to the parent menu
    Back,
    /// Pick one of several options
    Select { options: Vec<String>, index: usize },
    /// Numeric value edited in steps
    Number {
        value: f32,
        min: f32,
        max: f32,
        step: f32,
        /// Decimal places shown in the value text
        precision: usize,
    },
    /// On/off toggle
    Switch {
        state: bool,
        on_text: String,
        off_text: String,
    },
    /// Triggers an action handled by the host
    Command { action: String },
    /// Free-form item with an optional value text supplied by the host
    Custom { value: Option<String> },
}

/// Pure state/data for a menu row
///
/// No rendering, no I/O, just data.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub text: String,
    pub kind: MenuItemKind,
    /// Activating the item edits its value at once instead of entering edit mode
    pub immediate_edit: bool,
}

impl MenuItem {
    pub fn new(text: impl Into<String>, kind: MenuItemKind) -> Self {
        Self {
            text: text.into(),
            kind,
            immediate_edit: false,
        }
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::new(text, MenuItemKind::Label)
    }

    pub fn menu(text: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self::new(text, MenuItemKind::Menu { items })
    }

    pub fn back(text: impl Into<String>) -> Self {
        Self::new(text, MenuItemKind::Back)
    }

    pub fn select(text: impl Into<String>, options: Vec<String>) -> Self {
        Self::new(text, MenuItemKind::Select { options, index: 0 })
    }

    /// A swapped range is put back in order
    pub fn number(text: impl Into<String>, value: f32, min: f32, max: f32, step: f32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self::new(
            text,
            MenuItemKind::Number {
                // f32::clamp panics on NaN bounds
                value: value.max(min).min(max),
                min,
                max,
                step,
                precision: 0,
            },
        )
    }

    pub fn switch(text: impl Into<String>, state: bool) -> Self {
        Self::new(
            text,
            MenuItemKind::Switch {
                state,
                on_text: "On".to_string(),
                off_text: "Off".to_string(),
            },
        )
    }

    pub fn command(text: impl Into<String>, action: impl Into<String>) -> Self {
        Self::new(
            text,
            MenuItemKind::Command {
                action: action.into(),
            },
        )
    }

    pub fn custom(text: impl Into<String>, value: Option<String>) -> Self {
        Self::new(text, MenuItemKind::Custom { value })
    }

    // === Builder API ===

    pub fn with_immediate_edit(mut self, immediate_edit: bool) -> Self {
        self.immediate_edit = immediate_edit;
        self
    }

    pub fn with_precision(mut self, decimals: usize) -> Self {
        if let MenuItemKind::Number { precision, .. } = &mut self.kind {
            *precision = decimals;
        }
        self
    }

    pub fn with_selected_option(mut self, selected: usize) -> Self {
        if let MenuItemKind::Select { options, index } = &mut self.kind {
            *index = selected.min(options.len().saturating_sub(1));
        }
        self
    }

    pub fn with_switch_texts(mut self, on: impl Into<String>, off: impl Into<String>) -> Self {
        if let MenuItemKind::Switch {
            on_text, off_text, ..
        } = &mut self.kind
        {
            *on_text = on.into();
            *off_text = off.into();
        }
        self
    }

    // === Getters ===

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> &MenuItemKind {
        &self.kind
    }

    /// Stable name of the kind, for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            MenuItemKind::Label => "label",
            MenuItemKind::Menu { .. } => "menu",
            MenuItemKind::Back => "back",
            MenuItemKind::Select { .. } => "select",
            MenuItemKind::Number { .. } => "number",
            MenuItemKind::Switch { .. } => "switch",
            MenuItemKind::Command { .. } => "command",
            MenuItemKind::Custom { .. } => "custom",
        }
    }

    pub fn has_value(&self) -> bool {
        match &self.kind {
            MenuItemKind::Select { .. }
            | MenuItemKind::Number { .. }
            | MenuItemKind::Switch { .. } => true,
            MenuItemKind::Custom { value } => value.is_some(),
            _ => false,
        }
    }

    /// Whether the value can be changed from the menu
    pub fn is_editable(&self) -> bool {
        matches!(
            self.kind,
            MenuItemKind::Select { .. } | MenuItemKind::Number { .. } | MenuItemKind::Switch { .. }
        )
    }

    /// Raw value string; empty for items without a value
    pub fn value_text(&self) -> String {
        match &self.kind {
            MenuItemKind::Select { options, index } => {
                options.get(*index).cloned().unwrap_or_default()
            }
            MenuItemKind::Number {
                value, precision, ..
            } => format!("{:.*}", *precision, value),
            MenuItemKind::Switch {
                state,
                on_text,
                off_text,
            } => {
                if *state {
                    on_text.clone()
                } else {
                    off_text.clone()
                }
            }
            MenuItemKind::Custom { value } => value.clone().unwrap_or_default(),
            _ => String::new(),
        }
    }

    pub fn submenu_items(&self) -> Option<&[MenuItem]> {
        match &self.kind {
            MenuItemKind::Menu { items } => Some(items),
            _ => None,
        }
    }

    pub(crate) fn submenu_items_mut(&mut self) -> Option<&mut Vec<MenuItem>> {
        match &mut self.kind {
            MenuItemKind::Menu { items } => Some(items),
            _ => None,
        }
    }

    pub fn action(&self) -> Option<&str> {
        match &self.kind {
            MenuItemKind::Command { action } => Some(action),
            _ => None,
        }
    }

    // === Editing ===

    /// Step the value forward. Returns whether it changed.
    pub fn increase(&mut self) -> bool {
        match &mut self.kind {
            MenuItemKind::Select { options, index } => {
                if options.is_empty() {
                    return false;
                }
                let next = (*index + 1) % options.len();
                let changed = next != *index;
                *index = next;
                changed
            }
            MenuItemKind::Number {
                value, max, step, ..
            } => {
                let next = (*value + *step).min(*max);
                let changed = next != *value;
                *value = next;
                changed
            }
            MenuItemKind::Switch { state, .. } => {
                *state = !*state;
                true
            }
            _ => false,
        }
    }

    /// Step the value backward. Returns whether it changed.
    pub fn decrease(&mut self) -> bool {
        match &mut self.kind {
            MenuItemKind::Select { options, index } => {
                if options.is_empty() {
                    return false;
                }
                let next = if *index == 0 {
                    options.len() - 1
                } else {
                    *index - 1
                };
                let changed = next != *index;
                *index = next;
                changed
            }
            MenuItemKind::Number {
                value, min, step, ..
            } => {
                let next = (*value - *step).max(*min);
                let changed = next != *value;
                *value = next;
                changed
            }
            MenuItemKind::Switch { state, .. } => {
                *state = !*state;
                true
            }
            _ => false,
        }
    }
}
