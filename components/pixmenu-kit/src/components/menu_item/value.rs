use super::MenuItem;

/// Read-only view handed to a [`ValueFormatter`] for one measure or draw call
#[derive(Clone, Copy, Debug)]
pub struct MenuItemValueArguments<'a> {
    pub item: &'a MenuItem,
    pub is_item_selected: bool,
    pub is_menu_editing: bool,
}

impl<'a> MenuItemValueArguments<'a> {
    pub fn new(item: &'a MenuItem, is_item_selected: bool, is_menu_editing: bool) -> Self {
        Self {
            item,
            is_item_selected,
            is_menu_editing,
        }
    }
}

/// Turns an item's value into the suffix shown after its text
///
/// Any `Fn(&MenuItemValueArguments) -> String` is a formatter, so a closure
/// can replace [`DefaultValueFormatter`] without touching the renderer.
pub trait ValueFormatter {
    fn format(&self, args: &MenuItemValueArguments<'_>) -> String;
}

impl<F> ValueFormatter for F
where
    F: Fn(&MenuItemValueArguments<'_>) -> String,
{
    fn format(&self, args: &MenuItemValueArguments<'_>) -> String {
        self(args)
    }
}

/// `>value<` while the selected item is being edited, `(value)` otherwise
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultValueFormatter;

impl ValueFormatter for DefaultValueFormatter {
    fn format(&self, args: &MenuItemValueArguments<'_>) -> String {
        let value = args.item.value_text();
        if args.is_item_selected && args.is_menu_editing {
            format!(">{value}<")
        } else {
            format!("({value})")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_formatter_editing() {
        let item = MenuItem::number("Level", 5.0, 0.0, 10.0, 1.0);
        let formatter = DefaultValueFormatter;

        let editing = MenuItemValueArguments::new(&item, true, true);
        assert_eq!(formatter.format(&editing), ">5<");
    }

    #[test]
    fn test_default_formatter_not_editing() {
        let item = MenuItem::number("Level", 5.0, 0.0, 10.0, 1.0);
        let formatter = DefaultValueFormatter;

        for (selected, editing) in [(false, false), (true, false), (false, true)] {
            let args = MenuItemValueArguments::new(&item, selected, editing);
            assert_eq!(formatter.format(&args), "(5)");
        }
    }

    #[test]
    fn test_closure_formatter() {
        let item = MenuItem::switch("Fan", true);
        let formatter = |args: &MenuItemValueArguments<'_>| format!("= {}", args.item.value_text());

        let args = MenuItemValueArguments::new(&item, false, false);
        assert_eq!(formatter.format(&args), "= On");
    }
}
