pub mod layout;
pub mod menu;
pub mod menu_item;
