//! Sample content for running the host without real hardware

use pixmenu_kit::components::layout::{
    BoxModel, DrawingPanel, RootLayout, Stack, StackAlignment, TextPanel,
};
use pixmenu_kit::components::menu_item::MenuItem;
use pixmenu_kit::display::{Color, DisplaySurface, TextAlign};

use crate::config::Config;
use crate::host::NavigationEvent;

/// A thermostat-style settings menu
pub fn demo_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::number("Target", 21.5, 10.0, 30.0, 0.5).with_precision(1),
        MenuItem::select(
            "Mode",
            vec![
                "Auto".to_string(),
                "Heat".to_string(),
                "Cool".to_string(),
                "Off".to_string(),
            ],
        ),
        MenuItem::switch("Eco", false).with_immediate_edit(true),
        MenuItem::menu(
            "Display",
            vec![
                MenuItem::back("Back"),
                MenuItem::number("Contrast", 8.0, 0.0, 15.0, 1.0),
                MenuItem::switch("Invert", false).with_switch_texts("Yes", "No"),
            ],
        ),
        MenuItem::custom("Uptime", Some("3d 4h".to_string())),
        MenuItem::command("Restart", "restart"),
        MenuItem::label("pixmenu 0.1"),
    ]
}

/// Status page shown underneath the menu
pub fn home_layout(config: &Config) -> RootLayout {
    let theme = config.menu.theme();
    let width = config.display.width;
    let font = config.font.clone();

    let bar_height = font.glyph_height / 2;
    let gauge = DrawingPanel::new(width - 4, bar_height.max(2), move |display, bounds| {
        display.rectangle(bounds.x, bounds.y, bounds.width, bounds.height, theme.foreground);
        let filled = (bounds.width - 2) * 215 / 300;
        display.filled_rectangle(
            bounds.x + 1,
            bounds.y + 1,
            filled,
            bounds.height - 2,
            theme.foreground,
        );
    });

    RootLayout::new(
        Stack::vertical()
            .with_gap(2)
            .with_alignment(StackAlignment::Stretch)
            .with_box_model(BoxModel::new().with_border(1, theme.border).with_padding(1))
            .with_child(
                TextPanel::new("Living room")
                    .with_font(font.clone())
                    .with_color(theme.background)
                    .with_background(theme.foreground)
                    .with_align(TextAlign::TopCenter),
            )
            .with_child(
                TextPanel::new("21.5 C")
                    .with_font(font)
                    .with_color(theme.foreground),
            )
            .with_child(gauge),
    )
}

/// Input a user could plausibly produce, one event per tick
pub fn demo_script() -> Vec<NavigationEvent> {
    use NavigationEvent::*;

    vec![
        Show, Down, Down, Enter, // toggle Eco
        Down, Enter, Down, Enter, Right, Right, Enter, // contrast 10
        Back, Down, Down, Down, // scroll to the end
        Up, Up, Up, Up, Up, Up, Enter, Down, Enter, // target 22.0
        Hide,
    ]
}

/// Paint the home page on whatever page is active
pub fn draw_home(display: &mut dyn DisplaySurface, layout: &mut RootLayout) {
    display.clear();
    layout.render_to(display);
}
