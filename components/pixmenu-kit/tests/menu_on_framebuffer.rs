use pixmenu_kit::prelude::*;
use serde::Deserialize;

fn settings_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::number("Brightness", 3.0, 0.0, 5.0, 1.0),
        MenuItem::switch("Backlight", true),
        MenuItem::select(
            "Units",
            vec!["Metric".to_string(), "Imperial".to_string()],
        ),
        MenuItem::menu(
            "Network",
            vec![
                MenuItem::back("Back"),
                MenuItem::custom("Address", Some("10.0.0.7".to_string())),
            ],
        ),
        MenuItem::command("Restart", "restart"),
        MenuItem::label("Firmware 1.2"),
    ]
}

/// Top of the printed row for `text`, if it was drawn
fn row_top(fb: &Framebuffer, prefix: &str) -> Option<i32> {
    fb.printed()
        .iter()
        .find(|printed| printed.text.starts_with(prefix))
        .map(|printed| printed.y)
}

#[test]
fn test_selection_stays_on_screen_while_scrolling() {
    // 8px glyphs, 2px padding: four rows fit on a 40px panel
    let mut fb = Framebuffer::new(96, 40);
    let mut menu = GraphicalDisplayMenu::new(settings_menu());
    menu.setup(&mut fb);
    menu.show(&mut fb);

    let items: Vec<String> = menu
        .state()
        .items()
        .iter()
        .map(|item| item.text().to_string())
        .collect();

    for index in 0..items.len() {
        let top = row_top(&fb, &items[index]).expect("selected row is drawn");
        assert!(top >= 0 && top + 8 <= fb.height(), "row {index} at {top}");

        menu.down();
        fb.clear();
        menu.draw(&mut fb);
    }

    // the cursor stops on the last row
    assert_eq!(menu.state().cursor_index(), items.len() - 1);
    assert!(row_top(&fb, "Firmware").is_some());
    assert!(row_top(&fb, "Brightness").is_none());
}

#[test]
fn test_editing_and_submenus_show_up_in_the_drawn_labels() {
    let mut fb = Framebuffer::new(128, 64);
    let mut menu = GraphicalDisplayMenu::new(settings_menu());
    menu.setup(&mut fb);
    menu.show(&mut fb);
    assert_eq!(fb.printed()[0].text, "Brightness (3)");

    menu.enter();
    menu.down();
    fb.clear();
    menu.draw(&mut fb);
    assert_eq!(fb.printed()[0].text, "Brightness >4<");

    menu.back();
    for _ in 0..3 {
        menu.down();
    }
    assert_eq!(menu.enter(), EnterOutcome::Redraw);
    fb.clear();
    menu.draw(&mut fb);

    let texts: Vec<&str> = fb.printed().iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, vec!["Back", "Address (10.0.0.7)"]);

    assert_eq!(menu.enter(), EnterOutcome::Redraw);
    menu.down();
    assert_eq!(menu.enter(), EnterOutcome::Command("restart".to_string()));
}

#[test]
fn test_layout_tree_draws_framed_header() {
    let mut fb = Framebuffer::new(12, 6);
    let mut root = RootLayout::new(
        Stack::vertical()
            .with_box_model(BoxModel::new().with_border(1, Color::ON))
            .with_child(DrawingPanel::new(10, 4, |display, bounds| {
                display.filled_rectangle(bounds.x + 4, bounds.y + 1, 2, 2, Color::ON);
            })),
    );

    root.render_to(&mut fb);

    let expected = "\
############
#..........#
#....##....#
#....##....#
#..........#
############
";
    assert_eq!(fb.to_ascii(), expected);
}

#[derive(Debug, Deserialize)]
struct Panel {
    mode: MenuMode,
    theme: ThemeScheme,
    foreground: Color,
    font: Font,
}

#[test]
fn test_menu_settings_deserialize_from_toml() {
    let panel: Panel = toml::from_str(
        r##"
        mode = "joystick"
        theme = "light"
        foreground = "#FF8000"

        [font]
        name = "6x10"
        glyph_width = 6
        glyph_height = 10
        "##,
    )
    .unwrap();

    assert_eq!(panel.mode, MenuMode::Joystick);
    assert_eq!(Theme::for_scheme(panel.theme), Theme::light());
    assert_eq!(panel.foreground, Color::from_rgb(0xFF, 0x80, 0x00));
    assert_eq!(panel.font.glyph_height, 10);
    assert_eq!(panel.font.advance(), 7);
}
