use crossterm::event::KeyCode;
use taskdeck::config::Config;
use taskdeck::router::Route;
use taskdeck::ui::core::{Component, ShortcutDispatcher};
use taskdeck::ui::pages::{self, Page, RelaxPage, SvgEditorPage, WorkPage};

use super::helpers::{buffer_text, key, test_terminal};

fn render(page: &mut dyn Page) -> String {
    let mut terminal = test_terminal(100, 30);
    terminal
        .draw(|f| {
            let area = f.area();
            page.try_render(f, area).unwrap();
        })
        .unwrap();
    buffer_text(terminal.backend().buffer())
}

#[test]
fn test_every_route_builds_and_renders() {
    let config = Config::default();
    for route in Route::ALL {
        let mut page = pages::build(route, route.path(), &config).unwrap();
        assert_eq!(page.route(), route);
        let screen = render(page.as_mut());
        assert!(!screen.trim().is_empty(), "{} rendered nothing", route);
    }
}

#[test]
fn test_not_found_names_the_path() {
    let mut page = pages::build(Route::NotFound, "/nowhere", &Config::default()).unwrap();
    let screen = render(page.as_mut());
    assert!(screen.contains("404"));
    assert!(screen.contains("Nothing lives at /nowhere"));
}

#[test]
fn test_settings_show_the_active_config() {
    let mut config = Config::default();
    config.user.id = "ada".to_string();
    let mut page = pages::build(Route::Setting, "/setting", &config).unwrap();
    let screen = render(page.as_mut());
    assert!(screen.contains("Active configuration"));
    assert!(screen.contains("Configuration is valid"));
    assert!(screen.contains("id = \"ada\""));
}

#[test]
fn test_work_page_split() {
    let mut page = WorkPage::new(&Config::default()).unwrap();
    let initial = page.split();

    page.handle_key_events(key(KeyCode::Char('>')));
    assert_eq!(page.split(), initial + 5);

    for _ in 0..20 {
        page.handle_key_events(key(KeyCode::Char('<')));
    }
    assert_eq!(page.split(), 20);

    let screen = render(&mut page);
    assert!(screen.contains("Widget 1"));
    assert!(screen.contains("Widget 2"));
    assert!(screen.contains("Calendar view / Widget View"));
}

#[test]
fn test_work_page_binds_task_shortcuts() {
    let mut page = WorkPage::new(&Config::default()).unwrap();
    let mut shortcuts = ShortcutDispatcher::default();

    page.mount(&mut shortcuts);
    assert_eq!(shortcuts.registration_count(), 2);

    page.unmount(&mut shortcuts);
    assert_eq!(shortcuts.registration_count(), 0);
}

#[test]
fn test_svg_editor_moves_the_selected_shape() {
    let mut page = SvgEditorPage::new();
    let before = page.shapes()[0];

    page.handle_key_events(key(KeyCode::Right));
    assert_eq!(page.shapes()[0].x, before.x + 2.0);

    // Clamped to the canvas
    for _ in 0..100 {
        page.handle_key_events(key(KeyCode::Down));
    }
    assert_eq!(page.shapes()[0].y, 0.0);

    page.handle_key_events(key(KeyCode::Tab));
    assert_eq!(page.selected(), 1);
    page.handle_key_events(key(KeyCode::Tab));
    assert_eq!(page.selected(), 0);
}

#[test]
fn test_svg_editor_markup() {
    let mut page = SvgEditorPage::new();
    page.handle_key_events(key(KeyCode::Tab));
    page.handle_key_events(key(KeyCode::Char('+')));

    assert_eq!(page.shapes()[1].to_svg(), "<circle cx=\"70\" cy=\"60\" r=\"13\" />");
    assert_eq!(
        page.shapes()[0].to_svg(),
        "<rect x=\"10\" y=\"10\" width=\"30\" height=\"20\" />"
    );
    let screen = render(&mut page);
    assert!(screen.contains("<svg viewBox=\"0 0 100 100\">"));
}

#[test]
fn test_relax_rotates_suggestions() {
    let mut page = RelaxPage::new();
    let first = page.suggestion();

    page.handle_key_events(key(KeyCode::Char('n')));
    assert_ne!(page.suggestion(), first);

    let second = page.suggestion();
    for _ in 0..relax_ticks() {
        page.on_tick();
    }
    assert_ne!(page.suggestion(), second);
}

fn relax_ticks() -> u32 {
    taskdeck::ui::pages::relax::TICKS_PER_SUGGESTION
}
