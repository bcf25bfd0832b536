use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};
use taskdeck::config::Config;
use taskdeck::logger::Logger;
use taskdeck::router::Route;
use taskdeck::ui::core::{Action, Component, DialogType, EventType};
use taskdeck::ui::pages::Page;
use taskdeck::ui::AppComponent;

use super::helpers::{buffer_text, ctrl, key, test_terminal};

fn app() -> AppComponent {
    AppComponent::new(Config::default(), Logger::new())
}

fn app_at(path: &str) -> AppComponent {
    let mut config = Config::default();
    config.ui.start_path = path.to_string();
    AppComponent::new(config, Logger::new())
}

fn render(app: &mut AppComponent) -> String {
    let mut terminal = test_terminal(120, 40);
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    buffer_text(terminal.backend().buffer())
}

fn type_keys(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_starts_on_the_configured_path() {
    let mut app = app();
    assert_eq!(app.current_path(), "/");
    assert_eq!(app.current_route(), Route::Home);
    assert_eq!(app.sidebar().active(), Route::Home);

    let screen = render(&mut app);
    assert!(screen.contains("Navigation"));
    assert!(screen.contains("Welcome to taskdeck"));
    assert!(screen.contains("Setting"));
}

#[test]
fn test_navigate_normalizes_paths() {
    let mut app = app();
    app.navigate("task/");
    assert_eq!(app.current_path(), "/task");
    assert_eq!(app.current_route(), Route::Task);
    assert_eq!(app.sidebar().active(), Route::Task);

    let screen = render(&mut app);
    assert!(screen.contains("Design Homepage"));
    assert!(screen.contains("Due: Wed Jul 10 2024 | Priority: high"));
    assert!(screen.contains(" /task "));
}

#[test]
fn test_unknown_path_renders_not_found() {
    let mut app = app_at("/nope");
    assert_eq!(app.current_route(), Route::NotFound);
    assert!(app.page_error().is_none());

    let screen = render(&mut app);
    assert!(screen.contains("Nothing lives at /nope"));
}

#[test]
fn test_navigation_unbinds_page_shortcuts() {
    let mut app = app_at("/task");
    assert_eq!(app.shortcuts().registration_count(), 2);

    app.navigate("/work");
    assert_eq!(app.shortcuts().registration_count(), 2);

    app.navigate("/relax");
    assert_eq!(app.shortcuts().registration_count(), 0);
}

#[test]
fn test_touch_mode_binds_no_shortcuts() {
    let mut config = Config::default();
    config.ui.touch_mode = true;
    config.ui.start_path = "/task".to_string();
    let mut app = AppComponent::new(config, Logger::new());

    assert_eq!(app.shortcuts().registration_count(), 0);
    app.handle_key(ctrl('e'));
    assert!(!app.page().captures_input());
}

#[test]
fn test_sidebar_keys_step_through_pages() {
    let mut app = app();
    app.handle_key(key(KeyCode::Char('J')));
    assert_eq!(app.current_path(), "/task");

    app.handle_key(key(KeyCode::Char('K')));
    app.handle_key(key(KeyCode::Char('K')));
    assert_eq!(app.current_path(), "/setting");
}

#[test]
fn test_go_to_path_dialog() {
    let mut app = app();
    app.handle_key(key(KeyCode::Char(':')));
    assert_eq!(app.dialog().dialog_type, Some(DialogType::GoToPath));

    type_keys(&mut app, "work");
    assert_eq!(app.dialog().input(), "work");
    app.handle_key(key(KeyCode::Enter));

    assert!(!app.dialog().is_visible());
    assert_eq!(app.current_route(), Route::Work);
}

#[test]
fn test_help_and_logs_dialogs() {
    let mut app = app();
    app.handle_key(key(KeyCode::Char('?')));
    assert_eq!(app.dialog().dialog_type, Some(DialogType::Help));
    // Keys go to the dialog, not the shell
    app.handle_key(key(KeyCode::Char('J')));
    assert_eq!(app.current_route(), Route::Home);
    app.handle_key(key(KeyCode::Esc));
    assert!(!app.dialog().is_visible());

    app.handle_key(key(KeyCode::Char('G')));
    assert_eq!(app.dialog().dialog_type, Some(DialogType::Logs));
    app.handle_key(key(KeyCode::Char('G')));
    assert!(!app.dialog().is_visible());
}

#[test]
fn test_ctrl_b_collapses_the_sidebar() {
    let mut app = app();
    assert!(!app.sidebar().is_collapsed());
    app.handle_key(ctrl('b'));
    assert!(app.sidebar().is_collapsed());
    assert!(!render(&mut app).contains("Navigation"));
}

#[test]
fn test_shortcut_opens_the_editor_which_captures_keys() {
    let mut app = app_at("/task");
    app.handle_key(ctrl('e'));
    assert!(app.page().captures_input());
    assert!(render(&mut app).contains("Edit: Design Homepage"));

    // Global keys are plain text while the editor is open
    type_keys(&mut app, "q?");
    assert!(!app.should_quit());
    assert!(!app.dialog().is_visible());

    // Nothing is bound while the editor is up
    assert_eq!(app.shortcuts().registration_count(), 0);

    app.handle_key(key(KeyCode::Esc));
    app.handle_key(key(KeyCode::Char('y')));
    assert!(!app.page().captures_input());
    assert_eq!(app.shortcuts().registration_count(), 2);

    app.handle_key(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_c_always_quits() {
    let mut app = app_at("/task");
    app.handle_key(key(KeyCode::Char('a')));
    assert!(app.page().captures_input());

    app.handle_key(ctrl('c'));
    assert!(app.should_quit());
}

#[test]
fn test_shortcut_follows_focus() {
    let mut app = app_at("/work");
    app.handle_key(key(KeyCode::Char('j')));
    app.handle_key(ctrl('d'));

    let screen = render(&mut app);
    assert!(screen.contains("Confirm Delete"));
    assert!(screen.contains("Implement Authentication"));
}

#[test]
fn test_ticks_reach_the_page() {
    let mut app = app_at("/relax");
    let before = render(&mut app);
    for _ in 0..300 {
        app.handle_event(EventType::Tick);
    }
    assert_ne!(render(&mut app), before);
}

#[test]
fn test_logs_collect_navigation() {
    let logger = Logger::new();
    let mut app = AppComponent::new(Config::default(), logger.clone());
    app.handle_key(key(KeyCode::Char('G')));

    // The dialog reads the shared buffer; nothing is installed globally here
    logger.log("Navigated to /work".to_string());
    assert!(render(&mut app).contains("Navigated to /work"));
}

/// Page whose rendering always fails
struct BrokenPage;

impl Component for BrokenPage {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, _f: &mut Frame, _rect: Rect) {}
}

impl Page for BrokenPage {
    fn route(&self) -> Route {
        Route::Work
    }

    fn try_render(&mut self, _f: &mut Frame, _rect: Rect) -> anyhow::Result<()> {
        anyhow::bail!("chart data unavailable")
    }
}

#[test]
fn test_render_failure_shows_error_view_until_navigation() {
    let mut app = app();
    app.mount_page("/work", Box::new(BrokenPage));
    assert_eq!(app.current_path(), "/work");
    assert!(app.page_error().is_none());

    let screen = render(&mut app);
    assert!(screen.contains("Something went wrong while showing this page."));
    assert!(screen.contains("chart data unavailable"));
    assert!(screen.contains(" Work "));
    assert_eq!(app.page_error(), Some("chart data unavailable"));

    // The error view stays up on later frames
    let screen = render(&mut app);
    assert!(screen.contains("chart data unavailable"));

    app.navigate("/relax");
    assert!(app.page_error().is_none());
    assert_eq!(app.current_route(), Route::Relax);
    let screen = render(&mut app);
    assert!(screen.contains("Take a break"));
    assert!(!screen.contains("Something went wrong"));
}
