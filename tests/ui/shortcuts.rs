use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskdeck::config::ModifierKey;
use taskdeck::ui::core::{Action, KeyBinding, ShortcutDispatcher, ShortcutError, ShortcutOptions};

use super::helpers::{ctrl, key};

fn navigate(path: &'static str) -> impl Fn() -> Action {
    move || Action::Navigate(path.to_string())
}

#[test]
fn test_dispatch_is_case_insensitive() {
    let mut dispatcher = ShortcutDispatcher::new(ModifierKey::Ctrl, false);
    dispatcher.bind("E", navigate("/task"), ShortcutOptions::default()).unwrap();

    assert_eq!(dispatcher.dispatch(&ctrl('e')), Some(Action::Navigate("/task".to_string())));
    let shifted = KeyEvent::new(KeyCode::Char('E'), KeyModifiers::CONTROL | KeyModifiers::SHIFT);
    assert_eq!(dispatcher.dispatch(&shifted), Some(Action::Navigate("/task".to_string())));
}

#[test]
fn test_modifier_is_required() {
    let mut dispatcher = ShortcutDispatcher::new(ModifierKey::Ctrl, false);
    dispatcher.bind("e", navigate("/task"), ShortcutOptions::default()).unwrap();

    assert_eq!(dispatcher.dispatch(&key(KeyCode::Char('e'))), None);
    let alt = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::ALT);
    assert_eq!(dispatcher.dispatch(&alt), None);
}

#[test]
fn test_cmd_modifier_uses_super() {
    let mut dispatcher = ShortcutDispatcher::new(ModifierKey::Cmd, false);
    dispatcher.bind("d", navigate("/work"), ShortcutOptions::default()).unwrap();

    assert_eq!(dispatcher.dispatch(&ctrl('d')), None);
    let cmd = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::SUPER);
    assert_eq!(dispatcher.dispatch(&cmd), Some(Action::Navigate("/work".to_string())));
}

#[test]
fn test_last_bind_wins_and_unbind_restores() {
    let mut dispatcher = ShortcutDispatcher::new(ModifierKey::Ctrl, false);
    let first = dispatcher.bind("e", navigate("/first"), ShortcutOptions::default()).unwrap().unwrap();
    let second = dispatcher.bind("e", navigate("/second"), ShortcutOptions::default()).unwrap().unwrap();
    assert_eq!(dispatcher.registration_count(), 2);

    assert_eq!(dispatcher.dispatch(&ctrl('e')), Some(Action::Navigate("/second".to_string())));

    assert!(dispatcher.unbind(second));
    assert_eq!(dispatcher.dispatch(&ctrl('e')), Some(Action::Navigate("/first".to_string())));

    assert!(dispatcher.unbind(first));
    assert!(!dispatcher.unbind(first));
    assert_eq!(dispatcher.dispatch(&ctrl('e')), None);
    assert_eq!(dispatcher.registration_count(), 0);
}

#[test]
fn test_touch_mode_binds_nothing() {
    let mut dispatcher = ShortcutDispatcher::new(ModifierKey::Ctrl, true);
    let id = dispatcher.bind("e", navigate("/task"), ShortcutOptions::default()).unwrap();

    assert!(id.is_none());
    assert_eq!(dispatcher.registration_count(), 0);
    assert_eq!(dispatcher.dispatch(&ctrl('e')), None);
}

#[test]
fn test_disabled_option_binds_nothing() {
    let mut dispatcher = ShortcutDispatcher::default();
    let options = ShortcutOptions {
        disabled: true,
        modifier: None,
    };
    assert!(dispatcher.bind("e", navigate("/task"), options).unwrap().is_none());
    let binding = KeyBinding::parse("e", ModifierKey::Ctrl).unwrap();
    assert!(!dispatcher.is_bound(&binding));
}

#[test]
fn test_modifier_override() {
    let mut dispatcher = ShortcutDispatcher::new(ModifierKey::Ctrl, false);
    let options = ShortcutOptions {
        disabled: false,
        modifier: Some(ModifierKey::Cmd),
    };
    dispatcher.bind("e", navigate("/task"), options).unwrap();

    assert!(dispatcher.is_bound(&KeyBinding::parse("E", ModifierKey::Cmd).unwrap()));
    assert_eq!(dispatcher.dispatch(&ctrl('e')), None);
}

#[test]
fn test_ctrl_binding_wins_when_both_modifiers_are_held() {
    let mut dispatcher = ShortcutDispatcher::new(ModifierKey::Ctrl, false);
    let cmd_only = ShortcutOptions {
        disabled: false,
        modifier: Some(ModifierKey::Cmd),
    };
    dispatcher.bind("e", navigate("/cmd"), cmd_only).unwrap();
    dispatcher.bind("e", navigate("/ctrl"), ShortcutOptions::default()).unwrap();

    let both = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL | KeyModifiers::SUPER);
    for _ in 0..10 {
        assert_eq!(dispatcher.dispatch(&both), Some(Action::Navigate("/ctrl".to_string())));
    }
    let cmd = KeyEvent::new(KeyCode::Char('E'), KeyModifiers::SUPER);
    assert_eq!(dispatcher.dispatch(&cmd), Some(Action::Navigate("/cmd".to_string())));
}

#[test]
fn test_invalid_labels() {
    let mut dispatcher = ShortcutDispatcher::default();
    assert_eq!(
        dispatcher.bind(" ", navigate("/"), ShortcutOptions::default()).err(),
        Some(ShortcutError::EmptyKey)
    );
    assert_eq!(
        dispatcher.bind("ctrl+e", navigate("/"), ShortcutOptions::default()).err(),
        Some(ShortcutError::UnsupportedKey("ctrl+e".to_string()))
    );
}

#[test]
fn test_binding_display() {
    let binding = KeyBinding::parse("e", ModifierKey::Ctrl).unwrap();
    assert_eq!(binding.to_string(), "Ctrl+E");
}
