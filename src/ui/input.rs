use crate::ui::app::{App, Focus};
use crate::ui::product::ProductIntent;
use crate::ui::reviews::ReviewIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if key.code == KeyCode::Tab {
        app.toggle_focus();
        return;
    }

    match app.focus() {
        Focus::Product => handle_product_key(app, key),
        Focus::Reviews => handle_review_key(app, key),
    }

    // Child views only emit; the cart changes once the parent drains them.
    app.pump_cart_events();
}

pub fn handle_paste(app: &mut App, text: String) {
    if app.focus() == Focus::Reviews {
        app.dispatch_review(ReviewIntent::Paste(text));
    }
}

fn handle_product_key(app: &mut App, key: KeyEvent) {
    // Shortcuts are bare letters; Ctrl/Alt chords are not ours.
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return;
    }

    match key.code {
        KeyCode::Left => app.dispatch_product(ProductIntent::Previous),
        KeyCode::Right => app.dispatch_product(ProductIntent::Next),
        KeyCode::Char('a') => app.product_view().request_add_to_cart(),
        KeyCode::Char('r') => app.product_view().request_remove_from_cart(),
        KeyCode::Char('p') => app.toggle_premium(),
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char(ch) => {
            if let Some(digit) = ch.to_digit(10) {
                // Palette positions are shown 1-based.
                if digit > 0 {
                    app.dispatch_product(ProductIntent::Select {
                        index: digit as usize - 1,
                    });
                }
            }
        }
        _ => {}
    }
}

fn handle_review_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 's') {
        app.dispatch_review(ReviewIntent::Submit);
        return;
    }

    match key.code {
        KeyCode::Enter => app.dispatch_review(ReviewIntent::Submit),
        KeyCode::Backspace => app.dispatch_review(ReviewIntent::Backspace),
        KeyCode::Esc => app.set_focus(Focus::Product),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_review(ReviewIntent::Input(ch));
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digit_zero_is_ignored() {
        let mut app = App::new(&Config::default());
        handle_key(&mut app, press(KeyCode::Char('2')));
        handle_key(&mut app, press(KeyCode::Char('0')));
        assert_eq!(app.product().selected_index(), 1);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new(&Config::default());
        let mut key = press(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(app.cart().is_empty());
    }

    #[test]
    fn esc_in_product_does_not_quit() {
        let mut app = App::new(&Config::default());
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.should_quit());
    }

    #[test]
    fn modified_letters_are_not_shortcuts() {
        let mut app = App::new(&Config::default());
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('p'), KeyModifiers::ALT));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('2'), KeyModifiers::ALT));
        assert!(app.cart().is_empty());
        assert!(!app.user_premium());
        assert_eq!(app.product().selected_index(), 0);
    }

    #[test]
    fn q_types_into_review_draft() {
        let mut app = App::new(&Config::default());
        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.reviews().draft, "q");
    }
}
