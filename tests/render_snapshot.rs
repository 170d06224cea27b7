//! Renders the full screen into ratatui's `TestBackend` and checks the text.

mod common;

use common::{app, press};
use crossterm::event::KeyCode;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use shopfront::ui::app::App;
use shopfront::ui::render::draw;

fn screen_text(app: &App) -> String {
    let backend = TestBackend::new(110, 32);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn initial_screen_shows_product_card() {
    let text = screen_text(&app());
    assert!(text.contains("Bevanda Colorata - Italsucchi"));
    assert!(text.contains("On Sale!"));
    assert!(text.contains("10.00€"));
    assert!(text.contains("In Stock"));
    assert!(text.contains("33cl."));
    assert!(text.contains("Shipping: 2.99€"));
    assert!(text.contains("Cart(0)"));
    assert!(text.contains("No reviews yet."));
    assert!(text.contains("Standard"));
}

#[test]
fn screen_follows_state_changes() {
    let mut app = app();
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('p'));

    let text = screen_text(&app);
    assert!(text.contains("Out of Stock"));
    assert!(text.contains("prod-green.jpg"));
    assert!(text.contains("Cart(1)"));
    assert!(text.contains("Shipping: Free"));
    assert!(!text.contains("Standard"));
}

#[test]
fn submitted_review_is_listed() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);
    common::type_text(&mut app, "Fresh");
    press(&mut app, KeyCode::Enter);

    let text = screen_text(&app);
    assert!(text.contains("• Fresh"));
    assert!(!text.contains("No reviews yet."));
}

#[test]
fn swatch_shows_units_in_cart() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('a'));

    let text = screen_text(&app);
    assert!(text.contains("Blue ×2"));
    assert!(!text.contains("Green ×"));
}
