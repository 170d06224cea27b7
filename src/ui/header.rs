use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, SHOP_ACCENT, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, user_premium: bool, cart_items: usize) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let membership = if user_premium {
            Span::styled("Premium", Style::default().fg(STATUS_OK))
        } else {
            Span::styled("Standard", text_style)
        };
        let line = Line::from(vec![
            Span::styled(
                "  Shopfront",
                Style::default().fg(SHOP_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            membership,
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Cart({})", cart_items), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
