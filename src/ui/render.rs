use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_columns, layout_regions};
use crate::ui::theme::{
    FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, SALE_BADGE, SHOP_ACCENT, STATUS_ERROR,
    STATUS_OK, SWATCH_FALLBACK,
};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(
        header_widget.widget(app.user_premium(), app.cart().len()),
        header,
    );

    frame.render_widget(Clear, body);
    let (product_area, reviews_area) = body_columns(body);
    draw_product(frame, app, product_area);
    draw_reviews(frame, app, reviews_area);

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer, app.focus()), footer);
}

fn panel(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(title, Style::default().fg(SHOP_ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn draw_product(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let product = app.product();
    let text_style = Style::default().fg(HEADER_TEXT);
    let muted = Style::default().fg(MUTED_TEXT);
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        product.title(),
        text_style.add_modifier(Modifier::BOLD),
    )));
    if let Some(image) = product.image() {
        lines.push(Line::from(Span::styled(format!("[image: {}]", image), muted)));
    }
    if product.product().on_sale {
        lines.push(Line::from(Span::styled(
            "On Sale!",
            Style::default().fg(SALE_BADGE),
        )));
    }
    lines.push(Line::from(Span::styled(product.price_label(), text_style)));
    let stock_color = if product.sold_out() {
        STATUS_ERROR
    } else {
        STATUS_OK
    };
    lines.push(Line::from(Span::styled(
        product.stock_label(),
        Style::default().fg(stock_color),
    )));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Details", text_style.add_modifier(Modifier::BOLD))));
    for detail in &product.product().details {
        lines.push(Line::from(Span::styled(format!("  • {}", detail), text_style)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Variants", text_style.add_modifier(Modifier::BOLD))));
    let mut swatches = Vec::new();
    for (idx, variant) in product.product().variants.iter().enumerate() {
        let marker = if idx == product.selected_index() { "▶" } else { " " };
        swatches.push(Span::styled(format!(" {}{} ", marker, idx + 1), text_style));
        swatches.push(Span::styled(
            "    ",
            Style::default().bg(swatch_color(&variant.color)),
        ));
        swatches.push(Span::styled(format!(" {}", variant.label), muted));
        let in_cart = app.cart().count_of(variant.id);
        if in_cart > 0 {
            swatches.push(Span::styled(
                format!(" ×{}", in_cart),
                Style::default().fg(SHOP_ACCENT),
            ));
        }
    }
    lines.push(Line::from(swatches));

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Shipping: ", text_style),
        Span::styled(app.shipping(), text_style),
    ]));

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel("Product", app.focus() == Focus::Product));
    frame.render_widget(widget, area);
}

fn draw_reviews(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let reviews = app.reviews();
    let text_style = Style::default().fg(HEADER_TEXT);
    let focused = app.focus() == Focus::Reviews;
    let mut lines = Vec::new();

    let cursor = if focused { "▏" } else { "" };
    lines.push(Line::from(vec![
        Span::styled("> ", Style::default().fg(SHOP_ACCENT)),
        Span::styled(format!("{}{}", reviews.draft, cursor), text_style),
    ]));
    lines.push(Line::from(""));

    if reviews.reviews.is_empty() {
        lines.push(Line::from(Span::styled(
            "No reviews yet.",
            Style::default().fg(MUTED_TEXT),
        )));
    }
    for review in &reviews.reviews {
        lines.push(Line::from(Span::styled(format!("• {}", review), text_style)));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel("Reviews", focused));
    frame.render_widget(widget, area);
}

/// Parses a `#rrggbb` swatch color.
fn swatch_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return SWATCH_FALLBACK;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => SWATCH_FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_swatch() {
        assert_eq!(swatch_color("#66a7b9"), Color::Rgb(0x66, 0xa7, 0xb9));
    }

    #[test]
    fn malformed_swatch_falls_back() {
        assert_eq!(swatch_color("blue"), SWATCH_FALLBACK);
        assert_eq!(swatch_color("#zzzzzz"), SWATCH_FALLBACK);
    }
}
