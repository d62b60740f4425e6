use ratatui::{
    widgets::{Block, Borders, Paragraph, Table, Row, Cell, TableState},
    layout::{Layout, Constraint, Direction},
    style::{Style, Color, Modifier},
    text::{Line, Span, Text},
    Frame
};
use crate::compat::check_cart;
use crate::types::{App, ShopPane};
use crate::ui::utils::format_price;

/// Render the storefront view: catalog table beside the cart panel.
pub fn render(f: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Catalog + Cart
                Constraint::Length(3), // Totals
                Constraint::Length(3), // Footer / Notice
            ]
            .as_ref(),
        )
        .split(f.size());

    let title = Block::default().title("Rigcart Storefront").borders(Borders::ALL);
    f.render_widget(title, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)].as_ref())
        .split(main_chunks[1]);

    render_catalog_table(f, app, content_chunks[0]);
    render_cart_panel(f, app, content_chunks[1]);
    render_totals_bar(f, app, main_chunks[2]);
    render_footer(f, app, main_chunks[3]);
}

/// Render the product table
fn render_catalog_table(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let header_cells: Vec<_> = ["Name", "Category", "Price", "Tag"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Red)))
        .collect();
    let header = Row::new(header_cells);

    let rows = app.catalog.items().iter().map(|item| {
        Row::new(vec![
            Cell::from(item.name.clone()),
            Cell::from(item.category.label()),
            Cell::from(format_price(item.price, &app.config.currency)),
            Cell::from(item.tag.label()),
        ])
    });

    let widths = [
        Constraint::Percentage(45),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
        Constraint::Percentage(15),
    ];

    let focused = app.shop_pane == ShopPane::Catalog;
    let highlight = if focused {
        Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let table = Table::new(rows, widths)
        .header(header)
        .highlight_style(highlight)
        .block(Block::default().borders(Borders::ALL).title("Products"));

    let mut table_state = TableState::default();
    table_state.select(Some(app.catalog_index));
    f.render_stateful_widget(table, area, &mut table_state);
}

/// Render the cart panel: warning (if any) above the grouped item rows.
fn render_cart_panel(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let mut lines: Vec<Line> = Vec::new();

    if app.cart.is_empty() {
        lines.push(Line::from("Your cart is empty."));
    } else {
        if let Some(warning) = check_cart(app.cart.entries()) {
            lines.push(Line::from(Span::styled(
                "⚠️ Compatibility Warning:",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", warning),
                Style::default().fg(Color::Red),
            )));
            lines.push(Line::from(""));
        }

        let focused = app.shop_pane == ShopPane::Cart;
        for (i, row) in app.cart.rows().iter().enumerate() {
            let mut text = format!("{}x {} ({})", row.quantity, row.name, row.category.label());
            if app.config.show_subtotals {
                text.push_str(&format!(
                    "  {}",
                    format_price(row.subtotal, &app.config.currency)
                ));
            }
            let style = if focused && i == app.cart_index {
                Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(text, style)));
        }
    }

    let cart_panel = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title("Cart"));
    f.render_widget(cart_panel, area);
}

/// Render the totals bar
fn render_totals_bar(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let totals_text = format!(
        "🛒 Total: {} ({} item{})",
        format_price(app.cart.total(), &app.config.currency),
        app.cart.len(),
        if app.cart.len() == 1 { "" } else { "s" }
    );
    let totals = Paragraph::new(totals_text)
        .block(Block::default().borders(Borders::ALL).title("Cart Total"));
    f.render_widget(totals, area);
}

/// Render the footer, or the pending notice when one is active.
fn render_footer(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    if let Some(msg) = &app.notice {
        let notice = Paragraph::new(msg.as_str())
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title("Notice"));
        f.render_widget(notice, area);
    } else {
        let footer_text =
            "q: quit | Tab: builder | ←/→: pane | ↑/↓: select | Enter/a: add | r: remove one";
        let footer = Paragraph::new(footer_text).block(Block::default().borders(Borders::ALL));
        f.render_widget(footer, area);
    }
}
