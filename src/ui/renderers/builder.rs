use ratatui::{
    widgets::{Block, Borders, Paragraph, List, ListItem, ListState},
    layout::{Layout, Constraint, Direction},
    style::{Style, Color, Modifier},
    text::{Line, Span},
    Frame
};
use crate::builder::BUILD_SLOTS;
use crate::compat::SocketStatus;
use crate::types::App;
use crate::ui::utils::format_price;

/// Render the build configurator view: slot list, options for the cursor
/// slot, socket status and running total.
pub fn render(f: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Slots + Options
                Constraint::Length(3), // Socket status
                Constraint::Length(3), // Total
                Constraint::Length(3), // Footer
            ]
            .as_ref(),
        )
        .split(f.size());

    let title = Block::default().title("Build Your PC").borders(Borders::ALL);
    f.render_widget(title, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(main_chunks[1]);

    render_slot_list(f, app, content_chunks[0]);
    render_slot_options(f, app, content_chunks[1]);
    render_socket_status(f, app, main_chunks[2]);
    render_total_bar(f, app, main_chunks[3]);
    render_footer(f, main_chunks[4]);
}

/// Render one line per slot, "(none)" for empty slots.
fn render_slot_list(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let items: Vec<ListItem> = BUILD_SLOTS
        .iter()
        .map(|slot| {
            let text = match app.build.selected(*slot) {
                Some(item) => format!(
                    "{}: {} - {}",
                    slot.label(),
                    item.name,
                    format_price(item.price, &app.config.currency)
                ),
                None => format!("{}: (none)", slot.label()),
            };
            ListItem::new(text)
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan))
        .highlight_symbol("> ")
        .block(Block::default().borders(Borders::ALL).title("Build"));

    let mut state = ListState::default();
    state.select(Some(app.slot_index));
    f.render_stateful_widget(list, area, &mut state);
}

/// Render the available parts for the slot under the cursor, marking the
/// current pick.
fn render_slot_options(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let slot = app.selected_slot();
    let current = app.build.selected(slot).map(|item| item.id.clone());

    let items: Vec<ListItem> = app
        .parts
        .in_category(slot)
        .map(|item| {
            let marker = if current.as_deref() == Some(item.id.as_str()) {
                "●"
            } else {
                "○"
            };
            let text = format!(
                "{} {} - {}",
                marker,
                item.name,
                format_price(item.price, &app.config.currency)
            );
            if current.as_deref() == Some(item.id.as_str()) {
                ListItem::new(text).style(Style::default().fg(Color::Green))
            } else {
                ListItem::new(text)
            }
        })
        .collect();

    let options = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{} options (←/→ to cycle)", slot.label())),
    );
    f.render_widget(options, area);
}

/// Render the live CPU + motherboard socket verdict.
fn render_socket_status(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let (text, style) = match app.build.socket_status() {
        SocketStatus::Compatible => (
            "✅ CPU and Motherboard compatible",
            Style::default().fg(Color::Green),
        ),
        SocketStatus::Incompatible => (
            "⚠️ Incompatible CPU and Motherboard!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        SocketStatus::NoData => (
            "Add components to check compatibility",
            Style::default().fg(Color::DarkGray),
        ),
    };
    let status = Paragraph::new(Line::from(Span::styled(text, style)))
        .block(Block::default().borders(Borders::ALL).title("Compatibility"));
    f.render_widget(status, area);
}

/// Render the running total over all filled slots.
fn render_total_bar(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let totals_text = format!(
        "🛠️ Build total: {}",
        format_price(app.build.total(), &app.config.currency)
    );
    let totals = Paragraph::new(totals_text)
        .block(Block::default().borders(Borders::ALL).title("Total"));
    f.render_widget(totals, area);
}

/// Render the footer
fn render_footer(f: &mut Frame, area: ratatui::layout::Rect) {
    let footer_text = "q: quit | Tab: settings | ↑/↓: slot | ←/→: cycle part | c: clear slot";
    let footer = Paragraph::new(footer_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
