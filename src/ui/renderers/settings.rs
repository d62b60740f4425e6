use ratatui::{
    widgets::{Block, Borders, Paragraph},
    layout::{Layout, Constraint, Direction, Alignment},
    style::{Style, Color, Modifier},
    text::{Line, Span},
    Frame
};
use crate::config::{load_config, StartView};
use crate::types::App;

/// Render the settings mode for configuration management
pub fn render(f: &mut Frame, app: &App) {
    // Main layout: Title + Settings Content + Notification (if any)
    let main_chunks = if app.settings_notification.is_some() {
        Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),  // Title header
                Constraint::Min(0),     // Settings content
                Constraint::Length(3),  // Notification
            ])
            .split(f.size())
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),  // Title header
                Constraint::Min(0),     // Settings content
            ])
            .split(f.size())
    };

    render_title(f, main_chunks[0]);
    render_settings_content(f, app, main_chunks[1]);

    // Render notification if present
    if app.settings_notification.is_some() && main_chunks.len() > 2 {
        render_notification(f, app, main_chunks[2]);
    }
}

/// Render the title header
fn render_title(f: &mut Frame, area: ratatui::layout::Rect) {
    let block = Block::default().title("Settings & Configuration").borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let nav_text = "q: quit | Tab: switch mode | r: remove saved config | Esc: back to shop";
    let nav_paragraph = Paragraph::new(nav_text);
    f.render_widget(nav_paragraph, inner);
}

/// Render the main settings content
fn render_settings_content(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Current configuration
            Constraint::Percentage(50), // Available actions
        ])
        .split(area);

    render_current_config(f, app, chunks[0]);
    render_available_actions(f, chunks[1]);
}

fn option_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

/// Render the session settings plus whether they are saved on disk.
fn render_current_config(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let saved = load_config().is_some();
    let start_view = match app.config.start_view {
        StartView::Shop => "Shop",
        StartView::Builder => "Builder",
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("💾 Saved on disk: ", Style::default().fg(Color::Cyan)),
            Span::raw(if saved { "Yes" } else { "No" }),
        ]),
        Line::from(""),
        Line::from("Session settings:"),
        Line::from(Span::styled(
            format!("  Currency symbol: {}", app.config.currency),
            option_style(app.settings_index == 0),
        )),
        Line::from(Span::styled(
            format!("  Start view: {}", start_view),
            option_style(app.settings_index == 1),
        )),
        Line::from(Span::styled(
            format!(
                "  Show cart subtotals: {}",
                if app.config.show_subtotals { "Yes" } else { "No" }
            ),
            option_style(app.settings_index == 2),
        )),
    ];

    let config_widget = Paragraph::new(lines)
        .block(Block::default().title("Current Configuration").borders(Borders::ALL))
        .alignment(Alignment::Left);
    f.render_widget(config_widget, area);
}

/// Render available actions
fn render_available_actions(f: &mut Frame, area: ratatui::layout::Rect) {
    let actions = vec![
        Line::from(vec![
            Span::styled("↑/↓", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw(" - Navigate settings"),
        ]),
        Line::from(vec![
            Span::styled("←/→", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw(" - Adjust selected setting (auto-saves)"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("r", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw(" - Remove saved configuration"),
        ]),
        Line::from("    Next start falls back to the defaults"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
            Span::raw(" - Switch to other modes"),
        ]),
        Line::from("    Navigate between Shop/Builder/Settings"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Tips:", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        ]),
        Line::from("• Preferences persist between sessions"),
        Line::from("• Cart contents never do; they reset on exit"),
    ];

    let actions_widget = Paragraph::new(actions)
        .block(Block::default().title("Available Actions").borders(Borders::ALL))
        .alignment(Alignment::Left);
    f.render_widget(actions_widget, area);
}

/// Render settings-specific notifications
fn render_notification(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    if let Some(msg) = &app.settings_notification {
        let style = if msg.starts_with("✅") {
            Style::default().fg(Color::Green)
        } else if msg.starts_with("❌") {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let notification = Paragraph::new(msg.as_str())
            .style(style)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(notification, area);
    }
}
