use crate::app::forms::{ModelForm, ReservationForm};
use crate::app::tui::{App, ConfirmAction, Mode, Panel};
use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

pub fn render(frame: &mut Frame, app: &mut App) {
    let mut constraints = vec![
        Constraint::Min(12),
        Constraint::Length(9),
        Constraint::Length(3),
    ];
    if app.show_log {
        constraints.push(Constraint::Length(8));
    }
    let chunks = Layout::vertical(constraints).split(frame.area());

    let top = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[0]);

    render_models(frame, app, top[0]);
    render_reservations(frame, app, top[1]);
    render_availability(frame, app, chunks[1]);
    render_status(frame, app, chunks[2]);
    if app.show_log {
        render_log(frame, app, chunks[3]);
    }

    match app.mode.clone() {
        Mode::ModelForm => render_model_form(frame, app),
        Mode::ReservationForm => render_reservation_form(frame, app),
        Mode::Confirm(action) => render_confirm(frame, &action),
        Mode::Browse => {}
    }
}

fn panel_border(app: &App, panel: Panel) -> Style {
    if app.panel == panel && app.mode == Mode::Browse {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn render_models(frame: &mut Frame, app: &mut App, area: Rect) {
    let header = Row::new(vec!["Model", "Men", "Women"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = app
        .session
        .models
        .iter()
        .map(|m| {
            Row::new(vec![
                m.name.clone(),
                m.stock_men.to_string(),
                m.stock_women.to_string(),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Min(12),
            Constraint::Length(6),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .block(
        Block::bordered()
            .title(" Models (stock) ")
            .border_style(panel_border(app, Panel::Models)),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(table, area, &mut app.models_table);
}

fn render_reservations(frame: &mut Frame, app: &mut App, area: Rect) {
    let header = Row::new(vec!["School", "Model", "Men", "Women", "Price", "Total"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = app
        .session
        .reservations
        .iter()
        .map(|r| {
            Row::new(vec![
                r.school.clone(),
                r.model_name.clone().unwrap_or_else(|| "-".to_string()),
                r.men.to_string(),
                r.women.to_string(),
                format!("${}", r.rental_price),
                r.total.map(|t| format!("${}", t)).unwrap_or_else(|| "-".to_string()),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Min(14),
            Constraint::Min(10),
            Constraint::Length(5),
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(
        Block::bordered()
            .title(format!(" Reservations — {} ", app.session.date))
            .border_style(panel_border(app, Panel::Reservations)),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(table, area, &mut app.reservations_table);
}

fn render_availability(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec!["Model", "Men available", "Women available"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = app
        .session
        .availability()
        .into_iter()
        .map(|a| Row::new(vec![a.model_name, a.men.to_string(), a.women.to_string()]))
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Min(12),
            Constraint::Length(15),
            Constraint::Length(17),
        ],
    )
    .header(header)
    .block(Block::bordered().title(format!(" Availability — {} ", app.session.date)));
    frame.render_widget(table, area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.session.last_error {
        Some(message) => Line::from(Span::styled(
            format!("✗ {}", message),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(
            "q quit | Tab focus | ↑↓ select | m new model | r new reservation | d delete | [ ] date | g refresh | l logs",
        ),
    };
    frame.render_widget(
        Paragraph::new(line).block(Block::bordered().title(" Status ")),
        area,
    );
}

fn render_log(frame: &mut Frame, app: &App, area: Rect) {
    let widget = TuiLoggerWidget::default()
        .output_separator(' ')
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .state(&app.logger_state)
        .block(Block::bordered().title(" Log "));
    frame.render_widget(widget, area);
}

fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_model_form(frame: &mut Frame, app: &App) {
    let area = popup_area(frame.area(), 42, ModelForm::FIELDS as u16 + 2);
    frame.render_widget(Clear, area);
    let block = Block::bordered().title(" New model — Enter save, Esc cancel ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let labels = ModelForm::labels();
    let lines: Vec<Line> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let style = if i == app.model_form.focus {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            Line::styled(
                format!("{:<13} {}", label, app.model_form.input_at(i).value()),
                style,
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    let input = app.model_form.input_at(app.model_form.focus);
    frame.set_cursor_position(Position::new(
        inner.x + 14 + input.visual_cursor() as u16,
        inner.y + app.model_form.focus as u16,
    ));
}

fn render_reservation_form(frame: &mut Frame, app: &App) {
    let area = popup_area(frame.area(), 56, ReservationForm::FIELDS as u16 + 2);
    frame.render_widget(Clear, area);
    let block = Block::bordered().title(" New reservation — Enter save, Esc cancel ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = &app.reservation_form;
    let labels = ReservationForm::labels();
    let lines: Vec<Line> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let style = if i == form.focus {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            let value = match form.input_at(i) {
                Some(input) => input.value().to_string(),
                None => match form.model_index.and_then(|idx| app.session.models.get(idx)) {
                    Some(model) => format!("◄ {} ►", model.name),
                    None => "◄ pick with ←/→ ►".to_string(),
                },
            };
            Line::styled(format!("{:<18} {}", label, value), style)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    if let Some(input) = form.input_at(form.focus) {
        frame.set_cursor_position(Position::new(
            inner.x + 19 + input.visual_cursor() as u16,
            inner.y + form.focus as u16,
        ));
    }
}

fn render_confirm(frame: &mut Frame, action: &ConfirmAction) {
    let message = match action {
        ConfirmAction::DeleteModel(_) => "Delete this model? (y/n)",
        ConfirmAction::DeleteReservation(_) => "Delete this reservation? (y/n)",
    };
    let area = popup_area(frame.area(), message.len() as u16 + 4, 3);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" Confirm ")),
        area,
    );
}
