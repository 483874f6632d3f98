use crate::app::event::{StoreEvent, StoreHandle};
use crate::app::forms::{ModelForm, ReservationForm};
use crate::app::ui;
use crate::config::AppSettings;
use crate::core::Session;
use crate::domain::Store;
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use ratatui::widgets::TableState;
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tui_input::backend::crossterm::EventHandler;
use tui_logger::TuiWidgetState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Models,
    Reservations,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteModel(String),
    DeleteReservation(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browse,
    ModelForm,
    ReservationForm,
    Confirm(ConfirmAction),
}

/// UI-side state: the session plus everything that only exists on
/// screen (focus, forms, dialogs, table cursors).
pub struct App {
    pub session: Session,
    pub mode: Mode,
    pub panel: Panel,
    pub model_form: ModelForm,
    pub reservation_form: ReservationForm,
    pub models_table: TableState,
    pub reservations_table: TableState,
    pub show_log: bool,
    pub logger_state: TuiWidgetState,
    pub should_quit: bool,
    store: StoreHandle,
}

impl App {
    pub fn new(session: Session, store: StoreHandle) -> Self {
        Self {
            session,
            mode: Mode::Browse,
            panel: Panel::Models,
            model_form: ModelForm::default(),
            reservation_form: ReservationForm::default(),
            models_table: TableState::default(),
            reservations_table: TableState::default(),
            show_log: false,
            logger_state: TuiWidgetState::new(),
            should_quit: false,
            store,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        match self.mode.clone() {
            Mode::Browse => self.on_browse_key(key),
            Mode::ModelForm => self.on_model_form_key(key),
            Mode::ReservationForm => self.on_reservation_form_key(key),
            Mode::Confirm(_) => self.on_confirm_key(key),
        }
    }

    fn on_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => {
                self.panel = match self.panel {
                    Panel::Models => Panel::Reservations,
                    Panel::Reservations => Panel::Models,
                };
            }
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Char('m') => self.mode = Mode::ModelForm,
            KeyCode::Char('r') => self.mode = Mode::ReservationForm,
            KeyCode::Char('d') => self.request_delete(),
            KeyCode::Char('[') => self.change_date(-1),
            KeyCode::Char(']') => self.change_date(1),
            KeyCode::Char('g') => self.refetch_reservations(),
            KeyCode::Char('l') => self.show_log = !self.show_log,
            _ => {}
        }
    }

    fn on_model_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Enter => self.submit_model_form(),
            KeyCode::Tab | KeyCode::Down => self.model_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.model_form.prev_field(),
            _ => {
                self.model_form
                    .focused_input_mut()
                    .handle_event(&Event::Key(key));
            }
        }
    }

    fn on_reservation_form_key(&mut self, key: KeyEvent) {
        let on_model_field = self.reservation_form.focus == ReservationForm::MODEL_FIELD;
        match key.code {
            KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Enter => self.submit_reservation_form(),
            KeyCode::Tab | KeyCode::Down => self.reservation_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.reservation_form.prev_field(),
            KeyCode::Left if on_model_field => {
                self.reservation_form
                    .cycle_model(false, self.session.models.len());
            }
            KeyCode::Right if on_model_field => {
                self.reservation_form
                    .cycle_model(true, self.session.models.len());
            }
            _ => {
                if let Some(input) = self.reservation_form.focused_input_mut() {
                    input.handle_event(&Event::Key(key));
                }
            }
        }
    }

    fn on_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                if let Mode::Confirm(action) = std::mem::replace(&mut self.mode, Mode::Browse) {
                    match action {
                        ConfirmAction::DeleteModel(id) => self.store.delete_model(id),
                        ConfirmAction::DeleteReservation(id) => self.store.delete_reservation(id),
                    }
                }
            }
            KeyCode::Char('n') | KeyCode::Esc => self.mode = Mode::Browse,
            _ => {}
        }
    }

    fn submit_model_form(&mut self) {
        match self.model_form.draft() {
            Ok(draft) => {
                self.store.create_model(draft);
                self.mode = Mode::Browse;
            }
            // Keep the form open so the field can be corrected.
            Err(message) => self.session.set_error(message),
        }
    }

    fn submit_reservation_form(&mut self) {
        match self
            .reservation_form
            .draft(&self.session.date, &self.session.models)
        {
            Ok(draft) => {
                self.store.create_reservation(draft);
                self.mode = Mode::Browse;
            }
            Err(message) => self.session.set_error(message),
        }
    }

    fn request_delete(&mut self) {
        let action = match self.panel {
            Panel::Models => self
                .models_table
                .selected()
                .and_then(|i| self.session.models.get(i))
                .and_then(|m| m.id.clone())
                .map(ConfirmAction::DeleteModel),
            Panel::Reservations => self
                .reservations_table
                .selected()
                .and_then(|i| self.session.reservations.get(i))
                .and_then(|r| r.id.clone())
                .map(ConfirmAction::DeleteReservation),
        };
        if let Some(action) = action {
            self.mode = Mode::Confirm(action);
        }
    }

    fn change_date(&mut self, days: i64) {
        let Ok(current) = NaiveDate::parse_from_str(&self.session.date, "%Y-%m-%d") else {
            return;
        };
        let next = (current + chrono::Duration::days(days))
            .format("%Y-%m-%d")
            .to_string();
        let generation = self.session.set_date(next.clone());
        self.store.fetch_reservations(next, generation);
    }

    fn refetch_reservations(&mut self) {
        let generation = self.session.next_fetch_generation();
        self.store
            .fetch_reservations(self.session.date.clone(), generation);
    }

    fn move_selection(&mut self, delta: i64) {
        let (state, len) = match self.panel {
            Panel::Models => (&mut self.models_table, self.session.models.len()),
            Panel::Reservations => (
                &mut self.reservations_table,
                self.session.reservations.len(),
            ),
        };
        if len == 0 {
            state.select(None);
            return;
        }
        let current = state.selected().unwrap_or(0);
        let next = if delta < 0 {
            current.saturating_sub(1)
        } else {
            (current + 1).min(len - 1)
        };
        state.select(Some(next));
    }

    fn clamp_selections(&mut self) {
        clamp(&mut self.models_table, self.session.models.len());
        clamp(&mut self.reservations_table, self.session.reservations.len());
    }

    pub fn on_store_event(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::Models(Ok(models)) => {
                tracing::info!(count = models.len(), "models loaded");
                self.session.set_models(models);
                self.clamp_selections();
            }
            StoreEvent::Models(Err(e)) => self.session.set_error(e.user_friendly_message()),
            StoreEvent::Reservations { generation, result } => match result {
                Ok(reservations) => {
                    if self.session.apply_reservations(generation, reservations) {
                        self.clamp_selections();
                    }
                }
                Err(e) => self.session.set_error(e.user_friendly_message()),
            },
            StoreEvent::ModelCreated { draft, result } => match result {
                Ok(created) => {
                    tracing::info!(id = %created.id, name = %draft.name, "model created");
                    self.session.merge_created_model(draft, created.id);
                    self.model_form.reset();
                    self.clamp_selections();
                }
                Err(e) => self.session.set_error(e.user_friendly_message()),
            },
            StoreEvent::ModelDeleted { id, result } => match result {
                Ok(()) => {
                    tracing::info!(id, "model deleted");
                    self.session.remove_model(&id);
                    self.clamp_selections();
                }
                Err(e) => self.session.set_error(e.user_friendly_message()),
            },
            StoreEvent::ReservationCreated { draft, result } => match result {
                Ok(created) => {
                    tracing::info!(id = %created.id, total = created.total, "reservation created");
                    self.session
                        .merge_created_reservation(draft, created.id, created.total);
                    self.reservation_form.clear_booking_fields();
                    self.clamp_selections();
                }
                Err(e) => self.session.set_error(e.user_friendly_message()),
            },
            StoreEvent::ReservationDeleted { id, result } => match result {
                Ok(()) => {
                    tracing::info!(id, "reservation deleted");
                    self.session.remove_reservation(&id);
                    self.clamp_selections();
                }
                Err(e) => self.session.set_error(e.user_friendly_message()),
            },
        }
    }
}

fn clamp(state: &mut TableState, len: usize) {
    if len == 0 {
        state.select(None);
    } else {
        let index = state.selected().unwrap_or(0).min(len - 1);
        state.select(Some(index));
    }
}

/// Runs the terminal UI until the user quits. Store round trips run as
/// background tasks; their outcomes are drained from the channel on
/// every tick.
pub async fn run(store: Arc<dyn Store>, settings: AppSettings) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = StoreHandle::new(store, tx);
    let mut app = App::new(Session::new(settings.date.clone()), handle);

    // Models are fetched once and kept for the session; reservations
    // are fetched per selected date.
    app.store.fetch_models();
    app.refetch_reservations();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app, &mut rx, settings.tick_rate).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<StoreEvent>,
    tick_rate: Duration,
) -> anyhow::Result<()> {
    loop {
        while let Ok(event) = rx.try_recv() {
            app.on_store_event(event);
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
