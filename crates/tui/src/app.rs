use std::{io, thread, time::Duration};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use parcel_core::{Parcel, ParcelError, ParcelRequest, ParcelStatus, Quote, SharedRegistry};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap,
    },
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::form::{parse_parcel_id, Field, ParcelForm, TextField};

const TICK_RATE: Duration = Duration::from_millis(250);

const MENU_ITEMS: [&str; 5] = [
    "Add Parcel",
    "View Parcels",
    "Move Parcels",
    "Track Parcel by ID",
    "Exit",
];

#[derive(Debug, Clone)]
struct Theme {
    primary_fg: Color,
    accent: Color,
    muted: Color,
    success: Color,
    warning: Color,
    danger: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_fg: Color::White,
            accent: Color::Cyan,
            muted: Color::DarkGray,
            success: Color::Green,
            warning: Color::Yellow,
            danger: Color::Red,
        }
    }
}

impl Theme {
    fn status_color(&self, status: ParcelStatus) -> Color {
        match status {
            ParcelStatus::Pending => self.muted,
            ParcelStatus::InTransit => self.accent,
            ParcelStatus::OutForDelivery => self.warning,
            ParcelStatus::Delivered => self.success,
        }
    }
}

enum AppEvent {
    Input(Event),
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu,
    AddParcel,
    Parcels,
    Track,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PaymentChoice {
    ViewReceipt,
    Proceed,
    Cancel,
}

impl PaymentChoice {
    const ALL: [PaymentChoice; 3] = [
        PaymentChoice::ViewReceipt,
        PaymentChoice::Proceed,
        PaymentChoice::Cancel,
    ];
}

/// Receipt and payment prompt shown between quoting and registering.
#[derive(Debug, Clone)]
struct PaymentModal {
    request: ParcelRequest,
    quote: Quote,
    preview_id: u32,
    cursor: usize,
    show_receipt: bool,
}

#[derive(Debug, Default)]
struct TrackState {
    input: TextField,
    result: Option<Parcel>,
}

struct UiState {
    menu_cursor: usize,
    status: String,
    status_is_error: bool,
    should_quit: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            menu_cursor: 0,
            status: "Ready".to_string(),
            status_is_error: false,
            should_quit: false,
        }
    }
}

impl UiState {
    fn set_status(&mut self, message: String) {
        self.status = message;
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: String) {
        self.status = message;
        self.status_is_error = true;
    }

    fn move_menu_cursor(&mut self, delta: isize) {
        let len = MENU_ITEMS.len() as isize;
        self.menu_cursor = (self.menu_cursor as isize + delta).rem_euclid(len) as usize;
    }
}

/// Terminal front-end over the shared parcel registry.
pub struct ParcelApp {
    registry: SharedRegistry,
    state: UiState,
    screen: Screen,
    form: ParcelForm,
    payment: Option<PaymentModal>,
    track: TrackState,
    theme: Theme,
}

impl ParcelApp {
    pub fn new(registry: SharedRegistry) -> Self {
        Self {
            registry,
            state: UiState::default(),
            screen: Screen::Menu,
            form: ParcelForm::default(),
            payment: None,
            track: TrackState::default(),
            theme: Theme::default(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        self.state
            .set_status("Welcome to Parcel Routing System!".to_string());

        let mut stdout = io::stdout();
        enable_raw_mode().context("failed to enter raw mode")?;
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

        let outcome = match prepare_terminal(&mut terminal) {
            Ok(()) => self.event_loop(&mut terminal).await,
            Err(err) => Err(err),
        };

        restore_terminal(&mut terminal)?;
        info!(parcels = self.registry.len(), "Session closed");
        outcome
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(128);
        spawn_input_thread(event_tx);

        loop {
            terminal
                .draw(|frame| self.draw(frame))
                .context("failed to draw frame")?;
            if self.state.should_quit {
                return Ok(());
            }
            match event_rx.recv().await {
                Some(AppEvent::Input(event)) => self.handle_input(event),
                Some(AppEvent::Tick) => {}
                None => return Ok(()),
            }
        }
    }

    fn handle_input(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            self.state.should_quit = true;
            return;
        }
        if self.payment.is_some() {
            self.handle_payment_key(key);
            return;
        }
        match self.screen {
            Screen::Menu => self.handle_menu_key(key),
            Screen::AddParcel => self.handle_form_key(key),
            Screen::Parcels => self.handle_parcels_key(key),
            Screen::Track => self.handle_track_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.state.should_quit = true;
            }
            KeyCode::Char('j') | KeyCode::Down => self.state.move_menu_cursor(1),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_menu_cursor(-1),
            KeyCode::Char(ch @ '1'..='5') => {
                self.state.menu_cursor = ch as usize - '1' as usize;
                self.activate_menu_item();
            }
            KeyCode::Enter => self.activate_menu_item(),
            _ => {}
        }
    }

    fn activate_menu_item(&mut self) {
        match self.state.menu_cursor {
            0 => {
                self.form.reset();
                self.screen = Screen::AddParcel;
                self.state.set_status(format!(
                    "Enter Parcel Details (Parcel ID: {})",
                    self.registry.next_id()
                ));
            }
            1 => {
                self.screen = Screen::Parcels;
                if self.registry.is_empty() {
                    self.state.set_status("No parcels to display.".to_string());
                } else {
                    self.state
                        .set_status(format!("Total Parcels: {}", self.registry.len()));
                }
            }
            2 => self.move_parcels(),
            3 => {
                self.track.input.clear();
                self.track.result = None;
                self.screen = Screen::Track;
                self.state
                    .set_status("Enter Parcel ID to track".to_string());
            }
            _ => {
                self.state.set_status("Goodbye!".to_string());
                self.state.should_quit = true;
            }
        }
    }

    fn move_parcels(&mut self) {
        if self.registry.is_empty() {
            self.state.set_error("No parcels to move.".to_string());
            return;
        }
        let summary = self.registry.tick_all();
        self.state.set_status(format!(
            "Moved all parcels one step forward ({} moved, {} delivered, {} already delivered).",
            summary.advanced, summary.delivered, summary.idle
        ));
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.screen = Screen::Menu;
                self.state.set_status("Parcel entry cancelled.".to_string());
            }
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Enter => {
                if self.form.is_last() {
                    self.submit_form();
                } else {
                    self.form.focus_next();
                }
            }
            KeyCode::Left => self.form.focused_mut().move_cursor(-1),
            KeyCode::Right => self.form.focused_mut().move_cursor(1),
            KeyCode::Home => self.form.focused_mut().move_home(),
            KeyCode::End => self.form.focused_mut().move_end(),
            KeyCode::Backspace => self.form.focused_mut().backspace(),
            KeyCode::Delete => self.form.focused_mut().delete(),
            KeyCode::Char(ch) => {
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                    self.form.focused_mut().insert(ch);
                }
            }
            _ => {}
        }
    }

    fn submit_form(&mut self) {
        let request = match self.form.parse() {
            Ok(request) => request,
            Err(message) => {
                self.state.set_error(message);
                return;
            }
        };

        match self
            .registry
            .quote(&request.source, &request.destination, request.weight)
        {
            Ok(quote) => {
                debug!(price = quote.price, distance = quote.total_distance, "Quote ready");
                self.state.set_status(format!(
                    "Total Shipping Price: {}",
                    format_currency(quote.price)
                ));
                self.payment = Some(PaymentModal {
                    request,
                    quote,
                    preview_id: self.registry.next_id(),
                    cursor: 1,
                    show_receipt: false,
                });
            }
            Err(err) => self.state.set_error(describe_error(&err)),
        }
    }

    fn handle_payment_key(&mut self, key: KeyEvent) {
        let Some(modal) = self.payment.as_mut() else {
            return;
        };
        let choice = match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                let len = PaymentChoice::ALL.len();
                modal.cursor = (modal.cursor + len - 1) % len;
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                modal.cursor = (modal.cursor + 1) % PaymentChoice::ALL.len();
                None
            }
            KeyCode::Char('1') => Some(PaymentChoice::ViewReceipt),
            KeyCode::Char('2') => Some(PaymentChoice::Proceed),
            KeyCode::Char('3') | KeyCode::Esc => Some(PaymentChoice::Cancel),
            KeyCode::Enter => Some(PaymentChoice::ALL[modal.cursor]),
            _ => None,
        };

        match choice {
            Some(PaymentChoice::ViewReceipt) => modal.show_receipt = !modal.show_receipt,
            Some(PaymentChoice::Proceed) => self.finish_payment(true),
            Some(PaymentChoice::Cancel) => self.finish_payment(false),
            None => {}
        }
    }

    fn finish_payment(&mut self, confirmed: bool) {
        let Some(modal) = self.payment.take() else {
            return;
        };
        match self.registry.register(modal.request, confirmed) {
            Ok(parcel) => {
                if parcel.id != modal.preview_id {
                    warn!(
                        expected = modal.preview_id,
                        actual = parcel.id,
                        "Parcel id changed during payment"
                    );
                }
                self.form.reset();
                self.screen = Screen::Menu;
                self.state.set_status(format!(
                    "Payment Successful. Parcel {} added successfully!",
                    parcel.id
                ));
            }
            Err(ParcelError::PaymentDeclined { .. }) => {
                self.screen = Screen::Menu;
                self.state
                    .set_error("Payment cancelled. Parcel not added.".to_string());
            }
            Err(err) => self.state.set_error(describe_error(&err)),
        }
    }

    fn handle_parcels_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.screen = Screen::Menu;
                self.state.set_status("Ready".to_string());
            }
            KeyCode::Char('m') | KeyCode::Char('M') => self.move_parcels(),
            _ => {}
        }
    }

    fn handle_track_key(&mut self, key: KeyEvent) {
        let input = &mut self.track.input;
        match key.code {
            KeyCode::Esc => {
                self.screen = Screen::Menu;
                self.state.set_status("Ready".to_string());
            }
            KeyCode::Enter => self.lookup_parcel(),
            KeyCode::Left => input.move_cursor(-1),
            KeyCode::Right => input.move_cursor(1),
            KeyCode::Home => input.move_home(),
            KeyCode::End => input.move_end(),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Char(ch) => input.insert(ch),
            _ => {}
        }
    }

    fn lookup_parcel(&mut self) {
        self.track.result = None;
        let id = match parse_parcel_id(self.track.input.value()) {
            Ok(id) => id,
            Err(message) => {
                self.state.set_error(message);
                return;
            }
        };
        match self.registry.find_by_id(id) {
            Ok(parcel) => {
                self.state
                    .set_status(format!("Parcel {id}: {}", parcel.status));
                self.track.result = Some(parcel);
            }
            Err(ParcelError::NotFound { .. }) => {
                self.state.set_error("Parcel not found.".to_string());
            }
            Err(err) => self.state.set_error(describe_error(&err)),
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let area = frame.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(3),
            ])
            .split(area);

        self.render_title(frame, chunks[0]);
        match self.screen {
            Screen::Menu => self.render_menu(frame, chunks[1]),
            Screen::AddParcel => self.render_form(frame, chunks[1]),
            Screen::Parcels => self.render_parcels(frame, chunks[1]),
            Screen::Track => self.render_track(frame, chunks[1]),
        }
        self.render_status(frame, chunks[2]);

        if let Some(modal) = &self.payment {
            self.render_payment(frame, modal);
        }
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled(
            "Parcel Routing System",
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
        frame.render_widget(title, area);
    }

    fn render_menu(&self, frame: &mut Frame, area: Rect) {
        let height = (MENU_ITEMS.len() as u16)
            .saturating_mul(2)
            .saturating_add(2)
            .min(area.height);
        let width = 32.min(area.width.max(1));
        let menu_area = centered_rect(width, height, area);

        let lines: Vec<Line> = MENU_ITEMS
            .iter()
            .enumerate()
            .flat_map(|(idx, item)| {
                let label = format!("{}. {item}", idx + 1);
                let line = if idx == self.state.menu_cursor {
                    Line::from(Span::styled(
                        format!("▶ {label}"),
                        Style::default()
                            .fg(self.theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(
                        format!("  {label}"),
                        Style::default().fg(self.theme.primary_fg),
                    ))
                };
                [line, Line::from("")]
            })
            .collect();

        let menu = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Menu"));
        frame.render_widget(menu, menu_area);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let mut lines = vec![
            Line::from(format!("Parcel ID: {}", self.registry.next_id())),
            Line::from(""),
        ];
        let mut cursor = None;
        for (row, field) in Field::ALL.into_iter().enumerate() {
            let focused = self.form.focus() == field;
            let label_style = if focused {
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.muted)
            };
            let label = format!("{:<22}", format!("{}:", field.label()));
            let input = self.form.field(field);
            lines.push(Line::from(vec![
                Span::styled(label.clone(), label_style),
                Span::raw(input.value().to_string()),
            ]));
            if focused {
                cursor = Some((label.len() + input.cursor(), row + 2));
            }
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" next / submit  "),
            Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" switch field  "),
            Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" back"),
        ]));

        let form = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Add Parcel"));
        frame.render_widget(form, chunks[0]);

        let locations: Vec<Line> = self
            .registry
            .location_names()
            .into_iter()
            .map(|name| Line::from(format!("• {name}")))
            .collect();
        let sidebar = Paragraph::new(locations)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Available Locations"),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(sidebar, chunks[1]);

        if self.payment.is_none() {
            if let Some((x, y)) = cursor {
                let inner_x = chunks[0].x + 1 + x as u16;
                let inner_y = chunks[0].y + 1 + y as u16;
                frame.set_cursor(
                    inner_x.min(chunks[0].x + chunks[0].width.saturating_sub(2)),
                    inner_y,
                );
            }
        }
    }

    fn render_parcels(&self, frame: &mut Frame, area: Rect) {
        let parcels = self.registry.list();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Parcel Status Dashboard ({} total)", parcels.len()));

        if parcels.is_empty() {
            let empty = Paragraph::new("No parcels to display.")
                .block(block)
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let header = Row::new(["ID", "From ➡ To", "Current", "Status", "Distance", "Price"])
            .style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            );
        let rows = parcels.iter().map(|parcel| {
            Row::new(vec![
                Cell::from(parcel.id.to_string()),
                Cell::from(format!("{} ➡ {}", parcel.source, parcel.destination)),
                Cell::from(parcel.current_location.clone()),
                Cell::from(Span::styled(
                    parcel.status.label(),
                    Style::default().fg(self.theme.status_color(parcel.status)),
                )),
                Cell::from(format!("{} KM", parcel.total_distance)),
                Cell::from(format_currency(parcel.shipping_price)),
            ])
        });
        let widths = [
            Constraint::Length(6),
            Constraint::Min(24),
            Constraint::Length(14),
            Constraint::Length(18),
            Constraint::Length(10),
            Constraint::Length(10),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(block.title(Title::from(" m move parcels · Esc back ").position(Position::Bottom)));
        frame.render_widget(table, area);
    }

    fn render_track(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(5)])
            .split(area);

        let prompt = Paragraph::new(Line::from(vec![
            Span::styled("Parcel ID > ", Style::default().fg(self.theme.accent)),
            Span::raw(self.track.input.value().to_string()),
        ]))
        .block(Block::default().borders(Borders::ALL).title("Track Parcel"));
        frame.render_widget(prompt, chunks[0]);
        frame.set_cursor(
            chunks[0].x + 1 + 12 + self.track.input.cursor() as u16,
            chunks[0].y + 1,
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .title("Parcel Tracking Details");
        let Some(parcel) = &self.track.result else {
            let hint = Paragraph::new("Type an id and press Enter.")
                .style(Style::default().fg(self.theme.muted))
                .block(block);
            frame.render_widget(hint, chunks[1]);
            return;
        };

        let mut lines = vec![
            detail_line("Parcel ID", parcel.id.to_string()),
            detail_line("Sender", parcel.sender.clone()),
            detail_line("Receiver", parcel.receiver.clone()),
            detail_line("From", parcel.source.clone()),
            detail_line("Current Location", parcel.current_location.clone()),
            detail_line("Destination", parcel.destination.clone()),
            Line::from(vec![
                Span::raw(format!("{:<18}: ", "Status")),
                Span::styled(
                    parcel.status.label(),
                    Style::default()
                        .fg(self.theme.status_color(parcel.status))
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            detail_line(
                "Route",
                parcel
                    .route
                    .iter()
                    .map(|edge| edge.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            detail_line(
                "Next Stop",
                parcel.next_stop().unwrap_or("-").to_string(),
            ),
            detail_line("Hops Remaining", parcel.remaining_hops().to_string()),
            Line::from(""),
            Line::from(Span::styled(
                "History",
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        lines.extend(parcel.history.iter().map(|event| {
            Line::from(format!(
                "  {}  {:<12} {}",
                event
                    .at
                    .with_timezone(&chrono::Local)
                    .format("%H:%M:%S"),
                event.location,
                event.status
            ))
        }));

        let details = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
        frame.render_widget(details, chunks[1]);
    }

    fn render_payment(&self, frame: &mut Frame, modal: &PaymentModal) {
        let frame_area = frame.size();
        let height = if modal.show_receipt { 20 } else { 9 };
        let area = centered_rect(
            56.min(frame_area.width.saturating_sub(2)).max(24),
            height,
            frame_area,
        );
        frame.render_widget(Clear, area);

        let price = format_currency(modal.quote.price);
        let mut lines = vec![Line::from(Span::styled(
            format!("Total Shipping Price: {price}"),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        lines.push(Line::from(""));
        for (idx, choice) in PaymentChoice::ALL.into_iter().enumerate() {
            let label = match choice {
                PaymentChoice::ViewReceipt if modal.show_receipt => "Hide Receipt".to_string(),
                PaymentChoice::ViewReceipt => "View Receipt".to_string(),
                PaymentChoice::Proceed => format!("Proceed Payment of {price}"),
                PaymentChoice::Cancel => "Cancel Order".to_string(),
            };
            let text = format!("{}. {label}", idx + 1);
            lines.push(if idx == modal.cursor {
                Line::from(Span::styled(
                    format!("▶ {text}"),
                    Style::default()
                        .fg(self.theme.accent)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("  {text}"))
            });
        }

        if modal.show_receipt {
            let request = &modal.request;
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "SHIPPING RECEIPT",
                Style::default().fg(self.theme.accent),
            )));
            lines.push(detail_line("Parcel ID", modal.preview_id.to_string()));
            lines.push(detail_line("Sender", request.sender.clone()));
            lines.push(detail_line("Receiver", request.receiver.clone()));
            lines.push(detail_line("From", request.source.clone()));
            lines.push(detail_line("To", request.destination.clone()));
            lines.push(detail_line("Weight", format!("{:.2} KG", request.weight)));
            lines.push(detail_line(
                "Distance",
                format!("{} KM", modal.quote.total_distance),
            ));
            lines.push(detail_line("Shipping Price", price.clone()));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Payment"))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let color = if self.state.status_is_error {
            self.theme.danger
        } else {
            self.theme.primary_fg
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(
            self.state.status.clone(),
            Style::default().fg(color),
        )))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

fn describe_error(err: &ParcelError) -> String {
    match err {
        ParcelError::InvalidLocation { .. } => "Invalid source or destination.".to_string(),
        ParcelError::NoRouteFound { .. } => "No available route between locations.".to_string(),
        ParcelError::PaymentDeclined { .. } => "Payment cancelled. Parcel not added.".to_string(),
        ParcelError::NotFound { .. } => "Parcel not found.".to_string(),
        other => other.to_string(),
    }
}

fn detail_line(label: &str, value: String) -> Line<'static> {
    Line::from(format!("{label:<18}: {value}"))
}

fn prepare_terminal<B: Backend>(terminal: &mut Terminal<B>) -> Result<()> {
    terminal.hide_cursor().context("failed to hide cursor")?;
    terminal.clear().context("failed to clear terminal")?;
    Ok(())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

fn spawn_input_thread(sender: mpsc::Sender<AppEvent>) {
    thread::spawn(move || loop {
        match event::poll(TICK_RATE) {
            Ok(true) => match event::read() {
                Ok(evt) => {
                    if sender.blocking_send(AppEvent::Input(evt)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            },
            Ok(false) => {
                if sender.blocking_send(AppEvent::Tick).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn format_currency(value: u32) -> String {
    format!("₹{value}")
}
