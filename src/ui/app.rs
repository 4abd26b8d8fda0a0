use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use itertools::Itertools;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Flex, Layout, Margin, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{
        Block, BorderType, Cell, Clear, HighlightSpacing, Paragraph, Row, Scrollbar,
        ScrollbarOrientation, ScrollbarState, Table, TableState,
    },
};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::app::controller::{QueryController, QueryError};
use crate::config::{ALERT_DURATION_MS, HEADER, INFO_TEXT, ITEM_HEIGHT, PALETTES, POLL_DURATION_MS};
use crate::data::CoinSnapshot;
use crate::ui::{CHANGE_COLUMN, CoinRow, CoinTable, TableColors};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InputMode {
    Normal,
    Search,
}

pub struct TuiApp {
    state: TableState,
    scroll_state: ScrollbarState,
    colors: TableColors,
    color_index: usize,
    controller: QueryController,
    table: CoinTable,
    input: String,
    mode: InputMode,
    loading: bool,
    alert: Option<(String, Instant)>,
}

impl TuiApp {
    pub fn new() -> Self {
        Self {
            state: TableState::default(),
            scroll_state: ScrollbarState::new(0),
            colors: TableColors::new(&PALETTES[0]),
            color_index: 0,
            controller: QueryController::new(),
            table: CoinTable::new(),
            input: String::new(),
            mode: InputMode::Normal,
            loading: true,
            alert: None,
        }
    }

    /// Applies the outcome of the startup fetch. Failures only reach the log.
    fn on_fetched(&mut self, fetched: anyhow::Result<Vec<CoinSnapshot>>) {
        self.loading = false;
        match fetched {
            Ok(snapshots) => {
                log::info!("Loaded {} coin snapshots", snapshots.len());
                let rows = self.controller.load(snapshots);
                self.show(&rows);
            }
            Err(e) => log::error!("Error fetching crypto data: {e:?}"),
        }
    }

    fn show(&mut self, rows: &[CoinSnapshot]) {
        self.table.render(rows);
        let selected = if self.table.is_empty() { None } else { Some(0) };
        self.state = TableState::default().with_selected(selected);
        self.scroll_state = ScrollbarState::new(self.table.len().saturating_sub(1) * ITEM_HEIGHT);
    }

    fn apply(&mut self, outcome: Result<Vec<CoinSnapshot>, QueryError>) {
        match outcome {
            Ok(rows) => self.show(&rows),
            Err(e) => {
                log::debug!("Alert: {e}");
                self.alert = Some((e.to_string(), Instant::now()));
            }
        }
    }

    fn search(&mut self) {
        let outcome = self.controller.search(&self.input);
        self.apply(outcome);
    }

    fn input_changed(&mut self) {
        if let Some(rows) = self.controller.clear_input(&self.input) {
            self.show(&rows);
        }
    }

    fn sort_by_market_cap(&mut self) {
        let outcome = self.controller.sort_by_market_cap();
        self.apply(outcome);
    }

    fn sort_by_percent_change(&mut self) {
        let outcome = self.controller.sort_by_percent_change();
        self.apply(outcome);
    }

    fn selected_row(&self) -> Option<&CoinRow> {
        self.state.selected().and_then(|i| self.table.rows().get(i))
    }

    fn next_row(&mut self) {
        if self.table.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i >= self.table.len() - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.state.select(Some(i));
        self.scroll_state = self.scroll_state.position(i * ITEM_HEIGHT);
    }

    fn previous_row(&mut self) {
        if self.table.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(0) => 0,
            Some(i) => i - 1,
            None => 0,
        };
        self.state.select(Some(i));
        self.scroll_state = self.scroll_state.position(i * ITEM_HEIGHT);
    }

    fn next_color(&mut self) {
        self.color_index = (self.color_index + 1) % PALETTES.len();
    }

    fn previous_color(&mut self) {
        let count = PALETTES.len();
        self.color_index = (self.color_index + count - 1) % count;
    }

    fn set_colors(&mut self) {
        self.colors = TableColors::new(&PALETTES[self.color_index]);
    }

    /// Returns `true` when the user asked to quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // An alert swallows the next key, like a modal dialog
        if self.alert.take().is_some() {
            return false;
        }

        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        match self.mode {
            InputMode::Normal => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return true,
                KeyCode::Char('j') | KeyCode::Down => self.next_row(),
                KeyCode::Char('k') | KeyCode::Up => self.previous_row(),
                KeyCode::Char('l') | KeyCode::Right if shift => self.next_color(),
                KeyCode::Char('h') | KeyCode::Left if shift => self.previous_color(),
                KeyCode::Char('/') => self.mode = InputMode::Search,
                KeyCode::Char('m') => self.sort_by_market_cap(),
                KeyCode::Char('c') => self.sort_by_percent_change(),
                KeyCode::Enter => self.search(),
                _ => {}
            },
            InputMode::Search => match key.code {
                KeyCode::Esc => self.mode = InputMode::Normal,
                KeyCode::Enter => {
                    self.mode = InputMode::Normal;
                    self.search();
                }
                KeyCode::Backspace => {
                    // Nothing deleted, nothing changed
                    if self.input.pop().is_some() {
                        self.input_changed();
                    }
                }
                KeyCode::Char(c) => {
                    self.input.push(c);
                    self.input_changed();
                }
                _ => {}
            },
        }
        false
    }

    pub fn run(
        mut self,
        mut terminal: DefaultTerminal,
        mut rx: mpsc::UnboundedReceiver<anyhow::Result<Vec<CoinSnapshot>>>,
    ) -> Result<()> {
        loop {
            while let Ok(fetched) = rx.try_recv() {
                self.on_fetched(fetched);
            }

            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(Duration::from_millis(POLL_DURATION_MS))? {
                // Drain ALL events, not just one
                while event::poll(Duration::from_millis(0))? {
                    if let Event::Key(key) = event::read()? {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                }
            }
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let vertical = &Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(5),
        ]);
        let rects = vertical.split(frame.area());
        self.set_colors();
        self.render_input(frame, rects[0]);
        self.render_table(frame, rects[1]);
        self.render_scrollbar(frame, rects[1]);
        self.render_footer(frame, rects[2]);
        let expired = self
            .alert
            .as_ref()
            .is_some_and(|(_, shown_at)| shown_at.elapsed().as_millis() > ALERT_DURATION_MS.into());
        if expired {
            self.alert = None;
        }
        if let Some((message, _)) = &self.alert {
            self.render_alert(frame, message);
        }
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let (title, border) = match self.mode {
            InputMode::Search => ("Search (Enter to run, Esc to leave)", self.colors.footer_border_color),
            InputMode::Normal => ("Search (/)", self.colors.input_border_color),
        };
        let input = Paragraph::new(self.input.as_str())
            .style(Style::new().fg(self.colors.row_fg).bg(self.colors.buffer_bg))
            .block(
                Block::bordered()
                    .title(title)
                    .border_style(Style::new().fg(border)),
            );
        frame.render_widget(input, area);
    }

    fn render_alert(&self, frame: &mut Frame, message: &str) {
        let area = self.popup_area(frame.area(), 40, 20);
        frame.render_widget(Clear, area);
        let paragraph = Paragraph::new(message)
            .block(Block::bordered().title("Alert"))
            .style(Style::default())
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }

    fn popup_area(&self, area: Rect, percent_x: u16, percent_y: u16) -> Rect {
        let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
        let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
        let [area] = vertical.areas(area);
        let [area] = horizontal.areas(area);
        area
    }

    fn render_table(&mut self, frame: &mut Frame, area: Rect) {
        let header_style = Style::default()
            .fg(self.colors.header_fg)
            .bg(self.colors.header_bg);
        let selected_row_style = Style::default()
            .add_modifier(Modifier::REVERSED)
            .fg(self.colors.selected_row_style_fg);

        let header: Row<'_> = HEADER
            .into_iter()
            .map(Cell::from)
            .collect::<Row>()
            .style(header_style);

        let rows = self.table.rows().iter().enumerate().map(|(i, row)| {
            let bg = if i % 2 == 0 {
                self.colors.normal_row_color
            } else {
                self.colors.alt_row_color
            };
            let change_style = Style::new().fg(self.colors.change_color(row.tint));

            row.cells()
                .into_iter()
                .enumerate()
                .map(|(col, text)| {
                    let cell = Cell::from(text);
                    if col == CHANGE_COLUMN {
                        cell.style(change_style)
                    } else {
                        cell
                    }
                })
                .collect::<Row>()
                .style(Style::new().fg(self.colors.row_fg).bg(bg))
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Fill(2),
                Constraint::Length(8),
                Constraint::Fill(1),
                Constraint::Length(9),
                Constraint::Fill(2),
                Constraint::Fill(2),
            ],
        )
        .header(header)
        .row_highlight_style(selected_row_style)
        .highlight_spacing(HighlightSpacing::Always)
        .bg(self.colors.buffer_bg);

        frame.render_stateful_widget(table, area, &mut self.state);
    }

    fn render_scrollbar(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_stateful_widget(
            Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            area.inner(Margin {
                vertical: 1,
                horizontal: 1,
            }),
            &mut self.scroll_state,
        );
    }

    fn status_line(&self) -> String {
        if self.loading {
            return "Loading…".to_string();
        }
        let mut status = format!(
            "Sorted by: {} | {} of {} coins",
            self.controller.sort_mode(),
            self.table.len(),
            self.controller.snapshots().len()
        );
        if let Some(row) = self.selected_row() {
            status.push_str(&format!(" | {} {}", row.id, row.image));
        }
        status
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let lines = INFO_TEXT
            .iter()
            .map(|text| Line::from(*text))
            .chain(std::iter::once(Line::from(self.status_line())))
            .collect_vec();
        let info_footer = Paragraph::new(lines)
            .style(
                Style::new()
                    .fg(self.colors.row_fg)
                    .bg(self.colors.buffer_bg),
            )
            .centered()
            .block(
                Block::bordered()
                    .border_type(BorderType::Double)
                    .border_style(Style::new().fg(self.colors.footer_border_color)),
            );
        frame.render_widget(info_footer, area);
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}
