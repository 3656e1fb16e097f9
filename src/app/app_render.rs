use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::tooltip::render_tooltip;

const HELP_TEXT: &str = "drag on the axis to select a range · c clear · q quit";

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        self.render_header(frame, area);
        self.render_track(frame);
        self.render_ticks(frame);
        self.render_status(frame, area);
        render_tooltip(frame, &self.tooltip.label(), self.now());
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Rect {
            height: 3.min(area.height),
            ..area
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" brush-tooltip ")
            .border_style(Style::default().fg(Color::DarkGray));
        let help = Paragraph::new(HELP_TEXT)
            .block(block)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(help, header);
    }

    fn render_track(&self, frame: &mut Frame) {
        let Some(track) = self.cell_rect(self.brush.track()) else {
            return;
        };
        let selection = self.brush.selection().filter(|s| !s.is_empty());
        let middle = track.height / 2;

        let lines: Vec<Line> = (0..track.height)
            .map(|row| {
                let spans: Vec<Span> = (0..track.width)
                    .map(|col| {
                        let x = (track.x + col) as f64;
                        let base = if row == middle { "─" } else { " " };
                        match selection {
                            Some(s) if x == s.start || x == s.end - 1.0 => Span::styled(
                                "┃",
                                Style::default()
                                    .fg(Color::Yellow)
                                    .bg(Color::Blue)
                                    .add_modifier(Modifier::BOLD),
                            ),
                            Some(s) if x > s.start && x < s.end => {
                                Span::styled(base, Style::default().fg(Color::White).bg(Color::Blue))
                            }
                            _ => Span::styled(base, Style::default().fg(Color::DarkGray)),
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), track);
    }

    fn render_ticks(&self, frame: &mut Frame) {
        let Some(track) = self.cell_rect(self.brush.track()) else {
            return;
        };
        let row = track.y + track.height;
        if row >= frame.area().height {
            return;
        }
        let scale = self.scale();
        let left = format!("{:.0}", scale.domain_min);
        let right = format!("{:.0}", scale.domain_max);
        let gap = (track.width as usize).saturating_sub(left.len() + right.len());
        let ticks = Paragraph::new(format!("{left}{}{right}", " ".repeat(gap)))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(
            ticks,
            Rect {
                y: row,
                height: 1,
                ..track
            },
        );
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let line = match (&self.status, self.brush.selection()) {
            (Some(warning), _) => Line::from(Span::styled(
                format!("config: {warning}"),
                Style::default().fg(Color::Yellow),
            )),
            (None, Some(selection)) => {
                let text = self
                    .scale()
                    .format_selection(selection)
                    .unwrap_or_default();
                Line::from(vec![
                    Span::styled("selection ", Style::default().fg(Color::DarkGray)),
                    Span::styled(text, Style::default().fg(Color::Cyan)),
                ])
            }
            (None, None) => Line::from(Span::styled(
                "no selection",
                Style::default().fg(Color::DarkGray),
            )),
        };
        let status = Rect {
            y: area.y + area.height - 1,
            height: 1,
            ..area
        };
        frame.render_widget(Paragraph::new(line), status);
    }

    /// Integer cell rectangle for page bounds, if it has any area
    fn cell_rect(&self, bounds: crate::brush::Bounds) -> Option<Rect> {
        let rect = Rect::new(
            bounds.x.max(0.0) as u16,
            bounds.y.max(0.0) as u16,
            bounds.width.max(0.0) as u16,
            bounds.height.max(0.0) as u16,
        );
        (rect.width > 0 && rect.height > 0).then_some(rect)
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
