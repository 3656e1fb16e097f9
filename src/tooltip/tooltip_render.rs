use std::time::Instant;

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::label::FloatingLabel;
use crate::widgets::popup::{anchored_popup, clear_area};

/// Draw the label at its position, kept inside the frame. Fading labels are dimmed.
pub fn render_tooltip(frame: &mut Frame, label: &FloatingLabel, now: Instant) {
    if !label.is_displayed(now) {
        return;
    }

    let width = label.outer_width().ceil().min(u16::MAX as f64) as u16;
    let height = (label.line_count() as u16).saturating_add(2);
    let position = label.position();
    let area = anchored_popup(frame.area(), position.left, position.top, width, height);
    if area.width == 0 || area.height == 0 {
        return;
    }

    let text_style = if label.opacity(now) < 1.0 {
        Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(Color::White)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(inner_padding(label)));

    let paragraph = Paragraph::new(label.text()).block(block).style(text_style);

    clear_area(frame, area);
    frame.render_widget(paragraph, area);
}

/// Label padding counts the border column; the block draws the border itself
fn inner_padding(label: &FloatingLabel) -> u16 {
    (label.horizontal_padding() - 1.0).max(0.0).round() as u16
}

#[cfg(test)]
#[path = "tooltip_render_tests.rs"]
mod tooltip_render_tests;
