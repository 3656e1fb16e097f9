use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rectangle of `width` x `height` whose top-left corner is as close to
/// `(left, top)` as the frame allows. The result always lies inside `frame_area`.
pub fn anchored_popup(frame_area: Rect, left: f64, top: f64, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    let max_x = frame_area.x + frame_area.width - popup_width;
    let max_y = frame_area.y + frame_area.height - popup_height;

    Rect {
        x: clamp_coord(left, frame_area.x, max_x),
        y: clamp_coord(top, frame_area.y, max_y),
        width: popup_width,
        height: popup_height,
    }
}

fn clamp_coord(value: f64, min: u16, max: u16) -> u16 {
    if value.is_nan() {
        return min;
    }
    value.round().clamp(min as f64, max as f64) as u16
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
