use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use crate::kernel::{ControlKind, PanelBody, PanelView};

/// One styled line per control; the placeholder renders dimmed.
pub fn panel_lines(view: &PanelView) -> Vec<(String, Style)> {
    match &view.body {
        PanelBody::Placeholder(text) => {
            vec![(text.to_string(), Style::default().fg(Color::DarkGray))]
        }
        PanelBody::Controls(controls) => controls
            .iter()
            .map(|control| match &control.kind {
                ControlKind::Button(_) if control.is_accent() => (
                    format!("[ {} ]", control.label),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                ControlKind::Button(_) => (format!("[ {} ]", control.label), Style::default()),
                ControlKind::ColorPicker(value) => (
                    format!("{} {}", control.label, value),
                    Style::default().fg(Color::Yellow),
                ),
            })
            .collect(),
    }
}

impl Widget for &PanelView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        for (row, (text, style)) in panel_lines(self)
            .into_iter()
            .take(area.height as usize)
            .enumerate()
        {
            buf.set_stringn(
                area.x,
                area.y + row as u16,
                text,
                area.width as usize,
                style,
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/panel.rs"]
mod tests;
