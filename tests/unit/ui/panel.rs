use super::*;
use crate::core::{Command, DrawMode};
use crate::kernel::services::ports::EditorConfig;
use crate::kernel::OperatorPanelController;

fn row(buf: &Buffer, y: u16) -> String {
    let width = buf.area.width;
    (0..width)
        .map(|x| buf.content[(y * width + x) as usize].symbol())
        .collect::<String>()
        .trim_end()
        .to_string()
}

fn draw_panel() -> OperatorPanelController {
    let mut panel = OperatorPanelController::new(&EditorConfig::default());
    panel.on_command(&Command::OpenDraw);
    panel.on_command(&Command::ApplyDraw {
        mode: DrawMode::StraightLine,
        color: "#336699".to_string(),
    });
    panel
}

#[test]
fn placeholder_is_dimmed() {
    let panel = OperatorPanelController::new(&EditorConfig::default());
    let lines = panel_lines(&panel.view());
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].0, crate::kernel::PLACEHOLDER);
    assert_eq!(lines[0].1.fg, Some(Color::DarkGray));
}

#[test]
fn active_draw_mode_is_highlighted() {
    let lines = panel_lines(&draw_panel().view());
    let texts: Vec<&str> = lines.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(
        texts,
        ["[ Free Drawing ]", "[ Straight Line ]", "Pick Color #336699"]
    );
    assert!(!lines[0].1.add_modifier.contains(Modifier::BOLD));
    assert_eq!(lines[1].1.bg, Some(Color::Cyan));
}

#[test]
fn widget_writes_one_row_per_control() {
    let view = draw_panel().view();
    let mut buf = Buffer::empty(Rect::new(0, 0, 30, 5));
    (&view).render(buf.area, &mut buf);

    assert_eq!(row(&buf, 0), "[ Free Drawing ]");
    assert_eq!(row(&buf, 1), "[ Straight Line ]");
    assert_eq!(row(&buf, 2), "Pick Color #336699");
    assert_eq!(row(&buf, 3), "");
}

#[test]
fn widget_clips_to_area() {
    let view = draw_panel().view();
    let mut buf = Buffer::empty(Rect::new(0, 0, 8, 2));
    (&view).render(buf.area, &mut buf);

    assert_eq!(row(&buf, 0), "[ Free D");
    assert_eq!(row(&buf, 1), "[ Straig");
}
