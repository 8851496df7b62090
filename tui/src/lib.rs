//! TUI rendering for Committed using ratatui.

mod input;
mod theme;

pub use input::{read_event, resize_event, to_event};
pub use theme::{Palette, ThemeRegistry, styles};

use std::iter;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use committed_engine::{Composer, PanelId, PanelView};

const HORIZONTAL_MARGIN: u16 = 2;
const VERTICAL_MARGIN: u16 = 1;

/// Main draw function
pub fn draw(frame: &mut Frame, composer: &Composer, themes: &ThemeRegistry) {
    let palette = themes.palette();
    let bg_block = Block::default().style(styles::base(&palette));
    frame.render_widget(bg_block, frame.area());

    let views = composer.panel_views();
    let constraints: Vec<Constraint> = views
        .iter()
        .map(|view| Constraint::Length(height(view)))
        .chain(iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .spacing(1)
        .constraints(constraints)
        .split(frame.area());

    for (view, area) in views.iter().zip(chunks.iter()) {
        draw_panel(frame, view, *area, &palette);
    }
}

fn height(view: &PanelView) -> u16 {
    u16::try_from(view.lines.len()).unwrap_or(u16::MAX)
}

fn draw_panel(frame: &mut Frame, view: &PanelView, area: Rect, palette: &Palette) {
    if area.height == 0 {
        return;
    }

    let lines: Vec<Line> = match view.id {
        PanelId::Status => view
            .lines
            .iter()
            .map(|line| hint_line(line, palette))
            .collect(),
        _ => {
            let style = panel_style(view, palette);
            view.lines
                .iter()
                .map(|line| Line::styled(line.clone(), style))
                .collect()
        }
    };
    frame.render_widget(Paragraph::new(lines), area);

    if let Some((x, y)) = view.cursor
        && view.focused
        && x < area.width
        && y < area.height
    {
        frame.set_cursor_position(Position::new(area.x + x, area.y + y));
    }
}

/// Split a hint line so `<key>` tokens stand out from their labels.
fn hint_line(line: &str, palette: &Palette) -> Line<'static> {
    let mut spans = Vec::new();
    let mut rest = line;
    while let Some(start) = rest.find('<') {
        let Some(len) = rest[start..].find('>') else {
            break;
        };
        let end = start + len + 1;
        if start > 0 {
            spans.push(Span::styled(
                rest[..start].to_string(),
                styles::key_hint(palette),
            ));
        }
        spans.push(Span::styled(
            rest[start..end].to_string(),
            styles::key_highlight(palette),
        ));
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        spans.push(Span::styled(rest.to_string(), styles::key_hint(palette)));
    }
    Line::from(spans)
}

fn panel_style(view: &PanelView, palette: &Palette) -> Style {
    match view.id {
        PanelId::Status => styles::key_hint(palette),
        PanelId::Footer => styles::trailer(palette),
        PanelId::Author | PanelId::Header | PanelId::Body if view.focused => {
            styles::focused(palette)
        }
        PanelId::Author | PanelId::Header | PanelId::Body => styles::blurred(palette),
    }
}
