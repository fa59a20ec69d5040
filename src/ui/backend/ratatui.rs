use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::PaintCmd;
use crate::ui::core::style::{Color, Mod, Style};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;
use std::io;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub struct RatatuiBackend<'a, 'f> {
    frame: &'a mut Frame<'f>,
}

impl<'a, 'f> RatatuiBackend<'a, 'f> {
    pub fn new(frame: &'a mut Frame<'f>) -> Self {
        Self { frame }
    }
}

impl From<RRect> for Rect {
    fn from(r: RRect) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

impl From<Rect> for RRect {
    fn from(r: Rect) -> Self {
        RRect {
            x: r.x,
            y: r.y,
            width: r.w,
            height: r.h,
        }
    }
}

impl Backend for RatatuiBackend<'_, '_> {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]) {
        let widget = PaintWidget { cmds };
        self.frame.render_widget(widget, area.into());
    }
}

/// Opaque terminal wrapper so the rest of the crate does not need to reference `ratatui` types.
pub struct RatatuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl RatatuiTerminal {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn size(&self) -> io::Result<Rect> {
        let size = self.terminal.size()?;
        Ok(Rect::new(0, 0, size.width, size.height))
    }

    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Backend, Rect),
    {
        self.terminal.draw(|frame| {
            let area: Rect = frame.area().into();
            let mut backend = RatatuiBackend::new(frame);
            f(&mut backend, area);
        })?;
        Ok(())
    }
}

struct PaintWidget<'a> {
    cmds: &'a [PaintCmd],
}

impl Widget for PaintWidget<'_> {
    fn render(self, _area: RRect, buf: &mut Buffer) {
        for cmd in self.cmds {
            match cmd {
                PaintCmd::FillRect { rect, style } => fill_rect(buf, *rect, *style),
                PaintCmd::Text {
                    pos,
                    text,
                    style,
                    clip,
                } => draw_text(buf, *pos, text, *style, *clip),
            }
        }
    }
}

fn to_ratatui_style(s: Style) -> RStyle {
    let mut out = RStyle::default();
    if let Some(fg) = s.fg {
        out = out.fg(to_ratatui_color(fg));
    }
    if let Some(bg) = s.bg {
        out = out.bg(to_ratatui_color(bg));
    }
    out = out.add_modifier(to_ratatui_mods(s.mods));
    out
}

fn to_ratatui_color(c: Color) -> RColor {
    match c {
        Color::Reset => RColor::Reset,
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
        Color::Indexed(i) => RColor::Indexed(i),
    }
}

fn to_ratatui_mods(m: Mod) -> RModifier {
    let mut out = RModifier::empty();
    if m.contains(Mod::BOLD) {
        out |= RModifier::BOLD;
    }
    out
}

fn fill_rect(buf: &mut Buffer, rect: Rect, style: Style) {
    if rect.is_empty() {
        return;
    }
    let style = to_ratatui_style(style);
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(' ').set_style(style);
            }
        }
    }
}

fn draw_text(buf: &mut Buffer, pos: Pos, text: &str, style: Style, clip: Option<Rect>) {
    let style = to_ratatui_style(style);
    // Default clip is the buffer area so we never partially render wide glyphs at the edge.
    let clip = clip.unwrap_or_else(|| Rect::new(buf.area.x, buf.area.y, buf.area.width, buf.area.height));
    let mut x = pos.x;
    let y = pos.y;
    if y < clip.y || y >= clip.bottom() {
        return;
    }
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g) as u16;
        if w == 0 {
            continue;
        }
        if x >= clip.right() {
            break;
        }
        if w > 1 && x.saturating_add(w).saturating_sub(1) >= clip.right() {
            break;
        }
        if !clip.contains(Pos::new(x, y)) {
            x = x.saturating_add(w);
            continue;
        }

        let Some(cell) = buf.cell_mut((x, y)) else {
            break;
        };
        cell.set_symbol(g).set_style(style);

        // Wide glyphs (e.g. katakana alphabets) occupy the next cells as spaces.
        for dx in 1..w {
            let xx = x.saturating_add(dx);
            if !clip.contains(Pos::new(xx, y)) {
                break;
            }
            let Some(cell) = buf.cell_mut((xx, y)) else {
                break;
            };
            cell.set_char(' ').set_style(style);
        }
        x = x.saturating_add(w);
    }
}

// Backend-specific tests live under `tests/unit/ui/backend/test.rs` to avoid depending on `ratatui`.
