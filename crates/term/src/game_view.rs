//! GameView: maps an [`Engine`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Engine, Randomizer, Shape};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Block;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
/// Terminal columns reserved right of the board
const PANEL_W: u16 = 14;

/// Draws the board, the falling shape and a side panel with the preview.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Top-left corner of a cell grid on screen
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Board size in cells that fits a viewport, leaving room for the
    /// border and the side panel.
    pub fn board_size_for(&self, viewport: Viewport) -> (u16, u16) {
        let columns = viewport.width.saturating_sub(2 + PANEL_W) / self.cell_w;
        let rows = viewport.height.saturating_sub(2) / self.cell_h;
        (columns, rows)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into<R: Randomizer>(
        &self,
        engine: &Engine<R>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let grid = engine.grid();
        let board_w = grid.columns().saturating_mul(self.cell_w);
        let board_h = grid.rows().saturating_mul(self.cell_h);
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_h.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w.saturating_add(PANEL_W)) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        let well = Origin {
            x: start_x + 1,
            y: start_y + 1,
        };

        fb.fill_rect(well.x, well.y, board_w, board_h, ' ', CellStyle::new(WELL_BG, WELL_BG));
        draw_border(
            fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0)),
        );

        let empty = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                match grid.get(column as i32, row as i32) {
                    Some(block) => self.draw_block(fb, well, block, 0, 0),
                    None => self.fill_cell(fb, well, column, row, '·', empty),
                }
            }
        }

        if let Some(shape) = engine.falling_shape() {
            for &block in shape.blocks() {
                if grid.contains(block.column, block.row) {
                    self.draw_block(fb, well, block, 0, 0);
                }
            }
        }

        let panel = Origin {
            x: start_x.saturating_add(frame_w).saturating_add(2),
            y: start_y,
        };
        self.draw_side_panel(fb, engine, panel, viewport);

        if engine.is_over() {
            draw_centered(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<R: Randomizer>(&self, engine: &Engine<R>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(engine, viewport, &mut fb);
        fb
    }

    fn draw_side_panel<R: Randomizer>(
        &self,
        fb: &mut FrameBuffer,
        engine: &Engine<R>,
        panel: Origin,
        viewport: Viewport,
    ) {
        if panel.x >= viewport.width || viewport.width - panel.x < 8 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = panel.y;
        fb.put_str(panel.x, y, "SCORE", label);
        fb.put_u32(panel.x, y + 1, engine.score(), value);
        y += 3;

        fb.put_str(panel.x, y, "LEVEL", label);
        fb.put_u32(panel.x, y + 1, engine.level(), value);
        y += 3;

        fb.put_str(panel.x, y, "NEXT", label);
        if let Some(next) = engine.next_shape() {
            self.draw_preview(fb, next, Origin { x: panel.x, y: y + 1 });
        }
    }

    /// Draw a preview shape relative to its own anchor
    fn draw_preview(&self, fb: &mut FrameBuffer, shape: &Shape, at: Origin) {
        // Some layouts reach one column left of the anchor.
        for &block in shape.blocks() {
            self.draw_block(fb, at, block, 1 - shape.column(), -shape.row());
        }
    }

    /// Draw `block` shifted by `(dc, dr)` cells from its own position
    fn draw_block(&self, fb: &mut FrameBuffer, origin: Origin, block: Block, dc: i32, dr: i32) {
        let (Ok(column), Ok(row)) = (
            u16::try_from(block.column + dc),
            u16::try_from(block.row + dr),
        ) else {
            return;
        };
        let style = CellStyle::new(Rgb::of_block(block.color), WELL_BG).bold();
        self.fill_cell(fb, origin, column, row, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: Origin,
        column: u16,
        row: u16,
        ch: char,
        style: CellStyle,
    ) {
        let x = origin.x.saturating_add(column.saturating_mul(self.cell_w));
        let y = origin.y.saturating_add(row.saturating_mul(self.cell_h));
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ch, style);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x.saturating_add(w - 1), y.saturating_add(h - 1));

    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    for cx in x + 1..right {
        fb.put_char(cx, y, '─', style);
        fb.put_char(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', style);
        fb.put_char(right, cy, '│', style);
    }
}

fn draw_centered(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
    let ty = y.saturating_add(h / 2);
    fb.put_str(tx, ty, text, CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EngineConfig, SequenceRandomizer};
    use crate::types::{BlockColor, ShapeKind};

    fn engine() -> Engine<SequenceRandomizer> {
        let rng = SequenceRandomizer::new(vec![ShapeKind::O], vec![BlockColor::Red]);
        let mut engine = Engine::new(EngineConfig::default(), rng);
        engine.begin_game();
        engine.new_shape();
        engine
    }

    fn count(fb: &FrameBuffer, ch: char) -> usize {
        fb.cells().iter().filter(|c| c.ch == ch).count()
    }

    #[test]
    fn renders_falling_and_preview_shapes() {
        let fb = GameView::default().render(&engine(), Viewport::new(60, 24));
        // Falling O and preview O, 4 blocks each, 2 columns per block.
        assert_eq!(count(&fb, '█'), 16);
        let red = Rgb::of_block(BlockColor::Red);
        assert!(fb
            .cells()
            .iter()
            .filter(|c| c.ch == '█')
            .all(|c| c.style.fg == red));
    }

    #[test]
    fn renders_score_and_level() {
        let mut engine = engine();
        engine.set_progress(1230, 4);
        let fb = GameView::default().render(&engine, Viewport::new(60, 24));
        let screen: String = (0..fb.height())
            .map(|y| fb.row(y).iter().map(|c| c.ch).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(screen.contains("SCORE"));
        assert!(screen.contains("1230"));
        assert!(screen.contains("LEVEL"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let fb = GameView::default().render(&engine(), Viewport::new(3, 2));
        assert_eq!(fb.cells().len(), 6);
    }

    #[test]
    fn board_size_leaves_room_for_border_and_panel() {
        let view = GameView::default();
        assert_eq!(view.board_size_for(Viewport::new(80, 24)), (32, 22));
    }
}
