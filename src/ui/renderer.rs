/// Presentation layer: double-buffered, diff-based terminal renderer.
///
/// Each frame is built into the `next` buffer, compared cell-by-cell
/// with the previous frame, and only changed cells are re-emitted. All
/// terminal commands are batched with `queue!` and flushed once. This
/// eliminates flicker from full-screen redraws.
///
/// Layout:
///   row 0              HUD (score, high score, boost flag, message)
///   rows 1..h+2        playfield with box border
///   overlays           pause / game-over text centered on the playfield

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor::{self, MoveTo},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::sim::world::{Phase, Snapshot};

// ── Cell: the unit of the back-buffer ──

#[derive(Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Cell {
    const BLANK: Cell = Cell {
        ch: ' ',
        fg: Color::White,
        bg: Color::Reset,
    };
}

// ── Glyphs and colors ──

const SNAKE_HEAD_CH: char = '█';
const SNAKE_BODY_CH: char = '█';
const FOOD_CH: char = '●';
const POWERUP_CH: char = '◆';

const SNAKE_HEAD_FG: Color = Color::DarkGreen;
const SNAKE_BODY_FG: Color = Color::Green;
const FOOD_FG: Color = Color::Red;
const POWERUP_FG: Color = Color::Blue;
const BORDER_FG: Color = Color::Grey;
const HUD_FG: Color = Color::White;

pub struct Renderer {
    out: BufWriter<Stdout>,
    next: Vec<Cell>,
    prev: Vec<Cell>,
    term_w: u16,
    term_h: u16,
    force_redraw: bool,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            out: BufWriter::new(io::stdout()),
            next: vec![],
            prev: vec![],
            term_w: 0,
            term_h: 0,
            force_redraw: true,
        }
    }

    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.out,
            EnterAlternateScreen,
            cursor::Hide,
            Clear(ClearType::All)
        )?;
        Ok(())
    }

    pub fn cleanup(&mut self) -> io::Result<()> {
        execute!(self.out, ResetColor, cursor::Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    // ── Frames ──

    pub fn render(&mut self, snap: &Snapshot) -> io::Result<()> {
        self.begin_frame()?;

        self.draw_hud(snap);
        self.draw_border(snap.grid.width, snap.grid.height);
        self.draw_playfield(snap);

        match snap.phase {
            Phase::GameOver => self.draw_overlay(
                snap.grid,
                &[
                    "GAME OVER".to_string(),
                    format!("Score: {}   High Score: {}", snap.score, snap.high_score),
                    "R: restart   Q: quit".to_string(),
                ],
            ),
            Phase::Playing if snap.paused => self.draw_overlay(
                snap.grid,
                &["PAUSED".to_string(), "Space to resume".to_string()],
            ),
            Phase::Playing => {}
        }

        self.flush_frame()
    }

    /// Title card shown before the first session.
    pub fn render_intro(&mut self) -> io::Result<()> {
        self.begin_frame()?;

        let lines = [
            "V I P E R",
            "",
            "Arrow keys or WASD to move",
            "Space to pause",
            "Q or CTRL+C to quit",
            "",
            "Eat ● to grow, grab ◆ for a speed boost",
            "",
            "Press any key to begin",
        ];
        let top = (self.term_h as usize).saturating_sub(lines.len()) / 2;
        for (i, line) in lines.iter().enumerate() {
            let col = (self.term_w as usize).saturating_sub(line.chars().count()) / 2;
            self.put_str(col, top + i, line, HUD_FG);
        }

        self.flush_frame()
    }

    // ── Frame construction ──

    fn begin_frame(&mut self) -> io::Result<()> {
        let (w, h) = terminal::size()?;
        if w != self.term_w || h != self.term_h {
            self.term_w = w;
            self.term_h = h;
            self.next = vec![Cell::BLANK; w as usize * h as usize];
            self.prev = vec![Cell::BLANK; w as usize * h as usize];
            self.force_redraw = true;
            execute!(self.out, Clear(ClearType::All))?;
        }
        self.next.fill(Cell::BLANK);
        Ok(())
    }

    fn put(&mut self, x: usize, y: usize, ch: char, fg: Color) {
        if x < self.term_w as usize && y < self.term_h as usize {
            self.next[y * self.term_w as usize + x] = Cell {
                ch,
                fg,
                bg: Color::Reset,
            };
        }
    }

    fn put_str(&mut self, x: usize, y: usize, text: &str, fg: Color) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i, y, ch, fg);
        }
    }

    fn draw_hud(&mut self, snap: &Snapshot) {
        let mut hud = format!(" Score: {}   High: {}", snap.score, snap.high_score);
        if snap.boosted {
            hud.push_str("   >> BOOST <<");
        }
        self.put_str(0, 0, &hud, HUD_FG);

        if !snap.message.is_empty() {
            let col = (snap.grid.width as usize + 2).saturating_sub(snap.message.len() + 1);
            self.put_str(col.max(hud.chars().count() + 2), 0, snap.message, Color::Yellow);
        }
    }

    /// Box border around the playfield; playfield origin is (1, 2) in
    /// terminal coordinates.
    fn draw_border(&mut self, grid_w: i32, grid_h: i32) {
        let (w, h) = (grid_w as usize, grid_h as usize);
        self.put(0, 1, '┌', BORDER_FG);
        self.put(w + 1, 1, '┐', BORDER_FG);
        self.put(0, h + 2, '└', BORDER_FG);
        self.put(w + 1, h + 2, '┘', BORDER_FG);
        for x in 1..=w {
            self.put(x, 1, '─', BORDER_FG);
            self.put(x, h + 2, '─', BORDER_FG);
        }
        for y in 2..h + 2 {
            self.put(0, y, '│', BORDER_FG);
            self.put(w + 1, y, '│', BORDER_FG);
        }
    }

    fn draw_playfield(&mut self, snap: &Snapshot) {
        let cell = |x: i32, y: i32| ((x + 1) as usize, (y + 2) as usize);

        let (fx, fy) = cell(snap.food.x, snap.food.y);
        self.put(fx, fy, FOOD_CH, FOOD_FG);

        if let Some(p) = snap.powerup {
            let (px, py) = cell(p.x, p.y);
            self.put(px, py, POWERUP_CH, POWERUP_FG);
        }

        for (i, seg) in snap.snake.iter().enumerate() {
            if !snap.grid.contains(*seg) {
                continue; // a head past the wall on the final frame
            }
            let (sx, sy) = cell(seg.x, seg.y);
            if i == 0 {
                self.put(sx, sy, SNAKE_HEAD_CH, SNAKE_HEAD_FG);
            } else {
                self.put(sx, sy, SNAKE_BODY_CH, SNAKE_BODY_FG);
            }
        }
    }

    fn draw_overlay(&mut self, grid: crate::domain::grid::Grid, lines: &[String]) {
        let top = 2 + (grid.height as usize).saturating_sub(lines.len()) / 2;
        for (i, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            let col = 1 + (grid.width as usize).saturating_sub(width) / 2;
            self.put_str(col, top + i, line, Color::Yellow);
        }
    }

    // ── Diff + emit ──

    fn flush_frame(&mut self) -> io::Result<()> {
        let mut last_fg = None;
        let mut cursor_at: Option<(u16, u16)> = None;

        for y in 0..self.term_h {
            for x in 0..self.term_w {
                let idx = y as usize * self.term_w as usize + x as usize;
                let cell = self.next[idx];
                if !self.force_redraw && cell == self.prev[idx] {
                    continue;
                }

                if cursor_at != Some((x, y)) {
                    queue!(self.out, MoveTo(x, y))?;
                }
                if last_fg != Some(cell.fg) {
                    queue!(self.out, SetForegroundColor(cell.fg))?;
                    last_fg = Some(cell.fg);
                }
                queue!(self.out, SetBackgroundColor(cell.bg), Print(cell.ch))?;
                cursor_at = Some((x + 1, y));
            }
        }

        self.out.flush()?;
        std::mem::swap(&mut self.next, &mut self.prev);
        self.force_redraw = false;
        Ok(())
    }
}
