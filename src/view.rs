use std::io::{self, Write};

use termion::{clear, cursor};

use crate::{Board, Evolution, Glyphs, Sim};

/// How frames are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// redraws in place using terminal escape codes.
    Terminal,
    /// appends raw text, for pipes and files.
    Plain,
}

pub struct View {
    glyphs: Glyphs,
    mode: Mode,
}

impl View {
    pub fn new(glyphs: Glyphs, mode: Mode) -> Self {
        Self { glyphs, mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn display(&self, out: &mut impl Write, sim: &Sim, evolution: Evolution) -> io::Result<()> {
        let frame = match self.mode {
            Mode::Terminal => {
                let size = termion::terminal_size().ok();
                self.terminal_frame(sim, evolution, size)
            }
            Mode::Plain => self.plain_frame(sim, evolution),
        };
        out.write_all(frame.as_bytes())?;
        out.flush()
    }

    /// A full screen redraw, clipped to `size` (columns, rows) when known.
    /// The last screen row is kept for the status line.
    pub fn terminal_frame(
        &self,
        sim: &Sim,
        evolution: Evolution,
        size: Option<(u16, u16)>,
    ) -> String {
        let board = sim.board();
        let (columns, lines) = size
            .map(|(w, h)| (w as usize, h.saturating_sub(1) as usize))
            .unwrap_or((board.width(), board.height()));

        let mut result = format!("{}", clear::All);
        let rendered = board.render_with(self.glyphs);
        let mut shown = 0;
        for (index, line) in rendered.lines().take(lines).enumerate() {
            let goto = cursor::Goto(1, index as u16 + 1);
            let line: String = line.chars().take(columns).collect();
            result += &format!("{goto}{line}");
            shown += 1;
        }
        let goto = cursor::Goto(1, shown as u16 + 1);
        result += &format!("{goto}{}", status(sim.generation(), evolution));
        result
    }

    /// The board followed by the status line. Trailing whitespace of each
    /// line is trimmed, so a blank dead glyph leaves no padding behind.
    pub fn plain_frame(&self, sim: &Sim, evolution: Evolution) -> String {
        let mut result = String::new();
        for line in sim.board().render_with(self.glyphs).lines() {
            result += line.trim_end();
            result.push('\n');
        }
        result += &format!("{}\n\n", status(sim.generation(), evolution));
        result
    }
}

fn status(generation: u64, evolution: Evolution) -> String {
    let state = match evolution {
        Evolution::Running => "running".to_string(),
        Evolution::Extinct => "extinct".to_string(),
        Evolution::StillLife => "still life".to_string(),
        Evolution::Oscillator { period } => format!("oscillator, period {period}"),
    };
    format!("generation {generation}: {state}")
}

/// one line description of a board.
pub fn summary(board: &Board) -> String {
    format!(
        "{}x{} board, {} alive",
        board.width(),
        board.height(),
        board.live_count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim(seed: &str) -> Sim {
        Sim::new(seed.parse().unwrap())
    }

    #[test]
    fn plain_frame_has_board_and_status() {
        let view = View::new(Glyphs::new('#', '.'), Mode::Plain);
        let frame = view.plain_frame(&sim("1-\n-1"), Evolution::Running);
        assert_eq!(frame, "#.\n.#\ngeneration 0: running\n\n");
    }

    #[test]
    fn plain_frame_uses_alive_glyph() {
        let view = View::new(Glyphs::default(), Mode::Plain);
        let mut sim = sim("11\n11");
        let evolution = sim.step();
        let frame = view.plain_frame(&sim, evolution);
        assert_eq!(frame, "11\n11\ngeneration 1: still life\n\n");
    }

    #[test]
    fn plain_frame_trims_blank_dead_cells() {
        let view = View::new(Glyphs::new('#', ' '), Mode::Plain);
        let frame = view.plain_frame(&sim("1-\n--\n-1"), Evolution::Running);
        assert_eq!(frame, "#\n\n #\ngeneration 0: running\n\n");
    }

    #[test]
    fn terminal_frame_is_clipped() {
        let view = View::new(Glyphs::default(), Mode::Terminal);
        let sim = sim("111\n111\n111");
        let frame = view.terminal_frame(&sim, Evolution::Oscillator { period: 2 }, Some((2, 3)));
        let expected = format!(
            "{}{}11{}11{}generation 0: oscillator, period 2",
            clear::All,
            cursor::Goto(1, 1),
            cursor::Goto(1, 2),
            cursor::Goto(1, 3),
        );
        assert_eq!(frame, expected);
    }

    #[test]
    fn summary_counts_living_cells() {
        let board = "1-\n11".parse().unwrap();
        assert_eq!(summary(&board), "2x2 board, 3 alive");
    }
}
