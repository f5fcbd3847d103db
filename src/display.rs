use std::io;
use tui::backend::CrosstermBackend;
use tui::layout::Rect;
use tui::style::{Color, Style};
use tui::symbols::Marker;
use tui::widgets::canvas::{Canvas, Points};
use tui::widgets::{Block, Borders};
use tui::Terminal;

/// Display is the presentation collaborator. It consumes the machine's
/// framebuffer (one byte per pixel, 0 or 1, row-major) whenever the host
/// sees the redraw flag up. It should abstract the implementation details,
/// so a variety of kinds of screen would work.
pub trait Display {
    /// render a full frame of display data
    fn draw(&mut self, data: &[u8]) -> Result<(), io::Error>;

    /// how many pixels a frame carries
    fn pixel_count(&self) -> usize;
}

// store useful metadata about the screen
struct Resolution(usize, usize);

impl Resolution {
    fn pixel_count(&self) -> usize {
        self.0 * self.1
    }

    fn x_bounds(&self) -> [f64; 2] {
        [0.0, (self.0 - 1) as f64]
    }

    fn y_bounds(&self) -> [f64; 2] {
        [-1.0 * (self.1 - 1) as f64, 0.0]
    }

    /// iterate the (x, y) coords of every pixel holding `value`, in the
    /// float space the TUI canvas expects
    fn plane_from_data<'a>(
        &self,
        data: &'a [u8],
        value: u8,
    ) -> impl std::iter::Iterator<Item = (f64, f64)> + 'a {
        let mut count = self.pixel_count();
        let w = self.0;
        std::iter::from_fn(move || {
            while count > 0 {
                count -= 1;
                if data[count] == value {
                    return Some((
                        (count % w) as f64,        // x
                        -1.0 * (count / w) as f64, // y
                    ));
                }
            }
            None
        })
    }
}

/// monochrome display in a terminal, rendered using TUI and crossterm
pub struct MonoTermDisplay {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    resolution: Resolution,
}

impl MonoTermDisplay {
    pub fn new(x: usize, y: usize) -> Result<MonoTermDisplay, io::Error> {
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        Ok(MonoTermDisplay {
            terminal,
            resolution: Resolution(x, y),
        })
    }
}

impl Display for MonoTermDisplay {
    fn draw(&mut self, data: &[u8]) -> Result<(), io::Error> {
        // make sure we're given exactly the right amount of data to draw
        assert_eq!(
            data.len(),
            self.resolution.pixel_count(),
            "MonoTermDisplay must have correct-sized data to draw"
        );

        // for now this assumes a 1:1 ratio between terminal, chip8 and the
        // internal TUI canvas
        self.terminal.draw(|f| {
            let size = Rect::new(
                0,
                0,
                2 + self.resolution.0 as u16,
                2 + self.resolution.1 as u16,
            );

            let canvas = Canvas::default()
                .block(
                    Block::default()
                        .title("CHIP-8")
                        .borders(Borders::ALL)
                        .style(Style::default().bg(Color::Black)),
                )
                .x_bounds(self.resolution.x_bounds())
                .y_bounds(self.resolution.y_bounds())
                .marker(Marker::Block) //Braille
                .paint(|ctx| {
                    // split the frame into its dark and lit planes; this
                    // just prints blocky points for now
                    ctx.draw(&Points {
                        coords: &self.resolution.plane_from_data(data, 0).collect::<Vec<_>>(),
                        color: Color::Black,
                    });
                    ctx.draw(&Points {
                        coords: &self.resolution.plane_from_data(data, 1).collect::<Vec<_>>(),
                        color: Color::White,
                    });
                });
            f.render_widget(canvas, size);
        })?;
        Ok(())
    }

    fn pixel_count(&self) -> usize {
        self.resolution.pixel_count()
    }
}

/// useful for testing non-display routines
pub struct DummyDisplay {
    frames: usize,
}

impl DummyDisplay {
    pub fn new() -> DummyDisplay {
        DummyDisplay { frames: 0 }
    }

    pub fn frames_drawn(&self) -> usize {
        self.frames
    }
}

impl Default for DummyDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for DummyDisplay {
    fn draw(&mut self, _data: &[u8]) -> Result<(), io::Error> {
        self.frames += 1;
        Ok(())
    }

    fn pixel_count(&self) -> usize {
        64 * 32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Resolution tests
    #[test]
    fn test_pixel_count() {
        let r = Resolution(64, 32);
        assert_eq!(r.pixel_count(), 2048)
    }

    #[test]
    fn test_x_bounds() {
        let r = Resolution(64, 32);
        assert_eq!(r.x_bounds(), [0.0, 63.0]);
    }

    #[test]
    fn test_y_bounds() {
        let r = Resolution(64, 32);
        assert_eq!(r.y_bounds(), [-31.0, 0.0]);
    }

    #[test]
    fn test_plane_iterator_on_blank_frame() {
        let r = Resolution(64, 32);
        assert_eq!(r.plane_from_data(&[0; 2048], 0).count(), 2048);
        assert_eq!(r.plane_from_data(&[0; 2048], 1).count(), 0);
    }

    #[test]
    fn test_plane_iterator_coords() {
        let r = Resolution(64, 32);
        let mut frame = [0u8; 2048];
        frame[64 + 2] = 1; // (2, 1)
        let lit: Vec<_> = r.plane_from_data(&frame, 1).collect();
        assert_eq!(lit, vec![(2.0, -1.0)]);
    }

    // MonoTermDisplay tests
    #[test]
    #[ignore]
    // NB. needs a real terminal on stdout
    fn test_draw_accepts_full_frame() -> Result<(), io::Error> {
        let mut d = MonoTermDisplay::new(64, 32)?;
        d.draw(&[0; 2048])
    }

    #[test]
    fn test_dummy_counts_frames() {
        let mut d = DummyDisplay::new();
        d.draw(&[0; 2048]).unwrap();
        d.draw(&[0; 2048]).unwrap();
        assert_eq!(d.frames_drawn(), 2);
    }
}
