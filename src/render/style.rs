//! Terminal text rendering of pixel grids.
//!
//! Every cell of the canvas becomes one glyph (or glyph pair) chosen by the
//! style and pixel-width mode, optionally wrapped in a 24-bit colour escape
//! sampled from the gradient. Canvases wider than the terminal are split into
//! bands stacked vertically.

use crate::types::{Direction, PixelGrid, PixelWidthMode, StyleMode};

use super::axis::AxisMap;
use super::gradient::Gradient;
use super::terminal::{FALLBACK_COLUMNS, RESET};

/// Glyph drawn for lit pixels in the simple-block style.
const SIMPLE_BLOCK: &str = "_|";

/// Everything that shapes the rendered text apart from the gradient itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub direction: Direction,
    pub pixel_width: PixelWidthMode,
    pub style: StyleMode,
    /// Emit colour escapes (already resolved against the terminal).
    pub color: bool,
    /// Usable terminal columns.
    pub columns: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            pixel_width: PixelWidthMode::default(),
            style: StyleMode::default(),
            color: false,
            columns: FALLBACK_COLUMNS,
        }
    }
}

/// Renders pixel grids as terminal text.
#[derive(Debug, Clone)]
pub struct StyleRenderer<'a> {
    gradient: &'a Gradient,
    options: RenderOptions,
}

impl<'a> StyleRenderer<'a> {
    pub fn new(gradient: &'a Gradient, options: RenderOptions) -> Self {
        Self { gradient, options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a grid. A grid without ink renders as the empty string.
    pub fn render(&self, grid: &PixelGrid) -> String {
        let Some(axis) = AxisMap::new(grid) else {
            return String::new();
        };

        let style = self.options.style;
        let width_mode = style.effective_width(self.options.pixel_width);
        let band_width = (self.options.columns / width_mode.cell_cols()).max(1);

        let width = grid.width();
        let rows = grid.height() + usize::from(style.has_trailing_row());

        let mut lines: Vec<String> = Vec::new();
        let mut x0 = 0;
        while x0 < width {
            let x1 = width.min(x0 + band_width);
            for y in 0..rows {
                let mut line = String::new();
                for x in x0..x1 {
                    let glyph = cell_glyph(grid, x, y, style, width_mode);
                    self.push_glyph(&mut line, &glyph, &axis, x, y);
                }
                lines.push(line);
            }
            if x1 < width {
                lines.push(String::new());
            }
            x0 = x1;
        }

        lines.join("\n")
    }

    fn push_glyph(&self, line: &mut String, glyph: &str, axis: &AxisMap, x: usize, y: usize) {
        if !self.options.color || glyph.trim().is_empty() {
            line.push_str(glyph);
            return;
        }
        let t = axis.t_at(x, y, self.options.direction);
        let colour = self.gradient.sample(t);
        line.push_str(&colour.ansi_fg());
        line.push_str(glyph);
        line.push_str(RESET);
    }
}

/// The text printed for cell `(x, y)`.
fn cell_glyph(
    grid: &PixelGrid,
    x: usize,
    y: usize,
    style: StyleMode,
    width: PixelWidthMode,
) -> String {
    let on = grid.get(x, y);
    match style {
        StyleMode::None => {
            if on {
                width.fill().to_string()
            } else {
                width.empty().to_string()
            }
        }
        StyleMode::SimpleBlock => {
            if on {
                SIMPLE_BLOCK.to_string()
            } else {
                width.empty().to_string()
            }
        }
        StyleMode::Shade => {
            if on {
                width.fill().to_string()
            } else if y == 0 || !grid.get(x, y - 1) {
                "░".repeat(width.cell_cols())
            } else {
                width.empty().to_string()
            }
        }
        StyleMode::Block3D => {
            if on {
                return width.fill().to_string();
            }
            let (x, y) = (x as isize, y as isize);
            let edge = block_edge(
                grid.get_signed(x - 1, y - 1),
                grid.get_signed(x, y - 1),
                grid.get_signed(x - 1, y),
            );
            widen_edge(edge, width)
        }
    }
}

/// Box-drawing glyph for an unlit cell from its top-left, top and left neighbours.
fn block_edge(top_left: bool, top: bool, left: bool) -> char {
    match (top_left, top, left) {
        (true, true, true) => '╔',
        (true, true, false) => '═',
        (true, false, true) => '║',
        (true, false, false) => '╝',
        (false, true, true) => '╔',
        (false, true, false) => '╚',
        (false, false, true) => '╗',
        (false, false, false) => ' ',
    }
}

/// Expand an edge glyph to the cell width of the pixel mode.
fn widen_edge(edge: char, width: PixelWidthMode) -> String {
    match width {
        PixelWidthMode::Half => edge.to_string(),
        PixelWidthMode::Full => [edge, edge].iter().collect(),
        PixelWidthMode::HalfFull => match edge {
            '╔' => "╔═",
            '═' => "══",
            '║' => "║ ",
            '╝' => "╝ ",
            '╗' => "╗ ",
            '╚' => "╚═",
            _ => "  ",
        }
        .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColorSpace, Colour};
    use pretty_assertions::assert_eq;

    fn mono() -> Gradient {
        Gradient::new(&[Colour::rgb(255, 0, 0)], ColorSpace::Rgb).unwrap()
    }

    fn render(picture: &str, style: StyleMode, pixel_width: PixelWidthMode) -> String {
        let gradient = mono();
        let options = RenderOptions {
            style,
            pixel_width,
            ..RenderOptions::default()
        };
        StyleRenderer::new(&gradient, options).render(&PixelGrid::from_ascii(picture))
    }

    fn lines(s: &str) -> Vec<&str> {
        s.split('\n').collect()
    }

    #[test]
    fn test_plain_solid_square() {
        let out = render("###\n###\n###", StyleMode::None, PixelWidthMode::Half);
        assert_eq!(out, "███\n███\n███");
    }

    #[test]
    fn test_plain_widths() {
        assert_eq!(
            render("#.", StyleMode::None, PixelWidthMode::Full),
            "██\u{3000}"
        );
        assert_eq!(render("#.", StyleMode::None, PixelWidthMode::HalfFull), "██  ");
    }

    #[test]
    fn test_empty_grid_renders_nothing() {
        for style in [
            StyleMode::None,
            StyleMode::SimpleBlock,
            StyleMode::Shade,
            StyleMode::Block3D,
        ] {
            assert_eq!(render("...\n...", style, PixelWidthMode::Half), "");
            assert_eq!(render("", style, PixelWidthMode::Half), "");
        }
    }

    #[test]
    fn test_block3d_isolated_pixel() {
        let out = render("...\n.#.\n...", StyleMode::Block3D, PixelWidthMode::Half);
        insta::assert_debug_snapshot!(lines(&out), @r###"
        [
            "   ",
            " █╗",
            " ╚╝",
            "   ",
        ]
        "###);
    }

    #[test]
    fn test_block3d_square() {
        let out = render("##.\n##.\n...", StyleMode::Block3D, PixelWidthMode::Half);
        assert_eq!(lines(&out), vec!["██╗", "██║", "╚═╝", "   "]);
    }

    #[test]
    fn test_block3d_half_full_pairs() {
        let out = render("...\n.#.\n...", StyleMode::Block3D, PixelWidthMode::HalfFull);
        assert_eq!(lines(&out), vec!["      ", "  ██╗ ", "  ╚═╝ ", "      "]);
    }

    #[test]
    fn test_block3d_full_doubles() {
        let out = render(".#", StyleMode::Block3D, PixelWidthMode::Full);
        assert_eq!(lines(&out), vec!["  ██", "  ╚╚"]);
    }

    #[test]
    fn test_block_edge_table() {
        assert_eq!(block_edge(true, true, true), '╔');
        assert_eq!(block_edge(true, true, false), '═');
        assert_eq!(block_edge(true, false, true), '║');
        assert_eq!(block_edge(true, false, false), '╝');
        assert_eq!(block_edge(false, true, true), '╔');
        assert_eq!(block_edge(false, true, false), '╚');
        assert_eq!(block_edge(false, false, true), '╗');
        assert_eq!(block_edge(false, false, false), ' ');
    }

    #[test]
    fn test_block3d_concave_corner() {
        let out = render("##\n#.", StyleMode::Block3D, PixelWidthMode::Half);
        assert_eq!(lines(&out), vec!["██", "█╔", "╚╝"]);
    }

    #[test]
    fn test_shade() {
        let out = render("#.\n..", StyleMode::Shade, PixelWidthMode::Half);
        assert_eq!(lines(&out), vec!["█░", " ░", "░░"]);
    }

    #[test]
    fn test_shade_trailing_row_under_blank_columns() {
        let out = render("#.#\n.#.", StyleMode::Shade, PixelWidthMode::HalfFull);
        let last = *lines(&out).last().unwrap();
        // Columns 0 and 2 are off in the last real row
        assert_eq!(last, "░░  ░░");
    }

    #[test]
    fn test_simple_block_forces_half_full() {
        let out = render("#.\n.#", StyleMode::SimpleBlock, PixelWidthMode::Half);
        assert_eq!(out, "_|  \n  _|\n    ");
    }

    #[test]
    fn test_color_wraps_visible_glyphs_only() {
        let gradient = mono();
        let options = RenderOptions {
            style: StyleMode::Block3D,
            color: true,
            ..RenderOptions::default()
        };
        let out = StyleRenderer::new(&gradient, options).render(&PixelGrid::from_ascii("#.."));
        let red = "\x1b[38;2;255;0;0m";
        assert_eq!(
            lines(&out),
            vec![
                format!("{red}█\x1b[0m{red}╗\x1b[0m "),
                format!("{red}╚\x1b[0m{red}╝\x1b[0m "),
            ]
        );
    }

    #[test]
    fn test_full_width_space_is_never_coloured() {
        let gradient = mono();
        let options = RenderOptions {
            style: StyleMode::None,
            pixel_width: PixelWidthMode::Full,
            color: true,
            ..RenderOptions::default()
        };
        let out = StyleRenderer::new(&gradient, options).render(&PixelGrid::from_ascii(".#"));
        assert_eq!(out, "\u{3000}\x1b[38;2;255;0;0m██\x1b[0m");
    }

    #[test]
    fn test_vertical_gradient() {
        let gradient = Gradient::new(&[Colour::BLACK, Colour::WHITE], ColorSpace::Rgb).unwrap();
        let options = RenderOptions {
            style: StyleMode::None,
            direction: Direction::Vertical,
            color: true,
            ..RenderOptions::default()
        };
        let out = StyleRenderer::new(&gradient, options).render(&PixelGrid::from_ascii("#\n#"));
        assert_eq!(
            out,
            "\x1b[38;2;0;0;0m█\x1b[0m\n\x1b[38;2;255;255;255m█\x1b[0m"
        );
    }

    #[test]
    fn test_horizontal_gradient_skips_gaps() {
        let gradient = Gradient::new(&[Colour::BLACK, Colour::WHITE], ColorSpace::Rgb).unwrap();
        let options = RenderOptions {
            style: StyleMode::None,
            direction: Direction::Horizontal,
            color: true,
            ..RenderOptions::default()
        };
        let out = StyleRenderer::new(&gradient, options).render(&PixelGrid::from_ascii("#..#"));
        assert_eq!(
            out,
            "\x1b[38;2;0;0;0m█\x1b[0m  \x1b[38;2;255;255;255m█\x1b[0m"
        );
    }

    #[test]
    fn test_wraps_into_bands() {
        let gradient = mono();
        let options = RenderOptions {
            style: StyleMode::None,
            columns: 2,
            ..RenderOptions::default()
        };
        let out = StyleRenderer::new(&gradient, options).render(&PixelGrid::from_ascii("#####\n#####"));
        assert_eq!(out, "██\n██\n\n██\n██\n\n█\n█");
    }

    #[test]
    fn test_wrap_accounts_for_cell_width() {
        let gradient = mono();
        let options = RenderOptions {
            style: StyleMode::None,
            pixel_width: PixelWidthMode::HalfFull,
            columns: 5,
            ..RenderOptions::default()
        };
        let out = StyleRenderer::new(&gradient, options).render(&PixelGrid::from_ascii("###"));
        assert_eq!(out, "████\n\n██");

        // Narrower than one pixel still shows one pixel per band
        let options = RenderOptions {
            columns: 1,
            ..options
        };
        let out = StyleRenderer::new(&gradient, options).render(&PixelGrid::from_ascii("##"));
        assert_eq!(out, "██\n\n██");
    }

    #[test]
    fn test_block3d_bands_keep_neighbours() {
        let gradient = mono();
        let options = RenderOptions {
            style: StyleMode::Block3D,
            columns: 1,
            ..RenderOptions::default()
        };
        let out = StyleRenderer::new(&gradient, options).render(&PixelGrid::from_ascii("#."));
        // The second band still sees the ink to its left
        assert_eq!(out, "█\n╚\n\n╗\n╝");
    }
}
