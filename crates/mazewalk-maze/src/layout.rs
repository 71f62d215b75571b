//! Mazes described as ASCII art.
//!
//! ```text
//! #######
//! #S..#G#
//! #.#.#.#
//! #.#...#
//! #######
//! ```
//!
//! `#` is a wall, `.` a floor, `S` the start and `G` the goal (both floors).
//! Lines are separated by `'\n'` and must all have the same width.

use std::fmt;

use mazewalk_core::Point;
use thiserror::Error;

use crate::grid::{Grid, Tile};

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Lines have inconsistent widths.
    #[error("layout line {line} is {width} wide, expected {expected}")]
    InconsistentSize {
        line: i32,
        width: i32,
        expected: i32,
    },
    /// A character other than `#`, `.`, `S` or `G` was found.
    #[error("layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}")]
    InvalidRune { ch: char, pos: Point },
    /// No `S` or no `G` marker.
    #[error("layout has no \u{201c}{0}\u{201d} marker")]
    MissingMarker(char),
    /// More than one `S` or `G` marker.
    #[error("layout has more than one \u{201c}{0}\u{201d} marker")]
    DuplicateMarker(char),
}

/// A maze grid with its start and goal cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub grid: Grid,
    pub start: Point,
    pub goal: Point,
}

impl Layout {
    /// Parse a layout.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string but not
    /// from individual lines.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let lines: Vec<&str> = s.trim().lines().collect();
        let width = lines.first().map_or(0, |l| l.chars().count()) as i32;
        let mut grid = Grid::new(width, lines.len() as i32);
        let mut start = None;
        let mut goal = None;

        for (y, line) in lines.iter().enumerate() {
            let y = y as i32;
            let line_width = line.chars().count() as i32;
            if line_width != width {
                return Err(LayoutError::InconsistentSize {
                    line: y,
                    width: line_width,
                    expected: width,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y);
                let marker = match ch {
                    '#' => continue,
                    '.' => None,
                    'S' => Some(&mut start),
                    'G' => Some(&mut goal),
                    _ => return Err(LayoutError::InvalidRune { ch, pos }),
                };
                if let Some(slot) = marker {
                    if slot.replace(pos).is_some() {
                        return Err(LayoutError::DuplicateMarker(ch));
                    }
                }
                grid.set(pos, Tile::Floor);
            }
        }

        Ok(Self {
            grid,
            start: start.ok_or(LayoutError::MissingMarker('S'))?,
            goal: goal.ok_or(LayoutError::MissingMarker('G'))?,
        })
    }

    /// Render the layout, drawing `marks` cells (that are not start or
    /// goal) as `mark`.
    pub fn render(&self, marks: &[Point], mark: char) -> String {
        let mut out = String::with_capacity(self.grid.bounds().len() + self.grid.height() as usize);
        for (p, tile) in self.grid.iter() {
            if p.x == 0 && p.y > 0 {
                out.push('\n');
            }
            let ch = if p == self.start {
                'S'
            } else if p == self.goal {
                'G'
            } else if marks.contains(&p) {
                mark
            } else if tile.is_floor() {
                '.'
            } else {
                '#'
            };
            out.push(ch);
        }
        out
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[], '.'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
#######
#S..#G#
#.#.#.#
#.#...#
#######";

    #[test]
    fn parse_markers_and_tiles() {
        let l = Layout::parse(SMALL).unwrap();
        assert_eq!(l.grid.size(), Point::new(7, 5));
        assert_eq!(l.start, Point::new(1, 1));
        assert_eq!(l.goal, Point::new(5, 1));
        assert!(l.grid.is_floor(l.start));
        assert!(l.grid.is_floor(l.goal));
        assert!(!l.grid.is_floor(Point::new(4, 1)));
        assert_eq!(l.grid.count(Tile::Floor), 11);
    }

    #[test]
    fn display_round_trips() {
        let l = Layout::parse(SMALL).unwrap();
        assert_eq!(l.to_string(), SMALL);
    }

    #[test]
    fn render_marks() {
        let l = Layout::parse("#####\n#S.G#\n#####").unwrap();
        assert_eq!(l.render(&[Point::new(2, 1)], '*'), "#####\n#S*G#\n#####");
    }

    #[test]
    fn inconsistent_size_error() {
        assert_eq!(
            Layout::parse("#S#\n#G"),
            Err(LayoutError::InconsistentSize {
                line: 1,
                width: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn invalid_rune_error() {
        assert_eq!(
            Layout::parse("#S#\n#x#\n#G#"),
            Err(LayoutError::InvalidRune {
                ch: 'x',
                pos: Point::new(1, 1)
            })
        );
    }

    #[test]
    fn marker_errors() {
        assert_eq!(Layout::parse("#S.#"), Err(LayoutError::MissingMarker('G')));
        assert_eq!(Layout::parse("#..G#"), Err(LayoutError::MissingMarker('S')));
        assert_eq!(
            Layout::parse("#SGS#"),
            Err(LayoutError::DuplicateMarker('S'))
        );
    }
}
