use crate::grids::wall_grid::WallGrid;
use crate::grids::Direction;

/// Draws a carved grid as text art: `_` where a floor remains, `|` where an
/// east wall remains, blanks where passages were carved. Rows render on one
/// line each under a top border, every line `2 * columns + 1` wide.
pub fn render(grid: &WallGrid) -> String {
    let columns = grid.dims.columns;
    let mut out = String::with_capacity((grid.dims.rows + 1) * (2 * columns + 2));

    out.push_str("  ");
    out.push_str(&"_".repeat(2 * columns - 1));
    out.push('\n');

    for row in 0..grid.dims.rows {
        out.push('|');
        for col in 0..columns {
            let open_below = grid.has_passage(row, col, Direction::South);
            out.push(if open_below { ' ' } else { '_' });

            if grid.has_passage(row, col, Direction::East) {
                // keep the floor unbroken under a closed corner: blank only
                // when one of the two flanking cells opens downward
                let corner_open = open_below || grid.has_passage(row, col + 1, Direction::South);
                out.push(if corner_open { ' ' } else { '_' });
            } else {
                out.push('|');
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod test_renderer {
    use super::*;

    #[test]
    fn one_by_one_is_a_closed_box() {
        let grid = WallGrid::with_dims(1, 1).unwrap();
        assert_eq!(render(&grid), "  _\n|_|\n");
    }

    #[test]
    fn corridor_renders_as_an_open_tube() {
        let mut grid = WallGrid::with_dims(1, 3).unwrap();
        grid.carve_passage((0, 0), Direction::East);
        grid.carve_passage((0, 1), Direction::East);

        assert_eq!(render(&grid), "  _____\n|_____|\n");
    }

    #[test]
    fn south_passages_open_the_floor() {
        let mut grid = WallGrid::with_dims(2, 2).unwrap();
        grid.carve_passage((0, 0), Direction::East);
        grid.carve_passage((0, 0), Direction::South);
        grid.carve_passage((0, 1), Direction::South);

        // both top cells open downward, so the shared corner is blank too
        assert_eq!(render(&grid), "  ___\n|   |\n|_|_|\n");
    }

    #[test]
    fn closed_corner_keeps_its_floor() {
        let mut grid = WallGrid::with_dims(2, 2).unwrap();
        grid.carve_passage((0, 0), Direction::East);
        grid.carve_passage((0, 1), Direction::South);
        grid.carve_passage((1, 0), Direction::East);

        // top corner blanks (the right cell opens downward); the bottom
        // corner keeps a floor glyph even though its east wall is carved
        assert_eq!(render(&grid), "  ___\n|_  |\n|___|\n");
    }

    #[test]
    fn every_line_has_the_same_width() {
        use crate::generators::kruskal::Kruskal;
        use crate::generators::Generator;

        let mut grid = WallGrid::with_dims(4, 7).unwrap();
        Kruskal::new(11).generate_maze(&mut grid);

        let drawing = render(&grid);
        let lines: Vec<&str> = drawing.lines().collect();
        assert_eq!(lines.len(), 5);
        for line in lines {
            assert_eq!(line.len(), 2 * 7 + 1);
        }
    }
}
