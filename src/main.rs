use log::{debug, info};

use maze_solver::{Cell, Direction, Driver, DriverStep, Grid, MazeConfig};

fn main() {
    env_logger::init();

    let config = parse_args();
    info!(
        "carving a {}x{} maze (seed {:?})",
        config.columns, config.rows, config.seed
    );

    let mut driver = match Driver::new(config) {
        Ok(driver) => driver,
        Err(err) => {
            eprintln!("maze-solver: {}", err);
            std::process::exit(1);
        }
    };

    loop {
        match driver.step() {
            Ok(DriverStep::Finished) => break,
            Ok(step) => debug!("{:?}", step),
            Err(err) => {
                eprintln!("maze-solver: {}", err);
                std::process::exit(1);
            }
        }
    }

    let path = driver
        .solver()
        .map(|solver| solver.path())
        .unwrap_or(&[]);
    info!("solved path covers {} cells", path.len());

    print!("{}", render_ascii(driver.grid(), path));
}

/// `maze-solver [columns rows [seed]]`, falling back to the defaults on
/// missing or unparsable arguments.
fn parse_args() -> MazeConfig {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = MazeConfig::default();

    if args.len() >= 2 {
        if let (Ok(columns), Ok(rows)) = (args[0].parse(), args[1].parse()) {
            config.columns = columns;
            config.rows = rows;
        }
    }
    if let Some(seed) = args.get(2) {
        config.seed = seed.parse().ok();
    }

    config
}

/// Draws the maze walls from the grid state, with the solved path dotted in.
/// Closed boundary walls come out as an unbroken border.
fn render_ascii(grid: &Grid, path: &[Cell]) -> String {
    let columns = grid.dims.columns;
    let rows = grid.dims.rows;
    let mut out = String::new();

    for row in 0..rows {
        for column in 0..columns {
            let cell = Cell::new(column, row);
            out.push('+');
            out.push_str(if grid.is_open(cell, Direction::North) {
                "  "
            } else {
                "--"
            });
        }
        out.push_str("+\n");

        for column in 0..columns {
            let cell = Cell::new(column, row);
            out.push(if grid.is_open(cell, Direction::West) {
                ' '
            } else {
                '|'
            });
            out.push_str(cell_mark(cell, grid, path));
        }
        out.push_str("|\n");
    }

    for _ in 0..columns {
        out.push_str("+--");
    }
    out.push_str("+\n");

    out
}

fn cell_mark(cell: Cell, grid: &Grid, path: &[Cell]) -> &'static str {
    let goal = Cell::new(grid.dims.columns - 1, grid.dims.rows - 1);

    if cell == Cell::new(0, 0) {
        "S "
    } else if cell == goal {
        "G "
    } else if path.contains(&cell) {
        ". "
    } else {
        "  "
    }
}

#[cfg(test)]
mod test_render {
    use super::*;

    #[test]
    fn renders_a_solved_maze() {
        let config = MazeConfig {
            columns: 2,
            rows: 1,
            seed: Some(0),
            ..MazeConfig::default()
        };
        let mut driver = Driver::new(config).unwrap();
        while driver.step().unwrap() != DriverStep::Finished {}

        let path = driver.solver().unwrap().path();
        let drawn = render_ascii(driver.grid(), path);

        // one open interior wall between start and goal, closed border
        assert_eq!(drawn, "+--+--+\n|S  G |\n+--+--+\n");
    }
}
