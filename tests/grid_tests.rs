use torus_life::Cell;
use torus_life::Grid;
use torus_life::GridError;

const GLIDER: [(u32, u32); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

fn live_cells(grid: &Grid) -> Vec<(u32, u32)> {
    grid.view().live_cells().collect()
}

fn sorted(mut cells: Vec<(u32, u32)>) -> Vec<(u32, u32)> {
    cells.sort();
    cells
}

#[test]
fn toggle_twice_restores() -> anyhow::Result<()> {
    let mut grid = Grid::new(7, 5, GLIDER)?;
    let before = grid.clone();

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let state = grid.cell_state(row, col)?;

            grid.toggle(row, col)?;
            assert_ne!(grid.cell_state(row, col)?, state);

            grid.toggle(row, col)?;
            assert_eq!(grid.cell_state(row, col)?, state);
        }
    }

    assert_eq!(grid, before);

    Ok(())
}

#[test]
fn corner_neighbors_wrap_around() -> anyhow::Result<()> {
    let (w, h) = (6, 5);
    let wrapped = [
        (h - 1, w - 1),
        (h - 1, 0),
        (h - 1, 1),
        (0, w - 1),
        (0, 1),
        (1, w - 1),
        (1, 0),
        (1, 1),
    ];

    let grid = Grid::new(w, h, wrapped)?;
    assert_eq!(grid.neighbor_count(0, 0)?, 8);

    // each neighbor on its own counts exactly once
    for cell in wrapped {
        let grid = Grid::new(w, h, [cell])?;
        assert_eq!(grid.neighbor_count(0, 0)?, 1, "neighbor {cell:?}");
    }

    // the cell itself and cells two steps away don't count
    let grid = Grid::new(w, h, [(0, 0), (2, 2), (0, 2), (h - 2, 0)])?;
    assert_eq!(grid.neighbor_count(0, 0)?, 0);

    Ok(())
}

#[test]
fn queries_out_of_bounds() -> anyhow::Result<()> {
    let mut grid = Grid::new(3, 2, [])?;
    let err = GridError::OutOfBounds {
        row: 2,
        col: 0,
        width: 3,
        height: 2,
    };

    assert_eq!(grid.cell_state(2, 0), Err(err));
    assert_eq!(grid.neighbor_count(2, 0), Err(err));
    assert_eq!(grid.toggle(2, 0), Err(err));
    assert!(grid.cell_state(0, 3).is_err());

    Ok(())
}

#[test]
fn dead_grid_stays_dead() -> anyhow::Result<()> {
    let mut grid = Grid::new(9, 4, [])?;

    for _ in 0..10 {
        grid.advance();
        assert_eq!(grid.live_count(), 0);
    }

    assert_eq!(grid.generation(), 10);

    Ok(())
}

#[test]
fn lonely_cell_dies() -> anyhow::Result<()> {
    let mut grid = Grid::new(5, 5, [(2, 2)])?;

    grid.advance();

    assert_eq!(grid.cell_state(2, 2)?, Cell::Dead);
    assert_eq!(grid.live_count(), 0);

    Ok(())
}

#[test]
fn block_is_still() -> anyhow::Result<()> {
    let block = [(1, 1), (1, 2), (2, 1), (2, 2)];
    let mut grid = Grid::new(4, 4, block)?;

    for _ in 0..3 {
        grid.advance();
        assert_eq!(live_cells(&grid), block.to_vec());
    }

    Ok(())
}

#[test]
fn glider_moves_diagonally() -> anyhow::Result<()> {
    let mut grid = Grid::new(10, 10, GLIDER)?;

    for _ in 0..4 {
        grid.advance();
    }

    let expected: Vec<_> = GLIDER.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
    assert_eq!(live_cells(&grid), sorted(expected));

    Ok(())
}

#[test]
fn glider_wraps_around_the_torus() -> anyhow::Result<()> {
    // four generations move the glider one cell diagonally, so 4 * 6 bring it home
    let start = Grid::new(6, 6, GLIDER)?;
    let mut grid = start.clone();

    for i in 1..=24 {
        grid.advance();
        assert_eq!(grid.live_count(), 5, "generation {i}");
    }

    assert_eq!(grid.view().cells(), start.view().cells());

    Ok(())
}

#[test]
fn glider_single_tick() -> anyhow::Result<()> {
    let mut grid = Grid::new(6, 6, [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)])?;
    let expected = Grid::new(6, 6, [(2, 1), (2, 3), (3, 2), (3, 3), (4, 2)])?;

    grid.advance();

    assert_eq!(grid.view().cells(), expected.view().cells());

    Ok(())
}

#[test]
fn identical_grids_stay_identical() -> anyhow::Result<()> {
    let seed = [(0, 0), (0, 1), (1, 0), (3, 3), (3, 4), (3, 5), (6, 2), (7, 1)];
    let mut a = Grid::new(11, 9, seed)?;
    let mut b = Grid::new(11, 9, seed)?;

    for _ in 0..50 {
        a.advance();
        b.advance();

        assert_eq!(a.view().as_bytes(), b.view().as_bytes());
    }

    Ok(())
}

#[test]
fn text_rendering() -> anyhow::Result<()> {
    let grid = Grid::new(4, 3, [(0, 1), (1, 2), (2, 0)])?;

    insta::assert_snapshot!(grid.render().trim_end(), @r"
    ◻◼◻◻
    ◻◻◼◻
    ◼◻◻◻
    ");
    assert_eq!(grid.render(), grid.to_string());
    assert!(grid.render().ends_with('\n'));

    Ok(())
}
