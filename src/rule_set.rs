use crate::cell::Cell;

/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// # Representation
/// Life rules are represented as
/// ```notrust
/// |------birth------|
/// 0000_0000_0000_0000_0000_0000_0000_0000
///                     |----survival-----|
/// ```
///
/// Bit `n` of the birth half is set when a dead cell with `n` live neighbors comes alive. Bit `n`
/// of the survival half is set when a live cell with `n` live neighbors stays alive.
///
/// # Examples
/// ```notrust
/// b3s23:                0000_0000_0000_1000_0000_0000_0000_1100
/// ```
///
/// Only [`B3S23`] is available.
///
/// See: https://conwaylife.com/wiki/Rulestring
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// Any bit past the 8th is ignored.
    const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FF;
        let s = s & 0x1FF;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    pub const fn births(&self) -> u16 {
        ((self.rule & 0x1FF0000) >> 0x10) as u16
    }

    pub const fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    /// State of `cell` in the next generation, given its number of live neighbors.
    ///
    /// Neighbor counts past 8 can't occur on a grid and always yield [`Cell::Dead`].
    pub const fn next(&self, cell: Cell, neighbors: u8) -> Cell {
        if neighbors > 8 {
            return Cell::Dead;
        }

        let bit = 1u16 << neighbors;

        let mask = match cell {
            Cell::Dead => self.births(),
            Cell::Alive => self.survivals(),
        };

        if mask & bit == bit {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

#[cfg(test)]
mod tests {
    use super::B3S23;
    use crate::cell::Cell;

    #[test]
    fn packed_layout() {
        assert_eq!(B3S23.births(), 0b1000);
        assert_eq!(B3S23.survivals(), 0b1100);
    }

    #[test]
    fn live_cells() {
        // underpopulation
        assert_eq!(B3S23.next(Cell::Alive, 0), Cell::Dead);
        assert_eq!(B3S23.next(Cell::Alive, 1), Cell::Dead);

        // survival
        assert_eq!(B3S23.next(Cell::Alive, 2), Cell::Alive);
        assert_eq!(B3S23.next(Cell::Alive, 3), Cell::Alive);

        // overpopulation
        for n in 4..=8 {
            assert_eq!(B3S23.next(Cell::Alive, n), Cell::Dead, "n = {n}");
        }
    }

    #[test]
    fn dead_cells() {
        for n in 0..=8 {
            let expected = if n == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(B3S23.next(Cell::Dead, n), expected, "n = {n}");
        }
    }
}
