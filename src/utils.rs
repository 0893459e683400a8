/// A grid coordinate. `x` is the column, `y` the row.
///
/// Signed so that positions just outside the grid (neighbours of edge
/// cells) can be expressed without wrapping.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

#[macro_export]
macro_rules! pos {
    ($x:expr, $y:expr) => {
        $crate::Pos { x: $x, y: $y }
    };
}

impl Pos {
    /// offsets the position, `None` when a component overflows.
    pub fn checked_add(self, rhs: Pos) -> Option<Pos> {
        Some(pos!(self.x.checked_add(rhs.x)?, self.y.checked_add(rhs.y)?))
    }
}

/// offsets of the moore neighborhood, the origin excluded.
pub const NEIGHBOR_OFFSETS: [Pos; 8] = [
    pos!(-1, -1),
    pos!(0, -1),
    pos!(1, -1),
    pos!(-1, 0),
    pos!(1, 0),
    pos!(-1, 1),
    pos!(0, 1),
    pos!(1, 1),
];

#[test]
fn test_neighbor_offsets() {
    assert!(!NEIGHBOR_OFFSETS.contains(&pos!(0, 0)));
    for offset in NEIGHBOR_OFFSETS {
        assert!(offset.x.abs() <= 1 && offset.y.abs() <= 1);
    }
    let sum = NEIGHBOR_OFFSETS
        .iter()
        .try_fold(pos!(0, 0), |acc, offset| acc.checked_add(*offset));
    assert_eq!(sum, Some(pos!(0, 0)));
}

#[test]
fn test_checked_add() {
    assert_eq!(pos!(1, 2).checked_add(pos!(-1, 3)), Some(pos!(0, 5)));
    assert_eq!(pos!(i32::MAX, 0).checked_add(pos!(1, 0)), None);
    assert_eq!(pos!(0, i32::MIN).checked_add(pos!(0, -1)), None);
}
