use rand::Rng;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Edge length of the square board.
pub const SIZE: usize = 4;
/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;
/// Reaching this tile ends the game as a win.
pub const WINNING_TILE: Tile = 2048;
/// Largest value a packed cell can hold (exponent 15).
pub const MAX_TILE: Tile = 1 << 15;

const LINE_TABLE_SIZE: usize = 0x1_0000; // 65,536 possible 16-bit lines

/// Face value of a cell: 0 when empty, otherwise a power of two.
pub type Tile = u32;
pub type Score = u64;
type BoardRaw = u64;
type Exponent = u64;

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order used to index traversal tables.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
}

/// Value distribution for newly spawned tiles.
///
/// `Even` treats 2 and 4 as equally likely and is the default. `Classic` is
/// the usual 2048 weighting of 90% twos and 10% fours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpawnRule {
    #[default]
    Even,
    Classic,
}

impl SpawnRule {
    fn sample_exponent<R: Rng + ?Sized>(self, rng: &mut R) -> Exponent {
        let four = match self {
            SpawnRule::Even => rng.gen_bool(0.5),
            SpawnRule::Classic => rng.gen_range(0..10) == 0,
        };
        if four { 2 } else { 1 }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown spawn rule `{0}` (expected `even` or `classic`)")]
pub struct ParseSpawnRuleError(String);

impl FromStr for SpawnRule {
    type Err = ParseSpawnRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "even" => Ok(SpawnRule::Even),
            "classic" => Ok(SpawnRule::Classic),
            _ => Err(ParseSpawnRuleError(s.to_string())),
        }
    }
}

impl fmt::Display for SpawnRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SpawnRule::Even => "even",
            SpawnRule::Classic => "classic",
        })
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("tile value {value} at row {row}, column {col} is not a power of two in 2..=32768")]
    InvalidTile { row: usize, col: usize, value: Tile },
}

/// Result of sliding a board in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Board after the slide (and after the spawn, for `make_move`).
    pub board: Board,
    /// Sum of the values produced by every merge in this move.
    pub score_delta: Score,
    /// False when the slide left the board untouched.
    pub moved: bool,
}

/// Packed 4x4 2048 board as 16 4-bit exponents in a `u64`.
///
/// Cell 0 (top-left) lives in the high nibble and cells run row-major. A
/// nibble `e` holds the tile `2^e`; zero means empty.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board(BoardRaw);

impl Board {
    /// A constant empty board (all zeros).
    pub const EMPTY: Board = Board(0);

    /// Construct a `Board` from its raw packed representation.
    #[inline]
    pub fn from_raw(raw: BoardRaw) -> Self { Board(raw) }

    /// Borrow the raw packed `u64` for this `Board`.
    #[inline]
    pub fn raw(&self) -> BoardRaw { self.0 }

    /// Build a board from face values, row by row.
    ///
    /// ```
    /// use game_2048::engine::{Board, BoardError};
    /// let b = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 4]]).unwrap();
    /// assert_eq!(b.tile_value(15), 4);
    /// assert!(matches!(
    ///     Board::from_rows([[3, 0, 0, 0], [0; 4], [0; 4], [0; 4]]),
    ///     Err(BoardError::InvalidTile { row: 0, col: 0, value: 3 })
    /// ));
    /// ```
    pub fn from_rows(rows: [[Tile; SIZE]; SIZE]) -> Result<Self, BoardError> {
        let mut board = Board::EMPTY;
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                let exp = exponent_of(value).ok_or(BoardError::InvalidTile { row, col, value })?;
                board = board.with_exponent(row * SIZE + col, exp);
            }
        }
        Ok(board)
    }

    /// Face values, row by row.
    pub fn rows(self) -> [[Tile; SIZE]; SIZE] {
        let mut rows = [[0; SIZE]; SIZE];
        for (idx, cell) in rows.iter_mut().flatten().enumerate() {
            *cell = self.tile_value(idx);
        }
        rows
    }

    /// A fresh game: the empty board with two spawned tiles.
    ///
    /// ```
    /// use game_2048::engine::{Board, SpawnRule};
    /// use rand::{SeedableRng, rngs::StdRng};
    /// let mut rng = StdRng::seed_from_u64(123);
    /// let b = Board::new_game(SpawnRule::Even, &mut rng);
    /// assert_eq!(b.count_empty(), 14);
    /// ```
    pub fn new_game<R: Rng + ?Sized>(rule: SpawnRule, rng: &mut R) -> Self {
        Board::EMPTY.with_random_tile(rule, rng).with_random_tile(rule, rng)
    }

    /// Slide/merge tiles in `dir` without inserting a random tile.
    ///
    /// ```
    /// use game_2048::engine::{Board, Direction};
    /// let b = Board::from_rows([[2, 2, 4, 4], [0; 4], [0; 4], [0; 4]]).unwrap();
    /// let out = b.shift(Direction::Left);
    /// assert_eq!(out.board.rows()[0], [4, 8, 0, 0]);
    /// assert_eq!(out.score_delta, 12);
    /// assert!(out.moved);
    /// ```
    pub fn shift(self, dir: Direction) -> MoveOutcome {
        let s = stores();
        let mut board = self;
        let mut score_delta: Score = 0;
        for cells in &TRAVERSALS[dir as usize] {
            let key = cells
                .iter()
                .enumerate()
                .fold(0usize, |key, (pos, &idx)| key | ((self.exponent(idx) as usize) << (4 * pos)));
            let resolved = get_line_entry(&s.resolved[..], key);
            score_delta += Score::from(get_line_entry(&s.score[..], key));
            for (pos, &idx) in cells.iter().enumerate() {
                board = board.with_exponent(idx, Exponent::from((resolved >> (4 * pos)) & 0xf));
            }
        }
        MoveOutcome { board, score_delta, moved: board != self }
    }

    /// Insert a 2 or 4 (per `rule`) into a uniformly chosen empty cell.
    ///
    /// A full board is returned unchanged.
    ///
    /// ```
    /// use game_2048::engine::{Board, SpawnRule};
    /// use rand::{SeedableRng, rngs::StdRng};
    /// let mut rng = StdRng::seed_from_u64(123);
    /// let b = Board::EMPTY.with_random_tile(SpawnRule::Classic, &mut rng);
    /// assert_eq!(b.count_empty(), 15);
    /// ```
    pub fn with_random_tile<R: Rng + ?Sized>(self, rule: SpawnRule, rng: &mut R) -> Self {
        let empty = self.count_empty();
        if empty == 0 {
            return self;
        }
        let nth = rng.gen_range(0..empty) as usize;
        match (0..CELLS).filter(|&idx| self.exponent(idx) == 0).nth(nth) {
            Some(idx) => self.with_exponent(idx, rule.sample_exponent(rng)),
            None => self,
        }
    }

    /// Slide in `direction`, then spawn a tile if the slide changed the board.
    ///
    /// A move that changes nothing spawns nothing and scores nothing.
    ///
    /// ```
    /// use game_2048::engine::{Board, Direction, SpawnRule};
    /// use rand::{SeedableRng, rngs::StdRng};
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let b = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
    /// let stuck = b.make_move(Direction::Up, SpawnRule::Even, &mut rng);
    /// assert!(!stuck.moved);
    /// assert_eq!(stuck.board, b);
    /// ```
    pub fn make_move<R: Rng + ?Sized>(self, direction: Direction, rule: SpawnRule, rng: &mut R) -> MoveOutcome {
        let mut out = self.shift(direction);
        if out.moved {
            out.board = out.board.with_random_tile(rule, rng);
        }
        out
    }

    /// True once the board holds the winning tile or no move can change it.
    ///
    /// ```
    /// use game_2048::engine::Board;
    /// // Shifting an empty board never changes it.
    /// assert!(Board::EMPTY.is_terminal());
    /// ```
    #[inline]
    pub fn is_terminal(self) -> bool { self.is_won() || !self.has_moves() }

    /// True if some cell holds `WINNING_TILE` or more.
    #[inline]
    pub fn is_won(self) -> bool { self.highest_tile() >= WINNING_TILE }

    /// True if at least one direction changes the board.
    pub fn has_moves(self) -> bool {
        Direction::ALL.iter().any(|&dir| self.shift(dir).moved)
    }

    /// Return the highest tile value present on the board (0 when empty).
    pub fn highest_tile(self) -> Tile {
        (0..CELLS).map(|idx| self.tile_value(idx)).max().unwrap_or(0)
    }

    /// Sum of all face values.
    pub fn tile_sum(self) -> u64 {
        (0..CELLS).map(|idx| u64::from(self.tile_value(idx))).sum()
    }

    /// Count the number of empty cells on the board.
    #[inline]
    pub fn count_empty(self) -> u64 { CELLS as u64 - count_non_empty(self) }

    /// Face value at `idx` (row-major, 0..16); 0 when empty.
    #[inline]
    pub fn tile_value(self, idx: usize) -> Tile {
        match self.exponent(idx) {
            0 => 0,
            e => 1 << e,
        }
    }

    #[inline]
    fn exponent(self, idx: usize) -> Exponent {
        (self.0 >> (60 - 4 * idx)) & 0xf
    }

    #[inline]
    fn with_exponent(self, idx: usize, exp: Exponent) -> Board {
        let shift = 60 - 4 * idx;
        Board((self.0 & !(0xf_u64 << shift)) | ((exp & 0xf) << shift))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({:#018x})", self.0)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, values) in self.rows().iter().enumerate() {
            if row > 0 {
                writeln!(f, "{}", "-".repeat(31))?;
            }
            let cells: Vec<String> = values.iter().map(|&v| format_val(v)).collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

/// Build the line lookup tables now instead of on the first move. Safe to call multiple times.
pub fn new() {
    stores();
}

/// Collapse one line toward its start and merge equal neighbours.
///
/// Zeros are dropped first, then adjacent equal tiles combine left to right
/// with each tile merging at most once, and the result is padded back to the
/// input length with zeros. Returns the new line and the sum of merged values.
///
/// Merged values must fit in a [`Tile`], so two tiles of `2^31` or more are
/// left as they are.
///
/// ```
/// use game_2048::engine::resolve_line;
/// assert_eq!(resolve_line(&[2, 2, 4, 4]), (vec![4, 8, 0, 0], 12));
/// assert_eq!(resolve_line(&[2, 2, 2, 2]), (vec![4, 4, 0, 0], 8));
/// assert_eq!(resolve_line(&[2, 0, 2, 0]), (vec![4, 0, 0, 0], 4));
/// ```
pub fn resolve_line(line: &[Tile]) -> (Vec<Tile>, Score) {
    merge_line(line, Tile::MAX)
}

fn merge_line(line: &[Tile], cap: Tile) -> (Vec<Tile>, Score) {
    let mut merged = Vec::with_capacity(line.len());
    let mut score: Score = 0;
    let mut tiles = line.iter().copied().filter(|&v| v != 0).peekable();
    while let Some(val) = tiles.next() {
        if val <= cap / 2 && tiles.peek() == Some(&val) {
            tiles.next();
            merged.push(val * 2);
            score += Score::from(val * 2);
        } else {
            merged.push(val);
        }
    }
    merged.resize(line.len(), 0);
    (merged, score)
}

// Cell indices of each line, leading edge first.
type Traversal = [[usize; SIZE]; SIZE];

const fn traversal(dir: Direction) -> Traversal {
    let mut lines = [[0; SIZE]; SIZE];
    let mut line = 0;
    while line < SIZE {
        let mut pos = 0;
        while pos < SIZE {
            let (row, col) = match dir {
                Direction::Left => (line, pos),
                Direction::Right => (line, SIZE - 1 - pos),
                Direction::Up => (pos, line),
                Direction::Down => (SIZE - 1 - pos, line),
            };
            lines[line][pos] = row * SIZE + col;
            pos += 1;
        }
        line += 1;
    }
    lines
}

// Indexed by `Direction as usize`.
static TRAVERSALS: [Traversal; 4] = [
    traversal(Direction::Up),
    traversal(Direction::Down),
    traversal(Direction::Left),
    traversal(Direction::Right),
];

/// Per-line results keyed by the packed line (position `i` in nibble `i`).
struct Stores {
    resolved: Box<[u16]>,
    score: Box<[u32]>,
}

static STORES: OnceLock<Stores> = OnceLock::new();

fn create_stores() -> Stores {
    // Allocate on the heap to avoid large stack frames
    let mut resolved = vec![0u16; LINE_TABLE_SIZE];
    let mut score = vec![0u32; LINE_TABLE_SIZE];

    for key in 0..LINE_TABLE_SIZE {
        let (line, delta) = merge_line(&unpack_line(key), MAX_TILE);
        resolved[key] = pack_line(&line);
        // At most two merges of 16384 pairs per line.
        score[key] = delta as u32;
    }

    Stores {
        resolved: resolved.into_boxed_slice(),
        score: score.into_boxed_slice(),
    }
}

#[inline(always)]
fn stores() -> &'static Stores {
    STORES.get_or_init(create_stores)
}

#[inline(always)]
fn get_line_entry<T: Copy>(table: &[T], key: usize) -> T {
    debug_assert!(key < LINE_TABLE_SIZE);
    table[key]
}

fn unpack_line(key: usize) -> [Tile; SIZE] {
    let mut line = [0; SIZE];
    for (pos, tile) in line.iter_mut().enumerate() {
        let exp = (key >> (4 * pos)) & 0xf;
        *tile = if exp == 0 { 0 } else { 1 << exp };
    }
    line
}

fn pack_line(line: &[Tile]) -> u16 {
    line.iter().enumerate().fold(0u16, |packed, (pos, &val)| {
        let exp = if val == 0 { 0 } else { val.trailing_zeros() as u16 };
        packed | (exp << (4 * pos))
    })
}

fn exponent_of(value: Tile) -> Option<Exponent> {
    match value {
        0 => Some(0),
        v if v.is_power_of_two() && (2..=MAX_TILE).contains(&v) => Some(Exponent::from(v.trailing_zeros())),
        _ => None,
    }
}

// https://stackoverflow.com/questions/38225571/count-number-of-zero-nibbles-in-an-unsigned-64-bit-integer
fn count_non_empty(board: Board) -> u64 {
    let mut board_copy = board.0;
    board_copy |= board_copy >> 1;
    board_copy |= board_copy >> 2;
    board_copy &= 0x1111111111111111;
    board_copy.count_ones() as u64
}

fn format_val(val: Tile) -> String {
    match val {
        0 => " ".repeat(7),
        v => format!("{:^7}", v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn board(rows: [[Tile; SIZE]; SIZE]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn it_resolve_line() {
        assert_eq!(resolve_line(&[0, 0, 0, 0]), (vec![0, 0, 0, 0], 0));
        assert_eq!(resolve_line(&[2, 4, 2, 4]), (vec![2, 4, 2, 4], 0));
        assert_eq!(resolve_line(&[2, 2, 4, 4]), (vec![4, 8, 0, 0], 12));
        assert_eq!(resolve_line(&[2, 2, 2, 2]), (vec![4, 4, 0, 0], 8));
        assert_eq!(resolve_line(&[2, 0, 2, 0]), (vec![4, 0, 0, 0], 4));
        assert_eq!(resolve_line(&[2, 0, 0, 2]), (vec![4, 0, 0, 0], 4));
        assert_eq!(resolve_line(&[2, 2, 2]), (vec![4, 2, 0], 4));
        assert_eq!(resolve_line(&[4, 4, 8]), (vec![8, 8, 0], 8));
    }

    #[test]
    fn it_resolve_short_lines() {
        assert_eq!(resolve_line(&[]), (vec![], 0));
        assert_eq!(resolve_line(&[8]), (vec![8], 0));
        assert_eq!(resolve_line(&[0]), (vec![0], 0));
        assert_eq!(resolve_line(&[0, 0, 0, 0, 0, 2, 2, 16]), (vec![4, 16, 0, 0, 0, 0, 0, 0], 4));
    }

    #[test]
    fn it_caps_packed_merges() {
        assert_eq!(merge_line(&[MAX_TILE, MAX_TILE, 2, 2], MAX_TILE), (vec![MAX_TILE, MAX_TILE, 4, 0], 4));
        assert_eq!(resolve_line(&[MAX_TILE, MAX_TILE]), (vec![MAX_TILE * 2, 0], u64::from(MAX_TILE) * 2));
    }

    #[test]
    fn it_keeps_unrepresentable_merges_apart() {
        let big = 1 << 31;
        assert_eq!(resolve_line(&[big, big, 2, 2]), (vec![big, big, 4, 0], 4));
        assert_eq!(resolve_line(&[1 << 30, 1 << 30]), (vec![big, 0], u64::from(big)));
    }

    #[test]
    fn it_packs_lines() {
        for key in [0usize, 0x0001, 0x4321, 0xffff, 0x1010] {
            assert_eq!(pack_line(&unpack_line(key)) as usize, key);
        }
        assert_eq!(unpack_line(0x0021), [2, 4, 0, 0]);
    }

    #[test]
    fn traversals_lead_with_the_moving_edge() {
        assert_eq!(TRAVERSALS[Direction::Left as usize][1], [4, 5, 6, 7]);
        assert_eq!(TRAVERSALS[Direction::Right as usize][1], [7, 6, 5, 4]);
        assert_eq!(TRAVERSALS[Direction::Up as usize][2], [2, 6, 10, 14]);
        assert_eq!(TRAVERSALS[Direction::Down as usize][2], [14, 10, 6, 2]);
    }

    #[test]
    fn test_shift_left() {
        new();
        let out = Board::from_raw(0x1234133220021002).shift(Direction::Left);
        assert_eq!(out.board, Board::from_raw(0x1234142030001200));
        assert_eq!(out.score_delta, 24);
        assert!(out.moved);
    }

    #[test]
    fn test_shift_right() {
        let out = Board::from_raw(0x1234133220021002).shift(Direction::Right);
        assert_eq!(out.board, Board::from_raw(0x1234014200030012));
        assert_eq!(out.score_delta, 24);
    }

    #[test]
    fn test_shift_up() {
        let out = Board::from_raw(0x1121230033004222).shift(Direction::Up);
        assert_eq!(out.board, Board::from_raw(0x1131240232004000));
        assert_eq!(out.score_delta, 24);
    }

    #[test]
    fn test_shift_down() {
        let out = Board::from_raw(0x1121230033004222).shift(Direction::Down);
        assert_eq!(out.board, Board::from_raw(0x1000210034014232));
        assert_eq!(out.score_delta, 24);
    }

    #[test]
    fn shift_matches_resolve_line_on_rows() {
        let b = board([[2, 2, 4, 4], [2, 2, 2, 2], [2, 0, 2, 0], [0, 4, 0, 4]]);
        let out = b.shift(Direction::Left);
        assert_eq!(out.board.rows(), [[4, 8, 0, 0], [4, 4, 0, 0], [4, 0, 0, 0], [8, 0, 0, 0]]);
        assert_eq!(out.score_delta, 12 + 8 + 4 + 8);
    }

    #[test]
    fn shift_against_wall_is_a_noop() {
        let b = board([[2, 4, 0, 0], [8, 0, 0, 0], [0; 4], [0; 4]]);
        let out = b.shift(Direction::Left);
        assert!(!out.moved);
        assert_eq!(out.board, b);
        assert_eq!(out.score_delta, 0);
    }

    #[test]
    fn noop_move_does_not_spawn() {
        let mut rng = StdRng::seed_from_u64(7);
        let b = board([[2, 4, 0, 0], [8, 0, 0, 0], [0; 4], [0; 4]]);
        for dir in [Direction::Left, Direction::Up] {
            let out = b.make_move(dir, SpawnRule::Even, &mut rng);
            assert_eq!(out, MoveOutcome { board: b, score_delta: 0, moved: false });
        }
    }

    #[test]
    fn real_move_spawns_exactly_one_tile() {
        let mut rng = StdRng::seed_from_u64(7);
        let b = board([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let out = b.make_move(Direction::Left, SpawnRule::Even, &mut rng);
        assert!(out.moved);
        assert_eq!(out.score_delta, 4);
        assert_eq!(out.board.count_empty(), 14);
        let spawned = out.board.tile_sum() - 4;
        assert!(spawned == 2 || spawned == 4);
    }

    #[test]
    fn it_fills_the_last_empty_cell() {
        let mut rng = StdRng::seed_from_u64(99);
        let b = board([[2, 4, 8, 16], [32, 64, 128, 256], [512, 1024, 2, 4], [8, 16, 32, 0]]);
        let filled = b.with_random_tile(SpawnRule::Even, &mut rng);
        assert_eq!(filled.count_empty(), 0);
        assert!(matches!(filled.tile_value(15), 2 | 4));
        assert_eq!(filled.with_random_tile(SpawnRule::Even, &mut rng), filled);
    }

    #[test]
    fn it_test_insert_random_tile() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = Board::EMPTY;
        for _ in 0..16 {
            game = game.with_random_tile(SpawnRule::Classic, &mut rng);
        }
        assert_eq!(game.count_empty(), 0);
    }

    #[test]
    fn spawn_rules_produce_expected_mix() {
        let mut rng = StdRng::seed_from_u64(2048);
        let fours = |rule: SpawnRule, rng: &mut StdRng| {
            (0..2000).filter(|_| Board::EMPTY.with_random_tile(rule, rng).tile_sum() == 4).count()
        };
        let even = fours(SpawnRule::Even, &mut rng);
        let classic = fours(SpawnRule::Classic, &mut rng);
        assert!((800..1200).contains(&even), "even produced {even} fours");
        assert!((100..320).contains(&classic), "classic produced {classic} fours");
    }

    #[test]
    fn winning_tile_is_terminal() {
        let b = board([[2048, 0, 0, 0], [0; 4], [0, 2, 2, 0], [0; 4]]);
        assert!(b.has_moves());
        assert!(b.is_terminal());
    }

    #[test]
    fn full_board_with_pair_is_not_terminal() {
        let b = board([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 4]]);
        assert_eq!(b.count_empty(), 0);
        assert!(!b.is_terminal());
    }

    #[test]
    fn checkerboard_is_terminal() {
        let b = board([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(b.is_terminal());
    }

    #[test]
    fn sparse_board_without_pairs_still_moves() {
        // No equal neighbours, but tiles can still slide into empty cells.
        let b = board([[2, 0, 0, 0], [0, 4, 0, 0], [0; 4], [0; 4]]);
        assert!(!b.is_terminal());
    }

    #[test]
    fn it_count_empty() {
        let game = Board::from_raw(0x1111000011110000);
        assert_eq!(game.count_empty(), 8);
        let game = Board::from_raw(0x1100000000000000);
        assert_eq!(game.count_empty(), 14);
        assert_eq!(Board::EMPTY.count_empty(), 16);
    }

    #[test]
    fn it_get_tile_val() {
        let game = Board::from_raw(0x0123456789abcdef);
        assert_eq!(game.tile_value(0), 0);
        assert_eq!(game.tile_value(3), 8);
        assert_eq!(game.tile_value(10), 1024);
        assert_eq!(game.tile_value(15), 32768);
        assert_eq!(game.highest_tile(), 32768);
    }

    #[test]
    fn rows_round_trip_through_from_rows() {
        let rows = [[0, 2, 4, 8], [16, 32, 64, 128], [256, 512, 1024, 2048], [4096, 8192, 16384, 32768]];
        assert_eq!(board(rows).rows(), rows);
        assert_eq!(
            Board::from_rows([[0; 4], [0, 0, 65536, 0], [0; 4], [0; 4]]),
            Err(BoardError::InvalidTile { row: 1, col: 2, value: 65536 })
        );
        assert!(Board::from_rows([[1, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_err());
    }

    #[test]
    fn parses_spawn_rules() {
        assert_eq!("even".parse::<SpawnRule>(), Ok(SpawnRule::Even));
        assert_eq!("Classic".parse::<SpawnRule>(), Ok(SpawnRule::Classic));
        assert!("weighted".parse::<SpawnRule>().is_err());
        assert_eq!(SpawnRule::Classic.to_string(), "classic");
    }

    #[test]
    fn display_lays_out_four_rows() {
        let text = board([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 2048]]).to_string();
        assert_eq!(text.lines().count(), 7);
        assert!(text.starts_with("   2   |"));
        assert!(text.trim_end().ends_with("| 2048"));
    }
}
