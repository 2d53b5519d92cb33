//! Test doubles for the board traits
//!
//! - `GridBoard` is a static position for evaluator tests.
//! - `TreeBoard` is an explicit game tree that plays by make/unmake, so search
//!   algorithms can be checked against hand-computed values.

use crate::board::{BoardView, GameBoard, PieceGrid, Side, EMPTY_GRID};
use crate::constants::Score;
use crate::error::{EngineError, EngineResult};
use crate::evaluation::Evaluator;
use rand::Rng;
use std::ops::RangeInclusive;

pub(crate) struct GridBoard {
    pub grid: PieceGrid,
    pub side: Side,
    pub checkmate: bool,
    pub draw: bool,
}

impl GridBoard {
    pub fn from_rows(rows: [&str; 8], side: Side) -> Self {
        let mut grid = EMPTY_GRID;
        for (row, text) in grid.iter_mut().zip(rows) {
            for (cell, code) in row.iter_mut().zip(text.chars()) {
                *cell = code;
            }
        }
        Self {
            grid,
            side,
            checkmate: false,
            draw: false,
        }
    }
}

impl BoardView for GridBoard {
    fn side_to_move(&self) -> Side {
        self.side
    }

    fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    fn is_draw(&self) -> bool {
        self.draw
    }

    fn piece_grid(&self) -> PieceGrid {
        self.grid
    }
}

struct TreeNode {
    side: Side,
    value: Score,
    capture: bool,
    children: Vec<usize>,
}

/// Game tree where a move is the index of the child node it leads to
pub(crate) struct TreeBoard {
    nodes: Vec<TreeNode>,
    path: Vec<usize>,
    /// `do_move` into this node fails
    pub fail_on: Option<usize>,
    pub applied: usize,
    pub undone: usize,
}

impl TreeBoard {
    pub fn new(root_side: Side) -> Self {
        Self {
            nodes: vec![TreeNode {
                side: root_side,
                value: 0.0,
                capture: false,
                children: Vec::new(),
            }],
            path: Vec::new(),
            fail_on: None,
            applied: 0,
            undone: 0,
        }
    }

    /// Random tree with integer leaf values, so ties are common
    pub fn random<R: Rng>(
        rng: &mut R,
        root_side: Side,
        depth: u32,
        branching: RangeInclusive<usize>,
    ) -> Self {
        let mut tree = Self::new(root_side);
        tree.grow(rng, 0, depth, &branching);
        tree
    }

    fn grow<R: Rng>(&mut self, rng: &mut R, parent: usize, depth: u32, branching: &RangeInclusive<usize>) {
        self.nodes[parent].value = f64::from(rng.random_range(-9i32..=9));
        if depth == 0 {
            return;
        }
        for _ in 0..rng.random_range(branching.clone()) {
            let child = self.add(parent, 0.0);
            self.grow(rng, child, depth - 1, branching);
        }
    }

    fn push(&mut self, parent: usize, value: Score, capture: bool) -> usize {
        let id = self.nodes.len();
        let side = self.nodes[parent].side.flip();
        self.nodes.push(TreeNode {
            side,
            value,
            capture,
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// Add a quiet move from `parent` to a new node worth `value`
    pub fn add(&mut self, parent: usize, value: Score) -> usize {
        self.push(parent, value, false)
    }

    pub fn add_capture(&mut self, parent: usize, value: Score) -> usize {
        self.push(parent, value, true)
    }

    pub fn set_value(&mut self, node: usize, value: Score) {
        self.nodes[node].value = value;
    }

    pub fn children(&self, node: usize) -> &[usize] {
        &self.nodes[node].children
    }

    pub fn current(&self) -> usize {
        self.path.last().copied().unwrap_or(0)
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }

    pub fn path_mut(&mut self) -> &mut Vec<usize> {
        &mut self.path
    }
}

impl BoardView for TreeBoard {
    fn side_to_move(&self) -> Side {
        self.nodes[self.current()].side
    }

    fn is_checkmate(&self) -> bool {
        false
    }

    fn is_draw(&self) -> bool {
        false
    }

    fn piece_grid(&self) -> PieceGrid {
        EMPTY_GRID
    }
}

impl GameBoard for TreeBoard {
    type Move = usize;

    fn legal_moves(&self) -> Vec<usize> {
        self.nodes[self.current()].children.clone()
    }

    fn is_capture(&self, mv: &usize) -> bool {
        self.nodes[*mv].capture
    }

    fn do_move(&mut self, mv: &usize) -> EngineResult<()> {
        if self.fail_on == Some(*mv) {
            return Err(EngineError::IllegalMove {
                message: format!("node {} refused", mv),
            });
        }
        self.path.push(*mv);
        self.applied += 1;
        Ok(())
    }

    fn undo_move(&mut self) {
        self.path.pop();
        self.undone += 1;
    }
}

/// Scores a tree node by its stored value
pub(crate) struct LeafValue;

impl Evaluator<TreeBoard> for LeafValue {
    fn evaluate(&self, board: &TreeBoard) -> Score {
        board.nodes[board.current()].value
    }
}

/// Blows up on the first leaf it is asked about
pub(crate) struct PanickingEvaluator;

impl Evaluator<TreeBoard> for PanickingEvaluator {
    fn evaluate(&self, _board: &TreeBoard) -> Score {
        panic!("evaluator failure")
    }
}
