use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InvalidWeight(String),
    InconsistentRow(usize, usize),
    TerrainTooSmall(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidWeight(token) => {
                write!(f, "Invalid hexadecimal weight({}) for terrain.", token)
            }
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::TerrainTooSmall(node_n) => {
                write!(f, "Expect at least 2 nodes in terrain, given {}.", node_n)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            Direction::Up => 'u',
            Direction::Right => 'r',
            Direction::Down => 'd',
            Direction::Left => 'l',
        };

        write!(f, "{}", token)
    }
}

impl Direction {
    pub fn all_directions() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ];

        &ALL_DIRECTIONS
    }

    pub fn reverse(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}

#[derive(Debug)]
pub struct Node {
    weight: u64,
    left: Option<usize>,
    right: Option<usize>,
    up: Option<usize>,
    down: Option<usize>,
}

impl Node {
    fn new(weight: u64) -> Self {
        Self {
            weight,
            left: None,
            right: None,
            up: None,
            down: None,
        }
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub fn link(&self, dir: Direction) -> Option<usize> {
        match dir {
            Direction::Up => self.up,
            Direction::Right => self.right,
            Direction::Down => self.down,
            Direction::Left => self.left,
        }
    }
}

#[derive(Debug, Clone)]
struct State {
    node: usize,
    cost: u64,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost.cmp(&other.cost).then(self.node.cmp(&other.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.node == other.node
    }
}

impl Eq for State {}

impl State {
    pub fn new(node: usize, cost: u64) -> Self {
        Self { node, cost }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    cost: u64,
    moves: Vec<Direction>,
}

impl Route {
    pub fn cost(&self) -> u64 {
        self.cost
    }

    pub fn moves(&self) -> &[Direction] {
        &self.moves
    }

    pub fn cost_text(&self) -> String {
        format!("{:#x}", self.cost)
    }

    pub fn moves_text(&self) -> String {
        self.moves
            .iter()
            .map(|dir| dir.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[derive(Debug)]
pub struct Terrain {
    nodes: Vec<Node>,
    row_n: usize,
    col_n: usize,
    start: usize,
    end: usize,
}

impl Terrain {
    pub fn load(text: &str) -> Result<Self, Error> {
        let mut builder = TerrainBuilder::new();
        for line in text.lines() {
            builder.add_row(line)?;
        }

        builder.build()
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn node(&self, id: usize) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_n(&self) -> usize {
        self.nodes.len()
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn min_cost_route(&self) -> Route {
        let mut min_costs = HashMap::from([(self.start, 0)]);
        let mut prev_nodes = HashMap::new();
        let mut candidates = BinaryHeap::from([Reverse(State::new(self.start, 0))]);
        while let Some(Reverse(cur_state)) = candidates.pop() {
            if min_costs
                .get(&cur_state.node)
                .is_some_and(|cost| cur_state.cost > *cost)
            {
                continue;
            }

            if cur_state.node == self.end {
                break;
            }

            for dir in Direction::all_directions() {
                if let Some(next_node) = self.nodes[cur_state.node].link(*dir) {
                    let next_cost = cur_state.cost + self.nodes[next_node].weight;
                    if min_costs
                        .get(&next_node)
                        .map(|cost| next_cost < *cost)
                        .unwrap_or(true)
                    {
                        min_costs.insert(next_node, next_cost);
                        prev_nodes.insert(next_node, cur_state.node);
                        candidates.push(Reverse(State::new(next_node, next_cost)));
                    }
                }
            }
        }

        let cost = *min_costs
            .get(&self.end)
            .expect("End node must be reachable in a linked rectangular terrain");
        let mut route_nodes = vec![self.end];
        let mut cur_node = self.end;
        while cur_node != self.start {
            cur_node = *prev_nodes
                .get(&cur_node)
                .expect("Every reached node except the start must have a predecessor");
            route_nodes.push(cur_node);
        }
        route_nodes.reverse();
        let moves = route_nodes
            .windows(2)
            .map(|step| self.step_dir(step[0], step[1]))
            .collect();

        Route { cost, moves }
    }

    fn step_dir(&self, from_node: usize, to_node: usize) -> Direction {
        *Direction::all_directions()
            .iter()
            .find(|dir| self.nodes[from_node].link(**dir) == Some(to_node))
            .unwrap_or_else(|| {
                panic!(
                    "Route must step between linked nodes, given {} to {}.",
                    from_node, to_node
                )
            })
    }
}

#[derive(Debug)]
struct TerrainBuilder {
    nodes: Vec<Node>,
    row_n: usize,
    col_n: Option<usize>,
}

impl TerrainBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            row_n: 0,
            col_n: None,
        }
    }

    pub fn add_row(&mut self, text: &str) -> Result<(), Error> {
        let weights = text
            .split_whitespace()
            .map(|token| {
                u64::from_str_radix(token, 16).map_err(|_| Error::InvalidWeight(token.to_string()))
            })
            .collect::<Result<Vec<_>, Error>>()?;
        let this_col_n = weights.len();
        if *self.col_n.get_or_insert(this_col_n) != this_col_n {
            return Err(Error::InconsistentRow(self.col_n.unwrap(), this_col_n));
        }

        for (ind, weight) in weights.into_iter().enumerate() {
            let id = self.nodes.len();
            self.nodes.push(Node::new(weight));
            if ind > 0 {
                self.link_right(id - 1, id);
            }
            if self.row_n > 0 {
                self.link_down(id - this_col_n, id);
            }
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Result<Terrain, Error> {
        if self.nodes.len() < 2 {
            return Err(Error::TerrainTooSmall(self.nodes.len()));
        }

        let end = self.nodes.len() - 1;
        Ok(Terrain {
            nodes: self.nodes,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
            start: 0,
            end,
        })
    }

    fn link_right(&mut self, left_id: usize, right_id: usize) {
        self.nodes[left_id].right = Some(right_id);
        self.nodes[right_id].left = Some(left_id);
    }

    fn link_down(&mut self, up_id: usize, down_id: usize) {
        self.nodes[up_id].down = Some(down_id);
        self.nodes[down_id].up = Some(up_id);
    }
}

pub fn read_terrain<P: AsRef<Path>>(path: P) -> Result<Terrain> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = TerrainBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        builder.add_row(line.as_str())?;
    }

    Ok(builder.build()?)
}
