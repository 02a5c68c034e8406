use std::collections::{HashMap, hash_map::Entry};
use std::hash::Hash;

/// Officiating history of one team within a discipline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefereeLoad {
    pub refereed_games: u32,
    pub last_round: Option<u32>,
}

impl RefereeLoad {
    fn sort_key(&self) -> (u32, i64) {
        (
            self.refereed_games,
            self.last_round.map_or(-1, |round| round as i64),
        )
    }
}

/// Referee loads of every team of a discipline, updated as games get a referee.
#[derive(Clone, Debug, Default)]
pub struct RefereeLedger<T> {
    loads: HashMap<T, RefereeLoad>,
}

impl<T: Copy + Ord + Hash> RefereeLedger<T> {
    pub fn new() -> Self {
        RefereeLedger {
            loads: HashMap::new(),
        }
    }

    /// Builds the ledger from `(referee, round order)` pairs of existing games.
    pub fn from_games(games: impl IntoIterator<Item = (T, u32)>) -> Self {
        let mut ledger = RefereeLedger::new();
        for (referee, round) in games {
            ledger.record(referee, round);
        }
        ledger
    }

    pub fn load(&self, team: T) -> RefereeLoad {
        self.loads.get(&team).copied().unwrap_or_default()
    }

    pub fn record(&mut self, referee: T, round: u32) {
        let load = self.loads.entry(referee).or_default();
        load.refereed_games += 1;
        load.last_round = Some(load.last_round.map_or(round, |last| last.max(round)));
    }

    /// The candidate with the fewest refereed games, then the one that
    /// refereed longest ago (or never), then the lowest id.
    pub fn pick(&self, candidates: impl IntoIterator<Item = T>) -> Option<T> {
        candidates
            .into_iter()
            .min_by_key(|team| (self.load(*team).sort_key(), *team))
    }
}

/// A game waiting for a referee. A team officiates at most one game per
/// `round`, and only `candidates` may take this one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefereeRequest<T> {
    pub round: u32,
    pub candidates: Vec<T>,
}

/// Assigns a referee to as many `requests` as possible while keeping the
/// refereed-game counts (ledger history included) as level as the
/// candidate lists allow. Returns one entry per request, in order.
///
/// Loads are raised one level at a time, and each level fills a unit
/// capacity flow network `source -> request -> (team, round) -> team -> sink`
/// whose team edges admit games up to that level.
pub fn balance_referees<T: Copy + Ord + Hash>(
    requests: &[RefereeRequest<T>],
    ledger: &RefereeLedger<T>,
) -> Vec<Option<T>> {
    let mut network = Network::new();
    let mut slots: HashMap<(T, u32), usize> = HashMap::new();
    let mut team_nodes: HashMap<T, usize> = HashMap::new();
    let mut sinks: Vec<(u32, usize)> = Vec::new();
    let mut offers: Vec<Vec<(T, usize)>> = Vec::with_capacity(requests.len());

    for request in requests {
        let node = network.add_node();
        network.add_edge(SOURCE, node, 1);

        let mut candidates = request.candidates.clone();
        candidates.sort_by_key(|team| (ledger.load(*team).sort_key(), *team));
        candidates.dedup();

        let mut offered = Vec::with_capacity(candidates.len());
        for team in candidates {
            let slot = match slots.entry((team, request.round)) {
                Entry::Occupied(entry) => *entry.get(),
                Entry::Vacant(entry) => {
                    let slot = network.add_node();
                    let team_node = match team_nodes.entry(team) {
                        Entry::Occupied(entry) => *entry.get(),
                        Entry::Vacant(entry) => {
                            let team_node = network.add_node();
                            let edge = network.add_edge(team_node, SINK, 0);
                            sinks.push((ledger.load(team).refereed_games, edge));
                            *entry.insert(team_node)
                        }
                    };
                    network.add_edge(slot, team_node, 1);
                    *entry.insert(slot)
                }
            };
            offered.push((team, network.add_edge(node, slot, 1)));
        }
        offers.push(offered);
    }

    let wanted = offers.iter().filter(|offered| !offered.is_empty()).count();
    let lowest = sinks.iter().map(|(load, _)| *load).min().unwrap_or(0);
    let ceiling = sinks.iter().map(|(load, _)| *load).max().unwrap_or(0) + requests.len() as u32;

    let mut level = lowest;
    let mut filled = 0;
    while filled < wanted && level < ceiling {
        level += 1;
        for (load, edge) in &sinks {
            if *load < level {
                network.widen(*edge);
            }
        }
        filled += network.fill();
    }

    offers
        .into_iter()
        .map(|offered| {
            offered
                .into_iter()
                .find(|(_, edge)| network.is_used(*edge))
                .map(|(team, _)| team)
        })
        .collect()
}

const SOURCE: usize = 0;
const SINK: usize = 1;

struct Edge {
    to: usize,
    capacity: u32,
}

/// Residual graph. Every edge is stored next to its reverse, so `edge ^ 1`
/// is the reverse of `edge`.
struct Network {
    edges: Vec<Edge>,
    adjacency: Vec<Vec<usize>>,
}

impl Network {
    fn new() -> Self {
        Network {
            edges: Vec::new(),
            adjacency: vec![Vec::new(), Vec::new()],
        }
    }

    fn add_node(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, capacity: u32) -> usize {
        let edge = self.edges.len();
        self.edges.push(Edge { to, capacity });
        self.edges.push(Edge {
            to: from,
            capacity: 0,
        });
        self.adjacency[from].push(edge);
        self.adjacency[to].push(edge + 1);
        edge
    }

    fn widen(&mut self, edge: usize) {
        self.edges[edge].capacity += 1;
    }

    fn is_used(&self, edge: usize) -> bool {
        self.edges[edge].capacity == 0 && self.edges[edge ^ 1].capacity > 0
    }

    /// Pushes one unit along some source-to-sink path, if one exists.
    fn augment(&mut self) -> bool {
        let mut parent: Vec<Option<usize>> = vec![None; self.adjacency.len()];
        let mut visited = vec![false; self.adjacency.len()];
        visited[SOURCE] = true;
        let mut stack = vec![SOURCE];

        while let Some(node) = stack.pop() {
            if node == SINK {
                break;
            }
            for &edge in self.adjacency[node].iter().rev() {
                let next = self.edges[edge].to;
                if self.edges[edge].capacity > 0 && !visited[next] {
                    visited[next] = true;
                    parent[next] = Some(edge);
                    stack.push(next);
                }
            }
        }
        if !visited[SINK] {
            return false;
        }

        let mut node = SINK;
        while let Some(edge) = parent[node] {
            self.edges[edge].capacity -= 1;
            self.edges[edge ^ 1].capacity += 1;
            node = self.edges[edge ^ 1].to;
        }
        true
    }

    fn fill(&mut self) -> usize {
        let mut pushed = 0;
        while self.augment() {
            pushed += 1;
        }
        pushed
    }
}
