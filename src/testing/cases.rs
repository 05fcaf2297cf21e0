//! Small driver programs built on top of [`DSU`]. The demos print these
//! reports, the scenario tests assert on them.

use crate::base::{DSU, DSURes};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectivityReport {
    pub zero_two_connected: bool,
    pub two_three_connected: bool,
    pub two_three_connected_after: bool,
    pub components: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentSizeReport {
    pub size_of_zero: usize,
    pub size_of_three: usize,
    pub size_of_zero_after: usize,
    pub components: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    /// First edge whose endpoints were already connected.
    pub closing_edge: Option<(usize, usize)>,
}

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}

impl fmt::Display for ConnectivityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "0 and 2 connected? {}", yes_no(self.zero_two_connected))?;
        writeln!(f, "2 and 3 connected? {}", yes_no(self.two_three_connected))?;
        writeln!(f, "2 and 3 connected after union? {}", yes_no(self.two_three_connected_after))?;
        write!(f, "Number of components: {}", self.components)
    }
}

impl fmt::Display for ComponentSizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "size of component containing 0: {}", self.size_of_zero)?;
        writeln!(f, "size of component containing 3: {}", self.size_of_three)?;
        writeln!(f, "size of component containing 0 after merge: {}", self.size_of_zero_after)?;
        write!(f, "Number of components: {}", self.components)
    }
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cycle detected? {}", yes_no(self.closing_edge.is_some()))
    }
}

/// Connectivity checks over six elements, before and after bridging
/// `{0, 1, 2}` with `{3, 4}`.
pub fn basic_connectivity() -> DSURes<ConnectivityReport> {
    let mut dsu = DSU::new(6);
    dsu.unite(0, 1)?;
    dsu.unite(1, 2)?;
    dsu.unite(3, 4)?;

    let zero_two_connected = dsu.same(0, 2)?;
    let two_three_connected = dsu.same(2, 3)?;
    dsu.unite(2, 3)?;
    let report = ConnectivityReport {
        zero_two_connected,
        two_three_connected,
        two_three_connected_after: dsu.same(2, 3)?,
        components: dsu.components_count(),
    };
    log::debug!("basic connectivity: {report:?}");
    Ok(report)
}

/// Component sizes over seven elements, before and after merging
/// `{0, 1, 2}` with `{3, 4}`.
pub fn component_sizes() -> DSURes<ComponentSizeReport> {
    let mut dsu = DSU::new(7);
    dsu.unite(0, 1)?;
    dsu.unite(1, 2)?;
    dsu.unite(3, 4)?;
    dsu.unite(5, 6)?;

    let size_of_zero = dsu.component_size(0)?;
    let size_of_three = dsu.component_size(3)?;
    dsu.unite(2, 4)?;
    let report = ComponentSizeReport {
        size_of_zero,
        size_of_three,
        size_of_zero_after: dsu.component_size(0)?,
        components: dsu.components_count(),
    };
    log::debug!("component sizes: {report:?}");
    Ok(report)
}

/// Scans undirected `edges` over `n` vertices in order and returns the
/// position of the first edge whose endpoints were already connected.
pub fn find_cycle_edge(n: usize, edges: &[(usize, usize)]) -> DSURes<Option<usize>> {
    let mut dsu = DSU::new(n);
    for (pos, &(u, v)) in edges.iter().enumerate() {
        if dsu.same(u, v)? {
            log::debug!("edge #{pos} ({u}, {v}) closes a cycle");
            return Ok(Some(pos));
        }
        dsu.unite(u, v)?;
    }
    Ok(None)
}

pub fn has_cycle(n: usize, edges: &[(usize, usize)]) -> DSURes<bool> {
    Ok(find_cycle_edge(n, edges)?.is_some())
}

/// Cycle detection over [`CYCLE_DEMO_EDGES`].
pub fn cycle_detection() -> DSURes<CycleReport> {
    let closing_edge = find_cycle_edge(5, &CYCLE_DEMO_EDGES)?.map(|pos| CYCLE_DEMO_EDGES[pos]);
    Ok(CycleReport { closing_edge })
}

/// The graph the cycle detection demo runs on: a path `0-1-2-3-4` plus the
/// closing edge `(4, 1)`.
pub const CYCLE_DEMO_EDGES: [(usize, usize); 5] = [(0, 1), (1, 2), (2, 3), (3, 4), (4, 1)];
