use crate::error::{Result, XyPlotError};
use crate::lattice::Axis;

use itertools::iproduct;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Neighbor list of every lattice site, indexed by flat site index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyTable {
    rows: Vec<Vec<usize>>,
}

impl AdjacencyTable {
    /// Builds a table for an L×L×L lattice, checking the row count and index range
    pub fn new(mut rows: Vec<Vec<usize>>, side: usize) -> Result<Self> {
        let sites = side.pow(3);

        // a trailing newline may leave empty rows past the last site
        while rows.len() > sites && rows.last().is_some_and(Vec::is_empty) {
            rows.pop();
        }
        if rows.len() != sites {
            return Err(XyPlotError::Shape(format!(
                "adjacency table has {} rows, expected L^3 = {}",
                rows.len(),
                sites
            )));
        }

        for (i, row) in rows.iter().enumerate() {
            if let Some(&index) = row.iter().find(|&&n| n >= sites) {
                return Err(XyPlotError::NeighborOutOfRange {
                    line: i + 1,
                    index,
                    sites,
                });
            }
        }

        Ok(Self { rows })
    }

    pub fn neighbors(&self, site: usize) -> &[usize] {
        &self.rows[site]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reads one row of neighbor indices per line.
/// Empty lines are sites without neighbors.
pub fn read_adjacency_from_reader<R: Read>(reader: R, side: usize) -> Result<AdjacencyTable> {
    let mut rows = Vec::new();

    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse().map_err(|source| XyPlotError::AdjacencyParse {
                    line: i + 1,
                    token: token.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<usize>>>()?;
        rows.push(row);
    }

    AdjacencyTable::new(rows, side)
}

/// 2D slice of the lattice at `axis == 0`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossSectionGraph {
    axis: Axis,
    side: usize,
    /// site index -> (i, j) position in the plane
    nodes: BTreeMap<usize, (usize, usize)>,
    /// unordered pairs stored as (min, max)
    edges: BTreeSet<(usize, usize)>,
}

impl CrossSectionGraph {
    /// Filters the adjacency table down to the sites and edges of one plane
    pub fn from_adjacency(table: &AdjacencyTable, side: usize, axis: Axis) -> Self {
        let mut graph = Self {
            axis,
            side,
            nodes: BTreeMap::new(),
            edges: BTreeSet::new(),
        };

        for (i, j) in iproduct!(0..side, 0..side) {
            let site = axis.plane_site(i, j, side);
            graph.nodes.insert(site, (i, j));

            for &neighbor in table.neighbors(site) {
                if !axis.contains(neighbor, side) {
                    continue;
                }
                graph.add_edge(site, neighbor);
            }
        }

        graph
    }

    fn add_edge(&mut self, a: usize, b: usize) {
        self.edges.insert((a.min(b), a.max(b)));
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn position(&self, site: usize) -> Option<(usize, usize)> {
        self.nodes.get(&site).copied()
    }

    pub fn contains_edge(&self, a: usize, b: usize) -> bool {
        self.edges.contains(&(a.min(b), a.max(b)))
    }

    /// `(site, (i, j))` in ascending site order
    pub fn nodes(&self) -> impl Iterator<Item = (usize, (usize, usize))> + '_ {
        self.nodes.iter().map(|(&site, &pos)| (site, pos))
    }

    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }
}

/// Reads an adjacency file and builds the cross-section along `axis`
pub fn load_crosssection_graph<P: AsRef<Path>>(
    path: P,
    side: usize,
    axis: Axis,
) -> Result<CrossSectionGraph> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| XyPlotError::OpenFile {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_adjacency_from_reader(file, side)?;
    debug!("read {} adjacency rows from {}", table.len(), path.display());

    Ok(CrossSectionGraph::from_adjacency(&table, side, axis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::{to_1d, to_3d};
    use std::io::Write;
    use strum::IntoEnumIterator;
    use tempfile::NamedTempFile;

    /// Nearest-neighbor cubic lattice without periodic wrap
    fn cubic_rows(l: usize) -> Vec<Vec<usize>> {
        (0..l.pow(3))
            .map(|i| {
                let (x, y, z) = to_3d(i, l);
                let mut row = Vec::new();
                if x > 0 {
                    row.push(to_1d(x - 1, y, z, l));
                }
                if x + 1 < l {
                    row.push(to_1d(x + 1, y, z, l));
                }
                if y > 0 {
                    row.push(to_1d(x, y - 1, z, l));
                }
                if y + 1 < l {
                    row.push(to_1d(x, y + 1, z, l));
                }
                if z > 0 {
                    row.push(to_1d(x, y, z - 1, l));
                }
                if z + 1 < l {
                    row.push(to_1d(x, y, z + 1, l));
                }
                row
            })
            .collect()
    }

    fn to_text(rows: &[Vec<usize>]) -> String {
        rows.iter()
            .map(|row| row.iter().map(|n| format!("{n} ")).collect::<String>())
            .map(|line| line + "\n")
            .collect()
    }

    #[test]
    fn test_out_of_plane_neighbor_excluded() {
        let l: usize = 3;
        let mut rows = vec![Vec::new(); l.pow(3)];
        rows[0] = vec![l * l];
        let table = AdjacencyTable::new(rows, l).unwrap();

        let graph = CrossSectionGraph::from_adjacency(&table, l, Axis::Z);
        assert!(!graph.contains_edge(0, l * l));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_in_plane_neighbor_included() {
        let l: usize = 3;
        let mut rows = vec![Vec::new(); l.pow(3)];
        rows[0] = vec![1];
        let table = AdjacencyTable::new(rows, l).unwrap();

        let graph = CrossSectionGraph::from_adjacency(&table, l, Axis::Z);
        assert!(graph.contains_edge(0, 1));
        assert!(graph.contains_edge(1, 0));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_z_section_nodes_carry_xy() {
        let l = 4;
        let table = AdjacencyTable::new(cubic_rows(l), l).unwrap();
        let graph = CrossSectionGraph::from_adjacency(&table, l, Axis::Z);

        assert_eq!(graph.node_count(), l * l);
        for (site, (i, j)) in graph.nodes() {
            let (x, y, z) = to_3d(site, l);
            assert_eq!((i, j), (x, y));
            assert_eq!(z, 0);
        }
    }

    #[test]
    fn test_cubic_section_is_square_grid() {
        let l = 4;
        let table = AdjacencyTable::new(cubic_rows(l), l).unwrap();

        for axis in Axis::iter() {
            let graph = CrossSectionGraph::from_adjacency(&table, l, axis);
            assert_eq!(graph.node_count(), l * l, "axis {axis}");
            // 2 * L * (L - 1) bonds in an open L×L grid
            assert_eq!(graph.edge_count(), 2 * l * (l - 1), "axis {axis}");
            for (a, b) in graph.edges() {
                assert!(graph.position(a).is_some());
                assert!(graph.position(b).is_some());
            }
        }
    }

    #[test]
    fn test_x_and_y_sections() {
        let l = 3;
        let table = AdjacencyTable::new(cubic_rows(l), l).unwrap();

        let x_graph = CrossSectionGraph::from_adjacency(&table, l, Axis::X);
        assert_eq!(x_graph.position(to_1d(0, 1, 2, l)), Some((1, 2)));
        assert!(x_graph.contains_edge(to_1d(0, 0, 0, l), to_1d(0, 0, 1, l)));
        assert!(!x_graph.contains_edge(to_1d(0, 0, 0, l), to_1d(1, 0, 0, l)));

        let y_graph = CrossSectionGraph::from_adjacency(&table, l, Axis::Y);
        assert_eq!(y_graph.position(to_1d(2, 0, 1, l)), Some((2, 1)));
        assert!(y_graph.contains_edge(to_1d(0, 0, 0, l), to_1d(1, 0, 0, l)));
        assert!(!y_graph.contains_edge(to_1d(0, 0, 0, l), to_1d(0, 1, 0, l)));
    }

    #[test]
    fn test_duplicate_neighbors_deduplicated() {
        let l: usize = 2;
        let mut rows = vec![Vec::new(); l.pow(3)];
        rows[0] = vec![1, 1, 1];
        rows[1] = vec![0];
        let table = AdjacencyTable::new(rows, l).unwrap();

        let graph = CrossSectionGraph::from_adjacency(&table, l, Axis::Z);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_single_site_lattice() {
        let table = AdjacencyTable::new(vec![vec![]], 1).unwrap();
        let graph = CrossSectionGraph::from_adjacency(&table, 1, Axis::Z);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.position(0), Some((0, 0)));
    }

    #[test]
    fn test_parse_error_reports_line_and_token() {
        let text = "1\n0 x2\n";
        let err = read_adjacency_from_reader(text.as_bytes(), 1).unwrap_err();
        match err {
            XyPlotError::AdjacencyParse { line, token, .. } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_row_count_must_match_lattice() {
        let rows = vec![vec![1], vec![0]];
        let err = AdjacencyTable::new(rows, 2).unwrap_err();
        assert!(matches!(err, XyPlotError::Shape(_)));
    }

    #[test]
    fn test_trailing_blank_lines_ignored() {
        let l = 2;
        let text = to_text(&cubic_rows(l)) + "\n\n";
        let table = read_adjacency_from_reader(text.as_bytes(), l).unwrap();
        assert_eq!(table.len(), 8);
    }

    #[test]
    fn test_neighbor_out_of_range() {
        let mut rows = vec![Vec::new(); 8];
        rows[3] = vec![8];
        let err = AdjacencyTable::new(rows, 2).unwrap_err();
        assert!(matches!(
            err,
            XyPlotError::NeighborOutOfRange { line: 4, index: 8, sites: 8 }
        ));
    }

    #[test]
    fn test_load_from_file() {
        let l = 3;
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", to_text(&cubic_rows(l))).unwrap();

        let graph = load_crosssection_graph(file.path(), l, Axis::Z).unwrap();
        assert_eq!(graph.axis(), Axis::Z);
        assert_eq!(graph.side(), l);
        assert_eq!(graph.node_count(), 9);
        assert_eq!(graph.edge_count(), 12);
    }
}
