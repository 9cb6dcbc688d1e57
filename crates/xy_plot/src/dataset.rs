use crate::constants::{ADJACENCY_SUFFIX, FIELD_EXT};
use std::path::{Path, PathBuf};
use strum_macros::{Display, EnumIter, EnumString};

/// Named simulation output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Dataset {
    Grid,
    Hierarchical,
}

impl Dataset {
    /// File stem shared by the field and adjacency files
    pub fn prefix(self) -> &'static str {
        match self {
            Dataset::Grid => "xy_grid",
            Dataset::Hierarchical => "xy_hierarchical",
        }
    }

    pub fn field_path(self, results_dir: &Path) -> PathBuf {
        results_dir.join(format!("{}.{}", self.prefix(), FIELD_EXT))
    }

    pub fn adjacency_path(self, results_dir: &Path) -> PathBuf {
        results_dir.join(format!("{}{}.{}", self.prefix(), ADJACENCY_SUFFIX, FIELD_EXT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_resolve_names() {
        assert_eq!(Dataset::from_str("grid").unwrap(), Dataset::Grid);
        assert_eq!(
            Dataset::from_str("hierarchical").unwrap(),
            Dataset::Hierarchical
        );
        assert!(Dataset::from_str("torus").is_err());
        assert!(Dataset::from_str("").is_err());
        assert_eq!(Dataset::Hierarchical.to_string(), "hierarchical");
    }

    #[test]
    fn test_prefixes_are_distinct() {
        use strum::IntoEnumIterator;

        let prefixes: Vec<_> = Dataset::iter().map(Dataset::prefix).collect();
        assert_eq!(prefixes, ["xy_grid", "xy_hierarchical"]);
    }

    #[test]
    fn test_paths() {
        let dir = Path::new("results");
        assert_eq!(
            Dataset::Grid.field_path(dir),
            PathBuf::from("results/xy_grid.txt")
        );
        assert_eq!(
            Dataset::Hierarchical.adjacency_path(dir),
            PathBuf::from("results/xy_hierarchical_adj.txt")
        );
    }
}
