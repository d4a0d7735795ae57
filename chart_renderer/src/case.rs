//!
//! The fixed benchmark cases.
//!

/// The tree reduction case.
pub const TREE: &str = "argobots_tree_summary";
/// The tree reduction case on the small input.
pub const TREE_SMALL: &str = "argobots_tree_summary_small";
/// The simple reduction case.
pub const SIMPLE: &str = "argobots_simple_summary";
/// The simple reduction case on the small input.
pub const SIMPLE_SMALL: &str = "argobots_simple_summary_small";

/// The cases rendered one by one, in rendering order.
pub const CASES: [&str; 4] = [TREE, TREE_SMALL, SIMPLE, SIMPLE_SMALL];

/// The tree versus simple comparisons, in rendering order.
pub const COMPARISONS: [Comparison; 2] = [
    Comparison {
        tree: TREE,
        simple: SIMPLE,
        directory: "tree_vs_simple_speedup",
        small: false,
    },
    Comparison {
        tree: TREE_SMALL,
        simple: SIMPLE_SMALL,
        directory: "tree_vs_simple_speedup_small",
        small: true,
    },
];

///
/// A pair of cases compared against each other.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    /// The tree case name.
    pub tree: &'static str,
    /// The simple case name.
    pub simple: &'static str,
    /// The output directory name.
    pub directory: &'static str,
    /// Whether the pair runs on the small input.
    pub small: bool,
}

impl Comparison {
    ///
    /// Returns the chart file name for an Xstreams partition.
    ///
    pub fn file_name(&self, xstreams: u32) -> String {
        format!("tree_vs_simple_xstreams_{xstreams}.png")
    }

    ///
    /// Returns the chart title for an Xstreams partition.
    ///
    pub fn title(&self, xstreams: u32) -> String {
        if self.small {
            format!("Speedup of Tree Case vs Simple Case (Small Case, Xstreams={xstreams})")
        } else {
            format!("Speedup of Tree Case vs Simple Case (Xstreams={xstreams})")
        }
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} vs {}", self.tree, self.simple)
    }
}
