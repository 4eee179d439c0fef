//! Solver configuration.

/// Order in which a meeting's candidate datetimes are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueOrder {
    /// Earliest datetime first. Deterministic.
    #[default]
    Ascending,

    /// Latest datetime first. Deterministic.
    Descending,

    /// Random order per visit, reproducible with [`SolverConfig::seed`].
    Shuffled,
}

/// Configuration for [`super::CspRunner`].
///
/// # Examples
///
/// ```
/// use u_calsat::search::{SolverConfig, ValueOrder};
///
/// let config = SolverConfig::default()
///     .with_value_order(ValueOrder::Shuffled)
///     .with_seed(7)
///     .with_max_nodes(10_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Candidate ordering during search.
    pub value_order: ValueOrder,

    /// Random seed for [`ValueOrder::Shuffled`] (None for random).
    pub seed: Option<u64>,

    /// Whether to prune with unary constraints before search.
    pub node_consistency: bool,

    /// Whether to prune with AC-3 before search.
    pub arc_consistency: bool,

    /// Maximum number of tentative assignments (hard budget). 0 = no limit.
    pub max_nodes: usize,

    /// Whether to check constraints in parallel using rayon.
    ///
    /// Requires the `parallel` feature.
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            value_order: ValueOrder::Ascending,
            seed: None,
            node_consistency: true,
            arc_consistency: true,
            max_nodes: 0,
            parallel: false,
        }
    }
}

impl SolverConfig {
    pub fn with_value_order(mut self, order: ValueOrder) -> Self {
        self.value_order = order;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_node_consistency(mut self, enabled: bool) -> Self {
        self.node_consistency = enabled;
        self
    }

    pub fn with_arc_consistency(mut self, enabled: bool) -> Self {
        self.arc_consistency = enabled;
        self
    }

    pub fn with_max_nodes(mut self, n: usize) -> Self {
        self.max_nodes = n;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.parallel && !cfg!(feature = "parallel") {
            return Err("parallel constraint checking requires the `parallel` feature".into());
        }
        if self.seed.is_some() && self.value_order != ValueOrder::Shuffled {
            return Err(format!(
                "seed is only used with shuffled value order, got {:?}",
                self.value_order
            ));
        }
        Ok(())
    }
}
