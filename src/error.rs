//! Error types for tangle operations
//!
//! Traversal, MST construction over a well-formed graph, and SCC
//! decomposition are total; errors arise only from unknown query
//! sources and from shortest-path preconditions.

use thiserror::Error;

/// Errors that can occur during graph queries
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("unknown vertex: {vertex}")]
    UnknownVertex { vertex: String },

    #[error("negative-weight cycle reachable from {from}")]
    NegativeCycle { from: String },

    #[error("negative edge weight {weight} on {from} -> {to}: dijkstra requires non-negative weights")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },
}

impl GraphError {
    /// Create an error for a query source missing from the vertex set
    pub fn unknown_vertex(vertex: impl std::fmt::Debug) -> Self {
        GraphError::UnknownVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for a negative cycle found during Bellman-Ford
    pub fn negative_cycle(source: impl std::fmt::Debug) -> Self {
        GraphError::NegativeCycle {
            from: format!("{:?}", source),
        }
    }

    /// Create an error for a negative edge weight rejected by Dijkstra
    pub fn negative_weight(from: impl std::fmt::Debug, to: impl std::fmt::Debug, weight: f64) -> Self {
        GraphError::NegativeWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            weight,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownVertex { .. } => "unknown_vertex",
            GraphError::NegativeCycle { .. } => "negative_cycle",
            GraphError::NegativeWeight { .. } => "negative_weight",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for tangle operations
pub type Result<T> = std::result::Result<T, GraphError>;
