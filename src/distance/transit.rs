//! Point-to-point cost callbacks handed to a routing engine.

/// A cost between two location nodes.
///
/// Engines hold registered callbacks as `Arc<dyn TransitCost>` and may call
/// them at any point until the model is dropped, from any thread.
pub trait TransitCost: Send + Sync {
    /// Cost of traveling from node `from` to node `to`.
    fn transit(&self, from: usize, to: usize) -> i64;

    /// Number of nodes this callback is defined over.
    fn node_count(&self) -> usize;
}
