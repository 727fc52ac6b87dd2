use super::*;

/// Scratch scores keyed by node identity, plus the order in which nodes
/// were first registered as candidates.
#[derive(Debug, Default)]
pub(crate) struct Scores {
  candidates: Vec<NodeId>,
  values: HashMap<NodeId, f64>,
}

impl Scores {
  /// Adds `contribution` to the node's scratch score. The first time a node
  /// is seen its score starts from its base score and it becomes a
  /// candidate.
  pub(crate) fn add(&mut self, node: &NodeRef<'_>, contribution: f64) {
    if let Some(score) = self.values.get_mut(&node.id) {
      *score += contribution;
      return;
    }

    self.candidates.push(node.id);

    self
      .values
      .insert(node.id, scoring::initial_score(node) + contribution);
  }

  pub(crate) fn candidates(&self) -> &[NodeId] {
    &self.candidates
  }

  pub(crate) fn get(&self, id: NodeId) -> Option<f64> {
    self.values.get(&id).copied()
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.candidates.is_empty()
  }

  /// Replaces the candidate set with `id` alone. Scratch scores are kept.
  pub(crate) fn reset_candidates(&mut self, id: NodeId) {
    self.candidates = vec![id];
  }

  pub(crate) fn set(&mut self, id: NodeId, score: f64) {
    self.values.insert(id, score);
  }
}
