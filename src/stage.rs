use super::*;

mod collect_candidates;
mod element_limit;
mod filter_siblings;
mod remove_disallowed_nodes;
mod select_top_candidate;

pub use {
  collect_candidates::CollectCandidatesStage,
  element_limit::ElementLimitStage, filter_siblings::FilterSiblingsStage,
  remove_disallowed_nodes::RemoveDisallowedNodesStage,
  select_top_candidate::SelectTopCandidateStage,
};

pub(crate) trait Stage {
  fn run(&mut self, context: &mut Context<'_>) -> Result;
}
