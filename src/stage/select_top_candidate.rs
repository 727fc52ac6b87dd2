use {super::*, document::tag_name};

/// A top candidate with more direct paragraphs than this is treated as the
/// article container itself rather than one block among its siblings.
const MAX_PARAGRAPHS_FOR_PARENT_SIBLINGS: usize = 5;

/// Rescores every candidate by paragraph count and link density, then picks
/// the best one and the sibling set it should be assembled from.
pub struct SelectTopCandidateStage;

impl Stage for SelectTopCandidateStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    if context.scores().is_empty() {
      debug!("no candidates to select from");
      return Ok(());
    }

    let document = context.document();

    let mut top_candidate: Option<(NodeRef<'_>, f64)> = None;

    for id in context.scores().candidates().to_vec() {
      let Some(node) = document.node(id) else {
        continue;
      };

      let score = Self::final_score(&node, context.scores().get(id));

      context.scores_mut().set(id, score);

      if top_candidate
        .as_ref()
        .is_none_or(|(_, best_score)| score > *best_score)
      {
        top_candidate = Some((node, score));
      }
    }

    let Some((top_candidate, score)) = top_candidate else {
      return Ok(());
    };

    let paragraphs = scoring::paragraph_children(&top_candidate);

    let siblings = match top_candidate.parent() {
      Some(parent) if paragraphs <= MAX_PARAGRAPHS_FOR_PARENT_SIBLINGS => {
        parent.element_children()
      }
      _ => top_candidate.element_children(),
    };

    debug!(
      tag = %tag_name(&top_candidate),
      score,
      paragraphs,
      siblings = siblings.len(),
      "selected top candidate"
    );

    context.set_selection(
      top_candidate.id,
      siblings.into_iter().map(|sibling| sibling.id).collect(),
    );

    Ok(())
  }
}

impl SelectTopCandidateStage {
  fn final_score(node: &NodeRef<'_>, score: Option<f64>) -> f64 {
    let paragraphs = scoring::paragraph_children(node).clamp(1, 2);

    scoring::as_f64(paragraphs)
      * score.unwrap_or_default()
      * (1.0 - scoring::link_density(node))
  }
}
