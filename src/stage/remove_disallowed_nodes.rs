use super::*;

/// Deletes the configured noise tags from the whole document.
pub struct RemoveDisallowedNodesStage;

impl Stage for RemoveDisallowedNodesStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let removed = context
      .document()
      .remove_elements_named(&context.options().nodes_to_remove);

    debug!(removed, "removed disallowed nodes");

    Ok(())
  }
}
