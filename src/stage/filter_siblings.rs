use {
  super::*,
  document::{has_tag, tag_name},
  scoring::link_density,
};

/// Absolute floor for the sibling score threshold.
const MIN_SIBLING_SCORE: f64 = 10.0;

/// Ratio of the top candidate score a sibling must exceed to be included.
const SIBLING_SCORE_RATIO: f64 = 0.3;

/// Siblings that are only judged on their own text.
const TEXT_SIBLING_TAGS: &[&str] = &["p", "ul", "blockquote", "pre", "h2"];

const MIN_SIBLING_TEXT_LENGTH: usize = 3;

const LONG_TEXT_LENGTH: usize = 80;

const MAX_LONG_TEXT_LINK_DENSITY: f64 = 0.25;

/// Moves the top candidate and every qualifying sibling, in document order,
/// into a fresh detached container.
pub struct FilterSiblingsStage;

impl Stage for FilterSiblingsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let Some(top_candidate) = context.top_candidate() else {
      return Ok(());
    };

    let document = context.document();

    let threshold = (context.scores().get(top_candidate).unwrap_or_default()
      * SIBLING_SCORE_RATIO)
      .max(MIN_SIBLING_SCORE);

    let fragment = document.create_fragment();

    let mut included = 0;

    for &id in context.siblings() {
      let Some(sibling) = document.node(id) else {
        continue;
      };

      if Self::should_include(
        &sibling,
        top_candidate,
        context.scores().get(id),
        threshold,
      ) {
        fragment.append_child(&sibling.id);
        included += 1;
      }
    }

    debug!(
      threshold,
      included,
      considered = context.siblings().len(),
      "filtered siblings"
    );

    context.set_fragment(fragment.id);

    Ok(())
  }
}

impl FilterSiblingsStage {
  fn contains_image(node: &NodeRef<'_>) -> bool {
    has_tag(node, &["img"])
      || node
        .element_children()
        .iter()
        .any(|child| has_tag(child, &["img"]))
  }

  /// Judges a sibling on its own text: long text with few links, or short
  /// text with none.
  fn is_text_block(node: &NodeRef<'_>) -> bool {
    Self::strip_single_character_links(node);

    let text = node.text();
    let text = text.trim();

    let length = text.chars().count();

    if length < MIN_SIBLING_TEXT_LENGTH {
      return false;
    }

    let link_density = link_density(node);

    (length > LONG_TEXT_LENGTH && link_density < MAX_LONG_TEXT_LINK_DENSITY)
      || (length < LONG_TEXT_LENGTH
        && link_density == 0.0
        && !text.is_empty())
  }

  fn should_include(
    node: &NodeRef<'_>,
    top_candidate: NodeId,
    score: Option<f64>,
    threshold: f64,
  ) -> bool {
    if node.id == top_candidate
      || score.is_some_and(|score| score > threshold)
      || Self::contains_image(node)
    {
      return true;
    }

    if !TEXT_SIBLING_TAGS.contains(&tag_name(node).as_str()) {
      return false;
    }

    Self::is_text_block(node)
  }

  fn strip_single_character_links(node: &NodeRef<'_>) {
    for anchor in node.descendants() {
      if has_tag(&anchor, &["a"]) && anchor.text().chars().count() <= 1 {
        anchor.remove_from_parent();
      }
    }
  }
}
