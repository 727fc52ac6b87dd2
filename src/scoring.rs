use {
  super::*,
  document::{has_tag, tag_name},
  re::{
    ITEM_PROP_ARTICLE, NEGATIVE_CONTENT_HINTS, POSITIVE_CONTENT_HINTS,
    SENTENCE_PUNCTUATION,
  },
};

/// Minimum amount of text a paragraph must contain to be scored.
const MIN_PARAGRAPH_LENGTH: usize = 25;

/// One point per this many characters of paragraph text.
const CHARS_PER_LENGTH_POINT: usize = 100;

const MAX_LENGTH_POINTS: usize = 3;

pub(crate) fn as_f64(value: usize) -> f64 {
  f64::from(u32::try_from(value).unwrap_or(u32::MAX))
}

/// Heuristic bias from tag name, class, id and microdata. Non-element nodes
/// weigh nothing.
pub(crate) fn class_weight(node: &NodeRef<'_>) -> i32 {
  let Some(name) = node.node_name() else {
    return 0;
  };

  let class = node.attr("class");
  let class = class.as_deref().unwrap_or_default();

  let id = node.attr("id");
  let id = id.as_deref().unwrap_or_default();

  let mut weight = 0;

  if node
    .attr("itemprop")
    .is_some_and(|itemprop| ITEM_PROP_ARTICLE.is_match(&itemprop))
  {
    weight += 25;
  }

  match &*name {
    "article" => weight += 25,
    "section" => weight += 10,
    "header" | "aside" | "footer" => weight -= 25,
    _ => {}
  }

  if class == "comments" && id == "comments" {
    weight -= 25;
  }

  if NEGATIVE_CONTENT_HINTS.is_match(class) {
    weight -= 25;
  }

  if NEGATIVE_CONTENT_HINTS.is_match(id) {
    weight -= 20;
  }

  if POSITIVE_CONTENT_HINTS.is_match(class) {
    weight += 25;
  }

  if POSITIVE_CONTENT_HINTS.is_match(id) {
    weight += 20;
  }

  weight
}

/// Score of a paragraph's own text, or `None` when it is too short to count.
pub(crate) fn content_score(text: &str) -> Option<f64> {
  let length = text.chars().count();

  if length < MIN_PARAGRAPH_LENGTH {
    return None;
  }

  let punctuation = SENTENCE_PUNCTUATION.find_iter(text).count();

  let length_points =
    (length / CHARS_PER_LENGTH_POINT).min(MAX_LENGTH_POINTS);

  Some(1.0 + as_f64(punctuation) + as_f64(length_points))
}

/// Base score a node starts from when it first becomes a candidate.
pub(crate) fn initial_score(node: &NodeRef<'_>) -> f64 {
  let base = match tag_name(node).as_str() {
    "div" => 5,
    "pre" | "td" | "blockquote" => 3,
    "address" | "ol" | "ul" | "dl" | "dd" | "dt" | "li" => -3,
    "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "th" => -5,
    _ => return -1.0,
  };

  f64::from(base + class_weight(node))
}

/// Fraction of the node's text that sits inside links leaving the page.
/// Fragment links (`#...`) and anchors without an `href` don't count.
pub(crate) fn link_density(node: &NodeRef<'_>) -> f64 {
  let length = text_length(node);

  if length == 0 {
    return 0.0;
  }

  let link_length = node
    .descendants()
    .iter()
    .filter(|descendant| has_tag(descendant, &["a"]))
    .filter(|anchor| {
      anchor
        .attr("href")
        .is_some_and(|href| !href.is_empty() && !href.starts_with('#'))
    })
    .map(text_length)
    .sum::<usize>();

  (as_f64(link_length) / as_f64(length)).min(1.0)
}

pub(crate) fn paragraph_children(node: &NodeRef<'_>) -> usize {
  node
    .element_children()
    .iter()
    .filter(|child| has_tag(child, &["p"]))
    .count()
}

/// Scores a paragraph and credits its parent in full and its grandparent by
/// half.
pub(crate) fn score_paragraph(node: &NodeRef<'_>, scores: &mut Scores) {
  let Some(score) = content_score(&node.text()) else {
    return;
  };

  let Some(parent) = node.parent() else {
    return;
  };

  scores.add(&parent, score);

  if let Some(grandparent) = parent.parent() {
    scores.add(&grandparent, score / 2.0);
  }

  trace!(score, "scored paragraph");
}

pub(crate) fn text_length(node: &NodeRef<'_>) -> usize {
  node.text().chars().count()
}
