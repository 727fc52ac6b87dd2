use super::*;

/// Detached container holding the extracted article. Its children were moved
/// out of the source document, in document order.
#[derive(Debug, Clone)]
pub struct ArticleFragment<'a> {
  node: NodeRef<'a>,
}

impl<'a> ArticleFragment<'a> {
  pub const ID: &'static str = "readabilityArticle";

  #[must_use]
  pub fn children(&self) -> Vec<NodeRef<'a>> {
    self.node.element_children()
  }

  /// Markup of the container including its own tag.
  #[must_use]
  pub fn html(&self) -> String {
    self.node.html().to_string()
  }

  #[must_use]
  pub fn inner_html(&self) -> String {
    self.node.inner_html().to_string()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.children().is_empty()
  }

  pub(crate) fn new(node: NodeRef<'a>) -> Self {
    Self { node }
  }

  #[must_use]
  pub fn node(&self) -> &NodeRef<'a> {
    &self.node
  }

  /// Text content with whitespace runs collapsed.
  #[must_use]
  pub fn text(&self) -> String {
    re::WHITESPACE_RUNS
      .replace_all(self.node.text().trim(), " ")
      .into_owned()
  }
}
