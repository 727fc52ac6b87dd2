use super::*;

/// Class given to paragraphs synthesized from loose `<div>` content.
pub(crate) const DIV_TO_P_CLASS: &str = "node-read-div2p";

#[derive(Clone, Copy)]
pub(crate) struct Document<'a> {
  document: &'a dom_query::Document,
}

impl<'a> Document<'a> {
  pub(crate) fn body(&self) -> Option<NodeRef<'a>> {
    self.document.select("body").nodes().first().cloned()
  }

  /// Whether `node` still hangs below `ancestor`. Nodes removed or replaced
  /// earlier in a pass answer `false`.
  pub(crate) fn contains(ancestor: NodeId, node: &NodeRef<'a>) -> bool {
    node.ancestors_it(None).any(|parent| parent.id == ancestor)
  }

  pub(crate) fn create_fragment(&self) -> NodeRef<'a> {
    let fragment = self.document.tree.new_element("div");
    fragment.set_attr("id", ArticleFragment::ID);
    fragment
  }

  pub(crate) fn create_marked_paragraph(&self) -> NodeRef<'a> {
    let paragraph = self.document.tree.new_element("p");
    paragraph.set_attr("class", DIV_TO_P_CLASS);
    paragraph
  }

  pub(crate) fn element_count(&self) -> usize {
    self
      .document
      .root()
      .descendants()
      .into_iter()
      .filter(NodeRef::is_element)
      .count()
  }

  pub(crate) fn marked_paragraphs(&self) -> Vec<NodeRef<'a>> {
    self
      .document
      .select(&format!("body p.{DIV_TO_P_CLASS}"))
      .nodes()
      .to_vec()
  }

  pub(crate) fn new(document: &'a dom_query::Document) -> Self {
    Document { document }
  }

  pub(crate) fn node(&self, id: NodeId) -> Option<NodeRef<'a>> {
    self.document.tree.get(&id)
  }

  /// Detaches every element whose tag is in `names`, returning how many
  /// elements were removed.
  pub(crate) fn remove_elements_named<S: AsRef<str>>(
    &self,
    names: &[S],
  ) -> usize {
    let mut removed = 0;

    for node in self.document.root().descendants() {
      let Some(name) = node.node_name() else {
        continue;
      };

      if names
        .iter()
        .any(|candidate| candidate.as_ref().eq_ignore_ascii_case(&name))
      {
        node.remove_from_parent();
        removed += 1;
      }
    }

    removed
  }
}

pub(crate) fn has_tag(node: &NodeRef<'_>, names: &[&str]) -> bool {
  node
    .node_name()
    .is_some_and(|name| names.iter().any(|candidate| *candidate == &*name))
}

pub(crate) fn tag_name(node: &NodeRef<'_>) -> String {
  node
    .node_name()
    .map(|name| name.to_string())
    .unwrap_or_default()
}
