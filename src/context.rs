use super::*;

pub(crate) struct Context<'a> {
  base_url: Option<&'a Url>,
  fragment: Option<NodeId>,
  html: &'a dom_query::Document,
  options: &'a ReadabilityOptions,
  scores: Scores,
  siblings: Vec<NodeId>,
  top_candidate: Option<NodeId>,
}

impl<'a> Context<'a> {
  pub(crate) fn base_url(&self) -> Option<&'a Url> {
    self.base_url
  }

  pub(crate) fn document(&self) -> Document<'a> {
    Document::new(self.html)
  }

  pub(crate) fn fragment(&self) -> Option<NodeId> {
    self.fragment
  }

  pub(crate) fn new(
    html: &'a dom_query::Document,
    base_url: Option<&'a Url>,
    options: &'a ReadabilityOptions,
  ) -> Self {
    Self {
      base_url,
      fragment: None,
      html,
      options,
      scores: Scores::default(),
      siblings: Vec::new(),
      top_candidate: None,
    }
  }

  pub(crate) fn options(&self) -> &'a ReadabilityOptions {
    self.options
  }

  pub(crate) fn scores(&self) -> &Scores {
    &self.scores
  }

  pub(crate) fn scores_mut(&mut self) -> &mut Scores {
    &mut self.scores
  }

  pub(crate) fn set_fragment(&mut self, fragment: NodeId) {
    self.fragment = Some(fragment);
  }

  pub(crate) fn set_scores(&mut self, scores: Scores) {
    self.scores = scores;
  }

  pub(crate) fn set_selection(
    &mut self,
    top_candidate: NodeId,
    siblings: Vec<NodeId>,
  ) {
    self.top_candidate = Some(top_candidate);
    self.siblings = siblings;
  }

  pub(crate) fn siblings(&self) -> &[NodeId] {
    &self.siblings
  }

  pub(crate) fn top_candidate(&self) -> Option<NodeId> {
    self.top_candidate
  }
}
