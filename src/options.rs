/// Knobs for a single extraction run.
#[derive(Debug, Clone)]
pub struct ReadabilityOptions {
  /// Rewrite `<div>`s holding only inline content into paragraphs, and wrap
  /// loose text inside other `<div>`s.
  pub consider_divs: bool,
  /// Abort before touching the tree when it holds more elements than this.
  pub max_elems_to_parse: Option<usize>,
  /// Tags deleted from the whole document before scoring starts.
  pub nodes_to_remove: Vec<String>,
}

impl Default for ReadabilityOptions {
  fn default() -> Self {
    Self {
      consider_divs: true,
      max_elems_to_parse: None,
      nodes_to_remove: [
        "meta", "iframe", "noscript", "style", "aside", "object", "script",
      ]
      .into_iter()
      .map(str::to_string)
      .collect(),
    }
  }
}

impl ReadabilityOptions {
  #[must_use]
  pub fn builder() -> ReadabilityOptionsBuilder {
    ReadabilityOptionsBuilder::default()
  }
}

#[derive(Default)]
pub struct ReadabilityOptionsBuilder {
  inner: ReadabilityOptions,
}

impl ReadabilityOptionsBuilder {
  #[must_use]
  pub fn build(self) -> ReadabilityOptions {
    self.inner
  }

  #[must_use]
  pub fn consider_divs(self, consider_divs: bool) -> Self {
    Self {
      inner: ReadabilityOptions {
        consider_divs,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn max_elems_to_parse(self, max_elems_to_parse: Option<usize>) -> Self {
    Self {
      inner: ReadabilityOptions {
        max_elems_to_parse,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn nodes_to_remove<I, S>(self, tags: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      inner: ReadabilityOptions {
        nodes_to_remove: tags.into_iter().map(Into::into).collect(),
        ..self.inner
      },
    }
  }
}
