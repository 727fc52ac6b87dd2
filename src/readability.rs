use super::*;

/// Extracts the main article from `document`.
///
/// The document is mutated in place: noise is deleted, loose text is
/// rewrapped and the selected nodes are moved into the returned fragment.
/// Parse a fresh tree for every call. Running again on an already extracted
/// tree either finds whatever is left or, once `<body>` itself has been
/// moved out, fails with [`Error::MissingBody`].
///
/// # Errors
///
/// Returns [`Error::MissingBody`] when the tree has no `<body>` and
/// [`Error::ElementLimitExceeded`] when `max_elems_to_parse` is exceeded.
pub fn extract<'a>(
  document: &'a dom_query::Document,
  base_url: Option<&Url>,
  options: &ReadabilityOptions,
) -> Result<ArticleFragment<'a>> {
  let body = Document::new(document).body().ok_or(Error::MissingBody)?;

  let mut context =
    Pipeline::with_default_stages(Context::new(document, base_url, options))
      .run()?;

  let is_empty = context
    .fragment()
    .and_then(|id| document.tree.get(&id))
    .is_none_or(|fragment| fragment.element_children().is_empty());

  if is_empty {
    debug!("no article content found, falling back to body");
    context.scores_mut().reset_candidates(body.id);
    context = Pipeline::with_selection_stages(context).run()?;
  }

  let fragment = context
    .fragment()
    .and_then(|id| document.tree.get(&id))
    .unwrap_or_else(|| Document::new(document).create_fragment());

  Ok(ArticleFragment::new(fragment))
}

/// Owns a parsed document and extracts its article at most once.
pub struct Readability {
  article: OnceCell<Article>,
  base_url: Option<Url>,
  html: dom_query::Document,
  options: ReadabilityOptions,
}

impl Readability {
  /// Parses `html`, rejecting input that can never yield an article.
  ///
  /// # Errors
  ///
  /// Returns [`Error::EmptyDocument`] for blank input,
  /// [`Error::InvalidBaseUrl`] when `base_url` does not parse and
  /// [`Error::MissingBody`] when the parsed tree has no `<body>`.
  pub fn new(
    html: &str,
    base_url: Option<&str>,
    options: ReadabilityOptions,
  ) -> Result<Self> {
    if html.trim().is_empty() {
      return Err(Error::EmptyDocument);
    }

    let base_url = base_url.map(Url::parse).transpose()?;

    let html = dom_query::Document::from(html);

    if Document::new(&html).body().is_none() {
      return Err(Error::MissingBody);
    }

    Ok(Self {
      article: OnceCell::new(),
      base_url,
      html,
      options,
    })
  }

  /// The extracted article, computed on first access and cached.
  ///
  /// # Errors
  ///
  /// Propagates extraction errors from [`extract`]. Failed attempts are not
  /// cached.
  pub fn article(&self) -> Result<&Article> {
    if let Some(article) = self.article.get() {
      return Ok(article);
    }

    let fragment = extract(&self.html, self.base_url.as_ref(), &self.options)?;

    Ok(self.article.get_or_init(|| Article::from(&fragment)))
  }

  /// Markup of the extracted article's children.
  ///
  /// # Errors
  ///
  /// See [`Readability::article`].
  pub fn content(&self) -> Result<&str> {
    Ok(&self.article()?.content)
  }
}
