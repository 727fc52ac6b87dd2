use {
  super::*,
  document::{has_tag, tag_name},
  re::{
    DIV_TO_P_ELEMENTS, POSSIBLE_CONTENT_CANDIDATE, UNLIKELY_CONTENT_CANDIDATES,
  },
};

/// Longest inner markup a `<div>` may hold and still be checked for block
/// children before being rewritten as a paragraph.
const MAX_DIV_MARKUP_LENGTH: usize = 500;

/// Headings linking out more than this are treated as navigation.
const MAX_HEADING_LINK_DENSITY: f64 = 0.3;

const HEADINGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Walks `<body>` once, pruning noise, normalizing loose text into
/// paragraphs and scoring every paragraph it meets.
pub struct CollectCandidatesStage;

impl Stage for CollectCandidatesStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let document = context.document();

    let body = document.body().ok_or(Error::MissingBody)?;

    let snapshot = body
      .descendants()
      .into_iter()
      .filter(NodeRef::is_element)
      .map(|node| node.id)
      .collect::<Vec<_>>();

    let mut scores = Scores::default();

    for id in snapshot {
      let Some(node) = document.node(id) else {
        continue;
      };

      if !Document::contains(body.id, &node) {
        continue;
      }

      Self::visit(context, document, &node, &mut scores);
    }

    for paragraph in document.marked_paragraphs() {
      scoring::score_paragraph(&paragraph, &mut scores);
    }

    debug!(candidates = scores.candidates().len(), "collected candidates");

    context.set_scores(scores);

    Ok(())
  }
}

impl CollectCandidatesStage {
  fn clean_heading(node: &NodeRef<'_>) {
    let weight = scoring::class_weight(node);
    let link_density = scoring::link_density(node);

    if weight < 0 || link_density > MAX_HEADING_LINK_DENSITY {
      trace!(weight, link_density, "removing heading");
      node.remove_from_parent();
    }
  }

  fn convert_div(document: Document<'_>, node: &NodeRef<'_>) {
    let markup = node.inner_html();

    if !DIV_TO_P_ELEMENTS.is_match(&markup)
      || markup.chars().count() > MAX_DIV_MARKUP_LENGTH
    {
      let paragraph = document.create_marked_paragraph();

      node.replace_with(&paragraph.id);

      for child in node.children() {
        paragraph.append_child(&child.id);
      }

      return;
    }

    for child in node.children() {
      if child.is_text() && child.text().trim().chars().count() > 1 {
        let paragraph = document.create_marked_paragraph();
        child.replace_with(&paragraph.id);
        paragraph.append_child(&child.id);
      }
    }
  }

  fn is_empty_div(node: &NodeRef<'_>) -> bool {
    node.element_children().is_empty() && node.text().trim().is_empty()
  }

  fn is_unlikely_candidate(node: &NodeRef<'_>) -> bool {
    let hint = format!(
      "{}{}",
      node.attr("class").as_deref().unwrap_or_default(),
      node.attr("id").as_deref().unwrap_or_default()
    );

    UNLIKELY_CONTENT_CANDIDATES.is_match(&hint)
      && !POSSIBLE_CONTENT_CANDIDATE.is_match(&hint)
  }

  fn resolve_uri(base_url: &Url, value: &str) -> String {
    match Url::parse(value) {
      Ok(url) => url.to_string(),
      Err(_) => base_url
        .join(value)
        .map_or_else(|_| value.to_string(), |url| url.to_string()),
    }
  }

  fn resolve_urls(base_url: &Url, node: &NodeRef<'_>) {
    let attribute = match tag_name(node).as_str() {
      "img" => "src",
      "a" => "href",
      _ => return,
    };

    if let Some(value) = node.attr(attribute) {
      node.set_attr(attribute, &Self::resolve_uri(base_url, &value));
    }
  }

  fn visit(
    context: &Context<'_>,
    document: Document<'_>,
    node: &NodeRef<'_>,
    scores: &mut Scores,
  ) {
    if Self::is_unlikely_candidate(node) {
      trace!(tag = %tag_name(node), "removing unlikely candidate");
      node.remove_from_parent();
      return;
    }

    let is_div = has_tag(node, &["div"]);

    if is_div && Self::is_empty_div(node) {
      node.remove_from_parent();
      return;
    }

    node.remove_attr("style");

    if is_div && context.options().consider_divs {
      Self::convert_div(document, node);
      return;
    }

    if has_tag(node, &["p", "pre"]) {
      scoring::score_paragraph(node, scores);
      return;
    }

    if let Some(base_url) = context.base_url() {
      Self::resolve_urls(base_url, node);
    }

    if has_tag(node, HEADINGS) {
      Self::clean_heading(node);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn collect<'a>(
    document: &'a dom_query::Document,
    base_url: Option<&'a Url>,
    options: &'a ReadabilityOptions,
  ) -> Context<'a> {
    let mut context = Context::new(document, base_url, options);
    CollectCandidatesStage.run(&mut context).unwrap();
    context
  }

  fn first<'a>(
    document: &'a dom_query::Document,
    selector: &str,
  ) -> NodeRef<'a> {
    document.select(selector).nodes().first().cloned().unwrap()
  }

  #[test]
  fn accumulates_contributions_from_every_paragraph() {
    let document = dom_query::Document::from(
      r#"
      <html><body>
        <section>
          <div>
            <p>First paragraph has enough text, and one comma.</p>
            <p>Second paragraph is also long enough; it has punctuation.</p>
          </div>
        </section>
      </body></html>
      "#,
    );

    let options = ReadabilityOptions::default();
    let context = collect(&document, None, &options);

    let div = first(&document, "div");
    let section = first(&document, "section");

    assert_eq!(context.scores().get(div.id), Some(5.0 + 3.0 + 3.0));
    assert_eq!(context.scores().get(section.id), Some(-1.0 + 1.5 + 1.5));
    assert_eq!(context.scores().candidates(), &[div.id, section.id]);
  }

  #[test]
  fn removes_unlikely_candidates_before_scoring() {
    let document = dom_query::Document::from(
      r#"
      <html><body>
        <div class="sidebar"><p>Sidebar text that is long enough to be scored, surely.</p></div>
        <div class="main-sidebar"><p>Kept because the main keyword rescues it, see.</p></div>
      </body></html>
      "#,
    );

    let options = ReadabilityOptions::default();
    let context = collect(&document, None, &options);

    assert_eq!(document.select(".sidebar").length(), 0);
    assert_eq!(document.select(".main-sidebar").length(), 1);
    assert_eq!(context.scores().candidates().len(), 2);
  }

  #[test]
  fn removes_empty_divs_and_styles() {
    let document = dom_query::Document::from(
      r#"<html><body><div id="empty">  </div><span style="color: red">Styled</span></body></html>"#,
    );

    let options = ReadabilityOptions::default();
    collect(&document, None, &options);

    assert_eq!(document.select("#empty").length(), 0);
    assert_eq!(document.select("span").length(), 1);
    assert_eq!(document.select("[style]").length(), 0);
  }

  #[test]
  fn converts_inline_only_divs_into_scored_paragraphs() {
    let document = dom_query::Document::from(
      r#"
      <html><body>
        <div id="story">
          <div>Loose text inside a div, with <em>inline</em> markup, and commas.</div>
          <div>Another loose block of text; long enough to be scored too.</div>
        </div>
      </body></html>
      "#,
    );

    let options = ReadabilityOptions::default();
    let context = collect(&document, None, &options);

    let story = first(&document, "#story");

    assert_eq!(document.select("p.node-read-div2p").length(), 2);
    assert_eq!(document.select("p.node-read-div2p em").length(), 1);
    assert_eq!(document.select("#story > div").length(), 0);
    assert_eq!(context.scores().get(story.id), Some(5.0 + 4.0 + 3.0));
  }

  #[test]
  fn wraps_loose_text_next_to_block_children() {
    let document = dom_query::Document::from(
      r#"<html><body><div id="mixed">Loose text that sits beside a paragraph, and keeps going.<p>Paragraph.</p> x </div></body></html>"#,
    );

    let options = ReadabilityOptions::default();
    let context = collect(&document, None, &options);

    let marked = first(&document, "p.node-read-div2p");
    let mixed = first(&document, "#mixed");

    assert_eq!(document.select("p.node-read-div2p").length(), 1);
    assert_eq!(
      &*marked.text(),
      "Loose text that sits beside a paragraph, and keeps going."
    );
    assert_eq!(marked.parent().map(|parent| parent.id), Some(mixed.id));
    assert_eq!(context.scores().get(mixed.id), Some(5.0 + 3.0));
  }

  #[test]
  fn cleans_inline_content_of_converted_divs() {
    let document = dom_query::Document::from(
      r#"
      <html><body>
        <div id="story">
          <div>Loose text <span class="advertisement">BUY NOW</span> with an <span style="color: red">inline</span> aside.</div>
        </div>
      </body></html>
      "#,
    );

    let options = ReadabilityOptions::default();
    collect(&document, None, &options);

    let marked = first(&document, "p.node-read-div2p");

    assert_eq!(document.select(".advertisement").length(), 0);
    assert_eq!(document.select("[style]").length(), 0);
    assert!(!marked.text().contains("BUY NOW"));
    assert!(marked.text().contains("inline"));
  }

  #[test]
  fn cleans_block_content_of_oversized_divs() {
    let filler = "Plenty of filler text. ".repeat(25);

    let document = dom_query::Document::from(format!(
      r#"
      <html><body>
        <div id="long">
          <h2 class="tags">Tagged</h2>
          <p class="advertisement">Sponsored copy that should vanish.</p>
          <p>{filler}</p>
          <img src="images/a.png">
          <a href="rel.html">Relative</a>
        </div>
      </body></html>
      "#
    ));

    let base_url = Url::parse("http://fakehost/test/page.html").unwrap();
    let options = ReadabilityOptions::default();
    collect(&document, Some(&base_url), &options);

    assert_eq!(document.select("#long").length(), 0);
    assert_eq!(document.select("p.node-read-div2p").length(), 1);
    assert_eq!(document.select(".advertisement").length(), 0);
    assert_eq!(document.select("h2").length(), 0);
    assert_eq!(
      first(&document, "img").attr("src").as_deref(),
      Some("http://fakehost/test/images/a.png")
    );
    assert_eq!(
      first(&document, "a").attr("href").as_deref(),
      Some("http://fakehost/test/rel.html")
    );
  }

  #[test]
  fn scores_preformatted_blocks_like_paragraphs() {
    let document = dom_query::Document::from(
      r#"<html><body><div id="code"><pre>Preformatted text that is long enough to count, really.</pre></div></body></html>"#,
    );

    let options = ReadabilityOptions::default();
    let context = collect(&document, None, &options);

    let code = first(&document, "#code");

    assert_eq!(document.select("p.node-read-div2p").length(), 0);
    assert_eq!(context.scores().get(code.id), Some(5.0 + 3.0));
  }

  #[test]
  fn leaves_divs_alone_when_disabled() {
    let document = dom_query::Document::from(
      "<html><body><div id=\"plain\">Loose text inside a div, long enough to score.</div></body></html>",
    );

    let options = ReadabilityOptions::builder().consider_divs(false).build();
    let context = collect(&document, None, &options);

    assert_eq!(document.select("#plain").length(), 1);
    assert_eq!(document.select("p").length(), 0);
    assert!(context.scores().is_empty());
  }

  #[test]
  fn resolves_relative_urls_against_the_base() {
    let document = dom_query::Document::from(
      r#"<html><body><a href="../about">About</a><img src="/images/a.png"><a href="https://other.org/">Other</a></body></html>"#,
    );

    let base_url = Url::parse("http://fakehost/test/page.html").unwrap();
    let options = ReadabilityOptions::default();
    collect(&document, Some(&base_url), &options);

    assert_eq!(
      document.select("a").nodes()[0].attr("href").as_deref(),
      Some("http://fakehost/about")
    );
    assert_eq!(
      first(&document, "img").attr("src").as_deref(),
      Some("http://fakehost/images/a.png")
    );
    assert_eq!(
      document.select("a").nodes()[1].attr("href").as_deref(),
      Some("https://other.org/")
    );
  }

  #[test]
  fn removes_negative_and_link_heavy_headings() {
    let document = dom_query::Document::from(
      r#"
      <html><body>
        <h2 class="tags">Tagged</h2>
        <h3><a href="/elsewhere">Mostly a link</a>!</h3>
        <h1>Real headline</h1>
      </body></html>
      "#,
    );

    let options = ReadabilityOptions::default();
    collect(&document, None, &options);

    assert_eq!(document.select("h2").length(), 0);
    assert_eq!(document.select("h3").length(), 0);
    assert_eq!(document.select("h1").length(), 1);
  }

  #[test]
  fn fails_without_a_body() {
    let document = dom_query::Document::from(
      r#"<html><frameset><frame src="a.html"></frameset></html>"#,
    );

    let options = ReadabilityOptions::default();
    let mut context = Context::new(&document, None, &options);

    assert!(matches!(
      CollectCandidatesStage.run(&mut context),
      Err(Error::MissingBody)
    ));
  }
}
