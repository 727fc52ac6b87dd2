use super::*;

#[derive(Parser)]
#[command(name = "readability-extract")]
#[command(about = "Extract the main article from an HTML file", long_about = None)]
pub(crate) struct Arguments {
  #[arg(long, help = "Resolve relative links and images against this URL")]
  base_url: Option<String>,
  #[arg(value_name = "FILE", help = "Path to the HTML file to parse")]
  input: PathBuf,
  #[arg(long, help = "Print the article as JSON")]
  json: bool,
  #[arg(long, help = "Abort when the document holds more elements than this")]
  max_elements: Option<usize>,
  #[arg(long, help = "Do not turn loose <div> content into paragraphs")]
  no_divs: bool,
  #[arg(
    long = "remove",
    value_name = "TAG",
    help = "Tag to delete before scoring; replaces the default list"
  )]
  remove: Vec<String>,
}

impl Arguments {
  fn options(&self) -> ReadabilityOptions {
    let mut builder = ReadabilityOptions::builder()
      .consider_divs(!self.no_divs)
      .max_elems_to_parse(self.max_elements);

    if !self.remove.is_empty() {
      builder = builder.nodes_to_remove(self.remove.iter().cloned());
    }

    builder.build()
  }

  pub(crate) fn run(self) -> Result {
    let html = fs::read_to_string(&self.input).with_context(|| {
      format!("failed to read file from `{}`", self.input.display())
    })?;

    let readability =
      Readability::new(&html, self.base_url.as_deref(), self.options())
        .context("failed to create readability parser")?;

    let article = readability
      .article()
      .context("failed to extract article content")?;

    if self.json {
      println!("{}", serde_json::to_string_pretty(article)?);
    } else {
      println!("{}", article.content);
    }

    Ok(())
  }
}
