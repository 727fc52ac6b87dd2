use super::*;

/// The extracted article content produced by the readability parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
  pub content: String,
  pub length: usize,
  pub text_content: String,
}

impl Article {
  pub fn new(content: String, text_content: String) -> Self {
    let length = text_content.chars().count();

    Self {
      content,
      length,
      text_content,
    }
  }
}

impl From<&ArticleFragment<'_>> for Article {
  fn from(fragment: &ArticleFragment<'_>) -> Self {
    Self::new(fragment.inner_html(), fragment.text())
  }
}
