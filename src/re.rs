use super::*;

macro_rules! re {
  ($($pat:expr),+ $(,)?) => {
    LazyLock::new(|| Regex::new(concat!($($pat),+)).unwrap())
  };
}

/// Tags whose presence in a `<div>`'s markup keeps it from becoming a `<p>`.
pub(crate) static DIV_TO_P_ELEMENTS: LazyLock<Regex> =
  re!(r"(?i)<(?:a|blockquote|dl|div|img|ol|p|pre|table|ul)");

pub(crate) static ITEM_PROP_ARTICLE: LazyLock<Regex> =
  re!(r"blogPost|articleBody");

pub(crate) static NEGATIVE_CONTENT_HINTS: LazyLock<Regex> = re!(
  r"(?i)combx|comment|captcha|contact|feed|foot|footer|footnote|link|media|",
  r"meta|promo|related|scroll|shoutbox|sidebar|share|sponsor|utility|tags|",
  r"widget|tip|dialog"
);

pub(crate) static POSITIVE_CONTENT_HINTS: LazyLock<Regex> = re!(
  r"(?i)article|body|content|entry|hentry|page|pagination|post|text"
);

pub(crate) static POSSIBLE_CONTENT_CANDIDATE: LazyLock<Regex> =
  re!(r"(?i)and|article|body|column|main");

/// Sentence terminators and commas, ASCII and CJK.
pub(crate) static SENTENCE_PUNCTUATION: LazyLock<Regex> =
  re!(r"[,，.。;；?？、]");

pub(crate) static UNLIKELY_CONTENT_CANDIDATES: LazyLock<Regex> = re!(
  r"(?i)combx|pager|comment|disqus|foot|header|menu|meta|nav|rss|shoutbox|",
  r"sidebar|sponsor|share|bookmark|social|advert|leaderboard|",
  r"instapaper_ignore|entry-unrelated"
);

pub(crate) static WHITESPACE_RUNS: LazyLock<Regex> = re!(r"\s{2,}");
