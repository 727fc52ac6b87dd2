//! Heuristic main-article extraction.
//!
//! Every element in `<body>` is scored by how much it looks like readable
//! prose. The best scoring container, together with the siblings that look
//! like they belong to it, is moved into a detached fragment.

use {
  context::Context,
  document::Document,
  dom_query::{NodeId, NodeRef},
  pipeline::Pipeline,
  regex::Regex,
  scores::Scores,
  serde::{Deserialize, Serialize},
  stage::{
    CollectCandidatesStage, ElementLimitStage, FilterSiblingsStage,
    RemoveDisallowedNodesStage, SelectTopCandidateStage, Stage,
  },
  std::{cell::OnceCell, collections::HashMap, sync::LazyLock},
  tracing::{debug, trace},
  url::Url,
};

pub use crate::{
  article::Article,
  article_fragment::ArticleFragment,
  error::Error,
  options::{ReadabilityOptions, ReadabilityOptionsBuilder},
  readability::{Readability, extract},
};

mod article;
mod article_fragment;
mod context;
mod document;
mod error;
mod options;
mod pipeline;
mod re;
mod readability;
mod scores;
mod scoring;
mod stage;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
