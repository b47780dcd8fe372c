use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
  pub(crate) hits: Vec<SearchHit>,
  #[serde(rename = "hitsPerPage", default)]
  pub(crate) hits_per_page: usize,
  #[serde(rename = "nbHits", default)]
  pub(crate) nb_hits: usize,
  #[serde(rename = "nbPages", default)]
  pub(crate) nb_pages: usize,
  #[serde(default)]
  pub(crate) page: usize,
}
