//! アダプター（ports::outbound の実装）

pub(crate) mod arxiv_feed;
pub(crate) mod atom;
pub(crate) mod env;
pub(crate) mod search_config_loader;
pub(crate) mod stub_feed;

pub(crate) use arxiv_feed::ArxivFeed;
pub(crate) use env::resolve_project_root;
pub(crate) use search_config_loader::StdResolveSearchConfig;
#[cfg(test)]
pub(crate) use stub_feed::StubPaperFeed;
