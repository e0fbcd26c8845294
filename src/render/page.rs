use tracing::trace;

use crate::render::resources::{ResourceKind, ResourceRequest};
use crate::render::tag::Tag;

/// Render sink for one server-side page pass.
///
/// Widgets append body markup and script blocks and register the external
/// resources they depend on. The page itself performs no I/O; embedding the
/// collected pieces into a response is the host framework's job.
#[derive(Debug, Default)]
pub struct Page {
    body: String,
    scripts: Vec<String>,
    resources: Vec<ResourceRequest>,
    next_id: u32,
}

impl Page {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes a tag into the body.
    pub fn append_tag(&mut self, tag: &Tag) {
        tag.write_into(&mut self.body);
        self.body.push('\n');
    }

    /// Appends pre-rendered markup to the body verbatim.
    pub fn append_raw(&mut self, markup: &str) {
        self.body.push_str(markup);
        self.body.push('\n');
    }

    /// Queues an inline script block for the end of the page.
    pub fn append_script(&mut self, script: impl Into<String>) {
        self.scripts.push(script.into());
    }

    /// Registers an external asset request. Requests are collected in order;
    /// deduplication by group/bucket happens on the host side.
    pub fn add_resource(
        &mut self,
        url: impl Into<String>,
        kind: ResourceKind,
        group: impl Into<String>,
        bucket: impl Into<String>,
    ) {
        let request = ResourceRequest::new(url, kind, group, bucket);
        trace!(url = %request.url, group = %request.group, "resource requested");
        self.resources.push(request);
    }

    /// Hands out a page-unique element id with the given prefix.
    pub fn claim_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    #[must_use]
    pub fn resources(&self) -> &[ResourceRequest] {
        &self.resources
    }
}
