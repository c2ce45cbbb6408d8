//! Link resolution.
//!
//! A run's link descriptor can point at a heading in the same document, a
//! named bookmark, another document of the same site, or an arbitrary
//! external URL. Resolution decides the href to emit and whether the link
//! renders as an external tab-opening link or as an in-site modal link.

use super::anchors::{slugify, HeadingAnchorIndex};
use crate::model::Link;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Maps source-system document ids to internal routes.
///
/// Supplied by configuration. A URL that targets a mapped document renders
/// as a same-site modal link instead of an external one.
pub type RouteMap = HashMap<String, String>;

/// Matches a Google Docs document URL and captures the document id.
///
/// The regex engine matches in linear time, so an attacker-controlled URL
/// cannot stall the conversion however pathological its shape.
static DOC_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://docs\.google\.com/document/d/([A-Za-z0-9_-]+)")
        .expect("document URL pattern compiles")
});

/// A resolved link: the href to emit plus its presentation class.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLink {
    pub href: String,
    /// Rendered with `target="_blank" rel="noopener noreferrer"`.
    pub external: bool,
    /// Rendered with `data-modal="true"` for client-side overlay
    /// presentation.
    pub modal: bool,
}

impl ResolvedLink {
    fn internal(href: String) -> Self {
        ResolvedLink {
            href,
            external: false,
            modal: false,
        }
    }
}

/// Resolves link descriptors against the heading index and the route map.
pub struct LinkResolver<'a> {
    anchors: &'a HeadingAnchorIndex,
    routes: &'a RouteMap,
}

impl<'a> LinkResolver<'a> {
    pub fn new(anchors: &'a HeadingAnchorIndex, routes: &'a RouteMap) -> Self {
        LinkResolver { anchors, routes }
    }

    /// Decides the href for a link descriptor and the run's visible text.
    ///
    /// Heading links are matched by the trimmed *visible text* of the run,
    /// not by the heading identifier carried in the descriptor; a text
    /// that matches no indexed heading falls back to a slug of itself.
    pub fn resolve(&self, link: &Link, link_text: &str) -> ResolvedLink {
        if let Some(heading_id) = link.heading_id.as_deref() {
            if !heading_id.is_empty() {
                let text = link_text.trim();
                let slug = match self.anchors.get(text) {
                    Some(slug) => slug.to_string(),
                    None => slugify(text),
                };
                return ResolvedLink::internal(format!("#{slug}"));
            }
        }

        if let Some(bookmark_id) = link.bookmark_id.as_deref() {
            if !bookmark_id.is_empty() {
                return ResolvedLink::internal(format!("#{bookmark_id}"));
            }
        }

        if let Some(url) = link.url.as_deref() {
            if !url.is_empty() {
                if let Some(route) = self.document_route(url) {
                    return ResolvedLink {
                        href: route.to_string(),
                        external: false,
                        modal: true,
                    };
                }
                return ResolvedLink {
                    href: url.to_string(),
                    external: true,
                    modal: false,
                };
            }
        }

        ResolvedLink::internal("#".to_string())
    }

    /// Internal route for a URL that targets a mapped document.
    fn document_route(&self, url: &str) -> Option<&str> {
        let captures = DOC_URL.captures(url)?;
        let document_id = captures.get(1)?.as_str();
        self.routes.get(document_id).map(String::as_str)
    }
}
