//! RSS 2.0 output for the generator.
//!
//! Builds an [`rss::Channel`] from [`ChannelMeta`] and the scraped
//! [`FeedItem`]s and renders it as a pretty-printed UTF-8 document.  Item
//! descriptions end up in CDATA sections; guids are SHA-256 digests of the
//! item link, so regenerating the feed keeps identifiers stable without any
//! stored state.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rss::extension::dublincore::{self, DublinCoreExtensionBuilder};
use rss::extension::{ExtensionBuilder, ExtensionMap};
use rss::{Channel, ChannelBuilder, GuidBuilder, ImageBuilder, Item, ItemBuilder};
use sha2::{Digest, Sha256};
use tracing::{info, instrument};

use crate::error::FeedResult;
use crate::source::FeedItem;

pub const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";
pub const MEDIA_NAMESPACE: &str = "http://search.yahoo.com/mrss/";

/// Channel-level metadata of the generated feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMeta {
    pub title: String,
    pub description: String,
    pub link: String,
    /// Channel logo; no `<image>` is written when `None`.
    pub image_url: Option<String>,
    pub generator: String,
    pub language: String,
    /// Public URL of the feed itself, written as `atom:link rel="self"`.
    pub self_url: Option<String>,
}

/// Lowercase hex SHA-256 of `link`.
pub fn stable_guid(link: &str) -> String {
    hex::encode(Sha256::digest(link.as_bytes()))
}

/// Format a timestamp for `pubDate` / `lastBuildDate`.
pub fn rfc822(dt: &DateTime<Utc>) -> String {
    dt.to_rfc2822()
}

/// Render the feed document.
///
/// Items without a timestamp get `built_at` as their `pubDate`; items
/// without a guid get one derived from their link.
#[instrument(level = "info", skip_all, fields(items = items.len()))]
pub fn serialize(meta: &ChannelMeta, items: &[FeedItem], built_at: DateTime<Utc>) -> FeedResult<Vec<u8>> {
    let channel = build_channel(meta, items, built_at);
    let bytes = channel.pretty_write_to(Vec::new(), b' ', 2)?;
    Ok(collapse_self_link(bytes))
}

/// Write a rendered feed to `path`, replacing any previous file.
///
/// The bytes go to a sibling `*.tmp` file first and are renamed into place,
/// so a failed write never leaves a truncated feed behind.
pub fn write_feed(path: &Path, bytes: &[u8]) -> FeedResult<()> {
    let tmp = sibling_tmp(path);
    if let Err(e) = std::fs::write(&tmp, bytes).and_then(|()| std::fs::rename(&tmp, path)) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }
    info!(path = %path.display(), bytes = bytes.len(), "Wrote feed");
    Ok(())
}

fn sibling_tmp(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Turn `<atom:link ..>` followed by a whitespace-only body and its closing
/// tag into a self-closing element.  The pretty printer indents extension
/// elements even when they have no content.
fn collapse_self_link(mut xml: Vec<u8>) -> Vec<u8> {
    const OPEN: &[u8] = b"<atom:link ";
    const CLOSE: &[u8] = b"</atom:link>";

    let Some(start) = find(&xml, OPEN, 0) else {
        return xml;
    };
    let Some(gt) = find(&xml, b">", start) else {
        return xml;
    };
    let body_end = xml[gt + 1..]
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .map(|p| gt + 1 + p);

    if let Some(end) = body_end.filter(|&end| xml[end..].starts_with(CLOSE)) {
        xml.splice(gt..end + CLOSE.len(), b"/>".iter().copied());
    }
    xml
}

fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}

fn build_channel(meta: &ChannelMeta, items: &[FeedItem], built_at: DateTime<Utc>) -> Channel {
    let namespaces: BTreeMap<String, String> = [
        ("atom", ATOM_NAMESPACE),
        ("dc", dublincore::NAMESPACE),
        ("media", MEDIA_NAMESPACE),
    ]
    .into_iter()
    .map(|(prefix, url)| (prefix.to_string(), url.to_string()))
    .collect();

    let image = meta.image_url.as_ref().map(|url| {
        ImageBuilder::default()
            .url(url.as_str())
            .title(meta.title.as_str())
            .link(meta.link.as_str())
            .build()
    });

    ChannelBuilder::default()
        .namespaces(namespaces)
        .title(meta.title.as_str())
        .description(meta.description.as_str())
        .link(meta.link.as_str())
        .image(image)
        .generator(Some(meta.generator.clone()))
        .last_build_date(Some(rfc822(&built_at)))
        .language(Some(meta.language.clone()))
        .extensions(self_link(meta.self_url.as_deref()))
        .items(items.iter().map(|it| build_item(it, built_at)).collect::<Vec<_>>())
        .build()
}

fn build_item(item: &FeedItem, built_at: DateTime<Utc>) -> Item {
    let guid = GuidBuilder::default()
        .value(item.guid.clone().unwrap_or_else(|| stable_guid(&item.link)))
        .permalink(false)
        .build();

    // Left empty on purpose so readers see the element.
    let creator = DublinCoreExtensionBuilder::default()
        .creators(vec![String::new()])
        .build();

    ItemBuilder::default()
        .title(Some(item.title.clone()))
        .description(Some(item.description.clone()))
        .link(Some(item.link.clone()))
        .guid(Some(guid))
        .pub_date(Some(rfc822(&item.published.unwrap_or(built_at))))
        .dublin_core_ext(Some(creator))
        .build()
}

/// `<atom:link href=".." rel="self" type="application/rss+xml"/>`, if any.
fn self_link(self_url: Option<&str>) -> ExtensionMap {
    let mut map = ExtensionMap::new();
    let Some(href) = self_url.filter(|u| !u.is_empty()) else {
        return map;
    };

    let attrs: BTreeMap<String, String> = [
        ("href", href),
        ("rel", "self"),
        ("type", "application/rss+xml"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let link = ExtensionBuilder::default().name("atom:link").attrs(attrs).build();
    map.entry("atom".to_string())
        .or_default()
        .insert("link".to_string(), vec![link]);
    map
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
