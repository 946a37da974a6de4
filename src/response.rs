//! HAL response envelopes: items carry `_links`, listings carry `_embedded`, `_links` and `page`.

use crate::extractors::BaseUrl;
use crate::model::Resource;
use crate::service::{Page, PageRequest};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
}

/// Link relations in insertion order (`self` first).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Links(Vec<(String, Link)>);

impl Links {
    pub fn new() -> Self {
        Links(Vec::new())
    }

    pub fn with(mut self, rel: impl Into<String>, href: impl Into<String>) -> Self {
        self.0.push((rel.into(), Link { href: href.into() }));
        self
    }

    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.0.iter().find(|(r, _)| r == rel).map(|(_, l)| l)
    }
}

impl Serialize for Links {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (rel, link) in &self.0 {
            map.serialize_entry(rel, link)?;
        }
        map.end()
    }
}

#[derive(Debug, Serialize)]
pub struct EntityModel<T> {
    #[serde(flatten)]
    pub content: T,
    #[serde(rename = "_links")]
    pub links: Links,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u32,
}

#[derive(Debug, Serialize)]
pub struct CollectionModel<T> {
    #[serde(rename = "_embedded", skip_serializing_if = "Option::is_none")]
    pub embedded: Option<BTreeMap<String, Vec<EntityModel<T>>>>,
    #[serde(rename = "_links")]
    pub links: Links,
    pub page: PageMetadata,
}

pub fn item_href<R: Resource>(base: &BaseUrl, id: i64) -> String {
    format!("{}/{}/{}", base.as_str(), R::PATH, id)
}

pub fn collection_href<R: Resource>(base: &BaseUrl, request: PageRequest) -> String {
    format!(
        "{}/{}?page={}&size={}",
        base.as_str(),
        R::PATH,
        request.page,
        request.size
    )
}

/// Wrap one row with its `self` link and a link to the given page of its collection.
pub fn entity_model<R: Resource>(row: R, base: &BaseUrl, listing: PageRequest) -> EntityModel<R> {
    let links = Links::new()
        .with("self", item_href::<R>(base, row.id()))
        .with(R::PATH, collection_href::<R>(base, listing));
    EntityModel { content: row, links }
}

pub fn collection_model<R: Resource>(page: Page<R>, base: &BaseUrl) -> CollectionModel<R> {
    let request = page.request;
    let metadata = PageMetadata {
        size: request.size,
        total_elements: page.total_elements,
        total_pages: page.total_pages(),
        number: request.page,
    };
    let items: Vec<EntityModel<R>> = page
        .items
        .into_iter()
        .map(|row| entity_model(row, base, request))
        .collect();
    let embedded = if items.is_empty() {
        None
    } else {
        Some(BTreeMap::from([(R::collection_rel(), items)]))
    };
    CollectionModel {
        embedded,
        links: Links::new().with("self", collection_href::<R>(base, request)),
        page: metadata,
    }
}
