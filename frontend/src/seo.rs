//! Document head metadata: title, description, social cards and structured data.

use log::warn;
use serde::Serialize;
use web_sys::Document;

use crate::config::{
    AUTHOR, INSTAGRAM_URL, JOB_TITLE, LINKEDIN_URL, SHORT_DESCRIPTION, SITE_DESCRIPTION, SITE_TITLE,
    SITE_URL,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetaKey {
    Name(&'static str),
    Property(&'static str),
}

impl MetaKey {
    fn attribute(self) -> (&'static str, &'static str) {
        match self {
            MetaKey::Name(name) => ("name", name),
            MetaKey::Property(property) => ("property", property),
        }
    }
}

pub fn meta_tags() -> Vec<(MetaKey, &'static str)> {
    vec![
        (MetaKey::Name("description"), SITE_DESCRIPTION),
        (MetaKey::Name("robots"), "index, follow"),
        (MetaKey::Property("og:title"), AUTHOR),
        (MetaKey::Property("og:description"), SHORT_DESCRIPTION),
        (MetaKey::Property("og:url"), SITE_URL),
        (MetaKey::Property("og:site_name"), AUTHOR),
        (MetaKey::Property("og:locale"), "en_US"),
        (MetaKey::Property("og:type"), "website"),
        (MetaKey::Name("twitter:card"), "summary_large_image"),
        (MetaKey::Name("twitter:title"), AUTHOR),
        (MetaKey::Name("twitter:description"), SHORT_DESCRIPTION),
    ]
}

/// schema.org `Person` entry, embedded as JSON-LD.
#[derive(Serialize)]
pub struct PersonSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    #[serde(rename = "jobTitle")]
    pub job_title: &'static str,
    pub description: &'static str,
    #[serde(rename = "sameAs")]
    pub same_as: Vec<&'static str>,
}

pub fn person_schema() -> PersonSchema {
    PersonSchema {
        context: "https://schema.org",
        kind: "Person",
        name: AUTHOR,
        url: SITE_URL,
        job_title: JOB_TITLE,
        description: SHORT_DESCRIPTION,
        same_as: vec![INSTAGRAM_URL, LINKEDIN_URL],
    }
}

/// Writes title, meta tags, canonical link and JSON-LD into `<head>`.
///
/// Existing tags are updated in place, so calling this twice does not duplicate them.
pub fn install_head_metadata() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    document.set_title(SITE_TITLE);

    for (key, content) in meta_tags() {
        let (attribute, value) = key.attribute();
        upsert(&document, "meta", &format!("meta[{attribute}=\"{value}\"]"), &[(attribute, value), ("content", content)]);
    }
    upsert(&document, "link", "link[rel=\"canonical\"]", &[("rel", "canonical"), ("href", SITE_URL)]);

    match serde_json::to_string(&person_schema()) {
        Ok(json) => {
            if let Some(script) = upsert(
                &document,
                "script",
                "script#person-schema",
                &[("id", "person-schema"), ("type", "application/ld+json")],
            ) {
                script.set_text_content(Some(&json));
            }
        }
        Err(err) => warn!("Failed to serialize structured data: {}", err),
    }
}

fn upsert(document: &Document, tag: &str, selector: &str, attributes: &[(&str, &str)]) -> Option<web_sys::Element> {
    let element = match document.query_selector(selector).ok().flatten() {
        Some(existing) => existing,
        None => {
            let created = document.create_element(tag).ok()?;
            document.head()?.append_child(&created).ok()?;
            created
        }
    };
    for (name, value) in attributes {
        if let Err(err) = element.set_attribute(name, value) {
            warn!("Failed to set {} on <{}>: {:?}", name, tag, err);
        }
    }
    Some(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::collections::HashSet;

    #[test]
    fn person_schema_uses_schema_org_keys() {
        let json: Value = serde_json::to_value(person_schema()).unwrap();
        assert_eq!(json["@context"], "https://schema.org");
        assert_eq!(json["@type"], "Person");
        assert_eq!(json["name"], AUTHOR);
        assert_eq!(json["jobTitle"], "Growth Strategist");
        assert_eq!(json["sameAs"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn meta_keys_are_unique() {
        let tags = meta_tags();
        let keys: HashSet<_> = tags.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys.len(), tags.len());
    }

    #[test]
    fn open_graph_points_at_site() {
        let tags = meta_tags();
        let url = tags
            .iter()
            .find(|(key, _)| *key == MetaKey::Property("og:url"))
            .map(|(_, content)| *content);
        assert_eq!(url, Some(SITE_URL));
    }
}
