use nb_core::types::NO_TITLE;
use nb_core::{ArticleRecord, Error, Result};
use scraper::{ElementRef, Html};
use tracing::debug;

use crate::rules::utils;

/// Elements whose text never belongs to the article body.
const BOILERPLATE: &str = "script, style, nav, footer, header";

/// Content containers, most specific first.
const CONTAINERS: [&str; 3] = ["article", "main", "div.content, div.article, div.story"];

const DATE: &str = "time.date, time.time, time.published, \
     span.date, span.time, span.published, \
     div.date, div.time, div.published";

/// Builds an [`ArticleRecord`] from the markup of an article page.
///
/// Fails with [`Error::ExtractionEmpty`] when no paragraph text is found,
/// so callers never see a record with empty content.
pub fn extract_article(url: &str, html: &str) -> Result<ArticleRecord> {
    let mut document = Html::parse_document(html);
    strip_boilerplate(&mut document)?;

    let title = first_text(&document, "h1")?
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| NO_TITLE.to_string());

    let content = extract_content(&document)?;
    if content.is_empty() {
        return Err(Error::ExtractionEmpty(url.to_string()));
    }

    let date = first_text(&document, DATE)?
        .filter(|date| !date.is_empty())
        .unwrap_or_else(ArticleRecord::timestamp_now);

    Ok(ArticleRecord {
        title,
        content,
        url: url.to_string(),
        date,
    })
}

fn strip_boilerplate(document: &mut Html) -> Result<()> {
    let selector = utils::selector(BOILERPLATE)?;
    let ids: Vec<_> = document
        .root_element()
        .select(&selector)
        .map(|el| el.id())
        .collect();

    debug!("🧹 Removing {} boilerplate elements", ids.len());
    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
    Ok(())
}

fn first_text(document: &Html, css: &str) -> Result<Option<String>> {
    let selector = utils::selector(css)?;
    Ok(document
        .root_element()
        .select(&selector)
        .next()
        .map(utils::text_of))
}

fn find_container(document: &Html) -> Result<Option<ElementRef<'_>>> {
    for css in CONTAINERS {
        let selector = utils::selector(css)?;
        if let Some(container) = document.root_element().select(&selector).next() {
            return Ok(Some(container));
        }
    }
    Ok(None)
}

fn extract_content(document: &Html) -> Result<String> {
    let paragraph = utils::selector("p")?;
    let scope = find_container(document)?.unwrap_or_else(|| document.root_element());

    Ok(scope
        .select(&paragraph)
        .map(utils::text_of)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" "))
}
