use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::models::Posting;

static LISTING_ITEM: Lazy<Selector> = Lazy::new(|| selector("li"));
static BASE_CARD: Lazy<Selector> = Lazy::new(|| selector("div.base-card"));
static TITLE: Lazy<Selector> = Lazy::new(|| selector("h2.top-card-layout__title"));
static COMPANY: Lazy<Selector> = Lazy::new(|| selector("a.topcard__org-name-link"));
static DESCRIPTION: Lazy<Selector> = Lazy::new(|| selector("div.description__text"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static CSS selector is valid")
}

pub fn parse_listing(html: &str) -> Vec<String> {
    let document = Html::parse_fragment(html);
    let mut ids = Vec::new();

    for item in document.select(&LISTING_ITEM) {
        let Some(urn) = item
            .select(&BASE_CARD)
            .next()
            .and_then(|card| card.value().attr("data-entity-urn"))
        else {
            continue;
        };

        match posting_id_from_urn(urn) {
            Some(id) => ids.push(id.to_string()),
            None => tracing::warn!("Ignoring malformed posting urn: {}", urn),
        }
    }

    ids
}

pub fn parse_posting(id: &str, html: &str) -> Posting {
    let document = Html::parse_document(html);

    Posting {
        id: id.to_string(),
        title: first_text(&document, &TITLE),
        company: first_text(&document, &COMPANY),
        summary: first_text(&document, &DESCRIPTION),
    }
}

fn posting_id_from_urn(urn: &str) -> Option<&str> {
    urn.split(':').nth(3).map(str::trim).filter(|id| !id.is_empty())
}

fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document.select(selector).next().map(element_text)
}

fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
