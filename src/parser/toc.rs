use std::sync::LazyLock;

use anyhow::{bail, Result};
use scraper::{Html, Selector};

static TOC: LazyLock<Selector> = LazyLock::new(|| Selector::parse("#toc").unwrap());
static TOC_LINKS: LazyLock<Selector> = LazyLock::new(|| Selector::parse("#toc a").unwrap());

/// Texte brut de chaque ancre de la table des matières, dans l'ordre du
/// document. L'absence de l'élément `#toc` est une précondition fatale.
pub fn toc_tokens(doc: &Html) -> Result<Vec<String>> {
    if doc.select(&TOC).next().is_none() {
        bail!("élément #toc introuvable dans la page");
    }
    Ok(doc
        .select(&TOC_LINKS)
        .map(|a| a.text().collect::<String>())
        .collect())
}

// ── Tests ──
