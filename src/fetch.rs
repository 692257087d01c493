use std::sync::LazyLock;
use std::time::Duration;

use anyhow::{Context, Result};
use scraper::{Html, Selector};
use tracing::info;

/// Page du plan comptable SYSCOHADA (norme 2016).
pub const PLAN_URL: &str =
    "https://plan-comptable-ohada.com/nouvelle-norme-2016/plan-comptable-syscohada.html";

const TIMEOUT: Duration = Duration::from_secs(30);

static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());

/// Récupère le HTML brut de la page. Un seul essai: toute erreur réseau ou
/// statut non 2xx interrompt l'exécution avant qu'aucun fichier ne soit
/// produit.
pub async fn fetch_page(url: &str) -> Result<String> {
    info!("Téléchargement de {}", url);
    let client = reqwest::Client::builder().timeout(TIMEOUT).build()?;
    let html = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
        .with_context(|| format!("échec de la récupération de {}", url))?;
    Ok(html)
}

/// Titre de la page, pour la narration console.
pub fn page_title(doc: &Html) -> Option<String> {
    doc.select(&TITLE)
        .next()
        .map(|t| t.text().collect::<String>().trim().to_string())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titre_extrait() {
        let doc = Html::parse_document("<html><head><title> Plan comptable </title></head></html>");
        assert_eq!(page_title(&doc).as_deref(), Some("Plan comptable"));
    }

    #[test]
    fn titre_absent() {
        let doc = Html::parse_document("<html><body><p>x</p></body></html>");
        assert_eq!(page_title(&doc), None);
    }
}
