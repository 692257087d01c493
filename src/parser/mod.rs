pub mod classify;
pub mod enrich;
pub mod hierarchy;
pub mod toc;

use anyhow::Result;
use scraper::Html;

use crate::model::Extraction;

/// Pipeline complet: ancres de la table des matières → classes/comptes →
/// relations, plus la passe d'enrichissement indépendante sur les h2 du
/// corps. Les deux listes de classes ne sont pas réconciliées.
pub fn extract_all(doc: &Html) -> Result<Extraction> {
    let tokens = toc::toc_tokens(doc)?;
    let classified = classify::classify_tokens(&tokens);
    let relations = hierarchy::build_relations(&classified.classes, &classified.comptes);
    let classes_enrichies = enrich::enrich_classes(doc);
    Ok(Extraction {
        classes: classified.classes,
        comptes: classified.comptes,
        classes_enrichies,
        relations,
    })
}

// ── Tests ──
