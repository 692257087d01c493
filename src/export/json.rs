use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::model::{Account, EnrichedClass, Extraction};

/// `comptes.json`: tableau JSON des comptes
/// (`{numero, libelle, classe_parente, type}`).
pub fn write_comptes(dir: &Path, extraction: &Extraction) -> Result<()> {
    let path = dir.join(super::COMPTES_JSON);
    let json = serde_json::to_string_pretty(&extraction.comptes)?;
    fs::write(&path, json).with_context(|| format!("écriture de {}", path.display()))?;
    Ok(())
}

#[derive(Serialize)]
struct Statistiques {
    total_classes: usize,
    total_comptes: usize,
    total_comptes_principaux: usize,
    total_sous_comptes: usize,
    date_extraction: String,
}

#[derive(Serialize)]
struct PlanComplet<'a> {
    classes: &'a [EnrichedClass],
    comptes: &'a [Account],
    statistiques: Statistiques,
}

/// `plan_comptable_complet.json`: classes enrichies + comptes + statistiques,
/// horodatées à l'export (heure locale `YYYY-MM-DD HH:MM:SS`).
pub fn write_complet(dir: &Path, extraction: &Extraction) -> Result<()> {
    let date = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let path = dir.join(super::COMPLET_JSON);
    let json = serde_json::to_string_pretty(&plan_complet(extraction, date))?;
    fs::write(&path, json).with_context(|| format!("écriture de {}", path.display()))?;
    Ok(())
}

fn plan_complet(extraction: &Extraction, date_extraction: String) -> PlanComplet<'_> {
    PlanComplet {
        classes: &extraction.classes_enrichies,
        comptes: &extraction.comptes,
        statistiques: Statistiques {
            total_classes: extraction.classes_enrichies.len(),
            total_comptes: extraction.comptes.len(),
            total_comptes_principaux: extraction.comptes_principaux().count(),
            total_sous_comptes: extraction.sous_comptes().count(),
            date_extraction,
        },
    }
}

// ── Tests ──
