use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::model::{Account, Extraction};

/// `plan_comptable_hierarchique.xlsx`: quatre feuilles tabulaires
/// (`Classes`, `Comptes_Principaux`, `Sous_Comptes`, `Relations`).
pub fn write_workbook(dir: &Path, extraction: &Extraction) -> Result<()> {
    let path = dir.join(super::HIERARCHIE_XLSX);
    let mut workbook = build_workbook(extraction)?;
    workbook
        .save(&path)
        .with_context(|| format!("écriture de {}", path.display()))?;
    Ok(())
}

fn build_workbook(extraction: &Extraction) -> Result<Workbook> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Classes")?;
    sheet.write_row(0, 0, ["numero", "libelle"])?;
    for (i, classe) in extraction.classes.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, &classe.numero)?;
        sheet.write_string(row, 1, &classe.libelle)?;
    }

    let sheet = workbook.add_worksheet();
    sheet.set_name("Comptes_Principaux")?;
    write_comptes_sheet(sheet, extraction.comptes_principaux())?;

    let sheet = workbook.add_worksheet();
    sheet.set_name("Sous_Comptes")?;
    write_comptes_sheet(sheet, extraction.sous_comptes())?;

    let sheet = workbook.add_worksheet();
    sheet.set_name("Relations")?;
    sheet.write_row(0, 0, ["compte_enfant", "compte_parent", "niveau", "libelle_enfant"])?;
    for (i, relation) in extraction.relations.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, &relation.compte_enfant)?;
        sheet.write_string(row, 1, &relation.compte_parent)?;
        sheet.write_string(row, 2, &relation.niveau)?;
        sheet.write_string(row, 3, &relation.libelle_enfant)?;
    }

    Ok(workbook)
}

fn write_comptes_sheet<'a>(
    sheet: &mut Worksheet,
    comptes: impl Iterator<Item = &'a Account>,
) -> Result<()> {
    sheet.write_row(0, 0, ["numero", "libelle", "classe_parente", "type"])?;
    for (i, compte) in comptes.enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, &compte.numero)?;
        sheet.write_string(row, 1, &compte.libelle)?;
        sheet.write_string(row, 2, &compte.classe_parente)?;
        sheet.write_string(row, 3, compte.tier.as_str())?;
    }
    Ok(())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AccountClass, Relation, Tier};

    #[test]
    fn quatre_feuilles_et_archive_valide() {
        let extraction = Extraction {
            classes: vec![AccountClass {
                numero: "1".into(),
                libelle: "RESSOURCES".into(),
            }],
            comptes: vec![Account {
                numero: "10".into(),
                libelle: "CAPITAL".into(),
                classe_parente: "1".into(),
                tier: Tier::Principal,
            }],
            classes_enrichies: vec![],
            relations: vec![Relation {
                compte_enfant: "1".into(),
                compte_parent: String::new(),
                niveau: "classe".into(),
                libelle_enfant: "RESSOURCES".into(),
            }],
        };
        let mut workbook = build_workbook(&extraction).unwrap();
        let buffer = workbook.save_to_buffer().unwrap();
        // Une archive xlsx est un zip: signature PK\x03\x04
        assert_eq!(&buffer[..4], b"PK\x03\x04");
    }
}
