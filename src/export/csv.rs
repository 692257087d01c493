use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::Extraction;

/// `classes.csv`: une ligne par classe issue de la table des matières
/// (liste non enrichie), en-tête `numero,libelle`.
pub fn write_classes(dir: &Path, extraction: &Extraction) -> Result<()> {
    let path = dir.join(super::CLASSES_CSV);
    let file = File::create(&path).with_context(|| format!("création de {}", path.display()))?;
    write_classes_to(file, extraction)
}

fn write_classes_to<W: Write>(writer: W, extraction: &Extraction) -> Result<()> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(["numero", "libelle"])?;
    for classe in &extraction.classes {
        w.write_record([classe.numero.as_str(), classe.libelle.as_str()])?;
    }
    w.flush()?;
    Ok(())
}

/// `hierarchie_visualisation.csv`: classes puis comptes, avec des
/// identifiants préfixés (`classe_<n>` / `compte_<n>`). Les classes pèsent
/// 100, les comptes 50; le parent d'un compte à deux chiffres est sa classe,
/// sinon le compte tronqué du dernier chiffre.
pub fn write_visualisation(dir: &Path, extraction: &Extraction) -> Result<()> {
    let path = dir.join(super::VISUALISATION_CSV);
    let file = File::create(&path).with_context(|| format!("création de {}", path.display()))?;
    write_visualisation_to(file, extraction)
}

fn write_visualisation_to<W: Write>(writer: W, extraction: &Extraction) -> Result<()> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(["id", "parent_id", "name", "value"])?;

    for classe in &extraction.classes {
        w.write_record([
            format!("classe_{}", classe.numero).as_str(),
            "",
            classe.libelle.as_str(),
            "100",
        ])?;
    }

    for compte in &extraction.comptes {
        let parent_id = if compte.numero.len() == 2 {
            format!("classe_{}", compte.classe_parente)
        } else {
            format!("compte_{}", &compte.numero[..compte.numero.len() - 1])
        };
        w.write_record([
            format!("compte_{}", compte.numero).as_str(),
            parent_id.as_str(),
            compte.libelle.as_str(),
            "50",
        ])?;
    }

    w.flush()?;
    Ok(())
}

// ── Tests ──
