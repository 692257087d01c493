use std::path::Path;

use anyhow::Result;
use rusqlite::Connection;

use crate::model::Extraction;

/// Nom du fichier SQLite produit dans le répertoire de sortie.
pub const PLAN_DB: &str = "plan_comptable_ohada.db";

pub fn connect(path: &Path) -> Result<Connection> {
    // Pas de PRAGMA foreign_keys: la référence classe_parente → classes est
    // déclarée mais volontairement non vérifiée à l'insertion.
    Ok(Connection::open(path)?)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS classes (
            numero          TEXT PRIMARY KEY,
            libelle         TEXT NOT NULL,
            contenu         TEXT,
            commentaires    TEXT,
            fonctionnement  TEXT,
            exclusions      TEXT,
            controles       TEXT
        );

        CREATE TABLE IF NOT EXISTS comptes (
            numero          TEXT PRIMARY KEY,
            libelle         TEXT NOT NULL,
            classe_parente  TEXT,
            type            TEXT,
            FOREIGN KEY (classe_parente) REFERENCES classes(numero)
        );
        ",
    )?;
    Ok(())
}

/// Écrit la base complète: classes enrichies puis comptes, en
/// `INSERT OR REPLACE` (les conflits de clé primaire remplacent la ligne).
pub fn export(dir: &Path, extraction: &Extraction) -> Result<()> {
    let conn = connect(&dir.join(PLAN_DB))?;
    init_schema(&conn)?;
    save_classes(&conn, extraction)?;
    save_comptes(&conn, extraction)?;
    Ok(())
}

pub fn save_classes(conn: &Connection, extraction: &Extraction) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT OR REPLACE INTO classes
             (numero, libelle, contenu, commentaires, fonctionnement, exclusions, controles)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )?;
        for classe in &extraction.classes_enrichies {
            stmt.execute(rusqlite::params![
                classe.numero,
                classe.libelle,
                classe.contenu,
                classe.commentaires,
                classe.fonctionnement,
                classe.exclusions,
                classe.controles,
            ])?;
        }
    }
    tx.commit()?;
    Ok(())
}

pub fn save_comptes(conn: &Connection, extraction: &Extraction) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT OR REPLACE INTO comptes (numero, libelle, classe_parente, type)
             VALUES (?1, ?2, ?3, ?4)",
        )?;
        for compte in &extraction.comptes {
            stmt.execute(rusqlite::params![
                compte.numero,
                compte.libelle,
                compte.classe_parente,
                compte.tier.as_str(),
            ])?;
        }
    }
    tx.commit()?;
    Ok(())
}

// ── Statistiques ──

pub struct DbStats {
    pub classes: usize,
    pub comptes: usize,
    pub principaux: usize,
    pub sous_comptes: usize,
    pub analytiques: usize,
}

pub fn get_stats(conn: &Connection) -> Result<DbStats> {
    let count = |sql: &str| -> Result<usize> { Ok(conn.query_row(sql, [], |r| r.get(0))?) };
    Ok(DbStats {
        classes: count("SELECT COUNT(*) FROM classes")?,
        comptes: count("SELECT COUNT(*) FROM comptes")?,
        principaux: count("SELECT COUNT(*) FROM comptes WHERE type = 'compte_principal'")?,
        sous_comptes: count("SELECT COUNT(*) FROM comptes WHERE type = 'sous_compte'")?,
        analytiques: count("SELECT COUNT(*) FROM comptes WHERE type = 'compte_analytique'")?,
    })
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Account, AccountClass, EnrichedClass, Tier};

    fn extraction() -> Extraction {
        let mut enrichie = EnrichedClass::new("1", "RESSOURCES");
        enrichie.contenu = "Texte du contenu.".into();
        Extraction {
            classes: vec![AccountClass {
                numero: "1".into(),
                libelle: "RESSOURCES".into(),
            }],
            comptes: vec![
                Account {
                    numero: "10".into(),
                    libelle: "CAPITAL".into(),
                    classe_parente: "1".into(),
                    tier: Tier::Principal,
                },
                Account {
                    numero: "101".into(),
                    libelle: "CAPITAL SOCIAL".into(),
                    classe_parente: "1".into(),
                    tier: Tier::Sub,
                },
            ],
            classes_enrichies: vec![enrichie],
            relations: vec![],
        }
    }

    fn memoire() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn insertion_et_stats() {
        let conn = memoire();
        let ex = extraction();
        save_classes(&conn, &ex).unwrap();
        save_comptes(&conn, &ex).unwrap();

        let s = get_stats(&conn).unwrap();
        assert_eq!(s.classes, 1);
        assert_eq!(s.comptes, 2);
        assert_eq!(s.principaux, 1);
        assert_eq!(s.sous_comptes, 1);
        assert_eq!(s.analytiques, 0);

        let contenu: String = conn
            .query_row("SELECT contenu FROM classes WHERE numero = '1'", [], |r| r.get(0))
            .unwrap();
        assert_eq!(contenu, "Texte du contenu.");
    }

    #[test]
    fn conflit_de_cle_remplace() {
        let conn = memoire();
        let mut ex = extraction();
        save_comptes(&conn, &ex).unwrap();

        ex.comptes[0].libelle = "CAPITAL REVISE".into();
        save_comptes(&conn, &ex).unwrap();

        let s = get_stats(&conn).unwrap();
        assert_eq!(s.comptes, 2);
        let libelle: String = conn
            .query_row("SELECT libelle FROM comptes WHERE numero = '10'", [], |r| r.get(0))
            .unwrap();
        assert_eq!(libelle, "CAPITAL REVISE");
    }

    #[test]
    fn classe_parente_non_verifiee() {
        let conn = memoire();
        let ex = extraction();
        // Aucune classe insérée: la référence déclarée ne bloque pas
        save_comptes(&conn, &ex).unwrap();
        assert_eq!(get_stats(&conn).unwrap().comptes, 2);
    }
}
