use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::model::EnrichedClass;

// Tiret cadratin, deux-points ou trait d'union entre le numéro et le libellé.
static CLASSE_H2_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^CLASSE\s+(\d+)\s+[–:-]\s*(.+)$").unwrap());
static H2: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h2").unwrap());

/// Construit la liste des classes enrichies à partir des titres h2 du corps
/// de la page. Chaque h2 de la forme `CLASSE <n> – <libellé>` ouvre une
/// portée qui court jusqu'au h2 suivant; à l'intérieur, chaque h3 désigne
/// une sous-section rattachée au champ correspondant. Les h2 qui ne
/// correspondent pas au motif sont ignorés silencieusement.
pub fn enrich_classes(doc: &Html) -> Vec<EnrichedClass> {
    let mut enrichies = Vec::new();

    for h2 in doc.select(&H2) {
        let titre = h2.text().collect::<String>();
        let Some(caps) = CLASSE_H2_RE.captures(titre.trim()) else {
            continue;
        };
        let mut classe = EnrichedClass::new(&caps[1], caps[2].trim());

        let mut node = h2.next_sibling();
        while let Some(courant) = node {
            if let Some(el) = ElementRef::wrap(courant) {
                match el.value().name() {
                    "h2" => break,
                    "h3" => {
                        let sous_titre = el.text().collect::<String>().trim().to_lowercase();
                        let texte = section_text(el);
                        apply_section(&mut classe, &sous_titre, texte);
                    }
                    _ => {}
                }
            }
            node = courant.next_sibling();
        }

        enrichies.push(classe);
    }

    enrichies
}

/// Concatène le texte des paragraphes qui suivent un h3, jusqu'au prochain
/// h2 ou h3. Les suites d'espaces internes de chaque paragraphe sont
/// réduites à un seul espace.
fn section_text(h3: ElementRef) -> String {
    let mut paragraphes = Vec::new();
    let mut node = h3.next_sibling();
    while let Some(courant) = node {
        if let Some(el) = ElementRef::wrap(courant) {
            match el.value().name() {
                "h2" | "h3" => break,
                "p" => {
                    let brut = el.text().collect::<String>();
                    paragraphes.push(brut.split_whitespace().collect::<Vec<_>>().join(" "));
                }
                _ => {}
            }
        }
        node = courant.next_sibling();
    }
    paragraphes.join(" ")
}

/// Rattache le texte d'une sous-section au champ désigné par son titre.
/// Un titre hors des cinq mots-clés connus est lu puis écarté.
fn apply_section(classe: &mut EnrichedClass, titre: &str, texte: String) {
    if titre.contains("contenu") {
        classe.contenu = texte;
    } else if titre.contains("commentaire") {
        classe.commentaires = texte;
    } else if titre.contains("fonctionnement") {
        classe.fonctionnement = texte;
    } else if titre.contains("exclusion") {
        classe.exclusions = texte;
    } else if titre.contains("contrôle") || titre.contains("controle") {
        classe.controles = texte;
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn enrich(html: &str) -> Vec<EnrichedClass> {
        enrich_classes(&Html::parse_document(html))
    }

    #[test]
    fn contenu_deux_paragraphes() {
        let classes = enrich(
            "<h2>CLASSE 2 – COMPTES D'ACTIF IMMOBILISE</h2>\
             <h3>Contenu</h3>\
             <p>Premier   paragraphe\n normalisé.</p>\
             <p>Second paragraphe.</p>",
        );
        assert_eq!(classes.len(), 1);
        let c = &classes[0];
        assert_eq!(c.numero, "2");
        assert_eq!(c.libelle, "COMPTES D'ACTIF IMMOBILISE");
        assert_eq!(c.contenu, "Premier paragraphe normalisé. Second paragraphe.");
        assert_eq!(c.commentaires, "");
        assert_eq!(c.fonctionnement, "");
        assert_eq!(c.exclusions, "");
        assert_eq!(c.controles, "");
    }

    #[test]
    fn separateurs_deux_points_et_trait_d_union() {
        let classes = enrich("<h2>CLASSE 1 : RESSOURCES</h2><h2>CLASSE 3 - STOCKS</h2>");
        assert_eq!(classes.len(), 2);
        assert_eq!(classes[0].numero, "1");
        assert_eq!(classes[1].libelle, "STOCKS");
    }

    #[test]
    fn h2_hors_motif_ignore() {
        let classes = enrich("<h2>Annexes diverses</h2><p>texte</p>");
        assert!(classes.is_empty());
    }

    #[test]
    fn classe_sans_h3_reste_vide() {
        let classes = enrich("<h2>CLASSE 4 – TIERS</h2><p>préambule libre</p>");
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].contenu, "");
    }

    #[test]
    fn sous_section_inconnue_ecartee() {
        let classes = enrich(
            "<h2>CLASSE 5 – TRESORERIE</h2>\
             <h3>Renvois</h3>\
             <p>Ce texte est lu puis écarté.</p>\
             <h3>Commentaires</h3>\
             <p>Gardé.</p>",
        );
        let c = &classes[0];
        assert_eq!(c.contenu, "");
        assert_eq!(c.commentaires, "Gardé.");
    }

    #[test]
    fn portee_arretee_au_h2_suivant() {
        let classes = enrich(
            "<h2>CLASSE 1 – RESSOURCES</h2>\
             <h3>Contenu</h3><p>De la classe 1.</p>\
             <h2>CLASSE 2 – ACTIF</h2>\
             <h3>Contenu</h3><p>De la classe 2.</p>",
        );
        assert_eq!(classes.len(), 2);
        assert_eq!(classes[0].contenu, "De la classe 1.");
        assert_eq!(classes[1].contenu, "De la classe 2.");
    }

    #[test]
    fn cinq_sous_sections() {
        let classes = enrich(
            "<h2>CLASSE 6 – CHARGES</h2>\
             <h3>Contenu</h3><p>a</p>\
             <h3>Commentaires</h3><p>b</p>\
             <h3>Fonctionnement</h3><p>c</p>\
             <h3>Exclusions</h3><p>d</p>\
             <h3>Contrôles</h3><p>e</p>",
        );
        let c = &classes[0];
        assert_eq!(
            (c.contenu.as_str(), c.commentaires.as_str(), c.fonctionnement.as_str(),
             c.exclusions.as_str(), c.controles.as_str()),
            ("a", "b", "c", "d", "e")
        );
    }

    #[test]
    fn controle_sans_accent_reconnu() {
        let classes = enrich(
            "<h2>CLASSE 7 – PRODUITS</h2>\
             <h3>Controles periodiques</h3><p>ok</p>",
        );
        assert_eq!(classes[0].controles, "ok");
    }
}
