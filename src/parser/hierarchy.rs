use crate::model::{Account, AccountClass, Relation};

/// Dérive les arêtes parent/enfant: les classes d'abord (sans parent), puis
/// les comptes (parent = numéro tronqué du dernier chiffre), chacun dans
/// l'ordre d'entrée. Cet ordre fait partie du contrat des exports.
pub fn build_relations(classes: &[AccountClass], comptes: &[Account]) -> Vec<Relation> {
    let mut relations = Vec::with_capacity(classes.len() + comptes.len());

    for classe in classes {
        relations.push(Relation {
            compte_enfant: classe.numero.clone(),
            compte_parent: String::new(),
            niveau: "classe".to_string(),
            libelle_enfant: classe.libelle.clone(),
        });
    }

    for compte in comptes {
        // Un numéro d'un seul caractère n'arrive pas en pratique (comptes à
        // 2+ chiffres), mais la troncature doit rester défensive.
        let parent = if compte.numero.len() > 1 {
            compte.numero[..compte.numero.len() - 1].to_string()
        } else {
            String::new()
        };
        relations.push(Relation {
            compte_enfant: compte.numero.clone(),
            compte_parent: parent,
            niveau: compte.tier.as_str().to_string(),
            libelle_enfant: compte.libelle.clone(),
        });
    }

    relations
}

// ── Tests ──
