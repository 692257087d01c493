use crate::model::{Account, AccountClass, Tier};

/// Résultat de la classification des entrées de la table des matières.
#[derive(Debug, Default)]
pub struct Classified {
    pub classes: Vec<AccountClass>,
    pub comptes: Vec<Account>,
}

/// Classe chaque entrée de la forme `"<TYPE> <NUMERO> : <LIBELLE>"`.
///
/// Coupe sur la première occurrence de `" : "`; la partie gauche doit donner
/// au moins deux mots (type puis numéro). `CLASSE` produit une classe; sinon
/// un numéro entièrement numérique produit un compte. Tout le reste est
/// ignoré sans erreur. Aucune déduplication. Fonction pure.
pub fn classify_tokens<S: AsRef<str>>(tokens: &[S]) -> Classified {
    let mut classified = Classified::default();

    for token in tokens {
        let Some((type_part, libelle)) = token.as_ref().split_once(" : ") else {
            continue;
        };
        let mut mots = type_part.split_whitespace();
        let (Some(genre), Some(numero)) = (mots.next(), mots.next()) else {
            continue;
        };

        if genre == "CLASSE" {
            classified.classes.push(AccountClass {
                numero: numero.to_string(),
                libelle: libelle.trim().to_string(),
            });
        } else if numero.bytes().all(|b| b.is_ascii_digit()) {
            classified.comptes.push(Account {
                numero: numero.to_string(),
                libelle: libelle.trim().to_string(),
                classe_parente: numero[..1].to_string(),
                tier: Tier::from_code(numero),
            });
        }
    }

    classified
}

// ── Tests ──
