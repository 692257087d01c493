use serde::Serialize;

/// Classe du plan comptable, telle qu'extraite de la table des matières.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountClass {
    pub numero: String,
    pub libelle: String,
}

/// Classe enrichie des sections narratives trouvées dans le corps de la page.
/// Construite par un parcours indépendant des titres h2 (pas une mutation de
/// la liste issue de la table des matières); les deux listes ne sont jamais
/// réconciliées.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedClass {
    pub numero: String,
    pub libelle: String,
    pub contenu: String,
    pub commentaires: String,
    pub fonctionnement: String,
    pub exclusions: String,
    pub controles: String,
}

impl EnrichedClass {
    pub fn new(numero: &str, libelle: &str) -> Self {
        Self {
            numero: numero.to_string(),
            libelle: libelle.to_string(),
            contenu: String::new(),
            commentaires: String::new(),
            fonctionnement: String::new(),
            exclusions: String::new(),
            controles: String::new(),
        }
    }
}

/// Niveau de spécificité d'un compte, fonction pure du nombre de chiffres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    #[serde(rename = "compte_principal")]
    Principal,
    #[serde(rename = "sous_compte")]
    Sub,
    #[serde(rename = "compte_analytique")]
    Analytic,
}

impl Tier {
    /// 2 chiffres → principal, 3 → sous-compte, autre → analytique.
    pub fn from_code(numero: &str) -> Self {
        match numero.len() {
            2 => Tier::Principal,
            3 => Tier::Sub,
            _ => Tier::Analytic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Principal => "compte_principal",
            Tier::Sub => "sous_compte",
            Tier::Analytic => "compte_analytique",
        }
    }
}

/// Compte numéroté (2 chiffres et plus en pratique).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub numero: String,
    pub libelle: String,
    pub classe_parente: String,
    #[serde(rename = "type")]
    pub tier: Tier,
}

/// Arête parent/enfant dérivée des préfixes numériques. Recalculée à chaque
/// exécution, jamais persistée en tant que telle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relation {
    pub compte_enfant: String,
    pub compte_parent: String,
    pub niveau: String,
    pub libelle_enfant: String,
}

/// Résultat complet du pipeline d'extraction. Objet unique que chaque
/// sérialiseur consomme.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub classes: Vec<AccountClass>,
    pub comptes: Vec<Account>,
    pub classes_enrichies: Vec<EnrichedClass>,
    pub relations: Vec<Relation>,
}

impl Extraction {
    pub fn comptes_principaux(&self) -> impl Iterator<Item = &Account> {
        self.comptes.iter().filter(|c| c.tier == Tier::Principal)
    }

    pub fn sous_comptes(&self) -> impl Iterator<Item = &Account> {
        self.comptes.iter().filter(|c| c.tier == Tier::Sub)
    }

    pub fn comptes_analytiques(&self) -> impl Iterator<Item = &Account> {
        self.comptes.iter().filter(|c| c.tier == Tier::Analytic)
    }
}

// ── Tests ──
