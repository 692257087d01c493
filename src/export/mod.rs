pub mod csv;
pub mod json;
pub mod xlsx;

/// Noms des fichiers produits, tous relatifs au répertoire de sortie.
pub const CLASSES_CSV: &str = "classes.csv";
pub const COMPTES_JSON: &str = "comptes.json";
pub const HIERARCHIE_XLSX: &str = "plan_comptable_hierarchique.xlsx";
pub const COMPLET_JSON: &str = "plan_comptable_complet.json";
pub const VISUALISATION_CSV: &str = "hierarchie_visualisation.csv";
