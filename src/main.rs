mod db;
mod export;
mod fetch;
mod model;
mod parser;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use scraper::Html;

use model::Extraction;

#[derive(Parser)]
#[command(name = "ohada_scraper", about = "Scraper du plan comptable OHADA (SYSCOHADA)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape la page et produit les six fichiers d'export
    Run {
        /// URL de la page du plan comptable
        #[arg(long, default_value = fetch::PLAN_URL)]
        url: String,
        /// Répertoire de sortie
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Affiche les statistiques de la base SQLite produite par `run`
    Stats {
        /// Répertoire contenant plan_comptable_ohada.db
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run { url, out_dir } => run(&url, &out_dir).await,
        Commands::Stats { out_dir } => stats(&out_dir),
    }
}

async fn run(url: &str, out_dir: &Path) -> Result<()> {
    println!(" Démarrage du scraping...");

    // Fail-fast: aucune sortie n'est écrite si la récupération échoue.
    let html = fetch::fetch_page(url).await?;
    println!(" Page récupérée avec succès!");

    let doc = Html::parse_document(&html);
    if let Some(titre) = fetch::page_title(&doc) {
        println!(" Titre: {}\n", titre);
    }

    let extraction = parser::extract_all(&doc)?;
    std::fs::create_dir_all(out_dir)?;

    banner("PARTIE 1 : EXTRACTION BASIQUE");
    println!("\n Extraction des classes et comptes...");
    for classe in &extraction.classes {
        println!("  ✓ Classe {}: {}", classe.numero, classe.libelle);
    }
    println!("\n {} classes extraites", extraction.classes.len());
    println!(" {} comptes extraits", extraction.comptes.len());

    println!("\n Création de classes.csv...");
    export::csv::write_classes(out_dir, &extraction)?;
    println!(" classes.csv créé");

    println!(" Création de comptes.json...");
    export::json::write_comptes(out_dir, &extraction)?;
    println!(" comptes.json créé");

    banner("PARTIE 2 : STRUCTURATION HIÉRARCHIQUE");
    println!("\n Construction de la hiérarchie...");
    println!(" {} relations créées", extraction.relations.len());
    println!("  - Comptes principaux: {}", extraction.comptes_principaux().count());
    println!("  - Sous-comptes: {}", extraction.sous_comptes().count());
    println!("  - Comptes analytiques: {}", extraction.comptes_analytiques().count());

    println!("\n Création de plan_comptable_hierarchique.xlsx...");
    export::xlsx::write_workbook(out_dir, &extraction)?;
    println!(" plan_comptable_hierarchique.xlsx créé avec 4 feuilles");

    banner("PARTIE 3 : EXTRACTION AVANCÉE");
    println!("\n Extraction des sections détaillées pour chaque classe...");
    for classe in &extraction.classes_enrichies {
        println!("   Classe {}: {}", classe.numero, classe.libelle);
    }
    println!(
        "\n {} classes enrichies avec sections détaillées",
        extraction.classes_enrichies.len()
    );

    println!("\n Création de plan_comptable_complet.json...");
    export::json::write_complet(out_dir, &extraction)?;
    println!(" plan_comptable_complet.json créé");

    banner("BONUS : FICHIERS SUPPLÉMENTAIRES");
    println!("\n Création de hierarchie_visualisation.csv...");
    export::csv::write_visualisation(out_dir, &extraction)?;
    println!(" hierarchie_visualisation.csv créé");

    println!("\n Création de plan_comptable_ohada.db...");
    db::export(out_dir, &extraction)?;
    println!(" plan_comptable_ohada.db créé avec tables relationnelles");

    banner(" SCRAPING TERMINÉ AVEC SUCCÈS!");
    summary(&extraction);

    Ok(())
}

fn summary(extraction: &Extraction) {
    println!("\n Fichiers créés:");
    for nom in [
        export::CLASSES_CSV,
        export::COMPTES_JSON,
        export::HIERARCHIE_XLSX,
        export::COMPLET_JSON,
        export::VISUALISATION_CSV,
        db::PLAN_DB,
    ] {
        println!("  ✓ {}", nom);
    }

    println!("\n Statistiques:");
    println!("  - Classes extraites: {}", extraction.classes_enrichies.len());
    println!("  - Comptes extraits: {}", extraction.comptes.len());
    println!("  - Comptes principaux: {}", extraction.comptes_principaux().count());
    println!("  - Sous-comptes: {}", extraction.sous_comptes().count());
    println!("  - Relations créées: {}", extraction.relations.len());
}

fn stats(out_dir: &Path) -> Result<()> {
    let path = out_dir.join(db::PLAN_DB);
    anyhow::ensure!(
        path.exists(),
        "base introuvable: {} (lancez d'abord `run`)",
        path.display()
    );
    let conn = db::connect(&path)?;
    let s = db::get_stats(&conn)?;
    println!("Classes:             {}", s.classes);
    println!("Comptes:             {}", s.comptes);
    println!("  - principaux:      {}", s.principaux);
    println!("  - sous-comptes:    {}", s.sous_comptes);
    println!("  - analytiques:     {}", s.analytiques);
    Ok(())
}

fn banner(titre: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{}", titre);
    println!("{}", "=".repeat(60));
}
