use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use std::fs;
use std::path::PathBuf;

// Imports internes
use custom_item_schema::schema::normalizer;
use custom_item_schema::utils::init_logging;

#[derive(Parser, Debug)]
#[command(author, version, about = "Valide et met en forme un document Schema.org JSON-LD")]
struct Args {
    /// Chemin du fichier JSON-LD à contrôler
    /// ex: data/schemas/homepage.json
    #[arg(short, long)]
    file: PathBuf,

    /// Sort la forme d'édition (pretty) au lieu de la forme canonique
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    // 1. CHARGEMENT DU .ENV
    // dotenv() cherche le fichier .env dans le dossier courant et les parents
    if dotenv().is_err() {
        println!("⚠️  Attention: Fichier .env introuvable. On utilise les variables d'environnement système.");
    }

    init_logging();
    let args = Args::parse();

    // 2. LECTURE DU DOCUMENT
    println!("📂 Lecture : {:?}", args.file);
    let content = fs::read_to_string(&args.file)
        .with_context(|| format!("Fichier introuvable : {:?}", args.file))?;

    // 3. DÉTECTION DU GABARIT PAR DÉFAUT
    // Un document égal au gabarit ne serait pas stocké par l'éditeur.
    if normalizer::is_default(&content) {
        println!("ℹ️  Document équivalent au gabarit par défaut : rien ne serait stocké.");
        return Ok(());
    }

    // 4. VALIDATION STRICTE (chemin de rendu)
    match normalizer::validate_and_canonicalize(&content) {
        Ok(canonical) => {
            println!("✅ SUCCÈS : Document VALIDE !");
            if args.pretty {
                println!("{}", normalizer::format_for_edit(&content));
            } else {
                println!("{}", canonical);
            }
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!(
            "❌ Document INVALIDE (aucun bloc ne serait émis) : {}",
            e
        )),
    }
}
