// src/main.rs
//
// Calculatrice de caisse — point d’entrée ligne de commande
// ---------------------------------------------------------
// - `eval <EXPR>`   : évalue une expression + - * / et affiche le résultat
// - `lire <TEXTE>`  : lit un montant tapé librement ("1.234,56", "$ 119000")
// - `session`       : afficheur interactif (défaut sans sous-commande)
//
// Journalisation sur stderr (stdout reste propre pour les résultats).

use std::io;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use calculatrice_caisse::app::Session;
use calculatrice_caisse::noyau::format::format_js;
use calculatrice_caisse::noyau::{
    eval_avec_demarche, format_monnaie, format_resultat, parse_loose_number,
};

#[derive(Parser, Debug)]
#[command(name = "calculatrice_caisse", version, about = "Calculatrice de caisse (IVA / POS)")]
struct Cli {
    /// Plus de journalisation (-v debug, -vv trace). RUST_LOG a priorité.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbeux: u8,

    #[command(subcommand)]
    commande: Option<Commande>,
}

#[derive(Subcommand, Debug)]
enum Commande {
    /// Évalue une expression (ex: "2+3*4", "-5+3")
    Eval {
        expression: String,

        /// Affiche aussi les jetons et la RPN
        #[arg(long)]
        demarche: bool,
    },

    /// Lit un montant saisi librement
    Lire {
        texte: String,

        /// Affiche au format monétaire es-CO ("$1.234,56")
        #[arg(long)]
        monnaie: bool,
    },

    /// Afficheur interactif sur stdin
    Session {
        /// Démarche visible dès le départ
        #[arg(long)]
        demarche: bool,
    },
}

fn installer_journal(verbeux: u8) {
    let defaut = match verbeux {
        0 => "warn",
        1 => "calculatrice_caisse=debug",
        _ => "calculatrice_caisse=trace",
    };
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(defaut));

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    installer_journal(cli.verbeux);

    match cli.commande.unwrap_or(Commande::Session { demarche: false }) {
        Commande::Eval {
            expression,
            demarche,
        } => {
            let (v, d) = eval_avec_demarche(&expression)
                .with_context(|| format!("Erreur dans l'expression {expression:?}"))?;
            if demarche {
                println!("jetons : {}", d.jetons);
                println!("rpn    : {}", d.rpn);
            }
            println!("{}", format_resultat(v));
        }

        Commande::Lire { texte, monnaie } => {
            let v = parse_loose_number(&texte)
                .ok_or_else(|| anyhow!("nombre illisible: {texte:?}"))?;
            if monnaie {
                println!("{}", format_monnaie(v));
            } else {
                println!("{}", format_js(v));
            }
        }

        Commande::Session { demarche } => {
            info!("session interactive (:q pour quitter)");
            let mut session = Session::new(demarche);
            session
                .executer(io::stdin().lock(), &mut io::stdout().lock())
                .context("session interrompue")?;
        }
    }

    Ok(())
}
