//! src/app/session.rs
//!
//! Session interactive ligne par ligne, branchée sur `EtatCalc`.
//!
//! Commandes :
//! - `:c`  effacer l’afficheur
//! - `:b`  retour arrière (dernier caractère)
//! - `:d`  afficher / masquer la démarche (jetons, RPN)
//! - `:q`  quitter
//! - autre : texte ajouté à l’afficheur, puis "="

use std::io::{self, BufRead, Write};

use tracing::debug;

use super::etat::EtatCalc;

pub struct Session {
    etat: EtatCalc,
    avec_demarche: bool,
}

impl Session {
    pub fn new(avec_demarche: bool) -> Self {
        Self {
            etat: EtatCalc::default(),
            avec_demarche,
        }
    }

    pub fn etat(&self) -> &EtatCalc {
        &self.etat
    }

    /// Boucle principale : lit `entree` jusqu’à EOF ou `:q`.
    pub fn executer<R: BufRead, W: Write>(&mut self, entree: R, sortie: &mut W) -> io::Result<()> {
        for ligne in entree.lines() {
            let ligne = ligne?;
            if !self.traiter_ligne(ligne.trim(), sortie)? {
                break;
            }
        }
        Ok(())
    }

    /// Retourne `false` pour quitter.
    fn traiter_ligne<W: Write>(&mut self, ligne: &str, sortie: &mut W) -> io::Result<bool> {
        match ligne {
            ":q" => return Ok(false),
            ":c" => self.etat.effacer(),
            ":b" => self.etat.effacer_dernier(),
            ":d" => {
                self.avec_demarche = !self.avec_demarche;
                writeln!(
                    sortie,
                    "démarche {}",
                    if self.avec_demarche { "visible" } else { "masquée" }
                )?;
                return Ok(true);
            }
            "" => {}
            texte => {
                self.etat.saisir(texte);
                self.etat.evaluer();
                debug!(affichage = %self.etat.affichage, message = %self.etat.message, "session");
            }
        }

        if self.avec_demarche {
            if let Some(d) = &self.etat.demarche {
                writeln!(sortie, "  jetons : {}", d.jetons)?;
                writeln!(sortie, "  rpn    : {}", d.rpn)?;
            }
        }
        writeln!(sortie, "[{}] {}", self.etat.message, self.etat.affichage)?;
        Ok(true)
    }
}
