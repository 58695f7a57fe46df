//! src/app/etat.rs
//!
//! État de l’afficheur calculatrice (sans vue).
//!
//! Rôle : contenir l’afficheur, le message d’état et la démarche de la dernière
//! évaluation, et offrir les actions simples (saisir / évaluer / effacer).
//!
//! Contrat clé : une évaluation ratée ne touche PAS à l’afficheur.

use crate::noyau::{eval_avec_demarche, format_resultat, parse_loose_number, DemarcheNoyau};

pub const MSG_PRET: &str = "Prêt";
pub const MSG_OK: &str = "OK";
pub const MSG_VIDE: &str = "Calculatrice vide";
pub const MSG_ERREUR: &str = "Erreur dans l'expression";

#[derive(Clone, Debug, PartialEq)]
pub struct EtatCalc {
    // --- afficheur (entrée ET résultat, comme une calculatrice de poche) ---
    pub affichage: String,

    // --- retour utilisateur ---
    pub message: String,

    // --- démarche de la dernière évaluation réussie ---
    pub demarche: Option<DemarcheNoyau>,
}

impl Default for EtatCalc {
    fn default() -> Self {
        Self {
            affichage: String::new(),
            message: MSG_PRET.to_string(),
            demarche: None,
        }
    }
}

impl EtatCalc {
    /// Ajoute du texte à la fin de l’afficheur.
    pub fn saisir(&mut self, texte: &str) {
        self.affichage.push_str(texte);
    }

    /// Retour arrière : retire le dernier caractère de l’afficheur.
    pub fn effacer_dernier(&mut self) {
        self.affichage.pop();
    }

    /// Efface l’afficheur et la démarche.
    pub fn effacer(&mut self) {
        self.affichage.clear();
        self.demarche = None;
        self.message = MSG_VIDE.to_string();
    }

    /// "=" : évalue l’afficheur.
    ///
    /// - afficheur vide : rien ne change
    /// - succès : l’afficheur reçoit le résultat mis en forme
    /// - échec : afficheur intact, message d’erreur, démarche effacée
    pub fn evaluer(&mut self) {
        let expr = self.affichage.trim();
        if expr.is_empty() {
            return;
        }

        match eval_avec_demarche(expr) {
            Ok((v, d)) => {
                self.affichage = format_resultat(v);
                self.demarche = Some(d);
                self.message = MSG_OK.to_string();
            }
            Err(e) => {
                self.demarche = None;
                self.message = format!("{MSG_ERREUR} ({e})");
            }
        }
    }

    /// Valeur numérique lisible dans l’afficheur (pour alimenter un champ montant).
    pub fn valeur_affichee(&self) -> Option<f64> {
        parse_loose_number(&self.affichage)
    }
}
