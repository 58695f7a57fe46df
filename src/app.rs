// src/app.rs
//
// Calculatrice de caisse — module App (racine)
// --------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + session.rs)
// - Ré-exporter EtatCalc et Session (pour main.rs)
//
// Le noyau ne connaît rien d’ici : l’app n’est qu’un appelant.

pub mod etat;
pub mod session;

pub use etat::EtatCalc;
pub use session::Session;
