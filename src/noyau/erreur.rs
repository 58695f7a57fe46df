// src/noyau/erreur.rs

/// Échec d’évaluation d’une expression.
///
/// Un seul type pour les trois étapes (jetons, RPN, évaluation).
/// Pas de résultat partiel : l’appelant décide du message affiché.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ErreurEval {
    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("caractère invalide: {0:?}")]
    CaractereInvalide(char),

    /// Opérateur sans ses deux opérandes, ou opérande non fini (ex: après 5/0).
    #[error("expression incomplète")]
    ExpressionIncomplete,

    /// Pile finale != 1 valeur, ou résultat non fini.
    #[error("expression invalide")]
    ExpressionInvalide,
}
