use crate::{ErrorClass, SearchError};

/// Resultado terminal de una búsqueda.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Entrada ausente o inventario no encontrado.
    ClientError,
    /// Fallo de PubChem o error inesperado.
    ServerError,
}

impl From<&SearchError> for Outcome {
    fn from(err: &SearchError) -> Self {
        match err.class() {
            ErrorClass::Input | ErrorClass::DatasetNotFound => Outcome::ClientError,
            ErrorClass::Upstream | ErrorClass::Unexpected => Outcome::ServerError,
        }
    }
}

/// Etapa de una búsqueda en curso.
///
/// Las transiciones válidas son:
/// - avance lineal `Received -> Validating -> Searching -> Enriching ->
///   Loading -> Matching -> Responding -> Responded(Success)`
/// - `Enriching -> Responding` cuando PubChem no devolvió hits
/// - cualquier etapa no terminal anterior a `Responding` ->
///   `Responded(ClientError | ServerError)`
///
/// No se permiten reversiones ni salir de `Responded`.
///
/// `Received -> Responded(ClientError)` es la salida de un cuerpo sin
/// `smiles` utilizable (`InventorySearch::run_body`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStage {
    Received,
    Validating,
    Searching,
    Enriching,
    Loading,
    Matching,
    Responding,
    Responded(Outcome),
}

impl SearchStage {
    /// Siguiente etapa en el camino feliz.
    pub fn next(self) -> Option<SearchStage> {
        use SearchStage::*;
        match self {
            Received => Some(Validating),
            Validating => Some(Searching),
            Searching => Some(Enriching),
            Enriching => Some(Loading),
            Loading => Some(Matching),
            Matching => Some(Responding),
            Responding => Some(Responded(Outcome::Success)),
            Responded(_) => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, SearchStage::Responded(_))
    }

    pub fn can_transition_to(self, to: SearchStage) -> bool {
        use SearchStage::*;
        match (self, to) {
            (Responded(_), _) => false,
            (Enriching, Responding) => true,
            (Responding, Responded(outcome)) => outcome == Outcome::Success,
            (_, Responded(outcome)) => outcome != Outcome::Success,
            (from, to) => from.next() == Some(to),
        }
    }
}
