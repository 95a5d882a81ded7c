//! Cabeceras conocidas del fichero de inventario.
use csv::StringRecord;

/// Columnas que el sistema sabe interpretar. Las demás se ignoran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    ChemicalName,
    CasNumber,
    ChemicalId,
    Qty,
    Units,
    Room,
    Location1,
    Location2,
    PubChemId,
}

impl Column {
    pub const ALL: [Column; 9] = [Column::ChemicalName,
                                  Column::CasNumber,
                                  Column::ChemicalId,
                                  Column::Qty,
                                  Column::Units,
                                  Column::Room,
                                  Column::Location1,
                                  Column::Location2,
                                  Column::PubChemId];

    /// Nombre exacto de la cabecera en el fichero.
    pub fn header(self) -> &'static str {
        match self {
            Column::ChemicalName => "ChemicalName",
            Column::CasNumber => "CASNumber",
            Column::ChemicalId => "ChemicalID",
            Column::Qty => "Qty",
            Column::Units => "Units",
            Column::Room => "Room",
            Column::Location1 => "Location1",
            Column::Location2 => "Location2",
            Column::PubChemId => "PubChem_ID",
        }
    }

    // `ALL` sigue el orden de declaración.
    fn index(self) -> usize {
        self as usize
    }
}

/// Posición de cada columna conocida dentro de la cabecera leída.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    positions: [Option<usize>; 9],
}

impl ColumnMap {
    pub fn from_headers(headers: &StringRecord) -> Self {
        let mut positions = [None; 9];
        for column in Column::ALL {
            positions[column.index()] = headers.iter().position(|h| h.trim() == column.header());
        }
        Self { positions }
    }

    pub fn position(&self, column: Column) -> Option<usize> {
        self.positions[column.index()]
    }

    pub fn contains(&self, column: Column) -> bool {
        self.position(column).is_some()
    }

    /// Valor de `column` en `record`; celda ausente o vacía => `None`.
    pub fn cell(&self, record: &StringRecord, column: Column) -> Option<String> {
        self.position(column)
            .and_then(|idx| record.get(idx))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}
