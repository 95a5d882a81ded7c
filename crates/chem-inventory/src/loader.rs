//! Lectura del inventario a memoria.
//!
//! Notas:
//! - Las cabeceras se buscan por nombre exacto (tras recortar espacios); su
//!   orden en el fichero es indiferente.
//! - Las filas cortas se aceptan: las celdas que faltan quedan en `None`.
//! - Que una columna requerida exista se comprueba con `Inventory::require`
//!   en el momento en que se necesita, no al cargar.
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use chem_domain::InventoryRow;
use csv::{ReaderBuilder, Trim};
use log::debug;

use crate::columns::{Column, ColumnMap};
use crate::InventoryError;

/// Nombre del fichero de inventario por defecto, relativo al directorio de trabajo.
pub const DEFAULT_INVENTORY_FILE: &str = "Walczak-Inventory.csv";

/// Ubicación del fichero de inventario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySource {
    path: PathBuf,
}

impl InventorySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lee el fichero completo. No hay caché: cada llamada vuelve a disco.
    pub fn load(&self) -> Result<Inventory, InventoryError> {
        let file = File::open(&self.path).map_err(|source| match source.kind() {
                                             io::ErrorKind::NotFound => InventoryError::NotFound { path: self.path.clone() },
                                             _ => InventoryError::Io { path: self.path.clone(),
                                                                       source },
                                         })?;
        let inventory = Inventory::from_reader(file)?;
        debug!("loaded {} inventory rows from {}", inventory.len(), self.path.display());
        Ok(inventory)
    }
}

impl Default for InventorySource {
    fn default() -> Self {
        Self::new(DEFAULT_INVENTORY_FILE)
    }
}

/// Inventario en memoria, en el orden del fichero.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    columns: ColumnMap,
    rows: Vec<InventoryRow>,
}

impl Inventory {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, InventoryError> {
        let mut reader = ReaderBuilder::new().flexible(true).trim(Trim::All).from_reader(reader);
        let headers = reader.headers()?.clone();
        let columns = ColumnMap::from_headers(&headers);

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(InventoryRow { name: columns.cell(&record, Column::ChemicalName),
                                     cas: columns.cell(&record, Column::CasNumber),
                                     chemical_id: columns.cell(&record, Column::ChemicalId),
                                     quantity: columns.cell(&record, Column::Qty),
                                     units: columns.cell(&record, Column::Units),
                                     room: columns.cell(&record, Column::Room),
                                     location1: columns.cell(&record, Column::Location1),
                                     location2: columns.cell(&record, Column::Location2),
                                     pubchem_id: columns.cell(&record, Column::PubChemId) });
        }
        Ok(Self { columns, rows })
    }

    pub fn rows(&self) -> &[InventoryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: Column) -> bool {
        self.columns.contains(column)
    }

    /// Falla con `MissingColumn` para la primera columna de `columns` ausente.
    pub fn require(&self, columns: &[Column]) -> Result<(), InventoryError> {
        match columns.iter().find(|c| !self.has_column(**c)) {
            Some(missing) => Err(InventoryError::MissingColumn(missing.header())),
            None => Ok(()),
        }
    }
}
