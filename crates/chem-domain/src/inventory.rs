//! Filas del inventario de laboratorio y su proyección pública.
//!
//! `InventoryRow` conserva las celdas tal como se leyeron (celda vacía =>
//! `None`). Los marcadores de ausencia ("N/A", cadena vacía) sólo aparecen al
//! proyectar a `InventoryMatch`, que es lo que se serializa en la respuesta.
use serde::{Deserialize, Serialize};

const MISSING: &str = "N/A";

/// Una fila del fichero de inventario (un producto almacenado).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryRow {
    pub name: Option<String>,
    pub cas: Option<String>,
    pub chemical_id: Option<String>,
    pub quantity: Option<String>,
    pub units: Option<String>,
    pub room: Option<String>,
    pub location1: Option<String>,
    pub location2: Option<String>,
    pub pubchem_id: Option<String>,
}

impl InventoryRow {
    /// Texto de cantidad con el formato `"<Qty> <Units>"`.
    pub fn quantity_label(&self) -> String {
        format!("{} {}",
                self.quantity.as_deref().unwrap_or(MISSING),
                self.units.as_deref().unwrap_or(""))
    }
}

/// Proyección pública de una fila que coincide con algún hit de PubChem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryMatch {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "CAS")]
    pub cas: String,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Quantity")]
    pub quantity: String,
    #[serde(rename = "Room")]
    pub room: String,
    #[serde(rename = "Location1")]
    pub location1: String,
    #[serde(rename = "Location2")]
    pub location2: String,
}

impl From<&InventoryRow> for InventoryMatch {
    fn from(row: &InventoryRow) -> Self {
        let cell = |v: &Option<String>| v.clone().unwrap_or_default();
        InventoryMatch { name: row.name.clone().unwrap_or_else(|| MISSING.to_string()),
                         cas: cell(&row.cas),
                         id: cell(&row.chemical_id),
                         quantity: row.quantity_label(),
                         room: cell(&row.room),
                         location1: cell(&row.location1),
                         location2: cell(&row.location2) }
    }
}
