//! chem-inventory
//!
//! Carga del inventario de laboratorio desde un fichero CSV plano (una fila
//! por producto almacenado). El fichero pertenece a un tercero: aquí sólo se
//! lee, nunca se escribe, y se vuelve a leer en cada búsqueda.
//!
//! Módulos:
//! - `columns`: cabeceras conocidas y su posición en el fichero.
//! - `loader`: `InventorySource` (ruta configurada) e `Inventory` en memoria.
//! - `error`: fallos de carga, distinguiendo "fichero no encontrado".

pub mod columns;
pub mod error;
pub mod loader;

pub use columns::Column;
pub use error::InventoryError;
pub use loader::{Inventory, InventorySource, DEFAULT_INVENTORY_FILE};
