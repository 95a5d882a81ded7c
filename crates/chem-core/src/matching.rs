//! Cruce entre los hits de PubChem y el inventario.
//!
//! Con `MatchKey::NameOrCas` una fila coincide si su nombre está en el
//! conjunto de nombres **o** su CAS está en el conjunto de CAS (unión, no
//! intersección). Con `MatchKey::PubChemId` coincide si su `PubChem_ID` es uno
//! de los CIDs devueltos por la búsqueda de similitud.
use std::fmt;
use std::str::FromStr;

use chem_domain::{Cid, CompoundProperties, InventoryMatch, InventoryRow};
use chem_inventory::{Column, Inventory, InventoryError};
use indexmap::IndexSet;

/// Columnas leídas sin valor por defecto al proyectar una coincidencia.
pub const PROJECTED_COLUMNS: [Column; 5] = [Column::CasNumber, Column::ChemicalId, Column::Room, Column::Location1, Column::Location2];

/// Clave de cruce con el inventario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchKey {
    #[default]
    NameOrCas,
    PubChemId,
}

impl MatchKey {
    /// Columnas que deben existir para poder filtrar.
    pub fn key_columns(self) -> &'static [Column] {
        match self {
            MatchKey::NameOrCas => &[Column::ChemicalName, Column::CasNumber],
            MatchKey::PubChemId => &[Column::PubChemId],
        }
    }
}

impl FromStr for MatchKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name_or_cas" => Ok(MatchKey::NameOrCas),
            "pubchem_id" => Ok(MatchKey::PubChemId),
            other => Err(format!("unknown match key '{other}' (expected name_or_cas or pubchem_id)")),
        }
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKey::NameOrCas => f.write_str("name_or_cas"),
            MatchKey::PubChemId => f.write_str("pubchem_id"),
        }
    }
}

/// Conjuntos agregados sobre todos los hits de una búsqueda.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSets {
    names: IndexSet<String>,
    cas_numbers: IndexSet<String>,
    cids: IndexSet<Cid>,
}

impl MatchSets {
    pub fn add_hit(&mut self, cid: Cid) {
        self.cids.insert(cid);
    }

    /// Incorpora nombre y CAS presentes; los ausentes no aportan nada.
    pub fn absorb(&mut self, props: &CompoundProperties) {
        if let Some(name) = props.name.as_deref().filter(|s| !s.trim().is_empty()) {
            self.names.insert(name.to_string());
        }
        if let Some(cas) = props.cas.as_deref().filter(|s| !s.trim().is_empty()) {
            self.cas_numbers.insert(cas.to_string());
        }
    }

    pub fn names(&self) -> &IndexSet<String> { &self.names }
    pub fn cas_numbers(&self) -> &IndexSet<String> { &self.cas_numbers }
    pub fn cids(&self) -> &IndexSet<Cid> { &self.cids }
}

// Spreadsheet exports turn integer columns with gaps into floats ("180.0").
fn parse_pubchem_id(raw: &str) -> Option<Cid> {
    let raw = raw.trim();
    if let Ok(v) = raw.parse::<u64>() {
        return Some(Cid(v));
    }
    match raw.parse::<f64>() {
        Ok(v) if v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64 => Some(Cid(v as u64)),
        _ => None,
    }
}

pub fn row_matches(row: &InventoryRow, sets: &MatchSets, key: MatchKey) -> bool {
    match key {
        MatchKey::NameOrCas => {
            row.name.as_ref().is_some_and(|n| sets.names.contains(n))
            || row.cas.as_ref().is_some_and(|c| sets.cas_numbers.contains(c))
        }
        MatchKey::PubChemId => row.pubchem_id
                                  .as_deref()
                                  .and_then(parse_pubchem_id)
                                  .is_some_and(|cid| sets.cids.contains(&cid)),
    }
}

/// Filtra `inventory` y proyecta las filas que coinciden, en orden de fichero.
///
/// # Errores
/// `InventoryError::MissingColumn` si falta una columna de la clave, o si hay
/// al menos una coincidencia y falta alguna de `PROJECTED_COLUMNS`.
pub fn match_inventory(inventory: &Inventory, sets: &MatchSets, key: MatchKey) -> Result<Vec<InventoryMatch>, InventoryError> {
    inventory.require(key.key_columns())?;
    let matched: Vec<&InventoryRow> = inventory.rows().iter().filter(|row| row_matches(row, sets, key)).collect();
    if !matched.is_empty() {
        inventory.require(&PROJECTED_COLUMNS)?;
    }
    Ok(matched.into_iter().map(InventoryMatch::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets_with(name: Option<&str>, cas: Option<&str>) -> MatchSets {
        let mut sets = MatchSets::default();
        sets.absorb(&CompoundProperties::new(Cid(1), name.map(str::to_string), cas.map(str::to_string)));
        sets
    }

    fn acetone_row() -> InventoryRow {
        InventoryRow { name: Some("Acetone".into()),
                       cas: Some("67-64-1".into()),
                       ..Default::default() }
    }

    #[test]
    fn test_name_alone_matches() {
        assert!(row_matches(&acetone_row(), &sets_with(Some("Acetone"), None), MatchKey::NameOrCas));
    }

    #[test]
    fn test_cas_alone_matches() {
        assert!(row_matches(&acetone_row(), &sets_with(Some("propan-2-one"), Some("67-64-1")), MatchKey::NameOrCas));
    }

    #[test]
    fn test_neither_matches() {
        assert!(!row_matches(&acetone_row(), &sets_with(Some("Ethanol"), Some("64-17-5")), MatchKey::NameOrCas));
        assert!(!row_matches(&InventoryRow::default(), &sets_with(None, None), MatchKey::NameOrCas));
    }

    #[test]
    fn test_matching_is_exact() {
        assert!(!row_matches(&acetone_row(), &sets_with(Some("acetone"), None), MatchKey::NameOrCas));
    }

    #[test]
    fn test_pubchem_id_key() {
        let mut sets = MatchSets::default();
        sets.add_hit(Cid(180));
        let row = InventoryRow { pubchem_id: Some("180.0".into()), ..Default::default() };
        assert!(row_matches(&row, &sets, MatchKey::PubChemId));
        let other = InventoryRow { pubchem_id: Some("702".into()), ..acetone_row() };
        assert!(!row_matches(&other, &sets, MatchKey::PubChemId));
        let bad = InventoryRow { pubchem_id: Some("n/a".into()), ..Default::default() };
        assert!(!row_matches(&bad, &sets, MatchKey::PubChemId));
    }

    #[test]
    fn test_parse_pubchem_id() {
        assert_eq!(parse_pubchem_id(" 2244 "), Some(Cid(2244)));
        assert_eq!(parse_pubchem_id("2244.0"), Some(Cid(2244)));
        assert_eq!(parse_pubchem_id("2244.5"), None);
        assert_eq!(parse_pubchem_id("-3"), None);
    }

    #[test]
    fn test_match_key_from_str() {
        assert_eq!("name_or_cas".parse::<MatchKey>().unwrap(), MatchKey::NameOrCas);
        assert_eq!(" PubChem_ID ".parse::<MatchKey>().unwrap(), MatchKey::PubChemId);
        assert!("inchikey".parse::<MatchKey>().is_err());
        assert_eq!(MatchKey::PubChemId.to_string(), "pubchem_id");
    }

    #[test]
    fn test_match_inventory_projects_in_file_order() {
        let csv = "\
ChemicalName,CASNumber,ChemicalID,Qty,Units,Room,Location1,Location2
Ethanol,64-17-5,1,1,L,101,A,B
Acetone,67-64-1,2,,mL,102,C,D
Dimethyl ketone,67-64-1,3,250,mL,103,E,F
";
        let inv = Inventory::from_reader(csv.as_bytes()).unwrap();
        let matches = match_inventory(&inv, &sets_with(Some("Acetone"), Some("67-64-1")), MatchKey::NameOrCas).unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].id, "2");
        assert_eq!(matches[0].quantity, "N/A mL");
        assert_eq!(matches[1].name, "Dimethyl ketone");
    }

    #[test]
    fn test_missing_key_column_fails_even_without_matches() {
        let inv = Inventory::from_reader("ChemicalName,Room\nAcetone,101\n".as_bytes()).unwrap();
        let err = match_inventory(&inv, &sets_with(Some("Water"), None), MatchKey::NameOrCas).unwrap_err();
        assert!(matches!(err, InventoryError::MissingColumn("CASNumber")));
    }

    #[test]
    fn test_missing_projected_column_only_fails_on_match() {
        let csv = "ChemicalName,CASNumber,ChemicalID,Room,Location1\nAcetone,67-64-1,2,101,A\n";
        let inv = Inventory::from_reader(csv.as_bytes()).unwrap();
        assert!(match_inventory(&inv, &sets_with(Some("Water"), None), MatchKey::NameOrCas).unwrap().is_empty());
        let err = match_inventory(&inv, &sets_with(Some("Acetone"), None), MatchKey::NameOrCas).unwrap_err();
        assert!(matches!(err, InventoryError::MissingColumn("Location2")));
    }

    #[test]
    fn test_sets_keep_insertion_order_and_dedupe() {
        let mut sets = MatchSets::default();
        for (cid, name) in [(1, "b"), (2, "a"), (3, "b")] {
            sets.add_hit(Cid(cid));
            sets.absorb(&CompoundProperties::new(Cid(cid), Some(name.into()), None));
        }
        assert_eq!(sets.names().iter().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(sets.cids().len(), 3);
        assert!(sets.cas_numbers().is_empty());
    }
}
