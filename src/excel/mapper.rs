//! Row-to-entity mapping: header row + data rows → entities per kind

use crate::error::ImportResult;
use crate::excel::classifier::SheetClassifier;
use crate::excel::reader::{Row, Workbook, Worksheet};
use crate::types::{Entity, EntityCollection, SheetClassification};
use tracing::debug;

/// Builds an [`EntityCollection`] from every worksheet of a workbook
pub struct EntityMapper {
    classifier: SheetClassifier,
}

impl EntityMapper {
    pub fn new() -> ImportResult<Self> {
        Ok(Self {
            classifier: SheetClassifier::new()?,
        })
    }

    pub fn map_workbook(&self, workbook: &Workbook) -> EntityCollection {
        let mut collection = EntityCollection::new();

        for sheet in &workbook.sheets {
            let (classification, entities) = self.map_sheet(sheet);
            debug!(
                sheet = %sheet.name,
                kind = %classification.kind,
                subclass = ?classification.subclass,
                entities = entities.len(),
                "mapped worksheet"
            );
            if classification.entity_kind().is_none() {
                debug!(sheet = %sheet.name, "no importer reads kind '{}'", classification.kind);
            }
            collection.extend(classification.kind, entities);
        }

        collection
    }

    pub fn map_sheet(&self, sheet: &Worksheet) -> (SheetClassification, Vec<Entity>) {
        let classification = self.classifier.classify(&sheet.name);
        let entities = match sheet.header() {
            Some(header) => map_rows(
                header,
                sheet.data_rows(),
                classification.subclass.as_deref(),
            ),
            None => Vec::new(),
        };
        (classification, entities)
    }
}

/// One entity per data row, blank rows included
///
/// Cells under an empty header, or right of the header, are dropped.
pub fn map_rows(header: &[Option<String>], rows: &[Row], subclass: Option<&str>) -> Vec<Entity> {
    rows.iter()
        .map(|row| {
            let mut entity = match subclass {
                Some(class) => Entity::with_class(class),
                None => Entity::new(),
            };
            for (column, cell) in row.iter().enumerate() {
                let Some(value) = cell else { continue };
                let Some(Some(name)) = header.get(column) else {
                    continue;
                };
                entity.insert(name.as_str(), value.as_str());
            }
            entity
        })
        .collect()
}
