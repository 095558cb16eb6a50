//! Input templates and the clinical feature inventory.

use periop_core::models::{FeatureCatalog, TemplateRow};

use crate::defaults::TEMPLATE_EXAMPLE;
use crate::schema::FeatureSchema;

/// Schema columns with one example value each. Features without a known
/// example value get 0.
pub fn template_for(schema: &FeatureSchema) -> TemplateRow {
    let example = schema
        .iter()
        .map(|feature| {
            TEMPLATE_EXAMPLE
                .iter()
                .find(|(name, _)| *name == feature)
                .map(|(_, value)| *value)
                .unwrap_or(0.0)
        })
        .collect();
    TemplateRow {
        columns: schema.names().to_vec(),
        example,
    }
}

/// The full clinical feature inventory the model schemas are drawn from.
pub fn feature_catalog() -> FeatureCatalog {
    FeatureCatalog::default()
}
