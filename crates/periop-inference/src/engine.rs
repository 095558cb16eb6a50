//! The public entry point: a model registry plus batch policy.

use periop_core::config::{BatchConfig, PeriopConfig};
use periop_core::errors::{ModelError, PeriopResult};
use periop_core::models::{
    BatchEntry, FeatureCatalog, HealthStatus, ModelInfo, PredictionResult, Record, TemplateRow,
};
use periop_core::predict_span;
use periop_core::tracing::init_tracing_from_config;
use periop_core::traits::IPredictor;

use crate::batch::{BatchRunner, BatchStream, TabularRows};
use crate::handle::ModelHandle;
use crate::loader::ModelSource;
use crate::pipeline;
use crate::registry::ModelRegistry;
use crate::template;

#[derive(Debug)]
pub struct InferenceEngine {
    registry: ModelRegistry,
    batch: BatchConfig,
}

impl InferenceEngine {
    /// Build from resolved configuration. With `model.lazy = false` the
    /// model is loaded here and a load failure is returned.
    ///
    /// Installs the tracing subscriber if none is installed yet.
    pub fn from_config(config: &PeriopConfig) -> PeriopResult<Self> {
        init_tracing_from_config(&config.observability);
        let source = match &config.model.path {
            Some(path) => ModelSource::File(path.clone()),
            None => ModelSource::Defaults,
        };
        let engine = Self {
            registry: ModelRegistry::new(source, config.model.fallback_to_defaults),
            batch: config.batch.clone(),
        };
        if !config.model.lazy {
            engine.registry.handle()?;
        }
        Ok(engine)
    }

    /// Serve an already loaded model.
    pub fn with_handle(handle: ModelHandle, batch: BatchConfig) -> Self {
        Self::with_registry(ModelRegistry::preloaded(handle), batch)
    }

    pub fn with_registry(registry: ModelRegistry, batch: BatchConfig) -> Self {
        Self { registry, batch }
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn handle(&self) -> Result<ModelHandle, ModelError> {
        self.registry.handle()
    }

    /// Score a single record.
    pub fn predict_one(&self, record: &Record) -> PeriopResult<PredictionResult> {
        let handle = self.registry.handle()?;
        let _span = predict_span!(handle.model_id()).entered();
        pipeline::predict_record(&handle, record, None)
    }

    /// Score a materialized batch, one entry per record in input order.
    pub fn predict_batch(&self, records: &[Record]) -> PeriopResult<Vec<BatchEntry>> {
        Ok(self.runner()?.run(records)?)
    }

    /// Stream a tabular batch. The declared header is checked once up front,
    /// then rows are scored lazily as the stream is pulled.
    pub fn predict_tabular<R, S>(
        &self,
        columns: Vec<String>,
        rows: R,
    ) -> PeriopResult<BatchStream<TabularRows<R::IntoIter>>>
    where
        R: IntoIterator<Item = Vec<S>>,
        S: AsRef<str>,
    {
        let runner = self.runner()?;
        let records = TabularRows::new(columns.clone(), rows.into_iter());
        Ok(runner.stream_with_header(&columns, records)?)
    }

    /// Top `top_k` feature contributions to one record's decision score.
    pub fn explain(&self, record: &Record, top_k: usize) -> PeriopResult<Vec<(String, f64)>> {
        let handle = self.registry.handle()?;
        pipeline::explain_record(&handle, record, top_k)
    }

    pub fn model_info(&self) -> PeriopResult<ModelInfo> {
        Ok(self.registry.handle()?.info())
    }

    pub fn feature_catalog(&self) -> FeatureCatalog {
        template::feature_catalog()
    }

    /// Column header plus one example row for the active schema.
    pub fn template(&self) -> PeriopResult<TemplateRow> {
        Ok(template::template_for(self.registry.handle()?.schema()))
    }

    pub fn health(&self) -> HealthStatus {
        self.registry.health()
    }

    fn runner(&self) -> Result<BatchRunner, ModelError> {
        Ok(BatchRunner::new(self.registry.handle()?, self.batch.clone()))
    }
}

impl IPredictor for InferenceEngine {
    fn predict_one(&self, record: &Record) -> PeriopResult<PredictionResult> {
        InferenceEngine::predict_one(self, record)
    }

    fn predict_batch(&self, records: &[Record]) -> PeriopResult<Vec<BatchEntry>> {
        InferenceEngine::predict_batch(self, records)
    }
}
