use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use periop_core::config::PeriopConfig;
use periop_core::errors::{error_code, ModelError, PeriopError, PeriopErrorCode};
use periop_core::models::{ModelProvenance, Record};
use periop_inference::{load_model_or_defaults, InferenceEngine, ModelHandle, ModelRegistry, ModelSource};

#[test]
fn concurrent_first_use_loads_once() {
    let loads = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&loads);
    let registry = Arc::new(ModelRegistry::with_loader(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        thread::sleep(std::time::Duration::from_millis(20));
        ModelHandle::builtin()
    }));

    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));
    let workers: Vec<_> = (0..threads)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry.handle().unwrap()
            })
        })
        .collect();

    let handles: Vec<ModelHandle> = workers.into_iter().map(|w| w.join().unwrap()).collect();

    assert_eq!(loads.load(Ordering::SeqCst), 1);
    assert!(handles.iter().all(|h| h.ptr_eq(&handles[0])));
}

#[test]
fn later_reads_reuse_loaded_handle() {
    let registry = ModelRegistry::new(ModelSource::Defaults, false);
    assert!(!registry.is_loaded());
    assert!(registry.get().is_none());

    let first = registry.handle().unwrap();
    assert!(registry.is_loaded());
    assert!(registry.get().unwrap().ptr_eq(&first));
    assert!(registry.handle().unwrap().ptr_eq(&first));
}

#[test]
fn failed_load_without_fallback_is_not_loaded() {
    let registry = ModelRegistry::new(
        ModelSource::File(test_fixtures::model_path("malformed")),
        false,
    );
    let err = registry.handle().unwrap_err();

    assert!(matches!(err, ModelError::NotLoaded { .. }));
    assert_eq!(err.error_code(), error_code::MODEL_NOT_LOADED);
    assert!(!registry.health().model_loaded);
}

#[test]
fn degraded_mode_is_visible() {
    let handle = load_model_or_defaults(&ModelSource::File(test_fixtures::model_path("zero_scale"))).unwrap();

    assert!(handle.is_degraded());
    match handle.provenance() {
        ModelProvenance::Defaults { reason } => assert!(reason.contains("scale")),
        other => panic!("unexpected provenance: {other:?}"),
    }

    let engine = InferenceEngine::with_handle(handle, Default::default());
    let health = engine.health();
    assert_eq!(health.status, "degraded");
    assert!(health.degraded);
    assert!(engine.model_info().unwrap().degraded);
}

#[test]
fn explicit_defaults_are_not_degraded() {
    let engine = InferenceEngine::with_registry(
        ModelRegistry::new(ModelSource::Defaults, false),
        Default::default(),
    );
    let info = engine.model_info().unwrap();

    assert_eq!(info.provenance, ModelProvenance::Builtin);
    assert!(!info.degraded);
    assert_eq!(engine.health().status, "healthy");
}

#[test]
fn engine_from_config_loads_eagerly() {
    let config = PeriopConfig::from_toml(&format!(
        "[model]\npath = {:?}\nlazy = false\nfallback_to_defaults = false\n",
        test_fixtures::model_path("two_feature").display().to_string()
    ))
    .unwrap();
    let engine = InferenceEngine::from_config(&config).unwrap();

    assert!(engine.registry().is_loaded());
    assert_eq!(engine.model_info().unwrap().model_id, "two-feature");
}

#[test]
fn eager_load_failure_surfaces_from_constructor() {
    let config = PeriopConfig::from_toml(
        "[model]\npath = \"/nonexistent/periop/model.json\"\nlazy = false\nfallback_to_defaults = false\n",
    )
    .unwrap();
    let err = InferenceEngine::from_config(&config).unwrap_err();

    assert!(matches!(err, PeriopError::Model(ModelError::NotLoaded { .. })));
}

#[test]
fn lazy_engine_loads_on_first_prediction() {
    let config = PeriopConfig::from_toml(
        "[model]\npath = \"/nonexistent/periop/model.json\"\nlazy = true\nfallback_to_defaults = true\n",
    )
    .unwrap();
    let engine = InferenceEngine::from_config(&config).unwrap();
    assert!(!engine.registry().is_loaded());
    assert_eq!(engine.health().status, "unloaded");

    engine.predict_one(&Record::new().with("年龄", 60)).unwrap();

    assert!(engine.registry().is_loaded());
    assert_eq!(engine.health().status, "degraded");
}

#[test]
fn unloaded_engine_rejects_predictions() {
    let engine = InferenceEngine::with_registry(ModelRegistry::unloaded(), Default::default());
    let err = engine.predict_one(&Record::new()).unwrap_err();

    assert_eq!(err.error_code(), error_code::MODEL_NOT_LOADED);
    assert!(err.boundary_string().starts_with("[MODEL_NOT_LOADED]"));
}
