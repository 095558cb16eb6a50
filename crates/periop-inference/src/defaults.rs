//! Documented default parameters for the 17-feature clinical model.
//!
//! Served in degraded mode when no artifact can be loaded, and the
//! reference parameters for the deployed predictor.

/// Identifier reported for the default parameter set.
pub const DEFAULT_MODEL_ID: &str = "periop-default-v1";

pub const DEFAULT_MODEL_VERSION: &str = "1.0.0";

/// Feature count of the default schema.
pub const DEFAULT_FEATURE_COUNT: usize = 17;

/// Schema order of the default model.
pub const DEFAULT_FEATURES: [&str; DEFAULT_FEATURE_COUNT] = [
    "性别",
    "年龄",
    "高血压",
    "BMI",
    "前白细胞",
    "前血小板",
    "前淋巴细胞",
    "NLR",
    "前红细胞",
    "前血红蛋白",
    "前单核细胞",
    "前尿白细胞",
    "前肌酐",
    "前尿酸",
    "白蛋白",
    "球蛋白",
    "手术时间",
];

/// Per-feature means.
pub const DEFAULT_CENTER: [f64; DEFAULT_FEATURE_COUNT] = [
    0.5, 45.0, 0.3, 25.0, 7.0, 250.0, 2.0, 3.0, 4.5, 140.0, 0.15, 0.08, 80.0, 300.0, 40.0, 30.0,
    120.0,
];

/// Per-feature standard deviations.
pub const DEFAULT_SCALE: [f64; DEFAULT_FEATURE_COUNT] = [
    0.5, 15.0, 0.5, 5.0, 3.0, 100.0, 1.0, 2.0, 2.0, 20.0, 0.1, 0.05, 20.0, 100.0, 10.0, 10.0, 60.0,
];

pub const DEFAULT_WEIGHTS: [f64; DEFAULT_FEATURE_COUNT] = [
    0.1,   // 性别 sex
    -0.05, // 年龄 age
    0.2,   // 高血压 hypertension
    0.15,  // BMI
    0.1,   // 前白细胞 white cells
    -0.08, // 前血小板 platelets
    0.12,  // 前淋巴细胞 lymphocytes
    0.18,  // NLR
    -0.1,  // 前红细胞 red cells
    -0.15, // 前血红蛋白 haemoglobin
    0.2,   // 前单核细胞 monocytes
    0.25,  // 前尿白细胞 urine white cells
    0.1,   // 前肌酐 creatinine
    0.05,  // 前尿酸 uric acid
    -0.2,  // 白蛋白 albumin
    0.1,   // 球蛋白 globulin
    0.08,  // 手术时间 operation time
];

/// Biased toward the negative class.
pub const DEFAULT_INTERCEPT: f64 = -0.5;

/// Example patient used for input templates.
pub const TEMPLATE_EXAMPLE: [(&str, f64); DEFAULT_FEATURE_COUNT] = [
    ("性别", 1.0), // 1 = male
    ("年龄", 65.0),
    ("高血压", 1.0), // 1 = present
    ("BMI", 24.5),
    ("前白细胞", 6.5),
    ("前血小板", 200.0),
    ("前淋巴细胞", 1.8),
    ("NLR", 2.5),
    ("前红细胞", 4.5),
    ("前血红蛋白", 140.0),
    ("前单核细胞", 0.5),
    ("前尿白细胞", 0.0),
    ("前肌酐", 80.0),
    ("前尿酸", 350.0),
    ("白蛋白", 40.0),
    ("球蛋白", 25.0),
    ("手术时间", 120.0),
];
