/// Periop version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Model family reported by model info.
pub const MODEL_KIND: &str = "linear-svm";

/// Number of schema features listed in a model info preview.
pub const SELECTED_FEATURE_PREVIEW: usize = 10;

/// Label of the positive class.
pub const POSITIVE_LABEL: &str = "Positive";

/// Label of the negative class.
pub const NEGATIVE_LABEL: &str = "Negative";

/// Origin reported for artifacts parsed from an in-memory string.
pub const INLINE_ORIGIN: &str = "<inline>";

/// Environment variable read by `tracing::init_tracing`.
pub const LOG_ENV_VAR: &str = "PERIOP_LOG";

/// Project config file name looked up by `PeriopConfig::load`.
pub const CONFIG_FILENAME: &str = "periop.toml";

/// Categorical fields of the clinical feature inventory.
pub const CATEGORICAL_FEATURES: [&str; 6] = [
    "性别",       // sex
    "糖尿病史",   // diabetes history
    "高血压",     // hypertension
    "前亚硝酸盐", // pre-op urine nitrite
    "ASA",        // ASA physical status
    "结石位置",   // stone location
];

/// Numerical fields of the clinical feature inventory.
pub const NUMERICAL_FEATURES: [&str; 23] = [
    "年龄",       // age
    "身高",       // height
    "体重",       // weight
    "BMI",
    "前白细胞",   // pre-op white cell count
    "前中性粒",   // pre-op neutrophils
    "前血小板",   // pre-op platelets
    "前淋巴细胞", // pre-op lymphocytes
    "NLR",
    "PLR",
    "LMR",
    "前红细胞",   // pre-op red cell count
    "前血红蛋白", // pre-op haemoglobin
    "前单核细胞", // pre-op monocytes
    "前尿白细胞", // pre-op urine white cells
    "前肌酐",     // pre-op creatinine
    "前尿素",     // pre-op urea
    "前尿酸",     // pre-op uric acid
    "总蛋白",     // total protein
    "白蛋白",     // albumin
    "球蛋白",     // globulin
    "白球比",     // albumin/globulin ratio
    "手术时间",   // operation time (minutes)
];
