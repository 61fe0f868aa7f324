mod settings;

pub use settings::{
    CatalogConfig, JwtConfig, LocalizationConfig, OtelConfig, RedisConfig, SenderBackend,
    SenderConfig, ServerConfig, Settings,
};
