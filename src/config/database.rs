//! Configuración de base de datos
//!
//! Este módulo maneja la conexión y configuración de PostgreSQL con SQLx.
//! El tamaño del pool se ajusta por variables de entorno, igual que el
//! resto de la configuración (ver environment.rs).

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::env;
use std::time::Duration;

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::with_url(
            env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment variables"),
        )
    }
}

impl DatabaseConfig {
    /// Configuración para una URL concreta, con tamaños de pool tomados
    /// del entorno (DB_MAX_CONNECTIONS / DB_MIN_CONNECTIONS) o por defecto
    pub fn with_url(url: String) -> Self {
        Self {
            url,
            max_connections: env_u32("DB_MAX_CONNECTIONS", 20),
            min_connections: env_u32("DB_MIN_CONNECTIONS", 5),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(3600),
        }
    }

    /// Crear un nuevo pool de conexiones
    pub async fn create_pool(&self) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .connect(&self.url)
            .await
    }
}

/// Leer una variable de entorno numérica con valor por defecto
fn env_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_u32_falls_back_to_default() {
        assert_eq!(env_u32("RENTACAR_DB_VAR_QUE_NO_EXISTE", 7), 7);
    }

    #[test]
    fn test_with_url_keeps_the_url_and_pool_bounds() {
        let config = DatabaseConfig::with_url("postgresql://localhost/rentacar".to_string());
        assert_eq!(config.url, "postgresql://localhost/rentacar");
        assert!(config.min_connections <= config.max_connections);
    }
}
