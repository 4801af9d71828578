//! Utilidades de hashing de contraseñas
//!
//! Wrapper fino sobre bcrypt para registro y login.

use crate::utils::errors::AppError;

/// Hashear una contraseña en texto plano
pub fn hash_password(password: &str) -> Result<String, AppError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::Hash(format!("Error hasheando contraseña: {}", e)))
}

/// Verificar una contraseña contra su hash almacenado
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    bcrypt::verify(password, hash)
        .map_err(|e| AppError::Hash(format!("Error verificando contraseña: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("s3creto").unwrap();
        assert!(verify_password("s3creto", &hash).unwrap());
        assert!(!verify_password("otra", &hash).unwrap());
    }
}
