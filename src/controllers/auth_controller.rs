//! Controller de autenticación
//!
//! Registro y login con bcrypt + JWT. No hay refresh tokens ni sesiones:
//! el token expira y el cliente vuelve a hacer login.

use sqlx::PgPool;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
use crate::dto::common::ApiResponse;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};
use crate::utils::password::{hash_password, verify_password};

pub struct AuthController {
    repository: UserRepository,
    jwt_config: JwtConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            repository: UserRepository::new(pool),
            jwt_config: JwtConfig::from(config),
        }
    }

    pub async fn register(
        &self,
        request: RegisterRequest,
    ) -> Result<ApiResponse<AuthResponse>, AppError> {
        request.validate()?;

        // El registro público solo admite clientes y vendors
        if !request.role.self_registrable() {
            return Err(AppError::Forbidden(
                "No se puede registrar un usuario con ese rol".to_string(),
            ));
        }

        if self.repository.email_exists(&request.email).await? {
            return Err(AppError::Conflict(
                "El email ya está registrado".to_string(),
            ));
        }

        let password_hash = hash_password(&request.password)?;

        let user = self
            .repository
            .create(request.full_name, request.email, password_hash, request.role)
            .await?;

        let token = generate_token(user.id, user.role.as_str(), &self.jwt_config)?;

        log::info!("Usuario {} registrado con rol '{}'", user.id, user.role.as_str());

        Ok(ApiResponse::success_with_message(
            AuthResponse {
                token,
                user: UserResponse::from(user),
            },
            "Usuario registrado exitosamente".to_string(),
        ))
    }

    pub async fn login(
        &self,
        request: LoginRequest,
    ) -> Result<ApiResponse<AuthResponse>, AppError> {
        request.validate()?;

        let user = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        if !verify_password(&request.password, &user.password_hash)? {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = generate_token(user.id, user.role.as_str(), &self.jwt_config)?;

        Ok(ApiResponse::success(AuthResponse {
            token,
            user: UserResponse::from(user),
        }))
    }
}
