use crate::config::AppConfig;
use crate::models::users::entities::User;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,   // Subject (用户 ID)
    pub name: String,  // 展示姓名
    pub email: String, // 邮箱
    pub role: String,  // 用户角色
    pub iat: usize,    // Issued at (签发时间)
    pub exp: usize,    // Expiration time (时间戳)
    pub iss: String,   // Issuer
    pub aud: String,   // Audience
}

pub struct JwtUtils;

impl JwtUtils {
    // 获取 JWT 密钥
    fn get_secret() -> String {
        AppConfig::get().jwt.secret.clone()
    }

    // 生成 Access Token
    pub fn generate_access_token(user: &User) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        let now = chrono::Utc::now();
        let expiration = now + chrono::Duration::minutes(config.jwt.expiry_minutes);

        let claims = Claims {
            sub: user.id.to_string(),
            name: user.full_name.clone(),
            email: user.email.clone(),
            role: user.role.to_string(),
            iat: now.timestamp() as usize,
            exp: expiration.timestamp() as usize,
            iss: config.jwt.issuer.clone(),
            aud: config.jwt.audience.clone(),
        };

        let secret = Self::get_secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
    }

    // 验证 JWT token（签名、过期时间、签发者、受众全部校验）
    pub fn verify_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        let secret = Self::get_secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.jwt.issuer]);
        validation.set_audience(&[&config.jwt.audience]);

        decode::<Claims>(token, &decoding_key, &validation).map(|token_data| token_data.claims)
    }

    // 从已验证的 Claims 中取出用户 ID
    pub fn subject_id(claims: &Claims) -> Result<Uuid, jsonwebtoken::errors::Error> {
        claims
            .sub
            .parse::<Uuid>()
            .map_err(|_| jsonwebtoken::errors::ErrorKind::InvalidToken.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::{User, UserRole};

    fn teacher_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "teacher@school.edu".into(),
            password_hash: String::new(),
            full_name: "王老师".into(),
            role: UserRole::Teacher,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_token_round_trip() {
        let user = teacher_user();
        let token = JwtUtils::generate_access_token(&user).unwrap();

        let claims = JwtUtils::verify_access_token(&token).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.role, "teacher");
        assert_eq!(claims.email, user.email);
        assert_eq!(JwtUtils::subject_id(&claims).unwrap(), user.id);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let user = teacher_user();
        let token = JwtUtils::generate_access_token(&user).unwrap();

        // 换掉签名段
        let mut parts: Vec<&str> = token.split('.').collect();
        parts[2] = "AAAA";
        let forged = parts.join(".");
        assert!(JwtUtils::verify_access_token(&forged).is_err());
    }
}
