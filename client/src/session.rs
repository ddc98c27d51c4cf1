//! 客户端侧会话身份推导
//!
//! 前端不持有签名密钥，令牌在服务端已验签，这里只解码载荷来回答
//! "当前登录的是谁、是什么角色"。声明值可能是标量也可能是数组
//! （多值 role 声明），统一展开成一条声明一个值；键名为 role/roles
//! （不区分大小写）的声明额外归并进 `roles`，下游的角色判断只看这一处。

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("malformed token: {0}")]
    Malformed(#[from] jsonwebtoken::errors::Error),
    #[error("token payload is not a JSON object")]
    NotAnObject,
}

/// 展开后的单条声明
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub key: String,
    pub value: String,
}

/// 从令牌声明推导出的会话身份
#[derive(Debug, Clone, Default)]
pub struct SessionIdentity {
    pub subject: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub roles: Vec<String>,
    pub claims: Vec<Claim>,
}

impl SessionIdentity {
    /// 未登录会话
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.subject.is_some()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// 从令牌推导会话身份；令牌为空视为未登录
    pub fn from_token(token: Option<&str>) -> Result<Self, SessionError> {
        let token = match token {
            Some(token) if !token.trim().is_empty() => token,
            _ => return Ok(Self::anonymous()),
        };

        let claims = parse_claims(token)?;

        let find = |key: &str| {
            claims
                .iter()
                .find(|c| c.key == key)
                .map(|c| c.value.clone())
        };

        let roles = claims
            .iter()
            .filter(|c| c.key.eq_ignore_ascii_case("role") || c.key.eq_ignore_ascii_case("roles"))
            .map(|c| c.value.clone())
            .collect();

        Ok(Self {
            subject: find("sub"),
            name: find("name"),
            email: find("email"),
            roles,
            claims,
        })
    }
}

/// 解码令牌载荷为展开的声明列表
///
/// 不验签、不校验过期：签名只有服务端能验证，这里的结果仅用于界面
/// 展示与角色门控，所有真正的权限判定仍发生在服务端。
pub fn parse_claims(token: &str) -> Result<Vec<Claim>, SessionError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.set_required_spec_claims::<&str>(&[]);

    let payload = decode::<Value>(token, &DecodingKey::from_secret(&[]), &validation)?.claims;

    let map = match payload {
        Value::Object(map) => map,
        _ => return Err(SessionError::NotAnObject),
    };

    let mut claims = Vec::new();
    for (key, value) in map {
        match value {
            // 多值声明：一条声明一个值
            Value::Array(items) => {
                for item in items {
                    claims.push(Claim {
                        key: key.clone(),
                        value: scalar_to_string(&item),
                    });
                }
            }
            other => claims.push(Claim {
                key,
                value: scalar_to_string(&other),
            }),
        }
    }
    Ok(claims)
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::json;

    fn make_token(payload: serde_json::Value) -> String {
        encode(
            &Header::default(),
            &payload,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap()
    }

    #[test]
    fn test_scalar_role_claim() {
        let token = make_token(json!({
            "sub": "8f14e45f-0000-0000-0000-000000000001",
            "name": "王老师",
            "email": "teacher@school.edu",
            "role": "teacher",
            "exp": 4102444800u64,
        }));

        let identity = SessionIdentity::from_token(Some(&token)).unwrap();
        assert!(identity.is_authenticated());
        assert_eq!(
            identity.subject.as_deref(),
            Some("8f14e45f-0000-0000-0000-000000000001")
        );
        assert!(identity.has_role("teacher"));
        assert!(!identity.has_role("admin"));
        assert!(
            identity
                .claims
                .iter()
                .any(|c| c.key == "role" && c.value == "teacher")
        );
    }

    #[test]
    fn test_array_roles_expand() {
        let token = make_token(json!({
            "sub": "id-1",
            "roles": ["teacher", "admin"],
        }));

        let identity = SessionIdentity::from_token(Some(&token)).unwrap();
        assert!(identity.has_role("teacher"));
        assert!(identity.has_role("admin"));
        // 每个值展开成一条声明
        let role_claims: Vec<_> = identity
            .claims
            .iter()
            .filter(|c| c.key == "roles")
            .collect();
        assert_eq!(role_claims.len(), 2);
    }

    #[test]
    fn test_role_key_case_insensitive() {
        let token = make_token(json!({"sub": "id-1", "Role": "student"}));
        let identity = SessionIdentity::from_token(Some(&token)).unwrap();
        assert!(identity.has_role("student"));
    }

    #[test]
    fn test_numeric_claim_values_stringify() {
        let token = make_token(json!({"sub": "id-1", "exp": 1234567890}));
        let identity = SessionIdentity::from_token(Some(&token)).unwrap();
        assert!(
            identity
                .claims
                .iter()
                .any(|c| c.key == "exp" && c.value == "1234567890")
        );
    }

    #[test]
    fn test_empty_token_is_anonymous() {
        let identity = SessionIdentity::from_token(None).unwrap();
        assert!(!identity.is_authenticated());
        assert!(identity.roles.is_empty());

        let identity = SessionIdentity::from_token(Some("  ")).unwrap();
        assert!(!identity.is_authenticated());
    }

    #[test]
    fn test_malformed_token_errors() {
        assert!(SessionIdentity::from_token(Some("not-a-jwt")).is_err());
    }
}
