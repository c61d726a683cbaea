//! JWT encoding and decoding with the HS256 algorithm.
//!
//! Every token is signed with one shared secret. Only HS256 is accepted on
//! decode, so a token signed with any other algorithm is rejected.

use crate::claims::{JwtClaims, TokenType};
use crate::error::AuthError;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Encode JWT claims into a signed HS256 token string.
///
/// # Errors
///
/// - `AuthError::InvalidKey` if `secret` is empty
/// - `AuthError::EncodingFailed` if signing fails
pub fn encode_token(claims: &JwtClaims, secret: &[u8]) -> Result<String, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::InvalidKey("signing secret is empty".to_string()));
    }

    let key = EncodingKey::from_secret(secret);
    let header = Header::new(Algorithm::HS256);

    encode(&header, claims, &key).map_err(|e| AuthError::EncodingFailed(e.to_string()))
}

/// Decode and validate an HS256 token.
///
/// Expiry is checked with no leeway.
///
/// # Errors
///
/// - `AuthError::TokenExpired` - Token has expired
/// - `AuthError::InvalidSignature` - Signature verification failed
/// - `AuthError::InvalidToken` - Token format or algorithm is invalid
/// - `AuthError::InvalidKey` - Secret is empty
pub fn decode_token(token: &str, secret: &[u8]) -> Result<JwtClaims, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::InvalidKey("signing secret is empty".to_string()));
    }

    let key = DecodingKey::from_secret(secret);

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.validate_aud = false;
    validation.algorithms = vec![Algorithm::HS256];

    decode::<JwtClaims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(map_jwt_error)
}

/// Decode a token and require its `type` claim to be `expected`.
///
/// # Errors
///
/// Everything [`decode_token`] returns, plus `AuthError::WrongTokenType`.
pub fn decode_token_of_type(
    token: &str,
    secret: &[u8],
    expected: TokenType,
) -> Result<JwtClaims, AuthError> {
    let claims = decode_token(token, secret)?;

    if claims.token_type != expected {
        return Err(AuthError::WrongTokenType {
            expected: expected.as_str(),
            actual: claims.token_type.as_str(),
        });
    }

    Ok(claims)
}

/// Map jsonwebtoken errors to AuthError.
fn map_jwt_error(err: jsonwebtoken::errors::Error) -> AuthError {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        ErrorKind::InvalidAlgorithm => AuthError::InvalidToken("Unsupported algorithm".to_string()),
        ErrorKind::InvalidToken => AuthError::InvalidToken("Malformed token".to_string()),
        ErrorKind::Base64(_) => AuthError::InvalidToken("Invalid base64 encoding".to_string()),
        ErrorKind::Json(_) => AuthError::InvalidToken("Invalid JSON in claims".to_string()),
        ErrorKind::MissingRequiredClaim(claim) => {
            AuthError::InvalidToken(format!("Missing required claim: {claim}"))
        }
        _ => AuthError::InvalidToken(format!("Token validation failed: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use dorm_core::UserId;

    const SECRET: &[u8] = b"test-secret-do-not-use";

    fn access_claims(user_id: UserId) -> JwtClaims {
        JwtClaims::builder(user_id, TokenType::Access)
            .dormitory_id("D1")
            .ttl(Duration::minutes(15))
            .build()
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let user_id = UserId::new();
        let claims = access_claims(user_id);

        let token = encode_token(&claims, SECRET).unwrap();
        assert_eq!(token.split('.').count(), 3);

        let decoded = decode_token(&token, SECRET).unwrap();
        assert_eq!(decoded, claims);
        assert_eq!(decoded.user_id, user_id);
        assert_eq!(decoded.dormitory_id.as_deref(), Some("D1"));
    }

    #[test]
    fn test_header_is_hs256() {
        let token = encode_token(&access_claims(UserId::new()), SECRET).unwrap();
        let header = jsonwebtoken::decode_header(&token).unwrap();
        assert_eq!(header.alg, Algorithm::HS256);
    }

    #[test]
    fn test_empty_secret_rejected() {
        let claims = access_claims(UserId::new());
        assert!(matches!(
            encode_token(&claims, b""),
            Err(AuthError::InvalidKey(_))
        ));

        let token = encode_token(&claims, SECRET).unwrap();
        assert!(matches!(
            decode_token(&token, b""),
            Err(AuthError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_expired_token() {
        let now = Utc::now().timestamp();
        let claims = JwtClaims {
            user_id: UserId::new(),
            dormitory_id: Some("D1".to_string()),
            iat: now - 7200,
            exp: now - 3600,
            token_type: TokenType::Access,
        };
        let token = encode_token(&claims, SECRET).unwrap();

        let result = decode_token(&token, SECRET);
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[test]
    fn test_wrong_secret_is_invalid_signature() {
        let token = encode_token(&access_claims(UserId::new()), SECRET).unwrap();
        let result = decode_token(&token, b"another-secret");
        assert!(matches!(result, Err(AuthError::InvalidSignature)));
    }

    #[test]
    fn test_malformed_token() {
        let result = decode_token("not.a.jwt", SECRET);
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));

        let result = decode_token("garbage", SECRET);
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_other_algorithm_rejected() {
        let claims = access_claims(UserId::new());
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        let result = decode_token(&token, SECRET);
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_decode_token_of_type() {
        let user_id = UserId::new();
        let refresh = JwtClaims::builder(user_id, TokenType::Refresh)
            .ttl(Duration::days(7))
            .build();
        let token = encode_token(&refresh, SECRET).unwrap();

        let decoded = decode_token_of_type(&token, SECRET, TokenType::Refresh).unwrap();
        assert_eq!(decoded.user_id, user_id);
        assert!(decoded.dormitory_id.is_none());

        let err = decode_token_of_type(&token, SECRET, TokenType::Access).unwrap_err();
        assert!(matches!(
            err,
            AuthError::WrongTokenType {
                expected: "access",
                actual: "refresh"
            }
        ));
    }
}
