use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};

use super::{AuthError, Claims};
use crate::config::AuthConfig;

#[derive(Clone)]
pub struct JwtKeys {
    pub enc: EncodingKey,
    pub dec: DecodingKey,
}

impl JwtKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            enc: EncodingKey::from_secret(secret),
            dec: DecodingKey::from_secret(secret),
        }
    }
}

/// HS256 signer and verifier for access tokens carrying a user id subject.
#[derive(Clone)]
pub struct TokenSigner {
    keys: JwtKeys,
    ttl_secs: usize,
}

impl TokenSigner {
    pub fn new(secret: &[u8], ttl_secs: u64) -> Self {
        Self {
            keys: JwtKeys::from_secret(secret),
            ttl_secs: ttl_secs as usize,
        }
    }

    pub fn from_config(cfg: &AuthConfig) -> Self {
        Self::new(cfg.jwt_secret.as_bytes(), cfg.token_ttl_secs)
    }

    pub fn issue(&self, user_id: i32) -> Result<String, AuthError> {
        encode_token(&self.keys, &make_access_claims(user_id, self.ttl_secs))
    }

    pub fn validate(&self, token: &str) -> Result<i32, AuthError> {
        decode_user_id(&self.keys, token)
    }
}

pub fn now_unix() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as usize)
        .unwrap_or_default()
}

pub fn make_access_claims(user_id: i32, ttl_secs: usize) -> Claims {
    let iat = now_unix();
    Claims {
        sub: user_id.to_string(),
        iat,
        exp: iat + ttl_secs,
    }
}

pub fn encode_token(keys: &JwtKeys, claims: &Claims) -> Result<String, AuthError> {
    let mut header = Header::new(Algorithm::HS256);
    header.typ = Some("JWT".into());

    encode(&header, claims, &keys.enc).map_err(|err| AuthError::TokenSigning(err.to_string()))
}

pub fn decode_user_id(keys: &JwtKeys, token: &str) -> Result<i32, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;

    let data = decode::<Claims>(token, &keys.dec, &validation).map_err(AuthError::from)?;
    data.claims
        .sub
        .parse::<i32>()
        .map_err(|_| AuthError::TokenMalformed)
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            ErrorKind::InvalidSignature => AuthError::SignatureInvalid,
            _ => AuthError::TokenMalformed,
        }
    }
}
