use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use medtrack_domain::{UserAccount, UserRole, ID};
use medtrack_infra::JwtConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Id of the `Patient` or `Doctor`
    pub sub: String,
    pub email: String,
    pub role: UserRole,
    /// Issued at, in seconds
    pub iat: i64,
    /// Expiration time, in seconds
    pub exp: i64,
}

impl Claims {
    pub fn user_id(&self) -> anyhow::Result<ID> {
        Ok(self.sub.parse::<ID>()?)
    }
}

#[derive(Debug)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

fn create_token(
    user: &UserAccount,
    secret: &str,
    now_secs: i64,
    expires_in: i64,
) -> anyhow::Result<String> {
    let claims = Claims {
        sub: user.id().as_string(),
        email: user.email().to_string(),
        role: user.role(),
        iat: now_secs,
        exp: now_secs + expires_in,
    };
    let key = EncodingKey::from_secret(secret.as_bytes());
    Ok(encode(&Header::new(Algorithm::HS256), &claims, &key)?)
}

pub fn create_token_pair(
    user: &UserAccount,
    config: &JwtConfig,
    now_millis: i64,
) -> anyhow::Result<TokenPair> {
    let now_secs = now_millis / 1000;
    Ok(TokenPair {
        access_token: create_token(
            user,
            &config.access_secret,
            now_secs,
            config.access_expires_in,
        )?,
        refresh_token: create_token(
            user,
            &config.refresh_secret,
            now_secs,
            config.refresh_expires_in,
        )?,
    })
}

fn decode_token(token: &str, secret: &str) -> anyhow::Result<Claims> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let claims = decode::<Claims>(token, &key, &Validation::new(Algorithm::HS256))?.claims;
    Ok(claims)
}

pub fn decode_access_token(token: &str, config: &JwtConfig) -> anyhow::Result<Claims> {
    decode_token(token, &config.access_secret)
}

pub fn decode_refresh_token(token: &str, config: &JwtConfig) -> anyhow::Result<Claims> {
    decode_token(token, &config.refresh_secret)
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Utc;
    use medtrack_domain::{PasswordHash, Patient};

    fn config() -> JwtConfig {
        JwtConfig {
            access_secret: "access".into(),
            refresh_secret: "refresh".into(),
            access_expires_in: 60,
            refresh_expires_in: 120,
        }
    }

    fn user() -> UserAccount {
        let password = PasswordHash::from_stored("stored".into());
        UserAccount::Patient(Patient::new("ada@example.com".into(), password, 0))
    }

    #[test]
    fn tokens_only_decode_with_their_own_secret() {
        let user = user();
        let config = config();
        let pair = create_token_pair(&user, &config, Utc::now().timestamp_millis()).unwrap();

        let claims = decode_access_token(&pair.access_token, &config).unwrap();
        assert_eq!(&claims.user_id().unwrap(), user.id());
        assert_eq!(claims.role, UserRole::Patient);
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.exp - claims.iat, 60);

        let claims = decode_refresh_token(&pair.refresh_token, &config).unwrap();
        assert_eq!(claims.exp - claims.iat, 120);

        assert!(decode_access_token(&pair.refresh_token, &config).is_err());
        assert!(decode_refresh_token(&pair.access_token, &config).is_err());
    }

    #[test]
    fn rejects_expired_tokens() {
        let config = config();
        // Year 1970
        let pair = create_token_pair(&user(), &config, 100_000).unwrap();
        assert!(decode_access_token(&pair.access_token, &config).is_err());
        assert!(decode_access_token("garbage", &config).is_err());
    }
}
