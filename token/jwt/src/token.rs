use std::time;

use anyhow::Result;
use jsonwebtoken::{decode, encode, errors::Error, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::{claim::Claim, role::ClaimRole};

pub struct JwtToken {
    header: Header,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry_duration: u64,
}

impl JwtToken {
    pub fn new(secret: &str, expiry_duration: &u64) -> Self {
        ub_log::info(Some("⚡"), "JwtToken: Initializing component");

        let secret = secret.as_bytes();
        // Zero leeway: an expired token must fail the moment the clock
        // passes its embedded expiry.
        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            header: Header::default(),
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            expiry_duration: *expiry_duration,
        }
    }

    pub fn encode(&self, sub: &Uuid, email: &str, role: &ClaimRole) -> Result<String> {
        let expiration_time = usize::try_from(
            time::SystemTime::now()
                .duration_since(time::UNIX_EPOCH)?
                .as_secs()
                + self.expiry_duration,
        )?;

        Ok(encode(
            &self.header,
            &Claim::new(sub, email, role, &expiration_time),
            &self.encoding_key,
        )?)
    }

    pub fn decode(&self, token: &str) -> Result<Claim, Error> {
        Ok(decode::<Claim>(token, &self.decoding_key, &self.validation)?.claims)
    }
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::errors::ErrorKind;
    use uuid::Uuid;

    use super::JwtToken;
    use crate::{claim::Claim, role::ClaimRole};

    const SECRET: &str = "test_secret";

    #[test]
    fn encode_then_decode_keeps_claims() {
        let jwt = JwtToken::new(SECRET, &3600);
        let sub = Uuid::now_v7();

        let token = jwt.encode(&sub, "a@x.com", &ClaimRole::Admin).unwrap();
        let claim = jwt.decode(&token).unwrap();

        assert_eq!(claim.sub(), &sub);
        assert_eq!(claim.email(), "a@x.com");
        assert_eq!(claim.role(), &ClaimRole::Admin);
    }

    #[test]
    fn decode_rejects_tampered_token() {
        let jwt = JwtToken::new(SECRET, &3600);

        let token = jwt
            .encode(&Uuid::now_v7(), "a@x.com", &ClaimRole::Admin)
            .unwrap();
        let mut tampered = token.clone();
        tampered.pop();

        assert!(jwt.decode(&tampered).is_err());
    }

    #[test]
    fn decode_rejects_foreign_secret() {
        let jwt = JwtToken::new(SECRET, &3600);
        let other = JwtToken::new("another_secret", &3600);

        let token = other
            .encode(&Uuid::now_v7(), "a@x.com", &ClaimRole::Admin)
            .unwrap();
        let err = jwt.decode(&token).unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::InvalidSignature));
    }

    #[test]
    fn decode_rejects_expired_token() {
        let jwt = JwtToken::new(SECRET, &3600);

        // Claim whose expiry is already in the past, signed with the same
        // secret and header as the component's own tokens.
        let claim = Claim::new(&Uuid::now_v7(), "a@x.com", &ClaimRole::Admin, &1);
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claim,
            &jsonwebtoken::EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let err = jwt.decode(&token).unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::ExpiredSignature));
    }
}
