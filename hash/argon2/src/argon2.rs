use argon2::{
    password_hash::{self, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};

pub struct Argon2Hash {
    argon2: Argon2<'static>,
    salt: SaltString,
}

impl Argon2Hash {
    pub fn new(algorithm: &str, version: &str, salt: &str) -> Self {
        ub_log::info(Some("⚡"), "Argon2Hash: Initializing component");

        let algorithm = match algorithm {
            "Argon2d" => Algorithm::Argon2d,
            "Argon2i" => Algorithm::Argon2i,
            "Argon2id" => Algorithm::Argon2id,
            _ => panic!("Unknown argon2 algorithm"),
        };

        let version = match version {
            "V0x10" => Version::V0x10,
            "V0x13" => Version::V0x13,
            _ => panic!("Unknown argon2 version"),
        };

        let salt = match SaltString::from_b64(salt) {
            Ok(salt) => salt,
            Err(err) => panic!("Invalid argon2 salt: {err}"),
        };

        Self {
            argon2: Argon2::new(algorithm, version, Params::DEFAULT),
            salt,
        }
    }

    pub fn hash_password(&self, password: &[u8]) -> Result<PasswordHash<'_>, password_hash::Error> {
        self.argon2.hash_password(password, &self.salt)
    }

    pub fn verify_password(&self, password: &str, hash: &str) -> Result<(), password_hash::Error> {
        let hash = PasswordHash::new(hash)?;
        self.argon2.verify_password(password.as_bytes(), &hash)
    }
}

#[cfg(test)]
mod tests {
    use super::Argon2Hash;

    fn hasher() -> Argon2Hash {
        Argon2Hash::new("Argon2id", "V0x13", "cmVwbGFjZXRoaXNzYWx0")
    }

    #[test]
    fn hash_then_verify() {
        let hash = hasher().hash_password(b"hunter2").unwrap().to_string();

        assert!(hasher().verify_password("hunter2", &hash).is_ok());
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hash = hasher().hash_password(b"hunter2").unwrap().to_string();

        assert!(hasher().verify_password("hunter3", &hash).is_err());
    }

    #[test]
    fn hash_is_not_plaintext() {
        let hash = hasher().hash_password(b"hunter2").unwrap().to_string();

        assert!(!hash.contains("hunter2"));
        assert!(hash.starts_with("$argon2id$"));
    }
}
