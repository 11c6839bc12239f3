use std::sync::Arc;

use ub_hash_argon2::argon2::Argon2Hash;
use ub_store_json::store::JsonStore;
use ub_token_jwt::token::JwtToken;

pub struct ApiRestCtx {
    hash: ApiRestHashCtx,
    token: ApiRestTokenCtx,
    dao: ApiRestDaoCtx,
}

impl ApiRestCtx {
    pub fn new(hash: ApiRestHashCtx, token: ApiRestTokenCtx, dao: ApiRestDaoCtx) -> Self {
        Self { hash, token, dao }
    }

    pub fn hash(&self) -> &ApiRestHashCtx {
        &self.hash
    }

    pub fn token(&self) -> &ApiRestTokenCtx {
        &self.token
    }

    pub fn dao(&self) -> &ApiRestDaoCtx {
        &self.dao
    }
}

pub struct ApiRestHashCtx {
    argon2: Argon2Hash,
}

impl ApiRestHashCtx {
    pub fn new(argon2: Argon2Hash) -> Self {
        Self { argon2 }
    }

    pub fn argon2(&self) -> &Argon2Hash {
        &self.argon2
    }
}

pub struct ApiRestTokenCtx {
    jwt: JwtToken,
}

impl ApiRestTokenCtx {
    pub fn new(jwt: JwtToken) -> Self {
        Self { jwt }
    }

    pub fn jwt(&self) -> &JwtToken {
        &self.jwt
    }
}

pub struct ApiRestDaoCtx {
    store: Arc<JsonStore>,
}

impl ApiRestDaoCtx {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &JsonStore {
        &self.store
    }
}
