use std::sync::{Arc, RwLock};

/// 会话级令牌槽
///
/// 令牌只存在于当前会话的内存里，不落盘、不跨会话共享。
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    token: Arc<RwLock<Option<String>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_token(&self, token: Option<String>) {
        let mut slot = self.token.write().expect("token lock poisoned");
        *slot = token;
    }

    pub fn get_token(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    pub fn clear(&self) {
        self.set_token(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let store = TokenStore::new();
        assert_eq!(store.get_token(), None);

        store.set_token(Some("abc".into()));
        assert_eq!(store.get_token(), Some("abc".into()));

        store.clear();
        assert_eq!(store.get_token(), None);
    }

    #[test]
    fn test_clones_share_slot() {
        let store = TokenStore::new();
        let clone = store.clone();
        store.set_token(Some("shared".into()));
        assert_eq!(clone.get_token(), Some("shared".into()));
    }
}
