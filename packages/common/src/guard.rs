use soroban_sdk::{contracttype, Env, Symbol};

/// Single-flag reentrancy lock kept in instance storage under a
/// caller-chosen key.
#[contracttype]
#[derive(Clone, Debug, Default)]
pub struct ReentrancyGuard {
    pub locked: bool,
}

impl ReentrancyGuard {
    /// Take the lock. `false` if it was already held.
    pub fn enter(env: &Env, key: &Symbol) -> bool {
        let storage = env.storage().instance();
        let guard: ReentrancyGuard = storage.get(key).unwrap_or_default();
        if guard.locked {
            return false;
        }
        storage.set(key, &ReentrancyGuard { locked: true });
        true
    }

    pub fn exit(env: &Env, key: &Symbol) {
        env.storage().instance().set(key, &ReentrancyGuard { locked: false });
    }

    pub fn is_locked(env: &Env, key: &Symbol) -> bool {
        env.storage()
            .instance()
            .get::<_, ReentrancyGuard>(key)
            .map(|g| g.locked)
            .unwrap_or(false)
    }
}
