use crate::ProfileStore;

use lms_core::{AccessDecision, Identity, Role};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Role-gated access check over an injected profile store.
///
/// Decisions are recomputed on every call; a denial is never cached.
/// Concurrent evaluations are resolved last-write-wins by generation:
/// a stale in-flight lookup that completes after a newer evaluation has
/// started publishes nothing.
pub struct AccessGuard {
    profiles: Arc<dyn ProfileStore>,
    generation: AtomicU64,
    published: RwLock<Option<PublishedDecision>>,
}

struct PublishedDecision {
    generation: u64,
    decision: AccessDecision,
}

impl AccessGuard {
    pub fn new(profiles: Arc<dyn ProfileStore>) -> Self {
        Self {
            profiles,
            generation: AtomicU64::new(0),
            published: RwLock::new(None),
        }
    }

    /// Decide access for `identity` against an optional role requirement.
    ///
    /// Pure over its two inputs (identity, profile): no identity denies,
    /// no requirement allows, a missing profile row resolves to
    /// `Role::Student`, and a lookup failure denies (fail closed).
    pub async fn evaluate(
        &self,
        identity: Option<&Identity>,
        required: Option<Role>,
    ) -> AccessDecision {
        let Some(identity) = identity else {
            return AccessDecision::deny_unauthenticated();
        };

        let Some(required) = required else {
            return AccessDecision::allow();
        };

        match self.profiles.fetch_profile(identity.id).await {
            Err(e) => {
                log::warn!("Profile lookup failed for {}: {e}", identity.id);
                AccessDecision::deny_lookup_failed()
            }
            Ok(profile) => {
                let actual = profile.map(|p| p.role).unwrap_or_default();
                if actual.satisfies(required) {
                    AccessDecision::allow()
                } else {
                    AccessDecision::deny_insufficient_role(required, actual)
                }
            }
        }
    }

    /// Evaluate as the newest generation. Returns `None` if a newer
    /// evaluation started (or `invalidate` was called) before this one
    /// finished; the stale outcome is discarded, not published.
    pub async fn evaluate_latest(
        &self,
        identity: Option<&Identity>,
        required: Option<Role>,
    ) -> Option<AccessDecision> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let decision = self.evaluate(identity, required).await;
        self.publish(generation, decision)
    }

    /// Supersede any in-flight evaluation: the identity or the requirement
    /// changed, or the consuming view is gone.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Most recently published decision, if any.
    pub fn latest(&self) -> Option<AccessDecision> {
        self.published
            .read()
            .unwrap()
            .as_ref()
            .map(|p| p.decision.clone())
    }

    fn publish(&self, generation: u64, decision: AccessDecision) -> Option<AccessDecision> {
        if self.generation.load(Ordering::SeqCst) != generation {
            log::debug!("Discarding superseded access decision (generation {generation})");
            return None;
        }

        let mut published = self.published.write().unwrap();
        if published.as_ref().is_some_and(|p| p.generation > generation) {
            return None;
        }
        *published = Some(PublishedDecision {
            generation,
            decision: decision.clone(),
        });
        Some(decision)
    }
}
