use crate::domain::entities::{AnonymousSessionGrant, GuestId};
use crate::domain::errors::SessionError;
use crate::domain::ports::{AnonymousSessionApi, KeyValueStore};
use crate::use_cases::guest_store::GuestSessionStore;
use crate::use_cases::token::{decode_token_payload, guest_id_claim};

// Obtains (or reuses) a guest identity from the backend and caches it.
pub struct AnonymousSessionNegotiator<A, S> {
    pub api: A,
    pub guest_store: GuestSessionStore<S>,
}

impl<A, S> AnonymousSessionNegotiator<A, S>
where
    A: AnonymousSessionApi,
    S: KeyValueStore,
{
    pub fn new(api: A, storage: S) -> Self {
        Self {
            api,
            guest_store: GuestSessionStore::new(storage),
        }
    }

    #[tracing::instrument(name = "ensure_anonymous_session", skip(self))]
    pub async fn ensure_anonymous_session(&self, force_new: bool) -> Result<GuestId, SessionError> {
        let grant = self
            .api
            .request_anonymous_session(force_new)
            .await
            .map_err(SessionError::Api)?;

        let guest_id = resolve_guest_id(&grant).ok_or_else(|| {
            tracing::warn!("anonymous session response carried no guest id");
            SessionError::Unresolved
        })?;

        self.guest_store.cache_guest_id(&guest_id);
        tracing::debug!(guest_id = %guest_id, "anonymous session resolved");

        Ok(guest_id)
    }
}

// Token claim wins over the direct field; blank values count as missing.
fn resolve_guest_id(grant: &AnonymousSessionGrant) -> Option<GuestId> {
    let token = non_blank(grant.token.as_deref());
    let direct = non_blank(grant.guest_id.as_deref());

    token
        .and_then(decode_token_payload)
        .and_then(|claims| guest_id_claim(&claims))
        .or_else(|| direct.map(str::to_string))
        .map(GuestId::new)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
