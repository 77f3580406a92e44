//! Effect runner: executes external calls for request intents and feeds the
//! outcome back into the store as new intents or notifications.
//!
//! # Policies
//!
//! - [`Policy::Every`] (commands): every intent starts a fresh call. Nothing
//!   is deduplicated.
//! - [`Policy::Latest`] (queries): a newer intent with the same tag supersedes
//!   a pending one. The generation is advanced when the newer intent is
//!   dispatched, so the older invocation stops emitting from that moment on,
//!   even before the newer intent is dequeued. The older call is then aborted.
//!
//! ```text
//!            new intent                 completion, no newer intent
//!   Idle ──────────────────→ Pending ─────────────────────────────→ Idle
//!                              │  ↑
//!                              └──┘ newer intent: previous outcome discarded
//! ```

mod context;
mod generation;
mod runner;

pub use context::{EffectContext, Env};
pub use generation::{Generation, Policy};
pub(crate) use generation::Generations;
pub use runner::EffectRunner;

use crate::features::{admin, notes, tasks};
use crate::store::AppIntent;

/// The policy for an intent, or `None` when it has no effect.
pub(crate) fn policy(intent: &AppIntent) -> Option<Policy> {
    match intent {
        AppIntent::Tasks(intent) => tasks::policy(intent),
        AppIntent::Notes(intent) => notes::policy(intent),
        AppIntent::Admin(intent) => admin::policy(intent),
    }
}

pub(crate) async fn run(intent: AppIntent, ctx: EffectContext) {
    match intent {
        AppIntent::Tasks(intent) => tasks::run(intent, ctx).await,
        AppIntent::Notes(intent) => notes::run(intent, ctx).await,
        AppIntent::Admin(intent) => admin::run(intent, ctx).await,
    }
}
