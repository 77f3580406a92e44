use tokio::sync::mpsc;

use crate::effects::{Generation, Generations};

use super::activity::{Activity, ActivityGuard};
use super::app::AppIntent;

pub(crate) type Queued = (AppIntent, Generation, ActivityGuard);

/// Clonable entry point for intents. Intents are applied in the order they
/// were dispatched.
#[derive(Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Queued>,
    activity: Activity,
    generations: Generations,
}

impl Dispatcher {
    pub(crate) fn channel(activity: Activity) -> (Self, mpsc::UnboundedReceiver<Queued>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let dispatcher = Self {
            tx,
            activity,
            generations: Generations::default(),
        };
        (dispatcher, rx)
    }

    pub fn dispatch(&self, intent: impl Into<AppIntent>) {
        let intent = intent.into();
        let tag = intent.tag();
        let generation = self.generations.stamp(&intent);
        if self
            .tx
            .send((intent, generation, self.activity.begin()))
            .is_err()
        {
            tracing::warn!(intent = %tag, "store is shut down, dropping intent");
        }
    }
}
