use crate::{DbError, ModelRepository, Result as DbErrorResult};

use turbo_core::{BroadcastableModel, LifecycleEvent, ModelBroadcaster};

use std::marker::PhantomData;

use log::debug;

/// Persistence boundary that emits lifecycle broadcasts.
///
/// `save` broadcasts after the write succeeds, so relations and the record's
/// own DOM id see the assigned primary key. `delete` broadcasts before the
/// row is removed; if the delete then fails, the `remove` broadcast has
/// already gone out.
pub struct BroadcastingRepository<R, M> {
    repository: R,
    broadcaster: ModelBroadcaster,
    _model: PhantomData<fn() -> M>,
}

impl<R, M> BroadcastingRepository<R, M>
where
    R: ModelRepository<M>,
    M: BroadcastableModel,
{
    pub fn new(repository: R, broadcaster: ModelBroadcaster) -> Self {
        Self {
            repository,
            broadcaster,
            _model: PhantomData,
        }
    }

    /// Underlying repository, for reads that never broadcast
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Insert a new record or update an existing one, then broadcast
    /// `created` or `updated`. Nothing is broadcast if the write fails.
    pub async fn save(&self, model: &mut M) -> DbErrorResult<LifecycleEvent> {
        let creating = model.pk().is_none();

        if creating {
            self.repository.insert(model).await?;
        } else {
            self.repository.update(model).await?;
        }

        let event = if creating {
            LifecycleEvent::Created
        } else {
            LifecycleEvent::Updated
        };

        let sent = self.broadcaster.broadcast(&*model, event).await;
        debug!("Saved {} ({}), {} broadcasts", M::META, event, sent);

        Ok(event)
    }

    /// Broadcast `deleted`, then delete the record
    pub async fn delete(&self, model: &M) -> DbErrorResult<()> {
        // Deviates from broadcast-first ordering: an unsaved record fails
        // here, before anything reaches subscribers.
        if model.pk().is_none() {
            return Err(DbError::not_persisted(M::META.label()));
        }

        let sent = self
            .broadcaster
            .broadcast(model, LifecycleEvent::Deleted)
            .await;
        debug!("Deleting {} after {} broadcasts", M::META, sent);

        self.repository.delete(model).await
    }
}
