//! In-memory session registry. No persistence: sessions live for the
//! process lifetime and are keyed by the id returned at creation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::interview::controller::SessionController;

#[derive(Clone, Default)]
pub struct SessionRegistry {
    inner: Arc<Mutex<HashMap<Uuid, SessionController>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, controller: SessionController) -> Uuid {
        let id = Uuid::new_v4();
        self.lock().insert(id, controller);
        id
    }

    pub fn get(&self, id: Uuid) -> Option<SessionController> {
        self.lock().get(&id).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, SessionController>> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
