//! Local event storage.
//!
//! Event definitions live in a single JSON file. The whole file is loaded
//! at startup and rewritten on every mutation; the scale is a personal
//! calendar, not a database. The store is constructed once in `main` and
//! handed to request handlers through `AppState`.

mod record;

pub use record::StoredEvent;

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use calgrid_core::{CalGridError, CalGridResult, EventDefinition};
use uuid::Uuid;

/// JSON-file-backed store of event definitions.
pub struct EventStore {
    path: PathBuf,
    events: RwLock<Vec<StoredEvent>>,
}

impl EventStore {
    /// Open the store at `path`, creating parent directories and starting
    /// empty if the file does not exist yet.
    pub fn open(path: &Path) -> CalGridResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let events = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            Vec::new()
        };

        Ok(EventStore {
            path: path.to_path_buf(),
            events: RwLock::new(events),
        })
    }

    /// All definitions, decoded.
    pub fn list(&self) -> CalGridResult<Vec<EventDefinition>> {
        let events = self.read()?;
        Ok(events
            .iter()
            .cloned()
            .map(StoredEvent::into_definition)
            .collect())
    }

    pub fn get(&self, id: &str) -> CalGridResult<EventDefinition> {
        let events = self.read()?;
        events
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .map(StoredEvent::into_definition)
            .ok_or_else(|| CalGridError::EventNotFound(id.to_string()))
    }

    /// Store a new definition. The store assigns the id; whatever the
    /// caller put there is replaced.
    pub fn create(&self, mut definition: EventDefinition) -> CalGridResult<EventDefinition> {
        definition.id = Uuid::new_v4().to_string();

        let mut events = self.write()?;
        events.push(StoredEvent::from_definition(&definition));
        self.persist(&events)?;

        tracing::info!(event_id = %definition.id, title = %definition.title, "created event");
        Ok(definition)
    }

    /// Replace the definition with the given id. The id itself is kept.
    pub fn update(&self, id: &str, mut definition: EventDefinition) -> CalGridResult<EventDefinition> {
        definition.id = id.to_string();

        let mut events = self.write()?;
        let slot = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| CalGridError::EventNotFound(id.to_string()))?;
        *slot = StoredEvent::from_definition(&definition);
        self.persist(&events)?;

        tracing::info!(event_id = %id, "updated event");
        Ok(definition)
    }

    pub fn delete(&self, id: &str) -> CalGridResult<()> {
        let mut events = self.write()?;
        let before = events.len();
        events.retain(|e| e.id != id);
        if events.len() == before {
            return Err(CalGridError::EventNotFound(id.to_string()));
        }
        self.persist(&events)?;

        tracing::info!(event_id = %id, "deleted event");
        Ok(())
    }

    fn persist(&self, events: &[StoredEvent]) -> CalGridResult<()> {
        let content = serde_json::to_string_pretty(events)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn read(&self) -> CalGridResult<std::sync::RwLockReadGuard<'_, Vec<StoredEvent>>> {
        self.events
            .read()
            .map_err(|_| CalGridError::Storage("event store lock poisoned".to_string()))
    }

    fn write(&self) -> CalGridResult<std::sync::RwLockWriteGuard<'_, Vec<StoredEvent>>> {
        self.events
            .write()
            .map_err(|_| CalGridError::Storage("event store lock poisoned".to_string()))
    }
}
