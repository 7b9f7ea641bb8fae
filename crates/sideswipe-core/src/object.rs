//! Object identity and the global object registry.
//!
//! Every widget registers itself here on construction and receives an
//! [`ObjectId`]. The registry tracks parent-child relationships and
//! human-readable names, which is all the widget tree needs for a single
//! embeddable widget and its action panels.
//!
//! # Example
//!
//! ```
//! use sideswipe_core::{Object, ObjectId, ObjectBase, init_global_registry};
//!
//! // Initialize the registry before creating objects
//! init_global_registry();
//!
//! struct Row {
//!     base: ObjectBase,
//! }
//!
//! impl Row {
//!     fn new() -> Self {
//!         Self { base: ObjectBase::new::<Self>() }
//!     }
//! }
//!
//! impl Object for Row {
//!     fn object_id(&self) -> ObjectId {
//!         self.base.id()
//!     }
//! }
//!
//! let row = Row::new();
//! row.base.set_name("row");
//! assert_eq!(row.base.name(), "row");
//! ```

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::OnceLock;

use parking_lot::RwLock;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a registered object.
    ///
    /// Ids are never reused while the object is alive; a destroyed object's
    /// id becomes invalid and registry lookups for it return
    /// [`ObjectError::NotFound`].
    pub struct ObjectId;
}

impl ObjectId {
    /// Convert the id to its raw 64-bit representation.
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Reconstruct an id from its raw representation.
    pub fn from_raw(raw: u64) -> Self {
        use slotmap::KeyData;
        KeyData::from_ffi(raw).into()
    }
}

/// Errors from object registry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectError {
    /// The global registry has not been initialized.
    RegistryNotInitialized,
    /// The object id does not refer to a live object.
    NotFound(ObjectId),
    /// Reparenting would create a cycle in the object tree.
    WouldCreateCycle(ObjectId),
}

impl fmt::Display for ObjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegistryNotInitialized => {
                write!(f, "Object registry not initialized. Call init_global_registry() first")
            }
            Self::NotFound(id) => write!(f, "Object {:?} not found in registry", id),
            Self::WouldCreateCycle(id) => {
                write!(f, "Setting parent of {:?} would create a cycle", id)
            }
        }
    }
}

impl std::error::Error for ObjectError {}

/// A specialized Result type for object operations.
pub type ObjectResult<T> = std::result::Result<T, ObjectError>;

/// Per-object bookkeeping.
struct ObjectData {
    type_id: TypeId,
    type_name: &'static str,
    name: String,
    parent: Option<ObjectId>,
    children: Vec<ObjectId>,
}

impl ObjectData {
    fn new(type_id: TypeId, type_name: &'static str) -> Self {
        Self {
            type_id,
            type_name,
            name: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Registry of live objects and their tree relationships.
///
/// Usually accessed through [`SharedObjectRegistry`] / [`global_registry`];
/// direct use is handy in tests.
pub struct ObjectRegistry {
    objects: SlotMap<ObjectId, ObjectData>,
}

impl ObjectRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
        }
    }

    /// Register a new object of type `T` and return its id.
    pub fn register<T: Object + 'static>(&mut self) -> ObjectId {
        self.objects
            .insert(ObjectData::new(TypeId::of::<T>(), std::any::type_name::<T>()))
    }

    /// Destroy an object and its entire subtree.
    pub fn destroy(&mut self, id: ObjectId) -> ObjectResult<()> {
        let data = self.objects.get(id).ok_or(ObjectError::NotFound(id))?;

        // Detach from parent first so the parent's child list stays coherent.
        if let Some(parent) = data.parent
            && let Some(parent_data) = self.objects.get_mut(parent)
        {
            parent_data.children.retain(|&c| c != id);
        }

        // Remove the subtree bottom-up.
        let mut stack = vec![id];
        let mut order = Vec::new();
        while let Some(current) = stack.pop() {
            order.push(current);
            if let Some(data) = self.objects.get(current) {
                stack.extend(data.children.iter().copied());
            }
        }
        for current in order.into_iter().rev() {
            self.objects.remove(current);
        }
        Ok(())
    }

    /// Check whether an object is registered.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// Set (or clear) an object's parent.
    pub fn set_parent(&mut self, id: ObjectId, new_parent: Option<ObjectId>) -> ObjectResult<()> {
        if !self.objects.contains_key(id) {
            return Err(ObjectError::NotFound(id));
        }
        if let Some(parent) = new_parent {
            if !self.objects.contains_key(parent) {
                return Err(ObjectError::NotFound(parent));
            }
            // Walk up from the prospective parent; finding `id` means a cycle.
            let mut current = Some(parent);
            while let Some(ancestor) = current {
                if ancestor == id {
                    return Err(ObjectError::WouldCreateCycle(id));
                }
                current = self.objects.get(ancestor).and_then(|d| d.parent);
            }
        }

        let old_parent = self.objects[id].parent;
        if old_parent == new_parent {
            return Ok(());
        }
        if let Some(old) = old_parent
            && let Some(old_data) = self.objects.get_mut(old)
        {
            old_data.children.retain(|&c| c != id);
        }
        if let Some(new) = new_parent {
            self.objects[new].children.push(id);
        }
        self.objects[id].parent = new_parent;
        Ok(())
    }

    /// Get an object's parent id.
    pub fn parent(&self, id: ObjectId) -> ObjectResult<Option<ObjectId>> {
        self.objects
            .get(id)
            .map(|d| d.parent)
            .ok_or(ObjectError::NotFound(id))
    }

    /// Get an object's children, in insertion order.
    pub fn children(&self, id: ObjectId) -> ObjectResult<&[ObjectId]> {
        self.objects
            .get(id)
            .map(|d| d.children.as_slice())
            .ok_or(ObjectError::NotFound(id))
    }

    /// Get an object's name.
    pub fn object_name(&self, id: ObjectId) -> ObjectResult<&str> {
        self.objects
            .get(id)
            .map(|d| d.name.as_str())
            .ok_or(ObjectError::NotFound(id))
    }

    /// Set an object's name.
    pub fn set_object_name(&mut self, id: ObjectId, name: String) -> ObjectResult<()> {
        self.objects
            .get_mut(id)
            .map(|d| d.name = name)
            .ok_or(ObjectError::NotFound(id))
    }

    /// Get the registered type id of an object.
    pub fn type_id(&self, id: ObjectId) -> ObjectResult<TypeId> {
        self.objects
            .get(id)
            .map(|d| d.type_id)
            .ok_or(ObjectError::NotFound(id))
    }

    /// Get the registered type name of an object.
    pub fn type_name(&self, id: ObjectId) -> ObjectResult<&'static str> {
        self.objects
            .get(id)
            .map(|d| d.type_name)
            .ok_or(ObjectError::NotFound(id))
    }

    /// Find a direct child by name.
    pub fn find_child_by_name(&self, id: ObjectId, name: &str) -> ObjectResult<Option<ObjectId>> {
        let data = self.objects.get(id).ok_or(ObjectError::NotFound(id))?;
        Ok(data
            .children
            .iter()
            .copied()
            .find(|&c| self.objects.get(c).is_some_and(|d| d.name == name)))
    }

    /// Total number of live objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Iterate over objects with no parent.
    pub fn root_objects(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects
            .iter()
            .filter(|(_, d)| d.parent.is_none())
            .map(|(id, _)| id)
    }
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe wrapper around [`ObjectRegistry`].
pub struct SharedObjectRegistry {
    inner: RwLock<ObjectRegistry>,
}

impl SharedObjectRegistry {
    /// Create a new shared registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(ObjectRegistry::new()),
        }
    }

    /// Register a new object of type `T`.
    pub fn register<T: Object + 'static>(&self) -> ObjectId {
        self.inner.write().register::<T>()
    }

    /// Destroy an object and its subtree.
    pub fn destroy(&self, id: ObjectId) -> ObjectResult<()> {
        self.inner.write().destroy(id)
    }

    /// Check whether an object is registered.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.inner.read().contains(id)
    }

    /// Set an object's parent.
    pub fn set_parent(&self, id: ObjectId, parent: Option<ObjectId>) -> ObjectResult<()> {
        self.inner.write().set_parent(id, parent)
    }

    /// Get an object's parent id.
    pub fn parent(&self, id: ObjectId) -> ObjectResult<Option<ObjectId>> {
        self.inner.read().parent(id)
    }

    /// Get an object's children.
    pub fn children(&self, id: ObjectId) -> ObjectResult<Vec<ObjectId>> {
        self.inner.read().children(id).map(|c| c.to_vec())
    }

    /// Get an object's name.
    pub fn object_name(&self, id: ObjectId) -> ObjectResult<String> {
        self.inner.read().object_name(id).map(str::to_owned)
    }

    /// Set an object's name.
    pub fn set_object_name(&self, id: ObjectId, name: String) -> ObjectResult<()> {
        self.inner.write().set_object_name(id, name)
    }

    /// Get the registered type name of an object.
    pub fn type_name(&self, id: ObjectId) -> ObjectResult<&'static str> {
        self.inner.read().type_name(id)
    }

    /// Find a direct child by name.
    pub fn find_child_by_name(&self, id: ObjectId, name: &str) -> ObjectResult<Option<ObjectId>> {
        self.inner.read().find_child_by_name(id, name)
    }

    /// Total number of live objects.
    pub fn object_count(&self) -> usize {
        self.inner.read().object_count()
    }

    /// Ids of objects with no parent.
    pub fn root_objects(&self) -> Vec<ObjectId> {
        self.inner.read().root_objects().collect()
    }

    /// Access the registry with a read lock for compound queries.
    pub fn with_read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ObjectRegistry) -> R,
    {
        f(&self.inner.read())
    }

    /// Access the registry with a write lock for compound updates.
    pub fn with_write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ObjectRegistry) -> R,
    {
        f(&mut self.inner.write())
    }
}

impl Default for SharedObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global object registry (lazy initialized).
static GLOBAL_REGISTRY: OnceLock<SharedObjectRegistry> = OnceLock::new();

/// Initialize the global object registry.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_global_registry() {
    let _ = GLOBAL_REGISTRY.set(SharedObjectRegistry::new());
}

/// Get a reference to the global object registry.
///
/// Returns an error if the registry hasn't been initialized.
pub fn global_registry() -> ObjectResult<&'static SharedObjectRegistry> {
    GLOBAL_REGISTRY.get().ok_or(ObjectError::RegistryNotInitialized)
}

/// The base trait for all registered objects.
///
/// Types implementing this trait participate in the object tree and can
/// expose [`Signal`](crate::Signal) fields for change notification.
pub trait Object: Any + Send + Sync {
    /// Get this object's unique identifier.
    fn object_id(&self) -> ObjectId;
}

/// Helper for implementing the [`Object`] trait.
///
/// Include this as a field in your object types; on construction it
/// registers the object with the [`global_registry`], and on drop it
/// removes it again.
pub struct ObjectBase {
    id: ObjectId,
}

impl ObjectBase {
    /// Create a new ObjectBase, registering the object in the global registry.
    ///
    /// # Panics
    ///
    /// Panics if the global registry is not initialized.
    pub fn new<T: Object + 'static>() -> Self {
        let registry = global_registry().expect("Object registry not initialized");
        let id = registry.register::<T>();
        Self { id }
    }

    /// Get the object's id.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Get the object's name from the registry.
    pub fn name(&self) -> String {
        global_registry()
            .and_then(|r| r.object_name(self.id))
            .unwrap_or_default()
    }

    /// Set the object's name in the registry.
    pub fn set_name(&self, name: impl Into<String>) {
        if let Ok(registry) = global_registry() {
            let _ = registry.set_object_name(self.id, name.into());
        }
    }

    /// Get the parent object id.
    pub fn parent(&self) -> Option<ObjectId> {
        global_registry()
            .and_then(|r| r.parent(self.id))
            .ok()
            .flatten()
    }

    /// Set the parent object.
    pub fn set_parent(&self, parent: Option<ObjectId>) -> ObjectResult<()> {
        global_registry()?.set_parent(self.id, parent)
    }

    /// Get child object ids.
    pub fn children(&self) -> Vec<ObjectId> {
        global_registry()
            .and_then(|r| r.children(self.id))
            .unwrap_or_default()
    }

    /// Find a direct child by name.
    pub fn find_child_by_name(&self, name: &str) -> Option<ObjectId> {
        global_registry()
            .and_then(|r| r.find_child_by_name(self.id, name))
            .ok()
            .flatten()
    }
}

impl Drop for ObjectBase {
    fn drop(&mut self) {
        if let Ok(registry) = global_registry() {
            let _ = registry.destroy(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        base: ObjectBase,
    }

    impl Probe {
        fn new() -> Self {
            init_global_registry();
            Self {
                base: ObjectBase::new::<Self>(),
            }
        }
    }

    impl Object for Probe {
        fn object_id(&self) -> ObjectId {
            self.base.id()
        }
    }

    #[test]
    fn test_register_and_name() {
        let probe = Probe::new();
        assert!(global_registry().unwrap().contains(probe.object_id()));
        assert_eq!(probe.base.name(), "");
        probe.base.set_name("probe");
        assert_eq!(probe.base.name(), "probe");
    }

    #[test]
    fn test_parent_child() {
        let parent = Probe::new();
        let child = Probe::new();

        child.base.set_parent(Some(parent.object_id())).unwrap();
        assert_eq!(child.base.parent(), Some(parent.object_id()));
        assert_eq!(parent.base.children(), vec![child.object_id()]);

        child.base.set_parent(None).unwrap();
        assert!(parent.base.children().is_empty());
    }

    #[test]
    fn test_find_child_by_name() {
        let parent = Probe::new();
        let child = Probe::new();
        child.base.set_name("needle");
        child.base.set_parent(Some(parent.object_id())).unwrap();

        assert_eq!(
            parent.base.find_child_by_name("needle"),
            Some(child.object_id())
        );
        assert_eq!(parent.base.find_child_by_name("haystack"), None);
    }

    #[test]
    fn test_cycle_rejected() {
        let a = Probe::new();
        let b = Probe::new();
        b.base.set_parent(Some(a.object_id())).unwrap();

        let err = a.base.set_parent(Some(b.object_id())).unwrap_err();
        assert_eq!(err, ObjectError::WouldCreateCycle(a.object_id()));
    }

    #[test]
    fn test_destroy_removes_subtree() {
        init_global_registry();
        let registry = global_registry().unwrap();

        let parent = Probe::new();
        let child = Probe::new();
        let parent_id = parent.object_id();
        let child_id = child.object_id();
        child.base.set_parent(Some(parent_id)).unwrap();

        // Dropping the parent destroys the whole subtree; the child's own
        // drop then finds nothing to remove.
        drop(parent);
        assert!(!registry.contains(parent_id));
        assert!(!registry.contains(child_id));
    }

    #[test]
    fn test_not_found() {
        init_global_registry();
        let registry = global_registry().unwrap();
        let stale = {
            let probe = Probe::new();
            probe.object_id()
        };
        assert!(matches!(
            registry.object_name(stale),
            Err(ObjectError::NotFound(_))
        ));
    }

    #[test]
    fn test_registry_queries() {
        let probe = Probe::new();
        let registry = global_registry().unwrap();

        assert!(registry.type_name(probe.object_id()).unwrap().contains("Probe"));
        assert!(registry.root_objects().contains(&probe.object_id()));
        assert!(registry.object_count() >= 1);

        let children = registry.with_read(|r| r.children(probe.object_id()).unwrap().len());
        assert_eq!(children, 0);
    }

    #[test]
    fn test_raw_roundtrip() {
        let probe = Probe::new();
        let raw = probe.object_id().as_raw();
        assert_eq!(ObjectId::from_raw(raw), probe.object_id());
    }
}
