use tenon_core::{object::Persistent, ObjectId, ObjectRef};

use std::{cell::RefCell, collections::HashMap, rc::Rc, rc::Weak};

/// Identity map of one class: at most one live instance per object id.
///
/// Entries are weak. An object stays cached exactly as long as the
/// application, or another live object, holds it; dead entries are skipped
/// on lookup and swept by [`ObjectCache::release_unreferenced`].
#[derive(Default)]
pub(crate) struct ObjectCache {
    objects: HashMap<ObjectId, Weak<RefCell<dyn Persistent>>>,
}

impl ObjectCache {
    /// Caches `object` under its current object id. Transient objects are
    /// ignored.
    pub(crate) fn add(&mut self, object: &ObjectRef) {
        let oid = object.borrow().object_id();
        if oid.is_valid() {
            self.objects.insert(oid, Rc::downgrade(object));
        }
    }

    pub(crate) fn remove(&mut self, oid: ObjectId) -> Option<ObjectRef> {
        self.objects.remove(&oid)?.upgrade()
    }

    pub(crate) fn lookup(&self, oid: ObjectId) -> Option<ObjectRef> {
        self.objects.get(&oid)?.upgrade()
    }

    /// Number of cached objects that are still alive.
    pub(crate) fn len(&self) -> usize {
        self.objects
            .values()
            .filter(|object| object.strong_count() > 0)
            .count()
    }

    /// Sweeps the entries whose object has been dropped. Returns the number
    /// of entries swept.
    pub(crate) fn release_unreferenced(&mut self) -> usize {
        let before = self.objects.len();
        self.objects.retain(|_, object| object.strong_count() > 0);
        before - self.objects.len()
    }
}
