//! The contract between persistable objects and the engine.
//!
//! Objects are shared through [`ObjectRef`], a reference counted cell. The
//! engine never looks inside an object directly: it asks the object to export
//! its members into an [`ObjectState`] and to import them back, and stamps the
//! persisted identity through [`Persistent::identity_mut`].

mod identity;
pub use identity::{ClassId, Identity, ObjectId};

mod state;
pub use state::{Field, ObjectState};

use crate::{schema::app::TypeInfo, Result};

use std::{any::Any, cell::RefCell, rc::Rc};

/// A shared handle to a persistable object.
pub type ObjectRef = Rc<RefCell<dyn Persistent>>;

pub trait Persistent: Any {
    /// The concrete class of this object.
    fn type_info(&self) -> &'static TypeInfo;

    fn identity(&self) -> &Identity;

    fn identity_mut(&mut self) -> &mut Identity;

    /// Write every declared member, including inherited ones, into `state`.
    fn store_members(&self, state: &mut ObjectState);

    /// Read members back from `state`.
    fn restore_members(&mut self, state: &ObjectState) -> Result<()>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// The persisted id, invalid while the object is transient.
    fn object_id(&self) -> ObjectId {
        self.identity().oid
    }
}

/// Moves `object` into a shared handle.
pub fn share<T: Persistent>(object: T) -> ObjectRef {
    Rc::new(RefCell::new(object))
}

/// Runs `f` against the concrete object behind `object`, if it is a `T`.
pub fn with_ref<T: Persistent, R>(object: &ObjectRef, f: impl FnOnce(&T) -> R) -> Option<R> {
    let object = object.borrow();
    object.as_any().downcast_ref::<T>().map(f)
}

/// Runs `f` against the concrete object behind `object` mutably, if it is a `T`.
pub fn with_mut<T: Persistent, R>(object: &ObjectRef, f: impl FnOnce(&mut T) -> R) -> Option<R> {
    let mut object = object.borrow_mut();
    object.as_any_mut().downcast_mut::<T>().map(f)
}
