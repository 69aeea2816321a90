// crates/drift-core/src/item.rs
use glam::Vec2;

/// Anything the flow layout can place: an identity plus a natural size.
///
/// `intrinsic_size` is the size the item takes when rendered on its own,
/// independent of where it ends up. The layout only reads items.
pub trait FlowItem {
    type Id: Clone;

    fn id(&self) -> Self::Id;
    fn intrinsic_size(&self) -> Vec2;
}

impl<T: FlowItem + ?Sized> FlowItem for &T {
    type Id = T::Id;

    fn id(&self) -> Self::Id {
        (**self).id()
    }

    fn intrinsic_size(&self) -> Vec2 {
        (**self).intrinsic_size()
    }
}

/// An item whose size is already known.
#[derive(Debug, Clone, PartialEq)]
pub struct SizedItem {
    pub id: String,
    pub size: Vec2,
}

impl SizedItem {
    pub fn new(id: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            size: Vec2::new(width, height),
        }
    }
}

impl FlowItem for SizedItem {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn intrinsic_size(&self) -> Vec2 {
        self.size
    }
}

/// Bare sizes, identified by position. Handy for tests and quick callers.
impl FlowItem for Vec2 {
    type Id = ();

    fn id(&self) {}

    fn intrinsic_size(&self) -> Vec2 {
        *self
    }
}
