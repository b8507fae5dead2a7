use crate::{
    rotation::{ColumnRotation, CubeRotation, LateralColumnRotation, RowRotation},
    side::Side,
};

/// A change applied to a [`Cube`](crate::Cube), reported after it happened.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CubeEvent {
    DimensionChanged {
        dimension: usize,
    },
    FaceletChanged {
        side: Side,
        row: usize,
        col: usize,
    },
    RowRotated {
        index: usize,
        rotation: RowRotation,
    },
    ColumnRotated {
        index: usize,
        rotation: ColumnRotation,
    },
    LateralColumnRotated {
        index: usize,
        rotation: LateralColumnRotation,
    },
    CubeRotated(CubeRotation),
}

/// Something that wants to hear about cube mutations, such as a renderer.
pub trait EventSink {
    fn publish(&mut self, event: CubeEvent);
}

impl EventSink for Vec<CubeEvent> {
    fn publish(&mut self, event: CubeEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn publish(&mut self, event: CubeEvent) {
        (**self).publish(event);
    }
}

/// A sink that drops every event.
#[derive(Debug, Default, Copy, Clone)]
pub struct Discard;

impl EventSink for Discard {
    fn publish(&mut self, _event: CubeEvent) {}
}
