pub use super::factories::{TabletFactory, TransportFactory};

pub struct Factory;

impl Factory {
    pub fn tablet() -> TabletFactory {
        TabletFactory::new()
    }

    pub fn transport() -> TransportFactory {
        TransportFactory::new()
    }
}
