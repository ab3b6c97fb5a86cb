pub mod tablet_factory;
pub mod transport_factory;

pub use tablet_factory::TabletFactory;
pub use transport_factory::{RecordedRequest, RecordingTransport, TransportFactory};
