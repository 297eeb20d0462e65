mod instrumented;
mod reqwest_client;

pub use instrumented::{InstrumentedTransport, TransportBuilder};
