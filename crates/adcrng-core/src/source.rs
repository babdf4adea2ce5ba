//! Abstract voltage sample source and hardware adapters.
//!
//! Every analog front end is normalized to the [`VoltageSource`] trait: one
//! blocking read, one voltage, one possible hardware error. The randomizer
//! core never branches on the concrete hardware type.
//!
//! Two hardware shapes exist in the field and each gets an adapter:
//! a single-channel port ([`PortSource`]) and a multi-channel array that
//! must be refreshed before its channel values are valid ([`ArraySource`]).

use crate::error::Result;

/// A source of analog voltage samples.
///
/// `read_volts` may block until the hardware responds; there is no
/// cancellation below this trait. Implementations report failures through
/// [`Error::Hardware`](crate::Error::Hardware).
pub trait VoltageSource {
    /// Read one voltage sample, in volts.
    fn read_volts(&mut self) -> Result<f64>;
}

// ---------------------------------------------------------------------------
// Hardware-facing traits
// ---------------------------------------------------------------------------

/// A single-channel analog input port.
pub trait AnalogPort {
    /// Blocking one-shot conversion on this channel.
    fn read(&mut self) -> Result<f64>;
}

/// A multi-channel analog input array.
///
/// Channel values are stale until [`refresh`](AnalogArray::refresh) runs a
/// conversion cycle across the array.
pub trait AnalogArray {
    /// Run one conversion cycle over all channels.
    fn refresh(&mut self) -> Result<()>;

    /// Latest converted value for `channel`, in volts.
    fn current_value(&self, channel: usize) -> Result<f64>;
}

// ---------------------------------------------------------------------------
// Adapters
// ---------------------------------------------------------------------------

/// [`VoltageSource`] over a single-channel port.
pub struct PortSource<P: AnalogPort> {
    port: P,
}

impl<P: AnalogPort> PortSource<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// Hand the port back.
    pub fn into_inner(self) -> P {
        self.port
    }
}

impl<P: AnalogPort> VoltageSource for PortSource<P> {
    fn read_volts(&mut self) -> Result<f64> {
        self.port.read()
    }
}

/// [`VoltageSource`] over one channel of a multi-channel array.
///
/// Every read refreshes the whole array first, so two consecutive reads see
/// two independent conversions — required for debiasing, which assumes the
/// samples in a pair are independent draws.
pub struct ArraySource<A: AnalogArray> {
    array: A,
    channel: usize,
}

impl<A: AnalogArray> ArraySource<A> {
    /// Bind to `channel` of `array`.
    pub fn new(array: A, channel: usize) -> Self {
        Self { array, channel }
    }

    /// Hand the array back.
    pub fn into_inner(self) -> A {
        self.array
    }
}

impl<A: AnalogArray> VoltageSource for ArraySource<A> {
    fn read_volts(&mut self) -> Result<f64> {
        self.array.refresh()?;
        self.array.current_value(self.channel)
    }
}
