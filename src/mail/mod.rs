//! Outgoing mail: the message value object, the transport ports, and the
//! SMTP adapter behind them.

pub mod message;
pub mod smtp;
pub mod transport;
