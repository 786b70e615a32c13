//! # utilkit-cli: Component Demonstrations
//!
//! Small clap-based drivers that exercise each utilkit component from the
//! command line.
//!
//! ## Subcommands
//!
//! - `pool`: grow a connection pool and hold leases until it runs dry
//! - `buffer`: encode a record, dump the bytes, decode it back
//! - `fsm`: walk a door state machine through a list of target states
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in the `*Args` structs; each module's `run`
//!   returns a serializable report and does no printing.
//! - `main` decides between the plain-text (`Display`) and `--json` renderings.

pub mod buffer;
pub mod fsm;
pub mod pool;
