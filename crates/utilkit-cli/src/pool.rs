//! # Pool Subcommand
//!
//! Grows a pool of mock database connections to `--capacity` slots and tries
//! to hold `--leases` of them at once.

use std::fmt;

use clap::Args;
use serde::Serialize;
use utilkit::{Pool, PoolError, PoolStats};

/// Arguments for the pool subcommand.
#[derive(Args, Debug, Clone)]
pub struct PoolArgs {
    /// Number of slots to grow the pool to.
    #[arg(long, default_value_t = 4)]
    pub capacity: usize,

    /// Number of leases to request while holding every earlier one.
    #[arg(long, default_value_t = 5)]
    pub leases: usize,

    /// Host name written into each leased connection.
    #[arg(long, default_value = "localhost")]
    pub host: String,
}

#[derive(Debug, Default)]
struct Connection {
    host: String,
    session: usize,
}

/// Outcome of a pool run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoolReport {
    /// Slot index of each granted lease, in grant order.
    pub granted: Vec<usize>,
    /// Requests refused because the pool was exhausted.
    pub rejected: usize,
    /// Pool counters while every granted lease was still held.
    pub peak: PoolStats,
    /// Pool counters after all leases were returned.
    pub after_release: PoolStats,
}

/// Run the pool demonstration.
pub fn run(args: &PoolArgs) -> anyhow::Result<PoolReport> {
    let pool: Pool<Connection> = Pool::with_capacity(args.capacity);

    let mut held = Vec::with_capacity(args.leases.min(args.capacity));
    let mut rejected = 0;
    for session in 0..args.leases {
        match pool.acquire_with(|| Connection {
            host: args.host.clone(),
            session,
        }) {
            Ok(conn) => {
                tracing::info!(index = conn.index(), host = %conn.host, session = conn.session, "connection leased");
                held.push(conn);
            }
            Err(PoolError::Exhausted { capacity }) => {
                tracing::warn!(capacity, session, "connection request refused");
                rejected += 1;
            }
        }
    }

    let granted = held.iter().map(|conn| conn.index()).collect();
    let peak = pool.stats();
    drop(held);

    Ok(PoolReport {
        granted,
        rejected,
        peak,
        after_release: pool.stats(),
    })
}

impl fmt::Display for PoolReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "capacity:  {}", self.peak.capacity)?;
        writeln!(f, "granted:   {:?}", self.granted)?;
        writeln!(f, "rejected:  {}", self.rejected)?;
        writeln!(
            f,
            "peak:      {} leased, {} available ({:.0}% utilized)",
            self.peak.leased,
            self.peak.available,
            self.peak.utilization() * 100.0
        )?;
        write!(
            f,
            "released:  {} leased, {} available",
            self.after_release.leased, self.after_release.available
        )
    }
}
