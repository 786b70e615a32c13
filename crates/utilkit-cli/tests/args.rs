//! Argument parsing for each subcommand, checked through small flattening
//! wrappers so the binary's own `Cli` stays private.

use clap::Parser;
use utilkit_cli::buffer::BufferArgs;
use utilkit_cli::fsm::{DoorState, FsmArgs};
use utilkit_cli::pool::PoolArgs;

macro_rules! harness {
    ($name:ident, $args:ty) => {
        #[derive(Parser)]
        struct $name {
            #[command(flatten)]
            args: $args,
        }

        impl $name {
            fn parse_args(argv: &[&str]) -> Result<$args, clap::Error> {
                Self::try_parse_from(std::iter::once("utilkit").chain(argv.iter().copied()))
                    .map(|h| h.args)
            }
        }
    };
}

harness!(PoolCmd, PoolArgs);
harness!(BufferCmd, BufferArgs);
harness!(FsmCmd, FsmArgs);

#[test]
fn test_pool_defaults() {
    let args = PoolCmd::parse_args(&[]).unwrap();
    assert_eq!(args.capacity, 4);
    assert_eq!(args.leases, 5);
    assert_eq!(args.host, "localhost");
}

#[test]
fn test_pool_flags() {
    let args = PoolCmd::parse_args(&["--capacity", "2", "--leases", "7"]).unwrap();
    let report = utilkit_cli::pool::run(&args).unwrap();
    assert_eq!(report.granted.len(), 2);
    assert_eq!(report.rejected, 5);
}

#[test]
fn test_buffer_requires_text() {
    assert!(BufferCmd::parse_args(&["--number", "1"]).is_err());
}

#[test]
fn test_buffer_accepts_negative_number() {
    let args = BufferCmd::parse_args(&["--text", "hi", "--number", "-4.25"]).unwrap();
    let report = utilkit_cli::buffer::run(&args).unwrap();
    assert_eq!(report.decoded.unwrap().number, -4.25);
}

#[test]
fn test_fsm_parses_state_names() {
    let args = FsmCmd::parse_args(&["--steps", "open", "closed", "locked"]).unwrap();
    assert_eq!(
        args.steps,
        vec![DoorState::Open, DoorState::Closed, DoorState::Locked]
    );
}

#[test]
fn test_fsm_rejects_unknown_state() {
    assert!(FsmCmd::parse_args(&["--steps", "ajar"]).is_err());
}
