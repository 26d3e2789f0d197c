//! Pong entry point
//!
//! Native builds have no window backend yet; the binary runs one minute of
//! unattended play on the headless host and logs the result.

use pong_core::platform::HeadlessHost;
use pong_core::{Pong, Variant, run};

/// One minute at the default frame rate
const DEMO_FRAMES: usize = 60 * 60;

fn main() {
    env_logger::init();
    log::info!("Pong (native) starting...");

    let seed: u64 = rand::random();
    let mut pong = match Pong::from_variant(Variant::Classic, seed) {
        Ok(pong) => pong,
        Err(e) => {
            log::error!("Invalid settings: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("Replay seed {}", pong.seed());

    let mut host = HeadlessHost::idle(DEMO_FRAMES);
    match run(&mut pong, &mut host) {
        Ok(frames) => {
            let (left, right) = pong.state().score();
            println!(
                "{} frames played, score {} - {}, seed {}",
                frames,
                left,
                right,
                pong.seed()
            );
        }
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}
