use filter_store::core::execution::{CycleEngine, SimulationEngine, StreamObserver, TickRecord};
use filter_store::{ConcurrencyMode, FilterStoreConfig, Phase, TickInputs, Word};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Prints each streamed tick as one row of lane values
struct LanePrinter;

impl StreamObserver for LanePrinter {
    fn on_tick(&mut self, record: &TickRecord) {
        if record.phase == Phase::Idle {
            return;
        }
        let lanes: Vec<String> = record
            .values_out
            .iter()
            .map(|v| format!("{:08x}", v))
            .collect();
        println!(
            "cycle {:>4} {:<9} pos {:>3}  {}",
            record.cycle,
            record.phase.to_string(),
            record.position,
            lanes.join(" ")
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();

    let config = FilterStoreConfig::new()
        .with_num_banks(4)
        .with_depth(16)
        .with_concurrency(ConcurrencyMode::Rayon);
    let random_seed = 42;
    let filter_words = 24;

    println!("Filter store demo");
    println!(
        "  banks: {}, depth: {}, filter words: {}, seed: {}",
        config.num_banks, config.depth, filter_words, random_seed
    );

    let mut rng = StdRng::seed_from_u64(random_seed);
    let words: Vec<Word> = (0..filter_words).map(|_| rng.gen()).collect();

    let mut engine = CycleEngine::new(config)?;
    let size = engine.load_filter(&words)?;
    let load_cycles = engine.pending() as u64;
    engine.schedule(TickInputs::start());
    println!("  logical size: {}, load cycles: {}", size, load_cycles);
    println!();

    // load, priming, then two full passes over the filter
    let max_cycles = load_cycles + 1 + 2 * size as u64;
    let mut sim = SimulationEngine::new(engine, Some(max_cycles));
    sim.add_observer(Box::new(LanePrinter));
    let cycles = sim.run()?;

    let mut engine = sim.into_cycle_engine();
    engine.cycle_with(&TickInputs::reset())?;
    println!();
    println!(
        "Ran {} cycles, {} writes accepted, final phase {}",
        cycles,
        engine.store().writes_accepted(),
        engine.store().phase()
    );
    Ok(())
}
