// Randomised stimulus checked against the invariants and a shadow memory
use crate::core::components::filter_store::FilterStore;
use crate::core::components::skew::skewed_address;
use crate::core::execution::config::FilterStoreConfig;
use crate::core::types::{TickInputs, Word, WriteCommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NUM_BANKS: usize = 4;
const DEPTH: usize = 6;
const TICKS: usize = 2_000;

fn random_inputs(rng: &mut StdRng) -> TickInputs {
    let mut inputs = TickInputs::idle();
    if rng.gen_bool(0.4) {
        inputs = inputs.with_write(WriteCommand::new(
            rng.gen_range(0..NUM_BANKS),
            rng.gen_range(0..DEPTH),
            rng.gen(),
        ));
    }
    if rng.gen_bool(0.1) {
        inputs = inputs.with_start();
    }
    if rng.gen_bool(0.05) {
        inputs = inputs.with_reset();
    }
    inputs
}

#[test]
fn test_random_stimulus_invariants() {
    for seed in [1_u64, 7, 42, 2024] {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut store = FilterStore::new(
            FilterStoreConfig::new()
                .with_num_banks(NUM_BANKS)
                .with_depth(DEPTH),
        )
        .unwrap();
        let mut shadow: Vec<Vec<Word>> = vec![vec![0; DEPTH]; NUM_BANKS];
        let mut expected_out: Vec<Word> = vec![0; NUM_BANKS];

        for tick in 0..TICKS {
            if !store.running() && rng.gen_bool(0.05) {
                store.set_size(rng.gen_range(0..=DEPTH)).unwrap();
            }

            let size = store.size();
            let position = store.position();
            if size > 0 {
                assert!(
                    position < size,
                    "seed {} tick {}: position {} size {}",
                    seed,
                    tick,
                    position,
                    size
                );
            }

            let addresses = store.read_addresses();
            for i in 0..NUM_BANKS {
                assert_eq!(addresses[i], skewed_address(position, i, size));
                if size == 0 {
                    continue;
                }
                for j in 0..NUM_BANKS {
                    let (ai, aj) = (addresses[i].unwrap(), addresses[j].unwrap());
                    let expected =
                        (aj as i64 - i as i64 + j as i64).rem_euclid(size as i64) as usize;
                    assert_eq!(
                        ai, expected,
                        "seed {} tick {}: skew between banks {} and {}",
                        seed, tick, i, j
                    );
                }
            }

            // Read-first: lanes latch the shadow as it stood before this tick's write
            for (bank, addr) in addresses.iter().enumerate() {
                if let Some(addr) = addr {
                    expected_out[bank] = shadow[bank][*addr];
                }
            }

            let inputs = random_inputs(&mut rng);
            store.tick(&inputs).unwrap();
            if let Some(cmd) = inputs.write {
                shadow[cmd.store][cmd.addr] = cmd.data;
            }

            assert_eq!(store.values_out(), expected_out, "seed {} tick {}", seed, tick);
            if inputs.reset {
                assert_eq!(store.position(), 0);
                assert!(!store.running());
            }
        }

        for (bank, words) in shadow.iter().enumerate() {
            for (addr, &word) in words.iter().enumerate() {
                assert_eq!(store.peek(bank, addr).unwrap(), word);
            }
        }
    }
}
