//! Board generation properties.
//!
//! Uses proptest for shape invariants and a fixed-seed frequency count for
//! shuffle uniformity.

use proptest::prelude::*;

use memory_match::core::{generate_board, EngineError, GameConfig, GameRng, SymbolId};

proptest! {
    /// Every level deals `6 + 2*(level-1)` cards, each symbol exactly twice.
    #[test]
    fn board_shape(level in 1u32..=9, seed in any::<u64>()) {
        let config = GameConfig::default();
        let mut rng = GameRng::new(seed);
        let board = generate_board(level, &config, &mut rng).unwrap();

        prop_assert_eq!(board.len(), 6 + 2 * (level as usize - 1));
        let counts = board.symbol_counts();
        prop_assert_eq!(counts.len(), config.pair_count(level));
        prop_assert!(counts.values().all(|&n| n == 2));
    }

    /// The shuffle is a permutation of the duplicated catalog prefix.
    #[test]
    fn board_is_permutation(level in 1u32..=9, seed in any::<u64>()) {
        let config = GameConfig::default();
        let mut rng = GameRng::new(seed);
        let board = generate_board(level, &config, &mut rng).unwrap();

        let mut cells: Vec<SymbolId> = board.iter().collect();
        cells.sort();
        let expected: Vec<SymbolId> = (0..config.pair_count(level) as u16)
            .flat_map(|i| [SymbolId::new(i), SymbolId::new(i)])
            .collect();
        prop_assert_eq!(cells, expected);
    }

    /// Board growth follows the configured pair counts.
    #[test]
    fn custom_growth(base in 1usize..5, per_level in 1usize..4, seed in any::<u64>()) {
        let config = GameConfig::default().with_pairs(base, per_level);
        prop_assume!(config.validate().is_ok());
        let mut rng = GameRng::new(seed);

        for level in 1..=config.max_level() {
            let board = generate_board(level, &config, &mut rng).unwrap();
            prop_assert_eq!(board.len(), 2 * (base + (level as usize - 1) * per_level));
        }
        let over = config.max_level() + 1;
        prop_assert_eq!(
            generate_board(over, &config, &mut rng),
            Err(EngineError::LevelUnsupported { level: over, max_level: config.max_level() })
        );
    }
}

/// Each symbol lands in each position about equally often.
#[test]
fn test_shuffle_position_distribution() {
    const TRIALS: usize = 30_000;
    let config = GameConfig::default();
    let mut rng = GameRng::new(2024);

    // counts[position][symbol]
    let mut counts = [[0usize; 3]; 6];
    for _ in 0..TRIALS {
        let board = generate_board(1, &config, &mut rng).unwrap();
        for (pos, symbol) in board.iter().enumerate() {
            counts[pos][symbol.index()] += 1;
        }
    }

    // Each symbol occupies 2 of 6 cells, so expect a third of trials.
    let expected = TRIALS as f64 / 3.0;
    for row in &counts {
        for &n in row {
            let deviation = (n as f64 - expected).abs() / expected;
            assert!(deviation < 0.05, "count {} deviates {:.3} from {}", n, deviation, expected);
        }
    }
}

/// All 90 distinct level-1 layouts show up.
#[test]
fn test_every_layout_reachable() {
    use std::collections::HashSet;

    let config = GameConfig::default();
    let mut rng = GameRng::new(5);
    let mut seen = HashSet::new();
    for _ in 0..5_000 {
        let board = generate_board(1, &config, &mut rng).unwrap();
        seen.insert(board.iter().collect::<Vec<_>>());
    }

    // 6! / (2! 2! 2!) = 90
    assert_eq!(seen.len(), 90);
}
