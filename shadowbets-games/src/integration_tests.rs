//! Whole-round behavior across variants sharing one profile.

use crate::engine::{BetStatus, SessionPhase, SessionResult, WagerEngine};
use crate::scheduler::ImmediateScheduler;
use crate::table::GameTable;
use crate::variant::{
    CoinSide, GameVariantConfig, Guess, Lane, OutcomeRule, Parity, PocketColor, Suit,
};
use shadowbets_core::{
    Amount, GameMode, GameResult, MemoryStore, PersistenceGateway, PlayerProfile, ProfileConfig,
    ScriptedRandom, SeededRandom,
};
use std::sync::Arc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

async fn fresh_profile() -> (Arc<MemoryStore>, PlayerProfile) {
    let store = Arc::new(MemoryStore::new());
    let gateway: Arc<dyn PersistenceGateway> = store.clone();
    let profile = PlayerProfile::open_default(gateway).await.unwrap();
    (store, profile)
}

fn first_guess(config: &GameVariantConfig) -> Guess {
    config.guesses[0]
}

#[tokio::test]
async fn test_balance_matches_history_across_variants() {
    init_tracing();
    let (_store, profile) = fresh_profile().await;
    let start = profile.ledger().balance();

    for (seed, config) in GameVariantConfig::all().into_iter().enumerate() {
        let guess = first_guess(&config);
        let engine =
            WagerEngine::for_profile(config, &profile, Box::new(SeededRandom::new(seed as u64)));
        let mut table = GameTable::new(engine, ImmediateScheduler);
        for _ in 0..8 {
            table.play(guess).await.unwrap();
        }
    }

    let history = profile.history().snapshot();
    assert_eq!(history.len(), 40);

    let staked: u64 = history.iter().map(|r| r.bet_amount.to_units()).sum();
    let won: u64 = history.iter().map(|r| r.pot_won.to_units()).sum();
    assert_eq!(
        profile.ledger().balance().to_units(),
        start.to_units() - staked + won
    );

    for record in &history {
        match record.result {
            GameResult::Win => assert_eq!(record.pot_won, Amount::from_units(250)),
            _ => assert_eq!(record.pot_won, Amount::ZERO),
        }
    }
}

#[tokio::test]
async fn test_history_is_bounded_and_newest_first() {
    let (_store, profile) = fresh_profile().await;
    let engine = WagerEngine::for_profile(
        GameVariantConfig::race(),
        &profile,
        Box::new(SeededRandom::new(99)),
    );
    let mut table = GameTable::new(engine, ImmediateScheduler);

    for _ in 0..55 {
        // top up so the run never stalls on funds
        if !profile.ledger().can_afford(Amount::from_units(25)) {
            profile.ledger().credit(Amount::from_units(1000)).await.unwrap();
        }
        table.play(Guess::Lane(Lane::Two)).await.unwrap();
    }

    let history = profile.history().snapshot();
    assert_eq!(history.len(), 50);
    assert!(history.windows(2).all(|pair| pair[0].date >= pair[1].date));
    assert!(history.iter().all(|r| r.game_mode == GameMode::Race));
}

#[tokio::test]
async fn test_insufficient_funds_changes_nothing() {
    let (store, profile) = fresh_profile().await;
    profile.ledger().reset(Amount::from_units(10)).await.unwrap();
    let writes = store.write_count();

    for config in GameVariantConfig::all() {
        let mut engine = WagerEngine::for_profile(config, &profile, Box::new(ScriptedRandom::default()));
        let status = engine.place_bet().await.unwrap();
        assert!(matches!(status, BetStatus::InsufficientFunds { .. }));
        assert_eq!(engine.phase(), SessionPhase::Idle);
    }

    assert_eq!(profile.ledger().balance(), Amount::from_units(10));
    assert!(profile.history().is_empty());
    assert_eq!(store.write_count(), writes);
}

#[tokio::test]
async fn test_dice_forced_sums() {
    let (_store, profile) = fresh_profile().await;

    // name, opponent guess, then 1+3 = 4
    let mut engine = WagerEngine::for_profile(
        GameVariantConfig::dice(),
        &profile,
        Box::new(ScriptedRandom::new([0, 0, 1, 3])),
    );
    engine.place_bet().await.unwrap();
    engine.reveal_opponent().unwrap();
    engine.make_guess(Guess::Parity(Parity::Even)).unwrap();
    assert_eq!(engine.settle().await.unwrap().result, SessionResult::Win);
    assert_eq!(profile.ledger().balance(), Amount::from_units(1225));

    // 3+4 = 7
    let mut engine = WagerEngine::for_profile(
        GameVariantConfig::dice(),
        &profile,
        Box::new(ScriptedRandom::new([0, 0, 3, 4])),
    );
    engine.place_bet().await.unwrap();
    engine.reveal_opponent().unwrap();
    engine.make_guess(Guess::Parity(Parity::Even)).unwrap();
    assert_eq!(engine.settle().await.unwrap().result, SessionResult::Loss);
    assert_eq!(profile.ledger().balance(), Amount::from_units(1200));
}

#[tokio::test]
async fn test_roulette_zero_only_pays_green() {
    let (_store, profile) = fresh_profile().await;

    for color in [PocketColor::Red, PocketColor::Black, PocketColor::Green] {
        let engine = WagerEngine::for_profile(
            GameVariantConfig::roulette(),
            &profile,
            Box::new(ScriptedRandom::new([0, 0, 0])),
        );
        let mut table = GameTable::new(engine, ImmediateScheduler);
        let settlement = table.play(Guess::Color(color)).await.unwrap().unwrap();
        let expected = if color == PocketColor::Green {
            SessionResult::Win
        } else {
            SessionResult::Loss
        };
        assert_eq!(settlement.result, expected, "{:?}", color);
    }

    // 1000 - 3 * 25 + 250
    assert_eq!(profile.ledger().balance(), Amount::from_units(1175));
}

#[tokio::test]
async fn test_opponent_guess_never_affects_result() {
    // every player guess x every opponent pick x every forced outcome draw
    for config in [GameVariantConfig::coins(), GameVariantConfig::cards()] {
        let (mut wins, mut losses) = (0, 0);
        let draws: Vec<i64> = match config.outcome_rule {
            OutcomeRule::CoinFlip => vec![0, 1],
            _ => vec![0, 1, 2, 3],
        };

        for player_guess in config.guesses.iter().copied() {
            for &outcome_draw in &draws {
                let mut results = Vec::new();

                for opponent_pick in 0..config.guesses.len() as i64 {
                    let (_store, profile) = fresh_profile().await;
                    let engine = WagerEngine::for_profile(
                        config.clone(),
                        &profile,
                        Box::new(ScriptedRandom::new([1, opponent_pick, outcome_draw])),
                    );
                    let mut table = GameTable::new(engine, ImmediateScheduler);
                    let settlement = table.play(player_guess).await.unwrap().unwrap();

                    let expected = if config.wins(&player_guess, &settlement.outcome) {
                        SessionResult::Win
                    } else {
                        SessionResult::Loss
                    };
                    assert_eq!(settlement.result, expected);
                    assert_eq!(
                        table.engine().session().opponent_guess,
                        Some(config.guesses[opponent_pick as usize])
                    );
                    results.push((settlement.result, profile.ledger().balance()));
                }

                assert!(
                    results.windows(2).all(|pair| pair[0] == pair[1]),
                    "{} {:?} draw {}: {:?}",
                    config.mode,
                    player_guess,
                    outcome_draw,
                    results
                );
                match results[0].0 {
                    SessionResult::Win => wins += 1,
                    SessionResult::Loss => losses += 1,
                    SessionResult::None => panic!("settled round without a result"),
                }
            }
        }
        assert!(wins > 0 && losses > 0, "{}: {} wins {} losses", config.mode, wins, losses);
    }

    // the fixed diamonds case pays out whatever the bot picked
    for opponent_pick in 0..4 {
        let (_store, profile) = fresh_profile().await;
        let engine = WagerEngine::for_profile(
            GameVariantConfig::cards(),
            &profile,
            Box::new(ScriptedRandom::new([1, opponent_pick, 2])),
        );
        let mut table = GameTable::new(engine, ImmediateScheduler);
        let settlement = table.play(Guess::Suit(Suit::Diamonds)).await.unwrap().unwrap();
        assert_eq!(settlement.result, SessionResult::Win);

        let (_store, profile) = fresh_profile().await;
        let engine = WagerEngine::for_profile(
            GameVariantConfig::cards(),
            &profile,
            Box::new(ScriptedRandom::new([1, opponent_pick, 2])),
        );
        let mut table = GameTable::new(engine, ImmediateScheduler);
        let settlement = table.play(Guess::Suit(Suit::Clubs)).await.unwrap().unwrap();
        assert_eq!(settlement.result, SessionResult::Loss);
        assert_eq!(profile.ledger().balance(), Amount::from_units(975));
    }

    // coins: the bot backing the player's side or the other one changes nothing
    for opponent_pick in 0..2 {
        let (_store, profile) = fresh_profile().await;
        let engine = WagerEngine::for_profile(
            GameVariantConfig::coins(),
            &profile,
            Box::new(ScriptedRandom::new([0, opponent_pick, 1])),
        );
        let mut table = GameTable::new(engine, ImmediateScheduler);
        let settlement = table.play(Guess::Coin(CoinSide::Heads)).await.unwrap().unwrap();
        assert_eq!(settlement.result, SessionResult::Loss);
        assert_eq!(profile.ledger().balance(), Amount::from_units(975));
    }
}

#[tokio::test]
async fn test_engines_share_one_wallet() {
    let (_store, profile) = fresh_profile().await;
    let mut coins = WagerEngine::for_profile(
        GameVariantConfig::coins(),
        &profile,
        Box::new(ScriptedRandom::new([0, 0, 1])),
    );
    let mut race = WagerEngine::for_profile(
        GameVariantConfig::race(),
        &profile,
        Box::new(ScriptedRandom::new([0, 0, 1])),
    );

    coins.place_bet().await.unwrap();
    race.place_bet().await.unwrap();
    assert_eq!(profile.ledger().balance(), Amount::from_units(950));

    race.reveal_opponent().unwrap();
    race.make_guess(Guess::Lane(Lane::One)).unwrap();
    race.settle().await.unwrap();

    coins.reveal_opponent().unwrap();
    coins.make_guess(Guess::Coin(CoinSide::Heads)).unwrap();
    coins.settle().await.unwrap();

    assert_eq!(profile.ledger().balance(), Amount::from_units(1200));
    let history = profile.history().snapshot();
    assert_eq!(history[0].game_mode, GameMode::Coins);
    assert_eq!(history[0].result, GameResult::Loss);
    assert_eq!(history[1].game_mode, GameMode::Race);
    assert_eq!(history[1].result, GameResult::Win);
}

#[tokio::test]
async fn test_state_survives_restart() {
    let (store, profile) = fresh_profile().await;
    let engine = WagerEngine::for_profile(
        GameVariantConfig::coins(),
        &profile,
        Box::new(ScriptedRandom::new([0, 0, 1])),
    );
    GameTable::new(engine, ImmediateScheduler)
        .play(Guess::Coin(CoinSide::Heads))
        .await
        .unwrap();

    let key = ProfileConfig::default().snapshot_key;
    let blob = store.get(&key).unwrap();
    let restored = PlayerProfile::open_default(Arc::new(MemoryStore::with_blob(&key, blob)))
        .await
        .unwrap();

    assert_eq!(restored.ledger().balance(), Amount::from_units(975));
    assert_eq!(restored.history().snapshot(), profile.history().snapshot());
}

#[tokio::test]
async fn test_reset_after_play() {
    let (_store, profile) = fresh_profile().await;
    let engine = WagerEngine::for_profile(
        GameVariantConfig::dice(),
        &profile,
        Box::new(SeededRandom::new(5)),
    );
    let mut table = GameTable::new(engine, ImmediateScheduler);
    for _ in 0..3 {
        table.play(Guess::Parity(Parity::Odd)).await.unwrap();
    }

    profile.reset().await.unwrap();
    assert_eq!(profile.ledger().balance(), Amount::from_units(1000));
    assert!(profile.history().is_empty());
    assert_eq!(profile.stats().win_rate(), 0.0);

    // the table keeps working after a reset
    assert!(table.play(Guess::Parity(Parity::Odd)).await.unwrap().is_some());
    assert_eq!(profile.history().len(), 1);
}
