//! Full refereed sessions built from configuration.

use std::rc::Rc;

use roshambo::config::AppConfig;
use roshambo::doubles::{MockMoney, StubMoney};
use roshambo::engine::referee::Referee;
use roshambo::engine::scoreboard::Scoreboard;
use roshambo::gesture::Gesture;
use roshambo::player::random::{FixedIndex, SeededRandom};
use roshambo::player::Player;
use roshambo::types::Outcome;

#[test]
fn test_deterministic_session_totals() {
    // Paper against Rock every round: left always wins the stake.
    let mut left = Player::new().named("Phillip").with_cash(100).with_random_source(FixedIndex(1));
    let mut right = Player::new().named("Flash").with_cash(30).with_random_source(FixedIndex(0));
    let referee = Referee::new(10);
    let mut board = Scoreboard::new();

    for _ in 0..5 {
        let report = referee.play_round(&mut left, &mut right).unwrap();
        assert_eq!(report.outcome, Outcome::Beats);
        board.record(&report);
    }

    // Flash can only cover three stakes; the last two are refused silently.
    assert_eq!(board.left_wins, 5);
    assert_eq!(board.cash_moved, 30);
    assert_eq!((left.cash, right.cash), (130, 0));
}

#[test]
fn test_earnings_keep_a_losing_player_solvent() {
    let income = Rc::new(MockMoney::new(10));
    let mut left = Player::new().with_cash(0).with_random_source(FixedIndex(2));
    let mut right = Player::with_money_source(income.clone())
        .with_cash(0)
        .with_random_source(FixedIndex(1));
    let referee = Referee::new(10);

    for _ in 0..4 {
        right.collect_earnings().unwrap();
        referee.play_round(&mut left, &mut right).unwrap();
    }

    assert_eq!(income.call_count(MockMoney::MAKE_MONEY), 4);
    assert_eq!((left.cash, right.cash), (40, 0));
}

#[test]
fn test_seeded_sessions_repeat() {
    fn run(seed_left: u64, seed_right: u64) -> (Scoreboard, i64, i64) {
        let mut left = Player::with_money_source(Rc::new(StubMoney::new(5)))
            .with_cash(50)
            .with_random_source(SeededRandom::new(seed_left));
        let mut right = Player::new().with_cash(50).with_random_source(SeededRandom::new(seed_right));
        let referee = Referee::new(3);
        let mut board = Scoreboard::new();
        for _ in 0..25 {
            left.collect_earnings().unwrap();
            board.record(&referee.play_round(&mut left, &mut right).unwrap());
        }
        (board, left.cash, right.cash)
    }

    let first = run(11, 12);
    let second = run(11, 12);
    assert_eq!(first, second);

    let (board, left_cash, right_cash) = first;
    assert_eq!(board.rounds, 25);
    assert_eq!(board.left_wins + board.right_wins + board.ties, 25);
    // Stakes only move cash between players; income is the only new money.
    assert_eq!(left_cash + right_cash, 100 + 25 * 5);
}

#[test]
fn test_config_driven_players() {
    let cfg = AppConfig::from_toml_str(
        r#"
        [session]
        rounds = 2
        stake = 1

        [[players]]
        name = "Phillip"
        starting_cash = 100

        [[players]]
        name = "Flash"
        starting_cash = 1000
        income = 50
        "#,
    )
    .unwrap();

    let left_cfg = &cfg.players[0];
    let right_cfg = &cfg.players[1];
    let mut left = Player::new().named(left_cfg.name.clone()).with_cash(left_cfg.starting_cash);
    let mut right = Player::with_money_source(Rc::new(StubMoney::new(right_cfg.income)))
        .named(right_cfg.name.clone())
        .with_cash(right_cfg.starting_cash);

    let referee = Referee::new(cfg.session.stake);
    for _ in 0..cfg.session.rounds {
        right.collect_earnings().unwrap();
        let report = referee.play_round(&mut left, &mut right).unwrap();
        assert_eq!(report.left, "Phillip");
        assert_eq!(report.right, "Flash");
        assert!(Gesture::ALL.contains(&report.left_gesture));
    }

    assert_eq!(left.cash + right.cash, 100 + 1000 + 2 * 50);
}
