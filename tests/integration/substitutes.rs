//! Shared collaborator scenarios, parameterized over substitute kind.
//!
//! The same withdraw-then-earn flow runs against a fake, a stub, a
//! hand-rolled mock, and a `mockall`-generated mock; only the expected
//! balance and the call accounting differ per kind.

use mockall::mock;
use mockall::predicate::*;
use std::rc::Rc;

use roshambo::account::BankAccount;
use roshambo::collaborators::{Logger, MoneyMaker};
use roshambo::doubles::{FakeMoney, MockLog, MockMoney, NullLog, StubLog, StubMoney};
use roshambo::player::Player;
use roshambo::types::Cash;

mock! {
    pub GeneratedMoney {}
    impl MoneyMaker for GeneratedMoney {
        fn make_money(&self) -> Cash;
    }
}

mock! {
    pub GeneratedLog {}
    impl Logger for GeneratedLog {
        fn write(&self, message: &str) -> bool;
    }
}

// ---------------------------------------------------------------------------
// Substitute kinds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum Kind {
    Fake,
    Stub,
    HandRolledMock,
    FrameworkMock,
}

impl Kind {
    const ALL: [Kind; 4] = [Kind::Fake, Kind::Stub, Kind::HandRolledMock, Kind::FrameworkMock];

    /// Money source paying `amount` per call (the fake ignores it),
    /// plus a check to run once the scenario finishes.
    fn money_source(self, amount: Cash, expected_calls: usize) -> (Rc<dyn MoneyMaker>, Box<dyn Fn()>) {
        let no_check: Box<dyn Fn()> = Box::new(|| {});
        match self {
            Kind::Fake => (Rc::new(FakeMoney) as Rc<dyn MoneyMaker>, no_check),
            Kind::Stub => (Rc::new(StubMoney::new(amount)) as Rc<dyn MoneyMaker>, no_check),
            Kind::HandRolledMock => {
                let mock = Rc::new(MockMoney::new(amount));
                let check = Rc::clone(&mock);
                let verify: Box<dyn Fn()> = Box::new(move || {
                    assert_eq!(check.call_count(MockMoney::MAKE_MONEY), expected_calls)
                });
                (mock as Rc<dyn MoneyMaker>, verify)
            }
            Kind::FrameworkMock => {
                // Call counts are verified when the mock is dropped.
                let mut mock = MockGeneratedMoney::new();
                mock.expect_make_money().times(expected_calls).return_const(amount);
                (Rc::new(mock) as Rc<dyn MoneyMaker>, no_check)
            }
        }
    }

    fn pays(self) -> bool {
        !matches!(self, Kind::Fake)
    }
}

/// Cash 100, withdraw 10, collect earnings `rounds` times.
fn withdraw_then_earn(source: Rc<dyn MoneyMaker>, rounds: usize) -> Cash {
    let mut player = Player::with_money_source(source).with_cash(100);
    player.withdraw(10);
    for _ in 0..rounds {
        player.collect_earnings().expect("money source attached");
    }
    player.cash
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn test_every_kind_once() {
    for kind in Kind::ALL {
        let (source, verify) = kind.money_source(50, 1);
        let cash = withdraw_then_earn(source, 1);
        let expected = if kind.pays() { 140 } else { 90 };
        assert_eq!(cash, expected, "{kind:?}");
        verify();
    }
}

#[test]
fn test_every_kind_twice() {
    for kind in Kind::ALL {
        let (source, verify) = kind.money_source(50, 2);
        let cash = withdraw_then_earn(source, 2);
        let expected = if kind.pays() { 190 } else { 90 };
        assert_eq!(cash, expected, "{kind:?}");
        verify();
    }
}

#[test]
fn test_hand_rolled_mock_counts_by_operation_name() {
    let money = Rc::new(MockMoney::new(50));
    let cash = withdraw_then_earn(money.clone(), 2);

    assert_eq!(cash, 190);
    let counts = money.call_counts();
    assert_eq!(counts.get("make_money"), Some(&2));
    assert_eq!(counts.len(), 1);
}

#[test]
fn test_framework_mock_with_callback_count() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let mut money = MockGeneratedMoney::new();
    money.expect_make_money().returning(move || {
        seen.fetch_add(1, Ordering::SeqCst);
        100
    });

    let mut player = Player::with_money_source(Rc::new(money)).with_cash(10);
    player.collect_earnings().unwrap();
    player.collect_earnings().unwrap();

    assert_eq!(player.cash, 210);
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

// -- Logger substitutes --

#[test]
fn test_deposit_with_every_logger_kind() {
    let loggers: Vec<(&str, Rc<dyn Logger>)> = vec![
        ("null", Rc::new(NullLog) as Rc<dyn Logger>),
        ("stub-true", Rc::new(StubLog::new(true)) as Rc<dyn Logger>),
        ("stub-false", Rc::new(StubLog::new(false)) as Rc<dyn Logger>),
        ("hand-rolled", Rc::new(MockLog::new(true)) as Rc<dyn Logger>),
    ];

    for (label, log) in loggers {
        let mut account = BankAccount::with_logger(100, log);
        account.deposit(100).unwrap();
        assert_eq!(account.balance(), 200, "{label}");
    }
}

#[test]
fn test_framework_logger_per_argument_returns() {
    let mut log = MockGeneratedLog::new();
    log.expect_write()
        .with(eq("Depositing 1"))
        .times(1)
        .return_const(true);
    log.expect_write()
        .with(eq("Depositing 2"))
        .times(1)
        .return_const(false);

    assert!(log.write("Depositing 1"));
    assert!(!log.write("Depositing 2"));
}

#[test]
fn test_framework_logger_through_account() {
    let mut log = MockGeneratedLog::new();
    log.expect_write()
        .withf(|message: &str| message.starts_with("Depositing"))
        .times(1)
        .return_const(true);

    let mut account = BankAccount::with_logger(100, Rc::new(log));
    account.deposit(100).unwrap();
    assert!(account.withdraw(200));
    assert_eq!(account.balance(), 0);
}
