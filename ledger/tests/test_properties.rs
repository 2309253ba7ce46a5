//! Property-based tests for balance integrity
//!
//! Over arbitrary sequences of transfers and withdrawals, no individually
//! validated operation may ever push a balance negative, and (under identity
//! conversion) value only leaves the system through withdrawals.

use bank_ledger_core::{
    Account, AccountStore, Currency, FixedWallClock, Money, RateTable, SequentialIdSource,
    SettlementEngine, SettlementError,
};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
enum Op {
    Transfer { from_a: bool, cents: i64 },
    Withdraw { from_a: bool, cents: i64 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let cents = 1i64..=200_00;
    prop_oneof![
        (any::<bool>(), cents.clone()).prop_map(|(from_a, cents)| Op::Transfer { from_a, cents }),
        (any::<bool>(), cents).prop_map(|(from_a, cents)| Op::Withdraw { from_a, cents }),
    ]
}

fn usd_cents(cents: i64) -> Money {
    Money::new(Decimal::new(cents, 2), Currency::Usd)
}

fn engine() -> SettlementEngine {
    SettlementEngine::with_providers(
        Box::new(RateTable::new()),
        Box::new(SequentialIdSource::new()),
        Box::new(FixedWallClock::new(
            Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
        )),
    )
}

proptest! {
    #[test]
    fn balances_never_negative_and_value_conserved(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let initial_total = Decimal::new(300_00, 2);
        let mut store = AccountStore::new(vec![
            Account::checking("ACC_A", usd_cents(100_00)),
            Account::checking("ACC_B", usd_cents(200_00)),
        ]);
        let engine = engine();
        let mut withdrawn = Decimal::ZERO;

        for op in ops {
            let result = match op {
                Op::Transfer { from_a, cents } => {
                    let (from, to) = if from_a { ("ACC_A", "ACC_B") } else { ("ACC_B", "ACC_A") };
                    engine.transfer(&mut store, from, to, usd_cents(cents)).map(|_| ())
                }
                Op::Withdraw { from_a, cents } => {
                    let id = if from_a { "ACC_A" } else { "ACC_B" };
                    engine
                        .withdraw(&mut store, id, usd_cents(cents))
                        .map(|tx| withdrawn += tx.amount().amount)
                }
            };

            // Only an insufficient balance may reject these operations
            if let Err(err) = result {
                prop_assert!(
                    matches!(err, SettlementError::InsufficientFunds { .. }),
                    "expected InsufficientFunds, got {:?}",
                    err
                );
            }

            let balance_a = store.get("ACC_A").unwrap().balance().amount;
            let balance_b = store.get("ACC_B").unwrap().balance().amount;

            prop_assert!(balance_a >= Decimal::ZERO);
            prop_assert!(balance_b >= Decimal::ZERO);
            prop_assert_eq!(balance_a + balance_b + withdrawn, initial_total);
        }
    }

    #[test]
    fn history_length_matches_successful_operations(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let mut store = AccountStore::new(vec![
            Account::checking("ACC_A", usd_cents(500_00)),
            Account::checking("ACC_B", usd_cents(500_00)),
        ]);
        let engine = engine();
        let mut expected_records = 0usize;

        for op in ops {
            let ok = match op {
                Op::Transfer { from_a, cents } => {
                    let (from, to) = if from_a { ("ACC_A", "ACC_B") } else { ("ACC_B", "ACC_A") };
                    // A transfer appends the same record to both histories
                    engine.transfer(&mut store, from, to, usd_cents(cents)).is_ok().then_some(2)
                }
                Op::Withdraw { from_a, cents } => {
                    let id = if from_a { "ACC_A" } else { "ACC_B" };
                    engine.withdraw(&mut store, id, usd_cents(cents)).is_ok().then_some(1)
                }
            };
            expected_records += ok.unwrap_or(0);
        }

        let total_records = store.get("ACC_A").unwrap().transactions().len()
            + store.get("ACC_B").unwrap().transactions().len();
        prop_assert_eq!(total_records, expected_records);
    }
}
