//! Property-based tests for `TransactionService`.
//!
//! After any sequence of successful creates and updates the stored balance
//! equals the sum of the account's transaction amounts.

use std::sync::Arc;

use chrono::{Duration, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::TransactionService;
use super::types::{Transaction, TransactionInput};
use crate::testing::InMemoryLedger;

#[derive(Debug, Clone)]
enum Op {
    Create(Decimal),
    Update(usize, Decimal),
}

/// Non-zero amounts between -10,000.00 and 10,000.00.
fn non_zero_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..1_000_000i64)
        .prop_filter("amount must be non-zero", |cents| *cents != 0)
        .prop_map(|cents| Decimal::new(cents, 2))
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        non_zero_amount().prop_map(Op::Create),
        (any::<usize>(), non_zero_amount()).prop_map(|(i, amount)| Op::Update(i, amount)),
    ]
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn test_balance_matches_history_after_any_write_sequence(
        ops in prop::collection::vec(op_strategy(), 1..30),
    ) {
        let ledger = InMemoryLedger::shared();
        let person = ledger.seed_person("1", None, None);
        let account = ledger.seed_account(person.code, "ACC-1", Decimal::ZERO, false);
        let service = TransactionService::new(Arc::clone(&ledger), Arc::clone(&ledger));

        let posted: Vec<Transaction> = runtime().block_on(async {
            let mut posted: Vec<Transaction> = Vec::new();
            for (day, op) in ops.into_iter().enumerate() {
                let transaction_date = Utc::now() - Duration::days(i64::try_from(day).unwrap() + 1);
                match op {
                    Op::Create(amount) => {
                        let created = service
                            .create(TransactionInput {
                                account_code: account.code,
                                transaction_date,
                                amount,
                                description: "generated".to_string(),
                            })
                            .await
                            .unwrap();
                        posted.push(created);
                    }
                    Op::Update(index, amount) if !posted.is_empty() => {
                        let index = index % posted.len();
                        let updated = service
                            .update(
                                posted[index].code,
                                TransactionInput {
                                    account_code: account.code,
                                    transaction_date,
                                    amount,
                                    description: "regenerated".to_string(),
                                },
                            )
                            .await
                            .unwrap()
                            .unwrap();
                        posted[index] = updated;
                    }
                    Op::Update(..) => {}
                }
            }
            posted
        });

        let expected: Decimal = posted.iter().map(|t| t.amount).sum();
        let stored = ledger.account(account.code).unwrap();
        prop_assert_eq!(stored.outstanding_balance, expected);
        prop_assert_eq!(ledger.transaction_count(), posted.len());
    }
}
