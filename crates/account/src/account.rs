use chrono::{DateTime, FixedOffset, Utc};

use selfcare_core::{Aggregate, MovementId};

use crate::catalog;
use crate::error::AccountError;
use crate::payment::{PaymentMethod, TopupAmount};
use crate::seed;
use crate::summary::{CustomerSummary, RecentMovement};

/// Aggregate: the customer account behind the portal.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerAccount {
    summary: CustomerSummary,
}

impl CustomerAccount {
    pub fn new(summary: CustomerSummary) -> Self {
        Self { summary }
    }

    /// Account initialised from the demo seed record.
    pub fn seeded() -> Self {
        Self::new(seed::seed_summary())
    }

    pub fn balance(&self) -> i64 {
        self.summary.balance
    }

    pub fn summary(&self) -> &CustomerSummary {
        &self.summary
    }

    /// Independent copy of the current record.
    ///
    /// The summary owns all of its data, so the clone shares nothing with the
    /// stored record.
    pub fn snapshot(&self) -> CustomerSummary {
        self.summary.clone()
    }
}

/// Command: credit the balance from an external payment method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopUp {
    pub amount: TopupAmount,
    pub method: PaymentMethod,
    pub movement_id: MovementId,
    pub occurred_at: DateTime<FixedOffset>,
}

impl TopUp {
    /// Top-up stamped with a fresh movement id and the current time.
    pub fn now(amount: TopupAmount, method: PaymentMethod) -> Self {
        Self {
            amount,
            method,
            movement_id: MovementId::new(),
            occurred_at: Utc::now().fixed_offset(),
        }
    }
}

/// Command: debit the balance for a catalog package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyPackage {
    pub package_code: String,
    pub movement_id: MovementId,
    pub occurred_at: DateTime<FixedOffset>,
}

impl BuyPackage {
    pub fn now(package_code: impl Into<String>) -> Self {
        Self {
            package_code: package_code.into(),
            movement_id: MovementId::new(),
            occurred_at: Utc::now().fixed_offset(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountCommand {
    TopUp(TopUp),
    BuyPackage(BuyPackage),
}

/// Each variant carries the movement it records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountEvent {
    /// Balance credited by a top-up.
    BalanceToppedUp(RecentMovement),
    /// Package bought and balance debited.
    PackagePurchased(RecentMovement),
}

impl AccountEvent {
    pub fn movement(&self) -> &RecentMovement {
        match self {
            AccountEvent::BalanceToppedUp(m) | AccountEvent::PackagePurchased(m) => m,
        }
    }

    /// Signed change applied to the balance.
    pub fn balance_delta(&self) -> i64 {
        match self {
            AccountEvent::BalanceToppedUp(m) => m.amount,
            AccountEvent::PackagePurchased(m) => -m.amount,
        }
    }
}

/// What a caller gets back from an accepted transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReceipt {
    pub receipt: RecentMovement,
    pub balance: i64,
}

impl Aggregate for CustomerAccount {
    type Command = AccountCommand;
    type Event = AccountEvent;
    type Error = AccountError;

    fn apply(&mut self, event: &Self::Event) {
        self.summary.balance += event.balance_delta();
        self.summary.record_movement(event.movement().clone());
    }

    fn handle(&self, command: &Self::Command) -> Result<Self::Event, Self::Error> {
        match command {
            AccountCommand::TopUp(cmd) => Ok(self.handle_top_up(cmd)),
            AccountCommand::BuyPackage(cmd) => self.handle_buy_package(cmd),
        }
    }
}

impl CustomerAccount {
    fn handle_top_up(&self, cmd: &TopUp) -> AccountEvent {
        AccountEvent::BalanceToppedUp(RecentMovement {
            id: cmd.movement_id.clone(),
            title: cmd.method.movement_title(),
            amount: cmd.amount.get(),
            created_at: cmd.occurred_at,
        })
    }

    fn handle_buy_package(&self, cmd: &BuyPackage) -> Result<AccountEvent, AccountError> {
        if cmd.package_code.is_empty() {
            return Err(AccountError::MissingPackageCode);
        }
        let package = catalog::find(&cmd.package_code)?;

        if self.summary.balance < package.price {
            return Err(AccountError::InsufficientBalance {
                balance: self.summary.balance,
                price: package.price,
            });
        }

        Ok(AccountEvent::PackagePurchased(RecentMovement {
            id: cmd.movement_id.clone(),
            title: package.movement_title.to_string(),
            amount: package.price,
            created_at: cmd.occurred_at,
        }))
    }

    /// Run a command to completion and report the resulting receipt.
    pub fn transact(&mut self, command: &AccountCommand) -> Result<TransactionReceipt, AccountError> {
        let event = self.handle(command)?;
        self.apply(&event);
        Ok(TransactionReceipt {
            receipt: event.movement().clone(),
            balance: self.balance(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::MAX_RECENT_MOVEMENTS;
    use proptest::prelude::*;

    fn account_with_balance(balance: i64) -> CustomerAccount {
        let mut summary = seed::seed_summary();
        summary.balance = balance;
        CustomerAccount::new(summary)
    }

    fn top_up(amount: i64, method: PaymentMethod) -> AccountCommand {
        AccountCommand::TopUp(TopUp::now(TopupAmount::new(amount).unwrap(), method))
    }

    fn buy(code: &str) -> AccountCommand {
        AccountCommand::BuyPackage(BuyPackage::now(code))
    }

    #[test]
    fn top_up_credits_balance_and_records_movement_first() {
        let mut account = account_with_balance(50_000);

        let out = account.transact(&top_up(20_000, PaymentMethod::Nequi)).unwrap();

        assert_eq!(out.balance, 70_000);
        assert_eq!(out.receipt.title, "Recarga Nequi");
        assert_eq!(out.receipt.amount, 20_000);
        assert_eq!(account.summary().latest_movement(), Some(&out.receipt));
    }

    #[test]
    fn buying_combo_full_debits_price() {
        let mut account = account_with_balance(50_000);

        let out = account.transact(&buy("combo_full")).unwrap();

        assert_eq!(out.balance, 32_000);
        assert_eq!(out.receipt.title, "Compra paquete combo full");
        assert_eq!(out.receipt.amount, 18_000);
        assert_eq!(account.summary().recent_movements[0], out.receipt);
    }

    #[test]
    fn insufficient_balance_leaves_account_untouched() {
        let mut account = account_with_balance(5_000);
        let before = account.clone();

        let err = account.transact(&buy("combo_full")).unwrap_err();

        assert_eq!(err, AccountError::InsufficientBalance { balance: 5_000, price: 18_000 });
        assert_eq!(account, before);
    }

    #[test]
    fn exact_balance_purchase_reaches_zero() {
        let mut account = account_with_balance(9_000);
        let out = account.transact(&buy("voz_100min")).unwrap();
        assert_eq!(out.balance, 0);
    }

    #[test]
    fn unknown_package_is_rejected_without_changes() {
        let mut account = account_with_balance(50_000);
        let before = account.clone();

        let err = account.transact(&buy("nonexistent")).unwrap_err();

        assert_eq!(err, AccountError::PackageNotFound { code: "nonexistent".into() });
        assert_eq!(account, before);
    }

    #[test]
    fn empty_package_code_is_rejected() {
        let account = account_with_balance(50_000);
        assert_eq!(account.handle(&buy("")), Err(AccountError::MissingPackageCode));
    }

    #[test]
    fn handle_does_not_mutate() {
        let account = account_with_balance(50_000);
        let event = account.handle(&buy("data_5gb")).unwrap();
        assert!(matches!(event, AccountEvent::PackagePurchased(_)));
        assert_eq!(event.balance_delta(), -12_000);
        assert_eq!(event.movement().title, "Compra paquete 5GB");
        assert_eq!(account.balance(), 50_000);

        let mut applied = account.clone();
        applied.apply(&event);
        assert_eq!(applied.balance(), 38_000);
        assert_eq!(applied.summary().latest_movement(), Some(event.movement()));
    }

    #[test]
    fn movements_created_in_same_instant_keep_insertion_order() {
        let mut account = account_with_balance(50_000);
        let at = Utc::now().fixed_offset();
        let first = MovementId::new();
        let second = MovementId::new();

        for id in [first.clone(), second.clone()] {
            account
                .transact(&AccountCommand::TopUp(TopUp {
                    amount: TopupAmount::new(1_000).unwrap(),
                    method: PaymentMethod::Pse,
                    movement_id: id,
                    occurred_at: at,
                }))
                .unwrap();
        }

        let movements = &account.summary().recent_movements;
        assert_eq!(movements[0].id, second);
        assert_eq!(movements[1].id, first);
    }

    #[test]
    fn snapshot_is_independent_of_stored_record() {
        let mut account = account_with_balance(50_000);
        let mut snap = account.snapshot();
        snap.balance = 1;
        snap.recent_movements.clear();
        snap.lines[0].msisdn.push('9');

        assert_eq!(account.balance(), 50_000);
        assert_eq!(account.summary().recent_movements.len(), 3);
        assert_eq!(account.summary().lines[0].msisdn, "3001234567");

        account.transact(&top_up(1_000, PaymentMethod::Pse)).unwrap();
        assert_eq!(snap.balance, 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: balance moves by exactly the sum of accepted deltas, never
        /// goes negative through purchases, and the movement list stays capped.
        #[test]
        fn balance_tracks_accepted_transactions(
            ops in prop::collection::vec(
                prop_oneof![
                    (1_000i64..=200_000i64).prop_map(Some),
                    Just(None),
                ],
                1..40,
            ),
            start in 0i64..100_000i64,
        ) {
            let mut account = account_with_balance(start);
            let mut expected = start;

            for op in ops {
                let before = account.balance();
                match op {
                    Some(amount) => {
                        let out = account.transact(&top_up(amount, PaymentMethod::Tarjeta)).unwrap();
                        expected += amount;
                        prop_assert_eq!(out.balance, before + amount);
                        prop_assert_eq!(&account.summary().recent_movements[0], &out.receipt);
                    }
                    None => match account.transact(&buy("combo_full")) {
                        Ok(out) => {
                            expected -= 18_000;
                            prop_assert!(before >= 18_000);
                            prop_assert_eq!(out.balance, before - 18_000);
                        }
                        Err(e) => {
                            prop_assert!(before < 18_000);
                            prop_assert_eq!(e, AccountError::InsufficientBalance { balance: before, price: 18_000 });
                            prop_assert_eq!(account.balance(), before);
                        }
                    },
                }
                prop_assert!(account.summary().recent_movements.len() <= MAX_RECENT_MOVEMENTS);
                prop_assert!(account.balance() >= 0);
            }

            prop_assert_eq!(account.balance(), expected);
        }

        /// Property: after N top-ups the list holds the newest min(N + 3, 12)
        /// movements in reverse insertion order.
        #[test]
        fn movement_list_keeps_newest_twelve(n in 0usize..30) {
            let mut account = account_with_balance(0);
            let mut ids = Vec::new();
            for _ in 0..n {
                let out = account.transact(&top_up(1_000, PaymentMethod::Pse)).unwrap();
                ids.push(out.receipt.id);
            }

            let movements = &account.summary().recent_movements;
            prop_assert_eq!(movements.len(), (n + 3).min(MAX_RECENT_MOVEMENTS));
            for (movement, id) in movements.iter().zip(ids.iter().rev()) {
                prop_assert_eq!(&movement.id, id);
            }
        }
    }
}
