//! In-memory repositories for service tests.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use ledgerdesk_shared::types::{AccountCode, PersonCode, TransactionCode};
use rust_decimal::Decimal;

use crate::account::{Account, AccountRepository, NewAccount};
use crate::differs_ignoring_case;
use crate::error::RepositoryError;
use crate::person::{Person, PersonFilter, PersonInput, PersonRepository};
use crate::transaction::{NewTransaction, Transaction, TransactionRepository};

#[derive(Default)]
struct State {
    persons: BTreeMap<i32, Person>,
    accounts: BTreeMap<i32, Account>,
    transactions: BTreeMap<i32, Transaction>,
    next_code: i32,
    writes: usize,
}

impl State {
    fn next_code(&mut self) -> i32 {
        self.next_code += 1;
        self.next_code
    }

    fn matches(&self, person: &Person, filter: &PersonFilter) -> bool {
        if let Some(id_number) = &filter.id_number {
            if &person.id_number != id_number {
                return false;
            }
        }

        if let Some(surname) = &filter.surname {
            if !person
                .surname
                .as_deref()
                .is_some_and(|s| s.contains(surname.as_str()))
            {
                return false;
            }
        }

        if let Some(account_number) = &filter.account_number {
            if !self
                .accounts
                .values()
                .any(|a| a.person_code == person.code && &a.account_number == account_number)
            {
                return false;
            }
        }

        true
    }
}

/// One store backing all three repository traits.
#[derive(Default)]
pub struct InMemoryLedger {
    state: Mutex<State>,
}

impl InMemoryLedger {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seed_person(&self, id_number: &str, name: Option<&str>, surname: Option<&str>) -> Person {
        let mut state = self.state.lock().unwrap();
        let code = PersonCode::new(state.next_code());
        let person = Person {
            code,
            id_number: id_number.to_string(),
            name: name.map(str::to_string),
            surname: surname.map(str::to_string),
        };
        state.persons.insert(code.0, person.clone());
        person
    }

    pub fn seed_account(
        &self,
        person_code: PersonCode,
        account_number: &str,
        balance: Decimal,
        is_closed: bool,
    ) -> Account {
        let mut state = self.state.lock().unwrap();
        let code = AccountCode::new(state.next_code());
        let account = Account {
            code,
            person_code,
            account_number: account_number.to_string(),
            outstanding_balance: balance,
            is_closed,
        };
        state.accounts.insert(code.0, account.clone());
        account
    }

    /// Stores a transaction without touching the account balance.
    pub fn seed_transaction(&self, account_code: AccountCode, amount: Decimal) -> Transaction {
        let mut state = self.state.lock().unwrap();
        let code = TransactionCode::new(state.next_code());
        let now = Utc::now();
        let transaction = Transaction {
            code,
            account_code,
            transaction_date: now,
            capture_date: now,
            amount,
            description: "seeded".to_string(),
        };
        state.transactions.insert(code.0, transaction.clone());
        transaction
    }

    pub fn person(&self, code: PersonCode) -> Option<Person> {
        self.state.lock().unwrap().persons.get(&code.0).cloned()
    }

    pub fn account(&self, code: AccountCode) -> Option<Account> {
        self.state.lock().unwrap().accounts.get(&code.0).cloned()
    }

    pub fn transaction(&self, code: TransactionCode) -> Option<Transaction> {
        self.state.lock().unwrap().transactions.get(&code.0).cloned()
    }

    pub fn account_count(&self) -> usize {
        self.state.lock().unwrap().accounts.len()
    }

    pub fn transaction_count(&self) -> usize {
        self.state.lock().unwrap().transactions.len()
    }

    /// Number of inserts, updates and deletes issued through the traits.
    pub fn write_count(&self) -> usize {
        self.state.lock().unwrap().writes
    }
}

impl PersonRepository for InMemoryLedger {
    async fn list_all(&self) -> Result<Vec<Person>, RepositoryError> {
        Ok(self.state.lock().unwrap().persons.values().cloned().collect())
    }

    async fn find_by_code(&self, code: PersonCode) -> Result<Option<Person>, RepositoryError> {
        Ok(self.person(code))
    }

    async fn exists_by_id_number(&self, id_number: &str) -> Result<bool, RepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .persons
            .values()
            .any(|p| !differs_ignoring_case(&p.id_number, id_number)))
    }

    async fn insert(&self, input: PersonInput) -> Result<Person, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.writes += 1;
        let code = PersonCode::new(state.next_code());
        let person = Person {
            code,
            id_number: input.id_number,
            name: input.name,
            surname: input.surname,
        };
        state.persons.insert(code.0, person.clone());
        Ok(person)
    }

    async fn update(&self, person: &Person) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.writes += 1;
        state.persons.insert(person.code.0, person.clone());
        Ok(())
    }

    async fn delete(&self, code: PersonCode) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.writes += 1;
        state.persons.remove(&code.0);
        Ok(())
    }

    async fn search(
        &self,
        filter: &PersonFilter,
        skip: u64,
        take: u64,
    ) -> Result<Vec<Person>, RepositoryError> {
        let state = self.state.lock().unwrap();
        let mut matching: Vec<Person> = state
            .persons
            .values()
            .filter(|p| state.matches(p, filter))
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            (&a.surname, &a.name, &a.id_number).cmp(&(&b.surname, &b.name, &b.id_number))
        });

        Ok(matching
            .into_iter()
            .skip(usize::try_from(skip).unwrap())
            .take(usize::try_from(take).unwrap())
            .collect())
    }

    async fn count(&self, filter: &PersonFilter) -> Result<u64, RepositoryError> {
        let state = self.state.lock().unwrap();
        let count = state.persons.values().filter(|p| state.matches(p, filter)).count();
        Ok(u64::try_from(count).unwrap())
    }
}

impl AccountRepository for InMemoryLedger {
    async fn find_by_code(&self, code: AccountCode) -> Result<Option<Account>, RepositoryError> {
        Ok(self.account(code))
    }

    async fn find_by_account_number(
        &self,
        account_number: &str,
    ) -> Result<Option<Account>, RepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .accounts
            .values()
            .find(|a| !differs_ignoring_case(&a.account_number, account_number))
            .cloned())
    }

    async fn find_by_person_code(
        &self,
        person_code: PersonCode,
    ) -> Result<Vec<Account>, RepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .accounts
            .values()
            .filter(|a| a.person_code == person_code)
            .cloned()
            .collect())
    }

    async fn insert(&self, account: NewAccount) -> Result<Account, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.writes += 1;
        let code = AccountCode::new(state.next_code());
        let account = Account {
            code,
            person_code: account.person_code,
            account_number: account.account_number,
            outstanding_balance: Decimal::ZERO,
            is_closed: false,
        };
        state.accounts.insert(code.0, account.clone());
        Ok(account)
    }

    async fn update(&self, account: &Account) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.writes += 1;
        state.accounts.insert(account.code.0, account.clone());
        Ok(())
    }
}

impl TransactionRepository for InMemoryLedger {
    async fn find_by_code(
        &self,
        code: TransactionCode,
    ) -> Result<Option<Transaction>, RepositoryError> {
        Ok(self.transaction(code))
    }

    async fn find_by_account_code(
        &self,
        account_code: AccountCode,
    ) -> Result<Vec<Transaction>, RepositoryError> {
        let mut history: Vec<Transaction> = self
            .state
            .lock()
            .unwrap()
            .transactions
            .values()
            .filter(|t| t.account_code == account_code)
            .cloned()
            .collect();
        history.sort_by_key(|t| t.transaction_date);
        Ok(history)
    }

    async fn insert(&self, transaction: NewTransaction) -> Result<Transaction, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.writes += 1;
        let code = TransactionCode::new(state.next_code());
        let transaction = Transaction {
            code,
            account_code: transaction.account_code,
            transaction_date: transaction.transaction_date,
            capture_date: transaction.capture_date,
            amount: transaction.amount,
            description: transaction.description,
        };
        state.transactions.insert(code.0, transaction.clone());
        Ok(transaction)
    }

    async fn update(&self, transaction: &Transaction) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.writes += 1;
        state
            .transactions
            .insert(transaction.code.0, transaction.clone());
        Ok(())
    }
}
