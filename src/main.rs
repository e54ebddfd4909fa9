#![forbid(unsafe_code)]

use std::io::{self, Write};

use anyhow::{anyhow, Result};
use pretty_env_logger;

use branch_teller::{
    errors::{TellerError, TransactionError},
    teller::Teller,
    types::{AccountNumber, Amount, Transaction},
};

const MENU: &str = "
================ MENU ================
 [d]  deposit
 [w]  withdraw
 [s]  statement
 [oa] open account
 [la] list accounts
 [nc] new customer
 [q]  quit
=> ";

fn main() -> Result<()> {
    pretty_env_logger::init();

    let mut teller = Teller::new();
    loop {
        let choice = match prompt(MENU) {
            Ok(choice) => choice,
            Err(_) => break, // stdin closed
        };

        let outcome = match choice.as_str() {
            "d" => deposit(&mut teller),
            "w" => withdraw(&mut teller),
            "s" => statement(&teller),
            "oa" => open_account(&mut teller),
            "la" => {
                list_accounts(&teller);
                Ok(())
            }
            "nc" => new_customer(&mut teller),
            "q" => break,
            _ => {
                println!("Unknown option, please pick one from the menu.");
                Ok(())
            }
        };
        if outcome.is_err() {
            break; // stdin closed mid-operation
        }
    }
    Ok(())
}

/// Print `label` and read one trimmed line from stdin
fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(anyhow!("input closed"));
    }
    Ok(line.trim().to_owned())
}

/// Ask for the national id and, when the customer holds more than one
/// account, for an explicit account number
fn target_account(teller: &Teller) -> Result<Option<(String, Option<AccountNumber>)>> {
    let national_id = prompt("Customer national id: ")?;

    let numbers = match teller.account_numbers(&national_id) {
        Ok(numbers) => numbers,
        Err(err) => {
            println!("{}", err);
            return Ok(None);
        }
    };
    if numbers.len() <= 1 {
        return Ok(Some((national_id, None)));
    }

    let listed: Vec<_> = numbers.iter().map(AccountNumber::to_string).collect();
    println!("Accounts held: {}", listed.join(", "));
    match prompt("Account number: ")?.parse() {
        Ok(number) => Ok(Some((national_id, Some(number)))),
        Err(_) => {
            println!("Invalid account number.");
            Ok(None)
        }
    }
}

fn read_amount(label: &str) -> Result<Option<Amount>> {
    match prompt(label)?.parse::<Amount>() {
        Ok(amount) => Ok(Some(amount)),
        Err(_) => {
            println!("Invalid amount.");
            Ok(None)
        }
    }
}

/// Print the outcome of a balance-affecting operation
fn report(outcome: Result<(), TellerError>, success: String) {
    match outcome {
        Ok(()) => println!("{}", success),
        Err(TellerError::Transaction(TransactionError::Rejected(rejection))) => {
            println!("Transaction failed: {}.", rejection)
        }
        Err(err) => println!("{}", err),
    }
}

fn deposit(teller: &mut Teller) -> Result<()> {
    let (national_id, selector) = match target_account(teller)? {
        Some(target) => target,
        None => return Ok(()),
    };
    let amount = match read_amount("Deposit amount: ")? {
        Some(amount) => amount,
        None => return Ok(()),
    };

    report(
        teller.deposit(&national_id, selector, amount),
        format!("Deposit of $ {:.2} completed.", amount),
    );
    Ok(())
}

fn withdraw(teller: &mut Teller) -> Result<()> {
    let (national_id, selector) = match target_account(teller)? {
        Some(target) => target,
        None => return Ok(()),
    };
    let amount = match read_amount("Withdrawal amount: ")? {
        Some(amount) => amount,
        None => return Ok(()),
    };

    report(
        teller.withdraw(&national_id, selector, amount),
        format!("Withdrawal of $ {:.2} completed.", amount),
    );
    Ok(())
}

fn statement(teller: &Teller) -> Result<()> {
    let (national_id, selector) = match target_account(teller)? {
        Some(target) => target,
        None => return Ok(()),
    };

    match teller.statement(&national_id, selector) {
        Ok(account) => {
            println!("\n================ STATEMENT ================");
            if account.history().is_empty() {
                println!("No transactions recorded.");
            }
            for transaction in account.history().entries() {
                match transaction {
                    Transaction::Deposit(amount) => {
                        println!(" deposit     $ {:>10}", format!("{:.2}", amount))
                    }
                    Transaction::Withdrawal(amount) => {
                        println!(" withdrawal  $ {:>10}", format!("{:.2}", amount))
                    }
                }
            }
            println!("Balance: $ {:.2}", account.balance());
            println!("===========================================");
        }
        Err(err) => println!("{}", err),
    }
    Ok(())
}

fn open_account(teller: &mut Teller) -> Result<()> {
    let national_id = prompt("Customer national id: ")?;

    match teller.open_account(&national_id) {
        Ok(number) => println!("Account {} opened.", number),
        Err(err) => println!("{}", err),
    }
    Ok(())
}

fn list_accounts(teller: &Teller) {
    let mut listed = false;
    for (customer, account) in teller.accounts() {
        listed = true;
        println!("{}", "=".repeat(42));
        println!(" branch:  {}", account.branch_code());
        println!(" account: {}", account.number());
        println!(" holder:  {}", customer.full_name());
    }
    if !listed {
        println!("No accounts opened yet.");
    }
}

fn new_customer(teller: &mut Teller) -> Result<()> {
    let national_id = prompt("National id (digits only): ")?;
    let full_name = prompt("Full name: ")?;
    let birth_date = prompt("Birth date (dd-mm-yyyy): ")?;
    let address = prompt("Address (street, number - district - city/state): ")?;

    match teller.enroll_customer(national_id, full_name, birth_date, address) {
        Ok(()) => println!("Customer enrolled."),
        Err(err) => println!("{}", err),
    }
    Ok(())
}
