use serde::Serialize;
use std::fmt;
use thiserror::Error;

// =============================================================================
// Shared domain types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaymentMethod {
    Card,
    Wallet,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Wallet => "wallet",
        };
        f.write_str(label)
    }
}

/// Structured outcome of `Payment::pay`, returned instead of printed so
/// tests can assert on it directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub method: PaymentMethod,
    pub amount: u64,
    pub summary: String,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} payment of {} completed: {}", self.method, self.amount, self.summary)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaymentError {
    #[error("cannot create {method} payment: field '{field}' {reason}")]
    InvalidParameters {
        method: PaymentMethod,
        field: &'static str,
        reason: String,
    },
}

fn require_text(
    method: PaymentMethod,
    field: &'static str,
    value: &str,
) -> Result<(), PaymentError> {
    if value.trim().is_empty() {
        return Err(PaymentError::InvalidParameters {
            method,
            field,
            reason: "must not be blank".to_string(),
        });
    }
    Ok(())
}

fn require_amount(method: PaymentMethod, amount: u64) -> Result<(), PaymentError> {
    if amount == 0 {
        return Err(PaymentError::InvalidParameters {
            method,
            field: "amount",
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Product hierarchy: one trait, two concrete payment kinds
// =============================================================================

pub trait Payment {
    fn method(&self) -> PaymentMethod;
    fn amount(&self) -> u64;
    fn pay(&self) -> Receipt;
}

pub struct CardPayment {
    amount: u64,
    card_number: String,
    card_holder: String,
    expiration_date: String,
    cvv: String,
}

impl CardPayment {
    fn new(amount: u64, details: CardDetails) -> Result<Self, PaymentError> {
        require_amount(PaymentMethod::Card, amount)?;
        require_text(PaymentMethod::Card, "card_number", &details.card_number)?;
        require_text(PaymentMethod::Card, "card_holder", &details.card_holder)?;
        require_text(PaymentMethod::Card, "expiration_date", &details.expiration_date)?;
        require_text(PaymentMethod::Card, "cvv", &details.cvv)?;

        Ok(Self {
            amount,
            card_number: details.card_number,
            card_holder: details.card_holder,
            expiration_date: details.expiration_date,
            cvv: details.cvv,
        })
    }

    /// Last four characters of the card number, for receipts. The number is
    /// opaque text here, so this is a plain suffix, not a PAN parser.
    fn card_suffix(&self) -> String {
        let digits = self.card_number.trim();
        let skip = digits.chars().count().saturating_sub(4);
        digits.chars().skip(skip).collect()
    }
}

impl Payment for CardPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Card
    }

    fn amount(&self) -> u64 {
        self.amount
    }

    fn pay(&self) -> Receipt {
        Receipt {
            method: PaymentMethod::Card,
            amount: self.amount,
            summary: format!(
                "charged card ending {} held by {} (expires {})",
                self.card_suffix(),
                self.card_holder,
                self.expiration_date
            ),
        }
    }
}

pub struct WalletPayment {
    amount: u64,
    wallet_number: String,
}

impl WalletPayment {
    fn new(amount: u64, details: WalletDetails) -> Result<Self, PaymentError> {
        require_amount(PaymentMethod::Wallet, amount)?;
        require_text(PaymentMethod::Wallet, "wallet_number", &details.wallet_number)?;

        Ok(Self {
            amount,
            wallet_number: details.wallet_number,
        })
    }
}

impl Payment for WalletPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Wallet
    }

    fn amount(&self) -> u64 {
        self.amount
    }

    fn pay(&self) -> Receipt {
        Receipt {
            method: PaymentMethod::Wallet,
            amount: self.amount,
            summary: format!("debited wallet {}", self.wallet_number),
        }
    }
}

// =============================================================================
// Factory hierarchy: typed parameters instead of an opaque parameter bag
// =============================================================================

/// The two payment kinds have different constructor shapes, so each factory
/// declares its parameter type through an associated type. A mismatched
/// parameter list is a compile error rather than a runtime surprise.
pub trait PaymentFactory {
    type Params;

    fn create_payment(
        &self,
        amount: u64,
        params: Self::Params,
    ) -> Result<Box<dyn Payment>, PaymentError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardDetails {
    pub card_number: String,
    pub card_holder: String,
    pub expiration_date: String,
    pub cvv: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WalletDetails {
    pub wallet_number: String,
}

pub struct CardPaymentFactory;

impl PaymentFactory for CardPaymentFactory {
    type Params = CardDetails;

    fn create_payment(
        &self,
        amount: u64,
        params: CardDetails,
    ) -> Result<Box<dyn Payment>, PaymentError> {
        Ok(Box::new(CardPayment::new(amount, params)?))
    }
}

pub struct WalletPaymentFactory;

impl PaymentFactory for WalletPaymentFactory {
    type Params = WalletDetails;

    fn create_payment(
        &self,
        amount: u64,
        params: WalletDetails,
    ) -> Result<Box<dyn Payment>, PaymentError> {
        Ok(Box::new(WalletPayment::new(amount, params)?))
    }
}

// =============================================================================
// Demo (cargo run --bin payment_factory)
// =============================================================================

fn settle(payment: &dyn Payment) {
    let receipt = payment.pay();
    println!("[ok] {receipt}");
    match serde_json::to_string(&receipt) {
        Ok(json) => println!("     {json}"),
        Err(err) => eprintln!("     failed to serialize receipt: {err}"),
    }
}

fn main() {
    let amount = 1_000;

    println!("=== Checkout with a card ===");
    let card_order = CardPaymentFactory.create_payment(
        amount,
        CardDetails {
            card_number: "1234 5678 9012 3456".to_string(),
            card_holder: "Ivan Ivanov".to_string(),
            expiration_date: "12/24".to_string(),
            cvv: "123".to_string(),
        },
    );
    match card_order {
        Ok(payment) => settle(payment.as_ref()),
        Err(err) => println!("[err] {err}"),
    }

    println!("\n=== Checkout with a wallet ===");
    let wallet_order = WalletPaymentFactory.create_payment(
        amount,
        WalletDetails {
            wallet_number: "4100112333445566".to_string(),
        },
    );
    match wallet_order {
        Ok(payment) => settle(payment.as_ref()),
        Err(err) => println!("[err] {err}"),
    }

    println!("\n=== Failure path ===");
    let broken = WalletPaymentFactory.create_payment(
        0,
        WalletDetails {
            wallet_number: "4100112333445566".to_string(),
        },
    );
    match broken {
        Ok(payment) => settle(payment.as_ref()),
        Err(err) => println!("[err] {err}"),
    }
}

// =============================================================================
// Tests (cargo test --bin payment_factory)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_card() -> CardDetails {
        CardDetails {
            card_number: "1234 5678 9012 3456".to_string(),
            card_holder: "Ivan Ivanov".to_string(),
            expiration_date: "12/24".to_string(),
            cvv: "123".to_string(),
        }
    }

    fn sample_wallet() -> WalletDetails {
        WalletDetails {
            wallet_number: "4100112333445566".to_string(),
        }
    }

    fn expect_rejection(result: Result<Box<dyn Payment>, PaymentError>) -> PaymentError {
        match result {
            Ok(payment) => panic!("expected a rejection, got a {} payment", payment.method()),
            Err(err) => err,
        }
    }

    #[test]
    fn test_card_scenario() {
        let payment = CardPaymentFactory.create_payment(1_000, sample_card()).unwrap();
        let receipt = payment.pay();

        assert_eq!(receipt.method, PaymentMethod::Card);
        assert_eq!(receipt.amount, 1_000);
        assert!(receipt.summary.contains("card ending 3456"));
        assert!(receipt.summary.contains("Ivan Ivanov"));
    }

    #[test]
    fn test_wallet_scenario() {
        let payment = WalletPaymentFactory
            .create_payment(1_000, sample_wallet())
            .unwrap();
        let receipt = payment.pay();

        assert_eq!(receipt.method, PaymentMethod::Wallet);
        assert_eq!(receipt.amount, 1_000);
        assert!(receipt.summary.contains("4100112333445566"));
    }

    #[test]
    fn test_each_factory_yields_its_bound_method() {
        let card = CardPaymentFactory.create_payment(500, sample_card()).unwrap();
        let wallet = WalletPaymentFactory.create_payment(500, sample_wallet()).unwrap();

        assert_eq!(card.method(), PaymentMethod::Card);
        assert_eq!(wallet.method(), PaymentMethod::Wallet);
        assert_ne!(card.pay().summary, wallet.pay().summary);
    }

    #[test]
    fn test_factory_is_idempotent() {
        let first = CardPaymentFactory.create_payment(1_000, sample_card()).unwrap();
        let second = CardPaymentFactory.create_payment(1_000, sample_card()).unwrap();

        assert_eq!(first.amount(), second.amount());
        assert_eq!(first.pay(), second.pay());
    }

    #[test]
    fn test_zero_amount_is_rejected() {
        let err = expect_rejection(CardPaymentFactory.create_payment(0, sample_card()));
        let PaymentError::InvalidParameters { method, field, .. } = err;
        assert_eq!(method, PaymentMethod::Card);
        assert_eq!(field, "amount");
    }

    #[test]
    fn test_blank_card_fields_are_rejected() {
        let blank_cases: Vec<(CardDetails, &'static str)> = vec![
            (
                CardDetails {
                    card_number: String::new(),
                    ..sample_card()
                },
                "card_number",
            ),
            (
                CardDetails {
                    card_holder: "  ".to_string(),
                    ..sample_card()
                },
                "card_holder",
            ),
            (
                CardDetails {
                    expiration_date: String::new(),
                    ..sample_card()
                },
                "expiration_date",
            ),
            (
                CardDetails {
                    cvv: String::new(),
                    ..sample_card()
                },
                "cvv",
            ),
        ];

        for (details, expected_field) in blank_cases {
            let err = expect_rejection(CardPaymentFactory.create_payment(1_000, details));
            let PaymentError::InvalidParameters { field, .. } = err;
            assert_eq!(field, expected_field);
        }
    }

    #[test]
    fn test_blank_wallet_number_is_rejected() {
        let err = expect_rejection(
            WalletPaymentFactory
                .create_payment(1_000, WalletDetails { wallet_number: String::new() }),
        );
        let PaymentError::InvalidParameters { method, field, .. } = err;
        assert_eq!(method, PaymentMethod::Wallet);
        assert_eq!(field, "wallet_number");
    }

    #[test]
    fn test_error_message_names_the_field() {
        let err = expect_rejection(
            WalletPaymentFactory
                .create_payment(1_000, WalletDetails { wallet_number: " ".to_string() }),
        );
        assert!(err.to_string().contains("'wallet_number'"));
        assert!(err.to_string().contains("wallet"));
    }

    #[test]
    fn test_short_card_number_suffix() {
        let payment = CardPaymentFactory
            .create_payment(
                1_000,
                CardDetails {
                    card_number: "99".to_string(),
                    ..sample_card()
                },
            )
            .unwrap();
        assert!(payment.pay().summary.contains("card ending 99"));
    }

    #[test]
    fn test_receipt_serializes() {
        let receipt = WalletPaymentFactory
            .create_payment(1_000, sample_wallet())
            .unwrap()
            .pay();
        let json = serde_json::to_string(&receipt).unwrap();
        assert!(json.contains("\"method\":\"Wallet\""));
        assert!(json.contains("\"amount\":1000"));
    }

    #[test]
    fn test_receipt_display() {
        let line = WalletPaymentFactory
            .create_payment(1_000, sample_wallet())
            .unwrap()
            .pay()
            .to_string();
        assert_eq!(
            line,
            "wallet payment of 1000 completed: debited wallet 4100112333445566"
        );
    }
}
