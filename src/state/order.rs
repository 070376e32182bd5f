//! Purchase simulation state.
//!
//! Variant selection, form fields, validation and the order log. An
//! accepted order goes to the in-memory log and a tracing line; nothing
//! leaves the process.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::data::ProductVariant;

/// How long an inline validation error stays on screen
pub const ERROR_DISMISS_DELAY: Duration = Duration::from_secs(5);

const MIN_NAME_CHARS: usize = 2;
const MIN_PHONE_CHARS: usize = 10;
const MIN_ADDRESS_CHARS: usize = 10;

/// Validation failures, in the order the rules run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    QuantityMissing,
    NameTooShort,
    EmailInvalid,
    PhoneTooShort,
    AddressTooShort,
}

impl ValidationError {
    pub fn message(self) -> &'static str {
        match self {
            ValidationError::QuantityMissing => "Please select a quantity.",
            ValidationError::NameTooShort => "Please enter a valid name.",
            ValidationError::EmailInvalid => "Please enter a valid email address.",
            ValidationError::PhoneTooShort => "Please enter a valid phone number.",
            ValidationError::AddressTooShort => "Please enter a complete delivery address.",
        }
    }
}

/// Form fields the user navigates with Enter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Name,
    Email,
    Phone,
    Address,
}

/// Order events emitted by the purchase view
#[derive(Debug, Clone)]
pub enum OrderMessage {
    VariantPressed(usize),
    QuantityPicked(ProductVariant),
    NameChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    AddressChanged(String),
    FieldSubmitted(OrderField),
    SubmitPressed,
    ResetPressed,
    /// Auto-dismiss timer fired for the given error generation
    ErrorDismiss(u64),
}

#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    pub quantity: Option<ProductVariant>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl OrderForm {
    /// First failing rule wins; later rules are not evaluated.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.quantity.is_none() {
            return Err(ValidationError::QuantityMissing);
        }
        if self.name.trim().chars().count() < MIN_NAME_CHARS {
            return Err(ValidationError::NameTooShort);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ValidationError::EmailInvalid);
        }
        if self.phone.trim().chars().count() < MIN_PHONE_CHARS {
            return Err(ValidationError::PhoneTooShort);
        }
        if self.address.trim().chars().count() < MIN_ADDRESS_CHARS {
            return Err(ValidationError::AddressTooShort);
        }
        Ok(())
    }
}

/// local@host.tld where no part is empty or contains whitespace or '@'
fn is_valid_email(address: &str) -> bool {
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let sound = |part: &str| {
        !part.is_empty() && !part.contains(char::is_whitespace) && !part.contains('@')
    };
    sound(local) && sound(host) && sound(tld)
}

/// The selected product variant, owned here rather than floating as
/// page-wide globals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderSelection {
    pub weight_grams: u32,
    pub price_eur: f32,
}

impl From<ProductVariant> for OrderSelection {
    fn from(variant: ProductVariant) -> Self {
        Self {
            weight_grams: variant.weight_grams,
            price_eur: variant.price_eur,
        }
    }
}

/// One accepted (simulated) order
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub variant: ProductVariant,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub placed_at: DateTime<Utc>,
}

/// In-memory record of accepted orders. Never persisted.
#[derive(Debug, Default)]
pub struct OrderLog {
    records: Vec<OrderRecord>,
}

impl OrderLog {
    fn record(&mut self, record: OrderRecord) {
        info!(
            weight_grams = record.variant.weight_grams,
            price = %format_eur(record.variant.price_eur),
            name = %record.name,
            placed_at = %record.placed_at,
            "order processed (simulation)"
        );
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&OrderRecord> {
        self.records.last()
    }
}

#[derive(Debug)]
pub struct OrderState {
    variants: Vec<ProductVariant>,
    selection: OrderSelection,
    pub form: OrderForm,
    error: Option<ValidationError>,
    error_epoch: u64,
    submitted: bool,
    log: OrderLog,
}

impl OrderState {
    pub fn new(variants: Vec<ProductVariant>) -> Self {
        let selection = variants
            .first()
            .copied()
            .map(OrderSelection::from)
            .unwrap_or(OrderSelection {
                weight_grams: 1,
                price_eur: 120.0,
            });
        Self {
            variants,
            selection,
            form: OrderForm::default(),
            error: None,
            error_epoch: 0,
            submitted: false,
            log: OrderLog::default(),
        }
    }

    pub fn variants(&self) -> &[ProductVariant] {
        &self.variants
    }

    pub fn selection(&self) -> OrderSelection {
        self.selection
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.variants
            .get(index)
            .is_some_and(|variant| variant.weight_grams == self.selection.weight_grams)
    }

    /// Variant card pressed in the product section: selection display and
    /// form quantity follow together.
    pub fn select_variant(&mut self, index: usize) {
        if let Some(variant) = self.variants.get(index).copied() {
            self.selection = variant.into();
            self.form.quantity = Some(variant);
        }
    }

    /// Quantity picked inside the form: selection display follows.
    pub fn pick_quantity(&mut self, variant: ProductVariant) {
        self.form.quantity = Some(variant);
        self.selection = variant.into();
    }

    /// Validate and, on success, record the order and flip to the success
    /// panel. On failure returns the error generation for the dismiss timer.
    pub fn submit(&mut self, placed_at: DateTime<Utc>) -> Result<(), u64> {
        match self.form.validate() {
            Err(error) => {
                warn!(?error, "order rejected");
                self.error = Some(error);
                self.error_epoch += 1;
                Err(self.error_epoch)
            }
            Ok(()) => {
                let variant = self
                    .form
                    .quantity
                    .expect("validated form always has a quantity");
                self.log.record(OrderRecord {
                    variant,
                    name: self.form.name.trim().to_owned(),
                    email: self.form.email.trim().to_owned(),
                    phone: self.form.phone.trim().to_owned(),
                    address: self.form.address.trim().to_owned(),
                    placed_at,
                });
                self.error = None;
                self.submitted = true;
                Ok(())
            }
        }
    }

    /// Clear the error if the timer generation is still the latest.
    pub fn dismiss_error(&mut self, epoch: u64) -> bool {
        if epoch != self.error_epoch {
            return false;
        }
        self.error = None;
        true
    }

    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// Back to a blank form after the success panel
    pub fn reset(&mut self) {
        self.form = OrderForm::default();
        self.submitted = false;
        self.error = None;
    }

    pub fn log(&self) -> &OrderLog {
        &self.log
    }
}

/// "€120" for whole amounts, "€120.50" otherwise
pub fn format_eur(amount: f32) -> String {
    if (amount - amount.round()).abs() < 0.005 {
        format!("€{amount:.0}")
    } else {
        format!("€{amount:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(weight_grams: u32, price_eur: f32) -> ProductVariant {
        ProductVariant {
            weight_grams,
            price_eur,
        }
    }

    fn filled_form() -> OrderForm {
        OrderForm {
            quantity: Some(variant(3, 330.0)),
            name: "Io".into(),
            email: "io@example.com".into(),
            phone: "0040712345678".into(),
            address: "Strada Florilor 12".into(),
        }
    }

    #[test]
    fn happy_path_is_accepted() {
        // 2-char name, valid email, 13-char phone, >10-char address,
        // quantity selected.
        assert_eq!(filled_form().validate(), Ok(()));
    }

    #[test]
    fn first_failing_rule_wins() {
        let mut form = filled_form();
        form.quantity = None;
        form.name.clear();
        // Both quantity and name are invalid; quantity is reported.
        assert_eq!(form.validate(), Err(ValidationError::QuantityMissing));
    }

    #[test]
    fn empty_name_gets_the_name_message() {
        let mut form = filled_form();
        form.name = "  ".into();
        let error = form.validate().unwrap_err();
        assert_eq!(error, ValidationError::NameTooShort);
        assert_eq!(error.message(), "Please enter a valid name.");
    }

    #[test]
    fn email_rules_match_the_basic_pattern() {
        for good in ["a@b.c", "first.last@shop.example.com", "x@y.co"] {
            assert!(is_valid_email(good), "{good} should pass");
        }
        for bad in [
            "",
            "plain",
            "@b.c",
            "a@.c",
            "a@b.",
            "a@b",
            "a b@c.d",
            "a@b@c.d",
        ] {
            assert!(!is_valid_email(bad), "{bad} should fail");
        }
    }

    #[test]
    fn short_phone_and_address_are_rejected_in_order() {
        let mut form = filled_form();
        form.phone = "123456789".into();
        assert_eq!(form.validate(), Err(ValidationError::PhoneTooShort));

        form.phone = "1234567890".into();
        form.address = "short".into();
        assert_eq!(form.validate(), Err(ValidationError::AddressTooShort));
    }

    #[test]
    fn submit_records_exactly_the_accepted_orders() {
        let mut order = OrderState::new(vec![variant(1, 120.0), variant(3, 330.0)]);
        order.form = filled_form();

        assert!(order.submit(Utc::now()).is_ok());
        assert!(order.submitted());
        assert_eq!(order.log().len(), 1);
        assert_eq!(order.log().last().unwrap().variant.weight_grams, 3);

        order.reset();
        assert!(!order.submitted());
        assert!(order.form.name.is_empty());
        // Rejected submissions never reach the log.
        assert!(order.submit(Utc::now()).is_err());
        assert_eq!(order.log().len(), 1);
    }

    #[test]
    fn stale_error_dismiss_is_ignored() {
        let mut order = OrderState::new(vec![variant(1, 120.0)]);

        let first = order.submit(Utc::now()).unwrap_err();
        let second = order.submit(Utc::now()).unwrap_err();

        assert!(!order.dismiss_error(first));
        assert!(order.error().is_some(), "newer error survives stale timer");
        assert!(order.dismiss_error(second));
        assert!(order.error().is_none());
    }

    #[test]
    fn variant_and_form_stay_in_sync_both_ways() {
        let mut order = OrderState::new(vec![variant(1, 120.0), variant(3, 330.0)]);

        order.select_variant(1);
        assert_eq!(order.selection().weight_grams, 3);
        assert_eq!(order.form.quantity.unwrap().weight_grams, 3);
        assert!(order.is_selected(1));

        order.pick_quantity(variant(1, 120.0));
        assert_eq!(order.selection().weight_grams, 1);
        assert!(order.is_selected(0));
    }

    #[test]
    fn eur_formatting() {
        assert_eq!(format_eur(120.0), "€120");
        assert_eq!(format_eur(120.5), "€120.50");
    }
}
