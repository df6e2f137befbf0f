use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const ERR_PAYMENT: &str = "Укажите вид оплаты";
pub const ERR_EMAIL: &str = "Укажите email";
pub const ERR_PHONE: &str = "Укажите телефон";
pub const ERR_ADDRESS: &str = "Укажите адрес доставки";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Cash,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Cash => "cash",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = BuyerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "card" => Ok(PaymentMethod::Card),
            "cash" => Ok(PaymentMethod::Cash),
            other => Err(BuyerError::InvalidPayment(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Payment,
    Email,
    Phone,
    Address,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Payment => "payment",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Address => "address",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BuyerError {
    #[error("unknown payment method \"{0}\"")]
    InvalidPayment(String),
}

/// Checkout contact and payment details. Empty strings mean "not provided";
/// validation trims before deciding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuyerInfo {
    pub payment: Option<PaymentMethod>,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Partial update: only `Some` fields are merged into the current state.
#[derive(Debug, Clone, Default)]
pub struct BuyerPatch {
    pub payment: Option<PaymentMethod>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// One fixed message per missing field, checked in the order payment, email,
/// phone, address. A valid field contributes no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub payment: Option<&'static str>,
    pub email: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub address: Option<&'static str>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.payment.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.address.is_none()
    }

    /// Everything the order form (payment + delivery address) needs.
    pub fn shipping_complete(&self) -> bool {
        self.payment.is_none() && self.address.is_none()
    }

    /// Everything the contacts form (email + phone) needs.
    pub fn contacts_complete(&self) -> bool {
        self.email.is_none() && self.phone.is_none()
    }

    pub fn missing_fields(&self) -> Vec<FormField> {
        self.messages().into_iter().map(|(field, _)| field).collect()
    }

    pub fn messages(&self) -> Vec<(FormField, &'static str)> {
        let mut out = Vec::new();
        if let Some(msg) = self.payment {
            out.push((FormField::Payment, msg));
        }
        if let Some(msg) = self.email {
            out.push((FormField::Email, msg));
        }
        if let Some(msg) = self.phone {
            out.push((FormField::Phone, msg));
        }
        if let Some(msg) = self.address {
            out.push((FormField::Address, msg));
        }
        out
    }
}

/// Buyer data collected across the order and contacts forms.
#[derive(Debug, Default)]
pub struct Buyer {
    info: BuyerInfo,
}

impl Buyer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges the provided fields into the current state; unspecified fields
    /// keep their prior value.
    pub fn update(&mut self, patch: BuyerPatch) {
        if let Some(payment) = patch.payment {
            self.info.payment = Some(payment);
        }
        if let Some(email) = patch.email {
            self.info.email = email;
        }
        if let Some(phone) = patch.phone {
            self.info.phone = phone;
        }
        if let Some(address) = patch.address {
            self.info.address = address;
        }
    }

    pub fn set_field(&mut self, field: FormField, value: &str) -> Result<(), BuyerError> {
        match field {
            FormField::Payment => self.info.payment = Some(value.parse()?),
            FormField::Email => self.info.email = value.to_string(),
            FormField::Phone => self.info.phone = value.to_string(),
            FormField::Address => self.info.address = value.to_string(),
        }
        Ok(())
    }

    pub fn field(&self, field: FormField) -> String {
        match field {
            FormField::Payment => self
                .info
                .payment
                .map(|p| p.as_str().to_string())
                .unwrap_or_default(),
            FormField::Email => self.info.email.clone(),
            FormField::Phone => self.info.phone.clone(),
            FormField::Address => self.info.address.clone(),
        }
    }

    pub fn data(&self) -> BuyerInfo {
        self.info.clone()
    }

    pub fn clear(&mut self) {
        self.info = BuyerInfo::default();
    }

    pub fn validate(&self) -> ValidationErrors {
        validate(&self.info)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

pub fn validate(info: &BuyerInfo) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    if info.payment.is_none() {
        errors.payment = Some(ERR_PAYMENT);
    }
    if info.email.trim().is_empty() {
        errors.email = Some(ERR_EMAIL);
    }
    if info.phone.trim().is_empty() {
        errors.phone = Some(ERR_PHONE);
    }
    if info.address.trim().is_empty() {
        errors.address = Some(ERR_ADDRESS);
    }
    errors
}
